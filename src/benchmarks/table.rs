use crate::error::{SgError, SgResult};
use serde::Serialize;
use tracing::debug;

/// A sparse benchmark table keyed by distance.
///
/// Keys are sorted once at construction and are strictly increasing, so every
/// lookup is a binary search over the key array. Inputs outside the key range
/// clamp to the boundary entry; nothing is extrapolated.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkTable<V> {
    keys: Vec<f64>,
    values: Vec<V>,
}

impl<V> BenchmarkTable<V> {
    /// Builds a table from `(key, value)` pairs in any order.
    ///
    /// Fails on an empty entry list, a non-finite key, or a repeated key.
    pub fn new(mut entries: Vec<(f64, V)>) -> SgResult<Self> {
        if entries.is_empty() {
            return Err(SgError::Table("table has no entries".to_string()));
        }
        if let Some((k, _)) = entries.iter().find(|(k, _)| !k.is_finite()) {
            return Err(SgError::Table(format!("non-finite key {}", k)));
        }

        entries.sort_by(|a, b| a.0.total_cmp(&b.0));

        if let Some(pair) = entries.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(SgError::Table(format!("duplicate key {}", pair[0].0)));
        }

        let (keys, values) = entries.into_iter().unzip();
        Ok(Self { keys, values })
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[f64] {
        &self.keys
    }

    pub fn min_key(&self) -> f64 {
        self.keys[0]
    }

    pub fn max_key(&self) -> f64 {
        self.keys[self.keys.len() - 1]
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, &V)> {
        self.keys.iter().copied().zip(self.values.iter())
    }

    /// Exact-key access.
    pub fn get(&self, key: f64) -> Option<&V> {
        self.keys
            .binary_search_by(|k| k.total_cmp(&key))
            .ok()
            .map(|i| &self.values[i])
    }

    // Index of the greatest key <= x, or 0 when x is below the range.
    #[inline(always)]
    fn floor_index(&self, x: f64) -> usize {
        self.keys.partition_point(|&k| k <= x).saturating_sub(1)
    }

    /// Step lookup: the value of the greatest key `<= x`, no interpolation.
    pub fn step(&self, x: f64) -> &V {
        &self.values[self.floor_index(x)]
    }

    /// Nearest-key lookup. Equidistant inputs resolve to the smaller key.
    pub fn nearest(&self, x: f64) -> &V {
        let upper = self.keys.partition_point(|&k| k < x);
        if upper == 0 {
            return &self.values[0];
        }
        if upper == self.keys.len() {
            return &self.values[upper - 1];
        }

        let lower = upper - 1;
        if x - self.keys[lower] <= self.keys[upper] - x {
            &self.values[lower]
        } else {
            &self.values[upper]
        }
    }

    /// Piecewise-linear lookup over a projected field of each value.
    pub fn linear_by<F>(&self, x: f64, field: F) -> f64
    where
        F: Fn(&V) -> f64,
    {
        let last = self.keys.len() - 1;

        // NaN reads the first entry.
        if x.is_nan() || x <= self.keys[0] {
            if x < self.keys[0] {
                debug!(x, min = self.keys[0], "clamped to lower table boundary");
            }
            return field(&self.values[0]);
        }
        if x >= self.keys[last] {
            if x > self.keys[last] {
                debug!(x, max = self.keys[last], "clamped to upper table boundary");
            }
            return field(&self.values[last]);
        }

        let i = self.floor_index(x);
        let (k0, k1) = (self.keys[i], self.keys[i + 1]);
        let (v0, v1) = (field(&self.values[i]), field(&self.values[i + 1]));

        v0 + (x - k0) / (k1 - k0) * (v1 - v0)
    }
}

impl BenchmarkTable<f64> {
    pub fn linear(&self, x: f64) -> f64 {
        self.linear_by(x, |v| *v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(f64, f64)]) -> BenchmarkTable<f64> {
        BenchmarkTable::new(entries.to_vec()).unwrap()
    }

    #[test]
    fn test_new_sorts_unordered_entries() {
        let t = table(&[(20.0, 2.0), (0.0, 0.5), (10.0, 1.0)]);
        assert_eq!(t.keys(), &[0.0, 10.0, 20.0]);
        assert_eq!(t.get(10.0), Some(&1.0));
    }

    #[test]
    fn test_new_rejects_bad_input() {
        assert!(BenchmarkTable::<f64>::new(vec![]).is_err());
        assert!(BenchmarkTable::new(vec![(1.0, 1.0), (1.0, 2.0)]).is_err());
        assert!(BenchmarkTable::new(vec![(f64::NAN, 1.0)]).is_err());
    }

    #[test]
    fn test_linear_midpoint() {
        let t = table(&[(0.0, 1.0), (10.0, 2.0)]);
        assert!((t.linear(5.0) - 1.5).abs() < 1e-12);
        assert!((t.linear(2.5) - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_linear_clamps_and_handles_nan() {
        let t = table(&[(10.0, 1.0), (20.0, 2.0)]);
        assert_eq!(t.linear(-5.0), 1.0);
        assert_eq!(t.linear(99.0), 2.0);
        assert_eq!(t.linear(f64::NAN), 1.0);
    }

    #[test]
    fn test_step_takes_floor_bracket() {
        let t = table(&[(0.0, 1.0), (50.0, 2.0), (100.0, 3.0)]);
        assert_eq!(*t.step(49.9), 1.0);
        assert_eq!(*t.step(50.0), 2.0);
        assert_eq!(*t.step(1000.0), 3.0);
        assert_eq!(*t.step(-1.0), 1.0);
    }

    #[test]
    fn test_nearest_tie_goes_to_smaller_key() {
        let t = table(&[(10.0, 1.0), (20.0, 2.0)]);
        assert_eq!(*t.nearest(15.0), 1.0);
        assert_eq!(*t.nearest(15.1), 2.0);
        assert_eq!(*t.nearest(20.0), 2.0);
        assert_eq!(*t.nearest(0.0), 1.0);
        assert_eq!(*t.nearest(500.0), 2.0);
    }

    #[test]
    fn test_single_entry_table() {
        let t = table(&[(5.0, 7.0)]);
        assert_eq!(t.linear(1.0), 7.0);
        assert_eq!(t.linear(9.0), 7.0);
        assert_eq!(*t.step(9.0), 7.0);
        assert_eq!(*t.nearest(9.0), 7.0);
    }
}
