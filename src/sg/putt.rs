use super::ShotSg;
use crate::benchmarks::Benchmarks;
use crate::consts::{DEFAULT_MISS_FEET, GIMME_BENCHMARK, GIMME_DISTANCE_FEET};

/// Expected putts from `distance_feet`, interpolated over the putting table.
pub fn putting_benchmark(b: &Benchmarks, distance_feet: f64) -> f64 {
    if distance_feet <= GIMME_DISTANCE_FEET {
        return GIMME_BENCHMARK;
    }
    b.putting.linear_by(distance_feet, |p| p.avg_putts)
}

/// Tour make rate from `distance_feet`, interpolated like `putting_benchmark`.
pub fn make_probability(b: &Benchmarks, distance_feet: f64) -> f64 {
    b.putting.linear_by(distance_feet, |p| p.make_percent)
}

/// A miss with no usable follow-up distance leaves `DEFAULT_MISS_FEET`.
pub fn putt_sg(
    b: &Benchmarks,
    distance_feet: f64,
    made: bool,
    remaining_distance_feet: Option<f64>,
) -> ShotSg {
    let start = putting_benchmark(b, distance_feet);
    let end = if made {
        0.0
    } else {
        let remaining = remaining_distance_feet
            .filter(|d| *d > 0.0)
            .unwrap_or(DEFAULT_MISS_FEET);
        putting_benchmark(b, remaining)
    };
    ShotSg::from_benchmarks(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmarks::standard;

    #[test]
    fn test_make_probability_falls_with_distance() {
        let b = standard();
        assert_eq!(make_probability(b, 1.0), 1.0);
        assert!((make_probability(b, 7.5) - 0.48).abs() < 1e-9);
        assert_eq!(make_probability(b, 400.0), 0.03);
    }

    #[test]
    fn test_missed_putt_from_inside_a_foot() {
        let r = putt_sg(standard(), 1.0, false, Some(0.5));
        assert_eq!(r.start_benchmark, 1.0);
        assert_eq!(r.end_benchmark, 1.0);
        assert_eq!(r.sg, -1.0);
    }
}
