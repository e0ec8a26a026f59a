pub mod data;
pub mod table;

pub use self::table::BenchmarkTable;
use crate::error::SgResult;
use crate::lies::{ApproachLie, PositionCategory, ShortGameLie};
use once_cell::sync::Lazy;
use serde::Serialize;

/// One distance bracket of the post-tee-shot position table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PositionRow {
    pub fairway: f64,
    pub rough: f64,
    pub heavy_rough: f64,
    pub trees: f64,
    pub bunker: f64,
    pub penalty: Option<f64>,
}

impl PositionRow {
    /// Benchmark for a category; a missing column reads the Rough value.
    pub fn value(&self, category: PositionCategory) -> f64 {
        match category {
            PositionCategory::Fairway => self.fairway,
            PositionCategory::Rough => self.rough,
            PositionCategory::HeavyRough => self.heavy_rough,
            PositionCategory::Trees => self.trees,
            PositionCategory::Bunker => self.bunker,
            PositionCategory::Penalty => self.penalty.unwrap_or(self.rough),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PuttBenchmark {
    pub avg_putts: f64,
    pub make_percent: f64,
}

/// Additive stroke penalty on the approach starting benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LieAdjustment {
    pub fairway: f64,
    pub rough: f64,
    pub heavy_rough: f64,
    pub trees: f64,
    pub fairway_bunker: f64,
}

impl LieAdjustment {
    pub fn for_lie(&self, lie: ApproachLie) -> f64 {
        match lie {
            ApproachLie::Fairway => self.fairway,
            ApproachLie::Rough => self.rough,
            ApproachLie::HeavyRough => self.heavy_rough,
            ApproachLie::Trees => self.trees,
            ApproachLie::FairwayBunker => self.fairway_bunker,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ShortGameTables {
    pub fringe: BenchmarkTable<f64>,
    pub fairway_first_cut: BenchmarkTable<f64>,
    pub rough: BenchmarkTable<f64>,
    pub heavy_rough: BenchmarkTable<f64>,
    pub greenside_bunker: BenchmarkTable<f64>,
    pub fairway_bunker: BenchmarkTable<f64>,
}

impl ShortGameTables {
    pub fn for_lie(&self, lie: ShortGameLie) -> &BenchmarkTable<f64> {
        match lie {
            ShortGameLie::Fringe => &self.fringe,
            ShortGameLie::FairwayFirstCut => &self.fairway_first_cut,
            ShortGameLie::Rough => &self.rough,
            ShortGameLie::HeavyRough => &self.heavy_rough,
            ShortGameLie::GreensideBunker => &self.greenside_bunker,
            ShortGameLie::FairwayBunker => &self.fairway_bunker,
        }
    }
}

/// The full set of reference tables the calculators read from.
///
/// Built once; nothing mutates it afterwards, so a shared reference can be
/// used from any number of threads.
#[derive(Debug, Clone, Serialize)]
pub struct Benchmarks {
    pub tee_par4: BenchmarkTable<f64>,
    pub tee_par5: BenchmarkTable<f64>,
    pub position: BenchmarkTable<PositionRow>,
    pub approach_fairway: BenchmarkTable<f64>,
    pub approach_lie: LieAdjustment,
    pub short_game: ShortGameTables,
    pub putting: BenchmarkTable<PuttBenchmark>,
    pub proximity: BenchmarkTable<f64>,
}

impl Benchmarks {
    /// Builds the tour-average tables from the embedded reference data.
    pub fn pga_tour() -> SgResult<Self> {
        Ok(Self {
            tee_par4: BenchmarkTable::new(data::TEE_SHOT_PAR4.to_vec())?,
            tee_par5: BenchmarkTable::new(data::TEE_SHOT_PAR5.to_vec())?,
            position: BenchmarkTable::new(data::POSITION.to_vec())?,
            approach_fairway: BenchmarkTable::new(data::APPROACH_FAIRWAY.to_vec())?,
            approach_lie: data::APPROACH_LIE_ADJUSTMENT,
            short_game: ShortGameTables {
                fringe: BenchmarkTable::new(data::SHORT_GAME_FRINGE.to_vec())?,
                fairway_first_cut: BenchmarkTable::new(data::SHORT_GAME_FAIRWAY.to_vec())?,
                rough: BenchmarkTable::new(data::SHORT_GAME_ROUGH.to_vec())?,
                heavy_rough: BenchmarkTable::new(data::SHORT_GAME_HEAVY_ROUGH.to_vec())?,
                greenside_bunker: BenchmarkTable::new(
                    data::SHORT_GAME_GREENSIDE_BUNKER.to_vec(),
                )?,
                fairway_bunker: BenchmarkTable::new(data::SHORT_GAME_FAIRWAY_BUNKER.to_vec())?,
            },
            putting: BenchmarkTable::new(data::PUTTING.to_vec())?,
            proximity: BenchmarkTable::new(data::PROXIMITY_TO_PUTTS.to_vec())?,
        })
    }

    /// The tee-shot starting table for a par. Anything but a 5 uses the par-4 table.
    pub fn tee_table(&self, par: u8) -> &BenchmarkTable<f64> {
        if par == 5 {
            &self.tee_par5
        } else {
            &self.tee_par4
        }
    }
}

static PGA_TOUR: Lazy<Benchmarks> = Lazy::new(|| {
    Benchmarks::pga_tour().unwrap_or_else(|e| panic!("❌ Embedded benchmark data is invalid: {}", e))
});

/// Process-wide tour-average tables, built on first use.
pub fn standard() -> &'static Benchmarks {
    &PGA_TOUR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_tables_build() {
        let b = Benchmarks::pga_tour().unwrap();
        assert_eq!(b.tee_par4.len(), 9);
        assert_eq!(b.putting.len(), 39);
        assert_eq!(b.proximity.max_key(), 120.0);
    }

    #[test]
    fn test_missing_penalty_column_reads_rough() {
        let row = PositionRow {
            fairway: 2.0,
            rough: 2.5,
            heavy_rough: 2.7,
            trees: 2.9,
            bunker: 2.6,
            penalty: None,
        };
        assert_eq!(row.value(PositionCategory::Penalty), 2.5);
    }
}
