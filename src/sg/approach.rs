use super::{round2, ShotSg};
use crate::benchmarks::Benchmarks;
use crate::consts::{CHIP_BENCHMARK, CHIP_THRESHOLD_FEET};
use crate::lies::ApproachLie;

/// Fairway benchmark for the distance plus the lie penalty, rounded to cents.
pub fn approach_start_benchmark(b: &Benchmarks, distance: f64, lie: ApproachLie) -> f64 {
    round2(b.approach_fairway.linear(distance) + b.approach_lie.for_lie(lie))
}

/// Expected strokes left after a shot finishing `proximity_feet` away.
///
/// A missed green beyond `CHIP_THRESHOLD_FEET` is a chip situation with a
/// fixed benchmark; everything else reads the nearest proximity key.
pub fn proximity_benchmark(b: &Benchmarks, proximity_feet: f64, on_green: bool) -> f64 {
    if !on_green && proximity_feet > CHIP_THRESHOLD_FEET {
        return CHIP_BENCHMARK;
    }
    *b.proximity.nearest(proximity_feet)
}

pub fn approach_sg(
    b: &Benchmarks,
    distance: f64,
    lie: ApproachLie,
    proximity_feet: f64,
    on_green: bool,
) -> ShotSg {
    ShotSg::from_benchmarks(
        approach_start_benchmark(b, distance, lie),
        proximity_benchmark(b, proximity_feet, on_green),
    )
}
