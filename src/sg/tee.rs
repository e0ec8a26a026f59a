use super::ShotSg;
use crate::benchmarks::Benchmarks;
use crate::consts::{PAR3_START_BENCHMARK, PENALTY_END_BENCHMARK};
use crate::lies::PositionCategory;

/// Expected strokes from the tee. Par 3s are pinned to `PAR3_START_BENCHMARK`.
pub fn tee_start_benchmark(b: &Benchmarks, hole_distance: f64, par: u8) -> f64 {
    if par == 3 {
        return PAR3_START_BENCHMARK;
    }
    b.tee_table(par).linear(hole_distance)
}

/// Expected strokes from where the tee shot finished.
pub fn tee_end_benchmark(
    b: &Benchmarks,
    distance_remaining: f64,
    category: PositionCategory,
    is_penalty: bool,
) -> f64 {
    if is_penalty {
        return PENALTY_END_BENCHMARK;
    }
    b.position.step(distance_remaining).value(category)
}

pub fn tee_shot_sg(
    b: &Benchmarks,
    hole_distance: f64,
    par: u8,
    distance_remaining: f64,
    category: PositionCategory,
    is_penalty: bool,
) -> ShotSg {
    ShotSg::from_benchmarks(
        tee_start_benchmark(b, hole_distance, par),
        tee_end_benchmark(b, distance_remaining, category, is_penalty),
    )
}
