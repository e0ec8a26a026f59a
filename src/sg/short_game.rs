use super::approach::proximity_benchmark;
use super::ShotSg;
use crate::benchmarks::Benchmarks;
use crate::lies::ShortGameLie;

pub fn short_game_start_benchmark(b: &Benchmarks, distance: f64, lie: ShortGameLie) -> f64 {
    *b.short_game.for_lie(lie).step(distance)
}

/// A proximity of exactly zero means the shot was holed.
pub fn short_game_sg(
    b: &Benchmarks,
    distance: f64,
    lie: ShortGameLie,
    proximity_feet: f64,
) -> ShotSg {
    let end = if proximity_feet == 0.0 {
        0.0
    } else {
        proximity_benchmark(b, proximity_feet, true)
    };
    ShotSg::from_benchmarks(short_game_start_benchmark(b, distance, lie), end)
}
