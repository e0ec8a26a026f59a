pub mod approach;
pub mod putt;
pub mod short_game;
pub mod tee;

pub use self::approach::approach_sg;
pub use self::putt::{putt_sg, putting_benchmark};
pub use self::short_game::short_game_sg;
pub use self::tee::tee_shot_sg;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Result of one shot: expected strokes before, expected strokes after,
/// and the strokes gained against the benchmark.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotSg {
    pub start_benchmark: f64,
    pub end_benchmark: f64,
    pub sg: f64,
}

impl ShotSg {
    /// `start - end - 1`, the one being the stroke just played.
    pub fn from_benchmarks(start_benchmark: f64, end_benchmark: f64) -> Self {
        Self {
            start_benchmark,
            end_benchmark,
            sg: round2(start_benchmark - end_benchmark - 1.0),
        }
    }
}

/// Anything that carries a per-shot strokes-gained value.
pub trait StrokesGained {
    fn strokes_gained(&self) -> f64;
}

impl StrokesGained for ShotSg {
    fn strokes_gained(&self) -> f64 {
        self.sg
    }
}

impl<T: StrokesGained + ?Sized> StrokesGained for &T {
    fn strokes_gained(&self) -> f64 {
        (**self).strokes_gained()
    }
}

impl StrokesGained for f64 {
    fn strokes_gained(&self) -> f64 {
        *self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
pub enum ShotCategory {
    #[strum(serialize = "OTT")]
    OffTheTee,
    #[strum(serialize = "APP")]
    Approach,
    #[strum(serialize = "ARG")]
    AroundTheGreen,
    #[strum(serialize = "PUTT")]
    Putting,
}

/// Rounds to `places` decimals. Halves go up toward positive infinity,
/// so -0.125 becomes -0.12.
#[inline]
pub fn round_to(x: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (x * scale + 0.5).floor() / scale
}

#[inline]
pub fn round2(x: f64) -> f64 {
    round_to(x, 2)
}
