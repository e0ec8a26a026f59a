use crate::sg::{round2, ShotCategory, StrokesGained};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Round-level strokes gained by category. Always derived from shot data.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundSgSummary {
    #[serde(rename = "sgTotal")]
    pub sg_total: f64,
    #[serde(rename = "sgOTT")]
    pub sg_ott: f64,
    #[serde(rename = "sgAPP")]
    pub sg_app: f64,
    #[serde(rename = "sgARG")]
    pub sg_arg: f64,
    #[serde(rename = "sgPUTT")]
    pub sg_putt: f64,
}

impl RoundSgSummary {
    pub fn category(&self, category: ShotCategory) -> f64 {
        match category {
            ShotCategory::OffTheTee => self.sg_ott,
            ShotCategory::Approach => self.sg_app,
            ShotCategory::AroundTheGreen => self.sg_arg,
            ShotCategory::Putting => self.sg_putt,
        }
    }
}

fn category_sum<T: StrokesGained>(shots: &[T]) -> f64 {
    round2(shots.iter().map(StrokesGained::strokes_gained).sum())
}

/// Sums each category and the total. Each category is rounded to cents on
/// its own and the total is the rounded sum of those rounded categories.
/// Empty lists contribute 0.
pub fn calculate_round_sg<T, A, S, P>(
    tee_shots: &[T],
    approaches: &[A],
    short_game: &[S],
    putts: &[P],
) -> RoundSgSummary
where
    T: StrokesGained,
    A: StrokesGained,
    S: StrokesGained,
    P: StrokesGained,
{
    let sg_ott = category_sum(tee_shots);
    let sg_app = category_sum(approaches);
    let sg_arg = category_sum(short_game);
    let sg_putt = category_sum(putts);

    let summary = RoundSgSummary {
        sg_total: round2(sg_ott + sg_app + sg_arg + sg_putt),
        sg_ott,
        sg_app,
        sg_arg,
        sg_putt,
    };

    debug!(
        shots = tee_shots.len() + approaches.len() + short_game.len() + putts.len(),
        sg_total = summary.sg_total,
        "round strokes gained aggregated"
    );
    summary
}
