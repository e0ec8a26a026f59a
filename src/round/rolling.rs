use super::scorecard::Round;
use crate::config::StatsParams;
use crate::sg::{round2, round_to};
use serde::Serialize;

/// Dashboard figures over a recency window. Rebuilt from scratch on every call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub rounds_played: usize,
    pub window: usize,
    pub avg_to_par: f64,
    pub avg_sg_total: f64,
    pub avg_sg_ott: f64,
    pub avg_sg_app: f64,
    pub avg_sg_arg: f64,
    pub avg_sg_putt: f64,
    /// Whole percent
    pub avg_fir: f64,
    /// Whole percent
    pub avg_gir: f64,
    pub avg_putts: f64,
    pub low_round: u32,
    pub best_sg: f64,
    /// Latest trend window minus the one before it; negative is improving.
    pub score_trend: f64,
    pub sg_trend: f64,
}

fn mean<F>(rounds: &[Round], f: F) -> f64
where
    F: Fn(&Round) -> f64,
{
    if rounds.is_empty() {
        return 0.0;
    }
    rounds.iter().map(f).sum::<f64>() / rounds.len() as f64
}

/// Difference between the newest `n` rounds and the `n` before them.
/// Zero until `2 * n` rounds exist.
fn trend<F>(rounds: &[Round], n: usize, f: F) -> f64
where
    F: Fn(&Round) -> f64 + Copy,
{
    if n == 0 || rounds.len() < 2 * n {
        return 0.0;
    }
    round2(mean(&rounds[..n], f) - mean(&rounds[n..2 * n], f))
}

/// `rounds` must be ordered most recent first. Returns `None` when empty.
pub fn dashboard_stats(rounds: &[Round], params: &StatsParams) -> Option<DashboardStats> {
    if rounds.is_empty() {
        return None;
    }

    let recent = &rounds[..rounds.len().min(params.stats_window.max(1))];

    let low_round = rounds.iter().map(|r| r.score).min().unwrap_or_default();
    let best_sg = rounds
        .iter()
        .map(|r| r.sg.sg_total)
        .fold(f64::NEG_INFINITY, f64::max);

    Some(DashboardStats {
        rounds_played: rounds.len(),
        window: recent.len(),
        avg_to_par: round_to(mean(recent, |r| r.to_par() as f64), 1),
        avg_sg_total: round2(mean(recent, |r| r.sg.sg_total)),
        avg_sg_ott: round2(mean(recent, |r| r.sg.sg_ott)),
        avg_sg_app: round2(mean(recent, |r| r.sg.sg_app)),
        avg_sg_arg: round2(mean(recent, |r| r.sg.sg_arg)),
        avg_sg_putt: round2(mean(recent, |r| r.sg.sg_putt)),
        avg_fir: round_to(mean(recent, |r| r.stats.fir_pct) * 100.0, 0),
        avg_gir: round_to(mean(recent, |r| r.stats.gir_pct) * 100.0, 0),
        avg_putts: round_to(mean(recent, |r| r.stats.total_putts as f64), 1),
        low_round,
        best_sg,
        score_trend: trend(rounds, params.trend_window, |r| r.score as f64),
        sg_trend: trend(rounds, params.trend_window, |r| r.sg.sg_total),
    })
}
