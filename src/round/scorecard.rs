use super::hole::Hole;
use super::summary::{calculate_round_sg, RoundSgSummary};
use crate::benchmarks::Benchmarks;
use crate::course::{NineSelection, TeeBox};
use crate::error::{SgError, SgResult};
use crate::sg::round2;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// A round being entered hole by hole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveRound {
    pub date: String,
    pub course_name: String,
    pub tee_box_name: String,
    pub course_rating: f64,
    pub course_slope: u32,
    pub current_hole: u8,
    pub holes: Vec<Hole>,
    #[serde(default)]
    pub nine: NineSelection,
}

/// Traditional (non-SG) round statistics.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundStats {
    pub fir: u32,
    pub fir_pct: f64,
    pub gir: u32,
    pub gir_pct: f64,
    pub total_putts: u32,
    pub penalties: u32,
}

/// A completed round with its derived aggregates stored next to the raw holes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub date: String,
    pub course_name: String,
    pub tee_box_name: String,
    pub course_rating: f64,
    pub course_slope: u32,
    pub score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_score: Option<u32>,
    pub par: u32,
    #[serde(flatten)]
    pub sg: RoundSgSummary,
    #[serde(flatten)]
    pub stats: RoundStats,
    pub holes: Vec<Hole>,
    #[serde(default)]
    pub nine: NineSelection,
}

impl ActiveRound {
    /// Seeds an empty round from a tee box card.
    pub fn start(
        date: impl Into<String>,
        course_name: impl Into<String>,
        tee_box: &TeeBox,
        nine: NineSelection,
    ) -> SgResult<Self> {
        let infos = tee_box.holes_for_round(nine);
        if infos.is_empty() {
            return Err(SgError::Validation(format!(
                "tee box '{}' has no holes for a {} round",
                tee_box.name, nine
            )));
        }

        Ok(Self {
            date: date.into(),
            course_name: course_name.into(),
            tee_box_name: tee_box.name.clone(),
            course_rating: tee_box.rating,
            course_slope: tee_box.slope,
            current_hole: nine.first_hole(),
            holes: infos.iter().map(Hole::from).collect(),
            nine,
        })
    }

    pub fn hole_mut(&mut self, hole_number: u8) -> Option<&mut Hole> {
        self.holes.iter_mut().find(|h| h.hole_number == hole_number)
    }

    fn holes_before_current(&self) -> impl Iterator<Item = &Hole> {
        let current = self.current_hole;
        self.holes.iter().filter(move |h| h.hole_number < current)
    }

    /// Strokes recorded on holes before the current one. Empty holes count 0.
    pub fn running_score(&self) -> u32 {
        self.holes_before_current().map(Hole::strokes).sum()
    }

    pub fn running_to_par(&self) -> i64 {
        let par: u32 = self.holes_before_current().map(|h| h.par as u32).sum();
        self.running_score() as i64 - par as i64
    }

    /// Score as it would be finalized: empty holes count as par.
    pub fn calculated_score(&self) -> u32 {
        self.holes.iter().map(Hole::score).sum()
    }

    pub fn complete(self, manual_score: Option<u32>) -> Round {
        let mut round = Round {
            date: self.date,
            course_name: self.course_name,
            tee_box_name: self.tee_box_name,
            course_rating: self.course_rating,
            course_slope: self.course_slope,
            score: 0,
            manual_score: manual_score.filter(|s| *s > 0),
            par: 0,
            sg: RoundSgSummary::default(),
            stats: RoundStats::default(),
            holes: self.holes,
            nine: self.nine,
        };
        round.refresh_aggregates();

        info!(
            course = %round.course_name,
            score = round.score,
            sg_total = round.sg.sg_total,
            "round completed"
        );
        round
    }
}

impl Round {
    pub fn load_history<P: AsRef<Path>>(path: P) -> SgResult<Vec<Round>> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn to_par(&self) -> i64 {
        self.score as i64 - self.par as i64
    }

    /// Recomputes every stored aggregate from the holes' shots.
    pub fn refresh_aggregates(&mut self) {
        self.sg = round_sg_summary(&self.holes);
        self.stats = round_stats(&self.holes);
        self.par = self.holes.iter().map(|h| h.par as u32).sum();
        let calculated = self.holes.iter().map(Hole::score).sum();
        self.score = self.manual_score.unwrap_or(calculated);
    }

    /// Re-derives every shot against `b`, then the aggregates.
    pub fn rederive(&mut self, b: &Benchmarks) {
        self.holes.iter_mut().for_each(|h| h.recompute(b));
        self.refresh_aggregates();
    }
}

/// Re-derives a whole history in parallel.
pub fn rederive_all(rounds: &mut [Round], b: &Benchmarks) {
    rounds.par_iter_mut().for_each(|r| r.rederive(b));
}

pub fn round_sg_summary(holes: &[Hole]) -> RoundSgSummary {
    let tee_shots: Vec<_> = holes.iter().filter_map(|h| h.tee_shot.as_ref()).collect();
    let approaches: Vec<_> = holes.iter().flat_map(|h| h.approaches.iter()).collect();
    let short_game: Vec<_> = holes.iter().flat_map(|h| h.short_game_shots.iter()).collect();
    let putts: Vec<_> = holes.iter().flat_map(|h| h.putts.iter()).collect();

    calculate_round_sg(&tee_shots, &approaches, &short_game, &putts)
}

/// FIR over par-4/5 holes, GIR over every hole. Percentages are fractions in cents.
pub fn round_stats(holes: &[Hole]) -> RoundStats {
    let driving: Vec<bool> = holes.iter().filter_map(Hole::fairway_hit).collect();
    let fir = driving.iter().filter(|hit| **hit).count() as u32;
    let gir = holes.iter().filter(|h| h.green_in_regulation()).count() as u32;

    RoundStats {
        fir,
        fir_pct: fraction(fir, driving.len()),
        gir,
        gir_pct: fraction(gir, holes.len()),
        total_putts: holes.iter().map(|h| h.putts.len() as u32).sum(),
        penalties: holes.iter().map(Hole::penalties).sum(),
    }
}

fn fraction(hits: u32, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(hits as f64 / total as f64)
}
