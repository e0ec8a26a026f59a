use super::shots::{ApproachShot, Putt, ShortGameShot, TeeShot};
use crate::benchmarks::Benchmarks;
use crate::course::HoleInfo;
use crate::lies::TeeLie;
use crate::sg::{round2, ShotCategory, StrokesGained};
use serde::{Deserialize, Serialize};

/// One hole of a round with its shots split by category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hole {
    pub hole_number: u8,
    pub par: u8,
    pub distance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tee_shot: Option<TeeShot>,
    #[serde(default)]
    pub approaches: Vec<ApproachShot>,
    #[serde(default)]
    pub short_game_shots: Vec<ShortGameShot>,
    #[serde(default)]
    pub putts: Vec<Putt>,
}

impl From<&HoleInfo> for Hole {
    fn from(info: &HoleInfo) -> Self {
        Self::new(info.number, info.par, info.yardage)
    }
}

impl Hole {
    pub fn new(hole_number: u8, par: u8, distance: f64) -> Self {
        Self {
            hole_number,
            par,
            distance,
            tee_shot: None,
            approaches: Vec::new(),
            short_game_shots: Vec::new(),
            putts: Vec::new(),
        }
    }

    pub fn has_shots(&self) -> bool {
        self.tee_shot.is_some()
            || !self.approaches.is_empty()
            || !self.short_game_shots.is_empty()
            || !self.putts.is_empty()
    }

    /// Ball in the cup: a made putt, or a holed approach or short game shot.
    pub fn is_holed_out(&self) -> bool {
        self.putts.iter().any(|p| p.made)
            || self.short_game_shots.iter().any(ShortGameShot::is_holed)
            || self.approaches.iter().any(ApproachShot::is_holed)
    }

    /// Penalty strokes on this hole (a penalty tee shot costs one).
    pub fn penalties(&self) -> u32 {
        self.tee_shot.as_ref().map_or(0, |t| t.is_penalty as u32)
    }

    /// Recorded strokes plus penalty strokes.
    pub fn strokes(&self) -> u32 {
        self.tee_shot.is_some() as u32
            + self.penalties()
            + self.approaches.len() as u32
            + self.short_game_shots.len() as u32
            + self.putts.len() as u32
    }

    /// Strokes taken, or par when nothing was recorded.
    pub fn score(&self) -> u32 {
        match self.strokes() {
            0 => self.par as u32,
            n => n,
        }
    }

    pub fn category_sg(&self, category: ShotCategory) -> f64 {
        match category {
            ShotCategory::OffTheTee => self.tee_shot.iter().map(|t| t.strokes_gained()).sum(),
            ShotCategory::Approach => self.approaches.iter().map(|a| a.strokes_gained()).sum(),
            ShotCategory::AroundTheGreen => self
                .short_game_shots
                .iter()
                .map(|s| s.strokes_gained())
                .sum(),
            ShotCategory::Putting => self.putts.iter().map(|p| p.strokes_gained()).sum(),
        }
    }

    pub fn sg_total(&self) -> f64 {
        round2(
            self.category_sg(ShotCategory::OffTheTee)
                + self.category_sg(ShotCategory::Approach)
                + self.category_sg(ShotCategory::AroundTheGreen)
                + self.category_sg(ShotCategory::Putting),
        )
    }

    /// Fairway hit on a driving hole. `None` on par 3s, which never count.
    pub fn fairway_hit(&self) -> Option<bool> {
        if self.par < 4 {
            return None;
        }
        Some(
            self.tee_shot
                .as_ref()
                .is_some_and(|t| t.lie == TeeLie::Fairway),
        )
    }

    /// Green reached by an approach with at most `par - 2` strokes used.
    pub fn green_in_regulation(&self) -> bool {
        let regulation = (self.par as u32).saturating_sub(2);
        let mut strokes_used = self.tee_shot.is_some() as u32;

        for approach in &self.approaches {
            strokes_used += 1;
            if approach.on_green && strokes_used <= regulation {
                return true;
            }
        }
        false
    }

    /// Removes the most recent shot, latest category first. Returns false on an empty hole.
    pub fn remove_last_shot(&mut self) -> bool {
        if self.putts.pop().is_some() {
            return true;
        }
        if self.short_game_shots.pop().is_some() {
            return true;
        }
        if self.approaches.pop().is_some() {
            return true;
        }
        self.tee_shot.take().is_some()
    }

    /// Number for the next putt on this hole.
    pub fn next_putt_number(&self) -> u8 {
        self.putts.len() as u8 + 1
    }

    /// Re-derives every shot's SG from its raw inputs.
    pub fn recompute(&mut self, b: &Benchmarks) {
        let (distance, par) = (self.distance, self.par);
        if let Some(tee) = self.tee_shot.as_mut() {
            tee.recompute(b, distance, par);
        }
        self.approaches.iter_mut().for_each(|a| a.recompute(b));
        self.short_game_shots.iter_mut().for_each(|s| s.recompute(b));
        self.putts.iter_mut().for_each(|p| p.recompute(b));
    }
}
