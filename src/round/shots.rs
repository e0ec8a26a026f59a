use crate::benchmarks::Benchmarks;
use crate::error::{SgError, SgResult};
use crate::lies::{ApproachLie, PuttBreak, PuttSlope, ShortGameLie, ShortGameShotType, TeeLie};
use crate::sg::{self, ShotSg, StrokesGained};
use serde::{Deserialize, Serialize};

// Each record keeps the raw inputs next to the derived `ShotSg`. The derived
// values only change through an explicit `recompute`.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeeShot {
    pub club: String,
    pub drive_distance: f64,
    pub distance_remaining: f64,
    pub lie: TeeLie,
    pub is_penalty: bool,
    #[serde(flatten)]
    pub result: ShotSg,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TeeShot {
    /// Records a tee shot on a hole of `hole_distance` yards.
    ///
    /// Either distance may be omitted; it is then the hole length minus the
    /// other. The `P` lie always counts as a penalty.
    pub fn new(
        b: &Benchmarks,
        hole_distance: f64,
        par: u8,
        club: impl Into<String>,
        drive_distance: Option<f64>,
        distance_remaining: Option<f64>,
        lie: TeeLie,
    ) -> SgResult<Self> {
        let (drive_distance, distance_remaining) = match (drive_distance, distance_remaining) {
            (Some(d), Some(r)) => (d, r),
            (Some(d), None) => (d, hole_distance - d),
            (None, Some(r)) => (hole_distance - r, r),
            (None, None) => {
                return Err(SgError::Validation(
                    "tee shot needs a drive distance or a remaining distance".to_string(),
                ))
            }
        };

        let mut shot = Self {
            club: club.into(),
            drive_distance,
            distance_remaining,
            lie,
            is_penalty: lie == TeeLie::Penalty,
            result: ShotSg::default(),
            notes: None,
        };
        shot.recompute(b, hole_distance, par);
        Ok(shot)
    }

    pub fn recompute(&mut self, b: &Benchmarks, hole_distance: f64, par: u8) {
        self.result = sg::tee_shot_sg(
            b,
            hole_distance,
            par,
            self.distance_remaining,
            self.lie.category(),
            self.is_penalty,
        );
    }
}

/// An approach or layup. A layup is simply an approach that stayed off the green.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproachShot {
    pub starting_distance: f64,
    pub starting_lie: ApproachLie,
    pub club: String,
    pub on_green: bool,
    pub proximity_feet: f64,
    #[serde(flatten)]
    pub result: ShotSg,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ApproachShot {
    pub fn new(
        b: &Benchmarks,
        starting_distance: f64,
        starting_lie: ApproachLie,
        club: impl Into<String>,
        on_green: bool,
        proximity_feet: f64,
    ) -> Self {
        let mut shot = Self {
            starting_distance,
            starting_lie,
            club: club.into(),
            on_green,
            proximity_feet,
            result: ShotSg::default(),
            notes: None,
        };
        shot.recompute(b);
        shot
    }

    /// Proximity zero reads the zero key of the proximity table.
    pub fn is_holed(&self) -> bool {
        self.proximity_feet == 0.0
    }

    pub fn recompute(&mut self, b: &Benchmarks) {
        self.result = sg::approach_sg(
            b,
            self.starting_distance,
            self.starting_lie,
            self.proximity_feet,
            self.on_green,
        );
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortGameShot {
    pub starting_distance: f64,
    pub starting_lie: ShortGameLie,
    #[serde(default)]
    pub shot_type: ShortGameShotType,
    pub club: String,
    pub proximity_feet: f64,
    #[serde(flatten)]
    pub result: ShotSg,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ShortGameShot {
    pub fn new(
        b: &Benchmarks,
        starting_distance: f64,
        starting_lie: ShortGameLie,
        shot_type: ShortGameShotType,
        club: impl Into<String>,
        proximity_feet: f64,
    ) -> Self {
        let mut shot = Self {
            starting_distance,
            starting_lie,
            shot_type,
            club: club.into(),
            proximity_feet,
            result: ShotSg::default(),
            notes: None,
        };
        shot.recompute(b);
        shot
    }

    pub fn is_holed(&self) -> bool {
        self.proximity_feet == 0.0
    }

    pub fn recompute(&mut self, b: &Benchmarks) {
        self.result = sg::short_game_sg(
            b,
            self.starting_distance,
            self.starting_lie,
            self.proximity_feet,
        );
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Putt {
    pub putt_number: u8,
    pub distance_feet: f64,
    pub made: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_distance_feet: Option<f64>,
    #[serde(default, rename = "break")]
    pub break_dir: PuttBreak,
    #[serde(default)]
    pub slope: PuttSlope,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub green_speed: Option<f64>,
    #[serde(flatten)]
    pub result: ShotSg,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Putt {
    /// A made putt never carries a remaining distance.
    pub fn new(
        b: &Benchmarks,
        putt_number: u8,
        distance_feet: f64,
        made: bool,
        remaining_distance_feet: Option<f64>,
    ) -> Self {
        let mut putt = Self {
            putt_number,
            distance_feet,
            made,
            remaining_distance_feet: if made { None } else { remaining_distance_feet },
            break_dir: PuttBreak::default(),
            slope: PuttSlope::default(),
            green_speed: None,
            result: ShotSg::default(),
            notes: None,
        };
        putt.recompute(b);
        putt
    }

    /// Attaches the green read. It is recorded only and never changes the SG.
    pub fn with_read(
        mut self,
        break_dir: PuttBreak,
        slope: PuttSlope,
        green_speed: Option<f64>,
    ) -> Self {
        self.break_dir = break_dir;
        self.slope = slope;
        self.green_speed = green_speed;
        self
    }

    pub fn recompute(&mut self, b: &Benchmarks) {
        self.result = sg::putt_sg(
            b,
            self.distance_feet,
            self.made,
            self.remaining_distance_feet,
        );
    }
}

macro_rules! impl_strokes_gained {
    ($($ty:ty),*) => {
        $(
            impl StrokesGained for $ty {
                fn strokes_gained(&self) -> f64 {
                    self.result.sg
                }
            }
        )*
    };
}

impl_strokes_gained!(TeeShot, ApproachShot, ShortGameShot, Putt);
