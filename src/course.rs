use crate::consts::{FULL_ROUND_HOLES, NINE_HOLES};
use crate::error::{SgError, SgResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoleInfo {
    pub number: u8,
    pub par: u8,
    pub yardage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeeBox {
    pub name: String,
    pub rating: f64,
    pub slope: u32,
    pub holes: Vec<HoleInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub tee_boxes: Vec<TeeBox>,
}

/// Which holes of an 18-hole card a round covers.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NineSelection {
    #[default]
    Full,
    Front,
    Back,
}

impl Course {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SgResult<Self> {
        let content = fs::read_to_string(path)?;
        let course: Self = serde_json::from_str(&content)?;
        course.tee_boxes.iter().try_for_each(TeeBox::validate)?;
        Ok(course)
    }

    /// Tee box by name, ignoring case.
    pub fn tee_box(&self, name: &str) -> Option<&TeeBox> {
        self.tee_boxes
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }
}

impl NineSelection {
    pub fn is_nine_hole(self) -> bool {
        self != Self::Full
    }

    pub fn first_hole(self) -> u8 {
        match self {
            Self::Back => NINE_HOLES as u8 + 1,
            _ => 1,
        }
    }
}

impl TeeBox {
    /// A placeholder card: 18 par-4 holes of 400 yards, rated 72.0 / 113.
    pub fn empty(name: impl Into<String>) -> Self {
        let holes = (1..=FULL_ROUND_HOLES as u8)
            .map(|number| HoleInfo {
                number,
                par: 4,
                yardage: 400.0,
            })
            .collect();

        Self {
            name: name.into(),
            rating: 72.0,
            slope: 113,
            holes,
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SgResult<Self> {
        let content = fs::read_to_string(path)?;
        let tee_box: Self = serde_json::from_str(&content)?;
        tee_box.validate()?;
        Ok(tee_box)
    }

    pub fn validate(&self) -> SgResult<()> {
        if self.holes.is_empty() {
            return Err(SgError::Validation(format!(
                "tee box '{}' has no holes",
                self.name
            )));
        }
        if let Some(h) = self.holes.iter().find(|h| !(3..=5).contains(&h.par)) {
            return Err(SgError::Validation(format!(
                "hole {} has par {}, expected 3-5",
                h.number, h.par
            )));
        }
        Ok(())
    }

    /// (total yardage, total par)
    pub fn totals(&self) -> (f64, u32) {
        self.holes.iter().fold((0.0, 0), |(yards, par), h| {
            (yards + h.yardage, par + h.par as u32)
        })
    }

    /// The holes played for a selection. Front is 1-9, back is 10-18.
    pub fn holes_for_round(&self, nine: NineSelection) -> &[HoleInfo] {
        let n = self.holes.len();
        match nine {
            NineSelection::Full => &self.holes,
            NineSelection::Front => &self.holes[..n.min(NINE_HOLES)],
            NineSelection::Back => &self.holes[n.min(NINE_HOLES)..n.min(FULL_ROUND_HOLES)],
        }
    }
}
