use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

/// Coarse position after a tee shot. Columns of the position benchmark table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
pub enum PositionCategory {
    #[strum(serialize = "F")]
    #[serde(rename = "F")]
    Fairway,
    #[strum(serialize = "R")]
    #[serde(rename = "R")]
    Rough,
    #[strum(serialize = "HR")]
    #[serde(rename = "HR")]
    HeavyRough,
    #[strum(serialize = "T")]
    #[serde(rename = "T")]
    Trees,
    #[strum(serialize = "B")]
    #[serde(rename = "B")]
    Bunker,
    #[strum(serialize = "P")]
    #[serde(rename = "P")]
    Penalty,
}

/// Where a tee shot finished. Left/right variants carry no benchmark
/// difference; they collapse onto one `PositionCategory`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
pub enum TeeLie {
    #[strum(serialize = "F")]
    #[serde(rename = "F")]
    Fairway,
    #[strum(serialize = "RL")]
    #[serde(rename = "RL")]
    RoughLeft,
    #[strum(serialize = "RR")]
    #[serde(rename = "RR")]
    RoughRight,
    #[strum(serialize = "LR")]
    #[serde(rename = "LR")]
    LightRough,
    #[strum(serialize = "HRL")]
    #[serde(rename = "HRL")]
    HeavyRoughLeft,
    #[strum(serialize = "HRR")]
    #[serde(rename = "HRR")]
    HeavyRoughRight,
    #[strum(serialize = "TL")]
    #[serde(rename = "TL")]
    TreesLeft,
    #[strum(serialize = "TR")]
    #[serde(rename = "TR")]
    TreesRight,
    #[strum(serialize = "BL")]
    #[serde(rename = "BL")]
    BunkerLeft,
    #[strum(serialize = "BR")]
    #[serde(rename = "BR")]
    BunkerRight,
    #[strum(serialize = "P")]
    #[serde(rename = "P")]
    Penalty,
}

impl TeeLie {
    /// Parses a lie code; unknown codes become a plain Rough lie.
    pub fn from_code(code: &str) -> Self {
        Self::from_str(code.trim()).unwrap_or_else(|_| {
            debug!(code, "unknown tee lie code, using Rough");
            Self::LightRough
        })
    }

    pub fn category(self) -> PositionCategory {
        match self {
            Self::Fairway => PositionCategory::Fairway,
            Self::RoughLeft | Self::RoughRight | Self::LightRough => PositionCategory::Rough,
            Self::HeavyRoughLeft | Self::HeavyRoughRight => PositionCategory::HeavyRough,
            Self::TreesLeft | Self::TreesRight => PositionCategory::Trees,
            Self::BunkerLeft | Self::BunkerRight => PositionCategory::Bunker,
            Self::Penalty => PositionCategory::Penalty,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Fairway => "Fairway",
            Self::RoughLeft => "Rough Left",
            Self::RoughRight => "Rough Right",
            Self::LightRough => "Light Rough",
            Self::HeavyRoughLeft => "Heavy Rough Left",
            Self::HeavyRoughRight => "Heavy Rough Right",
            Self::TreesLeft => "Trees Left",
            Self::TreesRight => "Trees Right",
            Self::BunkerLeft => "Bunker Left",
            Self::BunkerRight => "Bunker Right",
            Self::Penalty => "Penalty",
        }
    }
}

/// Maps a raw tee-shot lie code to its benchmark column. Unknown codes land in Rough.
pub fn position_category_for_code(code: &str) -> PositionCategory {
    match TeeLie::from_str(code.trim()) {
        Ok(lie) => lie.category(),
        Err(_) => {
            debug!(code, "unknown tee lie code, using Rough");
            PositionCategory::Rough
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
pub enum ApproachLie {
    #[strum(serialize = "F")]
    #[serde(rename = "F")]
    Fairway,
    #[strum(serialize = "R")]
    #[serde(rename = "R")]
    Rough,
    #[strum(serialize = "HR")]
    #[serde(rename = "HR")]
    HeavyRough,
    #[strum(serialize = "T")]
    #[serde(rename = "T")]
    Trees,
    #[strum(serialize = "FB")]
    #[serde(rename = "FB")]
    FairwayBunker,
}

impl ApproachLie {
    /// Parses a lie code; unknown codes take the Rough adjustment.
    pub fn from_code(code: &str) -> Self {
        Self::from_str(code.trim()).unwrap_or_else(|_| {
            debug!(code, "unknown approach lie code, using Rough");
            Self::Rough
        })
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Fairway => "Fairway",
            Self::Rough => "Rough",
            Self::HeavyRough => "Heavy Rough",
            Self::Trees => "Trees/Trouble",
            Self::FairwayBunker => "Fairway Bunker",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
pub enum ShortGameLie {
    #[strum(serialize = "GF")]
    #[serde(rename = "GF")]
    Fringe,
    #[strum(serialize = "FR")]
    #[serde(rename = "FR")]
    FairwayFirstCut,
    #[strum(serialize = "R")]
    #[serde(rename = "R")]
    Rough,
    #[strum(serialize = "HR")]
    #[serde(rename = "HR")]
    HeavyRough,
    #[strum(serialize = "GBS")]
    #[serde(rename = "GBS")]
    GreensideBunker,
    #[strum(serialize = "FBS")]
    #[serde(rename = "FBS")]
    FairwayBunker,
}

impl ShortGameLie {
    /// Parses a lie code; unknown codes use the fairway/first-cut table.
    pub fn from_code(code: &str) -> Self {
        Self::from_str(code.trim()).unwrap_or_else(|_| {
            debug!(code, "unknown short game lie code, using FR");
            Self::FairwayFirstCut
        })
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Fringe => "Green Fringe",
            Self::FairwayFirstCut => "Fairway/First Cut",
            Self::Rough => "Rough",
            Self::HeavyRough => "Heavy Rough",
            Self::GreensideBunker => "Greenside Bunker",
            Self::FairwayBunker => "Fairway Bunker",
        }
    }
}

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
)]
pub enum ShortGameShotType {
    #[default]
    Chip,
    Pitch,
    Flop,
    Bunker,
}

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
)]
pub enum PuttBreak {
    #[strum(serialize = "RL")]
    #[serde(rename = "RL")]
    RightToLeft,
    #[strum(serialize = "LR")]
    #[serde(rename = "LR")]
    LeftToRight,
    #[default]
    #[strum(serialize = "S")]
    #[serde(rename = "S")]
    Straight,
}

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
)]
pub enum PuttSlope {
    #[strum(serialize = "U")]
    #[serde(rename = "U")]
    Uphill,
    #[strum(serialize = "D")]
    #[serde(rename = "D")]
    Downhill,
    #[default]
    #[strum(serialize = "F")]
    #[serde(rename = "F")]
    Flat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_tee_lie_round_trips_through_its_code() {
        for lie in TeeLie::iter() {
            let code = lie.to_string();
            assert_eq!(TeeLie::from_str(&code).unwrap(), lie);
        }
    }

    #[test]
    fn test_tee_lie_labels() {
        assert_eq!(TeeLie::Fairway.label(), "Fairway");
        assert_eq!(TeeLie::from_code("HRR").label(), "Heavy Rough Right");
        assert_eq!(TeeLie::from_code("P").label(), "Penalty");
        assert!(TeeLie::iter().all(|lie| !lie.label().is_empty()));
    }

    #[test]
    fn test_unknown_codes_fall_back() {
        assert_eq!(position_category_for_code("XX"), PositionCategory::Rough);
        assert_eq!(TeeLie::from_code("XX").category(), PositionCategory::Rough);
        assert_eq!(ApproachLie::from_code("??"), ApproachLie::Rough);
        assert_eq!(ShortGameLie::from_code(""), ShortGameLie::FairwayFirstCut);
    }
}
