//! Flat entry points over the standard tour tables.
//!
//! Lie codes arrive as the raw strings a scorecard would store (`"F"`,
//! `"HRL"`, `"GBS"`, ...). Unknown codes never fail; each calculator falls
//! back to its documented default lie.

use crate::benchmarks::standard;
use crate::lies::{position_category_for_code, ApproachLie, ShortGameLie};
use crate::sg::{self, ShotSg};

pub use crate::round::{calculate_round_sg, RoundSgSummary};

/// Tee shot on a par-3/4/5. `is_penalty` wins over whatever `lie` says.
pub fn calculate_tee_shot_sg(
    hole_distance: f64,
    par: u8,
    distance_remaining: f64,
    lie: &str,
    is_penalty: bool,
) -> ShotSg {
    sg::tee_shot_sg(
        standard(),
        hole_distance,
        par,
        distance_remaining,
        position_category_for_code(lie),
        is_penalty,
    )
}

pub fn calculate_approach_sg(
    distance: f64,
    lie: &str,
    proximity_feet: f64,
    on_green: bool,
) -> ShotSg {
    sg::approach_sg(
        standard(),
        distance,
        ApproachLie::from_code(lie),
        proximity_feet,
        on_green,
    )
}

/// Proximity 0 means the shot was holed.
pub fn calculate_short_game_sg(distance: f64, lie: &str, proximity_feet: f64) -> ShotSg {
    sg::short_game_sg(
        standard(),
        distance,
        ShortGameLie::from_code(lie),
        proximity_feet,
    )
}

pub fn calculate_putt_sg(
    distance_feet: f64,
    made: bool,
    remaining_distance_feet: Option<f64>,
) -> ShotSg {
    sg::putt_sg(standard(), distance_feet, made, remaining_distance_feet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_codes_do_not_fail() {
        let known = calculate_tee_shot_sg(420.0, 4, 160.0, "R", false);
        let unknown = calculate_tee_shot_sg(420.0, 4, 160.0, "??", false);
        assert_eq!(known, unknown);

        let app_r = calculate_approach_sg(150.0, "R", 20.0, true);
        let app_x = calculate_approach_sg(150.0, "zz", 20.0, true);
        assert_eq!(app_r, app_x);

        let sg_fr = calculate_short_game_sg(15.0, "FR", 6.0);
        let sg_x = calculate_short_game_sg(15.0, "", 6.0);
        assert_eq!(sg_fr, sg_x);
    }

    #[test]
    fn test_round_sg_over_shot_results() {
        let tee = [calculate_tee_shot_sg(400.0, 4, 150.0, "F", false)];
        let putts = [calculate_putt_sg(8.0, true, None)];
        let empty: [ShotSg; 0] = [];
        let summary = calculate_round_sg(&tee, &empty, &empty, &putts);
        assert_eq!(summary.sg_ott, tee[0].sg);
        assert_eq!(summary.sg_putt, putts[0].sg);
    }
}
