use crate::reports;
use clap::{Args, Subcommand};
use strokes_gained::api;
use strokes_gained::sg::ShotSg;
use strokes_gained::SgResult;

#[derive(Args, Debug, Clone)]
pub struct ShotArgs {
    #[command(subcommand)]
    pub shot: ShotCommand,

    /// Print the result as JSON instead of a table
    #[arg(global = true, long, default_value_t = false)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ShotCommand {
    /// Tee shot on a par 3, 4 or 5
    Tee {
        /// Hole length in yards
        #[arg(long)]
        hole_distance: f64,
        #[arg(long, default_value_t = 4)]
        par: u8,
        /// Yards left to the hole after the shot
        #[arg(long)]
        remaining: f64,
        /// F, RL, RR, HRL, HRR, TL, TR, BL, BR or P
        #[arg(long, default_value = "F")]
        lie: String,
        #[arg(long, default_value_t = false)]
        penalty: bool,
    },
    /// Approach shot or layup
    Approach {
        /// Starting distance in yards
        #[arg(long)]
        distance: f64,
        /// F, R, HR, T or FB
        #[arg(long, default_value = "F")]
        lie: String,
        /// Feet from the hole where the ball finished
        #[arg(long)]
        proximity: f64,
        /// Ball finished on the putting surface
        #[arg(long, default_value_t = false)]
        green: bool,
    },
    /// Chip, pitch or bunker shot
    Short {
        #[arg(long)]
        distance: f64,
        /// GF, FR, R, HR, GBS or FBS
        #[arg(long, default_value = "FR")]
        lie: String,
        /// 0 when holed
        #[arg(long)]
        proximity: f64,
    },
    Putt {
        /// Putt length in feet
        #[arg(long)]
        distance: f64,
        #[arg(long, default_value_t = false)]
        made: bool,
        /// Feet left after a miss
        #[arg(long)]
        remaining: Option<f64>,
    },
}

impl ShotCommand {
    fn label(&self) -> &'static str {
        match self {
            Self::Tee { .. } => "Tee Shot",
            Self::Approach { .. } => "Approach",
            Self::Short { .. } => "Short Game",
            Self::Putt { .. } => "Putt",
        }
    }

    fn evaluate(&self) -> ShotSg {
        match self {
            Self::Tee {
                hole_distance,
                par,
                remaining,
                lie,
                penalty,
            } => api::calculate_tee_shot_sg(*hole_distance, *par, *remaining, lie, *penalty),
            Self::Approach {
                distance,
                lie,
                proximity,
                green,
            } => api::calculate_approach_sg(*distance, lie, *proximity, *green),
            Self::Short {
                distance,
                lie,
                proximity,
            } => api::calculate_short_game_sg(*distance, lie, *proximity),
            Self::Putt {
                distance,
                made,
                remaining,
            } => api::calculate_putt_sg(*distance, *made, *remaining),
        }
    }
}

pub fn run(args: ShotArgs) -> SgResult<()> {
    let result = args.shot.evaluate();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        reports::print_shot(args.shot.label(), &result);
    }
    Ok(())
}
