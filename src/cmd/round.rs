use crate::reports;
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};
use strokes_gained::benchmarks::standard;
use strokes_gained::course::{Course, NineSelection, TeeBox};
use strokes_gained::loader;
use strokes_gained::round::{ActiveRound, Round};
use strokes_gained::{SgError, SgResult};
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct RoundArgs {
    /// Tee box card (JSON), or a tee box name when --course-file is given
    #[arg(long)]
    pub tee_box: PathBuf,

    /// Course file (JSON) holding several tee boxes
    #[arg(long)]
    pub course_file: Option<PathBuf>,

    /// Shot log (CSV)
    #[arg(long)]
    pub shots: PathBuf,

    #[arg(long, value_enum, default_value_t = NineSelection::Full)]
    pub nine: NineSelection,

    /// Final score to record instead of the counted strokes
    #[arg(long)]
    pub manual_score: Option<u32>,

    #[arg(long, default_value = "Unknown Course")]
    pub course: String,

    /// Round date, YYYY-MM-DD
    #[arg(long, default_value = "")]
    pub date: String,

    /// Prepend the finished round to this history file
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Print the finished round as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: RoundArgs) -> SgResult<()> {
    let b = standard();

    info!("Loading Tee Box: {}", args.tee_box.display());
    let tee_box = match &args.course_file {
        Some(path) => {
            let course = Course::load_from_file(path)?;
            let name = args.tee_box.to_string_lossy();
            course.tee_box(&name).cloned().ok_or_else(|| {
                SgError::Validation(format!("course '{}' has no tee box '{}'", course.name, name))
            })?
        }
        None => TeeBox::load_from_file(&args.tee_box)?,
    };
    let (yards, par) = tee_box.totals();
    info!("{} tees: {:.0} yards, par {}", tee_box.name, yards, par);

    let mut active = ActiveRound::start(&args.date, &args.course, &tee_box, args.nine)?;
    let report = loader::load_shot_log(&args.shots, b, &mut active)?;
    if report.skipped > 0 {
        warn!(
            "Skipped {} invalid rows in '{}'.",
            report.skipped,
            args.shots.display()
        );
    }

    let round = active.complete(args.manual_score);

    if let Some(path) = &args.save {
        save_to_history(path, &round)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&round)?);
        return Ok(());
    }

    reports::print_round_holes(&round);
    reports::print_category_summary(&round.sg);
    reports::print_round_stats(&round);
    Ok(())
}

fn save_to_history(path: &Path, round: &Round) -> SgResult<()> {
    let mut history = if path.exists() {
        Round::load_history(path)?
    } else {
        Vec::new()
    };
    history.insert(0, round.clone());
    fs::write(path, serde_json::to_string_pretty(&history)?)?;
    info!("Saved round to: {} ({} rounds)", path.display(), history.len());
    Ok(())
}
