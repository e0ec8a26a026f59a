use crate::reports;
use clap::Args;
use std::path::PathBuf;
use strokes_gained::benchmarks::standard;
use strokes_gained::config::Config;
use strokes_gained::round::{dashboard_stats, rederive_all, Round};
use strokes_gained::SgResult;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct DashboardArgs {
    #[command(flatten)]
    pub config: Config,

    /// Round history (JSON array)
    #[arg(long)]
    pub history: PathBuf,

    /// Recompute every shot against the current tables before aggregating
    #[arg(long, default_value_t = false)]
    pub rederive: bool,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: DashboardArgs, config: Config) -> SgResult<()> {
    config.stats.validate()?;

    let mut rounds = Round::load_history(&args.history)?;
    info!("Loaded {} rounds from {}", rounds.len(), args.history.display());

    if args.rederive {
        rederive_all(&mut rounds, standard());
    }

    // ISO dates sort lexically; newest first.
    rounds.sort_by(|a, b| b.date.cmp(&a.date));

    let stats = dashboard_stats(&rounds, &config.stats);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    match stats {
        Some(stats) => reports::print_dashboard(&stats),
        None => println!("No rounds recorded yet."),
    }
    Ok(())
}
