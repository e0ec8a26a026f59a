use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use strokes_gained::config::Config;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Strokes Gained calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file; flags typed on the command line override it
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Strokes gained for a single shot
    Shot(cmd::shot::ShotArgs),
    /// Build a round from a tee box card and a CSV shot log
    Round(cmd::round::RoundArgs),
    /// Rolling statistics over a round history
    Dashboard(cmd::dashboard::DashboardArgs),
    /// Print the benchmark tables
    Tables(cmd::tables::TablesArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Shot(args) => cmd::shot::run(args),
        Commands::Round(args) => cmd::round::run(args),
        Commands::Dashboard(args) => {
            let mut config = match &cli.config {
                Some(path) => {
                    info!("Loading config from: {}", path);
                    Config::load_from_file(path).unwrap_or_else(|e| {
                        error!("{}", e);
                        process::exit(1);
                    })
                }
                None => args.config.clone(),
            };
            if let Some(sub) = matches.subcommand_matches("dashboard") {
                config.merge_from_cli(&args.config, sub);
            }
            cmd::dashboard::run(args, config)
        }
        Commands::Tables(args) => cmd::tables::run(args),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
