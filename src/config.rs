use crate::consts::{DEFAULT_STATS_WINDOW, DEFAULT_TREND_WINDOW};
use crate::error::{SgError, SgResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub stats: StatsParams,
}

#[derive(Args, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsParams {
    /// Most recent rounds averaged on the dashboard
    #[arg(long, default_value_t = DEFAULT_STATS_WINDOW)]
    pub stats_window: usize,
    /// Rounds on each side of the trend comparison
    #[arg(long, default_value_t = DEFAULT_TREND_WINDOW)]
    pub trend_window: usize,
}

impl Default for StatsParams {
    fn default() -> Self {
        Self {
            stats_window: DEFAULT_STATS_WINDOW,
            trend_window: DEFAULT_TREND_WINDOW,
        }
    }
}

impl StatsParams {
    pub fn validate(&self) -> SgResult<()> {
        if self.stats_window == 0 {
            return Err(SgError::Config("stats_window must be at least 1".to_string()));
        }
        if self.trend_window == 0 {
            return Err(SgError::Config("trend_window must be at least 1".to_string()));
        }
        Ok(())
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SgResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SgError::Config(format!("could not read '{}': {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&content)?;
        config.stats.validate()?;
        Ok(config)
    }

    /// Copies every flag the user typed on the command line over the file values.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field;
                }
            };
        }

        update_if_present!(stats.stats_window);
        update_if_present!(stats.trend_window);
    }
}
