//! Command-line and environment configuration.
//!
//! Every flag can also be set through a `TUI_2048_*` environment variable.

use std::env;
use std::path::PathBuf;

use clap::Parser;

use crate::store::BestScoreStore;

/// File name used inside the per-user data directory.
pub const BEST_SCORE_FILE_NAME: &str = "best_score.json";

#[derive(Debug, Parser)]
#[command(author, version, about = "Play 2048 in the terminal")]
pub struct Cli {
    /// Seed for tile spawns (random when omitted)
    #[arg(long, env = "TUI_2048_SEED", value_name = "N")]
    pub seed: Option<u64>,

    /// Where the best score is kept [default: ~/.tui-2048/best_score.json]
    #[arg(long, env = "TUI_2048_BEST_SCORE_FILE", value_name = "PATH")]
    pub best_score_file: Option<PathBuf>,

    /// Keep the best score in memory only
    #[arg(long, env = "TUI_2048_NO_PERSIST")]
    pub no_persist: bool,

    /// Directory for log files [default: system temp dir]
    #[arg(long, env = "TUI_2048_LOG_DIR", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Disable mouse capture (drag-to-swipe)
    #[arg(long, env = "TUI_2048_NO_MOUSE")]
    pub no_mouse: bool,
}

impl Cli {
    /// The best-score store to use, or `None` when persistence is off.
    pub fn best_score_store(&self) -> Option<BestScoreStore> {
        if self.no_persist {
            return None;
        }
        let path = self
            .best_score_file
            .clone()
            .unwrap_or_else(default_best_score_path);
        Some(BestScoreStore::new(path))
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(env::temp_dir)
    }
}

/// `$HOME/.tui-2048/best_score.json`, or the current directory without a home.
pub fn default_best_score_path() -> PathBuf {
    match env::var_os("HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home)
            .join(".tui-2048")
            .join(BEST_SCORE_FILE_NAME),
        _ => PathBuf::from(BEST_SCORE_FILE_NAME),
    }
}
