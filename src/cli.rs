//! CLI - launch flags for flixtui
//!
//! There are no subcommands; running the binary always opens the TUI.
//! Flags override the matching values from the config file.
//!
//! # Examples
//!
//! ```bash
//! flixtui
//! flixtui --debounce-ms 150 -v
//! flixtui --api-url http://localhost:8080 --log-file /tmp/flixtui.log
//! ```

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// flixtui - browse TV shows from the terminal
#[derive(Parser, Debug, Default)]
#[command(
    name = "flixtui",
    version,
    about = "Netflix-styled terminal browser for TV shows",
    long_about = "Browse, filter and search the TVMaze catalog from your terminal.\n\n\
                  Tab switches between Home and Search, / jumps to the search box,\n\
                  Enter opens details, Esc goes back, q quits."
)]
pub struct Cli {
    /// Path to config file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Catalog API base URL
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Quiet period before suggestions are fetched, in milliseconds
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Load the config file named by `--config`, or the default one
    pub fn load_config(&self) -> Config {
        let config = match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        };
        self.apply(config)
    }

    /// Overlay flags onto `config`
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(url) = &self.api_url {
            config.api_url = Some(url.clone());
        }
        if let Some(ms) = self.debounce_ms {
            config.suggest_debounce_ms = Some(ms);
        }
        if let Some(path) = &self.log_file {
            config.log_file = Some(path.clone());
        }
        config
    }

    /// Default log filter directive
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "flixtui=debug"
        } else {
            "flixtui=info"
        }
    }
}
