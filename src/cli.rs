use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "barweather")]
#[command(version, about = "Weather status line for desktop status bars")]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Create the default config file
    #[arg(long, conflicts_with_all = ["check", "print_config"])]
    pub init: bool,

    /// Validate the config file
    #[arg(long, conflicts_with = "print_config")]
    pub check: bool,

    /// Print the effective configuration as TOML
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
