use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "todo", about = concat!("[x] todo v", env!("CARGO_PKG_VERSION"), " - a to-do list for your terminal"), version)]
pub struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/todo/config.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start with this task already added (repeatable)
    #[arg(long = "add", value_name = "TITLE", action = clap::ArgAction::Append)]
    pub add: Vec<String>,

    /// Accept tasks whose title is already in the list
    #[arg(long)]
    pub allow_duplicates: bool,

    /// Remove tasks without asking for confirmation
    #[arg(long)]
    pub no_confirm: bool,

    /// Write logs to this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Print the final task list as JSON on exit
    #[arg(long)]
    pub json: bool,
}
