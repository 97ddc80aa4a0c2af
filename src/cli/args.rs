use clap::Parser;
use std::env;
use std::path::PathBuf;

use crate::cli::command::Command;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Local SQLite cache of EVE reference data",
    long_about = "Create the reference-data schema, import catalog records exported as JSON, and query categories, groups, item types and market groups.",
    arg_required_else_help = true
)]
pub struct Cli {
    #[arg(
        long,
        env = "EVECORE_DB",
        default_value = "evecore.db",
        value_name = "PATH",
        help = "SQLite database file (use :memory: for a throwaway database)"
    )]
    pub db: PathBuf,

    #[arg(
        long = "log-file",
        env = "EVECORE_LOG_FILE",
        value_name = "PATH",
        help = "Write logs to PATH (in addition to stderr)"
    )]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

pub fn parse() -> Cli {
    let dotenv_path = env::var("DOTENV_PATH").unwrap_or(".env".into());
    dotenvy::from_filename(&dotenv_path).ok();

    Cli::parse()
}
