use std::path::PathBuf;

pub struct Context {
    pub db_path: PathBuf,
    pub log_file: Option<PathBuf>,
}

impl Context {
    pub fn from_cli(cli: &crate::cli::Cli) -> Self {
        Self {
            db_path: cli.db.clone(),
            log_file: cli.log_file.clone(),
        }
    }
}
