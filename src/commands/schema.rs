use super::CommandRunner;
use crate::cli;
use crate::storage::Repository;
use anyhow::{Context, Result};
use rusqlite::Connection;

impl CommandRunner for cli::SchemaCmd {
    fn run(&self, conn: &Connection) -> Result<()> {
        let repo = Repository::new(conn);
        match self {
            cli::SchemaCmd::Create => {
                let created = repo.create_schema().context("creating schema")?;
                log::info!("🗄️ Schema ready ({created} tables created)");
            }
            cli::SchemaCmd::Drop => {
                let dropped = repo.drop_schema().context("dropping schema")?;
                log::info!("🧹 Schema dropped ({dropped} tables)");
            }
            cli::SchemaCmd::Reset => {
                repo.recreate_schema().context("resetting schema")?;
                log::info!("♻️ Schema reset");
            }
        }
        Ok(())
    }
}
