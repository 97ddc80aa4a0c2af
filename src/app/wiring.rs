use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::{context, storage};

pub fn init_db_dir(ctx: &context::Context) -> Result<()> {
    if ctx.db_path.as_os_str() == storage::connection::MEMORY {
        return Ok(());
    }
    if let Some(dir) = ctx.db_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating {}", dir.display()))?;
    }
    Ok(())
}

pub fn open_storage(ctx: &context::Context) -> Result<Connection> {
    init_db_dir(ctx).context("initializing database dir")?;
    let conn = storage::connection::open(&ctx.db_path)
        .with_context(|| format!("opening {}", ctx.db_path.display()))?;
    Ok(conn)
}
