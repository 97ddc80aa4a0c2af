mod wiring;

use crate::{cli, context};
use anyhow::Result;

pub struct App {
    pub ctx: context::Context,
    pub cli: cli::Cli,
}

impl App {
    pub fn from_cli() -> Self {
        let cli = crate::cli::parse();
        let ctx = context::Context::from_cli(&cli);

        crate::tracing::init(ctx.log_file.as_deref());
        log::info!("🚀 Starting evecore");
        log::info!("📂 Database: {}", ctx.db_path.display());
        if let Some(path) = ctx.log_file.as_deref() {
            log::info!("📝 Log file: {}", path.display());
        }

        Self { ctx, cli }
    }
}

pub fn run() -> Result<()> {
    let app = App::from_cli();
    let conn = wiring::open_storage(&app.ctx)?;

    let span = tracing::info_span!("command", db = %app.ctx.db_path.display());
    let _guard = span.enter();
    app.cli.cmd.run(&conn)?;

    // Closing explicitly surfaces errors a plain drop would swallow.
    conn.close()
        .map_err(|(_, err)| err)
        .map_err(anyhow::Error::from)?;
    Ok(())
}
