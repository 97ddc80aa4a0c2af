use rusqlite::Connection;

use crate::cli::Command;

pub mod data;
pub mod schema;

pub trait CommandRunner {
    fn run(&self, conn: &Connection) -> anyhow::Result<()>;
}

impl Command {
    pub fn run(&self, conn: &Connection) -> anyhow::Result<()> {
        match self {
            Command::Schema { cmd } => cmd.run(conn),
            Command::Import { kind, file } => data::import(conn, *kind, file),
            Command::List { kind, filter } => {
                let stdout = std::io::stdout();
                data::list(conn, *kind, filter, &mut stdout.lock())
            }
            Command::Delete { kind, id } => data::delete(conn, *kind, *id),
        }
    }
}
