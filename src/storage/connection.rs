use std::path::Path;
use std::time::Duration;

use rusqlite::Connection;

use super::Result;

pub const MEMORY: &str = ":memory:";

/// Open a connection tuned for a single local writer. `:memory:` opens a
/// private in-memory database.
///
/// The repository types only borrow the returned handle; dropping it
/// closes the database.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let path = path.as_ref();
    if path.as_os_str() == MEMORY {
        return Ok(Connection::open_in_memory()?);
    }

    let conn = Connection::open(path)?;
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;
    conn.busy_timeout(Duration::from_millis(500))?;
    Ok(conn)
}
