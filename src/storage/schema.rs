use rusqlite::Connection;

use super::Result;

/// Tables owned by the repository, in creation order.
pub const TABLES: [&str; 9] = [
    "category",
    "group",
    "market_group",
    "type",
    "region",
    "constellation",
    "system",
    "station",
    "market_order",
];

const CREATE_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS category (
    CategoryId INTEGER PRIMARY KEY,
    Name TEXT NOT NULL,
    Published INTEGER NOT NULL CHECK (Published IN (0, 1))
) STRICT;
CREATE TABLE IF NOT EXISTS "group" (
    GroupId INTEGER PRIMARY KEY,
    CategoryId INTEGER NOT NULL,
    Name TEXT NOT NULL,
    Published INTEGER NOT NULL CHECK (Published IN (0, 1))
) STRICT;
CREATE TABLE IF NOT EXISTS market_group (
    MarketGroupId INTEGER PRIMARY KEY,
    ParentGroupId INTEGER,
    Description TEXT,
    Name TEXT
) STRICT;
CREATE TABLE IF NOT EXISTS "type" (
    TypeId INTEGER PRIMARY KEY,
    GroupId INTEGER NOT NULL,
    MarketGroupId INTEGER,
    Name TEXT NOT NULL,
    Description TEXT NOT NULL,
    Published INTEGER NOT NULL CHECK (Published IN (0, 1)),
    Capacity REAL,
    GraphicId INTEGER,
    IconId INTEGER,
    Mass REAL,
    PackagedVolume REAL,
    PortionSize INTEGER,
    Radius REAL,
    Volume REAL
) STRICT;
CREATE TABLE IF NOT EXISTS region (
    RegionId INTEGER PRIMARY KEY,
    Name TEXT NOT NULL,
    Description TEXT
) STRICT;
CREATE TABLE IF NOT EXISTS constellation (
    ConstellationId INTEGER PRIMARY KEY,
    RegionId INTEGER NOT NULL,
    Name TEXT NOT NULL
) STRICT;
CREATE TABLE IF NOT EXISTS system (
    SystemId INTEGER PRIMARY KEY,
    ConstellationId INTEGER NOT NULL,
    Name TEXT NOT NULL,
    SecurityStatus REAL
) STRICT;
CREATE TABLE IF NOT EXISTS station (
    StationId INTEGER PRIMARY KEY,
    SystemId INTEGER NOT NULL,
    TypeId INTEGER NOT NULL,
    Name TEXT NOT NULL,
    OwnerId INTEGER
) STRICT;
CREATE TABLE IF NOT EXISTS market_order (
    OrderId INTEGER PRIMARY KEY,
    TypeId INTEGER NOT NULL,
    LocationId INTEGER NOT NULL,
    SystemId INTEGER NOT NULL,
    IsBuyOrder INTEGER NOT NULL CHECK (IsBuyOrder IN (0, 1)),
    Price REAL NOT NULL,
    VolumeRemain INTEGER NOT NULL,
    VolumeTotal INTEGER NOT NULL,
    MinVolume INTEGER NOT NULL,
    OrderRange TEXT NOT NULL,
    Duration INTEGER NOT NULL,
    Issued TEXT NOT NULL
) STRICT;
"#;

// Children before parents, so an engine enforcing foreign keys never
// sees a dangling reference mid-drop.
const DROP_SCHEMA: &str = r#"
DROP TABLE IF EXISTS market_order;
DROP TABLE IF EXISTS station;
DROP TABLE IF EXISTS system;
DROP TABLE IF EXISTS constellation;
DROP TABLE IF EXISTS region;
DROP TABLE IF EXISTS "type";
DROP TABLE IF EXISTS market_group;
DROP TABLE IF EXISTS "group";
DROP TABLE IF EXISTS category;
"#;

/// Creates and drops the full table set on a borrowed connection.
pub struct Schema<'c> {
    conn: &'c Connection,
}

impl<'c> Schema<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    /// Create every table that is missing. Safe to call repeatedly.
    ///
    /// Returns how many tables this call created, so a second call
    /// returns 0.
    pub fn create_all(&self) -> Result<usize> {
        let before = self.present_tables()?;
        self.run_batch(CREATE_SCHEMA)?;
        let created = self.present_tables()?.saturating_sub(before);
        Ok(created)
    }

    /// Drop every table that exists. Returns how many tables were dropped.
    pub fn drop_all(&self) -> Result<usize> {
        let before = self.present_tables()?;
        self.run_batch(DROP_SCHEMA)?;
        let dropped = before.saturating_sub(self.present_tables()?);
        Ok(dropped)
    }

    /// Drop then create, leaving an empty schema.
    pub fn recreate(&self) -> Result<()> {
        self.drop_all()?;
        self.create_all()?;
        Ok(())
    }

    /// Whether every owned table is present.
    pub fn exists(&self) -> Result<bool> {
        Ok(self.present_tables()? == TABLES.len())
    }

    fn present_tables(&self) -> Result<usize> {
        let mut stmt = self
            .conn
            .prepare("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1")?;
        let mut present = 0;
        for table in TABLES {
            let count: i64 = stmt.query_row([table], |row| row.get(0))?;
            if count > 0 {
                present += 1;
            }
        }
        Ok(present)
    }

    // A savepoint nests inside a caller's open transaction and acts as
    // BEGIN otherwise. DDL is transactional, so a failing statement leaves
    // the schema as it was.
    fn run_batch(&self, sql: &str) -> Result<()> {
        self.conn.execute_batch("SAVEPOINT schema_batch")?;
        match self.conn.execute_batch(sql) {
            Ok(()) => {
                self.conn.execute_batch("RELEASE schema_batch")?;
                Ok(())
            }
            Err(err) => {
                let _ = self
                    .conn
                    .execute_batch("ROLLBACK TO schema_batch; RELEASE schema_batch");
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_count(conn: &Connection) -> i64 {
        conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'",
            [],
            |row| row.get(0),
        )
        .unwrap()
    }

    #[test]
    fn create_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        let schema = Schema::new(&conn);
        assert!(!schema.exists().unwrap());
        assert_eq!(schema.create_all().unwrap(), TABLES.len());
        assert_eq!(schema.create_all().unwrap(), 0);
        assert!(schema.exists().unwrap());
        assert_eq!(table_count(&conn), TABLES.len() as i64);
    }

    #[test]
    fn drop_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        let schema = Schema::new(&conn);
        schema.create_all().unwrap();
        assert_eq!(schema.drop_all().unwrap(), TABLES.len());
        assert_eq!(schema.drop_all().unwrap(), 0);
        assert!(!schema.exists().unwrap());
        assert_eq!(table_count(&conn), 0);
    }

    #[test]
    fn drop_on_fresh_connection_is_noop() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(Schema::new(&conn).drop_all().unwrap(), 0);
    }

    #[test]
    fn recreate_discards_rows() {
        let conn = Connection::open_in_memory().unwrap();
        let schema = Schema::new(&conn);
        schema.create_all().unwrap();
        conn.execute(
            "INSERT INTO category (CategoryId, Name, Published) VALUES (1, 'a', 0)",
            [],
        )
        .unwrap();
        schema.recreate().unwrap();
        let rows: i64 = conn
            .query_row("SELECT COUNT(*) FROM category", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 0);
    }

    #[test]
    fn not_null_columns_reject_null() {
        let conn = Connection::open_in_memory().unwrap();
        Schema::new(&conn).create_all().unwrap();
        let err = conn
            .execute(
                "INSERT INTO \"group\" (GroupId, CategoryId, Name, Published) VALUES (1, NULL, 'g', 0)",
                [],
            )
            .unwrap_err();
        assert!(crate::storage::StorageError::from(err).is_constraint());
    }

    #[test]
    fn strict_tables_reject_mistyped_values() {
        let conn = Connection::open_in_memory().unwrap();
        Schema::new(&conn).create_all().unwrap();
        let result = conn.execute(
            "INSERT INTO category (CategoryId, Name, Published) VALUES ('abc', 'a', 0)",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn create_and_drop_inside_open_transaction() {
        let conn = Connection::open_in_memory().unwrap();
        let tx = conn.unchecked_transaction().unwrap();
        let repo = crate::storage::Repository::new(&tx);

        assert_eq!(repo.create_schema().unwrap(), TABLES.len());
        assert!(!tx.is_autocommit());
        assert_eq!(repo.drop_schema().unwrap(), TABLES.len());
        assert_eq!(repo.create_schema().unwrap(), TABLES.len());
        tx.commit().unwrap();

        assert!(Schema::new(&conn).exists().unwrap());
    }

    #[test]
    fn failed_batch_inside_transaction_keeps_outer_work() {
        let conn = Connection::open_in_memory().unwrap();
        let tx = conn.unchecked_transaction().unwrap();
        tx.execute_batch("CREATE TABLE keep (id INTEGER PRIMARY KEY)")
            .unwrap();

        let schema = Schema::new(&tx);
        assert!(schema.run_batch("CREATE TABLE region (x INTEGER); NOT SQL").is_err());
        assert_eq!(schema.present_tables().unwrap(), 0);
        tx.commit().unwrap();

        let kept: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE name = 'keep'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(kept, 1);
    }
}
