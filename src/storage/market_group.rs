use rusqlite::{params, Connection, OptionalExtension};

use super::{query::Query, traits::EntityStore, Result};
use crate::types::{MarketGroup, MarketGroupFilter, MarketGroupId};

const SELECT_MARKET_GROUP: &str = r#"
SELECT MarketGroupId, ParentGroupId, Description, Name
FROM market_group
WHERE 1=1"#;

// Description and Name are nullable in the table; read NULL as empty.
fn map_market_group_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<MarketGroup> {
    let description: Option<String> = row.get(2)?;
    let name: Option<String> = row.get(3)?;
    Ok(MarketGroup {
        market_group_id: row.get(0)?,
        parent_group_id: row.get(1)?,
        description: description.unwrap_or_default(),
        name: name.unwrap_or_default(),
    })
}

fn db_upsert_market_group(conn: &Connection, group: &MarketGroup) -> rusqlite::Result<usize> {
    conn.execute(
        "INSERT INTO market_group (MarketGroupId, ParentGroupId, Description, Name) VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(MarketGroupId) DO UPDATE SET ParentGroupId=excluded.ParentGroupId, Description=excluded.Description, Name=excluded.Name",
        params![
            group.market_group_id,
            group.parent_group_id,
            group.description,
            group.name
        ],
    )
}

/// Access to the `market_group` table.
#[derive(Clone, Copy)]
pub struct MarketGroups<'c> {
    conn: &'c Connection,
}

impl<'c> MarketGroups<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    /// Direct children of `parent`.
    pub fn children(&self, parent: MarketGroupId) -> Result<Vec<MarketGroup>> {
        self.get(&MarketGroupFilter::children_of(parent))
    }
}

impl EntityStore for MarketGroups<'_> {
    type Row = MarketGroup;
    type Key = MarketGroupId;
    type Filter = MarketGroupFilter;

    fn insert(&self, row: &MarketGroup) -> Result<usize> {
        Ok(self.conn.execute(
            "INSERT INTO market_group (MarketGroupId, ParentGroupId, Description, Name) VALUES (?1, ?2, ?3, ?4)",
            params![row.market_group_id, row.parent_group_id, row.description, row.name],
        )?)
    }

    fn insert_or_update(&self, row: &MarketGroup) -> Result<usize> {
        Ok(db_upsert_market_group(self.conn, row)?)
    }

    fn update(&self, row: &MarketGroup) -> Result<usize> {
        Ok(self.conn.execute(
            r#"
            UPDATE market_group
            SET ParentGroupId = ?2,
                Description = ?3,
                Name = ?4
            WHERE MarketGroupId = ?1
            "#,
            params![row.market_group_id, row.parent_group_id, row.description, row.name],
        )?)
    }

    fn delete(&self, key: MarketGroupId) -> Result<usize> {
        Ok(self.conn.execute(
            "DELETE FROM market_group WHERE MarketGroupId = ?1",
            params![key],
        )?)
    }

    fn get(&self, filter: &MarketGroupFilter) -> Result<Vec<MarketGroup>> {
        let rows = Query::new(SELECT_MARKET_GROUP)
            .and_eq("MarketGroupId", filter.market_group_id)
            .and_eq("ParentGroupId", filter.parent_group_id)
            .and_like("Name", filter.name.as_deref())
            .and_like("Description", filter.description.as_deref())
            .order_by("MarketGroupId")
            .query_map(self.conn, map_market_group_row)?;
        Ok(rows)
    }

    fn clear(&self) -> Result<usize> {
        Ok(self.conn.execute("DELETE FROM market_group WHERE 1=1", [])?)
    }

    fn find(&self, key: MarketGroupId) -> Result<Option<MarketGroup>> {
        let row = self
            .conn
            .query_row(
                "SELECT MarketGroupId, ParentGroupId, Description, Name FROM market_group WHERE MarketGroupId = ?1",
                params![key],
                map_market_group_row,
            )
            .optional()?;
        Ok(row)
    }
}
