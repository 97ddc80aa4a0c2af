use rusqlite::{params, Connection, OptionalExtension};

use super::{query::Query, traits::EntityStore, Result};
use crate::types::{Group, GroupFilter, GroupId};

const SELECT_GROUP: &str = r#"
SELECT GroupId, CategoryId, Name, Published
FROM "group"
WHERE 1=1"#;

fn map_group_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Group> {
    Ok(Group {
        group_id: row.get(0)?,
        category_id: row.get(1)?,
        name: row.get(2)?,
        published: row.get(3)?,
    })
}

fn db_insert_group(conn: &Connection, group: &Group) -> rusqlite::Result<usize> {
    conn.execute(
        r#"INSERT INTO "group" (GroupId, CategoryId, Name, Published) VALUES (?1, ?2, ?3, ?4)"#,
        params![group.group_id, group.category_id, group.name, group.published],
    )
}

fn db_upsert_group(conn: &Connection, group: &Group) -> rusqlite::Result<usize> {
    conn.execute(
        r#"INSERT INTO "group" (GroupId, CategoryId, Name, Published) VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(GroupId) DO UPDATE SET CategoryId=excluded.CategoryId, Name=excluded.Name, Published=excluded.Published"#,
        params![group.group_id, group.category_id, group.name, group.published],
    )
}

fn db_update_group(conn: &Connection, group: &Group) -> rusqlite::Result<usize> {
    conn.execute(
        r#"
        UPDATE "group"
        SET CategoryId = ?2,
            Name = ?3,
            Published = ?4
        WHERE GroupId = ?1
        "#,
        params![group.group_id, group.category_id, group.name, group.published],
    )
}

/// Access to the `group` table.
#[derive(Clone, Copy)]
pub struct Groups<'c> {
    conn: &'c Connection,
}

impl<'c> Groups<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl EntityStore for Groups<'_> {
    type Row = Group;
    type Key = GroupId;
    type Filter = GroupFilter;

    fn insert(&self, row: &Group) -> Result<usize> {
        Ok(db_insert_group(self.conn, row)?)
    }

    fn insert_or_update(&self, row: &Group) -> Result<usize> {
        Ok(db_upsert_group(self.conn, row)?)
    }

    fn update(&self, row: &Group) -> Result<usize> {
        Ok(db_update_group(self.conn, row)?)
    }

    fn delete(&self, key: GroupId) -> Result<usize> {
        Ok(self
            .conn
            .execute(r#"DELETE FROM "group" WHERE GroupId = ?1"#, params![key])?)
    }

    fn get(&self, filter: &GroupFilter) -> Result<Vec<Group>> {
        let rows = Query::new(SELECT_GROUP)
            .and_eq("GroupId", filter.group_id)
            .and_eq("CategoryId", filter.category_id)
            .and_like("Name", filter.name.as_deref())
            .and_eq("Published", filter.published)
            .order_by("GroupId")
            .query_map(self.conn, map_group_row)?;
        Ok(rows)
    }

    fn clear(&self) -> Result<usize> {
        Ok(self.conn.execute(r#"DELETE FROM "group" WHERE 1=1"#, [])?)
    }

    fn find(&self, key: GroupId) -> Result<Option<Group>> {
        let row = self
            .conn
            .query_row(
                r#"SELECT GroupId, CategoryId, Name, Published FROM "group" WHERE GroupId = ?1"#,
                params![key],
                map_group_row,
            )
            .optional()?;
        Ok(row)
    }
}
