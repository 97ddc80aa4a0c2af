use rusqlite::{params, Connection, OptionalExtension};

use super::{query::Query, traits::EntityStore, Result};
use crate::types::{ItemType, ItemTypeFilter, TypeId};

const TYPE_COLUMNS: &str = "TypeId, GroupId, MarketGroupId, Name, Description, Published, \
     Capacity, GraphicId, IconId, Mass, PackagedVolume, PortionSize, Radius, Volume";

const SELECT_TYPE: &str = r#"
SELECT TypeId, GroupId, MarketGroupId, Name, Description, Published,
       Capacity, GraphicId, IconId, Mass, PackagedVolume, PortionSize, Radius, Volume
FROM "type"
WHERE 1=1"#;

fn map_type_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ItemType> {
    Ok(ItemType {
        type_id: row.get(0)?,
        group_id: row.get(1)?,
        market_group_id: row.get(2)?,
        name: row.get(3)?,
        description: row.get(4)?,
        published: row.get(5)?,
        capacity: row.get(6)?,
        graphic_id: row.get(7)?,
        icon_id: row.get(8)?,
        mass: row.get(9)?,
        packaged_volume: row.get(10)?,
        portion_size: row.get(11)?,
        radius: row.get(12)?,
        volume: row.get(13)?,
    })
}

// `sql` must use ?1..?14 in TYPE_COLUMNS order.
fn db_write_type(conn: &Connection, sql: &str, t: &ItemType) -> rusqlite::Result<usize> {
    conn.execute(
        sql,
        params![
            t.type_id,
            t.group_id,
            t.market_group_id,
            t.name,
            t.description,
            t.published,
            t.capacity,
            t.graphic_id,
            t.icon_id,
            t.mass,
            t.packaged_volume,
            t.portion_size,
            t.radius,
            t.volume
        ],
    )
}

const INSERT_TYPE: &str = r#"
INSERT INTO "type" (
    TypeId, GroupId, MarketGroupId, Name, Description, Published,
    Capacity, GraphicId, IconId, Mass, PackagedVolume, PortionSize, Radius, Volume
) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)"#;

const UPSERT_TYPE: &str = r#"
INSERT INTO "type" (
    TypeId, GroupId, MarketGroupId, Name, Description, Published,
    Capacity, GraphicId, IconId, Mass, PackagedVolume, PortionSize, Radius, Volume
) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)
ON CONFLICT(TypeId) DO UPDATE SET
    GroupId=excluded.GroupId,
    MarketGroupId=excluded.MarketGroupId,
    Name=excluded.Name,
    Description=excluded.Description,
    Published=excluded.Published,
    Capacity=excluded.Capacity,
    GraphicId=excluded.GraphicId,
    IconId=excluded.IconId,
    Mass=excluded.Mass,
    PackagedVolume=excluded.PackagedVolume,
    PortionSize=excluded.PortionSize,
    Radius=excluded.Radius,
    Volume=excluded.Volume"#;

const UPDATE_TYPE: &str = r#"
UPDATE "type"
SET GroupId = ?2,
    MarketGroupId = ?3,
    Name = ?4,
    Description = ?5,
    Published = ?6,
    Capacity = ?7,
    GraphicId = ?8,
    IconId = ?9,
    Mass = ?10,
    PackagedVolume = ?11,
    PortionSize = ?12,
    Radius = ?13,
    Volume = ?14
WHERE TypeId = ?1"#;

/// Access to the `type` table.
#[derive(Clone, Copy)]
pub struct ItemTypes<'c> {
    conn: &'c Connection,
}

impl<'c> ItemTypes<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl EntityStore for ItemTypes<'_> {
    type Row = ItemType;
    type Key = TypeId;
    type Filter = ItemTypeFilter;

    fn insert(&self, row: &ItemType) -> Result<usize> {
        Ok(db_write_type(self.conn, INSERT_TYPE, row)?)
    }

    fn insert_or_update(&self, row: &ItemType) -> Result<usize> {
        Ok(db_write_type(self.conn, UPSERT_TYPE, row)?)
    }

    fn update(&self, row: &ItemType) -> Result<usize> {
        Ok(db_write_type(self.conn, UPDATE_TYPE, row)?)
    }

    fn delete(&self, key: TypeId) -> Result<usize> {
        Ok(self
            .conn
            .execute(r#"DELETE FROM "type" WHERE TypeId = ?1"#, params![key])?)
    }

    fn get(&self, filter: &ItemTypeFilter) -> Result<Vec<ItemType>> {
        let rows = Query::new(SELECT_TYPE)
            .and_eq("TypeId", filter.type_id)
            .and_eq("GroupId", filter.group_id)
            .and_eq("MarketGroupId", filter.market_group_id)
            .and_like("Name", filter.name.as_deref())
            .and_like("Description", filter.description.as_deref())
            .and_eq("Published", filter.published)
            .and_eq("GraphicId", filter.graphic_id)
            .and_eq("IconId", filter.icon_id)
            .and_eq("PortionSize", filter.portion_size)
            .order_by("TypeId")
            .query_map(self.conn, map_type_row)?;
        Ok(rows)
    }

    fn clear(&self) -> Result<usize> {
        Ok(self.conn.execute(r#"DELETE FROM "type" WHERE 1=1"#, [])?)
    }

    fn find(&self, key: TypeId) -> Result<Option<ItemType>> {
        let sql = format!(r#"SELECT {TYPE_COLUMNS} FROM "type" WHERE TypeId = ?1"#);
        let row = self
            .conn
            .query_row(&sql, params![key], map_type_row)
            .optional()?;
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Schema;

    fn setup() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        Schema::new(&conn).create_all().unwrap();
        conn
    }

    fn types() -> Vec<ItemType> {
        vec![
            ItemType {
                type_id: 1,
                capacity: Some(1.2),
                description: "Type Description here".to_string(),
                graphic_id: Some(10),
                group_id: 100,
                icon_id: Some(1000),
                market_group_id: Some(10000),
                mass: Some(56.7),
                name: "Type Name Here".to_string(),
                packaged_volume: Some(2.3),
                portion_size: Some(100000),
                published: false,
                radius: Some(3.4),
                volume: Some(4.5),
            },
            ItemType {
                type_id: 2,
                capacity: Some(2.2),
                description: "Type Description here 2".to_string(),
                graphic_id: Some(20),
                group_id: 200,
                icon_id: Some(2000),
                market_group_id: Some(20000),
                mass: Some(66.7),
                name: "Type Name Here 2".to_string(),
                packaged_volume: Some(3.3),
                portion_size: Some(200000),
                published: true,
                radius: Some(4.4),
                volume: Some(5.5),
            },
        ]
    }

    fn seeded() -> Connection {
        let conn = setup();
        let repo = ItemTypes::new(&conn);
        let count: usize = types().iter().map(|t| repo.insert(t).unwrap()).sum();
        assert_eq!(count, 2);
        conn
    }

    #[test]
    fn read_returns_every_field() {
        let conn = seeded();
        let repo = ItemTypes::new(&conn);
        assert_eq!(repo.all().unwrap(), types());
        assert_eq!(repo.get(&ItemTypeFilter::by_id(2)).unwrap(), vec![types()[1].clone()]);
        assert_eq!(repo.get(&ItemTypeFilter::by_group(100)).unwrap(), vec![types()[0].clone()]);
    }

    #[test]
    fn optional_attributes_roundtrip_as_null() {
        let conn = setup();
        let repo = ItemTypes::new(&conn);
        let bare = ItemType {
            type_id: 5,
            group_id: 100,
            name: "Bare".to_string(),
            description: String::new(),
            ..ItemType::default()
        };
        repo.insert(&bare).unwrap();
        assert_eq!(repo.find(5).unwrap(), Some(bare));

        let with_market = repo
            .get(&ItemTypeFilter {
                market_group_id: Some(10000),
                ..ItemTypeFilter::default()
            })
            .unwrap();
        assert!(with_market.is_empty());
    }

    #[test]
    fn update_changes_single_attribute() {
        let conn = seeded();
        let repo = ItemTypes::new(&conn);
        let mut types = types();
        types[0].mass = Some(69.0);
        types[0].icon_id = None;

        assert_eq!(repo.update(&types[0]).unwrap(), 1);
        assert_eq!(repo.all().unwrap(), types);

        types[0].type_id = 77;
        assert_eq!(repo.update(&types[0]).unwrap(), 0);
    }

    #[test]
    fn insert_or_update_on_existing_key() {
        let conn = seeded();
        let repo = ItemTypes::new(&conn);
        let mut t = types()[1].clone();
        t.name = "Renamed".to_string();
        t.published = false;
        assert_eq!(repo.insert_or_update(&t).unwrap(), 1);
        assert_eq!(repo.find(2).unwrap(), Some(t));
        assert_eq!(repo.all().unwrap().len(), 2);
    }

    #[test]
    fn delete_then_duplicate_checks() {
        let conn = seeded();
        let repo = ItemTypes::new(&conn);
        assert_eq!(repo.delete(1).unwrap(), 1);
        assert_eq!(repo.all().unwrap(), vec![types()[1].clone()]);
        assert!(repo.insert(&types()[1]).unwrap_err().is_constraint());
    }

    #[test]
    fn name_like_and_published_filters() {
        let conn = seeded();
        let repo = ItemTypes::new(&conn);
        let hits = repo
            .get(&ItemTypeFilter {
                name: Some("%2".to_string()),
                published: Some(true),
                ..ItemTypeFilter::default()
            })
            .unwrap();
        assert_eq!(hits, vec![types()[1].clone()]);
    }

    #[test]
    fn portion_size_filter_matches_exactly() {
        let conn = seeded();
        let repo = ItemTypes::new(&conn);
        let hits = repo
            .get(&ItemTypeFilter {
                portion_size: Some(200000),
                ..ItemTypeFilter::default()
            })
            .unwrap();
        assert_eq!(hits, vec![types()[1].clone()]);

        let misses = repo
            .get(&ItemTypeFilter {
                portion_size: Some(1),
                ..ItemTypeFilter::default()
            })
            .unwrap();
        assert!(misses.is_empty());
    }
}
