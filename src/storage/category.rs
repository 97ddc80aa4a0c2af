use rusqlite::{params, Connection, OptionalExtension};

use super::{query::Query, traits::EntityStore, Result};
use crate::types::{Category, CategoryFilter, CategoryId};

const SELECT_CATEGORY: &str = r#"
SELECT CategoryId, Name, Published
FROM category
WHERE 1=1"#;

fn map_category_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        category_id: row.get(0)?,
        name: row.get(1)?,
        published: row.get(2)?,
    })
}

fn db_insert_category(conn: &Connection, category: &Category) -> rusqlite::Result<usize> {
    conn.execute(
        "INSERT INTO category (CategoryId, Name, Published) VALUES (?1, ?2, ?3)",
        params![category.category_id, category.name, category.published],
    )
}

fn db_upsert_category(conn: &Connection, category: &Category) -> rusqlite::Result<usize> {
    conn.execute(
        "INSERT INTO category (CategoryId, Name, Published) VALUES (?1, ?2, ?3)
                 ON CONFLICT(CategoryId) DO UPDATE SET Name=excluded.Name, Published=excluded.Published",
        params![category.category_id, category.name, category.published],
    )
}

fn db_update_category(conn: &Connection, category: &Category) -> rusqlite::Result<usize> {
    conn.execute(
        r#"
        UPDATE category
        SET Name = ?2,
            Published = ?3
        WHERE CategoryId = ?1
        "#,
        params![category.category_id, category.name, category.published],
    )
}

fn db_delete_category(conn: &Connection, category_id: CategoryId) -> rusqlite::Result<usize> {
    conn.execute(
        "DELETE FROM category WHERE CategoryId = ?1",
        params![category_id],
    )
}

fn db_get_categories(conn: &Connection, filter: &CategoryFilter) -> rusqlite::Result<Vec<Category>> {
    Query::new(SELECT_CATEGORY)
        .and_eq("CategoryId", filter.category_id)
        .and_like("Name", filter.name.as_deref())
        .and_eq("Published", filter.published)
        .order_by("CategoryId")
        .query_map(conn, map_category_row)
}

/// Access to the `category` table.
#[derive(Clone, Copy)]
pub struct Categories<'c> {
    conn: &'c Connection,
}

impl<'c> Categories<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    /// Delete `category` only if the stored row still equals it on every
    /// column, so a stale copy never removes a row that has since changed.
    pub fn delete_matching(&self, category: &Category) -> Result<usize> {
        let rows = Query::new("DELETE FROM category WHERE CategoryId = ?1")
            .bind(category.category_id)
            .and_eq("Name", Some(category.name.clone()))
            .and_eq("Published", Some(category.published))
            .execute(self.conn)?;
        Ok(rows)
    }
}

impl EntityStore for Categories<'_> {
    type Row = Category;
    type Key = CategoryId;
    type Filter = CategoryFilter;

    fn insert(&self, row: &Category) -> Result<usize> {
        Ok(db_insert_category(self.conn, row)?)
    }

    fn insert_or_update(&self, row: &Category) -> Result<usize> {
        Ok(db_upsert_category(self.conn, row)?)
    }

    fn update(&self, row: &Category) -> Result<usize> {
        Ok(db_update_category(self.conn, row)?)
    }

    fn delete(&self, key: CategoryId) -> Result<usize> {
        Ok(db_delete_category(self.conn, key)?)
    }

    fn get(&self, filter: &CategoryFilter) -> Result<Vec<Category>> {
        Ok(db_get_categories(self.conn, filter)?)
    }

    fn clear(&self) -> Result<usize> {
        Ok(self.conn.execute("DELETE FROM category WHERE 1=1", [])?)
    }

    fn find(&self, key: CategoryId) -> Result<Option<Category>> {
        let row = self
            .conn
            .query_row(
                "SELECT CategoryId, Name, Published FROM category WHERE CategoryId = ?1",
                params![key],
                map_category_row,
            )
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

    fn fakes() -> Vec<Category> {
        vec![
            Category::new(123, "Fake Category", false),
            Category::new(124, "Fake Category2", true),
        ]
    }

    #[test]
    fn get_on_empty_table_returns_nothing() {
        let conn = setup();
        let repo = Categories::new(&conn);
        assert!(repo.all().unwrap().is_empty());
    }

    #[test]
    fn insert_then_get_roundtrips() {
        let conn = setup();
        let repo = Categories::new(&conn);
        let fake = Category::new(123, "Fake Category", false);

        assert_eq!(repo.insert(&fake).unwrap(), 1);
        assert_eq!(repo.get(&CategoryFilter::by_id(123)).unwrap(), vec![fake.clone()]);
        assert_eq!(repo.find(123).unwrap(), Some(fake));
        assert_eq!(repo.find(999).unwrap(), None);
    }

    #[test]
    fn duplicate_insert_is_constraint_error_and_keeps_row() {
        let conn = setup();
        let repo = Categories::new(&conn);
        let fake = Category::new(123, "Fake Category", false);
        repo.insert(&fake).unwrap();

        let err = repo
            .insert(&Category::new(123, "Other", true))
            .expect_err("duplicate key must fail");
        assert!(err.is_constraint());
        assert_eq!(repo.all().unwrap(), vec![fake]);
    }

    #[test]
    fn filters_combine_and_skip_absent_values() {
        let conn = setup();
        let repo = Categories::new(&conn);
        for c in fakes() {
            repo.insert(&c).unwrap();
        }

        assert_eq!(repo.get(&CategoryFilter::default()).unwrap().len(), 2);
        let by_name = repo.get(&CategoryFilter::name_like("%2")).unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].category_id, 124);

        let unpublished = repo
            .get(&CategoryFilter {
                published: Some(false),
                ..CategoryFilter::default()
            })
            .unwrap();
        assert_eq!(unpublished, vec![fakes()[0].clone()]);

        let none = repo
            .get(&CategoryFilter {
                category_id: Some(123),
                published: Some(true),
                ..CategoryFilter::default()
            })
            .unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn insert_or_update_inserts_then_overwrites() {
        let conn = setup();
        let repo = Categories::new(&conn);
        let mut fake = Category::new(123, "Fake Category", false);

        assert_eq!(repo.insert_or_update(&fake).unwrap(), 1);
        assert_eq!(repo.all().unwrap(), vec![fake.clone()]);

        fake.name = "Fake Category Renamed".to_string();
        fake.published = true;
        assert_eq!(repo.insert_or_update(&fake).unwrap(), 1);
        assert_eq!(repo.all().unwrap(), vec![fake]);
    }

    #[test]
    fn update_reports_zero_for_missing_key() {
        let conn = setup();
        let repo = Categories::new(&conn);
        let mut fake = Category::new(123, "Fake Category", false);
        repo.insert(&fake).unwrap();

        fake.name = "Fake Category Renamed".to_string();
        fake.published = true;
        assert_eq!(repo.update(&fake).unwrap(), 1);
        assert_eq!(repo.all().unwrap(), vec![fake.clone()]);

        fake.category_id = 321;
        assert_eq!(repo.update(&fake).unwrap(), 0);
        assert_eq!(repo.all().unwrap().len(), 1);
    }

    #[test]
    fn delete_removes_only_that_row() {
        let conn = setup();
        let repo = Categories::new(&conn);
        for c in fakes() {
            repo.insert(&c).unwrap();
        }

        assert_eq!(repo.delete(123).unwrap(), 1);
        assert_eq!(repo.all().unwrap(), vec![fakes()[1].clone()]);
        assert_eq!(repo.delete(123).unwrap(), 0);
        assert_eq!(repo.all().unwrap().len(), 1);
    }

    #[test]
    fn delete_matching_requires_every_column_to_match() {
        let conn = setup();
        let repo = Categories::new(&conn);
        let mut fakes = fakes();
        for c in &fakes {
            repo.insert(c).unwrap();
        }

        assert_eq!(repo.delete_matching(&fakes[0]).unwrap(), 1);
        assert_eq!(repo.delete_matching(&fakes[0]).unwrap(), 0);

        // Right key, stale name.
        fakes[0].category_id = 124;
        assert_eq!(repo.delete_matching(&fakes[0]).unwrap(), 0);
        assert_eq!(repo.all().unwrap().len(), 1);

        // Right key and name, stale published flag.
        let stale = Category::new(124, "Fake Category2", false);
        assert_eq!(repo.delete_matching(&stale).unwrap(), 0);
        assert_eq!(repo.all().unwrap(), vec![fakes[1].clone()]);

        assert_eq!(repo.delete_matching(&fakes[1]).unwrap(), 1);
        assert!(repo.all().unwrap().is_empty());
    }

    #[test]
    fn clear_empties_table_and_fails_once_dropped() {
        let conn = setup();
        let repo = Categories::new(&conn);
        for c in fakes() {
            repo.insert(&c).unwrap();
        }
        assert_eq!(repo.clear().unwrap(), 2);
        assert_eq!(repo.clear().unwrap(), 0);

        Schema::new(&conn).drop_all().unwrap();
        let err = repo.clear().unwrap_err();
        assert!(!err.is_constraint());
    }
}
