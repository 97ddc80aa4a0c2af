use super::Result;

/// Uniform CRUD contract shared by every entity table.
///
/// Write operations return rows affected. A key that matches nothing is
/// reported as `0`, never as an error.
pub trait EntityStore {
    type Row;
    type Key: Copy;
    type Filter: Default;

    /// Insert a new row. Fails with a constraint error if the key exists.
    fn insert(&self, row: &Self::Row) -> Result<usize>;

    /// Insert, or overwrite every non-key column if the key exists.
    /// Returns 1 on both paths.
    fn insert_or_update(&self, row: &Self::Row) -> Result<usize>;

    /// Rewrite every non-key column of the row with the same key.
    fn update(&self, row: &Self::Row) -> Result<usize>;

    fn delete(&self, key: Self::Key) -> Result<usize>;

    /// All rows matching the present filter fields, in key order.
    fn get(&self, filter: &Self::Filter) -> Result<Vec<Self::Row>>;

    /// Delete every row, keeping the table.
    fn clear(&self) -> Result<usize>;

    fn find(&self, key: Self::Key) -> Result<Option<Self::Row>>;

    fn all(&self) -> Result<Vec<Self::Row>> {
        self.get(&Self::Filter::default())
    }
}
