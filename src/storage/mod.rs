//! SQLite-backed reference data store.
//!
//! [`Repository`] borrows a connection owned by the caller and hands out one
//! façade per table. Nothing here opens, pools or closes connections except
//! the [`connection::open`] helper used by the binary.

mod category;
pub mod connection;
mod error;
mod group;
mod item_type;
mod market_group;
pub mod query;
mod schema;
mod traits;
mod web_cache;

use rusqlite::Connection;

pub use category::Categories;
pub use error::{Result, StorageError};
pub use group::Groups;
pub use item_type::ItemTypes;
pub use market_group::MarketGroups;
pub use schema::{Schema, TABLES};
pub use traits::EntityStore;
pub use web_cache::WebCacheRepository;

#[derive(Clone, Copy)]
pub struct Repository<'c> {
    conn: &'c Connection,
}

impl<'c> Repository<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &'c Connection {
        self.conn
    }

    /// Create all tables that are missing. Returns the number created.
    pub fn create_schema(&self) -> Result<usize> {
        Schema::new(self.conn).create_all()
    }

    /// Drop all tables that exist. Returns the number dropped.
    pub fn drop_schema(&self) -> Result<usize> {
        Schema::new(self.conn).drop_all()
    }

    pub fn recreate_schema(&self) -> Result<()> {
        Schema::new(self.conn).recreate()
    }

    pub fn categories(&self) -> Categories<'c> {
        Categories::new(self.conn)
    }

    pub fn groups(&self) -> Groups<'c> {
        Groups::new(self.conn)
    }

    pub fn item_types(&self) -> ItemTypes<'c> {
        ItemTypes::new(self.conn)
    }

    pub fn market_groups(&self) -> MarketGroups<'c> {
        MarketGroups::new(self.conn)
    }

    pub fn web_cache(&self) -> WebCacheRepository<'c> {
        WebCacheRepository::new(self.conn)
    }
}
