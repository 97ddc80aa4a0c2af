mod cache_entry;
mod category;
mod group;
mod item_type;
mod market_group;

pub use cache_entry::CacheEntry;
pub use category::{Category, CategoryFilter};
pub use group::{Group, GroupFilter};
pub use item_type::{ItemType, ItemTypeFilter};
pub use market_group::{MarketGroup, MarketGroupFilter};

pub type CategoryId = i64;
pub type GroupId = i64;
pub type TypeId = i64;
pub type MarketGroupId = i64;
