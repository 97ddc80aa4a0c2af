use serde::{Deserialize, Serialize};

use super::{GroupId, MarketGroupId, TypeId};

/// A concrete item type. The numeric attributes are absent for many types
/// in the catalog and are stored as SQL `NULL`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemType {
    pub type_id: TypeId,
    pub group_id: GroupId,
    #[serde(default)]
    pub market_group_id: Option<MarketGroupId>,
    pub name: String,
    pub description: String,
    pub published: bool,
    #[serde(default)]
    pub capacity: Option<f64>,
    #[serde(default)]
    pub graphic_id: Option<i64>,
    #[serde(default)]
    pub icon_id: Option<i64>,
    #[serde(default)]
    pub mass: Option<f64>,
    #[serde(default)]
    pub packaged_volume: Option<f64>,
    #[serde(default)]
    pub portion_size: Option<i64>,
    #[serde(default)]
    pub radius: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
}

/// `name` and `description` are `LIKE` patterns, the rest match exactly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemTypeFilter {
    pub type_id: Option<TypeId>,
    pub group_id: Option<GroupId>,
    pub market_group_id: Option<MarketGroupId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub published: Option<bool>,
    pub graphic_id: Option<i64>,
    pub icon_id: Option<i64>,
    pub portion_size: Option<i64>,
}

impl ItemTypeFilter {
    pub fn by_id(type_id: TypeId) -> Self {
        Self {
            type_id: Some(type_id),
            ..Self::default()
        }
    }

    pub fn by_group(group_id: GroupId) -> Self {
        Self {
            group_id: Some(group_id),
            ..Self::default()
        }
    }
}
