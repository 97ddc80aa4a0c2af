use serde::{Deserialize, Serialize};

use super::MarketGroupId;

/// Node of the market browser tree. Roots have no `parent_group_id`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketGroup {
    pub market_group_id: MarketGroupId,
    #[serde(default)]
    pub parent_group_id: Option<MarketGroupId>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub name: String,
}

impl MarketGroup {
    pub fn new(
        market_group_id: MarketGroupId,
        parent_group_id: Option<MarketGroupId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            market_group_id,
            parent_group_id,
            description: description.into(),
            name: name.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarketGroupFilter {
    pub market_group_id: Option<MarketGroupId>,
    pub parent_group_id: Option<MarketGroupId>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl MarketGroupFilter {
    pub fn by_id(market_group_id: MarketGroupId) -> Self {
        Self {
            market_group_id: Some(market_group_id),
            ..Self::default()
        }
    }

    pub fn children_of(parent_group_id: MarketGroupId) -> Self {
        Self {
            parent_group_id: Some(parent_group_id),
            ..Self::default()
        }
    }
}
