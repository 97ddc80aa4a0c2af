use serde::{Deserialize, Serialize};

use super::CategoryId;

/// Top level of the item hierarchy; parent of [`super::Group`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: CategoryId,
    pub name: String,
    pub published: bool,
}

impl Category {
    pub fn new(category_id: CategoryId, name: impl Into<String>, published: bool) -> Self {
        Self {
            category_id,
            name: name.into(),
            published,
        }
    }
}

/// Optional criteria for reading categories. `None` leaves the column
/// unconstrained; `name` is a `LIKE` pattern.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    pub category_id: Option<CategoryId>,
    pub name: Option<String>,
    pub published: Option<bool>,
}

impl CategoryFilter {
    pub fn by_id(category_id: CategoryId) -> Self {
        Self {
            category_id: Some(category_id),
            ..Self::default()
        }
    }

    pub fn name_like(pattern: impl Into<String>) -> Self {
        Self {
            name: Some(pattern.into()),
            ..Self::default()
        }
    }
}
