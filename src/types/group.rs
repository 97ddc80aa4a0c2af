use serde::{Deserialize, Serialize};

use super::{CategoryId, GroupId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub group_id: GroupId,
    pub category_id: CategoryId,
    pub name: String,
    pub published: bool,
}

impl Group {
    pub fn new(
        group_id: GroupId,
        category_id: CategoryId,
        name: impl Into<String>,
        published: bool,
    ) -> Self {
        Self {
            group_id,
            category_id,
            name: name.into(),
            published,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupFilter {
    pub group_id: Option<GroupId>,
    pub category_id: Option<CategoryId>,
    pub name: Option<String>,
    pub published: Option<bool>,
}

impl GroupFilter {
    pub fn by_id(group_id: GroupId) -> Self {
        Self {
            group_id: Some(group_id),
            ..Self::default()
        }
    }

    pub fn by_category(category_id: CategoryId) -> Self {
        Self {
            category_id: Some(category_id),
            ..Self::default()
        }
    }
}
