//! Product category entity.

use serde::{Deserialize, Serialize};

use crate::types::CategoryId;

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    /// Key of the sentinel category that absorbs products whose category was
    /// deleted. Guaranteed to exist whenever a category deletion happens.
    pub const UNCATEGORIZED_ID: &'static str = "uncategorized";

    /// The sentinel "Uncategorized" category.
    #[must_use]
    pub fn uncategorized() -> Self {
        Self {
            id: CategoryId::new(Self::UNCATEGORIZED_ID),
            name: "Uncategorized".to_owned(),
        }
    }
}
