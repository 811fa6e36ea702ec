//! Wishlist entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ProductId, UserId};

/// A user's wishlist, created lazily on the first toggle.
///
/// Product ids keep insertion order; membership is toggled, never duplicated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wishlist {
    pub user_id: UserId,
    #[serde(default)]
    pub product_ids: Vec<ProductId>,
    pub updated_at: DateTime<Utc>,
}

impl Wishlist {
    /// An empty wishlist for a user.
    #[must_use]
    pub fn empty(user_id: UserId, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            product_ids: Vec::new(),
            updated_at: now,
        }
    }

    /// Toggle a product's membership and bump the updated timestamp.
    pub fn toggle(&mut self, product_id: &ProductId, now: DateTime<Utc>) {
        if self.product_ids.contains(product_id) {
            self.product_ids.retain(|id| id != product_id);
        } else {
            self.product_ids.push(product_id.clone());
        }
        self.updated_at = now;
    }
}
