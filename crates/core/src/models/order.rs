//! Order entity with price/cost snapshots.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Product;
use crate::types::{OrderId, OrderStatus, PaymentType, ProductId, UserId};

/// A single product entry within an order.
///
/// Name, unit price and unit cost are snapshots taken at order time, so the
/// line stays truthful when the product is later edited or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: ProductId,
    pub name: String,
    pub qty: u32,
    pub unit_price: Decimal,
    pub unit_cost: Decimal,
    pub line_total: Decimal,
    pub line_cost: Decimal,
}

impl LineItem {
    /// Snapshot a product into a line item.
    ///
    /// A quantity of zero is coerced to one, matching the checkout form's
    /// defaulting.
    #[must_use]
    pub fn snapshot(product: &Product, qty: u32) -> Self {
        let qty = qty.max(1);
        let qty_dec = Decimal::from(qty);
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            qty,
            unit_price: product.price,
            unit_cost: product.cost,
            line_total: qty_dec * product.price,
            line_cost: qty_dec * product.cost,
        }
    }
}

/// A placed order.
///
/// Immutable once created; totals are derived from the line items at
/// construction and never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<LineItem>,
    pub sub_total: Decimal,
    pub total_cost: Decimal,
    pub profit: Decimal,
    pub payment_type: PaymentType,
    #[serde(default)]
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Assemble an order from already-snapshotted line items.
    #[must_use]
    pub fn new(
        user_id: UserId,
        items: Vec<LineItem>,
        payment_type: PaymentType,
        created_at: DateTime<Utc>,
    ) -> Self {
        let sub_total: Decimal = items.iter().map(|item| item.line_total).sum();
        let total_cost: Decimal = items.iter().map(|item| item.line_cost).sum();
        Self {
            id: OrderId::generate(),
            user_id,
            items,
            sub_total,
            total_cost,
            profit: sub_total - total_cost,
            payment_type,
            status: OrderStatus::Complete,
            created_at,
        }
    }
}
