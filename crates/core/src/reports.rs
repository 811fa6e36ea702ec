//! Back-office reporting aggregator.
//!
//! Pure and read-only: every call recomputes the summaries from the order,
//! product, user and category lists it is handed. Nothing is cached and no
//! incremental state is kept; catalogue sizes make recomputation cheap.
//!
//! Aggregations that present grouped values build explicit
//! first-observed-order sequences, never relying on map iteration order.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Category, Order, Product, User};
use crate::types::{CategoryId, PaymentType, Role, UserId};

/// How many rows the "top" product/customer lists carry.
const TOP_N: usize = 5;

/// Full report bundle for the admin dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reports {
    pub financial: FinancialReport,
    pub product: ProductReport,
    pub customer: CustomerReport,
}

/// Revenue, cost and profit summaries.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialReport {
    pub total_revenue: Decimal,
    pub total_cost_of_sales: Decimal,
    pub total_profit: Decimal,
    /// Revenue per payment type, observed types only, in first-observed order.
    pub revenue_by_payment: Vec<PaymentRevenue>,
}

/// Revenue attributed to one payment type.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRevenue {
    pub payment_type: PaymentType,
    pub revenue: Decimal,
}

/// Product performance summaries.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductReport {
    /// Top products by units sold, descending.
    pub best_selling_products: Vec<Product>,
    /// Top products by detail views, descending.
    pub most_viewed_products: Vec<Product>,
    /// Sales value per category, categories with at least one sale only,
    /// descending by sales.
    pub sales_by_category: Vec<CategorySales>,
    /// Sold counts for products currently flagged as promotions.
    pub promotion_performance: Vec<PromotionRow>,
}

/// Sales attributed to one category.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySales {
    pub category_id: CategoryId,
    /// Resolved category name; falls back to the raw id string when the
    /// category record no longer exists.
    pub category_name: String,
    pub sales: Decimal,
}

/// One promotion product's performance.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionRow {
    pub id: crate::types::ProductId,
    pub name: String,
    pub sold_count: u64,
}

/// Customer behavior summaries.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerReport {
    /// Top customers by total spend, descending.
    pub top_spending_customers: Vec<CustomerRow>,
    /// Total revenue divided by order count, zero when there are no orders.
    pub average_order_value: Decimal,
    /// Spend and order count for every customer who ordered, descending by
    /// spend.
    pub purchase_frequency: Vec<CustomerRow>,
    /// Customer-role users bucketed by saved goal preference; empty
    /// preferences fall into the "Not set" bucket.
    pub goal_preference_distribution: Vec<GoalPreferenceCount>,
}

/// Spend/order summary for one customer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRow {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub total_spend: Decimal,
    pub order_count: u64,
}

/// Count of customers sharing one saved goal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPreferenceCount {
    pub goal: String,
    pub customers: u64,
}

/// Build the full report bundle from the current catalogue snapshot.
#[must_use]
pub fn build_reports(
    products: &[Product],
    orders: &[Order],
    users: &[User],
    categories: &[Category],
) -> Reports {
    Reports {
        financial: financial_report(orders),
        product: product_report(products, orders, categories),
        customer: customer_report(orders, users),
    }
}

fn financial_report(orders: &[Order]) -> FinancialReport {
    let total_revenue: Decimal = orders.iter().map(|o| o.sub_total).sum();
    let total_cost_of_sales: Decimal = orders.iter().map(|o| o.total_cost).sum();

    let mut revenue_by_payment: Vec<PaymentRevenue> = Vec::new();
    let mut index_by_payment: HashMap<PaymentType, usize> = HashMap::new();
    for order in orders {
        match index_by_payment.get(&order.payment_type) {
            Some(&i) => revenue_by_payment[i].revenue += order.sub_total,
            None => {
                index_by_payment.insert(order.payment_type, revenue_by_payment.len());
                revenue_by_payment.push(PaymentRevenue {
                    payment_type: order.payment_type,
                    revenue: order.sub_total,
                });
            }
        }
    }

    FinancialReport {
        total_revenue,
        total_cost_of_sales,
        total_profit: total_revenue - total_cost_of_sales,
        revenue_by_payment,
    }
}

fn product_report(products: &[Product], orders: &[Order], categories: &[Category]) -> ProductReport {
    let mut by_sold: Vec<Product> = products.to_vec();
    by_sold.sort_by(|a, b| b.sold_count.cmp(&a.sold_count));
    by_sold.truncate(TOP_N);

    let mut by_views: Vec<Product> = products.to_vec();
    by_views.sort_by(|a, b| b.views_count.cmp(&a.views_count));
    by_views.truncate(TOP_N);

    let category_of: HashMap<&str, &CategoryId> = products
        .iter()
        .map(|p| (p.id.as_str(), &p.category_id))
        .collect();
    let name_of: HashMap<&str, &str> = categories
        .iter()
        .map(|c| (c.id.as_str(), c.name.as_str()))
        .collect();

    let mut sales_by_category: Vec<CategorySales> = Vec::new();
    let mut index_by_category: HashMap<String, usize> = HashMap::new();
    for order in orders {
        for item in &order.items {
            // Lines whose product was deleted cannot be attributed
            let Some(category_id) = category_of.get(item.product_id.as_str()) else {
                continue;
            };
            match index_by_category.get(category_id.as_str()) {
                Some(&i) => sales_by_category[i].sales += item.line_total,
                None => {
                    index_by_category.insert(category_id.as_str().to_owned(), sales_by_category.len());
                    sales_by_category.push(CategorySales {
                        category_id: (*category_id).clone(),
                        category_name: name_of
                            .get(category_id.as_str())
                            .map_or_else(|| category_id.as_str().to_owned(), ToString::to_string),
                        sales: item.line_total,
                    });
                }
            }
        }
    }
    sales_by_category.sort_by(|a, b| b.sales.cmp(&a.sales));

    let promotion_performance = products
        .iter()
        .filter(|p| p.is_promotion)
        .map(|p| PromotionRow {
            id: p.id.clone(),
            name: p.name.clone(),
            sold_count: p.sold_count,
        })
        .collect();

    ProductReport {
        best_selling_products: by_sold,
        most_viewed_products: by_views,
        sales_by_category,
        promotion_performance,
    }
}

fn customer_report(orders: &[Order], users: &[User]) -> CustomerReport {
    let user_of: HashMap<&str, &User> = users.iter().map(|u| (u.id.as_str(), u)).collect();

    let mut rows: Vec<CustomerRow> = Vec::new();
    let mut index_by_user: HashMap<String, usize> = HashMap::new();
    for order in orders {
        match index_by_user.get(order.user_id.as_str()) {
            Some(&i) => {
                rows[i].total_spend += order.sub_total;
                rows[i].order_count += 1;
            }
            None => {
                index_by_user.insert(order.user_id.as_str().to_owned(), rows.len());
                let user = user_of.get(order.user_id.as_str());
                rows.push(CustomerRow {
                    user_id: order.user_id.clone(),
                    name: user.map_or_else(
                        || "Unknown".to_owned(),
                        |u| {
                            if u.full_name.is_empty() {
                                u.email.as_str().to_owned()
                            } else {
                                u.full_name.clone()
                            }
                        },
                    ),
                    email: user.map_or_else(|| "-".to_owned(), |u| u.email.as_str().to_owned()),
                    total_spend: order.sub_total,
                    order_count: 1,
                });
            }
        }
    }
    rows.sort_by(|a, b| b.total_spend.cmp(&a.total_spend));

    let total_revenue: Decimal = orders.iter().map(|o| o.sub_total).sum();
    let average_order_value = if orders.is_empty() {
        Decimal::ZERO
    } else {
        total_revenue / Decimal::from(orders.len() as u64)
    };

    let mut goal_preference_distribution: Vec<GoalPreferenceCount> = Vec::new();
    let mut index_by_goal: HashMap<String, usize> = HashMap::new();
    for user in users.iter().filter(|u| u.role == Role::Customer) {
        let goal = if user.saved_goal.is_empty() {
            "Not set"
        } else {
            user.saved_goal.as_str()
        };
        match index_by_goal.get(goal) {
            Some(&i) => goal_preference_distribution[i].customers += 1,
            None => {
                index_by_goal.insert(goal.to_owned(), goal_preference_distribution.len());
                goal_preference_distribution.push(GoalPreferenceCount {
                    goal: goal.to_owned(),
                    customers: 1,
                });
            }
        }
    }

    CustomerReport {
        top_spending_customers: rows.iter().take(TOP_N).cloned().collect(),
        average_order_value,
        purchase_frequency: rows,
        goal_preference_distribution,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use rust_decimal::dec;

    use crate::models::LineItem;
    use crate::test_support::{priced, product_named};
    use crate::types::{Email, ProductId};

    use super::*;

    fn user(id: &str, name: &str, role: Role, goal: &str) -> User {
        User {
            id: UserId::new(id),
            full_name: name.to_owned(),
            email: Email::parse(&format!("{id}@example.com")).unwrap(),
            password: None,
            role,
            saved_goal: goal.to_owned(),
            saved_budget: String::new(),
            created_at: Utc::now(),
        }
    }

    fn order_for(user_id: &str, product: &Product, qty: u32, payment: PaymentType) -> Order {
        Order::new(
            UserId::new(user_id),
            vec![LineItem::snapshot(product, qty)],
            payment,
            Utc::now(),
        )
    }

    fn fixture() -> (Vec<Product>, Vec<Order>, Vec<User>, Vec<Category>) {
        let mut yogurt = priced(product_named("p1", "Greek Yogurt"), dec!(50));
        yogurt.cost = dec!(30);
        yogurt.sold_count = 12;
        yogurt.views_count = 3;
        yogurt.is_promotion = true;

        let mut tuna = priced(product_named("p2", "Tuna Chunks"), dec!(25));
        tuna.cost = dec!(15);
        tuna.category_id = CategoryId::new("cat-pantry");
        tuna.sold_count = 4;
        tuna.views_count = 40;

        let orders = vec![
            order_for("u1", &yogurt, 2, PaymentType::Card), // 100 revenue, 60 cost
            order_for("u2", &tuna, 1, PaymentType::Cash),   // 25 revenue, 15 cost
            order_for("u1", &tuna, 2, PaymentType::Card),   // 50 revenue, 30 cost
        ];

        let users = vec![
            user("u1", "Thandi M", Role::Customer, "Weight Loss"),
            user("u2", "Sipho K", Role::Customer, ""),
            user("u3", "Admin", Role::Admin, ""),
            user("u4", "Lerato P", Role::Customer, "Weight Loss"),
        ];

        let categories = vec![
            Category {
                id: CategoryId::new("cat-test"),
                name: "Dairy".to_owned(),
            },
            Category {
                id: CategoryId::new("cat-pantry"),
                name: "Pantry".to_owned(),
            },
        ];

        (vec![yogurt, tuna], orders, users, categories)
    }

    #[test]
    fn test_financial_totals() {
        let (products, orders, users, categories) = fixture();
        let reports = build_reports(&products, &orders, &users, &categories);

        assert_eq!(reports.financial.total_revenue, dec!(175));
        assert_eq!(reports.financial.total_cost_of_sales, dec!(105));
        assert_eq!(reports.financial.total_profit, dec!(70));

        let by_payment = &reports.financial.revenue_by_payment;
        assert_eq!(by_payment.len(), 2);
        assert_eq!(by_payment[0].payment_type, PaymentType::Card);
        assert_eq!(by_payment[0].revenue, dec!(150));
        assert_eq!(by_payment[1].payment_type, PaymentType::Cash);
        assert_eq!(by_payment[1].revenue, dec!(25));
    }

    #[test]
    fn test_zero_orders_yield_zero_averages_without_error() {
        let (products, _, users, categories) = fixture();
        let reports = build_reports(&products, &[], &users, &categories);

        assert_eq!(reports.financial.total_revenue, Decimal::ZERO);
        assert_eq!(reports.financial.total_profit, Decimal::ZERO);
        assert_eq!(reports.customer.average_order_value, Decimal::ZERO);
        assert!(reports.customer.purchase_frequency.is_empty());
        assert!(reports.product.sales_by_category.is_empty());
    }

    #[test]
    fn test_product_rankings() {
        let (products, orders, users, categories) = fixture();
        let reports = build_reports(&products, &orders, &users, &categories);

        assert_eq!(
            reports.product.best_selling_products[0].id,
            ProductId::new("p1")
        );
        assert_eq!(
            reports.product.most_viewed_products[0].id,
            ProductId::new("p2")
        );

        let promo = &reports.product.promotion_performance;
        assert_eq!(promo.len(), 1);
        assert_eq!(promo[0].name, "Greek Yogurt");
        assert_eq!(promo[0].sold_count, 12);
    }

    #[test]
    fn test_sales_by_category_sorted_and_resolved() {
        let (products, orders, users, categories) = fixture();
        let reports = build_reports(&products, &orders, &users, &categories);

        let sales = &reports.product.sales_by_category;
        assert_eq!(sales.len(), 2);
        assert_eq!(sales[0].category_name, "Dairy");
        assert_eq!(sales[0].sales, dec!(100));
        assert_eq!(sales[1].category_name, "Pantry");
        assert_eq!(sales[1].sales, dec!(75));
    }

    #[test]
    fn test_unresolved_category_falls_back_to_id() {
        let (products, orders, users, _) = fixture();
        let reports = build_reports(&products, &orders, &users, &[]);

        assert!(
            reports
                .product
                .sales_by_category
                .iter()
                .any(|row| row.category_name == "cat-test")
        );
    }

    #[test]
    fn test_customer_spend_and_frequency() {
        let (products, orders, users, categories) = fixture();
        let reports = build_reports(&products, &orders, &users, &categories);

        let top = &reports.customer.top_spending_customers;
        assert_eq!(top[0].name, "Thandi M");
        assert_eq!(top[0].total_spend, dec!(150));
        assert_eq!(top[0].order_count, 2);
        assert_eq!(top[1].total_spend, dec!(25));

        // 175 / 3 orders
        assert_eq!(
            reports.customer.average_order_value,
            dec!(175) / dec!(3)
        );
    }

    #[test]
    fn test_unknown_customer_fallbacks() {
        let (products, orders, _, categories) = fixture();
        let reports = build_reports(&products, &orders, &[], &categories);

        let top = &reports.customer.top_spending_customers;
        assert_eq!(top[0].name, "Unknown");
        assert_eq!(top[0].email, "-");
    }

    #[test]
    fn test_goal_preference_distribution_counts_customers_only() {
        let (products, orders, users, categories) = fixture();
        let reports = build_reports(&products, &orders, &users, &categories);

        let dist = &reports.customer.goal_preference_distribution;
        assert_eq!(dist.len(), 2);
        assert_eq!(dist[0].goal, "Weight Loss");
        assert_eq!(dist[0].customers, 2);
        assert_eq!(dist[1].goal, "Not set");
        assert_eq!(dist[1].customers, 1);
    }
}
