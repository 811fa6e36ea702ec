//! Initial catalogue contents.
//!
//! Written to the document store the first time the server starts against an
//! empty store. Product ids `p1`..`p20` line up with the ingredient lists in
//! the weekly meal plans.

use chrono::{DateTime, Utc};
use goalgrocer_core::plans::GOAL_LEAN_MUSCLE;
use goalgrocer_core::recommend::{GOAL_MAINTENANCE, GOAL_WEIGHT_LOSS};
use goalgrocer_core::{Category, CategoryId, Email, EmailError, Product, ProductId, Role, User, UserId};
use rust_decimal::{Decimal, dec};

/// The seed categories.
#[must_use]
pub fn categories() -> Vec<Category> {
    [
        ("cat-meat", "Meat & Seafood"),
        ("cat-dairy", "Dairy & Eggs"),
        ("cat-pantry", "Pantry & Grains"),
        ("cat-produce", "Fruit & Veg"),
        ("cat-supplements", "Supplements"),
    ]
    .into_iter()
    .map(|(id, name)| Category {
        id: CategoryId::new(id),
        name: name.to_owned(),
    })
    .collect()
}

struct Row {
    id: &'static str,
    name: &'static str,
    price: Decimal,
    cost: Decimal,
    category: &'static str,
    tags: &'static [&'static str],
    calories: f64,
    protein: f64,
    badges: &'static [&'static str],
    image: &'static str,
    promo: bool,
}

/// The seed products. Calories and protein are per serving.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn products() -> Vec<Product> {
    let rows = [
        Row {
            id: "p1",
            name: "Rolled Oats 1kg",
            price: dec!(44.99),
            cost: dec!(28.00),
            category: "cat-pantry",
            tags: &["oats", "breakfast", "whole grain"],
            calories: 150.0,
            protein: 5.0,
            badges: &[GOAL_WEIGHT_LOSS, GOAL_MAINTENANCE],
            image: "/images/rolled-oats.png",
            promo: false,
        },
        Row {
            id: "p2",
            name: "Free Range Eggs 12s",
            price: dec!(52.99),
            cost: dec!(38.00),
            category: "cat-dairy",
            tags: &["eggs", "breakfast", "protein"],
            calories: 70.0,
            protein: 6.0,
            badges: &[GOAL_WEIGHT_LOSS, GOAL_LEAN_MUSCLE],
            image: "/images/free-range-eggs.png",
            promo: false,
        },
        Row {
            id: "p3",
            name: "Whey Protein Vanilla 900g",
            price: dec!(379.99),
            cost: dec!(260.00),
            category: "cat-supplements",
            tags: &["whey", "protein shake", "supplement"],
            calories: 120.0,
            protein: 24.0,
            badges: &[GOAL_LEAN_MUSCLE, GOAL_MAINTENANCE],
            image: "/images/whey-protein-vanilla.png",
            promo: false,
        },
        Row {
            id: "p4",
            name: "Low Fat Greek Yogurt 1kg",
            price: dec!(54.99),
            cost: dec!(34.00),
            category: "cat-dairy",
            tags: &["yogurt", "dairy", "high protein", "snack"],
            calories: 120.0,
            protein: 17.0,
            badges: &[GOAL_WEIGHT_LOSS],
            image: "/images/greek-yogurt.png",
            promo: true,
        },
        Row {
            id: "p5",
            name: "Tuna Chunks in Brine 170g",
            price: dec!(23.99),
            cost: dec!(15.00),
            category: "cat-meat",
            tags: &["tuna", "canned", "fish", "protein"],
            calories: 110.0,
            protein: 24.0,
            badges: &[GOAL_WEIGHT_LOSS],
            image: "/images/tuna-chunks.png",
            promo: false,
        },
        Row {
            id: "p6",
            name: "Chicken Breast Fillets 1kg",
            price: dec!(94.99),
            cost: dec!(62.00),
            category: "cat-meat",
            tags: &["chicken", "lean", "protein"],
            calories: 165.0,
            protein: 31.0,
            badges: &[GOAL_WEIGHT_LOSS, GOAL_LEAN_MUSCLE],
            image: "/images/chicken-breast-fillets.png",
            promo: true,
        },
        Row {
            id: "p7",
            name: "Baby Spinach 200g",
            price: dec!(29.99),
            cost: dec!(16.00),
            category: "cat-produce",
            tags: &["spinach", "greens", "salad"],
            calories: 23.0,
            protein: 2.9,
            badges: &[GOAL_WEIGHT_LOSS],
            image: "/images/baby-spinach.png",
            promo: false,
        },
        Row {
            id: "p8",
            name: "Cottage Cheese 250g",
            price: dec!(32.99),
            cost: dec!(20.00),
            category: "cat-dairy",
            tags: &["cottage cheese", "dairy", "protein"],
            calories: 98.0,
            protein: 11.0,
            badges: &[GOAL_WEIGHT_LOSS],
            image: "/images/cottage-cheese.png",
            promo: false,
        },
        Row {
            id: "p9",
            name: "Brown Rice 2kg",
            price: dec!(59.99),
            cost: dec!(36.00),
            category: "cat-pantry",
            tags: &["rice", "whole grain", "carbs"],
            calories: 215.0,
            protein: 5.0,
            badges: &[GOAL_MAINTENANCE],
            image: "/images/brown-rice.png",
            promo: false,
        },
        Row {
            id: "p10",
            name: "Lean Beef Mince 500g",
            price: dec!(79.99),
            cost: dec!(55.00),
            category: "cat-meat",
            tags: &["beef", "mince", "lean", "protein"],
            calories: 250.0,
            protein: 26.0,
            badges: &[GOAL_LEAN_MUSCLE, GOAL_MAINTENANCE],
            image: "/images/lean-beef-mince.png",
            promo: false,
        },
        Row {
            id: "p11",
            name: "Salmon Fillets 400g",
            price: dec!(149.99),
            cost: dec!(105.00),
            category: "cat-meat",
            tags: &["salmon", "fish", "omega 3"],
            calories: 208.0,
            protein: 20.0,
            badges: &[GOAL_MAINTENANCE, GOAL_LEAN_MUSCLE],
            image: "/images/salmon-fillets.png",
            promo: false,
        },
        Row {
            id: "p12",
            name: "Chickpeas 400g Can",
            price: dec!(18.99),
            cost: dec!(11.00),
            category: "cat-pantry",
            tags: &["chickpeas", "legumes", "plant protein"],
            calories: 164.0,
            protein: 9.0,
            badges: &[GOAL_WEIGHT_LOSS],
            image: "/images/chickpeas-can.png",
            promo: false,
        },
        Row {
            id: "p13",
            name: "Quinoa 500g",
            price: dec!(74.99),
            cost: dec!(46.00),
            category: "cat-pantry",
            tags: &["quinoa", "whole grain"],
            calories: 185.0,
            protein: 8.0,
            badges: &[GOAL_MAINTENANCE],
            image: "/images/quinoa.png",
            promo: false,
        },
        Row {
            id: "p14",
            name: "Whole Wheat Wraps 6s",
            price: dec!(36.99),
            cost: dec!(22.00),
            category: "cat-pantry",
            tags: &["wraps", "whole wheat", "lunch"],
            calories: 180.0,
            protein: 6.0,
            badges: &[],
            image: "/images/whole-wheat-wraps.png",
            promo: true,
        },
        Row {
            id: "p15",
            name: "Avocados 4s",
            price: dec!(49.99),
            cost: dec!(30.00),
            category: "cat-produce",
            tags: &["avocado", "healthy fats"],
            calories: 160.0,
            protein: 2.0,
            badges: &[GOAL_MAINTENANCE],
            image: "/images/avocados.png",
            promo: false,
        },
        Row {
            id: "p16",
            name: "Bananas 1kg",
            price: dec!(24.99),
            cost: dec!(14.00),
            category: "cat-produce",
            tags: &["banana", "fruit", "snack"],
            calories: 105.0,
            protein: 1.3,
            badges: &[],
            image: "/images/bananas.png",
            promo: false,
        },
        Row {
            id: "p17",
            name: "Peanut Butter 800g",
            price: dec!(64.99),
            cost: dec!(40.00),
            category: "cat-pantry",
            tags: &["peanut butter", "spread", "healthy fats"],
            calories: 190.0,
            protein: 8.0,
            badges: &[GOAL_LEAN_MUSCLE],
            image: "/images/peanut-butter.png",
            promo: false,
        },
        Row {
            id: "p18",
            name: "Low Fat Milk 2L",
            price: dec!(38.99),
            cost: dec!(26.00),
            category: "cat-dairy",
            tags: &["milk", "dairy"],
            calories: 102.0,
            protein: 8.0,
            badges: &[GOAL_MAINTENANCE],
            image: "/images/low-fat-milk.png",
            promo: false,
        },
        Row {
            id: "p19",
            name: "Sweet Potatoes 1kg",
            price: dec!(27.99),
            cost: dec!(15.00),
            category: "cat-produce",
            tags: &["sweet potato", "carbs", "veg"],
            calories: 112.0,
            protein: 2.0,
            badges: &[GOAL_WEIGHT_LOSS],
            image: "/images/sweet-potatoes.png",
            promo: false,
        },
        Row {
            id: "p20",
            name: "Frozen Mixed Veggies 1kg",
            price: dec!(42.99),
            cost: dec!(24.00),
            category: "cat-produce",
            tags: &["vegetables", "frozen", "veg"],
            calories: 65.0,
            protein: 3.0,
            badges: &[GOAL_WEIGHT_LOSS],
            image: "/images/frozen-mixed-veggies.png",
            promo: false,
        },
    ];

    rows.into_iter()
        .map(|row| Product {
            id: ProductId::new(row.id),
            name: row.name.to_owned(),
            price: row.price,
            cost: row.cost,
            category_id: CategoryId::new(row.category),
            tags: row.tags.iter().map(|&t| t.to_owned()).collect(),
            calories: row.calories,
            protein: row.protein,
            goal_badges: row.badges.iter().map(|&b| b.to_owned()).collect(),
            image_url: row.image.to_owned(),
            is_promotion: row.promo,
            views_count: 0,
            sold_count: 0,
        })
        .collect()
}

/// The seed accounts: one admin and two customers.
///
/// # Errors
///
/// Returns an error if a seed email fails validation.
pub fn users(now: DateTime<Utc>) -> Result<Vec<User>, EmailError> {
    Ok(vec![
        User {
            id: UserId::new("u-admin"),
            full_name: "Nadia Pillay".to_owned(),
            email: Email::parse("admin@goalgrocer.test")?,
            password: None,
            role: Role::Admin,
            saved_goal: String::new(),
            saved_budget: String::new(),
            created_at: now,
        },
        User {
            id: UserId::new("u-thandi"),
            full_name: "Thandi Mokoena".to_owned(),
            email: Email::parse("thandi@example.com")?,
            password: None,
            role: Role::Customer,
            saved_goal: GOAL_WEIGHT_LOSS.to_owned(),
            saved_budget: "800".to_owned(),
            created_at: now,
        },
        User {
            id: UserId::new("u-sipho"),
            full_name: "Sipho Dlamini".to_owned(),
            email: Email::parse("sipho@example.com")?,
            password: None,
            role: Role::Customer,
            saved_goal: String::new(),
            saved_budget: String::new(),
            created_at: now,
        },
    ])
}
