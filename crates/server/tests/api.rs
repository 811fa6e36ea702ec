//! End-to-end API tests against an in-memory document store.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use async_trait::async_trait;
use goalgrocer_core::Product;
use goalgrocer_server::routes;
use goalgrocer_server::services::{Advisor, AiAdvice, AiError, Recommender};
use goalgrocer_server::state::AppState;
use goalgrocer_server::store::{Catalogue, MemoryDocumentStore};
use serde_json::{Value, json};
use tower::ServiceExt;

const ADMIN: &str = "u-admin";
const CUSTOMER: &str = "u-thandi";

async fn app() -> Router {
    let store = Arc::new(MemoryDocumentStore::new());
    let catalogue = Catalogue::load(store).await.unwrap();
    routes::router(AppState {
        catalogue,
        recommender: Recommender::new(None),
    })
}

struct CannedAdvisor(AiAdvice);

#[async_trait]
impl Advisor for CannedAdvisor {
    async fn advise(&self, _: &str, _: &[Product]) -> Result<AiAdvice, AiError> {
        Ok(self.0.clone())
    }
}

async fn app_with_advisor(advice: AiAdvice) -> Router {
    let store = Arc::new(MemoryDocumentStore::new());
    let catalogue = Catalogue::load(store).await.unwrap();
    routes::router(AppState {
        catalogue,
        recommender: Recommender::new(Some(Arc::new(CannedAdvisor(advice)))),
    })
}

fn get(path: &str, user: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(user) = user {
        builder = builder.header("X-User-Id", user);
    }
    builder.body(Body::empty()).unwrap()
}

fn send_json(method: &str, path: &str, user: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(user) = user {
        builder = builder.header("X-User-Id", user);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_health() {
    let app = app().await;
    let (status, body) = call(&app, get("/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_product_listing_and_detail_view_counting() {
    let app = app().await;

    let (status, products) = call(&app, get("/products", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(products.as_array().unwrap().len(), 20);

    let (_, first) = call(&app, get("/products/p4", None)).await;
    assert_eq!(first["viewsCount"], 1);
    let (_, second) = call(&app, get("/products/p4", None)).await;
    assert_eq!(second["viewsCount"], 2);

    let (status, _) = call(&app, get("/products/p-ghost", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_product_listing_filters_and_sorts() {
    let app = app().await;

    let (_, hits) = call(&app, get("/products?search=chicken", None)).await;
    let names: Vec<&str> = hits
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Chicken Breast Fillets 1kg"]);

    let (_, promos) = call(&app, get("/products?promotion=true", None)).await;
    assert!(
        promos
            .as_array()
            .unwrap()
            .iter()
            .all(|p| p["isPromotion"] == true)
    );

    let (_, by_price) = call(&app, get("/products?sort=price-asc", None)).await;
    let prices: Vec<f64> = by_price
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["price"].as_str().unwrap().parse().unwrap())
        .collect();
    assert!(prices.windows(2).all(|w| w[0] <= w[1]));

    let (_, dairy) = call(&app, get("/products?category=cat-dairy", None)).await;
    assert_eq!(dairy.as_array().unwrap().len(), 4);

    let (_, all) = call(&app, get("/products?category=All", None)).await;
    assert_eq!(all.as_array().unwrap().len(), 20);
}

#[tokio::test]
async fn test_admin_order_filters() {
    let app = app().await;

    for payment in ["Card", "Cash"] {
        let body = json!({
            "items": [{ "productId": "p1", "qty": 1 }],
            "paymentType": payment
        });
        let (status, _) = call(
            &app,
            send_json("POST", "/checkout", Some(CUSTOMER), &body),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, all) = call(&app, get("/admin/orders?payment=All", Some(ADMIN))).await;
    assert_eq!(all.as_array().unwrap().len(), 2);

    let (_, cash) = call(&app, get("/admin/orders?payment=Cash", Some(ADMIN))).await;
    assert_eq!(cash.as_array().unwrap().len(), 1);
    assert_eq!(cash[0]["paymentType"], "Cash");

    let (_, complete) = call(&app, get("/admin/orders?status=Complete", Some(ADMIN))).await;
    assert_eq!(complete.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_checkout_snapshots_and_bumps_sold_count() {
    let app = app().await;

    let body = json!({
        "items": [
            { "productId": "p1", "qty": 2 },
            { "productId": "p-ghost", "qty": 1 }
        ],
        "paymentType": "Card"
    });
    let (status, order) = call(
        &app,
        send_json("POST", "/checkout", Some(CUSTOMER), &body),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["items"].as_array().unwrap().len(), 1);
    assert_eq!(order["subTotal"], "89.98");
    assert_eq!(order["status"], "Complete");

    let (_, product) = call(&app, get("/products", None)).await;
    let oats = product
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["id"] == "p1")
        .unwrap();
    assert_eq!(oats["soldCount"], 2);

    let (_, orders) = call(&app, get("/orders", Some(CUSTOMER))).await;
    assert_eq!(orders.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_checkout_requires_known_products() {
    let app = app().await;

    let body = json!({ "items": [{ "productId": "p-ghost" }] });
    let (status, error) = call(
        &app,
        send_json("POST", "/checkout", Some(CUSTOMER), &body),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "None of the requested products exist.");

    let (status, _) = call(
        &app,
        send_json("POST", "/checkout", Some(CUSTOMER), &json!({ "items": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_wishlist_toggle_and_product_delete_cascade() {
    let app = app().await;

    for id in ["p1", "p2"] {
        let (status, _) = call(
            &app,
            send_json(
                "POST",
                "/wishlist/toggle",
                Some(CUSTOMER),
                &json!({ "productId": id }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, _) = call(
        &app,
        Request::builder()
            .method("DELETE")
            .uri("/admin/products/p1")
            .header("X-User-Id", ADMIN)
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, wishlist) = call(&app, get("/wishlist", Some(CUSTOMER))).await;
    assert_eq!(wishlist["productIds"], json!(["p2"]));
}

#[tokio::test]
async fn test_category_delete_reassigns_to_uncategorized() {
    let app = app().await;

    let (status, _) = call(
        &app,
        Request::builder()
            .method("DELETE")
            .uri("/admin/categories/cat-dairy")
            .header("X-User-Id", ADMIN)
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, eggs) = call(&app, get("/products/p2", None)).await;
    assert_eq!(eggs["categoryId"], "uncategorized");

    let (_, categories) = call(&app, get("/categories", None)).await;
    assert!(
        categories
            .as_array()
            .unwrap()
            .iter()
            .any(|c| c["id"] == "uncategorized")
    );
}

#[tokio::test]
async fn test_admin_routes_are_guarded() {
    let app = app().await;

    let (status, _) = call(&app, get("/admin/reports", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = call(&app, get("/admin/reports", Some(CUSTOMER))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = call(&app, get("/admin/reports", Some(ADMIN))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_admin_product_upsert_accepts_csv_tags() {
    let app = app().await;

    let body = json!({
        "name": "  Almond Milk 1L ",
        "price": "31.99",
        "cost": "21.00",
        "categoryId": "cat-dairy",
        "tags": "milk, plant based",
        "calories": 40,
        "protein": 1
    });
    let (status, product) = call(
        &app,
        send_json("PUT", "/admin/products", Some(ADMIN), &body),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(product["name"], "Almond Milk 1L");
    assert_eq!(product["tags"], json!(["milk", "plant based"]));

    let (_, products) = call(&app, get("/products", None)).await;
    assert_eq!(products.as_array().unwrap().len(), 21);
}

#[tokio::test]
async fn test_register_then_duplicate_conflicts() {
    let app = app().await;

    let body = json!({
        "fullName": "Lerato N",
        "email": "Lerato@Example.com",
        "password": "hunter2",
        "savedGoal": "Weight Loss"
    });
    let (status, user) = call(&app, send_json("POST", "/register", None, &body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(user["email"], "lerato@example.com");
    assert!(user.get("password").is_none());

    let (status, error) = call(
        &app,
        send_json("POST", "/register", None, &json!({
            "fullName": "Other",
            "email": "lerato@example.com"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["error"], "A user with this email already exists.");
}

#[tokio::test]
async fn test_recommendations_fall_back_to_rules() {
    let app = app().await;

    let body = json!({ "prompt": "I want to lose weight under R300" });
    let (status, rec) = call(&app, send_json("POST", "/recommendations", None, &body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(rec["source"], "rules");
    assert_eq!(rec["goal"], "Weight Loss");
    assert_eq!(rec["budget"], "300");
    assert!(rec["note"].as_str().unwrap().contains("local recommendation"));
    assert!(!rec["products"].as_array().unwrap().is_empty());

    // basket stays within budget
    let spent: f64 = rec["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["price"].as_str().unwrap().parse::<f64>().unwrap())
        .sum();
    assert!(spent <= 300.0);
}

#[tokio::test]
async fn test_ai_recommendations_honor_prompt_budget() {
    let app = app_with_advisor(AiAdvice {
        goal: None,
        budget: None,
        recommended_product_ids: vec!["p4".into(), "p6".into()],
        reasoning: None,
    })
    .await;

    let body = json!({ "prompt": "meal prep under R60" });
    let (status, rec) = call(&app, send_json("POST", "/recommendations", None, &body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(rec["source"], "ai");
    // Advice carried no budget, so the prompt's R60 caps the basket.
    assert_eq!(rec["budget"], "60");
    let ids: Vec<&str> = rec["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["p4"]);
    assert!(rec["note"].as_str().unwrap().contains("AI model"));
}

#[tokio::test]
async fn test_image_recommendations_match_file_name() {
    let app = app().await;

    let body = json!({ "fileName": "grilled-chicken-salad.jpg" });
    let (status, rec) = call(
        &app,
        send_json("POST", "/recommendations/image", None, &body),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = rec["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert!(names.iter().any(|n| n.contains("Chicken")));
}

#[tokio::test]
async fn test_reports_reflect_orders() {
    let app = app().await;

    let body = json!({
        "items": [{ "productId": "p6", "qty": 2 }],
        "paymentType": "Cash"
    });
    let (status, _) = call(
        &app,
        send_json("POST", "/checkout", Some(CUSTOMER), &body),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, reports) = call(&app, get("/admin/reports", Some(ADMIN))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reports["financial"]["totalRevenue"], "189.98");
    assert_eq!(
        reports["financial"]["revenueByPayment"][0]["paymentType"],
        "Cash"
    );
    assert_eq!(
        reports["product"]["bestSellingProducts"][0]["id"],
        "p6"
    );
    assert_eq!(
        reports["customer"]["topSpendingCustomers"][0]["userId"],
        CUSTOMER
    );
}

#[tokio::test]
async fn test_profile_update_round_trip() {
    let app = app().await;

    let (status, profile) = call(&app, get("/profile", Some(CUSTOMER))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["savedGoal"], "Weight Loss");

    let body = json!({ "savedGoal": "Maintenance", "savedBudget": "1200" });
    let (status, updated) = call(
        &app,
        send_json("PUT", "/profile", Some(CUSTOMER), &body),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["savedGoal"], "Maintenance");
    assert_eq!(updated["savedBudget"], "1200");
    assert_eq!(updated["fullName"], "Thandi Mokoena");
}

#[tokio::test]
async fn test_meal_plans_payload() {
    let app = app().await;

    let (status, plans) = call(&app, get("/meal-plans", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(plans["cards"].as_array().unwrap().len(), 3);
    assert_eq!(plans["plans"].as_array().unwrap().len(), 3);
    assert_eq!(plans["plans"][0]["days"].as_array().unwrap().len(), 7);
}
