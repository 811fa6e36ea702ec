//! In-memory catalogue mirrored to the external document store.
//!
//! The whole catalogue (products, categories, users, orders, wishlists) is
//! held in memory behind one `RwLock` and is the source of truth for reads.
//! Mutations update memory first and then persist to the document store in a
//! background task; a persist failure is logged and the in-memory state is
//! kept, so the store may briefly lag behind memory but requests never block
//! on it. Startup is the one synchronous exchange: the catalogue is loaded in
//! full (seeding first when the store is empty) before the server accepts
//! traffic.

pub mod docstore;
mod error;
pub mod seed;

use std::sync::Arc;

use chrono::Utc;
use goalgrocer_core::reports::{Reports, build_reports};
use goalgrocer_core::{
    Category, CategoryId, Email, Order, PaymentType, Product, ProductId, Role, SafeUser, User,
    UserId, Wishlist,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{info, warn};

pub use docstore::{DocumentStore, HttpDocumentStore, MemoryDocumentStore};
pub use error::StoreError;

const PRODUCTS: &str = "products";
const CATEGORIES: &str = "categories";
const USERS: &str = "users";
const ORDERS: &str = "orders";
const WISHLISTS: &str = "wishlists";

/// One line requested at checkout.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutItem {
    pub product_id: ProductId,
    #[serde(default)]
    pub qty: u32,
}

/// Profile fields a user may edit.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub saved_goal: Option<String>,
    #[serde(default)]
    pub saved_budget: Option<String>,
}

#[derive(Default)]
struct Snapshot {
    products: Vec<Product>,
    categories: Vec<Category>,
    users: Vec<User>,
    orders: Vec<Order>,
    wishlists: Vec<Wishlist>,
}

struct Inner {
    state: RwLock<Snapshot>,
    store: Arc<dyn DocumentStore>,
}

/// Handle to the catalogue; cheap to clone.
#[derive(Clone)]
pub struct Catalogue {
    inner: Arc<Inner>,
}

impl Catalogue {
    /// Load the full catalogue from the document store, seeding it first when
    /// the store holds no products.
    ///
    /// # Errors
    ///
    /// Returns an error when the store is unreachable, seeding fails, or a
    /// stored document does not decode into its entity type.
    pub async fn load(store: Arc<dyn DocumentStore>) -> Result<Self, StoreError> {
        let product_docs = store.list_all(PRODUCTS).await?;
        if product_docs.is_empty() {
            seed_store(store.as_ref()).await?;
        }

        let snapshot = Snapshot {
            products: load_collection(store.as_ref(), PRODUCTS).await?,
            categories: load_collection(store.as_ref(), CATEGORIES).await?,
            users: load_collection(store.as_ref(), USERS).await?,
            orders: load_collection(store.as_ref(), ORDERS).await?,
            wishlists: load_collection(store.as_ref(), WISHLISTS).await?,
        };
        info!(
            products = snapshot.products.len(),
            categories = snapshot.categories.len(),
            users = snapshot.users.len(),
            orders = snapshot.orders.len(),
            "catalogue loaded"
        );

        Ok(Self {
            inner: Arc::new(Inner {
                state: RwLock::new(snapshot),
                store,
            }),
        })
    }

    // --- storefront reads ---

    /// All products.
    pub async fn products(&self) -> Vec<Product> {
        self.inner.state.read().await.products.clone()
    }

    /// One product by id.
    pub async fn product(&self, id: &ProductId) -> Option<Product> {
        let state = self.inner.state.read().await;
        state.products.iter().find(|p| &p.id == id).cloned()
    }

    /// All categories.
    pub async fn categories(&self) -> Vec<Category> {
        self.inner.state.read().await.categories.clone()
    }

    /// One user by id.
    pub async fn user(&self, id: &UserId) -> Option<User> {
        let state = self.inner.state.read().await;
        state.users.iter().find(|u| &u.id == id).cloned()
    }

    /// Every user, password stripped. Newest first is not guaranteed; the
    /// back-office sorts client-side.
    pub async fn users_safe(&self) -> Vec<SafeUser> {
        let state = self.inner.state.read().await;
        state.users.iter().map(User::safe).collect()
    }

    /// All orders, newest first.
    pub async fn orders(&self) -> Vec<Order> {
        let state = self.inner.state.read().await;
        let mut orders = state.orders.clone();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        orders
    }

    /// One user's orders, newest first.
    pub async fn orders_for_user(&self, user_id: &UserId) -> Vec<Order> {
        let state = self.inner.state.read().await;
        let mut orders: Vec<Order> = state
            .orders
            .iter()
            .filter(|o| &o.user_id == user_id)
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        orders
    }

    /// A user's wishlist; users who never toggled get an empty one.
    pub async fn wishlist(&self, user_id: &UserId) -> Wishlist {
        let state = self.inner.state.read().await;
        state
            .wishlists
            .iter()
            .find(|w| &w.user_id == user_id)
            .cloned()
            .unwrap_or_else(|| Wishlist::empty(user_id.clone(), Utc::now()))
    }

    /// Recompute the admin report bundle from the current snapshot.
    pub async fn reports(&self) -> Reports {
        let state = self.inner.state.read().await;
        build_reports(
            &state.products,
            &state.orders,
            &state.users,
            &state.categories,
        )
    }

    // --- storefront writes ---

    /// Count a product detail view.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the product does not exist.
    pub async fn record_product_view(&self, id: &ProductId) -> Result<Product, StoreError> {
        let mut state = self.inner.state.write().await;
        let product = state
            .products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("Product {id} not found.")))?;
        product.views_count += 1;
        let views = product.views_count;
        let product = product.clone();
        drop(state);

        self.persist_merge(
            PRODUCTS,
            id.as_str().to_owned(),
            serde_json::json!({ "viewsCount": views }),
        );
        Ok(product)
    }

    /// Register a new customer account.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` when the email is already registered.
    pub async fn register_user(
        &self,
        full_name: &str,
        email: Email,
        password: Option<String>,
        saved_goal: &str,
        saved_budget: &str,
    ) -> Result<SafeUser, StoreError> {
        let mut state = self.inner.state.write().await;
        if state.users.iter().any(|u| u.email == email) {
            return Err(StoreError::Conflict(
                "A user with this email already exists.".to_owned(),
            ));
        }

        let user = User {
            id: UserId::generate(),
            full_name: full_name.trim().to_owned(),
            email,
            password: password.filter(|p| !p.is_empty()),
            role: Role::Customer,
            saved_goal: saved_goal.trim().to_owned(),
            saved_budget: saved_budget.trim().to_owned(),
            created_at: Utc::now(),
        };
        state.users.push(user.clone());
        drop(state);

        self.persist(USERS, user.id.as_str().to_owned(), doc_without_id(&user));
        Ok(user.safe())
    }

    /// Apply a partial profile update.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the user does not exist.
    pub async fn update_profile(
        &self,
        user_id: &UserId,
        update: ProfileUpdate,
    ) -> Result<SafeUser, StoreError> {
        let mut state = self.inner.state.write().await;
        let user = state
            .users
            .iter_mut()
            .find(|u| &u.id == user_id)
            .ok_or_else(|| StoreError::NotFound(format!("User {user_id} not found.")))?;

        if let Some(full_name) = update.full_name {
            let full_name = full_name.trim();
            if !full_name.is_empty() {
                user.full_name = full_name.to_owned();
            }
        }
        if let Some(saved_goal) = update.saved_goal {
            user.saved_goal = saved_goal.trim().to_owned();
        }
        if let Some(saved_budget) = update.saved_budget {
            user.saved_budget = saved_budget.trim().to_owned();
        }
        let user = user.clone();
        drop(state);

        self.persist(USERS, user.id.as_str().to_owned(), doc_without_id(&user));
        Ok(user.safe())
    }

    /// Toggle a product on a user's wishlist, creating the wishlist on first
    /// use. Returns the updated wishlist.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the product does not exist.
    pub async fn toggle_wishlist(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
    ) -> Result<Wishlist, StoreError> {
        let now = Utc::now();
        let mut state = self.inner.state.write().await;
        if !state.products.iter().any(|p| &p.id == product_id) {
            return Err(StoreError::NotFound(format!(
                "Product {product_id} not found."
            )));
        }

        let idx = match state.wishlists.iter().position(|w| &w.user_id == user_id) {
            Some(idx) => idx,
            None => {
                state
                    .wishlists
                    .push(Wishlist::empty(user_id.clone(), now));
                state.wishlists.len() - 1
            }
        };
        state.wishlists[idx].toggle(product_id, now);
        let wishlist = state.wishlists[idx].clone();
        drop(state);

        self.persist(
            WISHLISTS,
            user_id.as_str().to_owned(),
            doc_with_id(&wishlist),
        );
        Ok(wishlist)
    }

    /// Place an order: snapshot line items, bump sold counters, record the
    /// order. Unknown product ids are dropped from the request.
    ///
    /// # Errors
    ///
    /// Returns `Invalid` when no requested product exists in the catalogue.
    pub async fn create_order(
        &self,
        user_id: &UserId,
        items: &[CheckoutItem],
        payment_type: PaymentType,
    ) -> Result<Order, StoreError> {
        let mut state = self.inner.state.write().await;

        let mut lines = Vec::new();
        let mut sold_updates: Vec<(ProductId, u64)> = Vec::new();
        for item in items {
            let Some(product) = state.products.iter_mut().find(|p| p.id == item.product_id)
            else {
                continue;
            };
            let line = goalgrocer_core::LineItem::snapshot(product, item.qty);
            product.sold_count += u64::from(line.qty);
            sold_updates.push((product.id.clone(), product.sold_count));
            lines.push(line);
        }

        if lines.is_empty() {
            return Err(StoreError::Invalid(
                "None of the requested products exist.".to_owned(),
            ));
        }

        let order = Order::new(user_id.clone(), lines, payment_type, Utc::now());
        state.orders.push(order.clone());
        drop(state);

        for (product_id, sold_count) in sold_updates {
            self.persist_merge(
                PRODUCTS,
                product_id.as_str().to_owned(),
                serde_json::json!({ "soldCount": sold_count }),
            );
        }
        self.persist(ORDERS, order.id.as_str().to_owned(), doc_without_id(&order));
        Ok(order)
    }

    // --- back-office writes ---

    /// Create or fully replace a product. New products go to the front of
    /// the listing.
    pub async fn upsert_product(&self, product: Product) {
        let mut state = self.inner.state.write().await;
        match state.products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product.clone(),
            None => state.products.insert(0, product.clone()),
        }
        drop(state);

        self.persist(
            PRODUCTS,
            product.id.as_str().to_owned(),
            doc_without_id(&product),
        );
    }

    /// Delete a product and remove it from every wishlist.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the product does not exist.
    pub async fn delete_product(&self, id: &ProductId) -> Result<(), StoreError> {
        let mut state = self.inner.state.write().await;
        let before = state.products.len();
        state.products.retain(|p| &p.id != id);
        if state.products.len() == before {
            return Err(StoreError::NotFound(format!("Product {id} not found.")));
        }

        // Cascade: only wishlists that actually referenced the product are
        // rewritten in the store.
        let mut touched = Vec::new();
        for wishlist in &mut state.wishlists {
            if wishlist.product_ids.contains(id) {
                wishlist.product_ids.retain(|p| p != id);
                wishlist.updated_at = Utc::now();
                touched.push(wishlist.clone());
            }
        }
        drop(state);

        self.persist_delete(PRODUCTS, id.as_str().to_owned());
        for wishlist in touched {
            self.persist(
                WISHLISTS,
                wishlist.user_id.as_str().to_owned(),
                doc_with_id(&wishlist),
            );
        }
        Ok(())
    }

    /// Create or rename a category.
    pub async fn upsert_category(&self, category: Category) {
        let mut state = self.inner.state.write().await;
        match state.categories.iter_mut().find(|c| c.id == category.id) {
            Some(existing) => *existing = category.clone(),
            None => state.categories.push(category.clone()),
        }
        drop(state);

        self.persist(
            CATEGORIES,
            category.id.as_str().to_owned(),
            doc_without_id(&category),
        );
    }

    /// Delete a category, reassigning its products to the "Uncategorized"
    /// sentinel (created on demand).
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the category does not exist and `Conflict`
    /// when asked to delete the sentinel itself.
    pub async fn delete_category(&self, id: &CategoryId) -> Result<(), StoreError> {
        if id.as_str() == Category::UNCATEGORIZED_ID {
            return Err(StoreError::Conflict(
                "The Uncategorized category cannot be deleted.".to_owned(),
            ));
        }

        let mut state = self.inner.state.write().await;
        let before = state.categories.len();
        state.categories.retain(|c| &c.id != id);
        if state.categories.len() == before {
            return Err(StoreError::NotFound(format!("Category {id} not found.")));
        }

        let mut reassigned = Vec::new();
        for product in &mut state.products {
            if &product.category_id == id {
                product.category_id = CategoryId::new(Category::UNCATEGORIZED_ID);
                reassigned.push(product.clone());
            }
        }

        let mut sentinel_created = None;
        if !reassigned.is_empty()
            && !state
                .categories
                .iter()
                .any(|c| c.id.as_str() == Category::UNCATEGORIZED_ID)
        {
            let sentinel = Category::uncategorized();
            state.categories.push(sentinel.clone());
            sentinel_created = Some(sentinel);
        }
        drop(state);

        self.persist_delete(CATEGORIES, id.as_str().to_owned());
        if let Some(sentinel) = sentinel_created {
            self.persist(
                CATEGORIES,
                sentinel.id.as_str().to_owned(),
                doc_without_id(&sentinel),
            );
        }
        for product in reassigned {
            self.persist(
                PRODUCTS,
                product.id.as_str().to_owned(),
                doc_without_id(&product),
            );
        }
        Ok(())
    }

    // --- persistence plumbing ---

    fn persist(&self, collection: &'static str, id: String, doc: Value) {
        let store = Arc::clone(&self.inner.store);
        tokio::spawn(async move {
            if let Err(error) = store.put(collection, &id, doc, false).await {
                warn!(collection, id, %error, "background persist failed");
            }
        });
    }

    fn persist_merge(&self, collection: &'static str, id: String, doc: Value) {
        let store = Arc::clone(&self.inner.store);
        tokio::spawn(async move {
            if let Err(error) = store.put(collection, &id, doc, true).await {
                warn!(collection, id, %error, "background merge failed");
            }
        });
    }

    fn persist_delete(&self, collection: &'static str, id: String) {
        let store = Arc::clone(&self.inner.store);
        tokio::spawn(async move {
            if let Err(error) = store.delete(collection, &id).await {
                warn!(collection, id, %error, "background delete failed");
            }
        });
    }
}

/// Serialize an entity for storage, dropping the `id` field; the document key
/// carries the id.
fn doc_without_id<T: Serialize>(entity: &T) -> Value {
    let mut value = serde_json::to_value(entity).unwrap_or_default();
    if let Value::Object(map) = &mut value {
        map.remove("id");
    }
    value
}

/// Serialize an entity for storage keeping every field. Used for wishlists,
/// which are keyed by `userId` and carry it in the document body too.
fn doc_with_id<T: Serialize>(entity: &T) -> Value {
    serde_json::to_value(entity).unwrap_or_default()
}

async fn load_collection<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    collection: &str,
) -> Result<Vec<T>, StoreError> {
    let docs = store.list_all(collection).await?;
    docs.into_iter()
        .map(|(id, doc)| decode(collection, &id, doc))
        .collect()
}

/// Decode a stored document, re-injecting the document key as the `id` field
/// when the body does not carry one.
fn decode<T: DeserializeOwned>(collection: &str, id: &str, mut doc: Value) -> Result<T, StoreError> {
    if let Value::Object(map) = &mut doc {
        map.entry("id")
            .or_insert_with(|| Value::String(id.to_owned()));
    }
    serde_json::from_value(doc).map_err(|error| StoreError::MalformedDocument {
        collection: collection.to_owned(),
        id: id.to_owned(),
        message: error.to_string(),
    })
}

async fn seed_store(store: &dyn DocumentStore) -> Result<(), StoreError> {
    info!("document store is empty, writing seed catalogue");
    for category in seed::categories() {
        store
            .put(
                CATEGORIES,
                category.id.as_str(),
                doc_without_id(&category),
                false,
            )
            .await?;
    }
    for product in seed::products() {
        store
            .put(PRODUCTS, product.id.as_str(), doc_without_id(&product), false)
            .await?;
    }
    let users = seed::users(Utc::now()).map_err(|error| StoreError::MalformedDocument {
        collection: USERS.to_owned(),
        id: "seed".to_owned(),
        message: error.to_string(),
    })?;
    for user in users {
        store
            .put(USERS, user.id.as_str(), doc_without_id(&user), false)
            .await?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use goalgrocer_core::OrderStatus;
    use rust_decimal::dec;

    use super::*;

    async fn seeded_catalogue() -> (Catalogue, MemoryDocumentStore) {
        let store = MemoryDocumentStore::new();
        let catalogue = Catalogue::load(Arc::new(store.clone())).await.unwrap();
        (catalogue, store)
    }

    #[tokio::test]
    async fn test_load_seeds_empty_store() {
        let (catalogue, store) = seeded_catalogue().await;
        assert_eq!(catalogue.products().await.len(), 20);
        assert_eq!(catalogue.categories().await.len(), 5);
        assert_eq!(store.list_all(PRODUCTS).await.unwrap().len(), 20);
    }

    #[tokio::test]
    async fn test_load_does_not_reseed_populated_store() {
        let store = MemoryDocumentStore::new();
        store
            .put(
                PRODUCTS,
                "p-custom",
                serde_json::json!({ "name": "Custom", "categoryId": "cat-x" }),
                false,
            )
            .await
            .unwrap();

        let catalogue = Catalogue::load(Arc::new(store)).await.unwrap();
        let products = catalogue.products().await;
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id.as_str(), "p-custom");
    }

    #[tokio::test]
    async fn test_document_key_becomes_id() {
        let store = MemoryDocumentStore::new();
        store
            .put(
                PRODUCTS,
                "p-keyed",
                serde_json::json!({ "name": "Keyed", "categoryId": "cat-x" }),
                false,
            )
            .await
            .unwrap();
        let catalogue = Catalogue::load(Arc::new(store)).await.unwrap();
        let product = catalogue.product(&ProductId::new("p-keyed")).await.unwrap();
        assert_eq!(product.name, "Keyed");
    }

    #[tokio::test]
    async fn test_malformed_document_fails_load() {
        let store = MemoryDocumentStore::new();
        store
            .put(PRODUCTS, "p-bad", serde_json::json!("not an object"), false)
            .await
            .unwrap();
        let result = Catalogue::load(Arc::new(store)).await;
        assert!(matches!(
            result,
            Err(StoreError::MalformedDocument { .. })
        ));
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_email_case_insensitively() {
        let (catalogue, _) = seeded_catalogue().await;
        let email = Email::parse("THANDI@example.com").unwrap();
        let result = catalogue
            .register_user("Imposter", email, None, "", "")
            .await;
        assert!(matches!(result, Err(StoreError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_create_order_bumps_sold_count_and_snapshots_price() {
        let (catalogue, _) = seeded_catalogue().await;
        let items = vec![
            CheckoutItem {
                product_id: ProductId::new("p1"),
                qty: 2,
            },
            CheckoutItem {
                product_id: ProductId::new("p-ghost"),
                qty: 1,
            },
        ];
        let order = catalogue
            .create_order(&UserId::new("u-thandi"), &items, PaymentType::Card)
            .await
            .unwrap();

        assert_eq!(order.items.len(), 1);
        assert_eq!(order.sub_total, dec!(89.98));
        assert_eq!(order.status, OrderStatus::Complete);

        let oats = catalogue.product(&ProductId::new("p1")).await.unwrap();
        assert_eq!(oats.sold_count, 2);
    }

    #[tokio::test]
    async fn test_create_order_with_only_unknown_products_is_invalid() {
        let (catalogue, _) = seeded_catalogue().await;
        let items = vec![CheckoutItem {
            product_id: ProductId::new("p-ghost"),
            qty: 1,
        }];
        let result = catalogue
            .create_order(&UserId::new("u-thandi"), &items, PaymentType::Cash)
            .await;
        assert!(matches!(result, Err(StoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_delete_product_cascades_to_wishlists() {
        let (catalogue, _) = seeded_catalogue().await;
        let user = UserId::new("u-thandi");
        catalogue
            .toggle_wishlist(&user, &ProductId::new("p1"))
            .await
            .unwrap();
        catalogue
            .toggle_wishlist(&user, &ProductId::new("p2"))
            .await
            .unwrap();

        catalogue.delete_product(&ProductId::new("p1")).await.unwrap();

        let wishlist = catalogue.wishlist(&user).await;
        assert_eq!(wishlist.product_ids, vec![ProductId::new("p2")]);
    }

    #[tokio::test]
    async fn test_delete_category_reassigns_products_to_sentinel() {
        let (catalogue, _) = seeded_catalogue().await;
        catalogue
            .delete_category(&CategoryId::new("cat-dairy"))
            .await
            .unwrap();

        let eggs = catalogue.product(&ProductId::new("p2")).await.unwrap();
        assert_eq!(eggs.category_id.as_str(), Category::UNCATEGORIZED_ID);
        assert!(
            catalogue
                .categories()
                .await
                .iter()
                .any(|c| c.id.as_str() == Category::UNCATEGORIZED_ID)
        );
    }

    #[tokio::test]
    async fn test_delete_sentinel_category_is_rejected() {
        let (catalogue, _) = seeded_catalogue().await;
        catalogue
            .delete_category(&CategoryId::new("cat-produce"))
            .await
            .unwrap();
        let result = catalogue
            .delete_category(&CategoryId::new(Category::UNCATEGORIZED_ID))
            .await;
        assert!(matches!(result, Err(StoreError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_record_product_view_increments() {
        let (catalogue, _) = seeded_catalogue().await;
        let id = ProductId::new("p4");
        catalogue.record_product_view(&id).await.unwrap();
        let product = catalogue.record_product_view(&id).await.unwrap();
        assert_eq!(product.views_count, 2);
    }

    #[tokio::test]
    async fn test_update_profile_keeps_name_on_blank_input() {
        let (catalogue, _) = seeded_catalogue().await;
        let user = catalogue
            .update_profile(
                &UserId::new("u-sipho"),
                ProfileUpdate {
                    full_name: Some("   ".to_owned()),
                    saved_goal: Some("Maintenance".to_owned()),
                    saved_budget: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(user.full_name, "Sipho Dlamini");
        assert_eq!(user.saved_goal, "Maintenance");
    }
}
