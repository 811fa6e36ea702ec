//! Catalogue entities.
//!
//! These structs mirror the documents held in the external document store,
//! so serde names are camelCase and numeric fields default to zero when a
//! legacy document omits them.

mod category;
mod order;
mod product;
mod user;
mod wishlist;

pub use category::Category;
pub use order::{LineItem, Order};
pub use product::{ListOrCsv, Product, ProductInput};
pub use user::{SafeUser, User};
pub use wishlist::Wishlist;
