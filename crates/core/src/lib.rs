//! GoalGrocer Core - Domain library.
//!
//! This crate provides the domain model and the pure computation engines used
//! by the other GoalGrocer components:
//! - `server` - JSON API serving the storefront and the admin back-office
//! - `cli` - Command-line tools for seeding and management
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no ambient state. Every engine is a pure function of its
//! arguments: callers pass an explicit catalogue snapshot in and get a value
//! back. This keeps the crate usable anywhere and makes the scoring and
//! reporting behavior trivially testable.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and emails, shared enums
//! - [`models`] - Catalogue entities (products, categories, orders, users, wishlists)
//! - [`recommend`] - Prompt parser, scoring engine, basket builder, image-name matcher
//! - [`reports`] - Financial/product/customer reporting aggregator
//! - [`plans`] - Static weekly meal plans per dietary goal

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod plans;
pub mod recommend;
pub mod reports;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use models::*;
pub use types::*;
