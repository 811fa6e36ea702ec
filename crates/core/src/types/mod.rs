//! Shared type definitions.
//!
//! Contains newtype wrappers and enums used throughout the GoalGrocer
//! components. Keeping these in one place prevents accidentally mixing
//! identifiers from different entity types.

mod email;
mod id;
mod payment;
mod role;

pub use email::{Email, EmailError};
pub use id::{CategoryId, OrderId, ProductId, UserId};
pub use payment::{OrderStatus, PaymentType};
pub use role::Role;
