//! Shared application state.

use crate::services::Recommender;
use crate::store::Catalogue;

/// State handed to every route handler; cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub catalogue: Catalogue,
    pub recommender: Recommender,
}
