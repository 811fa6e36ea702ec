//! External collaborators and composed domain services.

pub mod ai;
pub mod recommend;

pub use ai::{Advisor, AiAdvice, AiClient, AiError};
pub use recommend::{Recommendation, RecommendationSource, Recommender};
