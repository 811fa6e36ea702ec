//! Request extractors for caller identity.
//!
//! Authentication itself lives with an external identity provider; requests
//! arrive carrying the already-authenticated user's id in the `X-User-Id`
//! header, and these extractors resolve it against the catalogue.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use goalgrocer_core::{Role, User, UserId};

use crate::error::AppError;
use crate::state::AppState;

const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated caller. Rejects with 401 when the header is missing or
/// names an unknown user.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// The authenticated caller, required to hold the admin role. Rejects with
/// 403 for non-admins.
#[derive(Debug, Clone)]
pub struct AdminUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| AppError::Unauthorized("Missing X-User-Id header.".to_owned()))?;

        let user = state
            .catalogue
            .user(&UserId::new(user_id))
            .await
            .ok_or_else(|| AppError::Unauthorized("Unknown user.".to_owned()))?;

        Ok(Self(user))
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;
        if user.role != Role::Admin {
            return Err(AppError::Forbidden("Admin access required.".to_owned()));
        }
        Ok(Self(user))
    }
}
