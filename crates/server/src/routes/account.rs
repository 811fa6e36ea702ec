//! Registration and profile management.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use goalgrocer_core::{Email, SafeUser};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::extract::CurrentUser;
use crate::state::AppState;
use crate::store::ProfileUpdate;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    /// Legacy local-auth credential; stored but never served back.
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub saved_goal: String,
    #[serde(default)]
    pub saved_budget: String,
}

/// `POST /register`
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<SafeUser>)> {
    if request.full_name.trim().is_empty() {
        return Err(AppError::BadRequest("Full name is required.".to_owned()));
    }
    let email = Email::parse(&request.email)
        .map_err(|error| AppError::BadRequest(error.to_string()))?;

    let user = state
        .catalogue
        .register_user(
            &request.full_name,
            email,
            request.password,
            &request.saved_goal,
            &request.saved_budget,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// `GET /profile`
pub async fn profile(CurrentUser(user): CurrentUser) -> Json<SafeUser> {
    Json(user.safe())
}

/// `PUT /profile`
pub async fn update_profile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<SafeUser>> {
    let user = state.catalogue.update_profile(&user.id, update).await?;
    Ok(Json(user))
}
