//! User account entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Email, Role, UserId};

/// A user account as stored in the document store.
///
/// `password` belongs to a legacy local-auth path and must never leave the
/// store layer; read paths return [`SafeUser`] instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub full_name: String,
    pub email: Email,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub role: Role,
    /// Saved dietary goal preference, empty when not set.
    #[serde(default)]
    pub saved_goal: String,
    /// Saved budget preference as entered by the user, empty when not set.
    #[serde(default)]
    pub saved_budget: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Project into the externally visible shape, dropping the password.
    #[must_use]
    pub fn safe(&self) -> SafeUser {
        SafeUser {
            id: self.id.clone(),
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            role: self.role,
            saved_goal: self.saved_goal.clone(),
            saved_budget: self.saved_budget.clone(),
            created_at: self.created_at,
        }
    }
}

/// A user with the legacy password field stripped.
///
/// This is the only user shape that crosses the API boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeUser {
    pub id: UserId,
    pub full_name: String,
    pub email: Email,
    pub role: Role,
    #[serde(default)]
    pub saved_goal: String,
    #[serde(default)]
    pub saved_budget: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_projection_drops_password() {
        let user = User {
            id: UserId::new("u1"),
            full_name: "Thandi M".to_owned(),
            email: Email::parse("thandi@example.com").unwrap(),
            password: Some("hunter2".to_owned()),
            role: Role::Customer,
            saved_goal: "Weight Loss".to_owned(),
            saved_budget: "800".to_owned(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(user.safe()).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["savedGoal"], "Weight Loss");
    }

    #[test]
    fn test_password_omitted_from_document_when_absent() {
        let user = User {
            id: UserId::new("u1"),
            full_name: "Thandi M".to_owned(),
            email: Email::parse("thandi@example.com").unwrap(),
            password: None,
            role: Role::Admin,
            saved_goal: String::new(),
            saved_budget: String::new(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
    }
}
