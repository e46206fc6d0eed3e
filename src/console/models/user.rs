//! User entity and its create payload

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Body of `POST /users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Embedded user summary on read models
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
}
