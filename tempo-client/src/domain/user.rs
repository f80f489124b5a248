use serde::{Deserialize, Serialize};

/// The acting user. Cached on disk after login so the client can start
/// without a round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Response of `POST /api/auth/login`: a bearer token plus the user's
/// profile fields at the same level.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(flatten)]
    pub user: User,
}
