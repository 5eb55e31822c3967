use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct User {
    pub username: String,
    pub password: String,
}

/// Body of a login form submission. Missing fields deserialize to empty
/// strings and fail verification like any other bad credential.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub exp: usize,
    pub jti: Uuid,
}

/// One-shot notice rendered on the next login page, then discarded.
#[derive(Debug, Serialize, Deserialize)]
pub struct Flash {
    pub message: String,
}
