//! Wire-schema DTOs for the analytics API.
//!
//! Field names follow the API's camelCase convention where the endpoint
//! uses it; the live-visitor entries keep the API's abbreviated keys.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the identity endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Account email.
    pub email: String,
    /// Display name, if set.
    #[serde(default)]
    pub name: Option<String>,
}

/// Response to a password sign-in attempt.
///
/// When two-factor auth is enabled the token pair and user are withheld and
/// `two_fa_required` is set; the client must follow up with the code.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoginResponse {
    pub two_fa_required: bool,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub user: Option<User>,
}

/// Successful two-factor submission: a fresh token pair plus the profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoFaResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: User,
}

/// One live session on a project, as reported by the live-visitors endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveVisitor {
    /// Device class (e.g. `"desktop"`, `"mobile"`).
    pub dv: String,
    /// Browser name.
    pub br: String,
    /// Operating system name.
    pub os: String,
    /// ISO 3166-1 alpha-2 country code.
    pub cc: String,
}

/// Latest blog post, used by the full footer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastPost {
    pub title: String,
    pub url_path: String,
}
