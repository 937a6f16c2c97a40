use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Access token claims.
///
/// Self-contained: carries everything needed to validate the token and
/// resolve the caller without server-side session state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Email of the authenticated user
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for an authenticated user with an expiry horizon.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier, becomes `sub`
    /// * `email` - Email of the user
    /// * `expiration_hours` - Hours until the token expires
    pub fn for_user(user_id: impl ToString, email: String, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(expiration_hours);

        Self {
            sub: user_id.to_string(),
            email,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check if the token is expired at the given timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
