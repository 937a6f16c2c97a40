//! Authentication library for the favorite-places backend.
//!
//! Provides the security-critical building blocks the service composes:
//! - Password hashing (Argon2id)
//! - Access token generation and validation (HS256 JWT)
//! - An authentication coordinator tying the two together
//!
//! The service defines its own domain traits and adapts these
//! implementations, keeping domain logic decoupled from crypto details.
//!
//! # Examples
//!
//! ```
//! use auth::{Authenticator, Claims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let claims = Claims::for_user("user123", "alice@example.com".to_string(), 24);
//! let result = auth.authenticate("password123", &hash, claims).unwrap();
//!
//! // Validate token on a later request
//! let decoded = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.sub, "user123");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
