use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::AccessToken;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Port for account and authentication operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new account with validated credentials.
    ///
    /// Hashes the password before persisting; never issues a token.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Verify credentials and issue a fresh access token.
    ///
    /// Takes the raw submitted email and password: a malformed email, an
    /// unknown email, and a wrong password all fail with the same
    /// `InvalidCredentials` so callers cannot enumerate accounts.
    ///
    /// # Errors
    /// * `InvalidCredentials` - No account/password match
    /// * `DatabaseError` - Database operation failed
    async fn authenticate(&self, email: &str, password: &str)
        -> Result<AccessToken, UserError>;

    /// Resolve a bearer token to the user it was issued for.
    ///
    /// Called on every protected request.
    ///
    /// # Errors
    /// * `InvalidToken` - Token is malformed, tampered with, or expired
    async fn validate_token(&self, token: &str) -> Result<UserId, UserError>;
}

/// Persistence operations for the user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// Atomic: on a duplicate email no row is written.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve a user by email address (None if not found).
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;
}
