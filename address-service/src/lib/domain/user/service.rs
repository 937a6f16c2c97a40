use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::AccessToken;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service for accounts and authentication.
///
/// Owns the two security-critical paths: credential verification on login
/// and token validation on every protected request.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    authenticator: Arc<Authenticator>,
    token_expiration_hours: i64,
}

impl UserService {
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token signing
    /// * `token_expiration_hours` - Expiry horizon for issued tokens
    pub fn new(
        repository: Arc<dyn UserRepository>,
        authenticator: Arc<Authenticator>,
        token_expiration_hours: i64,
    ) -> Self {
        Self {
            repository,
            authenticator,
            token_expiration_hours,
        }
    }
}

#[async_trait]
impl UserServicePort for UserService {
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        let password_hash = self
            .authenticator
            .hash_password(command.password.as_str())
            .map_err(|e| UserError::Unknown(format!("Password hashing failed: {}", e)))?;

        let user = User {
            id: UserId::new(),
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;

        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(created_user)
    }

    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AccessToken, UserError> {
        // A submitted email that does not even parse cannot belong to an
        // account; it fails exactly like an unknown one.
        let email = match EmailAddress::new(email.to_string()) {
            Ok(email) => email,
            Err(_) => {
                self.authenticator.reject_unknown(password);
                return Err(UserError::InvalidCredentials);
            }
        };

        let user = match self.repository.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                self.authenticator.reject_unknown(password);
                return Err(UserError::InvalidCredentials);
            }
        };

        let claims = auth::Claims::for_user(
            user.id,
            user.email.as_str().to_string(),
            self.token_expiration_hours,
        );

        let result = self
            .authenticator
            .authenticate(password, &user.password_hash, claims)
            .map_err(|e| match e {
                auth::AuthenticationError::InvalidCredentials => UserError::InvalidCredentials,
                auth::AuthenticationError::PasswordError(err) => {
                    UserError::Unknown(format!("Password verification failed: {}", err))
                }
                auth::AuthenticationError::JwtError(err) => {
                    UserError::Unknown(format!("Token generation failed: {}", err))
                }
            })?;

        Ok(AccessToken::new(result.access_token))
    }

    async fn validate_token(&self, token: &str) -> Result<UserId, UserError> {
        let claims = self.authenticator.validate_token(token).map_err(|e| {
            tracing::debug!("Token validation failed: {}", e);
            UserError::InvalidToken
        })?;

        UserId::from_string(&claims.sub).map_err(|_| UserError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::user::models::Password;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;
        }
    }

    fn test_authenticator() -> Arc<Authenticator> {
        Arc::new(Authenticator::new(
            b"test-secret-key-for-jwt-signing-at-least-32-bytes",
        ))
    }

    fn register_command(email: &str, password: &str) -> RegisterUserCommand {
        RegisterUserCommand::new(
            EmailAddress::new(email.to_string()).unwrap(),
            Password::new(password.to_string()).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .withf(|user| {
                user.email.as_str() == "alice@example.com"
                    && user.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|user| Ok(user));

        let service = UserService::new(Arc::new(repository), test_authenticator(), 24);

        let result = service
            .register(register_command("alice@example.com", "password123"))
            .await;
        assert!(result.is_ok());

        let user = result.unwrap();
        assert_eq!(user.email.as_str(), "alice@example.com");
        assert_ne!(user.password_hash, "password123");
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut repository = MockTestUserRepository::new();

        repository.expect_create().times(1).returning(|user| {
            Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ))
        });

        let service = UserService::new(Arc::new(repository), test_authenticator(), 24);

        let result = service
            .register(register_command("alice@example.com", "password123"))
            .await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::EmailAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_register_then_authenticate_then_validate() {
        let authenticator = test_authenticator();
        let user_id = UserId::new();
        let password_hash = authenticator.hash_password("password123").unwrap();

        let stored_user = User {
            id: user_id,
            email: EmailAddress::new("alice@example.com".to_string()).unwrap(),
            password_hash,
            created_at: Utc::now(),
        };

        let mut repository = MockTestUserRepository::new();
        let returned_user = stored_user.clone();
        repository
            .expect_find_by_email()
            .withf(|email| email.as_str() == "alice@example.com")
            .times(1)
            .returning(move |_| Ok(Some(returned_user.clone())));

        let service = UserService::new(Arc::new(repository), authenticator, 24);

        let token = service
            .authenticate("alice@example.com", "password123")
            .await
            .expect("Authentication failed");

        let resolved = service
            .validate_token(token.as_str())
            .await
            .expect("Token validation failed");
        assert_eq!(resolved, user_id);
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let authenticator = test_authenticator();
        let password_hash = authenticator.hash_password("password123").unwrap();

        let stored_user = User {
            id: UserId::new(),
            email: EmailAddress::new("alice@example.com".to_string()).unwrap(),
            password_hash,
            created_at: Utc::now(),
        };

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(stored_user.clone())));

        let service = UserService::new(Arc::new(repository), authenticator, 24);

        let result = service.authenticate("alice@example.com", "wrong_password").await;
        assert!(matches!(result.unwrap_err(), UserError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_authenticate_unknown_email_same_error() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository), test_authenticator(), 24);

        let result = service.authenticate("ghost@example.com", "password123").await;
        assert!(matches!(result.unwrap_err(), UserError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_authenticate_malformed_email_same_error() {
        let repository = MockTestUserRepository::new();

        let service = UserService::new(Arc::new(repository), test_authenticator(), 24);

        let result = service.authenticate("not-an-email", "password123").await;
        assert!(matches!(result.unwrap_err(), UserError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_validate_token_garbage() {
        let repository = MockTestUserRepository::new();

        let service = UserService::new(Arc::new(repository), test_authenticator(), 24);

        let result = service.validate_token("not.a.token").await;
        assert!(matches!(result.unwrap_err(), UserError::InvalidToken));
    }

    #[tokio::test]
    async fn test_validate_token_wrong_secret() {
        let repository = MockTestUserRepository::new();

        let claims = auth::Claims::for_user(UserId::new(), "alice@example.com".to_string(), 24);
        let foreign_token = auth::JwtHandler::new(b"a-completely-different-signing-secret!!!")
            .encode(&claims)
            .unwrap();

        let service = UserService::new(Arc::new(repository), test_authenticator(), 24);

        let result = service.validate_token(&foreign_token).await;
        assert!(matches!(result.unwrap_err(), UserError::InvalidToken));
    }
}
