use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use address_service::domain::address::errors::AddressError;
use address_service::domain::address::errors::GeocodingError;
use address_service::domain::address::models::Address;
use address_service::domain::address::models::Coordinates;
use address_service::domain::address::models::SearchWord;
use address_service::domain::address::ports::AddressRepository;
use address_service::domain::address::ports::GeocodingPort;
use address_service::domain::address::service::AddressService;
use address_service::domain::user::errors::UserError;
use address_service::domain::user::models::EmailAddress;
use address_service::domain::user::models::User;
use address_service::domain::user::models::UserId;
use address_service::domain::user::ports::UserRepository;
use address_service::domain::user::service::UserService;
use address_service::inbound::http::router::create_router;
use async_trait::async_trait;
use auth::Authenticator;

/// Test application that spawns the real router over in-memory adapters.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub user_repo: Arc<InMemoryUserRepository>,
    pub address_repo: Arc<InMemoryAddressRepository>,
}

/// In-memory stand-in for the Postgres user repository.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| &u.email == email).cloned())
    }
}

/// In-memory stand-in for the Postgres address repository.
///
/// Keeps rows in insertion order, so owner listings come back in creation
/// order like the `ORDER BY created_at` query would.
#[derive(Default)]
pub struct InMemoryAddressRepository {
    addresses: Mutex<Vec<Address>>,
}

impl InMemoryAddressRepository {
    pub fn total_count(&self) -> usize {
        self.addresses.lock().unwrap().len()
    }
}

#[async_trait]
impl AddressRepository for InMemoryAddressRepository {
    async fn insert(&self, address: Address) -> Result<Address, AddressError> {
        self.addresses.lock().unwrap().push(address.clone());
        Ok(address)
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Address>, AddressError> {
        let addresses = self.addresses.lock().unwrap();
        Ok(addresses
            .iter()
            .filter(|a| &a.owner_id == owner_id)
            .cloned()
            .collect())
    }
}

/// Scripted geocoder: resolves only the places it was told about.
pub struct StaticGeocoder {
    places: HashMap<String, Coordinates>,
}

impl StaticGeocoder {
    pub fn new() -> Self {
        let mut places = HashMap::new();
        places.insert(
            "Eiffel Tower".to_string(),
            Coordinates {
                lat: 48.8584,
                lng: 2.2945,
            },
        );
        places.insert(
            "Paris, France".to_string(),
            Coordinates {
                lat: 48.8566,
                lng: 2.3522,
            },
        );
        places.insert(
            "Tokyo Tower".to_string(),
            Coordinates {
                lat: 35.6586,
                lng: 139.7454,
            },
        );
        Self { places }
    }
}

#[async_trait]
impl GeocodingPort for StaticGeocoder {
    async fn resolve(&self, search_word: &SearchWord) -> Result<Coordinates, GeocodingError> {
        self.places
            .get(search_word.as_str())
            .copied()
            .ok_or(GeocodingError::NoMatch)
    }
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let user_repo = Arc::new(InMemoryUserRepository::default());
        let address_repo = Arc::new(InMemoryAddressRepository::default());
        let geocoder = Arc::new(StaticGeocoder::new());

        let authenticator = Arc::new(Authenticator::new(
            b"test-secret-key-for-jwt-signing-at-least-32-bytes",
        ));

        let user_service = Arc::new(UserService::new(
            Arc::clone(&user_repo) as Arc<dyn UserRepository>,
            authenticator,
            24,
        ));
        let address_service = Arc::new(AddressService::new(
            Arc::clone(&address_repo) as Arc<dyn AddressRepository>,
            geocoder,
        ));

        let router = create_router(user_service, address_service);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            user_repo,
            address_repo,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Register an account, asserting success.
    pub async fn register(&self, email: &str, password: &str) {
        let response = self
            .post("/api/users")
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    }

    /// Log in and return the issued bearer token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/api/users/tokens")
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["token"].as_str().expect("Missing token").to_string()
    }
}
