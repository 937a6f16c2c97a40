use std::sync::Arc;
use std::time::Duration;

use address_service::config::Config;
use address_service::domain::address::service::AddressService;
use address_service::domain::user::service::UserService;
use address_service::inbound::http::router::create_router;
use address_service::outbound::geocoding::NominatimClient;
use address_service::outbound::repositories::PostgresAddressRepository;
use address_service::outbound::repositories::PostgresUserRepository;
use auth::Authenticator;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "address_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "address-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        geocoding_base_url = %config.geocoding.base_url,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(config.jwt.secret.as_bytes()));
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let address_repository = Arc::new(PostgresAddressRepository::new(pg_pool));
    let geocoder = Arc::new(NominatimClient::new(
        config.geocoding.base_url.clone(),
        Duration::from_secs(config.geocoding.timeout_seconds),
    )?);

    let user_service = Arc::new(UserService::new(
        user_repository,
        authenticator,
        config.jwt.expiration_hours,
    ));
    let address_service = Arc::new(AddressService::new(address_repository, geocoder));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, address_service);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
