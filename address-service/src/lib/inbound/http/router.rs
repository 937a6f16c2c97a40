use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_address::create_address;
use super::handlers::create_user::create_user;
use super::handlers::issue_token::issue_token;
use super::handlers::list_addresses::list_addresses;
use super::middleware::authenticate as auth_middleware;
use crate::address::ports::AddressServicePort;
use crate::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub address_service: Arc<dyn AddressServicePort>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    address_service: Arc<dyn AddressServicePort>,
) -> Router {
    let state = AppState {
        user_service,
        address_service,
    };

    let public_routes = Router::new()
        .route("/api/users", post(create_user))
        .route("/api/users/tokens", post(issue_token));

    let protected_routes = Router::new()
        .route("/api/addresses", get(list_addresses))
        .route("/api/addresses", post(create_address))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
