use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::address::errors::AddressError;
use crate::address::errors::GeocodingError;
use crate::address::models::Address;
use crate::user::errors::UserError;

pub mod create_address;
pub mod create_user;
pub mod issue_token;
pub mod list_addresses;

/// Successful response: a status code and a body serialized as-is.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Boundary error: every domain failure becomes a status code plus a
/// human-readable `message` the client displays verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    ServiceUnavailable(String),
    UnprocessableEntity(String),
    BadRequest(String),
    Conflict(String),
    Unauthorized(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Infrastructure detail is logged, never echoed to the caller.
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::ServiceUnavailable(msg) => {
                tracing::error!("Upstream unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Service temporarily unavailable".to_string(),
                )
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiErrorBody { message })).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            UserError::InvalidCredentials | UserError::InvalidToken => {
                ApiError::Unauthorized(err.to_string())
            }
            UserError::InvalidEmail(_)
            | UserError::InvalidPassword(_)
            | UserError::InvalidUserId(_) => ApiError::BadRequest(err.to_string()),
            UserError::DatabaseError(_) | UserError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<AddressError> for ApiError {
    fn from(err: AddressError) -> Self {
        match err {
            AddressError::InvalidName(_) | AddressError::InvalidSearchWord(_) => {
                ApiError::BadRequest(err.to_string())
            }
            AddressError::Resolution(GeocodingError::Unreachable(_)) => {
                ApiError::ServiceUnavailable(err.to_string())
            }
            AddressError::Resolution(_) => ApiError::UnprocessableEntity(err.to_string()),
            AddressError::DatabaseError(_) | AddressError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub message: String,
}

/// Address as exposed to the client. The owner is implied by the bearer
/// token and never part of the body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddressData {
    pub id: String,
    pub name: String,
    pub description: String,
    pub lat: f64,
    pub lng: f64,
}

impl From<&Address> for AddressData {
    fn from(address: &Address) -> Self {
        Self {
            id: address.id.to_string(),
            name: address.name.as_str().to_string(),
            description: address.description.clone(),
            lat: address.coordinates.lat,
            lng: address.coordinates.lng,
        }
    }
}
