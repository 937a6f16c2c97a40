use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn issue_token(
    State(state): State<AppState>,
    Json(body): Json<IssueTokenRequestBody>,
) -> Result<ApiSuccess<IssueTokenResponseData>, ApiError> {
    // The service collapses malformed, unknown, and mismatched credentials
    // into the single InvalidCredentials error.
    let token = state
        .user_service
        .authenticate(&body.email, &body.password)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        IssueTokenResponseData {
            token: token.into_inner(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IssueTokenRequestBody {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueTokenResponseData {
    pub token: String,
}
