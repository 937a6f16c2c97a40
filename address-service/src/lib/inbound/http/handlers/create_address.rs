use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::AddressData;
use super::ApiError;
use super::ApiSuccess;
use crate::address::errors::AddressNameError;
use crate::address::errors::SearchWordError;
use crate::address::models::AddressName;
use crate::address::models::CreateAddressCommand;
use crate::address::models::SearchWord;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::models::UserId;

pub async fn create_address(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(body): Json<CreateAddressRequest>,
) -> Result<ApiSuccess<AddressData>, ApiError> {
    state
        .address_service
        .create_address(body.try_into_command(caller.user_id)?)
        .await
        .map_err(ApiError::from)
        .map(|ref address| ApiSuccess::new(StatusCode::CREATED, address.into()))
}

/// HTTP request body for creating an address (raw JSON).
///
/// Note the client never submits coordinates; only the search term they are
/// resolved from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateAddressRequest {
    #[serde(rename = "searchWord")]
    search_word: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateAddressRequestError {
    #[error("Invalid search word: {0}")]
    SearchWord(#[from] SearchWordError),

    #[error("Invalid name: {0}")]
    Name(#[from] AddressNameError),
}

impl CreateAddressRequest {
    fn try_into_command(
        self,
        owner_id: UserId,
    ) -> Result<CreateAddressCommand, ParseCreateAddressRequestError> {
        let search_word = SearchWord::new(self.search_word)?;
        let name = AddressName::new(self.name)?;
        Ok(CreateAddressCommand::new(
            owner_id,
            search_word,
            name,
            self.description,
        ))
    }
}

impl From<ParseCreateAddressRequestError> for ApiError {
    fn from(err: ParseCreateAddressRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
