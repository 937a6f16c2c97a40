use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::AddressData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_addresses(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<ListAddressesResponseData>, ApiError> {
    let addresses = state
        .address_service
        .list_by_owner(&caller.user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ListAddressesResponseData {
            items: addresses.iter().map(AddressData::from).collect(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListAddressesResponseData {
    pub items: Vec<AddressData>,
}
