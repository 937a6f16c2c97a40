use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::address::errors::AddressError;
use crate::address::models::Address;
use crate::address::models::AddressId;
use crate::address::models::CreateAddressCommand;
use crate::address::ports::AddressRepository;
use crate::address::ports::AddressServicePort;
use crate::address::ports::GeocodingPort;
use crate::user::models::UserId;

/// Domain service for owner-scoped addresses.
///
/// Coordinates are always derived through the geocoding port inside
/// `create_address`; callers never supply them.
pub struct AddressService {
    repository: Arc<dyn AddressRepository>,
    geocoder: Arc<dyn GeocodingPort>,
}

impl AddressService {
    /// Create a new address service with injected dependencies.
    pub fn new(repository: Arc<dyn AddressRepository>, geocoder: Arc<dyn GeocodingPort>) -> Self {
        Self {
            repository,
            geocoder,
        }
    }
}

#[async_trait]
impl AddressServicePort for AddressService {
    async fn create_address(
        &self,
        command: CreateAddressCommand,
    ) -> Result<Address, AddressError> {
        // Resolution strictly precedes persistence; a failed lookup leaves
        // no partial record behind.
        let coordinates = self.geocoder.resolve(&command.search_word).await?;

        let address = Address {
            id: AddressId::new(),
            owner_id: command.owner_id,
            name: command.name,
            description: command.description,
            coordinates,
            created_at: Utc::now(),
        };

        let created_address = self.repository.insert(address).await?;

        tracing::info!(
            address_id = %created_address.id,
            owner_id = %created_address.owner_id,
            "Address created"
        );

        Ok(created_address)
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Address>, AddressError> {
        self.repository.list_by_owner(owner_id).await
    }
}
