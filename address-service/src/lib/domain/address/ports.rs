use async_trait::async_trait;

use crate::address::errors::AddressError;
use crate::address::errors::GeocodingError;
use crate::address::models::Address;
use crate::address::models::Coordinates;
use crate::address::models::CreateAddressCommand;
use crate::address::models::SearchWord;
use crate::user::models::UserId;

/// Port for owner-scoped address operations.
#[async_trait]
pub trait AddressServicePort: Send + Sync + 'static {
    /// Resolve the search word to coordinates and persist a new address for
    /// the owner.
    ///
    /// Resolution strictly precedes persistence: on any resolution failure
    /// nothing is written.
    ///
    /// # Errors
    /// * `Resolution` - Provider found no match, timed out, or was unreachable
    /// * `DatabaseError` - Database operation failed
    async fn create_address(&self, command: CreateAddressCommand)
        -> Result<Address, AddressError>;

    /// List all addresses owned by the given user, in creation order.
    ///
    /// Never returns another owner's records.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Address>, AddressError>;
}

/// Persistence operations for the address aggregate.
#[async_trait]
pub trait AddressRepository: Send + Sync + 'static {
    /// Persist a new address. Atomic per operation.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn insert(&self, address: Address) -> Result<Address, AddressError>;

    /// Retrieve all addresses for an owner, ordered by creation time.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Address>, AddressError>;
}

/// Outbound port to the geocoding provider.
#[async_trait]
pub trait GeocodingPort: Send + Sync + 'static {
    /// Resolve free text to a best-match coordinate pair.
    ///
    /// Implementations bound the call with a timeout; a slow provider
    /// surfaces as `Timeout` rather than hanging the request.
    ///
    /// # Errors
    /// * `NoMatch` - Provider found no location for the text
    /// * `Timeout` - Provider did not answer within the deadline
    /// * `Unreachable` - Transport-level failure
    /// * `InvalidResponse` - Provider payload could not be interpreted
    async fn resolve(&self, search_word: &SearchWord) -> Result<Coordinates, GeocodingError>;
}
