use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::address::errors::AddressNameError;
use crate::address::errors::SearchWordError;
use crate::user::models::UserId;

/// Address aggregate entity.
///
/// A favorite place owned by exactly one user. Coordinates are resolved
/// server-side at creation and immutable thereafter; there is no update or
/// delete operation.
#[derive(Debug, Clone)]
pub struct Address {
    pub id: AddressId,
    pub owner_id: UserId,
    pub name: AddressName,
    pub description: String,
    pub coordinates: Coordinates,
    pub created_at: DateTime<Utc>,
}

/// Address unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressId(pub Uuid);

impl AddressId {
    /// Generate a new random address ID (UUID v4).
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AddressId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AddressId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A resolved coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// User-supplied display label for an address.
///
/// Must be non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressName(String);

impl AddressName {
    /// Create a new validated address name.
    ///
    /// # Errors
    /// * `Empty` - Name is empty or whitespace-only
    pub fn new(name: String) -> Result<Self, AddressNameError> {
        if name.trim().is_empty() {
            return Err(AddressNameError::Empty);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AddressName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Free-text search term handed to the geocoding provider.
///
/// Must be non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchWord(String);

impl SearchWord {
    /// Create a new validated search term.
    ///
    /// # Errors
    /// * `Empty` - Search term is empty or whitespace-only
    pub fn new(search_word: String) -> Result<Self, SearchWordError> {
        if search_word.trim().is_empty() {
            return Err(SearchWordError::Empty);
        }
        Ok(Self(search_word))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new address with domain types.
///
/// The owner id is resolved at the HTTP boundary from the bearer token and
/// passed explicitly; coordinates are never part of the command, they come
/// from resolution inside the service.
#[derive(Debug)]
pub struct CreateAddressCommand {
    pub owner_id: UserId,
    pub search_word: SearchWord,
    pub name: AddressName,
    pub description: String,
}

impl CreateAddressCommand {
    pub fn new(
        owner_id: UserId,
        search_word: SearchWord,
        name: AddressName,
        description: String,
    ) -> Self {
        Self {
            owner_id,
            search_word,
            name,
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_name_rejects_empty() {
        assert!(AddressName::new("".to_string()).is_err());
        assert!(AddressName::new("   ".to_string()).is_err());
        assert!(AddressName::new("Eiffel Tower".to_string()).is_ok());
    }

    #[test]
    fn test_search_word_rejects_empty() {
        assert!(SearchWord::new("".to_string()).is_err());
        assert!(SearchWord::new("\t\n".to_string()).is_err());
        assert!(SearchWord::new("Paris, France".to_string()).is_ok());
    }
}
