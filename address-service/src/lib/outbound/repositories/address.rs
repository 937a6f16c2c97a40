use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::address::errors::AddressError;
use crate::domain::address::models::Address;
use crate::domain::address::models::AddressId;
use crate::domain::address::models::AddressName;
use crate::domain::address::models::Coordinates;
use crate::domain::address::ports::AddressRepository;
use crate::domain::user::models::UserId;

pub struct PostgresAddressRepository {
    pool: PgPool,
}

impl PostgresAddressRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AddressRow {
    id: Uuid,
    owner_id: Uuid,
    name: String,
    description: String,
    lat: f64,
    lng: f64,
    created_at: DateTime<Utc>,
}

impl AddressRow {
    fn try_into_address(self) -> Result<Address, AddressError> {
        Ok(Address {
            id: AddressId(self.id),
            owner_id: UserId(self.owner_id),
            name: AddressName::new(self.name)?,
            description: self.description,
            coordinates: Coordinates {
                lat: self.lat,
                lng: self.lng,
            },
            created_at: self.created_at,
        })
    }
}

#[async_trait]
impl AddressRepository for PostgresAddressRepository {
    async fn insert(&self, address: Address) -> Result<Address, AddressError> {
        sqlx::query(
            r#"
            INSERT INTO addresses (id, owner_id, name, description, lat, lng, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(address.id.0)
        .bind(address.owner_id.0)
        .bind(address.name.as_str())
        .bind(&address.description)
        .bind(address.coordinates.lat)
        .bind(address.coordinates.lng)
        .bind(address.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AddressError::DatabaseError(e.to_string()))?;

        Ok(address)
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Address>, AddressError> {
        let rows = sqlx::query_as::<_, AddressRow>(
            r#"
            SELECT id, owner_id, name, description, lat, lng, created_at
            FROM addresses
            WHERE owner_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(owner_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AddressError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(AddressRow::try_into_address).collect()
    }
}
