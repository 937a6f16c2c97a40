pub mod address;
pub mod user;

pub use address::PostgresAddressRepository;
pub use user::PostgresUserRepository;
