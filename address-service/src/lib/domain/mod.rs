pub mod address;
pub mod user;
