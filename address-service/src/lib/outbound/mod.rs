pub mod geocoding;
pub mod repositories;
