pub mod nominatim;

pub use nominatim::NominatimClient;
