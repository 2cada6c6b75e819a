pub mod error;
pub mod geocoding;
pub mod serde_utils;
