//! Response shapes of the OpenStreetMap Nominatim geocoder.

use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::domain::a001_store::location::Coordinates;

/// One hit of `/search?format=json`. Coordinates arrive as strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl SearchHit {
    pub fn coordinates(&self) -> Result<Coordinates, ApiError> {
        let lat = self.lat.trim().parse::<f64>();
        let lng = self.lon.trim().parse::<f64>();
        match (lat, lng) {
            (Ok(lat), Ok(lng)) => Ok(Coordinates::new(lat, lng)),
            _ => Err(ApiError::Malformed(format!(
                "bad coordinates {:?},{:?}",
                self.lat, self.lon
            ))),
        }
    }
}

/// First usable hit of a search result set
pub fn first_coordinates(hits: &[SearchHit]) -> Option<Result<Coordinates, ApiError>> {
    hits.first().map(SearchHit::coordinates)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReverseAddress {
    #[serde(default)]
    pub country_code: Option<String>,
}

/// `/reverse?format=json&addressdetails=1`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReverseResult {
    #[serde(default)]
    pub address: Option<ReverseAddress>,
}

impl ReverseResult {
    pub fn country_code(&self) -> &str {
        self.address
            .as_ref()
            .and_then(|a| a.country_code.as_deref())
            .unwrap_or_default()
    }

    pub fn is_country(&self, code: &str) -> bool {
        self.country_code().eq_ignore_ascii_case(code)
    }
}
