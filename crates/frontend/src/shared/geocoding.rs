//! Address validation through the Nominatim geocoder.

use contracts::domain::a001_store::location::{strip_placeholder_segments, Coordinates, StoreAddress};
use contracts::shared::error::ApiError;
use contracts::shared::geocoding::{first_coordinates, ReverseResult, SearchHit};

use super::api_utils::{endpoint, get_json};
use super::config::GeocodingConfig;

fn search_url(config: &GeocodingConfig, query: &str) -> String {
    format!(
        "{}?format=json&q={}",
        endpoint(&config.base_url, "search"),
        urlencoding::encode(query)
    )
}

fn reverse_url(config: &GeocodingConfig, point: Coordinates) -> String {
    format!(
        "{}?format=json&lat={}&lon={}&zoom=10&addressdetails=1",
        endpoint(&config.base_url, "reverse"),
        point.lat,
        point.lng
    )
}

/// Resolve an address to coordinates, retrying with the city alone when
/// the full address is unknown to the geocoder
pub async fn forward(config: &GeocodingConfig, address: &str) -> Result<Coordinates, ApiError> {
    let cleaned = strip_placeholder_segments(address);
    if cleaned.is_empty() {
        return Err(ApiError::Validation("Address is empty".into()));
    }

    let hits: Vec<SearchHit> = get_json(&search_url(config, &cleaned)).await?;
    if let Some(found) = first_coordinates(&hits) {
        return found;
    }

    let city = StoreAddress::city_of(address);
    if !city.is_empty() {
        log::debug!("No geocoding hit for {:?}, retrying with city {:?}", cleaned, city);
        let hits: Vec<SearchHit> = get_json(&search_url(config, city)).await?;
        if let Some(found) = first_coordinates(&hits) {
            return found;
        }
    }

    Err(ApiError::Validation("No results found".into()))
}

/// Whether the point lies in the configured country. Lookup failures
/// count as "no".
pub async fn is_in_country(config: &GeocodingConfig, point: Coordinates) -> bool {
    match get_json::<ReverseResult>(&reverse_url(config, point)).await {
        Ok(result) => result.is_country(&config.expected_country_code),
        Err(e) => {
            log::warn!("Reverse geocoding failed for {}: {}", point, e);
            false
        }
    }
}
