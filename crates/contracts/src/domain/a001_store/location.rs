use serde::{Deserialize, Serialize};
use std::fmt;

/// Postal address of a store as edited in three form fields.
/// Stored remotely as one comma-joined string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreAddress {
    pub city: String,
    pub street: String,
    pub apt: String,
}

impl StoreAddress {
    pub fn new(city: impl Into<String>, street: impl Into<String>, apt: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            street: street.into(),
            apt: apt.into(),
        }
    }

    /// Split on commas, drop blank parts, take the first three positionally
    pub fn parse(text: &str) -> Self {
        let mut parts = text.split(',').map(str::trim).filter(|p| !p.is_empty());
        let mut next = || parts.next().unwrap_or_default().to_string();
        let city = next();
        let street = next();
        let apt = next();
        Self { city, street, apt }
    }

    /// Join the non-blank parts with `", "`
    pub fn format(&self) -> String {
        [&self.city, &self.street, &self.apt]
            .into_iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// City only, used as a geocoding fallback
    pub fn city_of(text: &str) -> &str {
        text.split(',').next().unwrap_or_default().trim()
    }
}

/// Latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// Serialized as `"lat,lng"` in the store update request
impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Axis-aligned lat/lon box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl BoundingBox {
    /// Coarse box around Israel. Coordinates inside still need a
    /// country-code check since the box overlaps neighbours.
    pub const ISRAEL: BoundingBox = BoundingBox {
        lat_min: 29.30,
        lat_max: 33.60,
        lon_min: 34.15,
        lon_max: 35.95,
    };

    pub fn contains(&self, point: Coordinates) -> bool {
        point.is_finite()
            && point.lat >= self.lat_min
            && point.lat <= self.lat_max
            && point.lng >= self.lon_min
            && point.lng <= self.lon_max
    }
}

/// Remove `0` placeholder segments that the form leaves behind
/// (e.g. `"Haifa, 0, 0"` becomes `"Haifa"`).
///
/// Any segment that is exactly `0` goes, a lone trailing `0` included.
/// Digits inside a segment are never touched, so `"Herzl 100"` survives.
pub fn strip_placeholder_segments(address: &str) -> String {
    address
        .split(',')
        .map(str::trim)
        .filter(|part| *part != "0")
        .collect::<Vec<_>>()
        .join(", ")
        .trim_matches(|c: char| c == ',' || c.is_whitespace())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_three_parts() {
        assert_eq!(
            StoreAddress::parse("Tel Aviv, Aza 25, 3"),
            StoreAddress::new("Tel Aviv", "Aza 25", "3")
        );
    }

    #[test]
    fn test_parse_missing_parts_default_to_empty() {
        assert_eq!(StoreAddress::parse("Haifa"), StoreAddress::new("Haifa", "", ""));
        assert_eq!(StoreAddress::parse(""), StoreAddress::default());
        assert_eq!(
            StoreAddress::parse("Haifa, , Herzl 1,"),
            StoreAddress::new("Haifa", "Herzl 1", "")
        );
        assert_eq!(
            StoreAddress::parse("a, b, c, d"),
            StoreAddress::new("a", "b", "c")
        );
    }

    #[test]
    fn test_format_skips_empty_parts() {
        assert_eq!(StoreAddress::new("Tel Aviv", "", "").format(), "Tel Aviv");
        assert_eq!(
            StoreAddress::new(" Tel Aviv ", "Aza 25", " 3").format(),
            "Tel Aviv, Aza 25, 3"
        );
        assert_eq!(StoreAddress::new("", "Aza 25", "").format(), "Aza 25");
        assert_eq!(StoreAddress::default().format(), "");
    }

    #[test]
    fn test_format_collapses_blank_segments() {
        let address = StoreAddress::parse("Haifa,, ,Herzl 1");
        assert_eq!(address.format(), "Haifa, Herzl 1");
    }

    #[test]
    fn test_city_of() {
        assert_eq!(StoreAddress::city_of("Tel Aviv, Aza 25"), "Tel Aviv");
        assert_eq!(StoreAddress::city_of(""), "");
    }

    #[test]
    fn test_coordinates_display() {
        assert_eq!(Coordinates::new(32.08, 34.78).to_string(), "32.08,34.78");
    }

    #[test]
    fn test_israel_bounding_box() {
        let bbox = BoundingBox::ISRAEL;
        assert!(bbox.contains(Coordinates::new(32.0853, 34.7818)));
        assert!(!bbox.contains(Coordinates::new(48.8566, 2.3522)));
        assert!(!bbox.contains(Coordinates::new(f64::NAN, 34.78)));
        assert!(bbox.contains(Coordinates::new(29.30, 35.95)));
    }

    #[test]
    fn test_strip_placeholder_segments() {
        assert_eq!(strip_placeholder_segments("Haifa, 0, 0"), "Haifa");
        assert_eq!(strip_placeholder_segments("Haifa, Herzl 10, 0"), "Haifa, Herzl 10");
        assert_eq!(strip_placeholder_segments("0, 0"), "");
        assert_eq!(strip_placeholder_segments("Haifa, Herzl 100, 0"), "Haifa, Herzl 100");
        assert_eq!(strip_placeholder_segments("Haifa,0"), "Haifa");
        assert_eq!(strip_placeholder_segments("Tel Aviv, Aza 25, 3"), "Tel Aviv, Aza 25, 3");
    }
}
