use serde::Deserialize;

use crate::system::auth::storage::local_storage;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub orders: OrdersConfig,
    pub geocoding: GeocodingConfig,
    pub identity: IdentityConfig,
}

/// Base URLs of the serverless endpoints
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ApiConfig {
    pub orders_base: String,
    pub store_info_base: String,
    pub store_update_base: String,
    pub deliveries_base: String,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct OrdersConfig {
    pub poll_interval_ms: u32,
}

impl OrdersConfig {
    const MIN_POLL_INTERVAL_MS: u32 = 1000;

    /// Never poll faster than once a second
    pub fn poll_interval_ms(&self) -> u32 {
        self.poll_interval_ms.max(Self::MIN_POLL_INTERVAL_MS)
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct GeocodingConfig {
    pub base_url: String,
    pub expected_country_code: String,
}

/// Hosted login of the identity provider
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct IdentityConfig {
    pub authority: String,
    pub client_id: String,
    pub scope: String,
    pub redirect_path: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
orders_base = "https://yv6baxe2i0.execute-api.us-east-1.amazonaws.com/dev"
store_info_base = "https://5uos9aldec.execute-api.us-east-1.amazonaws.com/dev"
store_update_base = "https://oa608utwwh.execute-api.us-east-1.amazonaws.com/dev"
deliveries_base = "https://yv6baxe2i0.execute-api.us-east-1.amazonaws.com/dev"

[orders]
poll_interval_ms = 5000

[geocoding]
base_url = "https://nominatim.openstreetmap.org"
expected_country_code = "il"

[identity]
authority = "https://us-east-1cs31kzbts.auth.us-east-1.amazoncognito.com"
client_id = "797di13hgmlrd5lthlpkelbgll"
scope = "openid email phone profile"
redirect_path = "/callback"
"#;

/// localStorage key holding a TOML document that overrides the defaults
const OVERRIDE_KEY: &str = "app_config";

/// Parse the embedded defaults with an optional partial override on top.
/// Override keys replace defaults one by one; tables merge recursively.
pub fn parse_config(overlay: Option<&str>) -> Result<AppConfig, toml::de::Error> {
    let mut base: toml::Table = toml::from_str(DEFAULT_CONFIG)?;
    if let Some(text) = overlay {
        let overlay: toml::Table = toml::from_str(text)?;
        merge(&mut base, overlay);
    }
    toml::Value::Table(base).try_into()
}

fn merge(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match value {
            toml::Value::Table(incoming) => {
                if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                    merge(existing, incoming);
                } else {
                    base.insert(key, toml::Value::Table(incoming));
                }
            }
            value => {
                base.insert(key, value);
            }
        }
    }
}

/// Load configuration.
///
/// Search order:
/// 1. Embedded defaults merged with the localStorage override
/// 2. Embedded defaults alone, if the override is malformed
pub fn load_config() -> AppConfig {
    let overlay = local_storage().and_then(|s| s.get_item(OVERRIDE_KEY).ok().flatten());

    if let Some(text) = overlay.as_deref() {
        match parse_config(Some(text)) {
            Ok(config) => {
                log::info!("Loaded config with override from localStorage");
                return config;
            }
            Err(e) => log::warn!("Ignoring malformed config override: {}", e),
        }
    }

    parse_config(None).unwrap_or_else(|e| {
        log::error!("Embedded config is invalid: {}", e);
        AppConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(None).unwrap();
        assert_eq!(config.orders.poll_interval_ms, 5000);
        assert_eq!(config.geocoding.expected_country_code, "il");
        assert!(config.api.orders_base.starts_with("https://"));
        assert_eq!(config.identity.redirect_path, "/callback");
    }

    #[test]
    fn test_partial_override() {
        let config = parse_config(Some(
            r#"
            [orders]
            poll_interval_ms = 2000

            [api]
            orders_base = "http://localhost:3000"
            "#,
        ))
        .unwrap();
        assert_eq!(config.orders.poll_interval_ms(), 2000);
        assert_eq!(config.api.orders_base, "http://localhost:3000");
        assert!(config.api.store_info_base.contains("execute-api"));
    }

    #[test]
    fn test_malformed_override_is_an_error() {
        assert!(parse_config(Some("[orders")).is_err());
        assert!(parse_config(Some("[orders]\npoll_interval_ms = \"fast\"")).is_err());
    }

    #[test]
    fn test_poll_interval_floor() {
        let orders = OrdersConfig { poll_interval_ms: 10 };
        assert_eq!(orders.poll_interval_ms(), 1000);
    }
}
