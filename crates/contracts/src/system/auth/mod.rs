use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::shared::error::ApiError;

/// Identity of the signed-in store owner.
///
/// Persisted as JSON in the browser and passed explicitly to every
/// screen that needs it. `sub` doubles as the store id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSession {
    pub sub: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "idToken", default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
}

impl StoreSession {
    pub fn store_id(&self) -> &str {
        &self.sub
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// A stored session without a subject is treated as absent
    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str::<StoreSession>(json)
            .ok()
            .filter(|s| !s.sub.trim().is_empty())
    }

    /// Build a session from an ID token issued by the identity provider.
    /// The signature is not checked here.
    pub fn from_id_token(id_token: &str) -> Result<Self, ApiError> {
        let claims = IdTokenClaims::decode(id_token)?;
        let name = claims
            .name
            .filter(|n| !n.trim().is_empty())
            .or_else(|| claims.email.clone())
            .unwrap_or_default();
        Ok(Self {
            sub: claims.sub,
            name,
            email: claims.email.unwrap_or_default(),
            id_token: Some(id_token.to_string()),
        })
    }
}

/// Profile claims of the ID token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdTokenClaims {
    pub sub: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl IdTokenClaims {
    /// Decode the payload segment of a compact JWT
    pub fn decode(token: &str) -> Result<Self, ApiError> {
        let payload = token
            .split('.')
            .nth(1)
            .ok_or_else(|| ApiError::Malformed("token has no payload segment".into()))?;
        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|e| ApiError::Malformed(format!("token payload: {}", e)))?;
        let claims: IdTokenClaims = serde_json::from_slice(&bytes)?;
        if claims.sub.trim().is_empty() {
            return Err(ApiError::Validation("token has no subject".into()));
        }
        Ok(claims)
    }
}

/// Parameters the identity provider appends to the callback URL fragment
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackFragment {
    #[serde(default)]
    pub id_token: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(payload: &str) -> String {
        format!("eyJhbGciOiJSUzI1NiJ9.{}.c2ln", URL_SAFE_NO_PAD.encode(payload))
    }

    #[test]
    fn test_session_from_id_token() {
        let jwt = token(r#"{"sub":"abc-123","name":"Moshe","email":"m@example.com","exp":1}"#);
        let session = StoreSession::from_id_token(&jwt).unwrap();
        assert_eq!(session.store_id(), "abc-123");
        assert_eq!(session.name, "Moshe");
        assert_eq!(session.email, "m@example.com");
        assert_eq!(session.id_token.as_deref(), Some(jwt.as_str()));
    }

    #[test]
    fn test_name_falls_back_to_email() {
        let jwt = token(r#"{"sub":"abc","email":"m@example.com"}"#);
        assert_eq!(StoreSession::from_id_token(&jwt).unwrap().name, "m@example.com");
    }

    #[test]
    fn test_bad_tokens() {
        assert!(matches!(StoreSession::from_id_token("garbage"), Err(ApiError::Malformed(_))));
        assert!(matches!(
            StoreSession::from_id_token(&token(r#"{"sub":""}"#)),
            Err(ApiError::Validation(_))
        ));
        assert!(StoreSession::from_id_token("a.!!!.c").is_err());
    }

    #[test]
    fn test_storage_json() {
        let session = StoreSession {
            sub: "s1".into(),
            name: "Shop".into(),
            email: "shop@example.com".into(),
            id_token: Some("t".into()),
        };
        let json = session.to_json().unwrap();
        assert!(json.contains("\"idToken\":\"t\""));
        assert_eq!(StoreSession::from_json(&json), Some(session));

        assert_eq!(StoreSession::from_json(r#"{"sub":"","name":"","email":""}"#), None);
        assert_eq!(StoreSession::from_json("not json"), None);
        let legacy = StoreSession::from_json(r#"{"sub":"s2","name":"n","email":"e"}"#).unwrap();
        assert_eq!(legacy.id_token, None);
    }
}
