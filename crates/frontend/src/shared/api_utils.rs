//! HTTP helpers shared by the domain API modules.
//!
//! Every remote failure is mapped onto [`ApiError`]: send errors become
//! `Transport`, non-2xx answers become `Status` (with the body text) and
//! undecodable bodies become `Malformed`.

use contracts::shared::error::ApiError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Join a configured base URL and an endpoint path
///
/// # Example
/// ```text
/// endpoint("https://host/dev/", "/getInfoFromStore/42")
///     == "https://host/dev/getInfoFromStore/42"
/// ```
pub fn endpoint(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// GET a JSON document
pub async fn get_json<T>(url: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    read_json(response).await
}

/// POST a JSON body and decode the JSON answer
pub async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    read_json(response).await
}

/// POST a JSON body, ignoring whatever the endpoint answers on success
pub async fn post_json_no_content<B>(url: &str, body: &B) -> Result<(), ApiError>
where
    B: Serialize,
{
    let response = Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    ensure_ok(response).await.map(|_| ())
}

/// PUT a JSON body, ignoring the answer on success
pub async fn put_json<B>(url: &str, body: &B) -> Result<(), ApiError>
where
    B: Serialize,
{
    let response = Request::put(url)
        .json(body)
        .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    ensure_ok(response).await.map(|_| ())
}

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::status(status, body))
}

async fn read_json<T>(response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    ensure_ok(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        assert_eq!(
            endpoint("https://host/dev", "getAllOrdersFromStore/7"),
            "https://host/dev/getAllOrdersFromStore/7"
        );
        assert_eq!(endpoint("https://host/dev/", "/search"), "https://host/dev/search");
    }
}
