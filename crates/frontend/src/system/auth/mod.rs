pub mod guard;
pub mod storage;

use crate::shared::config::IdentityConfig;

/// Hosted login page of the identity provider. It redirects back to
/// `origin + redirect_path` with the ID token in the URL fragment.
pub fn sign_in_url(identity: &IdentityConfig, origin: &str) -> String {
    let redirect_uri = format!(
        "{}{}",
        origin.trim_end_matches('/'),
        identity.redirect_path
    );
    format!(
        "{}/login?client_id={}&response_type=token&scope={}&redirect_uri={}",
        identity.authority.trim_end_matches('/'),
        urlencoding::encode(&identity.client_id),
        urlencoding::encode(&identity.scope),
        urlencoding::encode(&redirect_uri)
    )
}

/// `window.location.origin`, empty outside a browser
pub fn current_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}
