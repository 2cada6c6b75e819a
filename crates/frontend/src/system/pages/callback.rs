use contracts::system::auth::{CallbackFragment, StoreSession};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::system::auth::storage;

fn read_fragment() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Turn the `#id_token=...` fragment into a session
fn session_from_fragment(fragment: &str) -> Result<StoreSession, String> {
    let params: CallbackFragment = serde_qs::from_str(fragment.trim_start_matches('#'))
        .map_err(|e| format!("Invalid callback parameters: {}", e))?;

    if let Some(error) = params.error {
        let description = params.error_description.unwrap_or_default();
        return Err(format!("Sign-in failed: {} {}", error, description).trim().to_string());
    }

    let token = params
        .id_token
        .ok_or_else(|| "Sign-in response did not include an ID token".to_string())?;

    StoreSession::from_id_token(&token).map_err(|e| format!("Sign-in failed: {}", e))
}

/// Landing point of the identity provider redirect
#[component]
pub fn CallbackPage(session: RwSignal<Option<StoreSession>>) -> impl IntoView {
    let (error, set_error) = signal(None::<String>);
    let navigate = use_navigate();

    Effect::new(move |_| match session_from_fragment(&read_fragment()) {
        Ok(signed_in) => {
            log::info!("Signed in as {}", signed_in.store_id());
            storage::save_session(&signed_in);
            session.set(Some(signed_in));
            navigate("/home", Default::default());
        }
        Err(e) => {
            log::error!("{}", e);
            set_error.set(Some(e));
        }
    });

    view! {
        <div class="login-container">
            {move || match error.get() {
                Some(e) => view! {
                    <div class="error-message">{e}</div>
                    <a href="/">"Back"</a>
                }
                .into_any(),
                None => view! { <p>"Redirecting..."</p> }.into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_error_is_reported() {
        let err = session_from_fragment("#error=access_denied&error_description=User%20cancelled")
            .unwrap_err();
        assert_eq!(err, "Sign-in failed: access_denied User cancelled");
    }

    #[test]
    fn test_fragment_without_token() {
        assert!(session_from_fragment("#access_token=abc").is_err());
        assert!(session_from_fragment("").is_err());
    }
}
