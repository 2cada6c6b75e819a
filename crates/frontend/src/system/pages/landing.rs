use contracts::system::auth::StoreSession;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::shared::config::AppConfig;
use crate::system::auth::{current_origin, sign_in_url};

/// Entry page. Signed-in owners go straight to their store.
#[component]
pub fn LandingPage(session: RwSignal<Option<StoreSession>>) -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let navigate = use_navigate();

    Effect::new(move |_| {
        if session.get().is_some() {
            navigate("/home", Default::default());
        }
    });

    let on_sign_in = move |_| {
        let url = sign_in_url(&config.identity, &current_origin());
        log::info!("Redirecting to identity provider");
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(&url) {
                log::error!("Failed to redirect to sign-in: {:?}", e);
            }
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Store Manager"</h1>
                <h2>"Manage your store hours, location and incoming orders"</h2>
                <button class="btn-primary" on:click=on_sign_in>
                    "Sign in / Sign up"
                </button>
            </div>
        </div>
    }
}
