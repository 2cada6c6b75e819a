//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Application title
//! - Links to the store screens
//! - Signed-in store name and sign-out

use contracts::system::auth::StoreSession;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::system::auth::storage::clear_session;

#[component]
pub fn TopHeader(session: RwSignal<Option<StoreSession>>) -> impl IntoView {
    let navigate = use_navigate();

    let logout = move |_| {
        clear_session();
        session.set(None);
        log::info!("Signed out");
        navigate("/", Default::default());
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Store Manager"</span>
            </div>

            <Show when=move || session.with(Option::is_some)>
                <nav class="top-header__nav">
                    <A href="/home">"Store"</A>
                    <A href="/orders">"Orders"</A>
                    <A href="/deliveries">"Deliveries"</A>
                </nav>
            </Show>

            <div class="top-header__actions">
                <div class="top-header__user">
                    <span>
                        {move || session.get()
                            .map(|s| s.name)
                            .unwrap_or_else(|| "Guest".to_string())}
                    </span>
                </div>

                <button
                    class="top-header__icon-btn"
                    hidden=move || session.with(Option::is_none)
                    on:click=logout
                    title="Sign out"
                >
                    "Sign out"
                </button>
            </div>
        </div>
    }
}
