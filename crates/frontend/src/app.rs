use crate::routes::routes::AppRoutes;
use crate::shared::config::load_config;
use crate::system::auth::storage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Endpoints and identity settings for every screen
    provide_context(load_config());

    let session = RwSignal::new(storage::load_session());

    view! {
        <AppRoutes session=session />
    }
}
