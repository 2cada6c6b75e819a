pub mod top_header;

use contracts::system::auth::StoreSession;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |               Content                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(session: RwSignal<Option<StoreSession>>, children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader session=session />
            <div class="app-main">{children()}</div>
        </div>
    }
}
