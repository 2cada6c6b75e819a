use contracts::system::auth::StoreSession;
use leptos::prelude::*;
use leptos_router::components::A;

/// Render `render(session)` while a store session exists, otherwise a
/// sign-in prompt
#[component]
pub fn RequireSession<F, V>(session: RwSignal<Option<StoreSession>>, render: F) -> impl IntoView
where
    F: Fn(StoreSession) -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    // Memo keeps the screen mounted unless the session actually changes
    let current = Memo::new(move |_| session.get());

    move || match current.get() {
        Some(session) => render(session).into_any(),
        None => view! {
            <div class="not-signed-in">
                <p>"You are not signed in."</p>
                <A href="/">"Sign in"</A>
            </div>
        }
        .into_any(),
    }
}
