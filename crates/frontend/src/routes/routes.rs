use contracts::system::auth::StoreSession;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_store::ui::details::StoreDetails;
use crate::domain::a002_order::ui::board::OrderBoardPage;
use crate::domain::a003_delivery::ui::nearby::DeliveriesPage;
use crate::layout::Shell;
use crate::system::auth::guard::RequireSession;
use crate::system::pages::callback::CallbackPage;
use crate::system::pages::landing::LandingPage;

#[component]
pub fn AppRoutes(session: RwSignal<Option<StoreSession>>) -> impl IntoView {
    view! {
        <Router>
            <Shell session=session>
                <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                    <Route path=path!("/") view=move || view! { <LandingPage session=session /> } />
                    <Route path=path!("/callback") view=move || view! { <CallbackPage session=session /> } />
                    <Route
                        path=path!("/home")
                        view=move || view! {
                            <RequireSession session=session render=|s| view! { <StoreDetails session=s /> } />
                        }
                    />
                    <Route
                        path=path!("/orders")
                        view=move || view! {
                            <RequireSession session=session render=|s| view! { <OrderBoardPage session=s /> } />
                        }
                    />
                    <Route
                        path=path!("/deliveries")
                        view=move || view! {
                            <RequireSession session=session render=|s| view! { <DeliveriesPage session=s /> } />
                        }
                    />
                </Routes>
            </Shell>
        </Router>
    }
}
