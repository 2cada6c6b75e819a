use super::view_model::DeliveriesViewModel;
use chrono::{DateTime, Utc};
use contracts::domain::a003_delivery::nearby::NEARBY_RADIUS_KM;
use contracts::domain::a003_delivery::{visible_deliveries, Delivery, DeliveryStats, PriorityFilter};
use contracts::system::auth::StoreSession;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::shared::config::AppConfig;

/// Posting time shown on a card, e.g. `01.05.2024 10:00 UTC`
fn created_label(created: DateTime<Utc>) -> String {
    created.format("%d.%m.%Y %H:%M UTC").to_string()
}

fn delivery_card<F>(delivery: Delivery, distance: Option<f64>, on_accept: F) -> impl IntoView
where
    F: Fn(String) + Send + Sync + 'static,
{
    let id = delivery.id.clone();
    let class = if delivery.priority.is_high() {
        "delivery-card delivery-card--high"
    } else {
        "delivery-card"
    };

    view! {
        <div class=class>
            <div class="delivery-card__header">
                <span class="badge">{delivery.priority.label()}</span>
                <span class="delivery-fee">{format!("₪{}", delivery.delivery_fee)}</span>
            </div>
            <p><strong>"Pickup: "</strong>{delivery.pickup_address}</p>
            <p><strong>"Drop-off: "</strong>{delivery.dropoff_address}</p>
            {distance.map(|km| view! { <p class="distance">{format!("{:.1} km away", km)}</p> })}
            {delivery
                .created_date
                .map(|d| view! { <p class="created">{created_label(d)}</p> })}
            <Button appearance=ButtonAppearance::Primary on_click=move |_| on_accept(id.clone())>
                "Accept delivery"
            </Button>
        </div>
    }
}

#[component]
pub fn DeliveriesPage(session: StoreSession) -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let vm = DeliveriesViewModel::new();
    vm.load(config.clone(), session.email.clone());

    let stats = Memo::new(move |_| {
        let filter = vm.filter.get();
        let position = vm.position.get();
        vm.deliveries
            .with(|all| DeliveryStats::of(&visible_deliveries(all, filter, position)))
    });

    let locate = {
        let config = config.clone();
        let email = session.email.clone();
        move |_| vm.locate(config.clone(), email.clone())
    };

    let list = {
        let config = config.clone();
        let email = session.email.clone();
        move || {
            let filter = vm.filter.get();
            let position = vm.position.get();
            let cards: Vec<(Delivery, Option<f64>)> = vm.deliveries.with(|all| {
                visible_deliveries(all, filter, position)
                    .into_iter()
                    .map(|d| (d.clone(), position.map(|_| d.distance_from(position))))
                    .collect()
            });

            if cards.is_empty() {
                let hint = if position.is_none() {
                    "Turn on location to see deliveries in your area"
                } else {
                    "Try widening the filter or wait for new deliveries"
                };
                return view! {
                    <div class="empty-state">
                        <h3>"No deliveries available right now"</h3>
                        <p>{hint}</p>
                    </div>
                }
                .into_any();
            }

            cards
                .into_iter()
                .map(|(delivery, distance)| {
                    let config = config.clone();
                    let email = email.clone();
                    delivery_card(delivery, distance, move |id| {
                        vm.accept(config.clone(), email.clone(), id)
                    })
                })
                .collect_view()
                .into_any()
        }
    };

    view! {
        <Show
            when=move || !vm.loading.get()
            fallback=|| view! { <div class="loading">"Loading…"</div> }
        >
            <div class="deliveries-page">
                <h1>"Available deliveries"</h1>
                <p class="subtitle">{format!("Deliveries within {} km of you", NEARBY_RADIUS_KM)}</p>

                <div class="location-tracker">
                    <span>
                        {move || match vm.position.get() {
                            Some(p) => format!("Your location: {:.4}, {:.4}", p.lat, p.lng),
                            None => "Location unknown".to_string(),
                        }}
                    </span>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=vm.locating
                        on_click=locate.clone()
                    >
                        {move || if vm.locating.get() { "Locating…" } else { "Update location" }}
                    </Button>
                </div>

                {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

                <div class="stats-grid">
                    <div class="stat-card">
                        <p>"Available"</p>
                        <p class="stat-value">{move || stats.get().total}</p>
                    </div>
                    <div class="stat-card">
                        <p>"High priority"</p>
                        <p class="stat-value">{move || stats.get().high_priority}</p>
                    </div>
                    <div class="stat-card">
                        <p>"Potential earnings"</p>
                        <p class="stat-value">
                            {move || format!("₪{}", stats.get().potential_earnings)}
                        </p>
                    </div>
                </div>

                <div class="filter-bar">
                    <span>"Filter by priority:"</span>
                    {PriorityFilter::ALL
                        .into_iter()
                        .map(|f| {
                            let appearance = Signal::derive(move || {
                                if vm.filter.get() == f {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Secondary
                                }
                            });
                            view! {
                                <Button appearance=appearance on_click=move |_| vm.filter.set(f)>
                                    {f.label()}
                                </Button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="delivery-list">{list.clone()}</div>
            </div>
        </Show>
    }
}
