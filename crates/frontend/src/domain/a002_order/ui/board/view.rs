use super::view_model::OrderBoardViewModel;
use contracts::domain::a002_order::{OrderView, Product};
use contracts::system::auth::StoreSession;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::shared::config::AppConfig;

fn product_chips(products: Vec<Product>) -> impl IntoView {
    view! {
        <div class="product-grid">
            {products
                .into_iter()
                .map(|p| {
                    view! {
                        <div class="product-chip">
                            <span class="product-name">{p.name}</span>
                            <span class="product-qty">{format!("× {}", p.quantity)}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn order_card(vm: OrderBoardViewModel, order: OrderView, expanded: bool) -> impl IntoView {
    let location = if order.street.is_empty() {
        order.location.clone()
    } else {
        format!("{}, {}", order.location, order.street)
    };
    let class = if expanded { "order-card expanded" } else { "order-card" };
    let id = order.id.clone();
    let toggle_id = id.clone();
    let ready_id = id.clone();
    let reject_id = id.clone();

    view! {
        <div class=class>
            <h3>{format!("Order #{}", id)}</h3>
            <p><strong>"Name: "</strong>{order.client_name}</p>
            <p><strong>"Price: "</strong>{format!("₪{}", order.total_price)}</p>
            <p><strong>"Location: "</strong>{location}</p>
            <p><strong>"Status: "</strong>{order.status.label()}</p>
            <p><strong>"Email: "</strong>{order.customer_mail}</p>

            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| vm.toggle_expanded(&toggle_id)
            >
                {if expanded { "Hide Products" } else { "Show Products" }}
            </Button>

            {expanded.then(|| product_chips(order.products))}

            {order.status.accepts_actions().then(|| view! {
                <div class="card-buttons">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.mark_ready(&ready_id)
                    >
                        "Mark as Ready"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.reject(&reject_id)
                    >
                        "Reject"
                    </Button>
                </div>
            })}
        </div>
    }
}

#[component]
pub fn OrderBoardPage(session: StoreSession) -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let vm = OrderBoardViewModel::new();
    vm.start_polling(config, session.store_id().to_string());

    let cards = move || {
        let cards: Vec<(OrderView, bool)> = vm.board.with(|b| {
            b.orders()
                .iter()
                .map(|o| (o.clone(), b.is_expanded(&o.id)))
                .collect()
        });
        if cards.is_empty() {
            view! { <p>"no orders"</p> }.into_any()
        } else {
            cards
                .into_iter()
                .map(|(order, expanded)| order_card(vm, order, expanded))
                .collect_view()
                .into_any()
        }
    };

    view! {
        <div class="store-orders-wrapper">
            <h2 class="store-title">{format!("{} orders", session.name)}</h2>
            <div class="orders-container">{cards}</div>
        </div>
    }
}
