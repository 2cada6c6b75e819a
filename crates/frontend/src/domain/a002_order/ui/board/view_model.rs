use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use contracts::domain::a002_order::{OrderBoard, OrderNotifier, PollApplied};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_order::api;
use crate::domain::a002_order::notifier::ConsoleNotifier;
use crate::shared::config::AppConfig;

#[derive(Clone, Copy)]
pub struct OrderBoardViewModel {
    pub board: RwSignal<OrderBoard>,
    notifier: ConsoleNotifier,
}

impl OrderBoardViewModel {
    pub fn new() -> Self {
        Self {
            board: RwSignal::new(OrderBoard::new()),
            notifier: ConsoleNotifier,
        }
    }

    /// Poll the store's orders now and then every configured interval
    /// until the owning component is cleaned up.
    ///
    /// Each tick sends its request without waiting for the previous one,
    /// the board discards responses that arrive out of order.
    pub fn start_polling(&self, config: AppConfig, store_id: String) {
        let vm = *self;
        let alive = Arc::new(AtomicBool::new(true));

        let flag = alive.clone();
        on_cleanup(move || {
            flag.store(false, Ordering::Relaxed);
            vm.board.try_update_untracked(OrderBoard::close);
            log::debug!("Order polling stopped");
        });

        let interval = config.orders.poll_interval_ms();
        spawn_local(async move {
            while alive.load(Ordering::Relaxed) {
                let Some(ticket) = vm.board.try_update_untracked(OrderBoard::begin_poll) else {
                    break;
                };

                let config = config.clone();
                let store_id = store_id.clone();
                spawn_local(async move {
                    let result = api::fetch_orders(&config.api, &store_id).await;
                    if let Some(applied) = vm.board.try_update(|b| b.apply_poll(ticket, result)) {
                        log_poll(&store_id, ticket.seq(), &applied);
                    }
                });

                TimeoutFuture::new(interval).await;
            }
        });
    }

    pub fn toggle_expanded(&self, id: &str) {
        self.board.update(|b| {
            b.toggle_expanded(id);
        });
    }

    pub fn mark_ready(&self, id: &str) {
        if let Some(event) = self.board.try_update(|b| b.mark_ready(id)).flatten() {
            self.notifier.notify(&event);
        }
    }

    pub fn reject(&self, id: &str) {
        if let Some(event) = self.board.try_update(|b| b.reject(id)).flatten() {
            self.notifier.notify(&event);
        }
    }
}

fn log_poll(store_id: &str, seq: u64, applied: &PollApplied) {
    match applied {
        PollApplied::Replaced { count } => {
            log::debug!("Poll #{} for store {}: {} orders", seq, store_id, count)
        }
        PollApplied::Empty => log::info!("No orders found for store {}", store_id),
        PollApplied::Failed(e) => log::error!("Error fetching orders: {}", e),
        PollApplied::Stale { ticket, applied } => {
            log::debug!("Dropped poll #{}, #{} already applied", ticket, applied)
        }
        PollApplied::Closed => log::debug!("Dropped poll #{} after board closed", seq),
    }
}
