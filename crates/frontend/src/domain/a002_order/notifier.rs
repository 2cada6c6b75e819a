use contracts::domain::a002_order::{OrderEvent, OrderNotifier};

/// Notifier that only records the event in the browser console.
/// Customer mail and remote deletion have no endpoint to call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl OrderNotifier for ConsoleNotifier {
    fn notify(&self, event: &OrderEvent) {
        let order = event.order();
        match event {
            OrderEvent::MarkedReady(_) => log::info!(
                "Order {} marked ready, customer {} not mailed",
                order.id,
                order.customer_mail
            ),
            OrderEvent::Rejected(_) => log::info!(
                "Order {} rejected, customer {} not mailed and order kept on backend",
                order.id,
                order.customer_mail
            ),
        }
    }
}
