use super::aggregate::OrderView;

/// Local transition emitted by the board for side effects
#[derive(Debug, Clone, PartialEq)]
pub enum OrderEvent {
    MarkedReady(OrderView),
    Rejected(OrderView),
}

impl OrderEvent {
    pub fn order(&self) -> &OrderView {
        match self {
            OrderEvent::MarkedReady(order) | OrderEvent::Rejected(order) => order,
        }
    }
}

/// Customer-facing side effects of operator actions.
///
/// Customer mails and remote deletion have no backend endpoint yet;
/// implementations decide what dispatch means.
pub trait OrderNotifier {
    fn notify(&self, event: &OrderEvent);
}
