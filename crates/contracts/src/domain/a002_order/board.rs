//! Order board: the locally visible set of a store's orders.
//!
//! The screen polls the listing endpoint on a fixed interval. Each tick
//! takes a [`PollTicket`] before the request goes out and hands it back
//! with the result. A response is applied only if its ticket is newer than
//! the last one applied, so a slow earlier request cannot overwrite a
//! faster later one. After [`OrderBoard::close`] every result is dropped.
//!
//! A successful non-empty result replaces the whole list and resets every
//! status to pending. Local `ready` marks are therefore lost on the next
//! tick while the backend still returns the order: the backend has no
//! status field to persist them.

use std::collections::HashSet;

use super::aggregate::{OrderRecord, OrderStatus, OrderView, OrdersResponse};
use super::notifier::OrderEvent;
use crate::shared::error::ApiError;

/// Sequence number taken when a poll request is issued
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PollTicket(u64);

impl PollTicket {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

/// What happened to a poll result
#[derive(Debug, Clone, PartialEq)]
pub enum PollApplied {
    /// The visible list was replaced
    Replaced { count: usize },
    /// Backend returned no orders; previous list kept
    Empty,
    /// Request failed; previous list kept
    Failed(ApiError),
    /// A newer response was already applied
    Stale { ticket: u64, applied: u64 },
    /// Board closed before the response arrived
    Closed,
}

#[derive(Debug, Clone, Default)]
pub struct OrderBoard {
    orders: Vec<OrderView>,
    expanded: HashSet<String>,
    issued: u64,
    applied: u64,
    closed: bool,
}

impl OrderBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orders(&self) -> &[OrderView] {
        &self.orders
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&OrderView> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Issue a ticket for the request about to be sent
    pub fn begin_poll(&mut self) -> PollTicket {
        self.issued += 1;
        PollTicket(self.issued)
    }

    /// Apply the result of the request that was issued with `ticket`
    pub fn apply_poll(
        &mut self,
        ticket: PollTicket,
        result: Result<OrdersResponse, ApiError>,
    ) -> PollApplied {
        if self.closed {
            return PollApplied::Closed;
        }
        if ticket.0 <= self.applied {
            return PollApplied::Stale {
                ticket: ticket.0,
                applied: self.applied,
            };
        }

        match result {
            Ok(response) => match response.non_empty() {
                Some(records) => {
                    self.replace(records);
                    self.applied = ticket.0;
                    PollApplied::Replaced {
                        count: self.orders.len(),
                    }
                }
                None => PollApplied::Empty,
            },
            Err(e) => PollApplied::Failed(e),
        }
    }

    /// Expand state is kept only for orders still on the board
    fn replace(&mut self, records: Vec<OrderRecord>) {
        self.orders = records.into_iter().map(OrderView::from).collect();
        let orders = &self.orders;
        self.expanded.retain(|id| orders.iter().any(|o| &o.id == id));
    }

    /// Mark a pending order ready. It stays on the board.
    pub fn mark_ready(&mut self, id: &str) -> Option<OrderEvent> {
        let order = self.orders.iter_mut().find(|o| o.id == id)?;
        match order.status {
            OrderStatus::Pending => {
                order.status = OrderStatus::Ready;
                Some(OrderEvent::MarkedReady(order.clone()))
            }
            OrderStatus::Ready | OrderStatus::Rejected => None,
        }
    }

    /// Reject a pending order. Rejection removes it from the board.
    pub fn reject(&mut self, id: &str) -> Option<OrderEvent> {
        let index = self.orders.iter().position(|o| o.id == id)?;
        match self.orders[index].status {
            OrderStatus::Pending => {
                let mut order = self.orders.remove(index);
                order.status = OrderStatus::Rejected;
                self.expanded.remove(id);
                Some(OrderEvent::Rejected(order))
            }
            OrderStatus::Ready | OrderStatus::Rejected => None,
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Flip the product list of an order open or shut
    pub fn toggle_expanded(&mut self, id: &str) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.to_string());
            true
        }
    }

    /// Stop accepting results; called when the screen is torn down
    pub fn close(&mut self) {
        self.closed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> OrderRecord {
        OrderRecord {
            order_num: id.to_string(),
            customer_name: format!("client {}", id),
            total_price: 10.0,
            customer_location: "Tel Aviv".to_string(),
            customer_mail: format!("{}@example.com", id),
            items: vec!["Coffee: 1".to_string()],
        }
    }

    fn response(ids: &[&str]) -> Result<OrdersResponse, ApiError> {
        Ok(OrdersResponse {
            orders: Some(ids.iter().map(|id| record(id)).collect()),
        })
    }

    fn ids(board: &OrderBoard) -> Vec<&str> {
        board.orders().iter().map(|o| o.id.as_str()).collect()
    }

    fn poll(board: &mut OrderBoard, ids: &[&str]) -> PollApplied {
        let ticket = board.begin_poll();
        board.apply_poll(ticket, response(ids))
    }

    #[test]
    fn test_second_tick_replaces_whole_set() {
        let mut board = OrderBoard::new();
        assert_eq!(poll(&mut board, &["1", "2"]), PollApplied::Replaced { count: 2 });
        assert_eq!(poll(&mut board, &["2"]), PollApplied::Replaced { count: 1 });

        assert_eq!(ids(&board), vec!["2"]);
        assert_eq!(board.orders()[0].status, OrderStatus::Pending);
    }

    #[test]
    fn test_mark_ready_is_reset_by_next_tick() {
        let mut board = OrderBoard::new();
        poll(&mut board, &["1", "2"]);

        let event = board.mark_ready("1");
        assert!(matches!(event, Some(OrderEvent::MarkedReady(ref o)) if o.id == "1"));
        assert_eq!(board.get("1").map(|o| o.status), Some(OrderStatus::Ready));
        assert_eq!(ids(&board), vec!["1", "2"]);

        // Backend still returns the order and has no status field
        poll(&mut board, &["1", "2"]);
        assert_eq!(board.get("1").map(|o| o.status), Some(OrderStatus::Pending));
    }

    #[test]
    fn test_mark_ready_only_from_pending() {
        let mut board = OrderBoard::new();
        poll(&mut board, &["1"]);
        assert!(board.mark_ready("1").is_some());
        assert!(board.mark_ready("1").is_none());
        assert!(board.reject("1").is_none());
        assert!(board.mark_ready("missing").is_none());
    }

    #[test]
    fn test_reject_removes_until_reintroduced() {
        let mut board = OrderBoard::new();
        poll(&mut board, &["1", "2"]);

        let event = board.reject("1");
        match event {
            Some(OrderEvent::Rejected(order)) => {
                assert_eq!(order.id, "1");
                assert_eq!(order.status, OrderStatus::Rejected);
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert_eq!(ids(&board), vec!["2"]);

        poll(&mut board, &["2"]);
        assert_eq!(ids(&board), vec!["2"]);

        poll(&mut board, &["1", "2"]);
        assert_eq!(ids(&board), vec!["1", "2"]);
    }

    #[test]
    fn test_empty_and_failed_results_keep_state() {
        let mut board = OrderBoard::new();
        poll(&mut board, &["1"]);
        board.mark_ready("1");

        let ticket = board.begin_poll();
        let empty = board.apply_poll(ticket, Ok(OrdersResponse { orders: None }));
        assert_eq!(empty, PollApplied::Empty);

        let ticket = board.begin_poll();
        let failed = board.apply_poll(ticket, Err(ApiError::Status { status: 502, body: String::new() }));
        assert!(matches!(failed, PollApplied::Failed(ApiError::Status { status: 502, .. })));

        assert_eq!(ids(&board), vec!["1"]);
        assert_eq!(board.get("1").map(|o| o.status), Some(OrderStatus::Ready));
    }

    #[test]
    fn test_out_of_order_response_is_discarded() {
        let mut board = OrderBoard::new();
        let slow = board.begin_poll();
        let fast = board.begin_poll();

        board.apply_poll(fast, response(&["new"]));
        let late = board.apply_poll(slow, response(&["old"]));

        assert_eq!(late, PollApplied::Stale { ticket: 1, applied: 2 });
        assert_eq!(ids(&board), vec!["new"]);
    }

    #[test]
    fn test_older_response_applies_when_newer_failed() {
        let mut board = OrderBoard::new();
        let first = board.begin_poll();
        let second = board.begin_poll();

        board.apply_poll(second, Err(ApiError::Transport("offline".into())));
        assert_eq!(board.apply_poll(first, response(&["1"])), PollApplied::Replaced { count: 1 });
    }

    #[test]
    fn test_closed_board_ignores_results() {
        let mut board = OrderBoard::new();
        let ticket = board.begin_poll();
        board.close();
        assert_eq!(board.apply_poll(ticket, response(&["1"])), PollApplied::Closed);
        assert!(board.is_empty());
    }

    #[test]
    fn test_expand_state_survives_polls() {
        let mut board = OrderBoard::new();
        poll(&mut board, &["1", "2"]);

        assert!(board.toggle_expanded("1"));
        poll(&mut board, &["1", "2"]);
        assert!(board.is_expanded("1"));
        assert!(!board.is_expanded("2"));

        assert!(!board.toggle_expanded("1"));
        assert!(!board.is_expanded("1"));
    }

    #[test]
    fn test_expand_state_dropped_with_order() {
        let mut board = OrderBoard::new();
        poll(&mut board, &["1", "2"]);
        board.toggle_expanded("1");
        board.toggle_expanded("2");

        poll(&mut board, &["2"]);
        assert!(!board.is_expanded("1"));
        assert!(board.is_expanded("2"));

        // Order comes back collapsed
        poll(&mut board, &["1", "2"]);
        assert!(!board.is_expanded("1"));
    }
}
