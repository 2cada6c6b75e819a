use serde::{Deserialize, Serialize};

use crate::shared::serde_utils::{number_or_string, string_or_number};

// ============================================================================
// Wire records
// ============================================================================

/// Order as returned by `getAllOrdersFromStore`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    #[serde(default, deserialize_with = "string_or_number")]
    pub order_num: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default, deserialize_with = "number_or_string")]
    pub total_price: f64,
    #[serde(rename = "customer_Location", default)]
    pub customer_location: String,
    #[serde(default)]
    pub customer_mail: String,
    /// `"<name>: <quantity>"` strings
    #[serde(default)]
    pub items: Vec<String>,
}

/// Envelope of the order listing endpoint. `orders` may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrdersResponse {
    #[serde(default)]
    pub orders: Option<Vec<OrderRecord>>,
}

impl OrdersResponse {
    /// Orders if the backend returned at least one
    pub fn non_empty(self) -> Option<Vec<OrderRecord>> {
        self.orders.filter(|orders| !orders.is_empty())
    }
}

// ============================================================================
// View model
// ============================================================================

/// Local lifecycle of an order on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Ready,
    Rejected,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Ready => "ready",
            OrderStatus::Rejected => "rejected",
        }
    }

    /// Operator actions are only offered while pending
    pub fn accepts_actions(&self) -> bool {
        match self {
            OrderStatus::Pending => true,
            OrderStatus::Ready | OrderStatus::Rejected => false,
        }
    }
}

/// One line item of an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub quantity: i64,
}

impl Product {
    /// Read `"Hummus: 2"`. The quantity takes the leading integer of the
    /// second field and falls back to 0 when there is none.
    pub fn parse(item: &str) -> Self {
        let mut fields = item.split(':').map(str::trim);
        let name = fields.next().unwrap_or_default().to_string();
        let quantity = fields.next().and_then(leading_int).unwrap_or(0);
        Self { name, quantity }
    }
}

/// Leading optionally signed decimal integer, e.g. `"3 pcs"` -> 3
fn leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Normalized order shown on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub id: String,
    pub client_name: String,
    pub total_price: f64,
    pub location: String,
    pub customer_mail: String,
    /// Not supplied by the backend
    pub street: String,
    pub status: OrderStatus,
    pub products: Vec<Product>,
}

impl From<OrderRecord> for OrderView {
    /// The backend carries no status, so every fetched order starts pending
    fn from(record: OrderRecord) -> Self {
        Self {
            id: record.order_num,
            client_name: record.customer_name,
            total_price: record.total_price,
            location: record.customer_location,
            customer_mail: record.customer_mail,
            street: String::new(),
            status: OrderStatus::Pending,
            products: record.items.iter().map(|item| Product::parse(item)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"{
        "orders": [
            {
                "order_num": 1001,
                "customer_name": "Dana",
                "total_price": "54.5",
                "customer_Location": "Haifa",
                "customer_mail": "dana@example.com",
                "items": ["Hummus: 2", "Pita :3", "Tahini"]
            }
        ]
    }"#;

    #[test]
    fn test_normalize_record() {
        let response: OrdersResponse = serde_json::from_str(RESPONSE).unwrap();
        let record = response.non_empty().unwrap().remove(0);
        let view = OrderView::from(record);

        assert_eq!(view.id, "1001");
        assert_eq!(view.client_name, "Dana");
        assert_eq!(view.total_price, 54.5);
        assert_eq!(view.location, "Haifa");
        assert_eq!(view.customer_mail, "dana@example.com");
        assert_eq!(view.street, "");
        assert_eq!(view.status, OrderStatus::Pending);
        assert_eq!(
            view.products,
            vec![
                Product { name: "Hummus".into(), quantity: 2 },
                Product { name: "Pita".into(), quantity: 3 },
                Product { name: "Tahini".into(), quantity: 0 },
            ]
        );
    }

    #[test]
    fn test_missing_or_empty_orders() {
        let missing: OrdersResponse = serde_json::from_str("{}").unwrap();
        assert!(missing.non_empty().is_none());
        let null: OrdersResponse = serde_json::from_str(r#"{"orders": null}"#).unwrap();
        assert!(null.non_empty().is_none());
        let empty: OrdersResponse = serde_json::from_str(r#"{"orders": []}"#).unwrap();
        assert!(empty.non_empty().is_none());
    }

    #[test]
    fn test_product_quantity_parsing() {
        assert_eq!(Product::parse("Falafel: 3 pcs").quantity, 3);
        assert_eq!(Product::parse("Falafel: x").quantity, 0);
        assert_eq!(Product::parse("Falafel: -1").quantity, -1);
        assert_eq!(Product::parse("").name, "");
    }

    #[test]
    fn test_status_wire_form() {
        assert_eq!(serde_json::to_string(&OrderStatus::Ready).unwrap(), "\"ready\"");
        assert!(OrderStatus::Pending.accepts_actions());
        assert!(!OrderStatus::Ready.accepts_actions());
    }
}
