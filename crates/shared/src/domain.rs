use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(OrderId);
id_newtype!(ProductId);
id_newtype!(CustomerId);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Cancelled,
    Preparing,
    Delivering,
    Delivered,
}

impl OrderStatus {
    /// Maps the backend's integer status code. Unknown codes have no status.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Cancelled),
            1 => Some(Self::Preparing),
            2 => Some(Self::Delivering),
            3 => Some(Self::Delivered),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Cancelled => "Cancelled",
            Self::Preparing => "Preparing",
            Self::Delivering => "Delivering",
            Self::Delivered => "Delivered",
        }
    }
}

/// An order as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub amount: f64,
    pub status: i64,
    pub address: String,
    pub customer_id: CustomerId,
    pub date: NaiveDate,
}

impl Order {
    pub fn status_label(&self) -> &'static str {
        OrderStatus::from_code(self.status)
            .map(OrderStatus::label)
            .unwrap_or_default()
    }
}

/// A line item, keyed by its parent order and product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub price: f64,
    pub quantity: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_cover_every_known_code() {
        let labels: Vec<_> = (0..=3)
            .map(|code| OrderStatus::from_code(code).map(OrderStatus::label))
            .collect();
        assert_eq!(
            labels,
            vec![
                Some("Cancelled"),
                Some("Preparing"),
                Some("Delivering"),
                Some("Delivered"),
            ]
        );
        assert_eq!(OrderStatus::from_code(4), None);
        assert_eq!(OrderStatus::from_code(-1), None);
    }

    #[test]
    fn unmapped_status_renders_empty_label() {
        let order = Order {
            id: OrderId(1),
            amount: 3.5,
            status: 9,
            address: "somewhere".into(),
            customer_id: CustomerId(2),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("date"),
        };
        assert_eq!(order.status_label(), "");
    }

    #[test]
    fn order_decodes_backend_json() {
        let order: Order = serde_json::from_str(
            r#"{"id":42,"amount":10.0,"status":1,"address":"1 Main","customer_id":7,"date":"2024-01-01"}"#,
        )
        .expect("decode");
        assert_eq!(order.id, OrderId(42));
        assert_eq!(order.status_label(), "Preparing");
        assert_eq!(order.date.to_string(), "2024-01-01");
    }
}
