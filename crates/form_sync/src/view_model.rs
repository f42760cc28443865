//! Form view-model: the field values a user sees and edits, the flash area,
//! and the search result regions.

use serde::{Deserialize, Serialize};
use shared::{
    domain::{Item, Order},
    protocol::{ItemPayload, OrderPayload},
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderForm {
    pub id: String,
    pub amount: String,
    pub status: String,
    pub address: String,
    pub customer_id: String,
    pub date: String,
}

impl OrderForm {
    /// Replaces every field from one response record.
    pub fn fill(&mut self, order: &Order) {
        *self = Self {
            id: order.id.to_string(),
            amount: order.amount.to_string(),
            status: order.status.to_string(),
            address: order.address.clone(),
            customer_id: order.customer_id.to_string(),
            date: order.date.to_string(),
        };
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn create_payload(&self) -> OrderPayload {
        OrderPayload {
            id: None,
            amount: self.amount.clone(),
            status: self.status.clone(),
            address: self.address.clone(),
            customer_id: self.customer_id.clone(),
            date: self.date.clone(),
        }
    }

    pub fn update_payload(&self) -> OrderPayload {
        OrderPayload {
            id: Some(self.id.clone()),
            ..self.create_payload()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemForm {
    pub order_id: String,
    pub product_id: String,
    pub price: String,
    pub quantity: String,
}

impl ItemForm {
    pub fn fill(&mut self, item: &Item) {
        *self = Self {
            order_id: item.order_id.to_string(),
            product_id: item.product_id.to_string(),
            price: item.price.to_string(),
            quantity: item.quantity.to_string(),
        };
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn payload(&self) -> ItemPayload {
        ItemPayload {
            order_id: self.order_id.clone(),
            product_id: self.product_id.clone(),
            price: self.price.clone(),
            quantity: self.quantity.clone(),
        }
    }
}

/// Rendered search results: one header row and one text row per record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

const ORDER_HEADERS: [&str; 6] = ["ID", "Amount", "Status", "Address", "Customer ID", "Date"];
const ITEM_HEADERS: [&str; 4] = ["Order ID", "Product ID", "Price", "Quantity"];

impl ResultsTable {
    pub fn for_orders(orders: &[Order]) -> Self {
        Self {
            headers: ORDER_HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: orders
                .iter()
                .map(|order| {
                    vec![
                        order.id.to_string(),
                        order.amount.to_string(),
                        order.status_label().to_string(),
                        order.address.clone(),
                        order.customer_id.to_string(),
                        order.date.to_string(),
                    ]
                })
                .collect(),
        }
    }

    pub fn for_items(items: &[Item]) -> Self {
        Self {
            headers: ITEM_HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: items
                .iter()
                .map(|item| {
                    vec![
                        item.order_id.to_string(),
                        item.product_id.to_string(),
                        item.price.to_string(),
                        item.quantity.to_string(),
                    ]
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renders the striped HTML table the web front end shows, with rows
    /// tagged `row_{index}`. Cell text is HTML-escaped.
    pub fn to_html(&self) -> String {
        let mut html = String::from(r#"<table class="table table-striped" cellpadding="10">"#);
        html.push_str("<thead><tr>");
        for header in &self.headers {
            html.push_str(r#"<th class="col-md-2">"#);
            html.push_str(&escape_html(header));
            html.push_str("</th>");
        }
        html.push_str("</tr></thead><tbody>");
        for (index, row) in self.rows.iter().enumerate() {
            html.push_str(&format!(r#"<tr id="row_{index}">"#));
            for cell in row {
                html.push_str("<td>");
                html.push_str(&escape_html(cell));
                html.push_str("</td>");
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody></table>");
        html
    }
}

/// Escapes text for use inside HTML element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Everything the page shows: both forms, the flash area and the two result
/// regions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    pub order: OrderForm,
    pub item: ItemForm,
    pub flash: String,
    pub order_results: Option<ResultsTable>,
    pub item_results: Option<ResultsTable>,
}

#[cfg(test)]
#[path = "tests/view_model_tests.rs"]
mod tests;
