use serde::{Deserialize, Serialize};

/// Body of order create and update requests. Values are sent exactly as the
/// form holds them; the service does its own coercion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub amount: String,
    pub status: String,
    pub address: String,
    pub customer_id: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPayload {
    pub order_id: String,
    pub product_id: String,
    pub price: String,
    pub quantity: String,
}

/// A single `field=value` query filter for collection lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    pub field: &'static str,
    pub value: String,
}

impl SearchFilter {
    /// Picks the first candidate with a non-empty value. Candidates must be
    /// given in priority order; every later candidate is ignored.
    pub fn first_non_empty(candidates: &[(&'static str, &str)]) -> Option<Self> {
        candidates
            .iter()
            .find(|(_, value)| !value.is_empty())
            .map(|(field, value)| Self {
                field: *field,
                value: (*value).to_string(),
            })
    }

    pub fn query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair(self.field, &self.value)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: u16,
    pub message: String,
}
