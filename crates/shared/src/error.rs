use serde::{Deserialize, Serialize};

/// Error body returned by the orders service for any non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
    /// Short error name such as `Not Found`, when the service sends one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
