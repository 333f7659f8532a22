//! Domain models and response bodies

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Body returned by the purchase endpoint, whatever the request carried
pub const PURCHASE_SUCCESS_MESSAGE: &str = "Plan purchased successfully";

/// A named subscription tier, stored as one row of `plans`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Plan {
    pub id: i64,
    pub name: String,
    pub price: i64,
}

impl Plan {
    pub fn new(id: i64, name: impl Into<String>, price: i64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// Single-field message body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn purchase_success() -> Self {
        Self {
            message: PURCHASE_SUCCESS_MESSAGE.to_string(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// `ok` or `unavailable`
    pub database: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plan_serializes_with_wire_names() {
        let value = serde_json::to_value(Plan::new(1, "Basic", 10)).unwrap();
        assert_eq!(value, json!({"id": 1, "name": "Basic", "price": 10}));
    }

    #[test]
    fn purchase_message_is_fixed() {
        let value = serde_json::to_value(MessageResponse::purchase_success()).unwrap();
        assert_eq!(value, json!({"message": "Plan purchased successfully"}));
    }
}
