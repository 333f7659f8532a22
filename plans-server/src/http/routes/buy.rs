//! Purchase endpoint
//!
//! Nothing is read from the request and nothing is recorded.

use axum::{routing::any, Json, Router};

use crate::models::MessageResponse;

/// ANY /buy - always succeeds
async fn buy() -> Json<MessageResponse> {
    Json(MessageResponse::purchase_success())
}

/// Purchase routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/buy", any(buy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PURCHASE_SUCCESS_MESSAGE;

    #[tokio::test]
    async fn buy_returns_fixed_message() {
        let Json(body) = buy().await;
        assert_eq!(body.message, PURCHASE_SUCCESS_MESSAGE);
    }
}
