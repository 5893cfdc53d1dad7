//! Root route handler.

use axum::Json;
use logit_core::log::WelcomeMessage;

/// Handler for GET /
pub async fn welcome() -> Json<WelcomeMessage> {
    Json(WelcomeMessage::greeting())
}
