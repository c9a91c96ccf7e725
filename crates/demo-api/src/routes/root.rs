//! Welcome endpoint.

use axum::Json;
use common::WelcomeMessage;

/// GET / — returns a fixed welcome message.
pub async fn get() -> Json<WelcomeMessage> {
    Json(WelcomeMessage::new("demo-api ok"))
}
