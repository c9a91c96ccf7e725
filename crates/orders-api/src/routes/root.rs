use axum::Json;
use common::WelcomeMessage;

/// GET / — reports that the service is up.
pub async fn get() -> Json<WelcomeMessage> {
    Json(WelcomeMessage::new("orders-api running"))
}
