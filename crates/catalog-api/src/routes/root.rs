use axum::Json;
use common::WelcomeMessage;

/// GET / — reports that the catalog is up.
pub async fn get() -> Json<WelcomeMessage> {
    Json(WelcomeMessage::new("Catalog API is running"))
}
