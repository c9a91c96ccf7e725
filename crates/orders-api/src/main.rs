//! orders-api entry point.

#[tokio::main]
async fn main() -> common::Result<()> {
    common::service::run(orders_api::SERVICE_INFO, orders_api::create_app).await
}
