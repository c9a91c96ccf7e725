//! demo-api entry point.

#[tokio::main]
async fn main() -> common::Result<()> {
    common::service::run(demo_api::SERVICE_INFO, demo_api::create_app).await
}
