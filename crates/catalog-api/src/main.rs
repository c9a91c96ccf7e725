//! catalog-api entry point.

#[tokio::main]
async fn main() -> common::Result<()> {
    common::service::run(catalog_api::SERVICE_INFO, catalog_api::create_app).await
}
