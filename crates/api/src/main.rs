#[tokio::main]
async fn main() {
    catalog_observability::init();

    let addr = std::env::var("CATALOG_API_ADDR").unwrap_or_else(|_| {
        tracing::warn!("CATALOG_API_ADDR not set; using default 0.0.0.0:8080");
        "0.0.0.0:8080".to_string()
    });

    let app = catalog_api::app::build_app().await;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listen address");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
