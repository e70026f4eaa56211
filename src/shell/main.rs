use std::net::SocketAddr;

use anyhow::Context;

use assignments::shell::config::AppConfig;
use assignments::shell::graphql::GRAPHQL_PATH;
use assignments::shell::http::router;
use assignments::shell::state::AppState;
use assignments::shell::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    init_tracing(&config.env);

    let state = AppState::from_config(&config).await?;
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_server_port));
    tracing::info!("REST endpoint: http://{}/api/v1/assignment", addr);
    tracing::info!("GraphQL endpoint: http://{}{}", addr, GRAPHQL_PATH);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    axum::serve(listener, app).await?;
    Ok(())
}
