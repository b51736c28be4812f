use std::env;
use std::net::SocketAddr;

use academia::logging::init_tracing;
use academia::router::init_router;
use academia::state::init_app_state;
use academia_db::run_migrations;
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let state = init_app_state().await;

    if env::var("RUN_MIGRATIONS").is_ok_and(|v| v == "true" || v == "1") {
        run_migrations(&state.db).await?;
        info!("Migrations applied");
    }

    let addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "🚀 Server running");
    info!("📚 Swagger UI available at http://{}/swagger-ui", addr);

    // The login rate limiter keys on the client address.
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
