use anyhow::Context;
use jroad_web::config::AppConfig;
use jroad_web::{create_router, logging, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init_tracing();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    tracing::info!(
        profit_margin = %config.policy.profit_margin(),
        price_increment = config.policy.price_increment(),
        "Pricing policy loaded"
    );

    let app = create_router(AppState::new(config.policy));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
