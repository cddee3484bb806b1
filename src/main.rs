use english_tutor::{api, config::RelayConfig};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // -----------------------------
    // Logging (verbose unless RUST_LOG says otherwise)
    // -----------------------------
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("english_tutor=debug,tower_http=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // -----------------------------
    // Config / shared state
    // -----------------------------
    let config = RelayConfig::from_env()?;
    if config.api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; every chat will get the fallback reply");
    }

    let state = api::AppState::new(config);
    let addr = state.config.bind_addr;
    info!(model = %state.config.model, api_base = %state.config.api_base, "relay configured");

    let app = api::router(state);

    println!("🌐 HTTP listening on http://{addr}");
    println!("💬 Chat API at http://{addr}/api/chat");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
