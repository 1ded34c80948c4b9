use std::{env, net::SocketAddr};
use tesla_web::notify::TelegramNotifier;
use tesla_web::{load_data, resolve_data_path, router, AppState};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_path = resolve_data_path()?;
    if let Some(parent) = data_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let data = load_data(&data_path).await;
    let notifier = TelegramNotifier::from_env();
    if notifier.is_none() {
        info!("telegram notifier disabled (TELEGRAM_BOT_TOKEN/TELEGRAM_CHAT_ID not set)");
    }

    let state = AppState::new(data_path, data, notifier);
    let app = router(state);

    // The page resolves its local backend at 127.0.0.1:8000, so that is
    // the default here as well.
    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
