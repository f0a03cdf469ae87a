use sa7abox_model::Catalog;
use sa7abox_server::bot::{BotChannel, NoopChannel, TelegramChannel};
use sa7abox_server::config::ApiConfig;
use sa7abox_server::orders::OrderStore;
use sa7abox_server::{build_router, AppState};
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ApiConfig::from_env();
    let orders = OrderStore::open(Path::new(&config.db_path))?;
    let bot: Box<dyn BotChannel> = match &config.telegram_bot_token {
        Some(token) => Box::new(TelegramChannel::new(token, config.telegram_chat_ids.clone())),
        None => Box::new(NoopChannel),
    };

    let bind = config.bind.clone();
    let state = Arc::new(AppState::new(config, Catalog::builtin(), orders, bot));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    info!(%bind, "order sink listening");
    axum::serve(listener, app).await?;
    Ok(())
}
