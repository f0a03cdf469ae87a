#![forbid(unsafe_code)]
//! Order Sink service: accepts submitted carts, reprices them against the
//! server catalog, persists them, and relays them to staff chats.

pub mod bot;
pub mod config;
pub mod http;
pub mod orders;
pub mod rate_limiter;
pub mod recompute;

use axum::routing::{get, post};
use axum::Router;
use bot::BotChannel;
use config::ApiConfig;
use orders::OrderStore;
use rate_limiter::RateLimiter;
use sa7abox_model::Catalog;
use std::sync::Arc;

pub struct AppState {
    pub config: ApiConfig,
    pub catalog: Catalog,
    pub orders: OrderStore,
    pub bot: Box<dyn BotChannel>,
    pub ip_limiter: RateLimiter,
    pub phone_limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(config: ApiConfig, catalog: Catalog, orders: OrderStore, bot: Box<dyn BotChannel>) -> Self {
        Self {
            config,
            catalog,
            orders,
            bot,
            ip_limiter: RateLimiter::default(),
            phone_limiter: RateLimiter::default(),
        }
    }
}

#[must_use]
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/orders", post(http::submit_order))
        .route("/healthz", get(http::healthz))
        .with_state(state)
}
