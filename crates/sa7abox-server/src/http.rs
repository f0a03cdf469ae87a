//! Order Sink HTTP surface: `POST /api/orders` plus a health probe.

use crate::bot::{NotificationItem, OrderNotification};
use crate::recompute::reprice;
use crate::AppState;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

/// Submitted identity of a cart line's menu item. Only the id and display
/// key are read; prices and nutrition come from the server catalog.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedMenuItem {
    pub id: String,
    pub name_key: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedLine {
    pub menu_item: SubmittedMenuItem,
    pub quantity: u32,
    #[serde(default)]
    pub selected_options: sa7abox_model::SelectedOptions,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default)]
    pub customer_location: String,
    #[serde(default)]
    pub items: Vec<SubmittedLine>,
    /// Client's displayed total; informational only.
    #[serde(default)]
    pub total: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub success: bool,
    pub order_id: String,
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn order_number() -> String {
    let n: u32 = rand::thread_rng().gen_range(100_000..1_000_000);
    format!("SA7A-{n}")
}

pub async fn submit_order(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<OrderRequest>,
) -> Response {
    let ip = client_ip(&headers);
    if !state
        .ip_limiter
        .allow(&ip, &state.config.rate_limit_per_ip)
        .await
    {
        warn!(ip, "order rate limit hit");
        return rate_limited();
    }

    let name = request.customer_name.trim();
    let phone = request.customer_phone.trim();
    let location = request.customer_location.trim();
    if name.is_empty() || phone.is_empty() || location.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Missing required fields");
    }
    if request.items.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Cart is empty");
    }

    if !state
        .phone_limiter
        .allow(phone, &state.config.rate_limit_per_phone)
        .await
    {
        warn!(phone, "per-phone order rate limit hit");
        return rate_limited();
    }

    let repriced = match reprice(&request.items, &state.catalog) {
        Ok(repriced) => repriced,
        Err(err) => {
            warn!(%err, "order rejected during repricing");
            return error_response(StatusCode::BAD_REQUEST, "Invalid cart");
        }
    };
    if let Some(declared) = request.total {
        if (declared - repriced.total_tnd).abs() > 0.005 {
            warn!(
                declared,
                computed = repriced.total_tnd,
                "client total disagrees with repriced total"
            );
        }
    }

    let order_number = order_number();
    let new_order = crate::orders::NewOrder {
        order_number: order_number.clone(),
        customer_name: name.to_string(),
        customer_phone: phone.to_string(),
        customer_location: location.to_string(),
        total_tnd: repriced.total_tnd,
        lines: repriced.lines,
    };
    let order_id = match state.orders.insert_order(&new_order) {
        Ok(id) => id,
        Err(err) => {
            warn!(%err, "order persistence failed");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to process order");
        }
    };
    info!(order_number, total = new_order.total_tnd, "order persisted");

    // Relay failures never fail the order; it is already persisted.
    let notification = notification_for(&new_order);
    match state.bot.notify(&notification).await {
        Ok(refs) => {
            for message in refs {
                if let Err(err) =
                    state
                        .orders
                        .record_bot_message(order_id, &message.chat_id, message.message_id)
                {
                    warn!(%err, "failed to record bot message reference");
                }
            }
        }
        Err(err) => warn!(%err, "bot relay failed"),
    }

    (
        StatusCode::OK,
        Json(OrderResponse {
            success: true,
            order_id: order_number,
        }),
    )
        .into_response()
}

fn rate_limited() -> Response {
    (
        StatusCode::TOO_MANY_REQUESTS,
        [("retry-after", "60")],
        Json(json!({ "error": "Too many orders, please try again later" })),
    )
        .into_response()
}

fn notification_for(order: &crate::orders::NewOrder) -> OrderNotification {
    OrderNotification {
        order_id: order.order_number.clone(),
        customer_name: order.customer_name.clone(),
        customer_phone: order.customer_phone.clone(),
        customer_location: order.customer_location.clone(),
        items: order
            .lines
            .iter()
            .map(|line| NotificationItem {
                name: line.name_key.clone(),
                quantity: line.quantity,
                line_total_tnd: line.line_total_tnd,
                options: line
                    .selected_options
                    .ingredient_summary
                    .clone()
                    .or_else(|| line.selected_options.builder_summary.clone()),
            })
            .collect(),
        total_tnd: order.total_tnd,
    }
}

pub async fn healthz() -> Response {
    (StatusCode::OK, Json(json!({ "status": "ok" }))).into_response()
}
