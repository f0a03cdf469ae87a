//! Bot Channel: relays persisted orders to staff chats with inline
//! status-update controls. The sink only sends; button callbacks are
//! handled by the bot service, never read back here.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::fmt::{Display, Formatter};
use tracing::warn;

/// One relayed order line, already repriced server-side.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationItem {
    pub name: String,
    pub quantity: u32,
    pub line_total_tnd: f64,
    pub options: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderNotification {
    pub order_id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_location: String,
    pub items: Vec<NotificationItem>,
    pub total_tnd: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRef {
    pub chat_id: String,
    pub message_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotError(pub String);

impl Display for BotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for BotError {}

#[async_trait]
pub trait BotChannel: Send + Sync {
    /// Delivers the order to every registered chat; returns the message
    /// references for chats that accepted it.
    async fn notify(&self, order: &OrderNotification) -> Result<Vec<MessageRef>, BotError>;
}

/// HTML message body for the staff chat.
#[must_use]
pub fn format_order_message(order: &OrderNotification) -> String {
    let items_text = order
        .items
        .iter()
        .map(|item| {
            let options_text = item
                .options
                .as_deref()
                .map(|o| format!("\n   {o}"))
                .unwrap_or_default();
            format!(
                "  \u{2022} {} x{} - {:.2} TND{}",
                item.name, item.quantity, item.line_total_tnd, options_text
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "\u{1f6d2} <b>New Order #{}</b>\n\n<b>Customer:</b> {}\n<b>Phone:</b> {}\n<b>Location:</b> {}\n\n<b>Items:</b>\n{}\n\n<b>Total:</b> {:.2} TND",
        order.order_id,
        order.customer_name,
        order.customer_phone,
        order.customer_location,
        items_text,
        order.total_tnd
    )
}

/// Inline keyboard with the status-update callbacks and contact shortcuts.
#[must_use]
pub fn inline_keyboard(order: &OrderNotification) -> Value {
    let digits: String = order
        .customer_phone
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    json!({
        "inline_keyboard": [
            [
                { "text": "\u{2705} Mark as Shipped", "callback_data": format!("ship_{}", order.order_id) },
                { "text": "\u{1f4de} Call Customer", "url": format!("tel:{}", order.customer_phone) },
            ],
            [
                { "text": "\u{1f468}\u{200d}\u{1f373} Preparing", "callback_data": format!("preparing_{}", order.order_id) },
                { "text": "\u{1f4e6} Ready", "callback_data": format!("ready_{}", order.order_id) },
            ],
            [
                { "text": "\u{1f4f1} WhatsApp", "url": format!("https://wa.me/{digits}") },
                { "text": "\u{1f4cd} View Location", "url": format!(
                    "https://www.google.com/maps/search/?api=1&query={}",
                    urlencoding::encode(&order.customer_location)
                ) },
            ],
        ]
    })
}

/// Telegram Bot API sender. One message per registered chat; per-chat
/// delivery failures are logged and skipped so one dead chat never blocks
/// the rest.
pub struct TelegramChannel {
    api_base: String,
    chat_ids: Vec<String>,
    client: reqwest::Client,
}

impl TelegramChannel {
    #[must_use]
    pub fn new(token: &str, chat_ids: Vec<String>) -> Self {
        Self {
            api_base: format!("https://api.telegram.org/bot{token}"),
            chat_ids,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl BotChannel for TelegramChannel {
    async fn notify(&self, order: &OrderNotification) -> Result<Vec<MessageRef>, BotError> {
        if self.chat_ids.is_empty() {
            warn!("no registered chat ids, order not relayed");
            return Ok(Vec::new());
        }

        let message = format_order_message(order);
        let reply_markup = inline_keyboard(order);
        let mut refs = Vec::new();

        for chat_id in &self.chat_ids {
            let body = json!({
                "chat_id": chat_id,
                "text": message,
                "parse_mode": "HTML",
                "reply_markup": reply_markup,
            });
            let sent = self
                .client
                .post(format!("{}/sendMessage", self.api_base))
                .json(&body)
                .send()
                .await;
            match sent {
                Ok(response) if response.status().is_success() => {
                    let message_id = response
                        .json::<Value>()
                        .await
                        .ok()
                        .and_then(|v| v["result"]["message_id"].as_i64());
                    if let Some(message_id) = message_id {
                        refs.push(MessageRef {
                            chat_id: chat_id.clone(),
                            message_id,
                        });
                    }
                }
                Ok(response) => {
                    warn!(chat_id, status = %response.status(), "bot message rejected");
                }
                Err(err) => {
                    warn!(chat_id, %err, "bot message send failed");
                }
            }
        }
        Ok(refs)
    }
}

/// Degraded channel used when no bot token is configured.
pub struct NoopChannel;

#[async_trait]
impl BotChannel for NoopChannel {
    async fn notify(&self, order: &OrderNotification) -> Result<Vec<MessageRef>, BotError> {
        warn!(order_id = %order.order_id, "bot channel not configured, order not relayed");
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::{format_order_message, inline_keyboard, NotificationItem, OrderNotification};

    fn order() -> OrderNotification {
        OrderNotification {
            order_id: "SA7A-123456".to_string(),
            customer_name: "Amine".to_string(),
            customer_phone: "+216 20 123 456".to_string(),
            customer_location: "La Marsa, Tunis".to_string(),
            items: vec![
                NotificationItem {
                    name: "menu.items.supercut.name".to_string(),
                    quantity: 2,
                    line_total_tnd: 20.0,
                    options: None,
                },
                NotificationItem {
                    name: "builder.customPlate.name".to_string(),
                    quantity: 1,
                    line_total_tnd: 9.0,
                    options: Some("riz x2, escalope-poulet x1".to_string()),
                },
            ],
            total_tnd: 29.0,
        }
    }

    #[test]
    fn message_carries_order_number_items_and_total() {
        let text = format_order_message(&order());
        assert!(text.contains("New Order #SA7A-123456"));
        assert!(text.contains("menu.items.supercut.name x2 - 20.00 TND"));
        assert!(text.contains("riz x2, escalope-poulet x1"));
        assert!(text.ends_with("<b>Total:</b> 29.00 TND"));
    }

    #[test]
    fn keyboard_callbacks_encode_the_order_id() {
        let keyboard = inline_keyboard(&order());
        let rows = keyboard["inline_keyboard"].as_array().expect("rows");
        assert_eq!(rows[0][0]["callback_data"], "ship_SA7A-123456");
        assert_eq!(rows[1][0]["callback_data"], "preparing_SA7A-123456");
        assert_eq!(rows[1][1]["callback_data"], "ready_SA7A-123456");
        assert_eq!(rows[2][0]["url"], "https://wa.me/21620123456");
        let maps_url = rows[2][1]["url"].as_str().expect("maps url");
        assert!(maps_url.contains("La%20Marsa%2C%20Tunis"));
    }
}
