use std::env;

pub const CONFIG_SCHEMA_VERSION: &str = "1";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateLimitConfig {
    pub capacity: f64,
    pub refill_per_sec: f64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        // 5 orders per burst, refilling one every ~2 minutes.
        Self {
            capacity: 5.0,
            refill_per_sec: 1.0 / 120.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind: String,
    pub db_path: String,
    pub rate_limit_per_ip: RateLimitConfig,
    pub rate_limit_per_phone: RateLimitConfig,
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_ids: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
            db_path: "sa7abox_orders.sqlite".to_string(),
            rate_limit_per_ip: RateLimitConfig::default(),
            rate_limit_per_phone: RateLimitConfig::default(),
            telegram_bot_token: None,
            telegram_chat_ids: Vec::new(),
        }
    }
}

fn env_string(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_f64(name: &str, default: f64) -> f64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(default)
}

fn env_list(name: &str) -> Vec<String> {
    env::var(name)
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl ApiConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind: env_string("SA7ABOX_BIND", &defaults.bind),
            db_path: env_string("SA7ABOX_DB_PATH", &defaults.db_path),
            rate_limit_per_ip: RateLimitConfig {
                capacity: env_f64("SA7ABOX_RATE_CAPACITY", defaults.rate_limit_per_ip.capacity),
                refill_per_sec: env_f64(
                    "SA7ABOX_RATE_REFILL_PER_SEC",
                    defaults.rate_limit_per_ip.refill_per_sec,
                ),
            },
            rate_limit_per_phone: RateLimitConfig {
                capacity: env_f64(
                    "SA7ABOX_PHONE_RATE_CAPACITY",
                    defaults.rate_limit_per_phone.capacity,
                ),
                refill_per_sec: env_f64(
                    "SA7ABOX_PHONE_RATE_REFILL_PER_SEC",
                    defaults.rate_limit_per_phone.refill_per_sec,
                ),
            },
            telegram_bot_token: env::var("SA7ABOX_TELEGRAM_TOKEN")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            telegram_chat_ids: env_list("SA7ABOX_TELEGRAM_CHAT_IDS"),
        }
    }
}
