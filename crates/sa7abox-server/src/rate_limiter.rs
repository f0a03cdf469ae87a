use crate::config::RateLimitConfig;
use std::collections::HashMap;
use std::time::Instant;
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
struct Bucket {
    tokens: f64,
    last_refill: Instant,
}

/// Per-key token bucket. The key space is whatever the caller passes in;
/// the sink runs one limiter per dimension (client IP, customer phone).
#[derive(Default)]
pub struct RateLimiter {
    buckets: Mutex<HashMap<String, Bucket>>,
}

/// Map size at which fully-refilled buckets are swept before inserting.
const SWEEP_AT: usize = 1024;

impl RateLimiter {
    pub async fn allow(&self, key: &str, cfg: &RateLimitConfig) -> bool {
        let now = Instant::now();
        let mut lock = self.buckets.lock().await;
        if lock.len() >= SWEEP_AT {
            // A bucket idle long enough to refill to capacity behaves
            // exactly like a fresh one, so dropping it changes nothing.
            let full_after = if cfg.refill_per_sec > 0.0 {
                cfg.capacity / cfg.refill_per_sec
            } else {
                f64::INFINITY
            };
            lock.retain(|_, b| now.duration_since(b.last_refill).as_secs_f64() < full_after);
        }
        let bucket = lock.entry(key.to_string()).or_insert_with(|| Bucket {
            tokens: cfg.capacity,
            last_refill: now,
        });
        let elapsed = now.duration_since(bucket.last_refill).as_secs_f64();
        bucket.last_refill = now;
        bucket.tokens = (bucket.tokens + (elapsed * cfg.refill_per_sec)).min(cfg.capacity);
        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            true
        } else {
            false
        }
    }

    #[cfg(test)]
    async fn bucket_count(&self) -> usize {
        self.buckets.lock().await.len()
    }
}
