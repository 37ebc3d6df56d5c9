//! In-memory caching using moka
//!
//! Quotes are pure functions of the form input and the pricing config. The
//! config is fixed for the life of the process, so the input alone is a
//! sufficient key.

use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::pricing::models::{PricingConfig, QuoteInput, ServiceTier};
use crate::pricing::{estimate, QuoteResult};

/// Application cache holding computed quotes
#[derive(Clone)]
pub struct AppCache {
    /// Quotes (form input -> result)
    pub quotes: Cache<QuoteInput, Arc<QuoteResult>>,
}

impl AppCache {
    /// Create a new cache instance with the given TTL
    pub fn new(ttl: Duration) -> Self {
        Self {
            // 10k entries; idle entries drop out after half the TTL
            quotes: Cache::builder()
                .max_capacity(10_000)
                .time_to_live(ttl)
                .time_to_idle(ttl / 2)
                .build(),
        }
    }

    /// Look up a quote, computing and storing it on a miss
    pub async fn quote(&self, input: &QuoteInput, config: &PricingConfig) -> Arc<QuoteResult> {
        if let Some(cached) = self.quotes.get(input).await {
            debug!("Cache HIT for quote: {}", input.tier.as_str());
            return cached;
        }

        debug!("Cache MISS for quote: {}", input.tier.as_str());
        let result = Arc::new(estimate(input, config));
        self.quotes.insert(input.clone(), Arc::clone(&result)).await;
        result
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            quotes_size: self.quotes.entry_count(),
        }
    }

    /// Invalidate all caches
    pub fn invalidate_all(&self) {
        self.quotes.invalidate_all();
        info!("All caches invalidated");
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(10 * 60))
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub quotes_size: u64,
}

/// Warm the cache with the page's default quote for every tier
pub async fn warm_cache(cache: &AppCache, config: &PricingConfig) {
    info!("Starting cache warm-up...");

    for tier in ServiceTier::ALL {
        let input = QuoteInput {
            tier,
            ..QuoteInput::default()
        };
        cache.quote(&input, config).await;
    }

    // moka applies inserts lazily; flush so the stats below are accurate
    cache.quotes.run_pending_tasks().await;
    info!("Cache warm-up complete. Stats: {:?}", cache.stats());
}
