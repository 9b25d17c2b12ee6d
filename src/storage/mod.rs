//! Key/value persistence behind the route history.
//!
//! Every backend stores opaque strings under string keys. Callers decide what
//! a failure means; the history store treats all of them as "nothing saved".

mod file;
mod memory;
mod redis_store;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use redis_store::RedisStore;

use crate::config::Config;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// `Ok(None)` when nothing has been stored under `key` yet.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    async fn health_check(&self) -> bool;

    fn backend_name(&self) -> &'static str;
}

/// Pick the history backend: Redis if configured and reachable, then a
/// file directory, then process memory.
pub async fn from_config(config: &Config) -> Arc<dyn KeyValueStore> {
    if let Some(ref redis_url) = config.redis_url {
        tracing::info!("Connecting to Redis store...");
        match RedisStore::new(redis_url).await {
            Ok(store) => return Arc::new(store),
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Falling back.", e);
            }
        }
    }

    if let Some(ref dir) = config.history_dir {
        tracing::info!("Storing route history under {}", dir);
        return Arc::new(FileStore::new(dir));
    }

    tracing::info!("No persistent store configured. Route history lives in memory.");
    Arc::new(MemoryStore::new())
}
