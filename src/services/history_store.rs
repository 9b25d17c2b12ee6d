use crate::constants::{HISTORY_STORAGE_KEY, MAX_HISTORY_ENTRIES};
use crate::models::{Coordinates, GeneratedRoute, HistoryEntry, RestoredRoute, RouteType};
use crate::services::route_generator::route_metrics::total_distance_km;
use crate::storage::KeyValueStore;
use std::sync::Arc;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};
use tokio::sync::Mutex;

/// Bounded, newest-first log of generated routes kept under a single key.
///
/// History is a convenience: a failed or corrupt read looks like an empty
/// history, and a failed write is logged and dropped. No method returns an
/// error.
pub struct HistoryStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
    max_entries: usize,
    utc_offset: UtcOffset,
    // read-modify-write cycles must not interleave
    write_lock: Mutex<()>,
}

impl HistoryStore {
    pub fn new(store: Arc<dyn KeyValueStore>, utc_offset: UtcOffset) -> Self {
        HistoryStore {
            store,
            key: HISTORY_STORAGE_KEY.to_string(),
            max_entries: MAX_HISTORY_ENTRIES,
            utc_offset,
            write_lock: Mutex::new(()),
        }
    }

    pub fn backend(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Remember a generated route and return the new entry.
    ///
    /// The entry is returned even when the write did not persist; it will
    /// then simply be missing from [`Self::list`].
    pub async fn record(
        &self,
        points: Vec<Coordinates>,
        target_distance_km: f64,
        route_type: RouteType,
    ) -> HistoryEntry {
        let _guard = self.write_lock.lock().await;
        let mut history = self.load().await;

        let now = OffsetDateTime::now_utc();
        let now_ms = (now.unix_timestamp_nanos() / 1_000_000) as i64;
        let id = next_id(&history, now_ms);

        let start = points.first().copied().unwrap_or(Coordinates::from_raw(0.0, 0.0));
        let distance_km = total_distance_km(&points);
        let entry = HistoryEntry {
            id,
            created_at: format_created_at(now, self.utc_offset),
            points,
            distance_km: format!("{:.2}", distance_km),
            route_type_label: route_type.label().to_string(),
            start,
        };

        history.insert(0, entry.clone());
        history.truncate(self.max_entries);

        if self.persist(&history).await {
            tracing::debug!(
                id,
                target_distance_km,
                "Recorded {} route ({}km) in history, {} entries",
                route_type,
                entry.distance_km,
                history.len()
            );
        }

        entry
    }

    pub async fn record_route(&self, route: &GeneratedRoute) -> HistoryEntry {
        self.record(route.points.clone(), route.target_distance_km, route.route_type)
            .await
    }

    /// Stored entries, newest first.
    pub async fn list(&self) -> Vec<HistoryEntry> {
        self.load().await
    }

    /// Restore one entry with its metrics measured again.
    pub async fn get(&self, id: i64) -> Option<RestoredRoute> {
        self.load()
            .await
            .into_iter()
            .find(|e| e.id == id)
            .map(RestoredRoute::new)
    }

    /// Drop the entry with `id`. Unknown ids leave the history untouched.
    pub async fn remove(&self, id: i64) {
        let _guard = self.write_lock.lock().await;
        let mut history = self.load().await;

        let before = history.len();
        history.retain(|e| e.id != id);

        if history.len() == before {
            tracing::debug!(id, "History entry not found, nothing to remove");
            return;
        }

        if self.persist(&history).await {
            tracing::debug!(id, "Removed history entry");
        }
    }

    pub async fn clear(&self) {
        let _guard = self.write_lock.lock().await;
        if self.persist(&[]).await {
            tracing::debug!("Cleared route history");
        }
    }

    async fn load(&self) -> Vec<HistoryEntry> {
        match self.store.get(&self.key).await {
            Ok(Some(json)) => match serde_json::from_str::<Vec<HistoryEntry>>(&json) {
                Ok(history) => history,
                Err(e) => {
                    tracing::warn!("Ignoring unreadable route history: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(
                    backend = self.store.backend_name(),
                    "Failed to read route history: {}",
                    e
                );
                Vec::new()
            }
        }
    }

    /// `true` when the write went through.
    async fn persist(&self, history: &[HistoryEntry]) -> bool {
        let json = match serde_json::to_string(history) {
            Ok(j) => j,
            Err(e) => {
                tracing::warn!("Failed to serialize route history: {}", e);
                return false;
            }
        };

        match self.store.set(&self.key, &json).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    backend = self.store.backend_name(),
                    "Failed to save route history: {}",
                    e
                );
                false
            }
        }
    }
}

/// Millisecond timestamp, moved past every stored id so two records within
/// the same millisecond still differ. Stored ids are untrusted and may sit at
/// the edge of the `i64` range.
fn next_id(history: &[HistoryEntry], now_ms: i64) -> i64 {
    let mut id = history
        .iter()
        .filter_map(|e| e.id.checked_add(1))
        .fold(now_ms, i64::max);
    while history.iter().any(|e| e.id == id) {
        id = id.wrapping_add(1);
    }
    id
}

/// `2026/10/19 9:05:03`: year/month/day with unpadded month, day and hour.
pub(crate) fn format_created_at(at: OffsetDateTime, utc_offset: UtcOffset) -> String {
    let local = at.to_offset(utc_offset);
    local
        .format(format_description!(
            "[year]/[month padding:none]/[day padding:none] [hour padding:none]:[minute]:[second]"
        ))
        .unwrap_or_else(|_| local.to_string())
}
