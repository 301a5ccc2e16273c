use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tracing::{debug, warn};

use taskify_core::{AggregateCounts, CountKey, metrics};

use crate::feed::TaskFeed;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub key: CountKey,
    pub label: &'static str,
    pub color: &'static str,
    pub count: u64,
}

pub fn menu_entries(counts: &AggregateCounts) -> Vec<MenuEntry> {
    CountKey::ALL_KEYS
        .into_iter()
        .map(|key| {
            let (label, color) = match key {
                CountKey::All => ("All", "teal"),
                CountKey::Started => ("Running", "olive"),
                CountKey::Failed => ("Failed", "red"),
                CountKey::FailedAcked => ("Acked", "orange"),
            };
            MenuEntry {
                key,
                label,
                color,
                count: counts.get(key),
            }
        })
        .collect()
}

/// Proof that the menu was activated. A poll consumes it, so one activation
/// can issue at most one request.
#[derive(Debug)]
pub struct Activation(u64);

impl Activation {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Keeps the navigation badge counts. Counts start at zero on each activation
/// and are replaced wholesale when that activation's poll resolves.
pub struct AggregateCountPoller<F> {
    feed: F,
    generation: AtomicU64,
    counts: watch::Sender<AggregateCounts>,
}

impl<F: TaskFeed> AggregateCountPoller<F> {
    pub fn new(feed: F) -> Self {
        let (counts, _rx) = watch::channel(AggregateCounts::zero());
        Self {
            feed,
            generation: AtomicU64::new(0),
            counts,
        }
    }

    pub fn activate(&self) -> Activation {
        let id = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.counts.send_replace(AggregateCounts::zero());
        Activation(id)
    }

    /// Any poll still in flight for the current activation becomes a no-op.
    pub fn deactivate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub async fn poll(&self, activation: Activation) -> AggregateCounts {
        let counts = match self.feed.fetch_state_counts().await {
            Ok(raw) => AggregateCounts::from_raw(&raw),
            Err(e) => {
                warn!(error = %e, "State counts unavailable, keeping zeros");
                metrics::record_count_poll_failure();
                return self.counts();
            }
        };

        let applied = self.counts.send_if_modified(|current| {
            if self.generation.load(Ordering::SeqCst) != activation.0 {
                return false;
            }
            *current = counts;
            true
        });
        if !applied {
            debug!(activation = activation.0, "Dropping counts for an inactive menu");
            metrics::record_stale_response("menu");
        }

        self.counts()
    }

    pub async fn activate_and_poll(&self) -> AggregateCounts {
        let activation = self.activate();
        self.poll(activation).await
    }

    pub fn counts(&self) -> AggregateCounts {
        *self.counts.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<AggregateCounts> {
        self.counts.subscribe()
    }

    pub fn menu(&self) -> Vec<MenuEntry> {
        menu_entries(&self.counts())
    }
}
