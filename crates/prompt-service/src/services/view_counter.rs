//! Bounded background queue for prompt view counts
//!
//! Reads enqueue an increment without waiting; one worker task applies them
//! through the prompt repository. A full queue drops the increment instead of
//! slowing the read down.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use prompt_core::PromptRepository;
use serde::Serialize;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Default queue capacity
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

/// Commands consumed by the worker
#[derive(Debug)]
enum ViewCommand {
    Increment(i64),
    Shutdown,
}

#[derive(Debug, Default)]
struct Counters {
    applied: AtomicU64,
    failed: AtomicU64,
    dropped: AtomicU64,
}

/// Point-in-time view of the counter's work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewCounterStats {
    pub applied: u64,
    pub failed: u64,
    pub dropped: u64,
    pub queued: usize,
    pub capacity: usize,
}

/// Asynchronous view counter backed by a bounded mpsc queue
pub struct ViewCounter {
    tx: mpsc::Sender<ViewCommand>,
    counters: Arc<Counters>,
    capacity: usize,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl ViewCounter {
    /// Spawn the worker on the current tokio runtime
    pub fn spawn(repo: Arc<dyn PromptRepository>, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (tx, rx) = mpsc::channel(capacity);
        let counters = Arc::new(Counters::default());

        let handle = tokio::spawn(Self::worker_loop(repo, rx, Arc::clone(&counters)));
        debug!(capacity, "View counter started");

        Self {
            tx,
            counters,
            capacity,
            worker: Mutex::new(Some(handle)),
        }
    }

    /// Enqueue one increment for `prompt_id`. Never waits.
    ///
    /// Returns `false` when the increment was dropped.
    pub fn record(&self, prompt_id: i64) -> bool {
        match self.tx.try_send(ViewCommand::Increment(prompt_id)) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                self.counters.dropped.fetch_add(1, Ordering::Relaxed);
                warn!(prompt_id, "View counter queue full, dropping increment");
                false
            }
            Err(TrySendError::Closed(_)) => {
                self.counters.dropped.fetch_add(1, Ordering::Relaxed);
                debug!(prompt_id, "View counter stopped, dropping increment");
                false
            }
        }
    }

    pub fn stats(&self) -> ViewCounterStats {
        ViewCounterStats {
            applied: self.counters.applied.load(Ordering::Relaxed),
            failed: self.counters.failed.load(Ordering::Relaxed),
            dropped: self.counters.dropped.load(Ordering::Relaxed),
            queued: self.capacity.saturating_sub(self.tx.capacity()),
            capacity: self.capacity,
        }
    }

    /// Whether the worker is still consuming the queue
    pub fn is_running(&self) -> bool {
        self.worker
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Stop the worker after it has applied everything already queued.
    ///
    /// Calling this more than once is a no-op.
    pub async fn shutdown(&self) {
        let handle = self
            .worker
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        let Some(handle) = handle else {
            return;
        };

        // Queued after every pending increment, so they are applied first
        if self.tx.send(ViewCommand::Shutdown).await.is_err() {
            debug!("View counter worker already gone");
        }

        if let Err(e) = handle.await {
            warn!(error = %e, "View counter worker ended abnormally");
        }

        let stats = self.stats();
        info!(
            applied = stats.applied,
            failed = stats.failed,
            dropped = stats.dropped,
            "View counter stopped"
        );
    }

    async fn worker_loop(
        repo: Arc<dyn PromptRepository>,
        mut rx: mpsc::Receiver<ViewCommand>,
        counters: Arc<Counters>,
    ) {
        while let Some(command) = rx.recv().await {
            match command {
                ViewCommand::Increment(id) => Self::apply(repo.as_ref(), &counters, id).await,
                ViewCommand::Shutdown => break,
            }
        }

        // Anything that raced in behind the shutdown command
        rx.close();
        while let Ok(command) = rx.try_recv() {
            if let ViewCommand::Increment(id) = command {
                Self::apply(repo.as_ref(), &counters, id).await;
            }
        }
    }

    async fn apply(repo: &dyn PromptRepository, counters: &Counters, prompt_id: i64) {
        match repo.increment_view_count(prompt_id).await {
            Ok(()) => {
                counters.applied.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                counters.failed.fetch_add(1, Ordering::Relaxed);
                warn!(prompt_id, error = %e, "Failed to increment view count");
            }
        }
    }
}

impl std::fmt::Debug for ViewCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewCounter")
            .field("capacity", &self.capacity)
            .field("stats", &self.stats())
            .finish()
    }
}
