//! One-shot background catalog fetch.
//!
//! Runs a single [`CatalogSource::fetch`] on a tokio task and hands the
//! outcome to the UI thread over a [`oneshot`] channel.  The UI drains it
//! with [`FetchHandle::try_take`] once per tick, so the event loop never
//! blocks on the network.
//!
//! ## For contributors
//!
//! There is no retry and no polling: one mount, one request.
//! [`FetchHandle`] is the abort handle for that request.  Dropping it (which
//! happens when the owning [`crate::app::App`] is torn down) aborts the task,
//! so a response that arrives later has nowhere to go.

use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::source::{CatalogSource, FetchError, Product};

/// What a finished fetch produced.
pub type FetchOutcome = Result<Vec<Product>, FetchError>;

/// Owner of an in-flight fetch.
pub struct FetchHandle {
    rx: oneshot::Receiver<FetchOutcome>,
    task: JoinHandle<()>,
    done: bool,
}

impl FetchHandle {
    /// Take the outcome if it has arrived.
    ///
    /// Returns `Some` at most once over the handle's lifetime.  A task that
    /// died without sending yields [`FetchError::Interrupted`].
    pub fn try_take(&mut self) -> Option<FetchOutcome> {
        if self.done {
            return None;
        }
        match self.rx.try_recv() {
            Ok(outcome) => {
                self.done = true;
                Some(outcome)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => {
                // The task ended without sending: it panicked.
                error!("fetch task ended without delivering a result");
                self.done = true;
                Some(Err(FetchError::Interrupted))
            }
        }
    }
}

impl Drop for FetchHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Start fetching `source` in the background.
///
/// Must be called from within a tokio runtime.
pub fn spawn<S: CatalogSource>(source: S) -> FetchHandle {
    let (tx, rx) = oneshot::channel();

    let task = tokio::spawn(async move {
        let outcome = source.fetch().await;
        match &outcome {
            Ok(products) => info!(source = source.name(), count = products.len(), "catalog fetched"),
            Err(e) => error!(source = source.name(), kind = e.kind(), error = %e, "catalog fetch failed"),
        }
        // If the receiver is gone the component was torn down; drop the
        // outcome silently.
        let _ = tx.send(outcome);
    });

    FetchHandle {
        rx,
        task,
        done: false,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
