//! Batch processing with delete-to-trash fallback
//!
//! Batches are sent strictly in order with a fixed pause between them.
//! Each batch is first offered to `batchDelete`; an authoritative
//! permission denial demotes the run to trash mode, which then applies to
//! that same batch and every later one.

use log::{debug, info};
use std::time::Duration;

use super::PurgeEvent;
use crate::gmail::{ApiResponse, MailApi, labels};
use crate::models::MessageId;
use crate::settings::PurgeSettings;

/// How batches are being removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingMode {
    /// Attempt permanent deletion first
    DeleteFirst,
    /// Only move to trash; terminal
    TrashOnly,
}

/// Mode after a `batchDelete` call returned `response`
///
/// Only a failed delete judged a permission denial by the predicate moves
/// `DeleteFirst` to `TrashOnly`. `TrashOnly` never reverts.
pub fn next_mode<P>(
    mode: ProcessingMode,
    response: &ApiResponse,
    is_permission_denied: P,
) -> ProcessingMode
where
    P: Fn(&ApiResponse) -> bool,
{
    match mode {
        ProcessingMode::DeleteFirst
            if !response.is_success() && is_permission_denied(response) =>
        {
            ProcessingMode::TrashOnly
        }
        other => other,
    }
}

/// The API operation a batch went through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Delete,
    Trash,
}

/// Result of one batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    Deleted,
    Trashed,
    Failed {
        operation: Operation,
        /// `None` when no response was received
        status: Option<u16>,
        message: String,
        /// Raw response body, when a response was received
        body: Option<String>,
    },
}

impl BatchOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, BatchOutcome::Failed { .. })
    }
}

/// Running totals of messages handled
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunCounters {
    /// Deleted or trashed
    pub processed: usize,
    pub failed: usize,
}

impl RunCounters {
    fn record(&mut self, outcome: &BatchOutcome, size: usize) {
        if outcome.is_success() {
            self.processed += size;
        } else {
            self.failed += size;
        }
    }
}

/// Batch processor parameters
#[derive(Debug, Clone, Copy)]
pub struct BatchOptions {
    pub batch_size: usize,
    /// Pause between consecutive batches
    pub delay: Duration,
    pub initial_mode: ProcessingMode,
}

impl BatchOptions {
    pub fn from_settings(settings: &PurgeSettings, trash_only: bool) -> Self {
        Self {
            batch_size: settings.batch_size,
            delay: settings.batch_delay(),
            initial_mode: if trash_only {
                ProcessingMode::TrashOnly
            } else {
                ProcessingMode::DeleteFirst
            },
        }
    }
}

/// Statistics from a completed batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub batches: usize,
    pub counters: RunCounters,
    pub final_mode: ProcessingMode,
}

impl BatchSummary {
    /// Whether the run had to switch from deletion to trash
    pub fn fell_back(&self, initial_mode: ProcessingMode) -> bool {
        initial_mode == ProcessingMode::DeleteFirst && self.final_mode == ProcessingMode::TrashOnly
    }
}

/// Remove `ids` in batches, never aborting on a per-batch failure
///
/// Every id is counted exactly once, in either `processed` or `failed`.
pub fn process_batches<A, P, F>(
    api: &A,
    ids: &[MessageId],
    options: &BatchOptions,
    is_permission_denied: P,
    mut on_event: F,
) -> BatchSummary
where
    A: MailApi + ?Sized,
    P: Fn(&ApiResponse) -> bool,
    F: FnMut(&PurgeEvent),
{
    let batch_size = options.batch_size.max(1);
    let batches = ids.len().div_ceil(batch_size);
    let mut mode = options.initial_mode;
    let mut counters = RunCounters::default();

    for (index, batch) in ids.chunks(batch_size).enumerate() {
        if index > 0 && !options.delay.is_zero() {
            std::thread::sleep(options.delay);
        }

        let number = index + 1;
        debug!("Batch {}/{}: {} ids, mode {:?}", number, batches, batch.len(), mode);
        on_event(&PurgeEvent::BatchStarted {
            batch: number,
            batches,
            size: batch.len(),
            mode,
        });

        let outcome = process_batch(api, batch, &mut mode, &is_permission_denied, || {
            on_event(&PurgeEvent::FellBackToTrash { batch: number })
        });

        if let BatchOutcome::Failed {
            operation,
            status,
            message,
            ..
        } = &outcome
        {
            debug!(
                "Batch {} {:?} failed (status {:?}): {}",
                number, operation, status, message
            );
        }

        counters.record(&outcome, batch.len());
        on_event(&PurgeEvent::BatchFinished {
            batch: number,
            outcome,
            counters,
        });
    }

    BatchSummary {
        total: ids.len(),
        batches,
        counters,
        final_mode: mode,
    }
}

/// Send one batch under the current mode, updating it on a denial
fn process_batch<A, P, G>(
    api: &A,
    batch: &[MessageId],
    mode: &mut ProcessingMode,
    is_permission_denied: &P,
    mut on_fallback: G,
) -> BatchOutcome
where
    A: MailApi + ?Sized,
    P: Fn(&ApiResponse) -> bool,
    G: FnMut(),
{
    if *mode == ProcessingMode::DeleteFirst {
        let response = match api.batch_delete(batch) {
            Ok(response) => response,
            Err(e) => {
                return BatchOutcome::Failed {
                    operation: Operation::Delete,
                    status: None,
                    message: format!("{:#}", e),
                    body: None,
                };
            }
        };

        if response.is_success() {
            return BatchOutcome::Deleted;
        }

        let next = next_mode(*mode, &response, is_permission_denied);
        if next == *mode {
            return BatchOutcome::Failed {
                operation: Operation::Delete,
                status: Some(response.status),
                message: response.error_message(),
                body: Some(response.raw_body()),
            };
        }

        info!("Delete permission denied; switching to trash for the rest of the run");
        *mode = next;
        on_fallback();
    }

    trash_batch(api, batch)
}

fn trash_batch<A: MailApi + ?Sized>(api: &A, batch: &[MessageId]) -> BatchOutcome {
    match api.batch_modify(batch, &[labels::TRASH], &[labels::INBOX]) {
        Ok(response) if response.is_success() => BatchOutcome::Trashed,
        Ok(response) => BatchOutcome::Failed {
            operation: Operation::Trash,
            status: Some(response.status),
            message: response.error_message(),
            body: Some(response.raw_body()),
        },
        Err(e) => BatchOutcome::Failed {
            operation: Operation::Trash,
            status: None,
            message: format!("{:#}", e),
            body: None,
        },
    }
}
