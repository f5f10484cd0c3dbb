//! The purge pipeline
//!
//! Runs strictly in order: credential validation, message enumeration,
//! confirmation, then batch processing. Progress is reported through a
//! caller-supplied callback so the library never writes to stdout itself.

mod batch;
mod confirm;
mod enumerate;
mod run;
mod validate;

#[cfg(test)]
mod testing;

pub use batch::{
    BatchOptions, BatchOutcome, BatchSummary, Operation, ProcessingMode, RunCounters, next_mode,
    process_batches,
};
pub use confirm::{AFFIRMATIVE, Confirmation, LineConfirmation, is_affirmative};
pub use enumerate::enumerate_messages;
pub use run::{RunOptions, RunOutcome, run_purge};
pub use validate::validate_credential;

/// Progress notifications emitted while a purge runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurgeEvent {
    /// The access token was accepted
    Authenticated { email: Option<String> },
    SearchStarted { query: String },
    /// One search page was received; `page` is 1-based
    PageFetched { page: usize, count: usize, total: usize },
    SearchFinished { total: usize },
    /// A batch is about to be sent; `batch` is 1-based
    BatchStarted {
        batch: usize,
        batches: usize,
        size: usize,
        mode: ProcessingMode,
    },
    /// A delete was denied for lack of scope; this and later batches are trashed
    FellBackToTrash { batch: usize },
    BatchFinished {
        batch: usize,
        outcome: BatchOutcome,
        counters: RunCounters,
    },
}
