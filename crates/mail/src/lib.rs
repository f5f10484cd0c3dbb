//! Mail crate - bulk removal of one sender's messages
//!
//! This crate provides the platform-independent purge logic:
//! - Gmail API client over blocking HTTP, behind the [`MailApi`] trait
//! - Domain models (MessageId, SenderFilter)
//! - The purge pipeline: credential check, paginated search,
//!   confirmation gate, and batch deletion with trash fallback
//! - Tunable settings loaded from the config directory
//!
//! This crate does no terminal output of its own; progress is reported
//! through [`PurgeEvent`] callbacks.

pub mod error;
pub mod gmail;
pub mod models;
pub mod purge;
pub mod settings;

pub use error::PurgeError;
pub use gmail::{ApiResponse, GmailClient, MailApi, is_permission_denied};
pub use models::{MessageId, SenderFilter};
pub use purge::{
    BatchOptions, BatchOutcome, BatchSummary, Confirmation, LineConfirmation, Operation,
    ProcessingMode, PurgeEvent, RunCounters, RunOptions, RunOutcome, enumerate_messages,
    process_batches, run_purge, validate_credential,
};
pub use settings::PurgeSettings;
