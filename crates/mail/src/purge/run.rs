//! End-to-end purge orchestration

use anyhow::Result;
use log::debug;

use super::batch::{BatchOptions, BatchSummary, ProcessingMode, process_batches};
use super::confirm::{AFFIRMATIVE, Confirmation};
use super::enumerate::enumerate_messages;
use super::validate::validate_credential;
use super::PurgeEvent;
use crate::gmail::{MailApi, is_permission_denied};
use crate::models::SenderFilter;
use crate::settings::PurgeSettings;

/// Caller choices that alter the run
#[derive(Debug, Default, Clone, Copy)]
pub struct RunOptions {
    /// Stop after reporting the count
    pub dry_run: bool,
    /// Skip the delete attempt and trash from the first batch
    pub trash_only: bool,
}

/// How a run ended without a fatal error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The search matched nothing; no prompt was shown
    NoMessages,
    DryRun { total: usize },
    /// The user did not answer "yes"; nothing was changed
    Cancelled { total: usize },
    Completed(BatchSummary),
}

/// Validate, enumerate, confirm, then process every matching message
///
/// Fatal errors (rejected token, failed or runaway search) are returned
/// before any mutation. Per-batch failures are counted in the summary.
pub fn run_purge<A, C, F>(
    api: &A,
    confirmation: &mut C,
    sender: &SenderFilter,
    settings: &PurgeSettings,
    options: &RunOptions,
    mut on_event: F,
) -> Result<RunOutcome>
where
    A: MailApi + ?Sized,
    C: Confirmation + ?Sized,
    F: FnMut(&PurgeEvent),
{
    let email = validate_credential(api)?;
    on_event(&PurgeEvent::Authenticated { email });

    let ids = enumerate_messages(api, sender, settings, &mut on_event)?;
    if ids.is_empty() {
        return Ok(RunOutcome::NoMessages);
    }

    if options.dry_run {
        debug!("Dry run: {} messages left untouched", ids.len());
        return Ok(RunOutcome::DryRun { total: ids.len() });
    }

    let batch_options = BatchOptions::from_settings(settings, options.trash_only);
    let prompt = confirmation_prompt(ids.len(), sender, batch_options.initial_mode);
    if !confirmation.confirm(&prompt)? {
        debug!("Confirmation declined");
        return Ok(RunOutcome::Cancelled { total: ids.len() });
    }

    let summary = process_batches(api, &ids, &batch_options, is_permission_denied, &mut on_event);
    Ok(RunOutcome::Completed(summary))
}

fn confirmation_prompt(total: usize, sender: &SenderFilter, mode: ProcessingMode) -> String {
    let action = match mode {
        ProcessingMode::DeleteFirst => "permanently delete",
        ProcessingMode::TrashOnly => "move to trash",
    };
    format!(
        "This will {} {} messages from {}. Type '{}' to continue:",
        action, total, sender, AFFIRMATIVE
    )
}
