//! Human-readable progress output
//!
//! Turns pipeline events into stdout lines. Not machine-parseable, but the
//! shape (per-page counts, one block per batch, running totals, summary)
//! is stable.

use mail::{BatchOutcome, Operation, ProcessingMode, PurgeEvent, RunOutcome, SenderFilter};

/// Renders events, remembering the size of the batch in flight
#[derive(Debug)]
pub struct Console {
    initial_mode: ProcessingMode,
    batch_size: usize,
}

impl Console {
    pub fn new(initial_mode: ProcessingMode) -> Self {
        Self {
            initial_mode,
            batch_size: 0,
        }
    }

    /// Lines to print for one event
    pub fn render(&mut self, event: &PurgeEvent) -> Vec<String> {
        match event {
            PurgeEvent::Authenticated { email: Some(email) } => {
                vec![format!("✅ Authenticated as {}", email)]
            }
            PurgeEvent::Authenticated { email: None } => {
                vec!["✅ Access token accepted".to_string()]
            }
            PurgeEvent::SearchStarted { query } => vec![format!("🔍 Searching: {}", query)],
            PurgeEvent::PageFetched { page, count, total } => vec![format!(
                "   Page {}: found {} messages (running total: {})",
                page, count, total
            )],
            PurgeEvent::SearchFinished { total } => {
                vec![format!("📊 Found {} total messages", total)]
            }
            PurgeEvent::BatchStarted {
                batch,
                batches,
                size,
                mode,
            } => {
                self.batch_size = *size;
                let verb = match mode {
                    ProcessingMode::DeleteFirst => "Deleting",
                    ProcessingMode::TrashOnly => "Trashing",
                };
                vec![
                    String::new(),
                    format!("📦 Batch {}/{}: {} {} messages...", batch, batches, verb, size),
                ]
            }
            PurgeEvent::FellBackToTrash { .. } => vec![
                "   ⚠️  Token lacks delete permission; moving to trash instead".to_string(),
                "   ⚠️  All remaining batches will be trashed".to_string(),
            ],
            PurgeEvent::BatchFinished {
                outcome, counters, ..
            } => {
                let mut lines = self.outcome_lines(outcome);
                lines.push(format!(
                    "   Progress: {} processed, {} failed",
                    counters.processed, counters.failed
                ));
                lines
            }
        }
    }

    fn outcome_lines(&self, outcome: &BatchOutcome) -> Vec<String> {
        match outcome {
            BatchOutcome::Deleted => {
                vec![format!("   ✅ Permanently deleted {} messages", self.batch_size)]
            }
            BatchOutcome::Trashed => {
                vec![format!("   🗑️  Moved {} messages to trash", self.batch_size)]
            }
            BatchOutcome::Failed {
                operation,
                status,
                message,
                body,
            } => {
                let action = match operation {
                    Operation::Delete => "Delete",
                    Operation::Trash => "Trash",
                };
                let status = match status {
                    Some(code) => format!("HTTP {}", code),
                    None => "no response".to_string(),
                };
                let mut lines = vec![format!(
                    "   ❌ {} failed for {} messages ({}): {}",
                    action, self.batch_size, status, message
                )];
                if let Some(body) = body {
                    lines.push(format!("      Response body: {}", body));
                }
                lines
            }
        }
    }

    /// Closing lines for a run that ended without a fatal error
    pub fn summary(&self, outcome: &RunOutcome, sender: &SenderFilter) -> Vec<String> {
        match outcome {
            RunOutcome::NoMessages => vec![format!("📭 No messages found from {}", sender)],
            RunOutcome::DryRun { total } => vec![format!(
                "🔎 Dry run: {} messages from {} would be removed. Nothing was changed.",
                total, sender
            )],
            RunOutcome::Cancelled { .. } => {
                vec!["❎ Cancelled. No messages were changed.".to_string()]
            }
            RunOutcome::Completed(summary) => {
                let mut lines = vec![
                    String::new(),
                    "✨ Done!".to_string(),
                    format!("   Messages processed: {}", summary.counters.processed),
                    format!("   Messages failed:    {}", summary.counters.failed),
                ];
                if summary.fell_back(self.initial_mode)
                    || self.initial_mode == ProcessingMode::TrashOnly
                {
                    lines.push(
                        "   Messages were moved to trash; Gmail removes them permanently after 30 days."
                            .to_string(),
                    );
                }
                lines
            }
        }
    }
}
