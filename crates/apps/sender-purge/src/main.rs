//! sender-purge - remove every message from one sender
//!
//! This is the main entry point: argument parsing, logging setup, and
//! terminal I/O around the mail crate's purge pipeline.

use anyhow::Result;
use clap::Parser;
use log::debug;
use mail::{
    GmailClient, LineConfirmation, ProcessingMode, PurgeSettings, RunOptions, SenderFilter,
    run_purge,
};
use std::io;
use std::process::ExitCode;

mod cli;
mod console;

use cli::Cli;
use console::Console;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // Usage errors exit 1; --help and --version are not errors
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Initialize logging
    let level = default_log_level(std::env::var("DEBUG").ok().as_deref());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_millis()
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", fatal_message(&e));
            ExitCode::FAILURE
        }
    }
}

/// Text printed for an error that aborts the run, API response body included
fn fatal_message(error: &anyhow::Error) -> String {
    format!("❌ {:#}", error)
}

/// `DEBUG=1` turns on diagnostics; otherwise only warnings reach stderr
fn default_log_level(debug_var: Option<&str>) -> &'static str {
    match debug_var {
        Some("1") => "debug",
        _ => "warn",
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = match &cli.settings {
        Some(path) => PurgeSettings::from_file(path)?,
        None => PurgeSettings::load()?,
    };
    debug!("Settings: {:?}", settings);

    let sender = SenderFilter::new(&cli.sender_email)?;
    let options = RunOptions {
        dry_run: cli.dry_run,
        trash_only: cli.trash_only,
    };
    let initial_mode = if options.trash_only {
        ProcessingMode::TrashOnly
    } else {
        ProcessingMode::DeleteFirst
    };

    let client = GmailClient::new(cli.access_token, &settings);
    let mut gate = LineConfirmation::new(io::stdin().lock(), io::stdout());
    let mut console = Console::new(initial_mode);

    println!("📧 Removing messages from: {}", sender);
    let outcome = run_purge(&client, &mut gate, &sender, &settings, &options, |event| {
        for line in console.render(event) {
            println!("{}", line);
        }
    })?;

    for line in console.summary(&outcome, &sender) {
        println!("{}", line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mail::PurgeError;

    #[test]
    fn test_default_log_level() {
        assert_eq!(default_log_level(Some("1")), "debug");
        assert_eq!(default_log_level(Some("0")), "warn");
        assert_eq!(default_log_level(Some("true")), "warn");
        assert_eq!(default_log_level(None), "warn");
    }

    #[test]
    fn test_fatal_message_includes_raw_body() {
        let body = r#"{"error":{"code":400,"message":"Invalid query","errors":[{"reason":"invalidArgument"}],"status":"INVALID_ARGUMENT"}}"#;
        let error: anyhow::Error = PurgeError::SearchFailed {
            status: 400,
            message: "Invalid query".to_string(),
            body: body.to_string(),
        }
        .into();

        let text = fatal_message(&error);
        assert!(text.contains("Message search failed (HTTP 400): Invalid query"));
        assert!(text.contains(body));
    }
}
