//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "sender-purge",
    version,
    about = "Remove every message from one sender in a Gmail mailbox",
    long_about = "Finds all messages from SENDER_EMAIL, asks for confirmation, then deletes them \
                  in batches of up to 1000. If the access token only carries the gmail.modify \
                  scope, messages are moved to trash instead.\n\n\
                  Set DEBUG=1 for verbose diagnostics on stderr."
)]
pub struct Cli {
    /// Address whose messages are removed
    pub sender_email: String,

    /// OAuth2 access token for the Gmail API
    pub access_token: String,

    /// Settings file (defaults to ~/.config/sender-purge/settings.json when present)
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Count matching messages and exit without changing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Move messages to trash without attempting permanent deletion
    #[arg(long)]
    pub trash_only: bool,
}
