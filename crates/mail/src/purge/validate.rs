//! Credential validation

use anyhow::{Context, Result};
use log::debug;

use crate::error::PurgeError;
use crate::gmail::MailApi;
use crate::gmail::api::ProfileResponse;

/// Confirm the access token is accepted before doing any work
///
/// Returns the mailbox address from the profile when the body can be read.
/// A non-2xx status is fatal and never retried.
pub fn validate_credential<A: MailApi + ?Sized>(api: &A) -> Result<Option<String>> {
    let response = api
        .get_profile()
        .context("Failed to validate access token")?;
    debug!("Profile check returned HTTP {}", response.status);

    if !response.is_success() {
        debug!("Profile error body: {}", response.body);
        return Err(PurgeError::InvalidCredential {
            status: response.status,
            message: response.error_message(),
            body: response.raw_body(),
        }
        .into());
    }

    match serde_json::from_str::<ProfileResponse>(&response.body) {
        Ok(profile) => {
            debug!(
                "Authenticated as {} ({} messages in mailbox)",
                profile.email_address,
                profile.messages_total.unwrap_or_default()
            );
            Ok(Some(profile.email_address))
        }
        Err(e) => {
            debug!("Token accepted but profile could not be parsed: {}", e);
            Ok(None)
        }
    }
}
