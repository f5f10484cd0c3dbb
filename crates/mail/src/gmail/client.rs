//! Gmail API HTTP client
//!
//! Blocking HTTP over `ureq`. Non-2xx statuses are returned as data rather
//! than errors so the pipeline can inspect them.

use anyhow::{Context, Result};
use log::debug;
use ureq::{Agent, Body};
use ureq::http::Response;

use super::api::{BatchDeleteRequest, BatchModifyRequest};
use super::{ApiResponse, MailApi};
use crate::models::MessageId;
use crate::settings::PurgeSettings;

/// Gmail API client authenticated with a caller-supplied bearer token
pub struct GmailClient {
    access_token: String,
    base_url: String,
    /// Agent for profile and search calls
    read_agent: Agent,
    /// Agent for batch mutations, which get a longer deadline
    write_agent: Agent,
}

impl GmailClient {
    /// Create a new Gmail client
    ///
    /// # Arguments
    /// * `access_token` - OAuth2 bearer token obtained out of band
    /// * `settings` - base URL and timeouts
    pub fn new(access_token: impl Into<String>, settings: &PurgeSettings) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: settings.api_base_url.clone(),
            read_agent: build_agent(settings, settings.read_timeout()),
            write_agent: build_agent(settings, settings.write_timeout()),
        }
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

fn build_agent(settings: &PurgeSettings, total_timeout: std::time::Duration) -> Agent {
    let config = Agent::config_builder()
        .http_status_as_error(false)
        .timeout_connect(Some(settings.connect_timeout()))
        .timeout_global(Some(total_timeout))
        .build();
    Agent::new_with_config(config)
}

/// Split a response into its status and body text
fn into_api_response(mut response: Response<Body>) -> Result<ApiResponse> {
    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .context("Failed to read response body")?;
    debug!("HTTP {} ({} bytes)", status, body.len());
    Ok(ApiResponse { status, body })
}

/// Build the search URL for one page of results
fn list_messages_url(
    base_url: &str,
    query: &str,
    page_size: usize,
    page_token: Option<&str>,
) -> String {
    let mut url = format!(
        "{}/messages?q={}&maxResults={}",
        base_url,
        urlencoding::encode(query),
        page_size
    );

    if let Some(token) = page_token {
        url.push_str(&format!("&pageToken={}", urlencoding::encode(token)));
    }

    url
}

impl MailApi for GmailClient {
    fn get_profile(&self) -> Result<ApiResponse> {
        let url = format!("{}/profile", self.base_url);
        debug!("GET {}", url);

        let response = self
            .read_agent
            .get(&url)
            .header("Authorization", &self.bearer())
            .call()
            .context("Failed to send profile request")?;

        into_api_response(response)
    }

    fn list_messages(
        &self,
        query: &str,
        page_size: usize,
        page_token: Option<&str>,
    ) -> Result<ApiResponse> {
        let url = list_messages_url(&self.base_url, query, page_size, page_token);
        debug!("GET {}", url);

        let response = self
            .read_agent
            .get(&url)
            .header("Authorization", &self.bearer())
            .call()
            .context("Failed to send list messages request")?;

        into_api_response(response)
    }

    fn batch_delete(&self, ids: &[MessageId]) -> Result<ApiResponse> {
        let url = format!("{}/messages/batchDelete", self.base_url);
        debug!("POST {} ({} ids)", url, ids.len());

        let response = self
            .write_agent
            .post(&url)
            .header("Authorization", &self.bearer())
            .send_json(&BatchDeleteRequest { ids })
            .context("Failed to send batch delete request")?;

        into_api_response(response)
    }

    fn batch_modify(
        &self,
        ids: &[MessageId],
        add_label_ids: &[&str],
        remove_label_ids: &[&str],
    ) -> Result<ApiResponse> {
        let url = format!("{}/messages/batchModify", self.base_url);
        debug!(
            "POST {} ({} ids, add {:?}, remove {:?})",
            url,
            ids.len(),
            add_label_ids,
            remove_label_ids
        );

        let request = BatchModifyRequest {
            ids,
            add_label_ids,
            remove_label_ids,
        };

        let response = self
            .write_agent
            .post(&url)
            .header("Authorization", &self.bearer())
            .send_json(&request)
            .context("Failed to send batch modify request")?;

        into_api_response(response)
    }
}
