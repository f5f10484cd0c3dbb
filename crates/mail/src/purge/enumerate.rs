//! Paginated message search

use anyhow::{Context, Result};
use log::debug;

use super::PurgeEvent;
use crate::error::PurgeError;
use crate::gmail::MailApi;
use crate::gmail::api::ListMessagesResponse;
use crate::models::{MessageId, SenderFilter};
use crate::settings::PurgeSettings;

/// Identifiers sampled into the debug log per page
const DEBUG_SAMPLE: usize = 3;

/// Collect the ids of every message from `sender`
///
/// Pages are requested until the server stops returning a continuation
/// token. Ids are kept in server order, pages concatenated, without
/// deduplication. Any non-2xx page is fatal, as is a continuation token
/// after `settings.max_pages` pages.
pub fn enumerate_messages<A, F>(
    api: &A,
    sender: &SenderFilter,
    settings: &PurgeSettings,
    mut on_event: F,
) -> Result<Vec<MessageId>>
where
    A: MailApi + ?Sized,
    F: FnMut(&PurgeEvent),
{
    let query = sender.query();
    debug!("Search query: {}", query);
    on_event(&PurgeEvent::SearchStarted {
        query: query.clone(),
    });

    let mut ids: Vec<MessageId> = Vec::new();
    let mut page_token: Option<String> = None;
    let mut page = 0;

    loop {
        page += 1;

        let response = api
            .list_messages(&query, settings.page_size, page_token.as_deref())
            .with_context(|| format!("Failed to fetch search page {}", page))?;
        debug!("Search page {} returned HTTP {}", page, response.status);

        if !response.is_success() {
            debug!("Search error body: {}", response.body);
            return Err(PurgeError::SearchFailed {
                status: response.status,
                message: response.error_message(),
                body: response.raw_body(),
            }
            .into());
        }

        let list: ListMessagesResponse =
            serde_json::from_str(&response.body).map_err(|e| PurgeError::MalformedResponse {
                context: format!("search page {}: {}", page, e),
            })?;

        let refs = list.messages.unwrap_or_default();
        let count = refs.len();
        if count > 0 {
            let sample: Vec<&str> = refs.iter().take(DEBUG_SAMPLE).map(|r| r.id.as_str()).collect();
            debug!("Page {} sample ids: {:?}", page, sample);
        }
        ids.extend(refs.into_iter().map(|r| MessageId::new(r.id)));

        on_event(&PurgeEvent::PageFetched {
            page,
            count,
            total: ids.len(),
        });

        match list.next_page_token {
            Some(token) if !token.is_empty() => {
                if page >= settings.max_pages {
                    return Err(PurgeError::PaginationLimitExceeded {
                        max_pages: settings.max_pages,
                    }
                    .into());
                }
                page_token = Some(token);
            }
            _ => break,
        }
    }

    debug!("Search finished: {} ids over {} pages", ids.len(), page);
    on_event(&PurgeEvent::SearchFinished { total: ids.len() });
    Ok(ids)
}
