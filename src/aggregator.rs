use crate::types::{DigestError, FeedDescriptor, PaperRecord, Result};
use feed_rs::parser;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// At most this many entries are kept from any single feed.
pub const MAX_ENTRIES_PER_FEED: usize = 50;

const USER_AGENT: &str = "research-digest/0.1";
const FETCH_TIMEOUT_SECONDS: u64 = 30;

/// Retrieves configured feeds one at a time and normalizes their entries
/// into an ordered sequence of paper records.
pub struct FeedAggregator {
    client: Client,
}

impl FeedAggregator {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECONDS))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Fetch every feed in order and collect their entries. A fetch or parse
    /// failure for any feed aborts the whole run; there is no partial result.
    pub async fn aggregate(&self, feeds: &[FeedDescriptor]) -> Result<Vec<PaperRecord>> {
        let mut papers = Vec::new();

        for feed in feeds {
            info!("Fetching from {}...", feed.name);
            let content = self.fetch(&feed.url).await?;
            let records = collect_records(&content, &feed.name)?;
            debug!("Collected {} entries from {}", records.len(), feed.name);
            papers.extend(records);
        }

        Ok(papers)
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let content = response.bytes().await?;
        Ok(content.to_vec())
    }
}

impl Default for FeedAggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse feed content and normalize up to [`MAX_ENTRIES_PER_FEED`] entries,
/// each tagged with the feed's configured name. Entries with missing fields
/// are kept with empty strings in place of the missing data; feeds are
/// loosely structured upstream and partial entries are tolerated by design.
pub fn collect_records(content: &[u8], source: &str) -> Result<Vec<PaperRecord>> {
    let feed = parser::parse(content)
        .map_err(|e| DigestError::Parse(format!("failed to parse feed '{}': {}", source, e)))?;

    let records = feed
        .entries
        .into_iter()
        .take(MAX_ENTRIES_PER_FEED)
        .map(|entry| PaperRecord {
            title: entry.title.map(|t| t.content).unwrap_or_default(),
            summary: entry.summary.map(|s| s.content).unwrap_or_default(),
            link: entry
                .links
                .first()
                .map(|link| link.href.clone())
                .unwrap_or_default(),
            source: source.to_string(),
        })
        .collect();

    Ok(records)
}
