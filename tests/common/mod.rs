#![allow(dead_code)]

use research_digest::CredentialStore;
use std::collections::HashMap;

/// In-memory credential store so tests never read the real process
/// environment.
pub struct MapCredentials(HashMap<String, String>);

impl MapCredentials {
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    pub fn with(pairs: &[(&str, &str)]) -> Self {
        Self(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

impl CredentialStore for MapCredentials {
    fn get(&self, name: &str) -> Option<String> {
        self.0.get(name).cloned()
    }
}

/// Render an RSS 2.0 document with the given pre-rendered `<item>` blocks.
pub fn rss_document(items: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Test Feed</title>
    <link>https://example.com/feed</link>
    <description>Fixture feed</description>
{items}
  </channel>
</rss>"#
    )
}

pub fn rss_item(title: &str, link: &str, summary: &str) -> String {
    format!(
        "    <item>\n      <title>{title}</title>\n      <link>{link}</link>\n      <description>{summary}</description>\n    </item>\n"
    )
}

pub fn rss_document_with_n_items(n: usize) -> String {
    let items: String = (1..=n)
        .map(|i| {
            rss_item(
                &format!("Paper {i}"),
                &format!("https://example.com/paper/{i}"),
                &format!("Abstract for paper {i}"),
            )
        })
        .collect();
    rss_document(&items)
}
