use crate::credentials::{require, CredentialStore, GEMINI_API_KEY};
use crate::types::{DigestError, PaperRecord, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::time::Duration;
use tracing::debug;

/// Hard cap on how many paper entries are embedded in the prompt, regardless
/// of how many were aggregated. This bounds prompt size independently of the
/// requested output count.
pub const MAX_PROMPT_PAPERS: usize = 100;

/// Each summary excerpt in the prompt is cut to this many characters.
pub const SUMMARY_EXCERPT_CHARS: usize = 200;

const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";

/// Compose the ranking instruction: the interest statement, the requested
/// output count, and one line per candidate paper. User-supplied text is
/// embedded as-is; the ranking service must tolerate arbitrary content.
pub fn build_prompt(papers: &[PaperRecord], interests: &str, max_papers: usize) -> String {
    let mut listing = String::new();
    for paper in papers.iter().take(MAX_PROMPT_PAPERS) {
        let excerpt: String = paper.summary.chars().take(SUMMARY_EXCERPT_CHARS).collect();
        let _ = writeln!(
            listing,
            "- {} ({}): {}...",
            paper.title, paper.source, excerpt
        );
    }

    format!(
        r#"
You are a research assistant. Given the following research interests:

{interests}

Review these papers and return the TOP {max_papers} most relevant ones.
For each relevant paper, provide:
1. Title
2. One sentence explaining why it's relevant
3. Key contribution in one sentence

Papers to review:
{listing}
Format your response as:
## Paper Title (Source)
**Why relevant:** ...
**Key contribution:** ...
[Link]

Only include the most relevant papers.
"#
    )
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

/// Client for the hosted Gemini model. The API credential is resolved at
/// construction, before any network activity.
pub struct RankingClient {
    client: Client,
    api_key: String,
}

impl RankingClient {
    pub fn new(credentials: &dyn CredentialStore) -> Result<Self> {
        let api_key = require(credentials, GEMINI_API_KEY)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Ok(Self { client, api_key })
    }

    /// Send the composed prompt as a single request and return the model's
    /// textual completion verbatim. No parsing, no validation, no retry; a
    /// failed call is fatal for the run.
    pub async fn rank(&self, prompt: &str) -> Result<String> {
        debug!("Sending ranking request ({} bytes)", prompt.len());

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(GEMINI_ENDPOINT)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(DigestError::Ranking(format!(
                "ranking service returned {}: {}",
                status, body
            )));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| DigestError::Ranking(format!("unexpected response: {}", e)))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| {
                DigestError::Ranking("response contained no completion text".to_string())
            })?;

        Ok(text)
    }
}
