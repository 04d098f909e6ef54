mod common;

use common::MapCredentials;
use research_digest::{
    build_prompt, DigestError, PaperRecord, RankingClient, MAX_PROMPT_PAPERS,
    SUMMARY_EXCERPT_CHARS,
};

fn paper(i: usize, summary: &str) -> PaperRecord {
    PaperRecord {
        title: format!("Paper {i}"),
        summary: summary.to_string(),
        link: format!("https://example.com/paper/{i}"),
        source: "arxiv".to_string(),
    }
}

fn paper_lines(prompt: &str) -> usize {
    prompt.lines().filter(|line| line.starts_with("- ")).count()
}

#[test]
fn prompt_never_embeds_more_than_the_hard_cap() {
    let papers: Vec<PaperRecord> = (1..=250).map(|i| paper(i, "short abstract")).collect();
    let prompt = build_prompt(&papers, "graph neural networks", 10);

    assert_eq!(paper_lines(&prompt), MAX_PROMPT_PAPERS);
    assert!(prompt.contains("Paper 100"));
    assert!(!prompt.contains("Paper 101 "));
}

#[test]
fn summary_excerpts_are_truncated_with_ellipsis() {
    let long_summary = "a".repeat(500);
    let papers = vec![paper(1, &long_summary)];
    let prompt = build_prompt(&papers, "anything", 5);

    let expected_excerpt = format!("{}...", "a".repeat(SUMMARY_EXCERPT_CHARS));
    assert!(prompt.contains(&expected_excerpt));
    assert!(!prompt.contains(&"a".repeat(SUMMARY_EXCERPT_CHARS + 1)));
}

#[test]
fn truncation_counts_characters_not_bytes() {
    let long_summary = "é".repeat(300);
    let papers = vec![paper(1, &long_summary)];
    let prompt = build_prompt(&papers, "anything", 5);

    assert!(prompt.contains(&format!("{}...", "é".repeat(SUMMARY_EXCERPT_CHARS))));
}

#[test]
fn short_summaries_still_get_the_ellipsis_marker() {
    let papers = vec![paper(1, "tiny")];
    let prompt = build_prompt(&papers, "anything", 5);

    assert!(prompt.contains("- Paper 1 (arxiv): tiny..."));
}

#[test]
fn prompt_embeds_interests_and_requested_count() {
    let papers = vec![paper(1, "an abstract")];
    let prompt = build_prompt(&papers, "protein folding and structure prediction", 7);

    assert!(prompt.contains("protein folding and structure prediction"));
    assert!(prompt.contains("TOP 7 most relevant"));
    assert!(prompt.contains("**Why relevant:**"));
    assert!(prompt.contains("**Key contribution:**"));
}

#[test]
fn missing_api_key_fails_before_any_network_call() {
    let credentials = MapCredentials::empty();
    let result = RankingClient::new(&credentials);

    match result {
        Err(DigestError::MissingCredential { name }) => assert_eq!(name, "GEMINI_API_KEY"),
        other => panic!("expected missing credential error, got {:?}", other.err()),
    }
}

#[test]
fn api_key_from_store_is_accepted() {
    let credentials = MapCredentials::with(&[("GEMINI_API_KEY", "test-key")]);
    assert!(RankingClient::new(&credentials).is_ok());
}
