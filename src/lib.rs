pub mod aggregator;
pub mod config;
pub mod credentials;
pub mod delivery;
pub mod ranking;
pub mod renderer;
pub mod types;

pub use aggregator::{collect_records, FeedAggregator, MAX_ENTRIES_PER_FEED};
pub use config::RunConfig;
pub use credentials::{CredentialStore, EnvCredentials};
pub use delivery::{deliver, preview, DeliveryMethod, PREVIEW_CHARS};
pub use ranking::{build_prompt, RankingClient, MAX_PROMPT_PAPERS, SUMMARY_EXCERPT_CHARS};
pub use renderer::{render, render_with_date};
pub use types::{DigestError, FeedDescriptor, PaperRecord, Result};
