use serde::Deserialize;

/// Named RSS/Atom source configured by the user.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedDescriptor {
    pub name: String,
    pub url: String,
}

/// Normalized representation of one feed entry. Fields that a feed omits are
/// kept as empty strings rather than dropping the entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperRecord {
    pub title: String,
    pub summary: String,
    pub link: String,
    /// Name of the `FeedDescriptor` this entry came from.
    pub source: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{name} not found in environment variables")]
    MissingCredential { name: &'static str },

    #[error("unknown email method: {value}. Use 'print' or 'gmail'")]
    UnknownDeliveryMethod { value: String },

    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("feed parse error: {0}")]
    Parse(String),

    #[error("ranking service error: {0}")]
    Ranking(String),

    #[error("failed to build email message: {0}")]
    Mail(#[from] lettre::error::Error),

    #[error("SMTP transport error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DigestError {
    /// Process exit code for a fatal error: 2 for configuration problems,
    /// 3 for upstream (feed, ranking service, transport) failures.
    pub fn exit_code(&self) -> u8 {
        match self {
            DigestError::Config(_)
            | DigestError::MissingCredential { .. }
            | DigestError::UnknownDeliveryMethod { .. }
            | DigestError::Address(_) => 2,
            DigestError::Http(_)
            | DigestError::Parse(_)
            | DigestError::Ranking(_)
            | DigestError::Mail(_)
            | DigestError::Smtp(_)
            | DigestError::Io(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, DigestError>;
