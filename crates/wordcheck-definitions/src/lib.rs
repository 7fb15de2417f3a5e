use wordcheck_types::{DefinitionEntry, Provider};

mod http;
pub mod oxford;
pub mod service;
pub mod wordnik;
pub mod wordsapi;

pub use oxford::OxfordClient;
pub use service::Definitions;
pub use wordnik::WordnikClient;
pub use wordsapi::WordsApiClient;

/// Dictionary web service interface
#[async_trait::async_trait]
pub trait DefinitionProvider: Send + Sync {
    /// Fetch every definition the service has for `word`, normalized.
    /// An empty list is a valid answer here; callers decide what it means.
    async fn fetch_definitions(&self, word: &str) -> Result<Vec<DefinitionEntry>, LookupError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;

    /// Page on the provider's own site for `word`, if it has one
    fn source_url(&self, _word: &str) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    /// Tagline shown next to definitions
    pub attribution: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status}")]
    Http { status: u16 },

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("No definitions found")]
    EmptyResult,

    #[error("Missing credentials for {0}")]
    MissingCredentials(&'static str),

    #[error("No client registered for {0}")]
    Unregistered(Provider),

    #[error("Invalid endpoint: {0}")]
    Endpoint(String),
}

impl LookupError {
    /// Transport-level failure: nothing came back from the service at all
    pub fn is_network(&self) -> bool {
        match self {
            LookupError::Network(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            _ => false,
        }
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(e: serde_json::Error) -> Self {
        LookupError::Malformed(e.to_string())
    }
}
