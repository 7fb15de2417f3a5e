use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use wordcheck_config::definitions::DefinitionsConfig;
use wordcheck_types::{DefinitionEntry, DefinitionOutcome, Provider};

use crate::{DefinitionProvider, LookupError, OxfordClient, WordnikClient, WordsApiClient};

/// Single entry point over every configured dictionary service.
///
/// Lookups are best effort: `lookup_definition` never fails, it logs and
/// returns an empty list instead.
#[derive(Clone)]
pub struct Definitions {
    default_provider: Provider,
    providers: HashMap<Provider, Arc<dyn DefinitionProvider>>,
}

impl Definitions {
    pub fn new(config: &DefinitionsConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout: {e}");
                reqwest::Client::new()
            });

        let mut providers: HashMap<Provider, Arc<dyn DefinitionProvider>> = HashMap::new();
        providers.insert(
            Provider::Wordnik,
            Arc::new(WordnikClient::new(client.clone(), &config.wordnik)),
        );
        providers.insert(
            Provider::WordsApi,
            Arc::new(WordsApiClient::new(client.clone(), &config.wordsapi)),
        );
        providers.insert(
            Provider::Oxford,
            Arc::new(OxfordClient::new(client, &config.oxford)),
        );

        Self {
            default_provider: config.provider,
            providers,
        }
    }

    /// Replace the client behind `provider`
    pub fn with_provider(mut self, provider: Provider, client: Arc<dyn DefinitionProvider>) -> Self {
        self.providers.insert(provider, client);
        self
    }

    pub fn default_provider(&self) -> Provider {
        self.default_provider
    }

    pub fn provider(&self, provider: Provider) -> Option<&Arc<dyn DefinitionProvider>> {
        self.providers.get(&provider)
    }

    /// Fetch definitions, reporting why nothing came back
    pub async fn try_lookup_definition(
        &self,
        word: &str,
        provider: Provider,
    ) -> Result<Vec<DefinitionEntry>, LookupError> {
        let client = self
            .providers
            .get(&provider)
            .ok_or(LookupError::Unregistered(provider))?;

        let entries = client.fetch_definitions(word).await?;
        if entries.is_empty() {
            return Err(LookupError::EmptyResult);
        }
        Ok(entries)
    }

    /// Fetch definitions; every failure is logged and becomes an empty list
    pub async fn lookup_definition(&self, word: &str, provider: Provider) -> Vec<DefinitionEntry> {
        self.try_lookup_definition(word, provider)
            .await
            .unwrap_or_else(|e| {
                self.log_failure(word, provider, &e);
                Vec::new()
            })
    }

    /// Fetch definitions, keeping only the distinction the display needs
    pub async fn lookup_outcome(&self, word: &str, provider: Provider) -> DefinitionOutcome {
        match self.try_lookup_definition(word, provider).await {
            Ok(entries) => DefinitionOutcome::Found(entries),
            Err(e) => {
                self.log_failure(word, provider, &e);
                if e.is_network() {
                    DefinitionOutcome::Offline
                } else {
                    DefinitionOutcome::Unavailable
                }
            }
        }
    }

    fn log_failure(&self, word: &str, provider: Provider, error: &LookupError) {
        let name = self
            .providers
            .get(&provider)
            .map(|client| client.metadata().name)
            .unwrap_or_else(|| provider.to_string());

        match error {
            LookupError::EmptyResult => {
                tracing::info!("No definitions for '{}' from {}", word, name)
            }
            other => tracing::warn!(
                "Definition lookup for '{}' via {} failed: {}",
                word,
                name,
                other
            ),
        }
    }
}
