use async_trait::async_trait;
use serde::Deserialize;
use wordcheck_config::definitions::WordnikConfig;
use wordcheck_types::DefinitionEntry;

use crate::http::{endpoint, fetch_body};
use crate::{DefinitionProvider, LookupError, ProviderMetadata};

#[derive(Clone)]
pub struct WordnikClient {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    limit: u32,
}

impl WordnikClient {
    pub fn new(client: reqwest::Client, config: &WordnikConfig) -> Self {
        Self {
            client,
            api_key: config.api_key.clone(),
            api_url: config.api_url.clone(),
            limit: config.limit,
        }
    }
}

#[async_trait]
impl DefinitionProvider for WordnikClient {
    async fn fetch_definitions(&self, word: &str) -> Result<Vec<DefinitionEntry>, LookupError> {
        if self.api_key.is_empty() {
            return Err(LookupError::MissingCredentials("WordNik"));
        }

        let word = word.to_lowercase();
        let mut url = endpoint(&self.api_url, &["word.json", &word, "definitions"])?;
        url.query_pairs_mut()
            .append_pair("limit", &self.limit.to_string());

        tracing::debug!("Querying WordNik for '{}' definition", word);
        let body = fetch_body(self.client.get(url).header("api_key", &self.api_key)).await?;

        parse_definitions(&word, &body)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "WordNik".to_string(),
            attribution: "Powered by Wordnik".to_string(),
        }
    }

    fn source_url(&self, word: &str) -> Option<String> {
        Some(format!("http://www.wordnik.com/words/{}", word.to_lowercase()))
    }
}

#[derive(Debug, Deserialize)]
struct WordnikDefinition {
    text: String,
    #[serde(rename = "partOfSpeech", default)]
    part_of_speech: Option<String>,
}

/// Parse a WordNik `definitions` response: a flat array of `{text, partOfSpeech}`.
///
/// `text` is always present in real responses, so an element without it makes
/// the whole response malformed.
pub fn parse_definitions(word: &str, body: &str) -> Result<Vec<DefinitionEntry>, LookupError> {
    let definitions: Vec<WordnikDefinition> = serde_json::from_str(body)?;

    Ok(definitions
        .into_iter()
        .map(|d| {
            let part_of_speech = standardize_part_of_speech(d.part_of_speech.as_deref().unwrap_or(""));
            DefinitionEntry::new(word, d.text, Some(part_of_speech.to_string()))
        })
        .collect())
}

/// WordNik splits verbs by transitivity; everything else passes through
fn standardize_part_of_speech(part_of_speech: &str) -> &str {
    match part_of_speech {
        "verb-intransitive" | "verb-transitive" => "verb",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitive_verbs_normalize_to_verb() {
        let body = r#"[
            {"text": "To strike with a bat.", "partOfSpeech": "verb-transitive"},
            {"text": "To take a turn at batting.", "partOfSpeech": "verb-intransitive"},
            {"text": "A nocturnal flying mammal.", "partOfSpeech": "noun"}
        ]"#;

        let entries = parse_definitions("bat", body).unwrap();
        let parts: Vec<_> = entries
            .iter()
            .map(|e| e.part_of_speech.as_deref().unwrap())
            .collect();
        assert_eq!(parts, ["verb", "verb", "noun"]);
        assert!(entries.iter().all(|e| e.word == "bat"));
        assert_eq!(entries[2].definition, "A nocturnal flying mammal.");
    }

    #[test]
    fn missing_part_of_speech_becomes_empty() {
        let entries = parse_definitions("bat", r#"[{"text": "A club."}]"#).unwrap();
        assert_eq!(entries[0].part_of_speech.as_deref(), Some(""));
    }

    #[test]
    fn missing_text_is_malformed() {
        let result = parse_definitions("bat", r#"[{"partOfSpeech": "noun"}]"#);
        assert!(matches!(result, Err(LookupError::Malformed(_))));
    }

    #[test]
    fn object_instead_of_array_is_malformed() {
        let result = parse_definitions("bat", r#"{"message": "not found"}"#);
        assert!(matches!(result, Err(LookupError::Malformed(_))));
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        let client = WordnikClient::new(reqwest::Client::new(), &WordnikConfig::default());
        assert!(matches!(
            client.fetch_definitions("bat").await,
            Err(LookupError::MissingCredentials(_))
        ));
    }
}
