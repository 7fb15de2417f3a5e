use async_trait::async_trait;
use serde::Deserialize;
use wordcheck_config::definitions::WordsApiConfig;
use wordcheck_types::DefinitionEntry;

use crate::http::{endpoint, fetch_body};
use crate::{DefinitionProvider, LookupError, ProviderMetadata};

#[derive(Clone)]
pub struct WordsApiClient {
    client: reqwest::Client,
    api_key: String,
    api_host: String,
    api_url: String,
}

impl WordsApiClient {
    pub fn new(client: reqwest::Client, config: &WordsApiConfig) -> Self {
        Self {
            client,
            api_key: config.api_key.clone(),
            api_host: config.api_host.clone(),
            api_url: config.api_url.clone(),
        }
    }
}

#[async_trait]
impl DefinitionProvider for WordsApiClient {
    async fn fetch_definitions(&self, word: &str) -> Result<Vec<DefinitionEntry>, LookupError> {
        if self.api_key.is_empty() {
            return Err(LookupError::MissingCredentials("Words API"));
        }

        let word = word.to_lowercase();
        let url = endpoint(&self.api_url, &["words", &word])?;

        tracing::debug!("Querying Words API for '{}' definition", word);
        let request = self
            .client
            .get(url)
            .header("X-Mashape-Key", &self.api_key)
            .header("X-Mashape-Host", &self.api_host);

        match fetch_body(request).await {
            Ok(body) => parse_definitions(&word, &body),
            // unknown words come back as 404
            Err(LookupError::Http { status: 404 }) => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Words API".to_string(),
            attribution: "Powered by WordsAPI".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WordsApiResponse {
    #[serde(default)]
    results: Vec<WordsApiResult>,
}

#[derive(Debug, Deserialize)]
struct WordsApiResult {
    definition: String,
    #[serde(rename = "partOfSpeech", default)]
    part_of_speech: Option<String>,
}

/// Parse a Words API `words/{word}` response: `{results: [{definition, partOfSpeech}]}`.
/// No `results` key, or an empty body, means no definitions.
pub fn parse_definitions(word: &str, body: &str) -> Result<Vec<DefinitionEntry>, LookupError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let response: WordsApiResponse = serde_json::from_str(body)?;

    Ok(response
        .results
        .into_iter()
        .map(|r| DefinitionEntry::new(word, r.definition, r.part_of_speech))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_map_to_entries() {
        let body = r#"{
            "word": "bat",
            "results": [
                {"definition": "a club used for hitting a ball", "partOfSpeech": "noun", "synonyms": ["club"]},
                {"definition": "strike with a bat", "partOfSpeech": "verb"}
            ],
            "frequency": 4.1
        }"#;

        let entries = parse_definitions("bat", body).unwrap();
        assert_eq!(
            entries,
            vec![
                DefinitionEntry::new("bat", "a club used for hitting a ball", Some("noun".into())),
                DefinitionEntry::new("bat", "strike with a bat", Some("verb".into())),
            ]
        );
    }

    #[test]
    fn part_of_speech_passes_through_unnormalized() {
        let body = r#"{"results": [{"definition": "d", "partOfSpeech": "verb-transitive"}]}"#;
        let entries = parse_definitions("bat", body).unwrap();
        assert_eq!(entries[0].part_of_speech.as_deref(), Some("verb-transitive"));
    }

    #[test]
    fn null_part_of_speech_is_absent() {
        let body = r#"{"results": [{"definition": "d", "partOfSpeech": null}]}"#;
        let entries = parse_definitions("bat", body).unwrap();
        assert_eq!(entries[0].part_of_speech, None);
    }

    #[test]
    fn missing_results_is_empty_not_error() {
        let body = r#"{"word": "qi", "syllables": {"count": 1}}"#;
        assert!(parse_definitions("qi", body).unwrap().is_empty());
        assert!(parse_definitions("qi", "").unwrap().is_empty());
    }

    #[test]
    fn non_json_body_is_malformed() {
        assert!(matches!(
            parse_definitions("qi", "<html>rate limited</html>"),
            Err(LookupError::Malformed(_))
        ));
    }
}
