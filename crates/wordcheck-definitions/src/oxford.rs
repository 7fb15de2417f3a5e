use async_trait::async_trait;
use serde::Deserialize;
use wordcheck_config::definitions::OxfordConfig;
use wordcheck_types::DefinitionEntry;

use crate::http::{endpoint, fetch_body};
use crate::{DefinitionProvider, LookupError, ProviderMetadata};

#[derive(Clone)]
pub struct OxfordClient {
    client: reqwest::Client,
    app_id: String,
    app_key: String,
    api_url: String,
    language: String,
}

impl OxfordClient {
    pub fn new(client: reqwest::Client, config: &OxfordConfig) -> Self {
        Self {
            client,
            app_id: config.app_id.clone(),
            app_key: config.app_key.clone(),
            api_url: config.api_url.clone(),
            language: config.language.clone(),
        }
    }
}

#[async_trait]
impl DefinitionProvider for OxfordClient {
    async fn fetch_definitions(&self, word: &str) -> Result<Vec<DefinitionEntry>, LookupError> {
        if self.app_id.is_empty() || self.app_key.is_empty() {
            return Err(LookupError::MissingCredentials("Oxford Dictionaries"));
        }

        let word = word.to_lowercase();
        let url = endpoint(&self.api_url, &["entries", &self.language, &word])?;

        tracing::debug!("Querying Oxford Dictionaries for '{}' definition", word);
        let request = self
            .client
            .get(url)
            .header("app_id", &self.app_id)
            .header("app_key", &self.app_key)
            .header(reqwest::header::ACCEPT, "application/json");

        let body = fetch_body(request).await?;
        parse_definitions(&word, &body)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Oxford Dictionaries".to_string(),
            attribution: "Powered by Oxford Dictionaries".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OxfordResponse {
    results: Option<Vec<OxfordResult>>,
}

#[derive(Debug, Deserialize)]
struct OxfordResult {
    #[serde(rename = "lexicalEntries", default)]
    lexical_entries: Vec<LexicalEntry>,
}

#[derive(Debug, Deserialize)]
struct LexicalEntry {
    #[serde(rename = "lexicalCategory", default)]
    lexical_category: Option<LexicalCategory>,
    #[serde(default)]
    entries: Vec<Entry>,
}

/// v1 sends a bare name, v2 an `{id, text}` object
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LexicalCategory {
    Name(String),
    Tagged { text: String },
}

impl LexicalCategory {
    fn into_name(self) -> String {
        match self {
            LexicalCategory::Name(name) | LexicalCategory::Tagged { text: name } => name,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Entry {
    #[serde(default)]
    senses: Vec<Sense>,
}

#[derive(Debug, Deserialize)]
struct Sense {
    #[serde(default)]
    definitions: Vec<String>,
}

/// Flatten an Oxford `entries` response into one entry per definition string,
/// tagged with the enclosing lexical category.
///
/// Only the first result is used. A missing level anywhere below it simply
/// contributes nothing.
pub fn parse_definitions(word: &str, body: &str) -> Result<Vec<DefinitionEntry>, LookupError> {
    let response: OxfordResponse = serde_json::from_str(body)?;

    let results = response
        .results
        .ok_or_else(|| LookupError::Malformed("missing \"results\"".to_string()))?;

    // TODO: decide how to present words with more than one result (homographs)
    let Some(result) = results.into_iter().next() else {
        return Ok(Vec::new());
    };

    let mut definitions = Vec::new();
    for lexical_entry in result.lexical_entries {
        let part_of_speech = lexical_entry
            .lexical_category
            .map(LexicalCategory::into_name)
            .unwrap_or_default();

        let strings = lexical_entry
            .entries
            .into_iter()
            .flat_map(|entry| entry.senses)
            .flat_map(|sense| sense.definitions);

        for definition in strings {
            definitions.push(DefinitionEntry::new(
                word,
                definition,
                Some(part_of_speech.clone()),
            ));
        }
    }

    Ok(definitions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_definition_round_trips() {
        let body = r#"{"results":[{"lexicalEntries":[{"lexicalCategory":"noun","entries":[{"senses":[{"definitions":["a flying mammal"]}]}]}]}]}"#;

        assert_eq!(
            parse_definitions("bat", body).unwrap(),
            vec![DefinitionEntry::new("bat", "a flying mammal", Some("noun".into()))]
        );
    }

    #[test]
    fn nested_definitions_are_flattened_in_order() {
        let body = r#"{"results":[{"lexicalEntries":[
            {"lexicalCategory":"Noun","entries":[
                {"senses":[{"definitions":["n1","n2"]},{"definitions":["n3"]}]},
                {"senses":[{"definitions":["n4"]}]}
            ]},
            {"lexicalCategory":"Verb","entries":[{"senses":[{"definitions":["v1"]}]}]}
        ]}]}"#;

        let entries = parse_definitions("bat", body).unwrap();
        let flat: Vec<_> = entries
            .iter()
            .map(|e| (e.part_of_speech.as_deref().unwrap(), e.definition.as_str()))
            .collect();
        assert_eq!(
            flat,
            [("Noun", "n1"), ("Noun", "n2"), ("Noun", "n3"), ("Noun", "n4"), ("Verb", "v1")]
        );
    }

    #[test]
    fn missing_levels_contribute_nothing() {
        let body = r#"{"results":[{"lexicalEntries":[
            {"lexicalCategory":"Noun"},
            {"lexicalCategory":"Noun","entries":[{}]},
            {"lexicalCategory":"Noun","entries":[{"senses":[{"crossReferences":[]}]}]},
            {"lexicalCategory":"Verb","entries":[{"senses":[{"definitions":["v1"]}]}]}
        ]}]}"#;

        let entries = parse_definitions("bat", body).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].definition, "v1");

        assert!(parse_definitions("bat", r#"{"results":[{}]}"#).unwrap().is_empty());
        assert!(parse_definitions("bat", r#"{"results":[]}"#).unwrap().is_empty());
    }

    #[test]
    fn only_first_result_is_used() {
        let body = r#"{"results":[
            {"lexicalEntries":[{"lexicalCategory":"Noun","entries":[{"senses":[{"definitions":["first"]}]}]}]},
            {"lexicalEntries":[{"lexicalCategory":"Noun","entries":[{"senses":[{"definitions":["second"]}]}]}]}
        ]}"#;

        let entries = parse_definitions("bat", body).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].definition, "first");
    }

    #[test]
    fn tagged_lexical_category_is_accepted() {
        let body = r#"{"results":[{"lexicalEntries":[{"lexicalCategory":{"id":"noun","text":"Noun"},"entries":[{"senses":[{"definitions":["d"]}]}]}]}]}"#;

        let entries = parse_definitions("bat", body).unwrap();
        assert_eq!(entries[0].part_of_speech.as_deref(), Some("Noun"));
    }

    #[test]
    fn missing_results_is_malformed() {
        assert!(matches!(
            parse_definitions("bat", r#"{"error":"No entry available"}"#),
            Err(LookupError::Malformed(_))
        ));
    }
}
