use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Raw query text typed by the user
    TextInput(String),
    /// A definition fetch finished, successfully or not
    DefinitionReady {
        ticket: Ticket,
        /// Service that answered, which the attribution must name
        provider: Provider,
        outcome: DefinitionOutcome,
    },
    ShowAbout,
    Shutdown,
}

/// A single definition of a word, normalized across providers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionEntry {
    pub word: String,
    pub definition: String,
    pub part_of_speech: Option<String>,
}

impl DefinitionEntry {
    pub fn new(
        word: impl Into<String>,
        definition: impl Into<String>,
        part_of_speech: Option<String>,
    ) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
            part_of_speech,
        }
    }
}

/// Dictionary web service used for definitions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Wordnik,
    Oxford,
    WordsApi,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::Wordnik, Provider::Oxford, Provider::WordsApi];

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Wordnik => "wordnik",
            Provider::Oxford => "oxford",
            Provider::WordsApi => "wordsapi",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown definition provider '{0}'")]
pub struct UnknownProvider(pub String);

impl FromStr for Provider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wordnik" => Ok(Provider::Wordnik),
            "oxford" => Ok(Provider::Oxford),
            "wordsapi" => Ok(Provider::WordsApi),
            _ => Err(UnknownProvider(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Good,
    Bad,
}

/// Identifies the query a definition fetch was issued for.
///
/// `generation` increases with every submitted query, so a ticket is current
/// only until the next query arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub generation: u64,
    pub word: String,
}

/// What a definition fetch produced, as seen by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionOutcome {
    Found(Vec<DefinitionEntry>),
    /// Transport failed before any response arrived
    Offline,
    /// Any other failure, or no definitions at all
    Unavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_tags_parse_case_insensitively() {
        assert_eq!("WordNik".parse::<Provider>(), Ok(Provider::Wordnik));
        assert_eq!(" oxford ".parse::<Provider>(), Ok(Provider::Oxford));
        assert_eq!("WORDSAPI".parse::<Provider>(), Ok(Provider::WordsApi));
        assert_eq!(
            "merriam".parse::<Provider>(),
            Err(UnknownProvider("merriam".to_string()))
        );
    }

    #[test]
    fn unknown_provider_message_names_the_tag() {
        let err = "merriam".parse::<Provider>().unwrap_err();
        assert_eq!(err.to_string(), "unknown definition provider 'merriam'");
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn provider_display_matches_tag() {
        for provider in Provider::ALL {
            assert_eq!(provider.to_string().parse::<Provider>(), Ok(provider));
        }
        assert_eq!(Provider::default(), Provider::Wordnik);
    }
}
