use std::env;

use serde::{Deserialize, Serialize};
use wordcheck_types::Provider;

use self::definitions::DefinitionsConfig;
use self::word_list::WordListConfig;

pub mod definitions;
pub mod word_list;

#[derive(Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub definitions: DefinitionsConfig,
    pub word_list: WordListConfig,
}

impl Config {
    /// Defaults overlaid with whatever the environment provides
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    pub fn apply_env(&mut self) {
        let defs = &mut self.definitions;

        if let Some(tag) = env_string("DEFINITION_PROVIDER") {
            defs.provider = parse_provider(&tag);
        }
        if let Some(timeout) = env::var("DEFINITION_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            defs.timeout_seconds = timeout;
        }

        if let Some(key) = env_string("WORDNIK_API_KEY") {
            defs.wordnik.api_key = key;
        }
        if let Some(key) = env_string("WORDSAPI_KEY") {
            defs.wordsapi.api_key = key;
        }
        if let Some(host) = env_string("WORDSAPI_HOST") {
            defs.wordsapi.api_host = host;
        }
        if let Some(app_id) = env_string("OXFORD_APP_ID") {
            defs.oxford.app_id = app_id;
        }
        if let Some(app_key) = env_string("OXFORD_APP_KEY") {
            defs.oxford.app_key = app_key;
        }

        if let Some(name) = env_string("WORD_LIST") {
            self.word_list.name = name;
        }
        if let Some(dir) = env_string("WORD_LIST_DIR") {
            self.word_list.directory = dir.into();
        }
    }
}

/// Unknown tags fall back to the default provider
pub fn parse_provider(tag: &str) -> Provider {
    tag.parse().unwrap_or_else(|e| {
        tracing::warn!("{e}, using {}", Provider::default());
        Provider::default()
    })
}

fn env_string(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
