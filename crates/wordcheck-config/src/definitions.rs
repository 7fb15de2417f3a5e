use serde::{Deserialize, Serialize};
use wordcheck_types::Provider;

fn default_enabled() -> bool {
    true
}

fn default_timeout_seconds() -> u64 {
    10
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DefinitionsConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Provider used when the caller does not pick one
    pub provider: Provider,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    pub wordnik: WordnikConfig,
    pub wordsapi: WordsApiConfig,
    pub oxford: OxfordConfig,
}

impl Default for DefinitionsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            provider: Provider::default(),
            timeout_seconds: default_timeout_seconds(),
            wordnik: WordnikConfig::default(),
            wordsapi: WordsApiConfig::default(),
            oxford: OxfordConfig::default(),
        }
    }
}

fn default_wordnik_url() -> String {
    "http://api.wordnik.com:80/v4".to_string()
}

fn default_wordnik_limit() -> u32 {
    20
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct WordnikConfig {
    pub api_key: String,
    #[serde(default = "default_wordnik_url")]
    pub api_url: String,
    #[serde(default = "default_wordnik_limit")]
    pub limit: u32,
}

impl Default for WordnikConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_wordnik_url(),
            limit: default_wordnik_limit(),
        }
    }
}

fn default_wordsapi_host() -> String {
    "wordsapiv1.p.mashape.com".to_string()
}

fn default_wordsapi_url() -> String {
    "https://wordsapiv1.p.mashape.com".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct WordsApiConfig {
    /// Sent as `X-Mashape-Key`
    pub api_key: String,
    /// Sent as `X-Mashape-Host`
    #[serde(default = "default_wordsapi_host")]
    pub api_host: String,
    #[serde(default = "default_wordsapi_url")]
    pub api_url: String,
}

impl Default for WordsApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_host: default_wordsapi_host(),
            api_url: default_wordsapi_url(),
        }
    }
}

fn default_oxford_url() -> String {
    "https://od-api.oxforddictionaries.com/api/v1".to_string()
}

fn default_oxford_language() -> String {
    "en".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OxfordConfig {
    pub app_id: String,
    pub app_key: String,
    #[serde(default = "default_oxford_url")]
    pub api_url: String,
    #[serde(default = "default_oxford_language")]
    pub language: String,
}

impl Default for OxfordConfig {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            app_key: String::new(),
            api_url: default_oxford_url(),
            language: default_oxford_language(),
        }
    }
}
