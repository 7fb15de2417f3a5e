use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_name() -> String {
    "enable".to_string()
}

fn default_directory() -> PathBuf {
    PathBuf::from("wordlists")
}

/// Which bundled word list to check words against.
/// Known lists: `enable`, `twl2014`, `sowpods`.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct WordListConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

impl Default for WordListConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            directory: default_directory(),
        }
    }
}

impl WordListConfig {
    pub fn path(&self) -> PathBuf {
        self.directory.join(format!("{}.txt", self.name))
    }
}
