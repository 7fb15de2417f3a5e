use std::sync::Arc;

use wordcheck_config::Config;
use wordcheck_core::WordList;
use wordcheck_definitions::Definitions;

pub struct AppState {
    pub config: Config,
    /// Read-only after load, shared by every query
    pub words: Arc<WordList>,
    pub definitions: Definitions,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let words = WordList::load_or_empty(&config.word_list.name, &config.word_list.path());
        let definitions = Definitions::new(&config.definitions);

        Self::with_parts(config, words, definitions)
    }

    pub fn with_parts(config: Config, words: WordList, definitions: Definitions) -> Self {
        Self {
            config,
            words: Arc::new(words),
            definitions,
        }
    }
}
