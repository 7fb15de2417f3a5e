pub mod format;
pub mod preprocess;
pub mod session;
pub mod word_list;

pub use format::{NO_DEFINITION_MESSAGE, NO_NETWORK_MESSAGE, format_definitions};
pub use preprocess::{DefaultPreprocessor, Preprocessor};
pub use session::{Checked, QuerySession, QueryState};
pub use word_list::{WordList, WordListError};
