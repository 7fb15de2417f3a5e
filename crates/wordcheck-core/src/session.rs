use std::sync::Arc;

use wordcheck_types::{DefinitionOutcome, Ticket, Verdict};

use crate::format::{NO_DEFINITION_MESSAGE, NO_NETWORK_MESSAGE, format_definitions};
use crate::preprocess::{DefaultPreprocessor, Preprocessor};
use crate::word_list::WordList;

/// Where the latest query currently stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryState {
    #[default]
    Idle,
    Checking { word: String },
    Good { word: String },
    Bad { word: String },
    FetchingDefinition { word: String },
    DefinitionShown { word: String, text: String },
    DefinitionFailed { word: String, message: String },
}

impl QueryState {
    pub fn word(&self) -> Option<&str> {
        match self {
            QueryState::Idle => None,
            QueryState::Checking { word }
            | QueryState::Good { word }
            | QueryState::Bad { word }
            | QueryState::FetchingDefinition { word }
            | QueryState::DefinitionShown { word, .. }
            | QueryState::DefinitionFailed { word, .. } => Some(word),
        }
    }
}

/// Verdict for a submitted query, plus the ticket any definition fetch for it must carry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checked {
    pub ticket: Ticket,
    pub verdict: Verdict,
}

/// Tracks the latest query and drops definition results that belong to older ones.
///
/// Every `submit` bumps the generation. A result is accepted only when its
/// ticket carries the current generation, so a slow response for an earlier
/// word can never overwrite the display for a newer one.
pub struct QuerySession {
    words: Arc<WordList>,
    generation: u64,
    state: QueryState,
}

impl QuerySession {
    pub fn new(words: Arc<WordList>) -> Self {
        Self {
            words,
            generation: 0,
            state: QueryState::Idle,
        }
    }

    /// Check a new query, superseding whatever was in flight.
    /// Returns `None` for blank input, which resets the session to `Idle`.
    pub fn submit(&mut self, input: &str) -> Option<Checked> {
        self.generation += 1;

        let word = DefaultPreprocessor.process(input);
        if word.is_empty() {
            self.state = QueryState::Idle;
            return None;
        }

        self.state = QueryState::Checking { word: word.clone() };
        tracing::trace!("Checking '{}' (generation {})", word, self.generation);

        let verdict = if self.words.contains(&word) {
            self.state = QueryState::Good { word: word.clone() };
            Verdict::Good
        } else {
            self.state = QueryState::Bad { word: word.clone() };
            Verdict::Bad
        };

        Some(Checked {
            ticket: Ticket {
                generation: self.generation,
                word,
            },
            verdict,
        })
    }

    /// Mark a definition fetch as started. Only a current, good word can fetch.
    pub fn begin_definition(&mut self, ticket: &Ticket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        match &self.state {
            QueryState::Good { word } => {
                self.state = QueryState::FetchingDefinition { word: word.clone() };
                true
            }
            _ => false,
        }
    }

    /// Apply a finished fetch. Returns the text to display, or `None` when the
    /// result is stale and was discarded.
    pub fn resolve(&mut self, ticket: &Ticket, outcome: DefinitionOutcome) -> Option<&str> {
        if !self.is_current(ticket) || !self.is_fetching() {
            tracing::debug!(
                "Discarding stale definition for '{}' (generation {}, current {})",
                ticket.word,
                ticket.generation,
                self.generation
            );
            return None;
        }

        let word = ticket.word.clone();
        self.state = match outcome {
            DefinitionOutcome::Found(entries) if !entries.is_empty() => {
                QueryState::DefinitionShown {
                    word,
                    text: format_definitions(&entries),
                }
            }
            DefinitionOutcome::Offline => QueryState::DefinitionFailed {
                word,
                message: NO_NETWORK_MESSAGE.to_string(),
            },
            DefinitionOutcome::Found(_) | DefinitionOutcome::Unavailable => {
                QueryState::DefinitionFailed {
                    word,
                    message: NO_DEFINITION_MESSAGE.to_string(),
                }
            }
        };

        match &self.state {
            QueryState::DefinitionShown { text, .. } => Some(text),
            QueryState::DefinitionFailed { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        ticket.generation == self.generation
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// A fetch for the current query has started and not resolved yet
    pub fn is_fetching(&self) -> bool {
        matches!(self.state, QueryState::FetchingDefinition { .. })
    }
}

#[cfg(test)]
mod tests {
    use wordcheck_types::DefinitionEntry;

    use super::*;

    fn session() -> QuerySession {
        QuerySession::new(Arc::new(WordList::from_text("enable", "cat\ndog\n")))
    }

    fn found(word: &str, definition: &str) -> DefinitionOutcome {
        DefinitionOutcome::Found(vec![DefinitionEntry::new(
            word,
            definition,
            Some("noun".to_string()),
        )])
    }

    #[test]
    fn submit_reports_verdicts() {
        let mut session = session();

        let checked = session.submit("CAT").unwrap();
        assert_eq!(checked.verdict, Verdict::Good);
        assert_eq!(checked.ticket.word, "cat");
        assert_eq!(session.state(), &QueryState::Good { word: "cat".into() });

        let checked = session.submit("cta").unwrap();
        assert_eq!(checked.verdict, Verdict::Bad);
        assert_eq!(session.state(), &QueryState::Bad { word: "cta".into() });
    }

    #[test]
    fn blank_query_resets_to_idle() {
        let mut session = session();
        session.submit("cat");

        assert!(session.submit("   ").is_none());
        assert_eq!(session.state(), &QueryState::Idle);
        assert_eq!(session.state().word(), None);
    }

    #[test]
    fn bad_word_cannot_fetch_definition() {
        let mut session = session();
        let checked = session.submit("zzz").unwrap();
        assert!(!session.begin_definition(&checked.ticket));
    }

    #[test]
    fn current_result_is_shown() {
        let mut session = session();
        let checked = session.submit("cat").unwrap();
        assert!(session.begin_definition(&checked.ticket));

        let text = session
            .resolve(&checked.ticket, found("cat", "a small feline"))
            .map(str::to_string);
        assert_eq!(text.as_deref(), Some("(Noun)\n1. a small feline"));
        assert!(matches!(
            session.state(),
            QueryState::DefinitionShown { word, .. } if word == "cat"
        ));
    }

    #[test]
    fn late_result_for_previous_word_is_discarded() {
        let mut session = session();

        let cat = session.submit("cat").unwrap();
        assert!(session.begin_definition(&cat.ticket));

        let dog = session.submit("dog").unwrap();
        assert!(session.begin_definition(&dog.ticket));

        assert!(session.resolve(&cat.ticket, found("cat", "a feline")).is_none());
        assert_eq!(
            session.state(),
            &QueryState::FetchingDefinition { word: "dog".into() }
        );

        let text = session
            .resolve(&dog.ticket, found("dog", "a canine"))
            .map(str::to_string);
        assert_eq!(text.as_deref(), Some("(Noun)\n1. a canine"));
    }

    #[test]
    fn retyping_the_same_word_still_invalidates_old_fetch() {
        let mut session = session();

        let first = session.submit("cat").unwrap();
        session.begin_definition(&first.ticket);
        let second = session.submit("cat").unwrap();
        session.begin_definition(&second.ticket);

        assert!(session.resolve(&first.ticket, found("cat", "old")).is_none());
        assert!(session.resolve(&second.ticket, found("cat", "new")).is_some());
    }

    #[test]
    fn failures_render_fixed_messages() {
        let mut session = session();

        let checked = session.submit("cat").unwrap();
        session.begin_definition(&checked.ticket);
        assert_eq!(
            session.resolve(&checked.ticket, DefinitionOutcome::Offline),
            Some(NO_NETWORK_MESSAGE)
        );

        let checked = session.submit("dog").unwrap();
        session.begin_definition(&checked.ticket);
        assert_eq!(
            session.resolve(&checked.ticket, DefinitionOutcome::Found(vec![])),
            Some(NO_DEFINITION_MESSAGE)
        );
    }

    #[test]
    fn result_is_applied_only_once() {
        let mut session = session();
        let checked = session.submit("cat").unwrap();
        session.begin_definition(&checked.ticket);
        assert!(session.is_fetching());
        assert_eq!(session.state().word(), Some("cat"));

        assert!(session.resolve(&checked.ticket, found("cat", "x")).is_some());
        assert!(!session.is_fetching());
        assert!(session.resolve(&checked.ticket, found("cat", "y")).is_none());
    }
}
