use std::sync::Arc;

use wordcheck_core::QuerySession;
use wordcheck_types::{DefinitionOutcome, Provider, Ticket};

use crate::state::AppState;
use crate::ui::{self, DefinitionView};

/// Show a finished fetch unless a newer query has superseded it.
/// Attribution names `provider`, the service that answered.
pub fn handle_definition_ready(
    ticket: Ticket,
    provider: Provider,
    outcome: DefinitionOutcome,
    state: &Arc<AppState>,
    session: &mut QuerySession,
) -> Option<DefinitionView> {
    let found = matches!(&outcome, DefinitionOutcome::Found(entries) if !entries.is_empty());
    let text = session.resolve(&ticket, outcome)?.to_string();

    let client = state.definitions.provider(provider);
    let view = DefinitionView {
        text,
        attribution: client.map(|c| c.metadata().attribution),
        source_url: client
            .filter(|_| found)
            .and_then(|c| c.source_url(&ticket.word)),
    };

    ui::show_definition(&view);
    Some(view)
}
