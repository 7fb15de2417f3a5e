use std::sync::Arc;

use kanal::AsyncSender;
use wordcheck_core::{Checked, QuerySession};
use wordcheck_types::{AppEvent, Verdict};

use crate::state::AppState;
use crate::ui;

/// Check the typed word and, when it is good, start a background definition fetch.
///
/// The fetch reports back through `event_tx` tagged with the query's ticket;
/// it is never awaited here.
pub async fn handle_text_input(
    text: String,
    state: &Arc<AppState>,
    session: &mut QuerySession,
    event_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<Option<Checked>> {
    let Some(checked) = session.submit(&text) else {
        tracing::debug!("Empty query, nothing to check");
        return Ok(None);
    };

    ui::show_verdict(&checked.ticket.word, checked.verdict);
    if checked.verdict == Verdict::Bad {
        return Ok(Some(checked));
    }

    if !state.config.definitions.enabled || !session.begin_definition(&checked.ticket) {
        return Ok(Some(checked));
    }

    ui::show_searching();

    let provider = state.definitions.default_provider();
    let ticket = checked.ticket.clone();
    let definitions = state.definitions.clone();
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let outcome = definitions.lookup_outcome(&ticket.word, provider).await;
        if let Err(e) = tx.send(AppEvent::DefinitionReady {
            ticket,
            provider,
            outcome,
        }).await {
            tracing::error!("Failed to deliver definition: {}", e);
        }
    });

    Ok(Some(checked))
}
