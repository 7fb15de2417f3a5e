use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use wordcheck_core::QuerySession;
use wordcheck_types::AppEvent;

use crate::state::AppState;
use crate::ui;

pub mod definition_ready;
pub mod text_input;

use definition_ready::handle_definition_ready;
use text_input::handle_text_input;

/// App's main loop. Owns the query session, so results are applied one at a time.
pub async fn event_loop(
    state: Arc<AppState>,
    event_rx: AsyncReceiver<AppEvent>,
    event_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut session = QuerySession::new(state.words.clone());

    let result = run_events(&state, &mut session, &event_rx, &event_tx, &cancel).await;
    cancel.cancel();
    result
}

/// Handle events until shutdown. After `Shutdown`, input is ignored but the
/// loop keeps going until the current definition fetch resolves, for at most
/// the configured request timeout plus a second.
pub async fn run_events(
    state: &Arc<AppState>,
    session: &mut QuerySession,
    event_rx: &AsyncReceiver<AppEvent>,
    event_tx: &AsyncSender<AppEvent>,
    cancel: &CancellationToken,
) -> anyhow::Result<()> {
    let mut drain_deadline: Option<Instant> = None;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            _ = tokio::time::sleep_until(drain_deadline.unwrap_or_else(Instant::now)),
                if drain_deadline.is_some() =>
            {
                tracing::warn!(
                    "Gave up waiting for the definition of '{}'",
                    session.state().word().unwrap_or_default()
                );
                break;
            }
            event = event_rx.recv() => event?,
        };

        if drain_deadline.is_some() && matches!(event, AppEvent::TextInput(_)) {
            tracing::debug!("Input after shutdown ignored");
            continue;
        }

        let flow = handle_events(state, session, event_tx, event).await?;

        if flow.is_break() && drain_deadline.is_none() {
            if !session.is_fetching() {
                break;
            }
            tracing::debug!(
                "Input closed, waiting for the definition of '{}'",
                session.state().word().unwrap_or_default()
            );
            let wait = Duration::from_secs(state.config.definitions.timeout_seconds + 1);
            drain_deadline = Some(Instant::now() + wait);
        }

        if drain_deadline.is_some() && !session.is_fetching() {
            break;
        }
    }

    Ok(())
}

pub async fn handle_events(
    state: &Arc<AppState>,
    session: &mut QuerySession,
    event_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<ControlFlow<()>> {
    match event {
        AppEvent::TextInput(text) => {
            tracing::debug!("TextInput received: '{}'", text);
            handle_text_input(text, state, session, event_tx).await?;
        }
        AppEvent::DefinitionReady {
            ticket,
            provider,
            outcome,
        } => {
            handle_definition_ready(ticket, provider, outcome, state, session);
        }
        AppEvent::ShowAbout => {
            println!("{}", ui::about_message(state.words.name()));
        }
        AppEvent::Shutdown => {
            tracing::info!("Shutdown requested");
            return Ok(ControlFlow::Break(()));
        }
    }

    Ok(ControlFlow::Continue(()))
}
