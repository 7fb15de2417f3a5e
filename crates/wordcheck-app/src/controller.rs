use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use wordcheck_types::AppEvent;

use crate::events::event_loop;
use crate::io::spawn_input_reader;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    /// Typed input and finished definition fetches, consumed by the event loop
    pub events: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            events: kanal::bounded_async(64),
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(&self) -> anyhow::Result<JoinSet<anyhow::Result<()>>> {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.events.1.clone(),
            self.channels.events.0.clone(),
            self.cancel_token.child_token(),
        ));

        // Stdin reader, detached
        spawn_input_reader(
            self.channels.events.0.clone(),
            self.cancel_token.child_token(),
        )?;

        Ok(tasks)
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
