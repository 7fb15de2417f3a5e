use std::io::BufRead;
use std::thread::{self, JoinHandle};

use kanal::AsyncSender;
use tokio_util::sync::CancellationToken;
use wordcheck_types::AppEvent;

/// Read queries from stdin, one per line, on a detached thread.
/// The blocking read must stay off the runtime so shutdown never waits on it.
pub fn spawn_input_reader(
    event_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || read_input(event_tx, cancel))
}

fn read_input(event_tx: AsyncSender<AppEvent>, cancel: CancellationToken) {
    let event_tx = event_tx.to_sync();
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let event = match lines.next() {
            Some(Ok(line)) => parse_line(line),
            Some(Err(e)) => {
                tracing::error!("Failed to read stdin: {}", e);
                AppEvent::Shutdown
            }
            None => {
                tracing::debug!("stdin closed");
                AppEvent::Shutdown
            }
        };

        if cancel.is_cancelled() {
            break;
        }

        let quit = matches!(event, AppEvent::Shutdown);
        if let Err(e) = event_tx.send(event) {
            tracing::debug!("Event loop gone, stopping input: {}", e);
            break;
        }
        if quit {
            break;
        }
    }
}

pub fn parse_line(line: String) -> AppEvent {
    match line.trim() {
        ":q" | ":quit" | ":exit" => AppEvent::Shutdown,
        ":about" => AppEvent::ShowAbout,
        _ => AppEvent::TextInput(line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_and_words() {
        assert!(matches!(parse_line(":quit".into()), AppEvent::Shutdown));
        assert!(matches!(parse_line(" :about ".into()), AppEvent::ShowAbout));
        assert!(matches!(parse_line("Quixotic".into()), AppEvent::TextInput(t) if t == "Quixotic"));
    }
}
