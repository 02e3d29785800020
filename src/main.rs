use circdesk::api::LibraryClient;
use circdesk::app::{App, AppMessage};
use circdesk::config::ApiConfig;
use circdesk::terminal::{setup_panic_hook, TerminalManager};
use circdesk::{logging, ui};

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    setup_panic_hook();

    if let Some(path) = logging::init() {
        tracing::info!(path = %path.display(), "logging initialized");
    }

    let config = ApiConfig::from_env();
    tracing::info!(base_url = %config.base_url, "starting circdesk");
    let client = LibraryClient::new(&config)?;

    let (message_tx, mut message_rx) = mpsc::unbounded_channel::<AppMessage>();
    let mut app = App::new(client, message_tx);

    // Books and members back both their own sections and the loan form;
    // loans are fetched on first visit to their section.
    app.refresh_books();
    app.refresh_members();

    let mut term_manager = TerminalManager::new()?;
    let mut events = EventStream::new();

    while !app.should_quit {
        term_manager.terminal().draw(|frame| ui::draw(frame, &app))?;

        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    // Resizes redraw on the next loop pass anyway
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!(error = %e, "terminal event stream error");
                    }
                    None => break,
                }
            }
            Some(message) = message_rx.recv() => {
                app.handle_message(message);
                // Apply everything that already arrived before redrawing
                while let Ok(message) = message_rx.try_recv() {
                    app.handle_message(message);
                }
            }
        }
    }

    term_manager.cleanup();
    Ok(())
}
