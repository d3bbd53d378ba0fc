//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;

use quill_app::config::Settings;
use quill_app::message::Message;
use quill_app::process::process_message;
use quill_app::signals;
use quill_app::state::AppState;
use quill_app::Workspace;
use quill_core::prelude::*;

use super::{event, render, terminal};

/// Capacity of the message channel shared by the signal handler and save
/// callbacks
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Run the editor on `workspace` until the user quits
pub async fn run(workspace: Workspace, settings: Settings) -> Result<()> {
    terminal::install_panic_hook();

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);

    // Sends Message::Quit on SIGINT/SIGTERM
    signals::spawn_signal_handler(msg_tx.clone());

    let mut state = AppState::new(workspace, settings, msg_tx);
    debug!("Entering event loop");

    let mut term = ratatui::init();
    let result = run_loop(&mut term, &mut state, msg_rx);
    ratatui::restore();

    if state.capture.is_open() {
        warn!("Exited with {} still open", state.capture.surface_name());
    }
    info!("Quill exiting");
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Signal handler and save callbacks
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }

    Ok(())
}
