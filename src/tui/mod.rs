// Module declarations
pub mod widgets;

pub mod action;
pub mod constants;
pub mod effects;
pub mod keys;
pub mod reducer;
pub mod reducers;
pub mod runtime;
pub mod state;
pub mod view;

#[cfg(test)]
pub mod testing;


pub use action::Action;
pub use effects::{DataEffects, Effect};
pub use keys::key_to_action;
pub use reducer::reduce;
pub use runtime::Runtime;
pub use state::AppState;

use std::io;
use std::sync::Arc;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use crate::config::Config;
use crate::data_provider::LeaderboardProvider;
use constants::{ANIMATION_FRAME_INTERVAL, IDLE_POLL_INTERVAL};

/// Main entry point for TUI mode
pub async fn run(
    client: Arc<dyn LeaderboardProvider>,
    config: Config,
) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let data_effects = Arc::new(DataEffects::new(client));
    let initial_state = AppState::new(config);
    let mut runtime = Runtime::new(initial_state, data_effects);

    // Trigger initial data load
    runtime.dispatch(Action::RefreshData);

    #[cfg(feature = "development")]
    let mut screenshot_requested = false;

    // Main loop
    let result = loop {
        // Process any actions from effects FIRST (so data loads trigger re-render)
        let actions_processed = runtime.process_actions();
        if actions_processed > 0 {
            tracing::debug!("LOOP: Processed {} actions", actions_processed);
        }

        let mut rendered = None;
        if let Err(e) = terminal.draw(|f| {
            let area = f.area();
            rendered = Some(view::render(runtime.state(), area, f.buffer_mut()));

            #[cfg(feature = "development")]
            if screenshot_requested {
                screenshot_requested = false;
                let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
                let filename = format!("lbtop-screenshot-{}.txt", timestamp);
                match crate::dev::screenshot::save_buffer_screenshot(f.buffer_mut(), area, &filename) {
                    Ok(()) => tracing::info!("Screenshot saved to {}", filename),
                    Err(e) => tracing::error!("Failed to save screenshot: {}", e),
                }
            }
        }) {
            break Err(e);
        }

        // Report the drawn frame when a jump waits for it or the table was resized
        if let Some(frame) = rendered {
            let state = runtime.state();
            if state.ui.jump.is_awaiting_render() || state.ui.viewport_rows != frame.viewport_rows {
                tracing::debug!("LOOP: Frame rendered with {} rows", frame.row_ids.len());
                runtime.dispatch(Action::ViewRendered {
                    row_ids: frame.row_ids,
                    viewport_rows: frame.viewport_rows,
                });
                continue;
            }
        }

        // If actions were processed, continue loop immediately to check for more
        if actions_processed > 0 {
            continue;
        }

        let animating = runtime.state().ui.scroll.is_animating();
        let timeout = if animating { ANIMATION_FRAME_INTERVAL } else { IDLE_POLL_INTERVAL };

        // Poll for keyboard events
        let ready = match event::poll(timeout) {
            Ok(ready) => ready,
            Err(e) => break Err(e),
        };
        if !ready {
            if animating {
                runtime.dispatch(Action::Tick);
            }
            continue;
        }

        let key = match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => key,
            Ok(_) => continue,
            Err(e) => break Err(e),
        };

        #[cfg(feature = "development")]
        {
            use crossterm::event::{KeyCode, KeyModifiers};
            if key.code == KeyCode::Char('S') && key.modifiers.contains(KeyModifiers::SHIFT) {
                tracing::info!("Screenshot requested via Shift-S");
                screenshot_requested = true;
                continue;
            }
        }

        // Convert key to action
        if let Some(action) = key_to_action(key, runtime.state()) {
            let should_quit = matches!(action, Action::Quit);
            runtime.dispatch(action);
            if should_quit {
                tracing::debug!("ACTION: Quitting application");
                break Ok(());
            }
        }
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
