pub mod hits;
pub mod keys;
pub mod view;
pub mod widgets;

#[cfg(test)]
pub mod testing;

pub use hits::{mouse_to_action, HitMap, HitTarget};
pub use keys::key_to_action;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Config;
use crate::data_provider::GameDataProvider;
use crate::tracker::{Action, Runtime, StoreEffects, TrackerProps, TrackerState};

/// Main entry point for the live tracker
pub async fn run(
    props: TrackerProps,
    client: Arc<dyn GameDataProvider>,
    config: Config,
) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let store_effects = Arc::new(StoreEffects::new(client, props.game_id));
    let initial_state = TrackerState::with_config(props, config);
    let mut runtime = Runtime::new(initial_state, store_effects);
    let mut hits = HitMap::new();

    // Main loop
    loop {
        // Process completions first so results show on the next draw
        let actions_processed = runtime.process_actions();
        if actions_processed > 0 {
            tracing::debug!("LOOP: Processed {} actions", actions_processed);
        }

        terminal.draw(|f| {
            let area = f.area();
            view::render(area, f.buffer_mut(), runtime.state(), &mut hits);
        })?;

        if actions_processed > 0 {
            continue;
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        let action = match event::read()? {
            Event::Key(key) => key_to_action(key, runtime.state()),
            Event::Mouse(mouse) => mouse_to_action(mouse, &hits),
            _ => None,
        };

        if let Some(action) = action {
            let should_quit = matches!(action, Action::Quit);
            runtime.dispatch(action);
            if should_quit {
                tracing::debug!("ACTION: Quitting tracker");
                break;
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    Ok(())
}
