use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use super::action_queue::channel;
use super::actions::run_action;
use super::views::handle_view_key;

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &tempo_client::ApiClient,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();

    // Anchor for the stopwatch cadence. The accumulator below catches up
    // in whole seconds, so a slow frame never skips or doubles a tick.
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if app.is_loading {
            app.throbber_state.calc_next();
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handle_view_key(key, app, &action_tx);
            }
        }

        while last_tick.elapsed() >= Duration::from_secs(1) {
            app.stopwatch.tick();
            last_tick += Duration::from_secs(1);
        }

        app.prune_toasts();

        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app, client).await;
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
