mod app;
mod bootstrap;
mod cli;
mod config;
mod login;
mod runtime;
mod session_store;
mod time_utils;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use tempo_client::{ApiClient, User};

use crate::config::TempoConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    match cli.command {
        cli::Commands::Run => run(false).await,
        cli::Commands::Dev => run(true).await,
        cli::Commands::Login => {
            let config = TempoConfig::load()?;
            login::run_login(&config.api_url).await
        }
        cli::Commands::Logout => {
            session_store::clear_session()?;
            session_store::clear_user()?;
            println!("Logged out.");
            Ok(())
        }
        cli::Commands::ConfigPath => {
            let path = TempoConfig::config_path()?;
            if !path.exists() {
                TempoConfig::default().save()?;
                println!("Created default config at {}", path.display());
            } else {
                println!("{}", path.display());
            }
            Ok(())
        }
    }
}

async fn run(dev: bool) -> Result<()> {
    let (client, user) = if dev {
        connect_dev().await?
    } else {
        connect()?
    };

    let mut app = App::new(user);
    bootstrap::initialize_app_state(&mut app, &client).await;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, &client).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Dev mode: in-memory backend, no credentials needed.
async fn connect_dev() -> Result<(ApiClient, User)> {
    let client = ApiClient::dev();
    let response = client.login("dev@example.com", "password").await?;
    Ok((client, response.user))
}

/// Real mode: requires a saved session and cached profile from `login`.
fn connect() -> Result<(ApiClient, User)> {
    let config = TempoConfig::load()?;
    let token = session_store::load_session()?
        .context("Not logged in. Run `tempo-tui login` first.")?;
    let user = session_store::load_user()?
        .context("No cached profile found. Run `tempo-tui login` again.")?;
    let client = ApiClient::new(&config.api_url, Some(token))?;
    Ok((client, user))
}
