use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "tempo-tui")]
#[command(about = "Terminal UI for Tempo time tracking")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run against a real tempo server
    Run,
    /// Run in dev mode with local in-memory data
    Dev,
    /// Authenticate with email and password
    Login,
    /// Remove the local session and cached profile
    Logout,
    /// Print config path and create default file if missing
    ConfigPath,
}
