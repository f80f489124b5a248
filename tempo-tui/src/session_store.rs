use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
#[cfg(unix)]
use std::{io::Write, os::unix::fs::OpenOptionsExt};

use tempo_client::User;

fn root_path() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .context("Cannot determine config directory")?
        .join("tempo-tui"))
}

fn secure_write(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    #[cfg(unix)]
    {
        std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)?
            .write_all(content.as_bytes())?;
    }

    #[cfg(not(unix))]
    {
        std::fs::write(path, content)?;
    }

    Ok(())
}

pub fn session_path() -> Result<PathBuf> {
    Ok(root_path()?.join("session"))
}

pub fn user_path() -> Result<PathBuf> {
    Ok(root_path()?.join("user.json"))
}

/// Load the saved auth token. Returns None if not logged in.
pub fn load_session() -> Result<Option<String>> {
    let path = session_path()?;
    if !path.exists() {
        return Ok(None);
    }

    let token = std::fs::read_to_string(&path).context("Failed to read session file")?;
    let token = token.trim().to_string();
    if token.is_empty() {
        return Ok(None);
    }
    Ok(Some(token))
}

pub fn save_session(token: &str) -> Result<()> {
    let path = session_path()?;
    secure_write(path.as_path(), token)
}

pub fn clear_session() -> Result<()> {
    let path = session_path()?;
    if path.exists() {
        std::fs::remove_file(path)?;
    }
    Ok(())
}

/// Load the cached user profile stored at login time.
pub fn load_user() -> Result<Option<User>> {
    let path = user_path()?;
    if !path.exists() {
        return Ok(None);
    }

    let raw = std::fs::read_to_string(&path).context("Failed to read cached user profile")?;
    let user = serde_json::from_str(&raw).context("Failed to parse cached user profile")?;
    Ok(Some(user))
}

pub fn save_user(user: &User) -> Result<()> {
    let path = user_path()?;
    let raw = serde_json::to_string_pretty(user)?;
    secure_write(path.as_path(), &raw)
}

pub fn clear_user() -> Result<()> {
    let path = user_path()?;
    if path.exists() {
        std::fs::remove_file(path)?;
    }
    Ok(())
}
