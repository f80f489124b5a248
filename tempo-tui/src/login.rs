use anyhow::{Context, Result};
use std::io::Write;

use tempo_client::ApiClient;

use crate::session_store;

/// Interactive login: prompt for credentials, exchange them for a token
/// and cache both the token and the returned profile locally.
pub async fn run_login(api_url: &str) -> Result<()> {
    print!("Email: ");
    std::io::stdout().flush()?;
    let mut email = String::new();
    std::io::stdin()
        .read_line(&mut email)
        .context("Failed to read email")?;
    let email = email.trim();

    let password = rpassword::prompt_password("Password: ").context("Failed to read password")?;

    let client = ApiClient::new(api_url, None)?;
    let response = client
        .login(email, &password)
        .await
        .context("Login failed. Check your credentials and that the server is reachable.")?;

    session_store::save_session(&response.token)?;
    session_store::save_user(&response.user)?;

    println!("Login successful. Welcome, {}!", response.user.name);
    Ok(())
}
