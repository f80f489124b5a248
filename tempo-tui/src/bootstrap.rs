use tempo_client::ApiClient;

use crate::app::App;

/// Initial data load before the terminal takes over, so startup errors
/// still print to a normal screen.
pub async fn initialize_app_state(app: &mut App, client: &ApiClient) {
    app.is_loading = true;

    match client.fetch_bundle().await {
        Ok(bundle) => app.update_data(bundle),
        Err(e) => eprintln!("Warning: could not load initial data: {}", e),
    }

    app.is_loading = false;
}
