use anyhow::Result;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{info, warn};

use camera_settings_server::config::Config;
use camera_settings_server::handlers::router;
use camera_settings_server::state::AppState;
use camera_settings_server::utils::logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::load();
    let _guards = init_logging(&config.log_level);

    if config.openai_api_key.trim().is_empty() {
        warn!("OPENAI_API_KEY is not set; completion requests will fail");
    }

    let port = config.port;
    let state = AppState::new(config)?;
    let app = router(state);

    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Camera settings server running on http://localhost:{port}");
    axum::serve(listener, app).await?;

    Ok(())
}
