use anyhow::Result;

use apex_portrait::{app, config, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let settings = config::Settings::from_env()?;

    logging::init_logging(&settings.env)?;

    tracing::info!(
        env = ?settings.env,
        server_addr = %settings.server_addr,
        profiles_dir = %settings.profile.profiles_dir.display(),
        auto_save = settings.profile.auto_save,
        "Starting APEX portrait service"
    );

    let server_addr = settings.server_addr.clone();
    let state = app::AppState::new(settings);
    let app = app::create_app(state);

    let listener = tokio::net::TcpListener::bind(&server_addr).await?;
    tracing::info!("Listening on {}", server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
