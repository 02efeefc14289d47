use tokio::net::TcpListener;
use tracing::info;
use verse_service::{
    config::Config,
    api::routes::create_router,
    telemetry,
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init_logging();

    // Load configuration
    let config = Config::load()?;
    let server_addr = config.server_addr;

    // Routes are registered once here and handed to the listener
    let app = create_router(AppState::new(config));

    let listener = TcpListener::bind(server_addr).await?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting verse extractor service on {}", server_addr
    );
    axum::serve(listener, app).await?;

    Ok(())
}
