use axum::{
    routing::get,
    Router,
    extract::State,
    response::Response,
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::api::response;
use crate::error::Result;
use crate::feed::fetch_latest_item;
use crate::verse::extract_verse;
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/verse", get(verse_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn verse_handler(State(state): State<AppState>) -> Result<Response> {
    let start_time = std::time::Instant::now();

    match process_verse_request(&state).await {
        Ok(verse) => {
            info!(elapsed = ?start_time.elapsed(), chars = verse.len(), "Served verse");
            Ok(response::ok(verse))
        }
        Err(err) => {
            warn!(elapsed = ?start_time.elapsed(), error = %err, "Failed to fetch verse");
            Err(err)
        }
    }
}

async fn process_verse_request(state: &AppState) -> Result<String> {
    let item = fetch_latest_item(&state.config.feed_url).await?;
    info!(title = %item.title, pub_date = %item.pub_date, "Extracting verse from latest item");
    extract_verse(&item.content_encoded)
}

async fn health_handler() -> &'static str {
    "OK"
}
