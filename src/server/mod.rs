//! HTTP server: blog API plus static marketing site

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{Path as UrlPath, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::error::Error;
use crate::store::DataSource;
use crate::Site;

/// Shared request state
struct AppState {
    data: DataSource,
}

/// Start the site server
pub async fn start(site: &Site, ip: &str, port: u16) -> anyhow::Result<()> {
    let data = site.data_source()?;
    let app = router(data, &site.public_dir);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router
///
/// Anything outside `/api` falls through to the static marketing site.
pub fn router<P: AsRef<Path>>(data: DataSource, public_dir: P) -> Router {
    let state = Arc::new(AppState { data });

    Router::new()
        .route("/api/blog/posts", get(list_posts))
        .route("/api/blog/posts/:slug", get(get_post))
        .fallback_service(
            ServeDir::new(public_dir.as_ref()).append_index_html_on_directories(true),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /api/blog/posts
async fn list_posts(State(state): State<Arc<AppState>>) -> Response {
    match state.data.list() {
        Ok(posts) => Json(posts).into_response(),
        Err(e) => {
            tracing::error!("Error fetching blog posts: {}", e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch blog posts",
            )
        }
    }
}

/// GET /api/blog/posts/:slug
async fn get_post(
    UrlPath(slug): UrlPath<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.data.get(&slug) {
        Ok(post) => Json(post).into_response(),
        Err(Error::NotFound) => error_response(StatusCode::NOT_FOUND, "Blog post not found"),
        Err(e) => {
            tracing::error!("Error fetching blog post '{}': {}", slug, e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch blog post",
            )
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}
