//! HTTP route handlers for the stemplate preview service.
//!
//! The preview service exposes the tweet renderer and the helper registry over
//! HTTP so template output can be checked without running a full site build.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Json},
    routing::{get, post},
    Router,
};
use log::{error, info, warn};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::registry::{HelperError, HelperRegistry};
use crate::sanitize::sanitize_for_logging;
use crate::tweet::{render_tweet_content_with, RenderOptions};

/// Shared state of the preview service.
#[derive(Debug)]
pub struct AppState {
    pub render_options: Arc<RenderOptions>,
    pub registry: HelperRegistry,
}

impl AppState {
    /// Builds the state with a registry that renders tweets using `render_options`.
    pub fn new(render_options: RenderOptions) -> Self {
        let render_options = Arc::new(render_options);
        Self {
            registry: HelperRegistry::with_render_options(Arc::clone(&render_options)),
            render_options,
        }
    }
}

/// Request body for `POST /helpers/{name}`.
#[derive(Debug, Deserialize)]
pub struct HelperCall {
    #[serde(default)]
    pub args: Vec<Value>,
}

/// Builds the HTTP application with all routes and middleware.
///
/// # Routes
///
/// - `GET /`: Welcome message
/// - `GET /health`: Health check
/// - `POST /render/tweet`: Renders the raw request body as tweet HTML
/// - `GET /helpers`: Lists registered helper names
/// - `POST /helpers/:name`: Calls a helper with `{"args": [...]}`
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route("/health", get(handle_health))
        .route("/render/tweet", post(handle_render_tweet))
        .route("/helpers", get(handle_list_helpers))
        .route("/helpers/:name", post(handle_call_helper))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// Handles GET requests to the root `/` endpoint.
///
/// # Returns
///
/// A static welcome string.
pub async fn handle_root() -> &'static str {
    "stemplate preview service"
}

/// Handles GET requests to the `/health` endpoint.
///
/// This endpoint provides a health check for the service, returning the current
/// status and service name.
///
/// # Example Response
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "stemplate"
/// }
/// ```
pub async fn handle_health() -> Json<Value> {
    Json(json!({"status": "healthy", "service": "stemplate"}))
}

/// Handles POST requests to the `/render/tweet` endpoint.
///
/// The request body is the raw tweet text; the response is the rendered HTML
/// fragment.
pub async fn handle_render_tweet(State(state): State<Arc<AppState>>, body: String) -> Html<String> {
    info!(
        "Rendering tweet preview: {}",
        sanitize_for_logging(&body, 80)
    );
    Html(render_tweet_content_with(&body, &state.render_options))
}

/// Handles GET requests to the `/helpers` endpoint.
///
/// # Returns
///
/// A JSON array with the names of all registered helpers, sorted.
pub async fn handle_list_helpers(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!(state.registry.names()))
}

/// Handles POST requests to the `/helpers/:name` endpoint.
///
/// # Success Response
///
/// ```json
/// {
///   "status": "success",
///   "result": "1,234"
/// }
/// ```
///
/// # Error Response
///
/// ```json
/// {
///   "status": "error",
///   "message": "unknown helper 'nope'"
/// }
/// ```
///
/// Unknown helpers answer 404, bad arguments 400 and helper failures 500.
pub async fn handle_call_helper(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(call): Json<HelperCall>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match state.registry.call(&name, &call.args) {
        Ok(result) => {
            info!("Helper '{}' called successfully", name);
            Ok(Json(json!({"status": "success", "result": result})))
        }
        Err(e) => {
            let status = match e {
                HelperError::UnknownHelper(_) => StatusCode::NOT_FOUND,
                HelperError::WrongArgumentCount { .. } | HelperError::InvalidArgument { .. } => {
                    StatusCode::BAD_REQUEST
                }
                HelperError::Failed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            };
            if status.is_server_error() {
                error!("Helper call failed: {}", e);
            } else {
                warn!("Rejected helper call: {}", e);
            }
            Err((
                status,
                Json(json!({"status": "error", "message": e.to_string()})),
            ))
        }
    }
}
