// ABOUTME: HTTP API layer for Postforge providing REST endpoints and routing
// ABOUTME: Integration layer that depends on the agents, auth, and storage packages

use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowOrigin, Any, CorsLayer};

pub mod auth_handlers;
pub mod generate_handlers;
pub mod health;
pub mod keys_handlers;
pub mod response;
pub mod state;

pub use state::AppState;

/// Creates the API key storage router.
/// These routes allow credentialed cross-origin requests, so the origin is
/// mirrored instead of wildcarded (tower-http rejects `Any` with credentials).
fn create_keys_router() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/save-api-keys", post(keys_handlers::save_api_keys))
        .route("/profile", get(keys_handlers::get_profile))
        .layer(cors)
}

/// Creates the full application router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let open_routes = Router::new()
        .route("/", get(health::home))
        .route("/generate", post(generate_handlers::generate_posts))
        .route("/signup", post(auth_handlers::signup))
        .route("/login", get(auth_handlers::login_info))
        .layer(cors);

    Router::new()
        .merge(open_routes)
        .merge(create_keys_router())
        .fallback(response::not_found)
        .layer(response::create_panic_handler())
        .with_state(state)
}
