use super::{
    handlers::{contact, docs, health, layers, locate, map, notices, quotes, search, ws},
    middleware::logging::logging_middleware,
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use tower_http::services::ServeDir;

pub fn create_router(state: AppState) -> Router {
    let static_assets = ServeDir::new(&state.config.static_dir);

    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Map
        .route("/api/v1/map/config", get(map::map_config))
        .route("/api/v1/map/view", get(map::map_view))
        // Layers
        .route("/api/v1/layers", get(layers::list_layers))
        .route("/api/v1/layers/reload", post(layers::reload_all))
        .route("/api/v1/layers/{dataset}", get(layers::get_layer))
        .route(
            "/api/v1/layers/{dataset}/visibility",
            put(layers::set_visibility),
        )
        .route("/api/v1/layers/{dataset}/reload", post(layers::reload_layer))
        // Search
        .route("/api/v1/search", get(search::search_markers))
        .route("/api/v1/search/fly-to", post(search::fly_to))
        // Visitor interactions
        .route("/api/v1/locate", post(locate::locate_user))
        .route("/api/v1/contact", post(contact::submit_contact))
        .route("/api/v1/notices", get(notices::list_notices))
        .route("/api/v1/quotes/current", get(quotes::current_quote))
        // Docs
        .route("/api/v1/docs", get(docs::api_docs))
        // WebSocket live feed
        .route("/ws/feed", get(ws::ws_handler))
        .fallback_service(static_assets)
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
