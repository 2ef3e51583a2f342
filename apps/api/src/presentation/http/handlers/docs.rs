use axum::Json;

pub async fn api_docs() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Masjid Map API",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/health": { "get": { "summary": "Health check with per-layer marker counts" } },
            "/api/v1/map/config": { "get": { "summary": "Initial view, tiles, routing waypoints and layer catalogue" } },
            "/api/v1/map/view": { "get": { "summary": "Layers currently displayed and last camera target" } },
            "/api/v1/layers": { "get": { "summary": "Registry summary for mosques, carparks and musollas" } },
            "/api/v1/layers/reload": { "post": { "summary": "Reload all datasets concurrently" } },
            "/api/v1/layers/{dataset}": { "get": { "summary": "Markers of one layer" } },
            "/api/v1/layers/{dataset}/visibility": { "put": { "summary": "Show or hide a layer on the map" } },
            "/api/v1/layers/{dataset}/reload": { "post": { "summary": "Reload one dataset (409 while a reload is running)" } },
            "/api/v1/search": { "get": { "summary": "Search marker labels (q, limit)" } },
            "/api/v1/search/fly-to": { "post": { "summary": "Move the map camera to a location" } },
            "/api/v1/locate": { "post": { "summary": "Report a browser geolocation result" } },
            "/api/v1/contact": { "post": { "summary": "Submit the contact form" } },
            "/api/v1/notices": { "get": { "summary": "Recent user-facing notices" } },
            "/api/v1/quotes/current": { "get": { "summary": "Current hadith quote" } },
            "/api/v1/docs": { "get": { "summary": "OpenAPI spec" } },
            "/ws/feed": { "get": { "summary": "WebSocket feed of map and notice events" } }
        }
    }))
}
