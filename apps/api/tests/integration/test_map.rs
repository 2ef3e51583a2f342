use super::helpers::{
    FixtureSource, expect_status, get, read_json, read_text, send, spawn_app, spawn_loaded_app,
};
use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn health_reports_layer_counts() {
    let app = spawn_app(FixtureSource::healthy());

    let res = expect_status(send(&app.app, get("/health")).await, StatusCode::OK).await;
    assert!(res.headers().contains_key("x-request-id"));
    let body: Value = read_json(res).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["layers"][0]["markers"].is_null());

    app.state.loader.load_all().await;
    let body: Value = read_json(send(&app.app, get("/health")).await).await;
    assert_eq!(body["layers"][2]["dataset"], "musollas");
    assert_eq!(body["layers"][2]["markers"], 2);
    assert_eq!(body["layers"][2]["loading"], false);
}

#[tokio::test]
async fn map_config_describes_initial_view() {
    let app = spawn_loaded_app().await;

    let res = expect_status(
        send(&app.app, get("/api/v1/map/config")).await,
        StatusCode::OK,
    )
    .await;
    let config: Value = read_json(res).await;

    assert_eq!(config["center"], json!([1.3521, 103.8198]));
    assert_eq!(config["initial_zoom"], 13);
    assert_eq!(config["max_zoom"], 19);
    assert_eq!(config["search_zoom"], 17);
    assert_eq!(
        config["routing_waypoints"],
        json!([[1.3521, 103.8198], [1.2956, 103.8590]])
    );
    assert_eq!(config["icon_size"], json!([32, 32]));
    assert_eq!(config["layers"].as_array().map(Vec::len), Some(3));
    assert!(
        config["tiles"]["url"]
            .as_str()
            .is_some_and(|url| url.contains("openstreetmap"))
    );
}

#[tokio::test]
async fn incoming_request_id_is_echoed() {
    let app = spawn_app(FixtureSource::healthy());
    let id = "0194f123-4567-7abc-8def-0123456789ab";

    let req = axum::http::Request::builder()
        .uri("/api/v1/docs")
        .header("x-request-id", id)
        .body(axum::body::Body::empty())
        .expect("failed to build request");
    let res = expect_status(send(&app.app, req).await, StatusCode::OK).await;

    assert_eq!(res.headers()["x-request-id"], id);
    let docs: Value = read_json(res).await;
    assert!(docs["paths"]["/api/v1/layers/{dataset}/reload"].is_object());
}

#[tokio::test]
async fn static_front_end_is_served_as_fallback() {
    let app = spawn_app(FixtureSource::healthy());

    let res = expect_status(send(&app.app, get("/")).await, StatusCode::OK).await;
    let html = read_text(res).await;
    assert!(html.contains("<div id=\"map\">"));

    let res = send(&app.app, get("/images/missing.png")).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn current_quote_is_one_of_the_hadith() {
    let app = spawn_app(FixtureSource::healthy());

    let res = expect_status(
        send(&app.app, get("/api/v1/quotes/current")).await,
        StatusCode::OK,
    )
    .await;
    let quote: Value = read_json(res).await;

    assert!(quote["index"].as_u64().is_some_and(|i| i < 10));
    assert!(quote["quote"].as_str().is_some_and(|q| !q.is_empty()));
    assert!(
        quote["rotates_in_seconds"]
            .as_u64()
            .is_some_and(|s| (1..=10).contains(&s))
    );
}
