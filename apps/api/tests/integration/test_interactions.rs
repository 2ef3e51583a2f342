use super::helpers::{
    FixtureSource, assert_status, expect_status, get, json_request, read_json, send, spawn_app,
    spawn_loaded_app,
};
use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn search_ranks_prefix_matches_first() {
    let app = spawn_loaded_app().await;

    let res = expect_status(
        send(&app.app, get("/api/v1/search?q=masjid")).await,
        StatusCode::OK,
    )
    .await;
    let hits: Vec<Value> = read_json(res).await;
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|h| h["dataset"] == "mosques"));
    assert_eq!(hits[0]["zoom"], 17);

    let hits: Vec<Value> =
        read_json(send(&app.app, get("/api/v1/search?q=musolla&limit=1")).await).await;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["label"], "Raffles City Musolla");
}

#[tokio::test]
async fn empty_search_is_rejected() {
    let app = spawn_loaded_app().await;

    let res = send(&app.app, get("/api/v1/search?q=%20")).await;
    assert_status(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = read_json(res).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn fly_to_moves_the_camera() {
    let app = spawn_loaded_app().await;

    let res = expect_status(
        send(
            &app.app,
            json_request(
                "POST",
                "/api/v1/search/fly-to",
                json!({ "latitude": 1.3022, "longitude": 103.859 }),
            ),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    let target: Value = read_json(res).await;
    assert_eq!(target["zoom"], 17);

    let view: Value = read_json(send(&app.app, get("/api/v1/map/view")).await).await;
    assert_eq!(view["camera"]["position"]["latitude"], 1.3022);

    let res = send(
        &app.app,
        json_request(
            "POST",
            "/api/v1/search/fly-to",
            json!({ "latitude": 91.0, "longitude": 103.859 }),
        ),
    )
    .await;
    assert_status(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn located_user_gets_a_marker_and_accuracy_circle() {
    let app = spawn_app(FixtureSource::healthy());

    let res = expect_status(
        send(
            &app.app,
            json_request(
                "POST",
                "/api/v1/locate",
                json!({ "latitude": 1.3, "longitude": 103.8, "accuracy": 25.0 }),
            ),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    let body: Value = read_json(res).await;

    assert_eq!(body["location"]["icon"]["url"], "/images/me.png");
    assert_eq!(body["location"]["accuracy_radius"], 25.0);
    assert!(
        body["location"]["popup_html"]
            .as_str()
            .is_some_and(|p| p.contains("Your Current Location:"))
    );
    assert!(body["notice"].is_null());
}

#[tokio::test]
async fn geolocation_failure_raises_an_error_notice() {
    let app = spawn_app(FixtureSource::healthy());

    let res = send(
        &app.app,
        json_request(
            "POST",
            "/api/v1/locate",
            json!({ "error": "User denied Geolocation" }),
        ),
    )
    .await;
    let body: Value = read_json(res).await;

    assert!(body["location"].is_null());
    assert_eq!(
        body["notice"]["message"],
        "Failed to retrieve your current location."
    );
    assert_eq!(app.state.notices.recent().len(), 1);
}

#[tokio::test]
async fn contact_submission_is_acknowledged() {
    let app = spawn_app(FixtureSource::healthy());

    let res = expect_status(
        send(
            &app.app,
            json_request(
                "POST",
                "/api/v1/contact",
                json!({
                    "name": "Nur Aisyah",
                    "email": "aisyah@example.com",
                    "message": "Please add the musolla at Jurong Point.",
                    "message_type": "suggestion"
                }),
            ),
        )
        .await,
        StatusCode::ACCEPTED,
    )
    .await;
    let notice: Value = read_json(res).await;
    assert_eq!(notice["severity"], "success");
    assert_eq!(notice["title"], "Success!");
    assert_eq!(notice["message"], "Your message has been submitted.");

    let notices: Vec<Value> = read_json(send(&app.app, get("/api/v1/notices")).await).await;
    assert_eq!(notices.len(), 1);
}

#[tokio::test]
async fn invalid_contact_submission_is_rejected() {
    let app = spawn_app(FixtureSource::healthy());

    let res = send(
        &app.app,
        json_request(
            "POST",
            "/api/v1/contact",
            json!({
                "name": "Nur Aisyah",
                "email": "not-an-email",
                "message": "Hello",
                "message_type": "enquiry"
            }),
        ),
    )
    .await;
    assert_status(res.status(), StatusCode::BAD_REQUEST);
    assert!(app.state.notices.recent().is_empty());
}
