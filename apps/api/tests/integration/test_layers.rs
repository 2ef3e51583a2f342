use super::helpers::{
    FixtureSource, assert_status, expect_status, get, json_request, read_json, send, spawn_app,
    spawn_loaded_app,
};
use axum::http::StatusCode;
use masjid_map_api::{
    application::load_dataset::use_case::assemble,
    domain::dataset::{entity::DatasetKind, profile::DatasetProfile},
};
use serde_json::{Value, json};

fn labels(layer: &Value) -> Vec<String> {
    layer["markers"]
        .as_array()
        .expect("markers should be an array")
        .iter()
        .map(|m| m["label"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[tokio::test]
async fn all_layers_load_with_counts() {
    let app = spawn_loaded_app().await;

    let res = expect_status(send(&app.app, get("/api/v1/layers")).await, StatusCode::OK).await;
    let layers: Vec<Value> = read_json(res).await;

    assert_eq!(layers.len(), 3);
    for layer in &layers {
        assert_eq!(layer["markers"], 2, "unexpected count for {}", layer["dataset"]);
    }
    assert_eq!(layers[0]["icon_url"], "images/mosqueicon.png");
}

#[tokio::test]
async fn musollas_are_sorted_and_bad_rows_dropped() {
    let app = spawn_loaded_app().await;

    let res = expect_status(
        send(&app.app, get("/api/v1/layers/musollas")).await,
        StatusCode::OK,
    )
    .await;
    let layer: Value = read_json(res).await;

    assert_eq!(
        labels(&layer),
        vec!["Changi Airport T3 Prayer Room", "Raffles City Musolla"]
    );
    assert_eq!(layer["visible"], true);
    assert_eq!(layer["markers"][1]["position"]["latitude"], 1.2937);
    assert_eq!(layer["markers"][0]["icon"]["size"], json!([32, 32]));
}

#[tokio::test]
async fn mosque_popup_carries_record_fields() {
    let app = spawn_loaded_app().await;

    let res = send(&app.app, get("/api/v1/layers/mosques")).await;
    let layer: Value = read_json(res).await;
    let sultan = &layer["markers"][0];

    assert_eq!(sultan["label"], "Masjid Sultan");
    let popup = sultan["popup_html"].as_str().expect("popup should be a string");
    assert!(popup.contains("<h1>Masjid Sultan</h1>"));
    assert!(popup.contains("3 Muscat Street, Singapore 198833"));
    assert!(popup.contains("alt=\"Masjid Sultan Photo\""));
}

#[tokio::test]
async fn carpark_outage_leaves_other_layers_working() {
    let app = spawn_app(FixtureSource::healthy().failing_with_status(DatasetKind::Carparks, 503));

    let res = expect_status(
        send(&app.app, json_request("POST", "/api/v1/layers/reload", json!({}))).await,
        StatusCode::OK,
    )
    .await;
    let report: Value = read_json(res).await;
    let outcomes = report["outcomes"].as_array().expect("outcomes array");
    let carparks = outcomes
        .iter()
        .find(|o| o["dataset"] == "carparks")
        .expect("carparks outcome");
    assert_eq!(carparks["status"], "failed");
    assert!(carparks["notice_id"].is_string());

    let res = send(&app.app, get("/api/v1/notices")).await;
    let notices: Vec<Value> = read_json(res).await;
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0]["severity"], "error");
    assert_eq!(notices[0]["title"], "Error");
    assert_eq!(notices[0]["message"], "Failed to load carparks data.");

    let res = send(&app.app, get("/api/v1/layers/carparks")).await;
    assert_status(res.status(), StatusCode::NOT_FOUND);

    let res = send(&app.app, get("/api/v1/layers/mosques")).await;
    assert_status(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn failed_reload_keeps_previous_markers() {
    let app = spawn_app(FixtureSource::healthy().garbled(DatasetKind::Carparks));

    let document: Value =
        serde_json::from_str(include_str!("../fixtures/carparks.json")).expect("fixture");
    let records = document["carparks"].as_array().cloned().unwrap_or_default();
    let previous = assemble(DatasetProfile::for_kind(DatasetKind::Carparks), records);
    app.state
        .registry
        .register(DatasetKind::Carparks, previous.markers);

    let res = expect_status(
        send(
            &app.app,
            json_request("POST", "/api/v1/layers/carparks/reload", json!({})),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    let outcome: Value = read_json(res).await;
    assert_eq!(outcome["status"], "failed");

    let res = send(&app.app, get("/api/v1/layers/carparks")).await;
    let layer: Value = read_json(res).await;
    assert_eq!(labels(&layer), vec!["ACB", "BM29"]);
}

#[tokio::test]
async fn document_without_collection_is_a_shape_failure() {
    let source = FixtureSource::healthy()
        .with_document(DatasetKind::Mosques, json!({ "masjids": [] }));
    let app = spawn_app(source);

    let res = send(
        &app.app,
        json_request("POST", "/api/v1/layers/mosques/reload", json!({})),
    )
    .await;
    let outcome: Value = read_json(res).await;

    assert_eq!(outcome["status"], "failed");
    assert_eq!(outcome["markers"], 0);
    assert_eq!(app.state.notices.recent().len(), 1);
}

#[tokio::test]
async fn unknown_dataset_is_not_found() {
    let app = spawn_loaded_app().await;

    let res = send(&app.app, get("/api/v1/layers/churches")).await;
    assert_status(res.status(), StatusCode::NOT_FOUND);

    let res = send(
        &app.app,
        json_request("POST", "/api/v1/layers/churches/reload", json!({})),
    )
    .await;
    assert_status(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn layer_toggle_hides_and_shows_on_the_map() {
    let app = spawn_loaded_app().await;

    let res = expect_status(
        send(
            &app.app,
            json_request(
                "PUT",
                "/api/v1/layers/carparks/visibility",
                json!({ "visible": false }),
            ),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    let body: Value = read_json(res).await;
    assert_eq!(body["visible"], false);

    let view: Value = read_json(send(&app.app, get("/api/v1/map/view")).await).await;
    let shown: Vec<&str> = view["layers"]
        .as_array()
        .expect("layers array")
        .iter()
        .filter_map(|l| l["dataset"].as_str())
        .collect();
    assert_eq!(shown, vec!["mosques", "musollas"]);

    let res = send(
        &app.app,
        json_request(
            "PUT",
            "/api/v1/layers/carparks/visibility",
            json!({ "visible": true }),
        ),
    )
    .await;
    let body: Value = read_json(res).await;
    assert_eq!(body["visible"], true);

    let layer: Value = read_json(send(&app.app, get("/api/v1/layers/carparks")).await).await;
    assert_eq!(layer["markers"].as_array().map(Vec::len), Some(2));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn toggle_racing_a_reload_shows_the_registered_set() {
    let app = spawn_loaded_app().await;

    let toggles: Vec<_> = (0..32)
        .map(|_| {
            let router = app.app.clone();
            tokio::spawn(async move {
                send(
                    &router,
                    json_request(
                        "PUT",
                        "/api/v1/layers/musollas/visibility",
                        json!({ "visible": true }),
                    ),
                )
                .await
                .status()
            })
        })
        .collect();
    let registry = app.state.registry.clone();
    tokio::task::spawn_blocking(move || registry.register(DatasetKind::Musollas, Vec::new()))
        .await
        .expect("register task panicked");

    for toggle in toggles {
        assert_status(toggle.await.expect("toggle task panicked"), StatusCode::OK);
    }

    let view: Value = read_json(send(&app.app, get("/api/v1/map/view")).await).await;
    let musollas = view["layers"]
        .as_array()
        .expect("layers array")
        .iter()
        .find(|l| l["dataset"] == "musollas")
        .expect("musollas displayed");
    assert_eq!(musollas["markers"], 0);
}
