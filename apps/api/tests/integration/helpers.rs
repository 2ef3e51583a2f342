use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use masjid_map_api::{
    config::Config,
    domain::dataset::{entity::DatasetKind, errors::SourceError, source::DatasetSource},
    presentation::http::{routes::create_router, state::AppState},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::{collections::HashMap, sync::Arc};
use tower::ServiceExt;

#[derive(Clone)]
enum Canned {
    Document(Value),
    Status(u16),
    Garbled,
}

/// Dataset source answering from the JSON fixtures, with per-dataset failures on demand.
#[derive(Clone)]
pub struct FixtureSource {
    documents: HashMap<DatasetKind, Canned>,
}

fn fixture(raw: &str) -> Canned {
    Canned::Document(serde_json::from_str(raw).expect("fixture is valid json"))
}

impl FixtureSource {
    pub fn healthy() -> Self {
        let documents = HashMap::from([
            (
                DatasetKind::Mosques,
                fixture(include_str!("../fixtures/mosques.json")),
            ),
            (
                DatasetKind::Carparks,
                fixture(include_str!("../fixtures/carparks.json")),
            ),
            (
                DatasetKind::Musollas,
                fixture(include_str!("../fixtures/musollas.json")),
            ),
        ]);
        Self { documents }
    }

    pub fn failing_with_status(mut self, dataset: DatasetKind, status: u16) -> Self {
        self.documents.insert(dataset, Canned::Status(status));
        self
    }

    pub fn garbled(mut self, dataset: DatasetKind) -> Self {
        self.documents.insert(dataset, Canned::Garbled);
        self
    }

    pub fn with_document(mut self, dataset: DatasetKind, document: Value) -> Self {
        self.documents.insert(dataset, Canned::Document(document));
        self
    }
}

#[async_trait]
impl DatasetSource for FixtureSource {
    async fn fetch(&self, dataset: DatasetKind) -> Result<Value, SourceError> {
        let url = format!("memory://{}.json", dataset);
        match self.documents.get(&dataset) {
            Some(Canned::Document(document)) => Ok(document.clone()),
            Some(Canned::Status(status)) => Err(SourceError::Status {
                status: *status,
                url,
            }),
            Some(Canned::Garbled) => Err(SourceError::InvalidJson("expected value".to_string())),
            None => Err(SourceError::NotFound(url)),
        }
    }

    fn describe(&self) -> String {
        "memory://fixtures".to_string()
    }
}

pub struct TestApp {
    pub app: Router,
    pub state: AppState,
}

fn build_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/public").to_string(),
        load_on_startup: false,
        notice_history_limit: 20,
        ..Config::default()
    }
}

pub fn spawn_app(source: FixtureSource) -> TestApp {
    let state = AppState::new(build_config(), Arc::new(source));
    TestApp {
        app: create_router(state.clone()),
        state,
    }
}

/// App with all three datasets already loaded from the fixtures.
pub async fn spawn_loaded_app() -> TestApp {
    let app = spawn_app(FixtureSource::healthy());
    let report = app.state.loader.load_all().await;
    assert_eq!(report.loaded_count(), 3, "fixtures should all load");
    app
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

pub async fn send(app: &Router, req: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(req).await.expect("request failed")
}

pub async fn read_json<T: DeserializeOwned>(res: axum::response::Response) -> T {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("failed to parse json")
}

pub async fn read_text(res: axum::response::Response) -> String {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    String::from_utf8(bytes.to_vec()).expect("invalid utf8")
}

pub async fn expect_status(
    res: axum::response::Response,
    expected: StatusCode,
) -> axum::response::Response {
    let actual = res.status();
    if actual == expected {
        return res;
    }

    let body = read_text(res).await;
    panic!(
        "HTTP status mismatch. Expected {}, got {}. Response body: {}",
        expected, actual, body
    );
}

pub fn assert_status(status: StatusCode, expected: StatusCode) {
    assert_eq!(status, expected, "expected {}, got {}", expected, status);
}
