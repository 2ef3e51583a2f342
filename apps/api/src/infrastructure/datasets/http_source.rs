use crate::domain::dataset::entity::DatasetKind;
use crate::domain::dataset::errors::SourceError;
use crate::domain::dataset::source::DatasetSource;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Fetches `{base_url}/{dataset}.json` over plain HTTP GET.
pub struct HttpDatasetSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpDatasetSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url_for(&self, dataset: DatasetKind) -> String {
        format!("{}/{}.json", self.base_url, dataset.name())
    }
}

#[async_trait]
impl DatasetSource for HttpDatasetSource {
    async fn fetch(&self, dataset: DatasetKind) -> Result<Value, SourceError> {
        let url = self.url_for(dataset);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(url));
        }
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url,
            });
        }

        response.json::<Value>().await.map_err(|e| {
            if e.is_decode() {
                SourceError::InvalidJson(e.to_string())
            } else {
                SourceError::Network(e.to_string())
            }
        })
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}
