use crate::config::SdkConfig;
use crate::domain::ports::Transport;
use crate::domain::record::Record;
use crate::request::Request;
use crate::utils::error::{Result, SdkError};
use crate::utils::validation::Validate;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use url::Url;

/// 以 reqwest 實作的 transport
pub struct HttpTransport {
    config: SdkConfig,
    client: Client,
}

impl HttpTransport {
    pub fn new(config: SdkConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            client: Client::new(),
        })
    }

    fn endpoint(&self, request: &dyn Request) -> Result<Url> {
        let base_url = self.config.base_url();
        Url::parse(&base_url)
            .and_then(|base| base.join(&request.uri()))
            .map_err(|e| SdkError::InvalidConfigValueError {
                field: "api.url".to_string(),
                value: base_url,
                reason: e.to_string(),
            })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &dyn Request) -> Result<Record> {
        let endpoint = self.endpoint(request)?;
        let method = request.method();

        let mut builder = self
            .client
            .request(method.into(), endpoint.clone())
            .basic_auth(
                &self.config.credentials.username,
                Some(&self.config.credentials.password),
            )
            .header(ACCEPT, "application/json");

        if let Some(body) = request.body() {
            builder = builder.json(&body);
        }

        // 設定超時
        if let Some(timeout) = self.config.api.timeout_seconds {
            builder = builder.timeout(std::time::Duration::from_secs(timeout));
        }

        tracing::debug!("📡 {} {}", method.as_str(), endpoint);
        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!("📡 API response status: {}", status);

        let body = response.text().await?;
        if !status.is_success() {
            tracing::error!("❌ {} {} failed with status {}", method.as_str(), endpoint, status);
            return Err(SdkError::UnexpectedResponse {
                status: status.as_u16(),
                body,
            });
        }

        if body.trim().is_empty() {
            return Ok(Record::new());
        }
        Record::from_json_str(&body)
    }
}
