use crate::domain::model::{HttpMethod, ProbeRequest, RawResponse};
use crate::domain::ports::Transport;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// 以 reqwest 實作的 Transport，不設定逾時，沿用 reqwest 預設值
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: &ProbeRequest) -> Result<RawResponse> {
        let builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };

        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        tracing::debug!("Sending {} {}", request.method, request.url);
        let response = builder.send().await?;
        let status = response.status().as_u16();
        tracing::debug!("Response status: {}", status);

        let body = response.bytes().await?;

        Ok(RawResponse::new(status, body.to_vec()))
    }
}
