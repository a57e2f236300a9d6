use crate::domain::model::{ProbeRequest, RawResponse, ServiceRegistry};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 送出一個請求並拿回原始回應；非 2xx 不算錯誤
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: &ProbeRequest) -> Result<RawResponse>;
}

pub trait RegistryProvider {
    fn registry(&self) -> Result<ServiceRegistry>;
}
