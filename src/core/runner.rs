use crate::core::plan::standard_probes;
use crate::core::render;
use crate::domain::model::{Probe, ProbeOutcome, ProbeResult, RunSummary, ServiceRegistry};
use crate::domain::ports::Transport;
use crate::utils::error::{ProbeError, Result};
use std::io::Write;

/// 依序執行固定的探測，並把每個回應寫到 sink
pub struct ProbeRunner<T: Transport> {
    transport: T,
    registry: ServiceRegistry,
}

impl<T: Transport> ProbeRunner<T> {
    pub fn new(transport: T, registry: ServiceRegistry) -> Self {
        Self {
            transport,
            registry,
        }
    }

    pub fn registry(&self) -> &ServiceRegistry {
        &self.registry
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// 只送一次請求，錯誤一律收進 `ProbeOutcome::Failed`
    pub async fn execute(&self, probe: &Probe) -> ProbeOutcome {
        let url = probe.request.url.clone();

        let response = match self.transport.execute(&probe.request).await {
            Ok(response) => response,
            Err(error) => {
                return ProbeOutcome::Failed {
                    url,
                    response: None,
                    error,
                }
            }
        };

        let payload = if probe.view.json {
            match serde_json::from_slice::<serde_json::Value>(&response.body) {
                Ok(value) => Some(value),
                Err(e) => {
                    return ProbeOutcome::Failed {
                        url,
                        response: Some(response),
                        error: ProbeError::Json(e),
                    }
                }
            }
        } else {
            None
        };

        let text = response.text();
        ProbeOutcome::Completed(ProbeResult {
            url,
            response,
            text,
            payload,
        })
    }

    /// 執行全部探測；只有寫入 sink 失敗才會回傳錯誤
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        let probes = standard_probes(&self.registry)?;
        let mut summary = RunSummary::default();

        render::write_header(out, &self.registry)?;

        for probe in &probes {
            tracing::debug!("🔎 {} -> {} {}", probe.title, probe.request.method, probe.request.url);
            render::write_title(out, &probe.title)?;

            let outcome = self.execute(probe).await;
            summary.attempted += 1;

            match &outcome {
                ProbeOutcome::Completed(result) => {
                    summary.succeeded += 1;
                    tracing::info!("✅ {}: status {}", probe.title, result.response.status);
                }
                ProbeOutcome::Failed { error, .. } => {
                    summary.failed += 1;
                    tracing::warn!("❌ {}: {}", probe.title, error);
                }
            }

            render::write_outcome(out, probe.view, &outcome)?;
        }

        render::write_done(out)?;

        tracing::info!(
            "📊 Probes attempted: {}, succeeded: {}, failed: {}",
            summary.attempted,
            summary.succeeded,
            summary.failed
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::plan::{about_probe, add_cost_probe};
    use crate::domain::model::{ProbeRequest, RawResponse};
    use async_trait::async_trait;

    struct FixedTransport(std::result::Result<RawResponse, String>);

    #[async_trait]
    impl Transport for FixedTransport {
        async fn execute(&self, _request: &ProbeRequest) -> Result<RawResponse> {
            self.0.clone().map_err(ProbeError::transport)
        }
    }

    fn runner(reply: std::result::Result<RawResponse, String>) -> ProbeRunner<FixedTransport> {
        ProbeRunner::new(FixedTransport(reply), ServiceRegistry::uniform("http://svc"))
    }

    #[test]
    fn test_execute_decodes_json_view() {
        let runner = runner(Ok(RawResponse::new(200, br#"[{"first_name":"A"}]"#.to_vec())));
        let probe = about_probe(runner.registry());

        match tokio_test::block_on(runner.execute(&probe)) {
            ProbeOutcome::Completed(result) => {
                assert_eq!(result.url, "http://svc/api/about/");
                assert_eq!(result.payload, Some(serde_json::json!([{"first_name": "A"}])));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_execute_skips_json_for_raw_view() {
        let runner = runner(Ok(RawResponse::new(201, b"not json".to_vec())));
        let probe = add_cost_probe(runner.registry()).unwrap();

        let outcome = tokio_test::block_on(runner.execute(&probe));
        assert!(outcome.is_success());
    }

    #[test]
    fn test_execute_keeps_response_on_decode_failure() {
        let runner = runner(Ok(RawResponse::new(200, b"oops".to_vec())));
        let probe = about_probe(runner.registry());

        match tokio_test::block_on(runner.execute(&probe)) {
            ProbeOutcome::Failed {
                response: Some(response),
                error: ProbeError::Json(_),
                ..
            } => assert_eq!(response.body, b"oops"),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_execute_transport_failure() {
        let runner = runner(Err("connection reset".to_string()));
        let probe = about_probe(runner.registry());

        match tokio_test::block_on(runner.execute(&probe)) {
            ProbeOutcome::Failed {
                response: None,
                error,
                ..
            } => assert_eq!(error.to_string(), "Transport error: connection reset"),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
