use anyhow::Context;
use clap::Parser;
use service_probe::core::session::run_session;
use service_probe::domain::ports::RegistryProvider;
use service_probe::utils::logger::{self, LogFormat};
use service_probe::{CliConfig, ReqwestTransport};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    let format = if config.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(config.verbose, format);

    tracing::info!("Starting service-probe");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let registry = config
        .registry()
        .context("failed to load the service registry")?;

    let (filename, summary) = run_session(
        ReqwestTransport::new(),
        registry,
        config.output.as_deref(),
        std::io::stdin().lock(),
        std::io::stdout(),
    )
    .await
    .context("failed to start the probe run")?;

    // 探測失敗不影響結束碼
    tracing::info!("📁 Output saved to: {}", filename);
    if summary.failed > 0 {
        tracing::warn!("{} of {} probes failed", summary.failed, summary.attempted);
    }

    Ok(())
}
