pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::{model::ServiceRegistry, ports::RegistryProvider};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "service-probe")]
#[command(about = "Smoke-test the expense services and dump the raw responses to a file")]
pub struct CliConfig {
    #[arg(long, help = "Output file; prompts for a filename when omitted")]
    pub output: Option<String>,

    #[arg(long, help = "TOML file overriding the service base URLs")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines on stderr")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl RegistryProvider for CliConfig {
    fn registry(&self) -> Result<ServiceRegistry> {
        match &self.config {
            Some(path) => {
                tracing::debug!("Loading service registry from {}", path);
                toml_config::RegistryConfig::from_file(path)?.registry()
            }
            None => Ok(ServiceRegistry::default()),
        }
    }
}
