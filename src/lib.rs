pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::ReqwestTransport;
pub use config::toml_config::RegistryConfig;
pub use core::runner::ProbeRunner;
pub use domain::model::{ServiceName, ServiceRegistry};
pub use utils::error::{ProbeError, Result};
