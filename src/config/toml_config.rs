use crate::domain::model::{ServiceName, ServiceRegistry};
use crate::domain::ports::RegistryProvider;
use crate::utils::error::{ProbeError, Result};
use crate::utils::validation::{validate_url, Validate};
use serde::Deserialize;
use std::path::Path;

/// 服務位址覆寫檔，沒寫的服務沿用預設 URL
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub services: ServicesConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServicesConfig {
    pub logs: Option<String>,
    pub users: Option<String>,
    pub costs: Option<String>,
    pub admin: Option<String>,
}

impl RegistryConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ProbeError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${COSTS_SERVICE_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ProbeError::Config {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    fn override_for(&self, service: ServiceName) -> Option<&str> {
        match service {
            ServiceName::Logs => self.services.logs.as_deref(),
            ServiceName::Users => self.services.users.as_deref(),
            ServiceName::Costs => self.services.costs.as_deref(),
            ServiceName::Admin => self.services.admin.as_deref(),
        }
    }

    pub fn to_registry(&self) -> ServiceRegistry {
        let defaults = ServiceRegistry::default();
        let pick = |service| {
            self.override_for(service)
                .unwrap_or_else(|| defaults.base_url(service))
                .to_string()
        };

        ServiceRegistry::new(
            pick(ServiceName::Logs),
            pick(ServiceName::Users),
            pick(ServiceName::Costs),
            pick(ServiceName::Admin),
        )
    }
}

impl Validate for RegistryConfig {
    fn validate(&self) -> Result<()> {
        for service in ServiceName::ALL {
            if let Some(url) = self.override_for(service) {
                validate_url(&format!("services.{}", service), url)?;
            }
        }
        Ok(())
    }
}

impl Validate for ServiceRegistry {
    fn validate(&self) -> Result<()> {
        for (service, url) in self.entries() {
            validate_url(&format!("services.{}", service), url)?;
        }
        Ok(())
    }
}

impl RegistryProvider for RegistryConfig {
    fn registry(&self) -> Result<ServiceRegistry> {
        self.validate()?;
        Ok(self.to_registry())
    }
}
