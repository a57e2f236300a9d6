use std::fmt;

pub const DEFAULT_LOGS_URL: &str = "https://logs-service-michael.onrender.com";
pub const DEFAULT_USERS_URL: &str = "https://users-service-michael.onrender.com";
pub const DEFAULT_COSTS_URL: &str = "https://costs-service-michael.onrender.com";
pub const DEFAULT_ADMIN_URL: &str = "https://admin-service-michael.onrender.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceName {
    Logs,
    Users,
    Costs,
    Admin,
}

impl ServiceName {
    pub const ALL: [ServiceName; 4] = [
        ServiceName::Logs,
        ServiceName::Users,
        ServiceName::Costs,
        ServiceName::Admin,
    ];

    /// 輸出檔開頭使用的代號 (a/b/c/d)
    pub fn label(self) -> char {
        match self {
            ServiceName::Logs => 'a',
            ServiceName::Users => 'b',
            ServiceName::Costs => 'c',
            ServiceName::Admin => 'd',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ServiceName::Logs => "logs",
            ServiceName::Users => "users",
            ServiceName::Costs => "costs",
            ServiceName::Admin => "admin",
        }
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 四個服務的 base URL，建立後不可變
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRegistry {
    logs: String,
    users: String,
    costs: String,
    admin: String,
}

impl ServiceRegistry {
    pub fn new(
        logs: impl Into<String>,
        users: impl Into<String>,
        costs: impl Into<String>,
        admin: impl Into<String>,
    ) -> Self {
        Self {
            logs: logs.into(),
            users: users.into(),
            costs: costs.into(),
            admin: admin.into(),
        }
    }

    /// 四個服務都指向同一個 base URL，測試時對 mock server 很方便
    pub fn uniform(base: impl Into<String>) -> Self {
        let base = base.into();
        Self::new(base.clone(), base.clone(), base.clone(), base)
    }

    pub fn base_url(&self, service: ServiceName) -> &str {
        match service {
            ServiceName::Logs => &self.logs,
            ServiceName::Users => &self.users,
            ServiceName::Costs => &self.costs,
            ServiceName::Admin => &self.admin,
        }
    }

    pub fn url(&self, service: ServiceName, path: &str) -> String {
        format!("{}{}", self.base_url(service).trim_end_matches('/'), path)
    }

    pub fn entries(&self) -> impl Iterator<Item = (ServiceName, &str)> + '_ {
        ServiceName::ALL
            .into_iter()
            .map(move |service| (service, self.base_url(service)))
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::new(
            DEFAULT_LOGS_URL,
            DEFAULT_USERS_URL,
            DEFAULT_COSTS_URL,
            DEFAULT_ADMIN_URL,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => f.write_str("GET"),
            HttpMethod::Post => f.write_str("POST"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProbeRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<serde_json::Value>,
}

impl ProbeRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            body: None,
        }
    }

    pub fn post_json(url: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            body: Some(body),
        }
    }
}

/// Transport 回傳的原始回應，不論狀態碼都視為資料
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// 每個探測要印出哪些解碼後的內容，原始 body 一定會印
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProbeView {
    pub text: bool,
    pub json: bool,
}

impl ProbeView {
    pub const RAW: ProbeView = ProbeView {
        text: false,
        json: false,
    };
    pub const TEXT: ProbeView = ProbeView {
        text: true,
        json: false,
    };
    pub const JSON: ProbeView = ProbeView {
        text: true,
        json: true,
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct Probe {
    pub title: String,
    pub request: ProbeRequest,
    pub view: ProbeView,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult {
    pub url: String,
    pub response: RawResponse,
    pub text: String,
    pub payload: Option<serde_json::Value>,
}

#[derive(Debug)]
pub enum ProbeOutcome {
    Completed(ProbeResult),
    Failed {
        url: String,
        response: Option<RawResponse>,
        error: crate::utils::error::ProbeError,
    },
}

impl ProbeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Completed(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_order_and_labels() {
        let registry = ServiceRegistry::default();
        let entries: Vec<(char, &str)> = registry
            .entries()
            .map(|(service, url)| (service.label(), url))
            .collect();

        assert_eq!(
            entries,
            vec![
                ('a', DEFAULT_LOGS_URL),
                ('b', DEFAULT_USERS_URL),
                ('c', DEFAULT_COSTS_URL),
                ('d', DEFAULT_ADMIN_URL),
            ]
        );
    }

    #[test]
    fn test_url_trims_trailing_slash() {
        let registry = ServiceRegistry::uniform("http://localhost:3001/");
        assert_eq!(
            registry.url(ServiceName::Costs, "/api/add/"),
            "http://localhost:3001/api/add/"
        );
    }

    #[test]
    fn test_lossy_text_decode() {
        let response = RawResponse::new(200, vec![b'o', b'k', 0xff]);
        assert_eq!(response.text(), "ok\u{fffd}");
    }
}
