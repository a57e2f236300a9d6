use crate::domain::model::{Probe, ProbeRequest, ProbeView, ServiceName, ServiceRegistry};
use crate::utils::error::Result;
use serde::Serialize;

pub const TEST_USER_ID: u64 = 123123;
pub const REPORT_YEAR: u32 = 2026;
pub const REPORT_MONTH: u32 = 1;

/// `POST /api/add/` 的請求內容
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCostItem {
    pub userid: u64,
    pub description: String,
    pub category: String,
    pub sum: serde_json::Number,
}

impl NewCostItem {
    pub fn sample() -> Self {
        Self {
            userid: TEST_USER_ID,
            description: "milk 9".to_string(),
            category: "food".to_string(),
            sum: serde_json::Number::from(8u64),
        }
    }

    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

pub fn about_probe(registry: &ServiceRegistry) -> Probe {
    Probe {
        title: "testing getting the about".to_string(),
        request: ProbeRequest::get(registry.url(ServiceName::Admin, "/api/about/")),
        view: ProbeView::JSON,
    }
}

pub fn report_url(registry: &ServiceRegistry) -> String {
    registry.url(
        ServiceName::Costs,
        &format!(
            "/api/report/?id={}&year={}&month={}",
            TEST_USER_ID, REPORT_YEAR, REPORT_MONTH
        ),
    )
}

pub fn report_probe(registry: &ServiceRegistry, round: usize) -> Probe {
    Probe {
        title: format!("testing getting the report - {}", round),
        request: ProbeRequest::get(report_url(registry)),
        view: ProbeView::TEXT,
    }
}

pub fn add_cost_probe(registry: &ServiceRegistry) -> Result<Probe> {
    Ok(Probe {
        title: "testing adding cost item".to_string(),
        request: ProbeRequest::post_json(
            registry.url(ServiceName::Costs, "/api/add/"),
            NewCostItem::sample().to_json()?,
        ),
        view: ProbeView::RAW,
    })
}

/// 固定順序：about、report、add、再一次 report
pub fn standard_probes(registry: &ServiceRegistry) -> Result<Vec<Probe>> {
    Ok(vec![
        about_probe(registry),
        report_probe(registry, 1),
        add_cost_probe(registry)?,
        report_probe(registry, 2),
    ])
}
