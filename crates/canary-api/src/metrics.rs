//! Prometheus registry and request counters for `/metrics`.
use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

pub struct Metrics {
    pub registry: Registry,
    pub page_requests: IntCounter,
    pub badge_requests: IntCounter,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();
        let page_requests = IntCounter::new(
            "canary_page_requests_total",
            "Publisher page requests served",
        )?;
        let badge_requests = IntCounter::new(
            "canary_badge_requests_total",
            "Badge images served",
        )?;
        registry.register(Box::new(page_requests.clone()))?;
        registry.register(Box::new(badge_requests.clone()))?;
        Ok(Self {
            registry,
            page_requests,
            badge_requests,
        })
    }
}

pub fn encode(registry: &Registry) -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&registry.gather(), &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).to_string())
}
