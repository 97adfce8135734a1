//! Shared test support: a scripted transport standing in for the NASA API.

// Each integration test binary uses a different subset of these helpers.
#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::sync::Arc;

use telescope_time::client::{Transport, TransportError};

/// One recorded transport call.
#[derive(Debug, Clone)]
pub struct CallRecord {
    pub url: String,
    pub at: tokio::time::Instant,
}

struct Route {
    pattern: String,
    failures_remaining: u32,
    response: Option<Value>,
}

/// Programmable [`Transport`] that routes by URL substring and records every
/// call with its (tokio) timestamp, for pacing assertions under paused time.
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<Vec<Route>>,
    calls: Mutex<Vec<CallRecord>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Requests whose URL contains `pattern` always succeed with `value`.
    pub fn respond(&self, pattern: &str, value: Value) {
        self.routes.lock().push(Route {
            pattern: pattern.to_string(),
            failures_remaining: 0,
            response: Some(value),
        });
    }

    /// Requests whose URL contains `pattern` always fail.
    pub fn fail(&self, pattern: &str) {
        self.routes.lock().push(Route {
            pattern: pattern.to_string(),
            failures_remaining: u32::MAX,
            response: None,
        });
    }

    /// Fail the first `failures` matching requests, then succeed with `value`.
    pub fn respond_after_failures(&self, pattern: &str, failures: u32, value: Value) {
        self.routes.lock().push(Route {
            pattern: pattern.to_string(),
            failures_remaining: failures,
            response: Some(value),
        });
    }

    pub fn calls(&self) -> Vec<CallRecord> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self, pattern: &str) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| c.url.contains(pattern))
            .count()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get_json(&self, url: &str) -> Result<Value, TransportError> {
        self.calls.lock().push(CallRecord {
            url: url.to_string(),
            at: tokio::time::Instant::now(),
        });

        let mut routes = self.routes.lock();
        let Some(route) = routes.iter_mut().find(|r| url.contains(&r.pattern)) else {
            return Err(TransportError::Status(404));
        };

        if route.failures_remaining > 0 {
            route.failures_remaining = route.failures_remaining.saturating_sub(1);
            return Err(TransportError::Status(503));
        }

        match &route.response {
            Some(value) => Ok(value.clone()),
            None => Err(TransportError::Status(500)),
        }
    }
}

/// A minimal APOD payload.
pub fn apod_json(title: &str) -> Value {
    json!({
        "date": "2025-03-15",
        "title": title,
        "explanation": "A luminous nebula drifts through the constellation Orion, \
                        its glow shaped by newborn stars.",
        "media_type": "image",
        "service_version": "v1",
        "url": "https://apod.nasa.gov/apod/image/example.jpg"
    })
}

/// A NEO feed payload with `count` objects under `full_date`.
pub fn neo_feed_json(full_date: &str, count: usize) -> Value {
    let neos: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "id": format!("100{i}"),
                "name": format!("(2025 AB{i})"),
                "estimated_diameter": {
                    "kilometers": {
                        "estimated_diameter_min": 0.1,
                        "estimated_diameter_max": 0.4
                    }
                },
                "is_potentially_hazardous_asteroid": i == 0,
                "close_approach_data": [{
                    "close_approach_date": full_date,
                    "relative_velocity": { "kilometers_per_hour": "45000" },
                    "miss_distance": { "kilometers": "7654321.5" }
                }]
            })
        })
        .collect();

    json!({
        "element_count": count,
        "near_earth_objects": { full_date: neos }
    })
}

/// An empty NEO feed (endpoint reachable, nothing near that date).
pub fn empty_neo_feed_json() -> Value {
    json!({ "element_count": 0, "near_earth_objects": {} })
}

/// A DONKI notifications payload with one message.
pub fn donki_json() -> Value {
    json!([{
        "messageType": "Report",
        "messageID": "20250315-AL-001",
        "messageURL": "https://webtools.ccmc.gsfc.nasa.gov/example",
        "messageIssueTime": "2025-03-15T12:00Z",
        "messageBody": "A coronal mass ejection was observed leaving the Sun."
    }])
}
