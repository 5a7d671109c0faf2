//! Application State
//!
//! The sample document is built once at startup and shared read-only.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Version reported in `serverInfo`.
pub const API_VERSION: &str = "1.0.0";

/// ISO-8601 timestamp with millisecond precision and a `Z` suffix.
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// The constant payload served by `/api/data`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleDocument {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: String,
    pub data: Vec<SampleItem>,
    pub server_info: ServerInfo,
}

#[derive(Debug, Clone, Serialize)]
pub struct SampleItem {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    pub version: &'static str,
    pub environment: String,
    pub api_endpoint: &'static str,
}

impl SampleDocument {
    /// Builds the document, stamping it with the current time.
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: "Backend is working!",
            timestamp: iso_timestamp(),
            data: vec![
                SampleItem {
                    id: 1,
                    name: "Item 1",
                    description: "This is the first item",
                },
                SampleItem {
                    id: 2,
                    name: "Item 2",
                    description: "This is the second item",
                },
                SampleItem {
                    id: 3,
                    name: "Item 3",
                    description: "This is the third item",
                },
            ],
            server_info: ServerInfo {
                version: API_VERSION,
                environment: environment.into(),
                api_endpoint: "/api/data",
            },
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    sample: SampleDocument,
}

impl AppState {
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(InnerState {
                sample: SampleDocument::new(environment),
            }),
        }
    }

    /// Get the sample document.
    pub fn sample(&self) -> &SampleDocument {
        &self.inner.sample
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new("development")
    }
}
