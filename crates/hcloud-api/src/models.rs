//! Request parameters and shared response records.
//!
//! Endpoint methods return plain JSON; the records here describe the parts of
//! those documents every resource shares, for callers that prefer to decode
//! them with `serde_json::from_value`. They accept documents in either key
//! case.

use chrono::{DateTime, SecondsFormat, Utc};
use hcloud_core::id::ActionId;
use hcloud_core::query::QueryParams;
use hcloud_core::Error;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Status of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    /// Still in progress
    Running,
    /// Finished successfully
    Success,
    /// Finished with an error
    Error,
}

impl ActionStatus {
    /// Returns the status as sent by the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Returns true once the action has stopped running.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// A resource an action operates on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResource {
    /// Resource ID.
    pub id: u64,
    /// Resource type (`server`, `volume`, ...).
    #[serde(rename = "type")]
    pub kind: String,
}

/// Error attached to a failed action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionError {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

/// An asynchronous operation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Action ID.
    pub id: ActionId,
    /// Command that was executed (e.g. `start_server`).
    pub command: String,
    /// Current status.
    pub status: ActionStatus,
    /// Progress in percent.
    pub progress: u8,
    /// Start time.
    pub started: DateTime<Utc>,
    /// End time; absent while running.
    #[serde(default)]
    pub finished: Option<DateTime<Utc>>,
    /// Affected resources.
    #[serde(default)]
    pub resources: Vec<ActionResource>,
    /// Error details for failed actions.
    #[serde(default)]
    pub error: Option<ActionError>,
}

impl Action {
    /// Returns true if the action affects the given resource.
    #[must_use]
    pub fn touches(&self, kind: &str, id: u64) -> bool {
        self.resources.iter().any(|r| r.kind == kind && r.id == id)
    }
}

/// Pagination block of list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page.
    pub page: u32,
    /// Entries per page.
    #[serde(alias = "per-page")]
    pub per_page: u32,
    /// Previous page, if any.
    #[serde(default, alias = "previous-page")]
    pub previous_page: Option<u32>,
    /// Next page, if any.
    #[serde(default, alias = "next-page")]
    pub next_page: Option<u32>,
    /// Last page, if known.
    #[serde(default, alias = "last-page")]
    pub last_page: Option<u32>,
    /// Total entries, if known.
    #[serde(default, alias = "total-entries")]
    pub total_entries: Option<u64>,
}

/// `meta` object of list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Pagination details.
    pub pagination: Pagination,
}

/// Common query parameters for list endpoints.
///
/// Pages are passed through as given; the client does not walk them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListParams {
    /// Page to return.
    pub page: Option<u32>,
    /// Entries per page.
    pub per_page: Option<u32>,
    /// Exact name filter.
    pub name: Option<String>,
    /// Label selector expression.
    pub label_selector: Option<String>,
    /// Sort keys, e.g. `id:asc`.
    pub sort: Vec<String>,
    /// Status filters.
    pub status: Vec<String>,
    /// Resource-specific filters such as `type` or `include_deprecated`.
    pub filters: Vec<(String, String)>,
}

impl ListParams {
    /// Create empty parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a page.
    #[must_use]
    pub const fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size.
    #[must_use]
    pub const fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Filter by name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Filter by label selector.
    #[must_use]
    pub fn with_label_selector(mut self, selector: impl Into<String>) -> Self {
        self.label_selector = Some(selector.into());
        self
    }

    /// Add a sort key.
    #[must_use]
    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort.push(sort.into());
        self
    }

    /// Add a status filter.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status.push(status.into());
        self
    }

    /// Add a resource-specific filter.
    #[must_use]
    pub fn with_filter(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.filters.push((key.into(), value.to_string()));
        self
    }

    /// Convert to query pairs.
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_opt("page", self.page);
        params.push_opt("per_page", self.per_page);
        params.push_opt("name", self.name.as_deref());
        params.push_opt("label_selector", self.label_selector.as_deref());
        params.push_all("sort", &self.sort);
        params.push_all("status", &self.status);
        for (key, value) in &self.filters {
            params.push(key.as_str(), value);
        }
        params
    }
}

/// Query parameters for the server and load balancer metrics endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsParams {
    /// Metric types, e.g. `cpu`, `disk`, `network` or `open_connections`.
    pub types: Vec<String>,
    /// Start of the period.
    pub start: DateTime<Utc>,
    /// End of the period.
    pub end: DateTime<Utc>,
    /// Resolution in seconds.
    pub step: Option<u32>,
}

impl MetricsParams {
    /// Request one metric type over a period.
    #[must_use]
    pub fn new(metric: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            types: vec![metric.into()],
            start,
            end,
            step: None,
        }
    }

    /// Request an additional metric type.
    #[must_use]
    pub fn with_type(mut self, metric: impl Into<String>) -> Self {
        self.types.push(metric.into());
        self
    }

    /// Set the resolution in seconds.
    #[must_use]
    pub const fn with_step(mut self, step: u32) -> Self {
        self.step = Some(step);
        self
    }

    /// Convert to query pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if no metric type is given or the period is reversed.
    pub fn to_query(&self) -> Result<QueryParams> {
        if self.types.is_empty() {
            return Err(Error::InvalidRequest(
                "at least one metric type is required".to_string(),
            ));
        }
        if self.end < self.start {
            return Err(Error::InvalidRequest(format!(
                "metrics period ends ({}) before it starts ({})",
                self.end, self.start
            )));
        }

        let mut params = QueryParams::new();
        params.push("type", self.types.join(","));
        params.push("start", self.start.to_rfc3339_opts(SecondsFormat::Secs, true));
        params.push("end", self.end.to_rfc3339_opts(SecondsFormat::Secs, true));
        params.push_opt("step", self.step);
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn list_params_to_query() {
        let params = ListParams::new()
            .with_page(2)
            .with_per_page(50)
            .with_label_selector("env=prod")
            .with_sort("id:asc")
            .with_sort("name")
            .with_status("running")
            .with_filter("include-deprecated", true);

        let pairs: Vec<(String, String)> = params.to_query().into_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page".to_string(), "2".to_string()),
                ("per_page".to_string(), "50".to_string()),
                ("label_selector".to_string(), "env=prod".to_string()),
                ("sort".to_string(), "id:asc".to_string()),
                ("sort".to_string(), "name".to_string()),
                ("status".to_string(), "running".to_string()),
                ("include-deprecated".to_string(), "true".to_string()),
            ]
        );
        assert!(ListParams::default().to_query().is_empty());
    }

    #[test]
    fn metrics_params_to_query() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 5, 1, 1, 0, 0).unwrap();
        let params = MetricsParams::new("cpu", start, end)
            .with_type("disk")
            .with_step(60);

        let pairs = params.to_query().unwrap().into_pairs();
        assert_eq!(
            pairs,
            vec![
                ("type".to_string(), "cpu,disk".to_string()),
                ("start".to_string(), "2024-05-01T00:00:00Z".to_string()),
                ("end".to_string(), "2024-05-01T01:00:00Z".to_string()),
                ("step".to_string(), "60".to_string()),
            ]
        );
    }

    #[test]
    fn metrics_params_reject_reversed_period() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 1, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let err = MetricsParams::new("cpu", start, end).to_query().unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));

        let mut params = MetricsParams::new("cpu", end, start);
        params.types.clear();
        assert!(params.to_query().is_err());
    }

    #[test]
    fn decode_running_action() {
        let action: Action = serde_json::from_value(json!({
            "id": 13,
            "command": "start_server",
            "status": "running",
            "progress": 0,
            "started": "2016-01-30T23:50:00+00:00",
            "finished": null,
            "resources": [{"id": 42, "type": "server"}],
            "error": null
        }))
        .unwrap();

        assert_eq!(action.id, ActionId::new(13));
        assert_eq!(action.status, ActionStatus::Running);
        assert!(!action.status.is_finished());
        assert!(action.finished.is_none());
        assert!(action.touches("server", 42));
        assert!(!action.touches("volume", 42));
    }

    #[test]
    fn decode_kebab_documents() {
        let meta: Meta = serde_json::from_value(json!({
            "pagination": {
                "page": 2,
                "per-page": 25,
                "previous-page": 1,
                "next-page": null,
                "last-page": 2,
                "total-entries": 40
            }
        }))
        .unwrap();
        assert_eq!(meta.pagination.per_page, 25);
        assert_eq!(meta.pagination.previous_page, Some(1));
        assert_eq!(meta.pagination.next_page, None);
        assert_eq!(meta.pagination.total_entries, Some(40));

        let action: Action = serde_json::from_value(json!({
            "id": 7,
            "command": "attach_volume",
            "status": "success",
            "progress": 100,
            "started": "2016-01-30T23:50:00+00:00",
            "finished": "2016-01-30T23:51:00+00:00",
            "resources": [{"id": 4711, "type": "volume"}],
            "error": null
        }))
        .unwrap();
        assert!(action.touches("volume", 4711));
    }

    #[test]
    fn decode_pagination_with_nulls() {
        let meta: Meta = serde_json::from_value(json!({
            "pagination": {
                "page": 1,
                "per_page": 25,
                "previous_page": null,
                "next_page": 2,
                "last_page": 4,
                "total_entries": 100
            }
        }))
        .unwrap();

        assert_eq!(meta.pagination.next_page, Some(2));
        assert_eq!(meta.pagination.previous_page, None);
        assert_eq!(ActionStatus::Error.as_str(), "error");
    }
}
