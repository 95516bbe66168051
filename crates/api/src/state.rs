//! Owned application state.
//!
//! There is no global store: `AppState` is constructed by the caller and
//! passed by reference to whatever layer needs the request record.

use serde::Serialize;

/// One completed HTTP request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestRecord {
    /// Final URL the request resolved to, query string included.
    pub url: String,
    /// HTTP method.
    pub method: String,
    /// Completion time in epoch milliseconds.
    pub completed_ms: i64,
}

/// Application-wide state with trivial lifecycle: initialized empty,
/// mutated only through [`record`](AppState::record) and the wholesale
/// [`set_requests`](AppState::set_requests), never torn down.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    requests: Vec<RequestRecord>,
}

impl AppState {
    /// An empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded requests, oldest first.
    pub fn requests(&self) -> &[RequestRecord] {
        &self.requests
    }

    /// Appends one completed request.
    pub fn record(&mut self, record: RequestRecord) {
        self.requests.push(record);
    }

    /// Replaces the request record wholesale.
    pub fn set_requests(&mut self, requests: Vec<RequestRecord>) {
        self.requests = requests;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(url: &str) -> RequestRecord {
        RequestRecord {
            url: url.to_string(),
            method: "GET".to_string(),
            completed_ms: 1_700_000_000_000,
        }
    }

    #[test]
    fn starts_empty() {
        assert!(AppState::new().requests().is_empty());
    }

    #[test]
    fn record_appends_in_order() {
        let mut state = AppState::new();
        state.record(record("http://localhost:3000/data?page=1"));
        state.record(record("http://localhost:3000/data2"));
        assert_eq!(state.requests().len(), 2);
        assert_eq!(state.requests()[0].url, "http://localhost:3000/data?page=1");
        assert_eq!(state.requests()[1].url, "http://localhost:3000/data2");
    }

    #[test]
    fn set_requests_replaces_wholesale() {
        let mut state = AppState::new();
        state.record(record("http://localhost:3000/data"));
        state.set_requests(vec![record("http://localhost:3000/data2")]);
        assert_eq!(state.requests().len(), 1);
        assert_eq!(state.requests()[0].url, "http://localhost:3000/data2");

        state.set_requests(Vec::new());
        assert!(state.requests().is_empty());
    }

    #[test]
    fn record_serializes() {
        let json = serde_json::to_value(record("http://localhost:3000/data")).unwrap();
        assert_eq!(json["method"], "GET");
        assert_eq!(json["completed_ms"], 1_700_000_000_000i64);
    }
}
