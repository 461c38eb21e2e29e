use thiserror::Error;

/// Why a raw person record could not be turned into a ranking entry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    #[error("record does not match the persons schema: {0}")]
    Malformed(String),

    #[error("{name} has no personal records for event {event_id}")]
    MissingEvent { name: String, event_id: String },

    #[error("{name} has no {statistic} result for event {event_id}")]
    MissingStatistic {
        name: String,
        event_id: String,
        statistic: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort key: {0}")]
pub struct UnknownSortKey(pub String);

/// Add context to fetch errors
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}
