use chrono::Utc;
use serde::Serialize;

use crate::recon::classifier::Rejection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Candidate,
    Rejected,
}

/// One classification decision, written as a JSONL line.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceEvent {
    pub timestamp_ms: i64,

    /// Position of the node in document order
    pub node_index: usize,
    pub tag: String,

    pub decision: Decision,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl TraceEvent {
    pub fn candidate(node_index: usize, tag: &str) -> Self {
        Self {
            timestamp_ms: Utc::now().timestamp_millis(),
            node_index,
            tag: tag.to_string(),
            decision: Decision::Candidate,
            reason: None,
        }
    }

    pub fn rejected(node_index: usize, tag: &str, rejection: Rejection) -> Self {
        Self {
            decision: Decision::Rejected,
            reason: Some(rejection.to_string()),
            ..Self::candidate(node_index, tag)
        }
    }
}
