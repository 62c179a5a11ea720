//! The structured response contract
//!
//! Every code path out of the pipeline, from success to generator failure,
//! produces exactly this three-key shape.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Structured answer returned to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredResponse {
    /// Short helpful explanation
    pub answer: String,
    /// Policy names or sections used
    pub references: Vec<String>,
    /// Short machine-actionable token, "none" when nothing is required
    pub action_required: String,
}

impl StructuredResponse {
    /// Fixed fallback shape: the given message, no references, no action
    pub fn fallback(message: &str) -> Self {
        Self {
            answer: message.to_string(),
            references: Vec::new(),
            action_required: "none".to_string(),
        }
    }

    /// Validate a parsed JSON object against the three-key contract.
    ///
    /// Returns `None` when any required key is missing or has the wrong
    /// shape; the caller substitutes its fixed fallback.
    pub fn from_map(map: Map<String, Value>) -> Option<Self> {
        serde_json::from_value(Value::Object(map)).ok()
    }
}
