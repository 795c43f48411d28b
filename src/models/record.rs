use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One parsed dump row
///
/// Field order here is the key order of the serialized object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "type")]
    pub record_type: String,
    pub key: String,
    pub revision: String,
    pub created: String,
    pub metadata: Value,
}
