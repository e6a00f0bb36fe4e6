//! Request and response payloads of the block API.

use serde::{Deserialize, Serialize};

/// A block as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRecord {
    /// Block identifier.
    #[serde(rename = "_id")]
    pub id: String,

    /// Identifiers of the direct child blocks.
    #[serde(default)]
    pub children: Vec<String>,
}

/// Title payload shared by section and article blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockData {
    /// Title text.
    pub text: String,
}

/// Body of a block creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBlock {
    /// Block type (`section`, `article`, ...).
    #[serde(rename = "type")]
    pub kind: String,

    /// Block payload.
    pub data: BlockData,

    /// Parent block identifier.
    #[serde(rename = "parentId")]
    pub parent_id: String,
}

impl NewBlock {
    /// A titled block of the given type under `parent_id`.
    pub fn titled(
        kind: impl Into<String>,
        text: impl Into<String>,
        parent_id: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            data: BlockData { text: text.into() },
            parent_id: parent_id.into(),
        }
    }
}

/// Every API response wraps its payload in `{"data": ...}`.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}
