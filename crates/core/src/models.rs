use serde::{Deserialize, Serialize};

/// One entry of a manifest chunk. Immutable once built; the `description`
/// and `note` fields are left empty for hand-editing in the merged manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub note: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub size: u64,
    pub tags: Vec<String>,
    pub created: String,
}

#[derive(Debug, Clone, Default)]
pub struct PipelineSummary {
    pub discovered: usize,
    pub matched: usize,
    pub written: usize,
}
