use serde::{Deserialize, Serialize};

/// One catalogued dataset record as returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataEntry {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributor: Option<String>,
    /// ISO-8601 creation / publication timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downloads: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

impl DataEntry {
    /// Download count, absent counts as zero.
    pub fn download_count(&self) -> u64 {
        self.downloads.unwrap_or(0)
    }

    pub fn is_verified(&self) -> bool {
        self.verified == Some(true)
    }
}

/// Body of a create request. The service assigns id, date and counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntry {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}
