//! Rollup job payload shapes

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A rollup job definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rollup {
    pub source_index: String,
    pub target_index: String,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Value>,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u64>,
    pub continuous: bool,
    #[serde(default)]
    pub dimensions: Vec<Value>,
    #[serde(default)]
    pub metrics: Vec<Value>,
}

/// A rollup job with its concurrency-control metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRollup {
    pub id: String,
    pub primary_term: u64,
    pub seq_no: u64,
    pub rollup: Rollup,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRollupsResponse {
    pub rollups: Vec<DocumentRollup>,
    pub total_rollups: u64,
    pub metadata: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PutRollupResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_primary_term")]
    pub primary_term: u64,
    #[serde(rename = "_seq_no")]
    pub seq_no: u64,
    pub rollup: RollupEnvelope,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollupEnvelope {
    pub rollup: Rollup,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteRollupResponse {
    pub result: String,
}

/// Mapped-field listing used by the rollup wizard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetFieldsResponse {
    pub result: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutRollupParams {
    pub rollup_id: String,
    #[serde(rename = "if_seq_no", skip_serializing_if = "Option::is_none")]
    pub if_seq_no: Option<String>,
    #[serde(rename = "if_primary_term", skip_serializing_if = "Option::is_none")]
    pub if_primary_term: Option<String>,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRollupParams {
    pub rollup_id: String,
}
