//! Transform job payload shapes

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A transform job definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub source_index: String,
    pub target_index: String,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Value>,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_selection_query: Option<Value>,
    #[serde(default)]
    pub groups: Vec<Value>,
    #[serde(default)]
    pub aggregations: Option<Value>,
}

/// A transform job with its concurrency-control metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTransform {
    pub id: String,
    pub primary_term: u64,
    pub seq_no: u64,
    pub transform: Transform,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTransformsResponse {
    pub transforms: Vec<DocumentTransform>,
    pub total_transforms: u64,
    pub metadata: Value,
}

/// Note: the backend reports `_primary_term`/`_seq_no` as strings here,
/// unlike the numeric fields on the policy and rollup responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PutTransformResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_primary_term")]
    pub primary_term: String,
    #[serde(rename = "_seq_no")]
    pub seq_no: String,
    pub transform: TransformEnvelope,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformEnvelope {
    pub transform: Transform,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteTransformResponse {
    pub result: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewTransformResponse {
    pub documents: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutTransformParams {
    pub transform_id: String,
    #[serde(rename = "if_seq_no", skip_serializing_if = "Option::is_none")]
    pub if_seq_no: Option<String>,
    #[serde(rename = "if_primary_term", skip_serializing_if = "Option::is_none")]
    pub if_primary_term: Option<String>,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTransformParams {
    pub transform_id: String,
}
