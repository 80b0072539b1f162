//! Managed-index explain payload shapes
//!
//! Shapes returned by the explain API describing where a managed index sits
//! in its policy's lifecycle, plus the bulk policy-change responses.

use crate::models::policy::Policy;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Per-index lifecycle metadata as reported by the explain API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplainApiManagedIndexMetaData {
    /// Value of the index's managed-policy setting; null when unmanaged
    #[serde(rename = "index.plugins.index_state_management.policy_id")]
    pub policy_id_setting: Option<String>,
    pub index: String,
    pub index_uuid: String,
    pub policy_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_seq_no: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_primary_term: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rolled_over: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<StateMetaData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionMetaData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_info: Option<RetryInfoMetaData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<Value>,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateMetaData {
    pub name: String,
    pub start_time: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionMetaData {
    pub name: String,
    pub start_time: u64,
    pub index: u64,
    pub failed: bool,
    pub consumed_retries: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryInfoMetaData {
    pub failed: bool,
    pub consumed_retries: u32,
}

/// Explain response for an explicit list of indices; unmanaged indices map
/// to no metadata
pub type ExplainResponse = HashMap<String, Option<ExplainApiManagedIndexMetaData>>;

/// Explain response over all managed indices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplainAllResponse {
    pub total_managed_indices: u64,
    #[serde(flatten)]
    pub indices: HashMap<String, ExplainApiManagedIndexMetaData>,
}

/// A managed index row as shown in the managed-indices table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedIndexItem {
    pub index: String,
    pub index_uuid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_stream: Option<String>,
    pub policy_id: String,
    pub policy_seq_no: u64,
    pub policy_primary_term: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<Policy>,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_index_meta_data: Option<ExplainApiManagedIndexMetaData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetManagedIndicesResponse {
    pub total_managed_indices: u64,
    pub managed_indices: Vec<ManagedIndexItem>,
}

/// Backend shape of a failed index in bulk policy operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendFailedIndex {
    pub index_name: String,
    pub index_uuid: String,
    pub reason: String,
}

/// UI-side shape of a failed index in bulk policy operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedIndex {
    pub index_name: String,
    pub index_uuid: String,
    pub reason: String,
}

/// UI-side summary of a bulk policy operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexUpdateResponse {
    pub updated_indices: u64,
    pub failures: bool,
    pub failed_indices: Vec<FailedIndex>,
}

pub type ApplyPolicyResponse = IndexUpdateResponse;
pub type RemovePolicyResponse = IndexUpdateResponse;
pub type ChangePolicyResponse = IndexUpdateResponse;
pub type RetryManagedIndexResponse = IndexUpdateResponse;

/// Backend retry response; `failed_indices` is absent on some versions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryResponse {
    pub failures: bool,
    pub updated_indices: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_indices: Option<Vec<BackendFailedIndex>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddResponse {
    pub failures: bool,
    pub updated_indices: u64,
    pub failed_indices: Vec<BackendFailedIndex>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoveResponse {
    pub failures: bool,
    pub updated_indices: u64,
    pub failed_indices: Vec<BackendFailedIndex>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcknowledgedResponse {
    pub acknowledged: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryParams {
    pub index: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<RetryBody>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryBody {
    pub state: String,
}
