//! Index-lifecycle policy payload shapes
//!
//! The policy document is the unit the visual editor works on; each state's
//! `actions` entries stay opaque JSON because their inner shape belongs to
//! whichever plugin registered the action type.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An index-lifecycle policy document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_id: Option<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_time: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_notification: Option<Value>,
    pub default_state: String,
    pub states: Vec<PolicyState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ism_template: Option<Value>,
}

/// A state within a policy's lifecycle graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyState {
    pub name: String,
    /// Action payloads, opaque to this layer (see the action registry)
    #[serde(default)]
    pub actions: Vec<Value>,
    #[serde(default)]
    pub transitions: Vec<Transition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub state_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Value>,
}

/// A policy document with its concurrency-control metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPolicy {
    pub id: String,
    pub primary_term: u64,
    pub seq_no: u64,
    pub policy: Policy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPoliciesResponse {
    pub policies: Vec<DocumentPolicy>,
    pub total_policies: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PutPolicyResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_version")]
    pub version: u64,
    #[serde(rename = "_primary_term")]
    pub primary_term: u64,
    #[serde(rename = "_seq_no")]
    pub seq_no: u64,
    pub policy: PolicyEnvelope,
}

/// The `{ "policy": { ... } }` wrapper the backend uses for policy bodies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyEnvelope {
    pub policy: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletePolicyResponse {
    pub result: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePolicyParams {
    pub policy_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutPolicyParams {
    pub policy_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_seq_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_primary_term: Option<String>,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_policy_round_trips_wire_shape() {
        let wire = json!({
            "description": "hot to delete",
            "default_state": "hot",
            "states": [
                {
                    "name": "hot",
                    "actions": [{"rollover": {"min_index_age": "30d"}}],
                    "transitions": [{"state_name": "delete"}]
                },
                {
                    "name": "delete",
                    "actions": [{"delete": {}}],
                    "transitions": []
                }
            ]
        });

        let policy: Policy = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(policy.default_state, "hot");
        assert_eq!(policy.states.len(), 2);
        assert_eq!(policy.states[0].transitions[0].state_name, "delete");

        // Optional fields absent on the wire stay absent on re-serialization
        let back = serde_json::to_value(&policy).unwrap();
        assert_eq!(back, wire);
    }

    #[test]
    fn test_put_policy_response_underscore_fields() {
        let wire = json!({
            "_id": "log_policy",
            "_version": 3,
            "_primary_term": 1,
            "_seq_no": 42,
            "policy": {"policy": {"description": "d"}}
        });

        let response: PutPolicyResponse = serde_json::from_value(wire).unwrap();
        assert_eq!(response.id, "log_policy");
        assert_eq!(response.seq_no, 42);
    }
}
