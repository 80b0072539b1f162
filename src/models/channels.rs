//! Notification channel payload shapes

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetChannelsResponse {
    pub start_index: u64,
    pub total_hits: u64,
    pub total_hit_relation: String,
    pub channel_list: Vec<FeatureChannelList>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureChannelList {
    pub config_id: String,
    pub name: String,
    pub description: String,
    pub config_type: String,
    pub is_enabled: bool,
}
