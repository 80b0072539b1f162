//! Index, data-stream, and search payload shapes

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// One row from the `_cat/indices` API; the cat API reports everything as
/// strings, dotted column names included
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatIndex {
    #[serde(rename = "docs.count")]
    pub docs_count: String,
    #[serde(rename = "docs.deleted")]
    pub docs_deleted: String,
    pub health: String,
    pub index: String,
    pub pri: String,
    #[serde(rename = "pri.store.size")]
    pub pri_store_size: String,
    pub rep: String,
    pub status: String,
    #[serde(rename = "store.size")]
    pub store_size: String,
    pub uuid: String,
    pub data_stream: Option<String>,
}

/// A cat-index row annotated with whether the index is policy-managed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedCatIndex {
    #[serde(flatten)]
    pub index: CatIndex,
    pub managed: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetIndicesResponse {
    pub indices: Vec<ManagedCatIndex>,
    pub total_indices: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataStream {
    pub name: String,
    pub timestamp_field: DataStreamTimestampField,
    pub indices: Vec<DataStreamIndex>,
    pub generation: u64,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataStreamTimestampField {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataStreamIndex {
    pub index_name: String,
    pub index_uuid: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDataStreamsResponse {
    pub data_streams: Vec<DataStream>,
    pub total_data_streams: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDataStreamsAndIndicesNamesResponse {
    pub data_streams: Vec<String>,
    pub indices: Vec<String>,
}

/// Map of backing index name to its data stream
pub type IndexToDataStream = HashMap<String, String>;

/// Generic search envelope for document-style responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse<T> {
    pub hits: SearchHits<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHits<T> {
    pub total: SearchTotal,
    pub hits: Vec<SearchHit<T>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchTotal {
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit<T> {
    #[serde(rename = "_source")]
    pub source: T,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_seq_no", skip_serializing_if = "Option::is_none")]
    pub seq_no: Option<u64>,
    #[serde(rename = "_primary_term", skip_serializing_if = "Option::is_none")]
    pub primary_term: Option<u64>,
}

/// Sample documents returned when previewing source data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSampleDataResponse {
    pub total: u64,
    pub data: Vec<SampleDataHit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleDataHit {
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_type")]
    pub doc_type: String,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_score")]
    pub score: f64,
    #[serde(rename = "_source")]
    pub source: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cat_index_dotted_columns() {
        let wire = json!({
            "docs.count": "1200",
            "docs.deleted": "4",
            "health": "green",
            "index": "logs-000001",
            "pri": "1",
            "pri.store.size": "1.2gb",
            "rep": "1",
            "status": "open",
            "store.size": "2.4gb",
            "uuid": "u1",
            "data_stream": null
        });

        let row: CatIndex = serde_json::from_value(wire).unwrap();
        assert_eq!(row.docs_count, "1200");
        assert_eq!(row.pri_store_size, "1.2gb");
        assert!(row.data_stream.is_none());
    }

    #[test]
    fn test_managed_cat_index_flattens() {
        let wire = json!({
            "docs.count": "1", "docs.deleted": "0", "health": "yellow",
            "index": "i", "pri": "1", "pri.store.size": "1kb", "rep": "0",
            "status": "open", "store.size": "1kb", "uuid": "u",
            "data_stream": "logs", "managed": "yes"
        });

        let row: ManagedCatIndex = serde_json::from_value(wire).unwrap();
        assert_eq!(row.managed, "yes");
        assert_eq!(row.index.index, "i");
    }

    #[test]
    fn test_search_response_generic_source() {
        let wire = json!({
            "hits": {
                "total": {"value": 1},
                "hits": [{"_source": {"name": "p"}, "_id": "doc1", "_seq_no": 2}]
            }
        });

        let response: SearchResponse<Value> = serde_json::from_value(wire).unwrap();
        assert_eq!(response.hits.total.value, 1);
        assert_eq!(response.hits.hits[0].id, "doc1");
        assert_eq!(response.hits.hits[0].seq_no, Some(2));
    }
}
