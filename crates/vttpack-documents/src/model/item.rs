//! Item documents.

use serde::{Deserialize, Serialize};

use super::{
    base_document, nullable, ActiveEffectDocument, BaseRecord, DocumentStats, EmbeddedCollection,
    Ownership,
};

/// An item, either standalone in a pack or embedded in an actor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemDocument {
    #[serde(flatten)]
    pub base: BaseRecord,
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub doc_type: String,
    pub img: Option<String>,
    /// Game-system specific payload
    pub system: serde_json::Value,
    #[serde(deserialize_with = "nullable")]
    pub effects: EmbeddedCollection<ActiveEffectDocument>,
    pub folder: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub sort: i64,
    pub ownership: Option<Ownership>,
    pub flags: serde_json::Value,
    #[serde(rename = "_stats")]
    pub stats: Option<DocumentStats>,
}

base_document!(ItemDocument, Item, embedded: [effects]);
