//! Actor documents.

use serde::{Deserialize, Serialize};

use super::{
    base_document, nullable, ActiveEffectDocument, BaseRecord, DocumentStats, EmbeddedCollection,
    ItemDocument, Ownership, PrototypeTokenDocument,
};

/// A character, creature or other actor.
///
/// `items` and `effects` hold ids until the actor is hydrated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActorDocument {
    #[serde(flatten)]
    pub base: BaseRecord,
    pub img: Option<String>,
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub doc_type: String,
    /// Game-system specific payload
    pub system: serde_json::Value,
    pub prototype_token: Option<PrototypeTokenDocument>,
    #[serde(deserialize_with = "nullable")]
    pub items: EmbeddedCollection<ItemDocument>,
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

base_document!(ActorDocument, Actor, embedded: [items, effects]);
