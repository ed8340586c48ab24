//! Combat encounters and their combatants.

use serde::{Deserialize, Serialize};

use super::{nullable, BaseRecord, DocumentData, DocumentStats, EmbeddedCollection};
use super::base_document;
use crate::registry::DocumentKind;

/// A participant in a combat encounter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CombatantDocument {
    #[serde(flatten)]
    pub base: BaseRecord,
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub doc_type: String,
    pub system: serde_json::Value,
    pub actor_id: Option<String>,
    pub token_id: Option<String>,
    pub scene_id: Option<String>,
    pub img: Option<String>,
    pub initiative: Option<f64>,
    #[serde(deserialize_with = "nullable")]
    pub hidden: bool,
    #[serde(deserialize_with = "nullable")]
    pub defeated: bool,
    pub flags: serde_json::Value,
    #[serde(rename = "_stats")]
    pub stats: Option<DocumentStats>,
}

base_document!(CombatantDocument, Combatant);

/// A combat encounter.
///
/// Combats have no name, so they do not carry a [`BaseRecord`]; the
/// provenance and key fields live directly on the struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CombatDocument {
    #[serde(skip)]
    pub pack: String,
    #[serde(rename = "_key", skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub key: String,
    #[serde(rename = "_id", skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub id: String,
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub doc_type: String,
    pub system: serde_json::Value,
    /// Scene id the encounter takes place on
    pub scene: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub combatants: EmbeddedCollection<CombatantDocument>,
    #[serde(deserialize_with = "nullable")]
    pub active: bool,
    #[serde(deserialize_with = "nullable")]
    pub round: i64,
    pub turn: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    pub sort: i64,
    pub flags: serde_json::Value,
    #[serde(rename = "_stats")]
    pub stats: Option<DocumentStats>,
}

impl DocumentData for CombatDocument {
    const KIND: DocumentKind = DocumentKind::Combat;

    #[inline]
    fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    fn name(&self) -> &str {
        ""
    }

    #[inline]
    fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    fn pack(&self) -> &str {
        &self.pack
    }

    fn set_pack(&mut self, pack: &str) {
        self.pack = pack.to_string();
        self.combatants.set_pack(pack);
    }

    fn set_key(&mut self, key: String) {
        self.key = key;
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
