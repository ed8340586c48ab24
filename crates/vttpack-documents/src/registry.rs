//! Collection tag to document variant mapping.

use std::fmt;

use crate::error::FormatError;
use crate::format::Format;
use crate::model::{
    ActiveEffectDocument, ActorDocument, CombatDocument, CombatantDocument, Document,
    FolderDocument, ItemDocument, PrototypeTokenDocument, SceneDocument, TokenDocument,
};
use crate::{Error, Result};

/// Document variant tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Actor,
    Item,
    Folder,
    Scene,
    ActiveEffect,
    Combat,
    Combatant,
    Token,
    PrototypeToken,
}

/// Collection tags that address primary documents, in registration order.
///
/// Fixed at compile time and never mutated; prototype tokens have no
/// collection of their own and only appear nested in actors.
pub const REGISTRY: &[(&str, DocumentKind)] = &[
    ("actors", DocumentKind::Actor),
    ("items", DocumentKind::Item),
    ("folders", DocumentKind::Folder),
    ("scenes", DocumentKind::Scene),
    ("effects", DocumentKind::ActiveEffect),
    ("combats", DocumentKind::Combat),
    ("combatants", DocumentKind::Combatant),
    ("tokens", DocumentKind::Token),
];

/// Look up the variant registered for a collection tag.
pub fn constructor_for(collection: &str) -> Result<DocumentKind> {
    DocumentKind::from_collection(collection)
        .ok_or_else(|| Error::StructureNotFound(collection.to_string()))
}

impl DocumentKind {
    /// Variant registered for a collection tag.
    pub fn from_collection(collection: &str) -> Option<Self> {
        REGISTRY
            .iter()
            .find(|(tag, _)| *tag == collection)
            .map(|(_, kind)| *kind)
    }

    /// Collection tag of this variant, if it can be a primary document.
    pub fn collection(self) -> Option<&'static str> {
        REGISTRY
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(tag, _)| *tag)
    }

    /// Zero-valued document of this variant.
    pub fn construct(self) -> Document {
        match self {
            DocumentKind::Actor => ActorDocument::default().into(),
            DocumentKind::Item => ItemDocument::default().into(),
            DocumentKind::Folder => FolderDocument::default().into(),
            DocumentKind::Scene => SceneDocument::default().into(),
            DocumentKind::ActiveEffect => ActiveEffectDocument::default().into(),
            DocumentKind::Combat => CombatDocument::default().into(),
            DocumentKind::Combatant => CombatantDocument::default().into(),
            DocumentKind::Token => TokenDocument::default().into(),
            DocumentKind::PrototypeToken => PrototypeTokenDocument::default().into(),
        }
    }

    /// Decode a value blob as this variant.
    ///
    /// Unknown fields are ignored and missing fields take their zero value.
    pub fn decode(self, format: Format, bytes: &[u8]) -> std::result::Result<Document, FormatError> {
        Ok(match self {
            DocumentKind::Actor => Document::Actor(format.from_slice(bytes)?),
            DocumentKind::Item => Document::Item(format.from_slice(bytes)?),
            DocumentKind::Folder => Document::Folder(format.from_slice(bytes)?),
            DocumentKind::Scene => Document::Scene(format.from_slice(bytes)?),
            DocumentKind::ActiveEffect => Document::ActiveEffect(format.from_slice(bytes)?),
            DocumentKind::Combat => Document::Combat(format.from_slice(bytes)?),
            DocumentKind::Combatant => Document::Combatant(format.from_slice(bytes)?),
            DocumentKind::Token => Document::Token(format.from_slice(bytes)?),
            DocumentKind::PrototypeToken => Document::PrototypeToken(format.from_slice(bytes)?),
        })
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentKind::Actor => "Actor",
            DocumentKind::Item => "Item",
            DocumentKind::Folder => "Folder",
            DocumentKind::Scene => "Scene",
            DocumentKind::ActiveEffect => "ActiveEffect",
            DocumentKind::Combat => "Combat",
            DocumentKind::Combatant => "Combatant",
            DocumentKind::Token => "Token",
            DocumentKind::PrototypeToken => "PrototypeToken",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_tags() {
        assert_eq!(constructor_for("actors").unwrap(), DocumentKind::Actor);
        assert_eq!(constructor_for("items").unwrap(), DocumentKind::Item);
        assert_eq!(constructor_for("folders").unwrap(), DocumentKind::Folder);
        assert_eq!(DocumentKind::Scene.collection(), Some("scenes"));
        assert_eq!(DocumentKind::PrototypeToken.collection(), None);
    }

    #[test]
    fn test_unknown_tag() {
        match constructor_for("widgets") {
            Err(Error::StructureNotFound(tag)) => assert_eq!(tag, "widgets"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_construct_matches_kind() {
        for (_, kind) in REGISTRY {
            assert_eq!(kind.construct().kind(), *kind);
        }
        assert_eq!(
            DocumentKind::PrototypeToken.construct().kind(),
            DocumentKind::PrototypeToken
        );
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let doc = DocumentKind::Folder
            .decode(Format::Json, br#"{"_id":"F1","name":"Monsters","unknown":42}"#)
            .unwrap();
        assert_eq!(doc.id(), "F1");
        assert_eq!(doc.name(), "Monsters");
    }

    #[test]
    fn test_decode_malformed() {
        assert!(DocumentKind::Item.decode(Format::Json, b"{not json").is_err());
    }
}
