//! Document variants.
//!
//! Every record kind a pack can hold is a plain serde struct. The closed
//! [`Document`] enum wraps them so the rest of the pipeline can carry any
//! kind through one type.

mod actor;
mod base;
mod combat;
mod effect;
mod embedded;
mod folder;
mod item;
mod scene;
mod token;

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::registry::DocumentKind;

pub use actor::ActorDocument;
pub use base::{BaseRecord, DocumentStats, Ownership, TextureData};
pub use combat::{CombatDocument, CombatantDocument};
pub use effect::{ActiveEffectDocument, EffectChange, EffectDuration};
pub use embedded::EmbeddedCollection;
pub use folder::FolderDocument;
pub use item::ItemDocument;
pub use scene::{SceneDocument, SceneGrid, SceneInitialView};
pub use token::{
    DetectionMode, PrototypeTokenDocument, RingColors, RingSubject, TokenAppearance, TokenBar,
    TokenDocument, TokenOcclusion, TokenRing, TokenSight,
};

pub(crate) use base::nullable;

/// Capabilities shared by every document variant.
pub trait DocumentData: Serialize + DeserializeOwned + Default + Clone + Debug + PartialEq {
    /// Variant tag of this type.
    const KIND: DocumentKind;

    /// Stable document id.
    fn id(&self) -> &str;

    /// Human label, empty when the document has none.
    fn name(&self) -> &str;

    /// Full store key of the document.
    fn key(&self) -> &str;

    /// Pack the document was read from.
    fn pack(&self) -> &str;

    /// Attach provenance, including to materialized embedded documents.
    fn set_pack(&mut self, pack: &str);

    /// Store the document's key.
    fn set_key(&mut self, key: String);

    /// Overwrite the document id.
    fn set_id(&mut self, id: String);
}

/// Implements [`DocumentData`] for a variant that carries a [`BaseRecord`]
/// in its `base` field. Listed fields are embedded collections whose
/// documents share the parent's provenance.
macro_rules! base_document {
    ($ty:ty, $kind:ident $(, embedded: [$($field:ident),* $(,)?])?) => {
        impl $crate::model::DocumentData for $ty {
            const KIND: $crate::registry::DocumentKind = $crate::registry::DocumentKind::$kind;

            #[inline]
            fn id(&self) -> &str {
                &self.base.id
            }

            #[inline]
            fn name(&self) -> &str {
                &self.base.name
            }

            #[inline]
            fn key(&self) -> &str {
                &self.base.key
            }

            #[inline]
            fn pack(&self) -> &str {
                &self.base.pack
            }

            fn set_pack(&mut self, pack: &str) {
                self.base.pack = pack.to_string();
                $($(self.$field.set_pack(pack);)*)?
            }

            fn set_key(&mut self, key: String) {
                self.base.key = key;
            }

            fn set_id(&mut self, id: String) {
                self.base.id = id;
            }
        }
    };
}

pub(crate) use base_document;

/// Any document read from a pack.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Document {
    Actor(ActorDocument),
    Item(ItemDocument),
    Folder(FolderDocument),
    Scene(SceneDocument),
    ActiveEffect(ActiveEffectDocument),
    Combat(CombatDocument),
    Combatant(CombatantDocument),
    Token(TokenDocument),
    PrototypeToken(PrototypeTokenDocument),
}

macro_rules! each_variant {
    ($doc:expr, $inner:ident => $body:expr) => {
        match $doc {
            Document::Actor($inner) => $body,
            Document::Item($inner) => $body,
            Document::Folder($inner) => $body,
            Document::Scene($inner) => $body,
            Document::ActiveEffect($inner) => $body,
            Document::Combat($inner) => $body,
            Document::Combatant($inner) => $body,
            Document::Token($inner) => $body,
            Document::PrototypeToken($inner) => $body,
        }
    };
}

impl Document {
    /// Variant tag.
    pub fn kind(&self) -> DocumentKind {
        fn kind_of<T: DocumentData>(_: &T) -> DocumentKind {
            T::KIND
        }
        each_variant!(self, d => kind_of(d))
    }

    /// Stable document id.
    pub fn id(&self) -> &str {
        each_variant!(self, d => d.id())
    }

    /// Human label, empty when the document has none.
    pub fn name(&self) -> &str {
        each_variant!(self, d => d.name())
    }

    /// Full store key.
    pub fn key(&self) -> &str {
        each_variant!(self, d => d.key())
    }

    /// Pack the document was read from.
    pub fn pack(&self) -> &str {
        each_variant!(self, d => d.pack())
    }

    /// Attach provenance to the document and its embedded documents.
    pub fn set_pack(&mut self, pack: &str) {
        each_variant!(self, d => d.set_pack(pack))
    }

    /// Store the document's key.
    pub fn set_key(&mut self, key: String) {
        each_variant!(self, d => d.set_key(key))
    }

    /// The actor, if this is one.
    pub fn as_actor(&self) -> Option<&ActorDocument> {
        match self {
            Document::Actor(actor) => Some(actor),
            _ => None,
        }
    }

    /// The item, if this is one.
    pub fn as_item(&self) -> Option<&ItemDocument> {
        match self {
            Document::Item(item) => Some(item),
            _ => None,
        }
    }

    /// The folder, if this is one.
    pub fn as_folder(&self) -> Option<&FolderDocument> {
        match self {
            Document::Folder(folder) => Some(folder),
            _ => None,
        }
    }

    /// The scene, if this is one.
    pub fn as_scene(&self) -> Option<&SceneDocument> {
        match self {
            Document::Scene(scene) => Some(scene),
            _ => None,
        }
    }

    /// The combat, if this is one.
    pub fn as_combat(&self) -> Option<&CombatDocument> {
        match self {
            Document::Combat(combat) => Some(combat),
            _ => None,
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Document {
                fn from(document: $ty) -> Self {
                    Document::$variant(document)
                }
            }
        )*
    };
}

impl_from_variant!(
    Actor(ActorDocument),
    Item(ItemDocument),
    Folder(FolderDocument),
    Scene(SceneDocument),
    ActiveEffect(ActiveEffectDocument),
    Combat(CombatDocument),
    Combatant(CombatantDocument),
    Token(TokenDocument),
    PrototypeToken(PrototypeTokenDocument),
);
