//! Hydration of embedded collections.
//!
//! Parents decode with only the ids of their embedded documents. Hydration
//! looks each id up under the parent's compound key
//! (`!actors.items!<actorId>.<itemId>`) and materializes the child.
//! Children already stored inline in the parent are kept as they are.
//! Children are not hydrated themselves.

use vttpack_store::Store;

use crate::format::Format;
use crate::key::DocumentKey;
use crate::model::{Document, DocumentData, EmbeddedCollection};
use crate::{Error, Result};

/// A hydrated document plus the children that could not be resolved.
#[derive(Debug)]
pub struct Hydrated {
    /// The document with its embedded collections materialized.
    pub document: Document,
    /// One error per child that could not be loaded.
    pub failures: Vec<Error>,
}

impl Hydrated {
    /// Whether every referenced child was resolved.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Resolve the embedded collections of a document against a store.
///
/// Only ids without a materialized document are looked up, so hydrating an
/// already hydrated document yields the same children in the same order.
/// A child that is missing or malformed is reported in
/// [`Hydrated::failures`] and left out; the remaining children are still
/// resolved.
pub fn hydrate<S: Store + ?Sized>(document: Document, store: &S) -> Hydrated {
    let mut failures = Vec::new();

    let document = match document {
        Document::Actor(mut actor) => {
            let owner = Owner::of(&actor);
            actor.items = owner.resolve(store, "items", actor.items, &mut failures);
            actor.effects = owner.resolve(store, "effects", actor.effects, &mut failures);
            Document::Actor(actor)
        }
        Document::Item(mut item) => {
            let owner = Owner::of(&item);
            item.effects = owner.resolve(store, "effects", item.effects, &mut failures);
            Document::Item(item)
        }
        Document::Scene(mut scene) => {
            let owner = Owner::of(&scene);
            scene.tokens = owner.resolve(store, "tokens", scene.tokens, &mut failures);
            Document::Scene(scene)
        }
        Document::Combat(mut combat) => {
            let owner = Owner::of(&combat);
            combat.combatants = owner.resolve(store, "combatants", combat.combatants, &mut failures);
            Document::Combat(combat)
        }
        leaf => leaf,
    };

    Hydrated { document, failures }
}

/// The parent side of a compound key.
struct Owner {
    collection: &'static str,
    id: String,
    pack: String,
}

impl Owner {
    fn of<T: DocumentData>(parent: &T) -> Self {
        Self {
            // Only registered variants own collections.
            collection: T::KIND.collection().unwrap_or_default(),
            id: parent.id().to_string(),
            pack: parent.pack().to_string(),
        }
    }

    fn resolve<T, S>(
        &self,
        store: &S,
        field: &str,
        collection: EmbeddedCollection<T>,
        failures: &mut Vec<Error>,
    ) -> EmbeddedCollection<T>
    where
        T: DocumentData,
        S: Store + ?Sized,
    {
        let (ids, inline) = collection.into_parts();
        let mut inline = inline.into_iter().peekable();
        let mut documents = Vec::with_capacity(ids.len());

        for child_id in &ids {
            let key = DocumentKey::embedded(self.collection, field, self.id.as_str(), child_id.as_str());

            // Children decoded inline with the parent are already complete.
            if let Some(mut child) = inline.next_if(|d| d.id() == child_id.as_str()) {
                child.set_pack(&self.pack);
                if child.key().is_empty() {
                    child.set_key(key.to_string());
                }
                documents.push(child);
                continue;
            }

            match self.load::<T, S>(store, &key) {
                Ok(child) => documents.push(child),
                Err(e) => failures.push(e),
            }
        }

        tracing::trace!(
            pack = %self.pack,
            parent = %self.id,
            field,
            resolved = documents.len(),
            referenced = ids.len(),
            "hydrated collection"
        );

        EmbeddedCollection::from_parts(ids, documents)
    }

    fn load<T, S>(&self, store: &S, key: &DocumentKey) -> Result<T>
    where
        T: DocumentData,
        S: Store + ?Sized,
    {
        let key_string = key.to_string();

        let value = store
            .get(key_string.as_bytes())?
            .ok_or_else(|| Error::MissingChild {
                key: key_string.clone(),
            })?;

        let mut child: T = Format::Json
            .from_slice(&value)
            .map_err(|source| Error::Decode {
                key: key_string.clone(),
                source,
            })?;

        if child.id().is_empty() {
            child.set_id(key.id.clone());
        } else if child.id() != key.id {
            return Err(Error::IdMismatch {
                key: key_string,
                found: child.id().to_string(),
            });
        }

        child.set_pack(&self.pack);
        child.set_key(key_string);

        Ok(child)
    }
}
