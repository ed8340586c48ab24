//! Embedded document collections.
//!
//! A parent stores only the ids of its embedded documents; the documents
//! themselves live under compound keys and are filled in by hydration.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::DocumentData;

/// Ids of a parent's embedded documents plus whichever of them have been
/// materialized.
///
/// `documents` is always an ordered subsequence of `ids`: each document
/// sits at the position of the id it was resolved from, and ids whose
/// document could not be resolved are simply not represented.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedCollection<T> {
    ids: Vec<String>,
    documents: Vec<T>,
}

impl<T> Default for EmbeddedCollection<T> {
    fn default() -> Self {
        Self {
            ids: Vec::new(),
            documents: Vec::new(),
        }
    }
}

impl<T: DocumentData> EmbeddedCollection<T> {
    /// Collection referencing the given ids, nothing materialized yet.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            documents: Vec::new(),
        }
    }

    /// Rebuild a collection from its ids and the documents resolved for them.
    pub(crate) fn from_parts(ids: Vec<String>, documents: Vec<T>) -> Self {
        debug_assert!(documents.len() <= ids.len());
        Self { ids, documents }
    }

    /// Referenced ids, in declaration order.
    #[inline]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Materialized documents, in id order.
    #[inline]
    pub fn documents(&self) -> &[T] {
        &self.documents
    }

    /// Find a materialized document by id.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.documents.iter().find(|d| d.id() == id)
    }

    /// Number of referenced ids.
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no ids are referenced.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether every referenced id has a materialized document.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.documents.len() == self.ids.len()
    }

    pub(crate) fn into_parts(self) -> (Vec<String>, Vec<T>) {
        (self.ids, self.documents)
    }

    pub(crate) fn set_pack(&mut self, pack: &str) {
        for document in &mut self.documents {
            document.set_pack(pack);
        }
    }

    /// Pair every id with its materialized document, if any.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Option<&T>)> + '_ {
        let mut documents = self.documents.iter().peekable();
        self.ids.iter().map(move |id| {
            let document = documents.next_if(|d| d.id() == id.as_str());
            (id.as_str(), document)
        })
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum EntryRef<'a, T> {
    Id(&'a str),
    Document(&'a T),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EntryOwned<T> {
    Id(String),
    Document(Box<T>),
}

/// Serialized as one entry per id: the full document when materialized,
/// the bare id otherwise.
impl<T: DocumentData> Serialize for EmbeddedCollection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.ids.len()))?;
        for (id, document) in self.entries() {
            match document {
                Some(document) => seq.serialize_element(&EntryRef::Document(document))?,
                None => seq.serialize_element(&EntryRef::<T>::Id(id))?,
            }
        }
        seq.end()
    }
}

impl<'de, T: DocumentData> Deserialize<'de> for EmbeddedCollection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor<T>(PhantomData<T>);

        impl<'de, T: DocumentData> Visitor<'de> for EntriesVisitor<T> {
            type Value = EmbeddedCollection<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a list of document ids or embedded documents")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut ids = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                let mut documents = Vec::new();

                while let Some(entry) = seq.next_element::<EntryOwned<T>>()? {
                    match entry {
                        EntryOwned::Id(id) => ids.push(id),
                        EntryOwned::Document(document) => {
                            if document.id().is_empty() {
                                return Err(de::Error::custom("embedded document without an _id"));
                            }
                            ids.push(document.id().to_string());
                            documents.push(*document);
                        }
                    }
                }

                Ok(EmbeddedCollection { ids, documents })
            }
        }

        deserializer.deserialize_seq(EntriesVisitor(PhantomData))
    }
}

