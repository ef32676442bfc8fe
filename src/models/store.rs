//! In-memory question store.
//!
//! Keys are question texts and stay unique: upserting an existing text
//! replaces its record in place. Insertion order is kept, both in memory
//! and in the serialized JSON object.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Question;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionStore {
    entries: Vec<(String, Question)>,
}

impl QuestionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All questions with their text, in store order.
    pub fn get_all(&self) -> impl Iterator<Item = (&str, &Question)> {
        self.entries
            .iter()
            .map(|(text, question)| (text.as_str(), question))
    }

    /// Insert or overwrite the record for `text`, returning the previous one.
    ///
    /// No validation happens here; a record whose answer label is not one of
    /// its own options is stored as-is.
    pub fn upsert(&mut self, text: impl Into<String>, question: Question) -> Option<Question> {
        let text = text.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == text) {
            Some((_, slot)) => Some(std::mem::replace(slot, question)),
            None => {
                self.entries.push((text, question));
                None
            }
        }
    }

    pub fn get(&self, text: &str) -> Option<&Question> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == text)
            .map(|(_, question)| question)
    }

    pub fn texts(&self) -> Vec<&str> {
        self.entries.iter().map(|(text, _)| text.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Question)> for QuestionStore {
    fn from_iter<I: IntoIterator<Item = (S, Question)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (text, question) in iter {
            store.upsert(text, question);
        }
        store
    }
}

impl Serialize for QuestionStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (text, question) in &self.entries {
            map.serialize_entry(text, question)?;
        }
        map.end()
    }
}

struct StoreVisitor;

impl<'de> Visitor<'de> for StoreVisitor {
    type Value = QuestionStore;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map from question text to question record")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
        let mut store = QuestionStore::new();
        while let Some((text, question)) = access.next_entry::<String, Question>()? {
            store.upsert(text, question);
        }
        Ok(store)
    }
}

impl<'de> Deserialize<'de> for QuestionStore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StoreVisitor)
    }
}
