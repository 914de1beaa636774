//! Ordered, identifier-addressed collection of one entity type.
//!
//! Lookups are linear and use exact string equality on the identifier.
//! Uniqueness is never checked on insert: with duplicate identifiers every
//! lookup, update and delete targets the first match in insertion order.

use crate::models::Record;

use super::selection::{parse_selection_id, SelectOption};
use super::StoreError;

#[derive(Debug, Clone)]
pub struct Collection<T: Record> {
    items: Vec<T>,
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append a record. Always succeeds; duplicates are kept.
    pub fn add(&mut self, record: T) -> &T {
        let index = self.items.len();
        if self.position(record.id()).is_some() {
            tracing::warn!(
                entity = T::KIND.as_str(),
                id = record.id(),
                "Duplicate identifier added"
            );
        }
        self.items.push(record);
        &self.items[index]
    }

    /// First record whose identifier equals `id` exactly.
    pub fn find_by_id(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|r| r.id() == id)
    }

    /// Resolve a selector label ("Jane Doe (P001)" or a bare id).
    pub fn find_by_label(&self, label: &str) -> Option<&T> {
        self.find_by_id(parse_selection_id(label))
    }

    /// Overwrite the patched fields of the first record matching `id`.
    ///
    /// Nothing is created when the identifier is absent.
    pub fn update(&mut self, id: &str, patch: T::Patch) -> Result<&T, StoreError> {
        let index = self.position(id).ok_or_else(|| StoreError::not_found::<T>(id))?;
        self.items[index].apply(patch);
        Ok(&self.items[index])
    }

    /// Remove and return the first record matching `id`.
    pub fn delete(&mut self, id: &str) -> Result<T, StoreError> {
        let index = self.position(id).ok_or_else(|| StoreError::not_found::<T>(id))?;
        Ok(self.items.remove(index))
    }

    /// All records in insertion order.
    pub fn list_all(&self) -> &[T] {
        &self.items
    }

    /// Records matching `predicate`, order preserved.
    pub fn filter<P>(&self, mut predicate: P) -> Vec<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().filter(|r| predicate(*r)).collect()
    }

    /// Case-insensitive substring search over the record's search fields.
    ///
    /// A blank query returns the whole collection.
    pub fn search(&self, query: &str) -> Vec<&T> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.items.iter().collect();
        }
        self.filter(|r| {
            r.search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
    }

    /// Selector entries with the identifier carried next to the label.
    pub fn options(&self) -> Vec<SelectOption> {
        self.items
            .iter()
            .map(|r| SelectOption {
                label: r.label(),
                id: r.id().to_string(),
                name: r.display_name().to_string(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|r| r.id() == id)
    }
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}
