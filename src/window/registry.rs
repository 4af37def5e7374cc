//! Rendered registry: the arena of materialized elements.
//!
//! Keys are item indices. Every entry also remembers the index it was
//! created for, which the recycler uses to tell reused elements apart from
//! fresh ones.

use std::collections::HashMap;

/// An element together with the index that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered<E> {
    index: usize,
    element: E,
}

impl<E> Rendered<E> {
    /// Tag an element with its owning index.
    pub const fn new(index: usize, element: E) -> Self {
        Self { index, element }
    }

    /// Index the element currently displays.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The element.
    #[inline]
    pub const fn element(&self) -> &E {
        &self.element
    }

    /// Mutable access to the element.
    #[inline]
    pub fn element_mut(&mut self) -> &mut E {
        &mut self.element
    }

    /// Unwrap the element.
    pub fn into_element(self) -> E {
        self.element
    }
}

/// Mapping from item index to its materialized element.
#[derive(Debug, Clone)]
pub struct RenderedRegistry<E> {
    entries: HashMap<usize, Rendered<E>>,
}

impl<E> Default for RenderedRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> RenderedRegistry<E> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Create an empty registry sized for a window of `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Number of materialized elements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is materialized.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if an index has an element.
    pub fn contains(&self, index: usize) -> bool {
        self.entries.contains_key(&index)
    }

    /// Element for an index.
    pub fn get(&self, index: usize) -> Option<&E> {
        self.entries.get(&index).map(Rendered::element)
    }

    /// Mutable element for an index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut E> {
        self.entries.get_mut(&index).map(Rendered::element_mut)
    }

    /// Insert a tagged element, returning the one it replaced.
    pub fn insert(&mut self, rendered: Rendered<E>) -> Option<Rendered<E>> {
        self.entries.insert(rendered.index(), rendered)
    }

    /// Remove the entry for an index.
    pub fn remove(&mut self, index: usize) -> Option<Rendered<E>> {
        self.entries.remove(&index)
    }

    /// Drop every entry at or beyond `len`. Returns how many were dropped.
    pub fn truncate(&mut self, len: usize) -> usize {
        let before = self.entries.len();
        self.entries.retain(|&index, _| index < len);
        before - self.entries.len()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Materialized indices in ascending order.
    pub fn indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.entries.keys().copied().collect();
        indices.sort_unstable();
        indices
    }
}
