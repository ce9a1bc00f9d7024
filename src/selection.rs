//! Pinned foods kept for side-by-side comparison.
//!
//! The pin set is independent of any filter, search or sort. It is bounded:
//! adding beyond capacity is rejected and leaves the set unchanged.

use serde::Serialize;
use thiserror::Error;

use crate::core::FoodId;

/// Maximum number of foods that can be compared at once
pub const PIN_CAPACITY: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PinError {
    #[error("Only {capacity} foods can be compared at once. Remove one first.")]
    CapacityReached { capacity: usize },
}

/// What a successful toggle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinToggle {
    Pinned,
    Unpinned,
}

/// Insertion-ordered set of pinned food ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PinSet {
    ids: Vec<FoodId>,
    capacity: usize,
}

impl Default for PinSet {
    fn default() -> Self {
        Self::new()
    }
}

impl PinSet {
    pub fn new() -> Self {
        Self::with_capacity(PIN_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Unpin if present, otherwise pin unless the set is full.
    pub fn toggle(&mut self, id: FoodId) -> Result<PinToggle, PinError> {
        if let Some(pos) = self.ids.iter().position(|&pinned| pinned == id) {
            self.ids.remove(pos);
            return Ok(PinToggle::Unpinned);
        }
        if self.is_full() {
            return Err(PinError::CapacityReached {
                capacity: self.capacity,
            });
        }
        self.ids.push(id);
        Ok(PinToggle::Pinned)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: FoodId) -> bool {
        self.ids.contains(&id)
    }

    /// Pinned ids in the order they were pinned
    pub fn ids(&self) -> &[FoodId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
