// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Dirty-tracked field values.

/// A field value paired with its last-persisted shadow.
///
/// The field is dirty while the live value differs from the shadow. Equality
/// compares live values only.
#[derive(Debug, Clone)]
pub struct Tracked<T> {
    value: T,
    saved: T,
}

impl<T: Clone + PartialEq> Tracked<T> {
    /// Wrap a value whose shadow starts equal to it.
    pub fn new(value: T) -> Self {
        Self {
            saved: value.clone(),
            value,
        }
    }

    /// The live value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// The last-persisted value.
    pub fn saved(&self) -> &T {
        &self.saved
    }

    /// Replace the live value.
    pub fn set(&mut self, value: T) {
        self.value = value;
    }

    /// Mutable access to the live value.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Whether the live value differs from the shadow.
    pub fn is_dirty(&self) -> bool {
        self.value != self.saved
    }

    /// Reset the shadow to the live value.
    pub fn mark_saved(&mut self) {
        self.saved = self.value.clone();
    }
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Tracked<T> {}
