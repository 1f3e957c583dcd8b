//! Start/end selection state
//!
//! Tracks which endpoint the next picked location should fill, the same
//! way the map sidebar decides whether its search box means "From" or
//! "To".

use crate::core::geo::GeoPoint;

/// A picked location together with its display name from the search layer.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedLocation {
    pub point: GeoPoint,
    pub name: String,
}

/// Two-slot start/end tracker.
///
/// `submit` fills the start slot first, then the end slot; once both are
/// set further submissions are ignored until `clear`. All transitions are
/// total; there are no error states.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionFlow {
    start: Option<NamedLocation>,
    end: Option<NamedLocation>,
}

impl SelectionFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next picked location into the first empty slot.
    pub fn submit(&mut self, point: GeoPoint, name: impl Into<String>) {
        if self.start.is_none() {
            self.start = Some(NamedLocation {
                point,
                name: name.into(),
            });
        } else if self.end.is_none() {
            self.end = Some(NamedLocation {
                point,
                name: name.into(),
            });
        }
        // Both slots filled: ignored until cleared.
    }

    /// Reset both slots and their display names.
    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }

    pub fn start(&self) -> Option<&NamedLocation> {
        self.start.as_ref()
    }

    pub fn end(&self) -> Option<&NamedLocation> {
        self.end.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}
