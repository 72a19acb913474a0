//! Identification of places in the canonical ordering.

use std::fmt;

/// Position of a place in the lexicographically sorted list of distinct place
/// names loaded from the dataset.
///
/// The sorted position is the sole source of place identity and is used
/// directly for matrix indexing. Ids are only meaningful for the dataset they
/// were created from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlaceId(usize);

impl PlaceId {
    pub const fn from_usize(id: usize) -> Self {
        Self(id)
    }

    pub const fn as_usize(&self) -> usize {
        self.0
    }
}

impl From<usize> for PlaceId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl From<PlaceId> for usize {
    fn from(id: PlaceId) -> Self {
        id.0
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
