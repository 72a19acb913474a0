//! Read-only projection of the computed matrices onto named places.

use rustc_hash::FxHashMap;

use crate::{algo::AllPairs, place::PlaceId};

/// Immutable lookup of places by name and by id.
///
/// The registry owns the canonical place list and the all-pairs results for
/// one loaded dataset; its entries are borrowed [`Place`] views. Consumers
/// query those views instead of indexing matrices, so the raw sentinel
/// encoding never leaks past this module. The registry lives as long as the
/// dataset it was built from; a reload builds a whole new registry.
#[derive(Debug)]
pub struct Registry {
    places: Vec<String>,
    by_name: FxHashMap<String, PlaceId>,
    all_pairs: AllPairs,
}

impl Registry {
    /// Binds the canonical place list to the computed all-pairs results.
    ///
    /// # Panics
    ///
    /// Panics if the place list and the matrices disagree on the number of
    /// places.
    pub fn new(places: Vec<String>, all_pairs: AllPairs) -> Self {
        assert_eq!(
            places.len(),
            all_pairs.place_count(),
            "place list and matrices disagree on place count"
        );

        let by_name = places
            .iter()
            .enumerate()
            .map(|(index, name)| (name.clone(), PlaceId::from_usize(index)))
            .collect();

        Self {
            places,
            by_name,
            all_pairs,
        }
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Looks up a place by name.
    pub fn place(&self, name: &str) -> Option<Place<'_>> {
        self.by_name.get(name).map(|&id| Place { registry: self, id })
    }

    /// Looks up a place by id.
    pub fn place_by_id(&self, id: PlaceId) -> Option<Place<'_>> {
        (id.as_usize() < self.places.len()).then_some(Place { registry: self, id })
    }

    /// Iterates over all places in canonical order.
    pub fn places(&self) -> impl Iterator<Item = Place<'_>> {
        (0..self.places.len()).map(|index| Place {
            registry: self,
            id: PlaceId::from_usize(index),
        })
    }
}

/// A view of one place, bound to the matrix rows of its id.
#[derive(Debug, Clone, Copy)]
pub struct Place<'a> {
    registry: &'a Registry,
    id: PlaceId,
}

impl<'a> Place<'a> {
    pub fn id(&self) -> PlaceId {
        self.id
    }

    pub fn name(&self) -> &'a str {
        &self.registry.places[self.id.as_usize()]
    }

    /// Shortest distance to `target`, or `None` when disconnected.
    ///
    /// # Panics
    ///
    /// Panics if `target` is out of range for the registry.
    pub fn distance_to(&self, target: PlaceId) -> Option<u64> {
        self.registry.all_pairs.distance(self.id, target)
    }

    /// One shortest path to `target` as place ids, or `None` when
    /// disconnected.
    ///
    /// # Panics
    ///
    /// Panics if `target` is out of range for the registry.
    pub fn path_to(&self, target: PlaceId) -> Option<&'a [PlaceId]> {
        self.registry.all_pairs.path(self.id, target)
    }
}
