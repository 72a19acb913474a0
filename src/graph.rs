//! Building the dense road graph from distance records.

use thiserror::Error;

use crate::{dataset::Record, matrix::SquareMatrix, place::PlaceId};

/// The loaded road network: the canonical sorted place list together with the
/// symmetric adjacency matrix.
///
/// A cell of the adjacency matrix holds the direct road distance between two
/// places, or 0 when there is no direct road. Since 0 is reserved as the
/// no-edge sentinel, every real distance must be positive and
/// [`RoadGraph::from_records`] rejects anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadGraph {
    places: Vec<String>,
    adjacency: SquareMatrix<u64>,
}

/// The error encountered while validating distance records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A record carries a distance that cannot be stored: zero would be
    /// indistinguishable from "no road" and negative road distances do not
    /// exist.
    #[error("distance between {place_a:?} and {place_b:?} must be positive, got {distance}")]
    NonPositiveDistance {
        place_a: String,
        place_b: String,
        distance: i64,
    },
}

impl RoadGraph {
    /// Builds the canonical place list and the adjacency matrix from distance
    /// records.
    ///
    /// The place list is the lexicographically sorted set of distinct names
    /// seen in the records; positions in that list are the [`PlaceId`]s used
    /// for matrix indexing. Records repeating a pair overwrite the earlier
    /// distance. Fails on the first non-positive distance, before any matrix
    /// is built.
    pub fn from_records<I>(records: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = Record>,
    {
        let records: Vec<Record> = records.into_iter().collect();

        for record in &records {
            if record.distance <= 0 {
                return Err(ValidationError::NonPositiveDistance {
                    place_a: record.place_a.clone(),
                    place_b: record.place_b.clone(),
                    distance: record.distance,
                });
            }
        }

        let mut places: Vec<String> = records
            .iter()
            .flat_map(|record| [record.place_a.clone(), record.place_b.clone()])
            .collect();
        places.sort();
        places.dedup();

        let mut adjacency = SquareMatrix::new(places.len(), 0);

        for record in &records {
            // Every name is in the sorted list by construction.
            let a = places.binary_search(&record.place_a).unwrap();
            let b = places.binary_search(&record.place_b).unwrap();
            let distance = record.distance as u64;

            adjacency[(a, b)] = distance;
            adjacency[(b, a)] = distance;
        }

        Ok(Self { places, adjacency })
    }

    pub fn place_count(&self) -> usize {
        self.places.len()
    }

    /// Place names in canonical order.
    pub fn places(&self) -> &[String] {
        &self.places
    }

    /// Consumes the graph, keeping only the canonical place list.
    pub fn into_places(self) -> Vec<String> {
        self.places
    }

    /// Name of the place at `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range for this graph.
    pub fn place_name(&self, id: PlaceId) -> &str {
        &self.places[id.as_usize()]
    }

    /// Id of the place called `name`, if it is part of the graph.
    pub fn index_of(&self, name: &str) -> Option<PlaceId> {
        self.places
            .binary_search_by(|place| place.as_str().cmp(name))
            .ok()
            .map(PlaceId::from_usize)
    }

    pub fn adjacency(&self) -> &SquareMatrix<u64> {
        &self.adjacency
    }
}
