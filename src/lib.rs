//! Shortest routes between named places, loaded from a plain distance table.
//!
//! A distance table lists pairwise road distances between places. waymap
//! loads the table into a dense adjacency matrix, precomputes the shortest
//! distance and one shortest path between every pair of places in one batch,
//! and exposes the results behind a registry of named places that multi-stop
//! itineraries are planned against.
//!
//! # Examples
//!
//! ```
//! use waymap::{AllPairs, Record, Registry, RoadGraph};
//!
//! let records = vec![
//!     Record::new("Ann Arbor", "Detroit", 45),
//!     Record::new("Detroit", "Flint", 58),
//! ];
//!
//! let graph = RoadGraph::from_records(records)?;
//! let all_pairs = AllPairs::compute(graph.adjacency());
//! let registry = Registry::new(graph.into_places(), all_pairs);
//!
//! let ann_arbor = registry.place("Ann Arbor").unwrap();
//! let flint = registry.place("Flint").unwrap();
//!
//! assert_eq!(ann_arbor.distance_to(flint.id()), Some(103));
//! # Ok::<_, waymap::ValidationError>(())
//! ```

pub mod algo;
pub mod dataset;
pub mod graph;
pub mod matrix;
pub mod place;
pub mod registry;
pub mod route;

pub use algo::AllPairs;
pub use dataset::{LoadError, Record};
pub use graph::{RoadGraph, ValidationError};
pub use place::PlaceId;
pub use registry::{Place, Registry};
pub use route::{plan, Disconnected, Itinerary};
