//! All-pairs shortest distances and paths over the road graph.
//!
//! The computation is a single batch pass: given the adjacency matrix, the
//! Floyd–Warshall relaxation produces the shortest distance and one realizing
//! path for every ordered pair of places at once. The result is immutable and
//! answers every later query by lookup.
//!
//! # Examples
//!
//! ```
//! use waymap::{AllPairs, Record, RoadGraph};
//!
//! let graph = RoadGraph::from_records(vec![
//!     Record::new("Ann Arbor", "Detroit", 45),
//!     Record::new("Detroit", "Flint", 58),
//! ])?;
//!
//! let all_pairs = AllPairs::compute(graph.adjacency());
//!
//! let ann_arbor = graph.index_of("Ann Arbor").unwrap();
//! let flint = graph.index_of("Flint").unwrap();
//!
//! assert_eq!(all_pairs.distance(ann_arbor, flint), Some(103));
//! let path: Vec<_> = all_pairs.path(ann_arbor, flint).unwrap().to_vec();
//! assert_eq!(path.len(), 3);
//! # Ok::<_, waymap::ValidationError>(())
//! ```

use fixedbitset::FixedBitSet;

use crate::{matrix::SquareMatrix, place::PlaceId};

/// Distance sentinel used during relaxation for pairs not connected so far.
///
/// Strictly larger than any achievable sum of edge weights; additions are
/// saturating so the sentinel never wraps.
const INFINITE: u64 = u64::MAX;

/// Shortest distances and one realizing path for every ordered pair of
/// places.
///
/// Built once per loaded dataset by [`AllPairs::compute`] and immutable
/// afterwards. When several shortest paths tie, the one found by the fixed
/// relaxation order is kept, so results are deterministic for a given
/// adjacency matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllPairs {
    dist: SquareMatrix<u64>,
    paths: SquareMatrix<Option<Vec<PlaceId>>>,
    linked: FixedBitSet,
}

impl AllPairs {
    /// Runs the Floyd–Warshall relaxation over the adjacency matrix.
    ///
    /// Never fails; an empty matrix yields an empty result. The adjacency
    /// input is read-only, the distance and path matrices are built fresh.
    pub fn compute(adjacency: &SquareMatrix<u64>) -> Self {
        floyd_warshall(adjacency)
    }

    /// Number of places covered by the computation.
    pub fn place_count(&self) -> usize {
        self.dist.size()
    }

    /// Shortest distance from `from` to `to`, or `None` when the two places
    /// are not connected.
    ///
    /// A place reaches itself with distance 0 exactly when it has at least
    /// one road: it lies on the trivial there-and-back cycle. An isolated
    /// place is disconnected even from itself.
    ///
    /// # Panics
    ///
    /// Panics if an id is out of range for the computed matrices.
    pub fn distance(&self, from: PlaceId, to: PlaceId) -> Option<u64> {
        let (i, j) = (from.as_usize(), to.as_usize());

        if i == j {
            // The diagonal of the distance matrix holds the no-edge sentinel,
            // so self-distance is answered from the linked set instead.
            assert!(i < self.dist.size(), "place id {i} out of range");
            return self.linked.contains(i).then_some(0);
        }

        match self.dist[(i, j)] {
            0 => None,
            distance => Some(distance),
        }
    }

    /// One shortest path from `from` to `to` as place ids, starting with
    /// `from` and ending with `to`, or `None` when the two places are not
    /// connected.
    ///
    /// # Panics
    ///
    /// Panics if an id is out of range for the computed matrices.
    pub fn path(&self, from: PlaceId, to: PlaceId) -> Option<&[PlaceId]> {
        self.paths[(from.as_usize(), to.as_usize())].as_deref()
    }
}

fn floyd_warshall(adjacency: &SquareMatrix<u64>) -> AllPairs {
    let n = adjacency.size();
    let mut dist = SquareMatrix::new(n, INFINITE);
    let mut paths: SquareMatrix<Option<Vec<PlaceId>>> = SquareMatrix::new(n, None);

    for i in 0..n {
        for j in 0..n {
            let weight = adjacency[(i, j)];

            if weight != 0 {
                dist[(i, j)] = weight;
                paths[(i, j)] = Some(vec![PlaceId::from_usize(i), PlaceId::from_usize(j)]);
            } else if i == j {
                dist[(i, j)] = 0;
            }
        }
    }

    // The intermediate place k must be the outermost loop: after iteration k,
    // dist holds the shortest distances using only intermediates 0..=k, which
    // is what the relaxation of iteration k + 1 builds on.
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let through = dist[(i, k)].saturating_add(dist[(k, j)]);

                if through < dist[(i, j)] {
                    dist[(i, j)] = through;

                    // Both legs are finite here, so both sub-paths exist. The
                    // concatenation drops the duplicated k and is an owned,
                    // freshly allocated sequence; cells never share storage.
                    let mut path = paths[(i, k)].as_deref().unwrap().to_vec();
                    path.extend_from_slice(&paths[(k, j)].as_deref().unwrap()[1..]);
                    paths[(i, j)] = Some(path);
                }
            }
        }
    }

    let mut linked = FixedBitSet::with_capacity(n);

    for i in 0..n {
        for j in 0..n {
            if dist[(i, j)] == INFINITE {
                // Still unreachable after relaxation: permanently
                // disconnected, rewritten to the no-edge sentinel.
                dist[(i, j)] = 0;
            } else if i != j {
                linked.insert(i);
            }
        }
    }

    // A linked place reaches itself by walking any incident road there and
    // back, so its self-path is the trivial one-stop sequence.
    for i in 0..n {
        paths[(i, i)] = linked.contains(i).then(|| vec![PlaceId::from_usize(i)]);
    }

    AllPairs {
        dist,
        paths,
        linked,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{dataset::Record, graph::RoadGraph};

    use super::*;

    fn id(index: usize) -> PlaceId {
        PlaceId::from_usize(index)
    }

    fn graph(records: Vec<Record>) -> RoadGraph {
        RoadGraph::from_records(records).unwrap()
    }

    #[test]
    fn end_to_end_chain() {
        // Places sort to [A, B, C, D].
        let graph = graph(vec![
            Record::new("A", "B", 5),
            Record::new("B", "C", 3),
            Record::new("A", "D", 10),
        ]);
        let all_pairs = AllPairs::compute(graph.adjacency());

        assert_eq!(all_pairs.distance(id(0), id(2)), Some(8));
        assert_eq!(all_pairs.path(id(0), id(2)), Some(&[id(0), id(1), id(2)][..]));

        assert_eq!(all_pairs.distance(id(2), id(3)), Some(18));
        assert_eq!(
            all_pairs.path(id(2), id(3)),
            Some(&[id(2), id(1), id(0), id(3)][..])
        );

        for i in 0..4 {
            assert_eq!(all_pairs.distance(id(i), id(i)), Some(0));
            assert_eq!(all_pairs.path(id(i), id(i)), Some(&[id(i)][..]));
        }
    }

    #[test]
    fn direct_edge_kept_when_shortest() {
        let graph = graph(vec![
            Record::new("A", "B", 5),
            Record::new("B", "C", 3),
            Record::new("A", "C", 4),
        ]);
        let all_pairs = AllPairs::compute(graph.adjacency());

        assert_eq!(all_pairs.distance(id(0), id(2)), Some(4));
        assert_eq!(all_pairs.path(id(0), id(2)), Some(&[id(0), id(2)][..]));
    }

    #[test]
    fn detour_beats_direct_edge() {
        let graph = graph(vec![
            Record::new("A", "B", 2),
            Record::new("B", "C", 2),
            Record::new("A", "C", 9),
        ]);
        let all_pairs = AllPairs::compute(graph.adjacency());

        assert_eq!(all_pairs.distance(id(0), id(2)), Some(4));
        assert_eq!(all_pairs.path(id(0), id(2)), Some(&[id(0), id(1), id(2)][..]));
    }

    #[test]
    fn disjoint_components() {
        // Places sort to [A, B, C, D]; A-B and C-D are separate components.
        let graph = graph(vec![Record::new("A", "B", 1), Record::new("C", "D", 1)]);
        let all_pairs = AllPairs::compute(graph.adjacency());

        assert_eq!(all_pairs.distance(id(0), id(1)), Some(1));
        assert_eq!(all_pairs.distance(id(0), id(2)), None);
        assert_eq!(all_pairs.distance(id(2), id(0)), None);
        assert_eq!(all_pairs.path(id(0), id(2)), None);
        assert_eq!(all_pairs.path(id(2), id(0)), None);
    }

    #[test]
    fn isolated_place_is_disconnected_from_itself() {
        // An isolated place cannot come from records (every record is an
        // edge), so the adjacency matrix is built directly.
        let mut adjacency = SquareMatrix::new(3, 0);
        adjacency[(0, 1)] = 7;
        adjacency[(1, 0)] = 7;

        let all_pairs = AllPairs::compute(&adjacency);

        assert_eq!(all_pairs.distance(id(0), id(0)), Some(0));
        assert_eq!(all_pairs.distance(id(2), id(2)), None);
        assert_eq!(all_pairs.path(id(2), id(2)), None);
        assert_eq!(all_pairs.distance(id(0), id(2)), None);
    }

    #[test]
    fn empty_matrix() {
        let all_pairs = AllPairs::compute(&SquareMatrix::new(0, 0));
        assert_eq!(all_pairs.place_count(), 0);
    }

    #[test]
    fn recomputation_is_identical() {
        let graph = graph(vec![
            Record::new("A", "B", 5),
            Record::new("B", "C", 3),
            Record::new("A", "D", 10),
            Record::new("C", "D", 1),
        ]);

        let first = AllPairs::compute(graph.adjacency());
        let second = AllPairs::compute(graph.adjacency());

        assert_eq!(first, second);
    }

    fn arb_adjacency() -> impl Strategy<Value = SquareMatrix<u64>> {
        (1usize..7).prop_flat_map(|n| {
            proptest::collection::vec((0..n, 0..n, 1u64..100), 0..=2 * n).prop_map(
                move |edges| {
                    let mut adjacency = SquareMatrix::new(n, 0);

                    for (a, b, weight) in edges {
                        if a != b {
                            adjacency[(a, b)] = weight;
                            adjacency[(b, a)] = weight;
                        }
                    }

                    adjacency
                },
            )
        })
    }

    proptest! {
        #[test]
        fn distances_are_symmetric(adjacency in arb_adjacency()) {
            let all_pairs = AllPairs::compute(&adjacency);
            let n = adjacency.size();

            for i in 0..n {
                for j in 0..n {
                    prop_assert_eq!(
                        all_pairs.distance(id(i), id(j)),
                        all_pairs.distance(id(j), id(i))
                    );
                }
            }
        }

        #[test]
        fn triangle_inequality(adjacency in arb_adjacency()) {
            let all_pairs = AllPairs::compute(&adjacency);
            let n = adjacency.size();

            for i in 0..n {
                for j in 0..n {
                    for k in 0..n {
                        let via = all_pairs
                            .distance(id(i), id(k))
                            .zip(all_pairs.distance(id(k), id(j)));

                        if let Some((left, right)) = via {
                            let direct = all_pairs.distance(id(i), id(j));
                            prop_assert!(direct.is_some());
                            prop_assert!(direct.unwrap() <= left + right);
                        }
                    }
                }
            }
        }

        #[test]
        fn paths_realize_distances(adjacency in arb_adjacency()) {
            let all_pairs = AllPairs::compute(&adjacency);
            let n = adjacency.size();

            for i in 0..n {
                for j in 0..n {
                    match all_pairs.path(id(i), id(j)) {
                        Some(path) => {
                            prop_assert_eq!(path.first(), Some(&id(i)));
                            prop_assert_eq!(path.last(), Some(&id(j)));

                            let mut total = 0;
                            for pair in path.windows(2) {
                                let weight =
                                    adjacency[(pair[0].as_usize(), pair[1].as_usize())];
                                prop_assert_ne!(weight, 0, "path uses a non-edge");
                                total += weight;
                            }

                            prop_assert_eq!(all_pairs.distance(id(i), id(j)), Some(total));
                        }
                        None => {
                            prop_assert_eq!(all_pairs.distance(id(i), id(j)), None);
                        }
                    }
                }
            }
        }
    }
}
