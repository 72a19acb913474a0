//! Stitching per-leg shortest paths into one multi-stop itinerary.

use thiserror::Error;

use crate::{place::PlaceId, registry::Registry};

/// A combined route visiting the requested stops in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    /// Every place on the route, with the junction between consecutive legs
    /// counted once.
    pub stops: Vec<PlaceId>,
    /// Total distance over all legs.
    pub distance: u64,
}

/// The requested route crosses a pair of places with no connection.
///
/// This is an expected result for datasets with several components, not a
/// failure of the computation; the caller decides how to report it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("places {from} and {to} are not connected")]
pub struct Disconnected {
    pub from: String,
    pub to: String,
}

/// Chains the shortest sub-paths between consecutive stops into one route.
///
/// The itinerary starts at `start` and visits every destination in order,
/// following the shortest path for each leg. The junction shared by two
/// consecutive legs appears once in the result. The first leg without a path
/// is reported as [`Disconnected`]; an empty destination list yields the
/// one-stop itinerary with distance 0.
///
/// # Panics
///
/// Panics if any id is out of range for the registry.
pub fn plan(
    registry: &Registry,
    start: PlaceId,
    destinations: &[PlaceId],
) -> Result<Itinerary, Disconnected> {
    let mut stops = vec![start];
    let mut distance = 0;
    let mut last = start;

    for &next in destinations {
        let from = registry.place_by_id(last).expect("stop id out of range");

        match from.path_to(next) {
            Some(leg) => {
                // The leg starts at the previous stop, which is already the
                // tail of the route.
                stops.pop();
                stops.extend_from_slice(leg);

                // A leg with a path always has a distance.
                distance += from.distance_to(next).unwrap();
            }
            None => {
                let to = registry.place_by_id(next).expect("stop id out of range");
                return Err(Disconnected {
                    from: from.name().to_string(),
                    to: to.name().to_string(),
                });
            }
        }

        last = next;
    }

    Ok(Itinerary { stops, distance })
}
