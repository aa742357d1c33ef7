//! Route type.

/// An ordered sequence of location indices driven by a single vehicle.
///
/// The sequence always begins and ends at the depot. A route with no stops
/// is the degenerate `[depot, depot]` tour and is perfectly valid.
///
/// # Examples
///
/// ```
/// use rover_routing::models::Route;
///
/// let route = Route::from_stops(0, 0, &[2, 4]);
/// assert_eq!(route.nodes(), &[0, 2, 4, 0]);
/// assert_eq!(route.stops(), &[2, 4]);
/// assert_eq!(route.len(), 2);
///
/// let idle = Route::depot_only(1, 0);
/// assert_eq!(idle.nodes(), &[0, 0]);
/// assert!(idle.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    vehicle_id: usize,
    nodes: Vec<usize>,
}

impl Route {
    /// Creates a route that leaves the depot, visits `stops` in order and
    /// returns to the depot.
    pub fn from_stops(vehicle_id: usize, depot: usize, stops: &[usize]) -> Self {
        let mut nodes = Vec::with_capacity(stops.len() + 2);
        nodes.push(depot);
        nodes.extend_from_slice(stops);
        nodes.push(depot);
        Self { vehicle_id, nodes }
    }

    /// Creates the `[depot, depot]` route of an idle vehicle.
    pub fn depot_only(vehicle_id: usize, depot: usize) -> Self {
        Self::from_stops(vehicle_id, depot, &[])
    }

    /// Returns the vehicle driving this route.
    pub fn vehicle_id(&self) -> usize {
        self.vehicle_id
    }

    /// Full node sequence including both depot visits.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Depot index this route is anchored at.
    pub fn depot(&self) -> usize {
        self.nodes[0]
    }

    /// Visited stops in order, without the depot anchors.
    pub fn stops(&self) -> &[usize] {
        &self.nodes[1..self.nodes.len() - 1]
    }

    /// Number of stops (excluding depot).
    pub fn len(&self) -> usize {
        self.nodes.len() - 2
    }

    /// Returns `true` if the vehicle never leaves the depot.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
