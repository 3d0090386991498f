// © 2023-2024 ETH Zurich
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// any later version.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


use std::collections::BinaryHeap;
use std::collections::HashMap;

use crate::base_types::{Distance, Duration, LocationId, Speed};
use crate::errors::ModelError;
use crate::location::{Location, LocationType};

/// A type for storing all locations of an instance together with the
/// pair-wise distances and travel times between them.
/// Distances are stored as a Vec<Vec<Distance>>-matrix.
/// Travel times are stored as a Vec<Vec<Duration>>-matrix.
/// The indices in the matrices equal the indices in the location vector;
/// the id-to-index map is consistent with both.
///
/// On top of the matrices a balanced 2-dimensional K-D tree (median split,
/// x-axis on even depths, y-axis on odd depths) answers type-filtered
/// nearest-neighbor queries. Ties on the split axis go to the left subtree.
///
/// Building is O(n^2) in time and memory for the matrices; every later
/// distance or travel-time lookup is O(1).
pub struct KdTree {
    locations: Vec<Location>,
    index_of: HashMap<LocationId, usize>,
    root: Option<Box<Node>>,
    distance_matrix: Vec<Vec<Distance>>,
    travel_time_matrix: Vec<Vec<Duration>>,
}

struct Node {
    location_index: usize,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

/// Max-heap entry for the k-nearest search; ordered by distance so that
/// the worst candidate sits on top.
struct HeapEntry {
    distance_meters: f64,
    location_index: usize,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.distance_meters == other.distance_meters
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance_meters.total_cmp(&other.distance_meters)
    }
}

// static functions
impl KdTree {
    pub fn build(locations: Vec<Location>, speed: Speed) -> Result<KdTree, ModelError> {
        if locations.is_empty() {
            return Err(ModelError::InvalidArgument(
                "cannot build a spatial index from an empty location set".to_string(),
            ));
        }

        let mut index_of = HashMap::with_capacity(locations.len());
        for (index, location) in locations.iter().enumerate() {
            if index_of.insert(location.id(), index).is_some() {
                return Err(ModelError::InvalidArgument(format!(
                    "duplicate location id: {}",
                    location.id()
                )));
            }
        }

        let distance_matrix: Vec<Vec<Distance>> = locations
            .iter()
            .map(|a| locations.iter().map(|b| Self::euclidean(a, b)).collect())
            .collect();
        let travel_time_matrix: Vec<Vec<Duration>> = distance_matrix
            .iter()
            .map(|row| row.iter().map(|d| speed.travel_duration(*d)).collect())
            .collect();

        let mut indices: Vec<usize> = (0..locations.len()).collect();
        let root = Self::build_recursive(&locations, &mut indices, 0);

        Ok(KdTree {
            locations,
            index_of,
            root,
            distance_matrix,
            travel_time_matrix,
        })
    }

    fn build_recursive(
        locations: &[Location],
        indices: &mut [usize],
        depth: usize,
    ) -> Option<Box<Node>> {
        if indices.is_empty() {
            return None;
        }

        // stable sort, so axis ties keep their order and land left of the median
        indices.sort_by(|a, b| {
            locations[*a]
                .coordinate(depth)
                .total_cmp(&locations[*b].coordinate(depth))
        });
        let mid = indices.len() / 2;
        let location_index = indices[mid];

        let (left_indices, rest) = indices.split_at_mut(mid);
        let right_indices = &mut rest[1..];

        Some(Box::new(Node {
            location_index,
            left: Self::build_recursive(locations, left_indices, depth + 1),
            right: Self::build_recursive(locations, right_indices, depth + 1),
        }))
    }

    fn euclidean(a: &Location, b: &Location) -> Distance {
        let dx = a.x() - b.x();
        let dy = a.y() - b.y();
        Distance::from_meters((dx * dx + dy * dy).sqrt())
    }
}

// methods
impl KdTree {
    pub fn locations(&self) -> &[Location] {
        self.locations.as_slice()
    }

    pub fn location(&self, id: LocationId) -> Result<&Location, ModelError> {
        self.index(id).map(|index| &self.locations[index])
    }

    pub fn contains(&self, id: LocationId) -> bool {
        self.index_of.contains_key(&id)
    }

    pub fn distance(&self, from: LocationId, to: LocationId) -> Result<Distance, ModelError> {
        Ok(self.distance_matrix[self.index(from)?][self.index(to)?])
    }

    pub fn travel_time(&self, from: LocationId, to: LocationId) -> Result<Duration, ModelError> {
        Ok(self.travel_time_matrix[self.index(from)?][self.index(to)?])
    }

    /// The closest location of the given type, measured from `from`.
    /// Returns None if no location of that type exists. A location is its
    /// own nearest neighbor if the types match.
    pub fn nearest(&self, from: &Location, target_type: LocationType) -> Option<&Location> {
        let mut best: Option<usize> = None;
        let mut best_dist = f64::MAX;
        self.nearest_recursive(
            self.root.as_deref(),
            from,
            target_type,
            0,
            &mut best,
            &mut best_dist,
        );
        best.map(|index| &self.locations[index])
    }

    /// The k closest locations of the given type, ascending by distance.
    pub fn k_nearest(
        &self,
        from: &Location,
        target_type: LocationType,
        k: usize,
    ) -> Result<Vec<&Location>, ModelError> {
        if k == 0 {
            return Err(ModelError::InvalidArgument(
                "k must be at least 1 for a k-nearest query".to_string(),
            ));
        }

        let mut heap: BinaryHeap<HeapEntry> = BinaryHeap::with_capacity(k + 1);
        self.k_nearest_recursive(self.root.as_deref(), from, target_type, k, 0, &mut heap);

        let entries = heap.into_sorted_vec(); // ascending by distance
        Ok(entries
            .into_iter()
            .map(|entry| &self.locations[entry.location_index])
            .collect())
    }

    fn index(&self, id: LocationId) -> Result<usize, ModelError> {
        self.index_of
            .get(&id)
            .copied()
            .ok_or_else(|| ModelError::NotFound(format!("unknown location id: {}", id)))
    }

    fn nearest_recursive(
        &self,
        node: Option<&Node>,
        target: &Location,
        target_type: LocationType,
        depth: usize,
        best: &mut Option<usize>,
        best_dist: &mut f64,
    ) {
        let node = match node {
            Some(node) => node,
            None => return,
        };
        let location = &self.locations[node.location_index];

        let dist = Self::euclidean(location, target).in_meters();
        if (best.is_none() || dist < *best_dist) && location.location_type() == target_type {
            *best = Some(node.location_index);
            *best_dist = dist;
        }

        let axis_dist = (location.coordinate(depth) - target.coordinate(depth)).abs();
        let go_left = target.coordinate(depth) < location.coordinate(depth);
        let (first, second) = if go_left {
            (node.left.as_deref(), node.right.as_deref())
        } else {
            (node.right.as_deref(), node.left.as_deref())
        };

        self.nearest_recursive(first, target, target_type, depth + 1, best, best_dist);

        // the far child can only contain a closer point if the splitting
        // plane is closer than the current best
        if axis_dist < *best_dist {
            self.nearest_recursive(second, target, target_type, depth + 1, best, best_dist);
        }
    }

    fn k_nearest_recursive(
        &self,
        node: Option<&Node>,
        target: &Location,
        target_type: LocationType,
        k: usize,
        depth: usize,
        heap: &mut BinaryHeap<HeapEntry>,
    ) {
        let node = match node {
            Some(node) => node,
            None => return,
        };
        let location = &self.locations[node.location_index];

        if location.location_type() == target_type {
            let dist = Self::euclidean(location, target).in_meters();
            if heap.len() < k {
                heap.push(HeapEntry {
                    distance_meters: dist,
                    location_index: node.location_index,
                });
            } else if dist < heap.peek().map(|e| e.distance_meters).unwrap_or(f64::MAX) {
                heap.pop();
                heap.push(HeapEntry {
                    distance_meters: dist,
                    location_index: node.location_index,
                });
            }
        }

        let axis_dist = (location.coordinate(depth) - target.coordinate(depth)).abs();
        let go_left = target.coordinate(depth) < location.coordinate(depth);
        let (first, second) = if go_left {
            (node.left.as_deref(), node.right.as_deref())
        } else {
            (node.right.as_deref(), node.left.as_deref())
        };

        self.k_nearest_recursive(first, target, target_type, k, depth + 1, heap);

        let worst = heap.peek().map(|e| e.distance_meters).unwrap_or(f64::MAX);
        if heap.len() < k || axis_dist < worst {
            self.k_nearest_recursive(second, target, target_type, k, depth + 1, heap);
        }
    }
}
