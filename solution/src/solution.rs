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

#[cfg(test)]
mod tests;

use std::collections::HashSet;
use std::fmt;

use im::Vector;
use itertools::Itertools;
use model::base_types::{Capacity, Duration, LocationId};
use model::location::LocationType;
use model::problem::VrptProblem;

use crate::cv_route::CvRoute;
use crate::delivery::DeliveryTask;
use crate::tv_route::TvRoute;

/// A (possibly partial) solution of the two-phase problem: the collection
/// routes of Phase 1 plus, once the scheduler has run, the transportation
/// routes of Phase 2.
///
/// Solutions are values. Operators copy, modify and discard them; nobody
/// ever mutates a caller's solution. The route lists are persistent
/// vectors, so cloning is cheap during local search.
#[derive(Clone, Default)]
pub struct VrptSolution {
    cv_routes: Vector<CvRoute>,
    tv_routes: Vector<TvRoute>,
    is_complete: bool,
}

// static functions
impl VrptSolution {
    pub fn new() -> VrptSolution {
        VrptSolution {
            cv_routes: Vector::new(),
            tv_routes: Vector::new(),
            is_complete: false,
        }
    }
}

// basic public methods
impl VrptSolution {
    pub fn cv_routes(&self) -> impl Iterator<Item = &CvRoute> {
        self.cv_routes.iter()
    }

    pub fn tv_routes(&self) -> impl Iterator<Item = &TvRoute> {
        self.tv_routes.iter()
    }

    pub fn cv_route(&self, index: usize) -> Option<&CvRoute> {
        self.cv_routes.get(index)
    }

    pub fn cv_count(&self) -> usize {
        self.cv_routes.len()
    }

    pub fn tv_count(&self) -> usize {
        self.tv_routes.len()
    }

    /// true once Phase 2 has produced the transportation routes
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Number of distinct collection zones covered by the CV routes.
    pub fn visited_zones(&self, problem: &VrptProblem) -> usize {
        let mut visited: HashSet<LocationId> = HashSet::new();
        for route in self.cv_routes.iter() {
            for location_id in route.sequence() {
                if problem
                    .location(*location_id)
                    .map(|location| location.location_type() == LocationType::CollectionZone)
                    .unwrap_or(false)
                {
                    visited.insert(*location_id);
                }
            }
        }
        visited.len()
    }

    pub fn total_cv_duration(&self) -> Duration {
        self.cv_routes.iter().map(|route| route.total_duration()).sum()
    }

    /// All delivery tasks of all CV routes, ascending by arrival time.
    pub fn delivery_tasks(&self) -> Vec<DeliveryTask> {
        self.cv_routes
            .iter()
            .flat_map(|route| route.deliveries().iter().cloned())
            .sorted_by_key(|task| task.arrival_time())
            .collect()
    }

    pub fn total_waste_collected(&self) -> Capacity {
        self.cv_routes
            .iter()
            .flat_map(|route| route.deliveries().iter())
            .map(|delivery| delivery.amount())
            .sum()
    }

    pub fn is_valid(&self, problem: &VrptProblem) -> bool {
        if !self.cv_routes.iter().all(|route| route.is_valid(problem)) {
            return false;
        }
        if self.is_complete && !self.tv_routes.iter().all(|route| route.is_valid(problem)) {
            return false;
        }
        true
    }
}

// modification methods
impl VrptSolution {
    pub fn push_cv_route(&mut self, route: CvRoute) {
        self.cv_routes.push_back(route);
    }

    pub fn push_tv_route(&mut self, route: TvRoute) {
        self.tv_routes.push_back(route);
    }

    /// Replaces the route at `index`. Panics if the index is out of range.
    pub fn set_cv_route(&mut self, index: usize, route: CvRoute) {
        self.cv_routes.set(index, route);
    }

    pub fn remove_empty_cv_routes(&mut self) {
        self.cv_routes = self
            .cv_routes
            .iter()
            .filter(|route| !route.is_empty())
            .cloned()
            .collect();
    }

    pub fn set_complete(&mut self, complete: bool) {
        self.is_complete = complete;
    }
}

impl fmt::Display for VrptSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "solution with {} CV routes and {} TV routes{}:",
            self.cv_count(),
            self.tv_count(),
            if self.is_complete { "" } else { " (phase 1 only)" }
        )?;
        for route in self.cv_routes.iter() {
            writeln!(f, "  {}", route)?;
        }
        for route in self.tv_routes.iter() {
            writeln!(f, "  {}", route)?;
        }
        Ok(())
    }
}
