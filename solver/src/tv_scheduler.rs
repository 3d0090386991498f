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


use model::base_types::{Capacity, Duration};
use model::problem::VrptProblem;
use solution::{DeliveryTask, TvRoute, VrptSolution};
use tracing::{debug, trace};

use crate::errors::SolverError;

/// Phase 2: a time-ordered greedy dispatcher. Every delivery task, in
/// arrival order, is inserted into the cheapest feasible transportation
/// route; if none qualifies, a new vehicle is opened at the landfill.
/// Waiting windows are exploited for landfill detours that free capacity.
/// Single pass, no backtracking; O(tasks x vehicles).
#[derive(Default)]
pub struct GreedyTvScheduler;

/// Outcome of probing one existing route for one task.
struct InsertionPlan {
    route_index: usize,
    cost: Duration,
    landfill_first: bool,
}

impl GreedyTvScheduler {
    pub fn new() -> GreedyTvScheduler {
        GreedyTvScheduler
    }

    /// Consumes a Phase-1 solution and returns it with the transportation
    /// routes filled in and the completeness flag set.
    pub fn schedule(
        &self,
        problem: &VrptProblem,
        solution: VrptSolution,
    ) -> Result<VrptSolution, SolverError> {
        let mut solution = solution;
        let tasks = solution.delivery_tasks();

        if tasks.is_empty() {
            solution.set_complete(true);
            return Ok(solution);
        }

        // the smallest task drives the "is it worth going home" rule: a
        // vehicle that cannot even take the smallest amount returns early
        let q_min = tasks
            .iter()
            .map(|task| task.amount())
            .reduce(|a, b| if b < a { b } else { a })
            .unwrap();

        let mut tv_routes: Vec<TvRoute> = Vec::new();

        for (index, task) in tasks.iter().enumerate() {
            let next_task = tasks.get(index + 1);

            let best = self.best_insertion(problem, &tv_routes, task, next_task)?;

            match best {
                Some(plan) => {
                    self.commit_to_existing(problem, &mut tv_routes, &plan, task)?;
                    let route = &mut tv_routes[plan.route_index];
                    apply_post_task_landfill_rule(problem, route, task, next_task, q_min)?;
                }
                None => {
                    let mut route = TvRoute::new(
                        format!("TV{}", tv_routes.len() + 1),
                        problem.tv_capacity(),
                        problem.tv_max_duration(),
                    );
                    route.add_location(problem.landfill().id(), problem)?;
                    let ok = route.add_pickup(
                        task.swts_id(),
                        task.arrival_time(),
                        task.amount(),
                        problem,
                    )?;
                    if !ok {
                        return Err(SolverError::SchedulingInfeasible(format!(
                            "task at {} ({} for {}) does not fit a fresh vehicle",
                            task.swts_id(),
                            task.amount(),
                            task.arrival_time()
                        )));
                    }
                    debug!(task = %task, vehicle = route.vehicle_id(), "opened new TV route");
                    apply_post_task_landfill_rule(problem, &mut route, task, next_task, q_min)?;
                    tv_routes.push(route);
                }
            }
        }

        // every non-empty route goes home in the end
        for mut route in tv_routes {
            route.finalize(problem)?;
            solution.push_tv_route(route);
        }
        solution.set_complete(true);
        Ok(solution)
    }

    /// Scans the existing routes for the cheapest feasible insertion of
    /// `task`. The cost of a route is its travel leg, discounted by 20%
    /// when the vehicle would also be a good fit for the next task.
    fn best_insertion(
        &self,
        problem: &VrptProblem,
        tv_routes: &[TvRoute],
        task: &DeliveryTask,
        next_task: Option<&DeliveryTask>,
    ) -> Result<Option<InsertionPlan>, SolverError> {
        let landfill_id = problem.landfill().id();
        let mut best: Option<InsertionPlan> = None;

        for (route_index, route) in tv_routes.iter().enumerate() {
            let last = route.last_location_id().unwrap_or(landfill_id);
            let travel = problem.travel_time(last, task.swts_id())?;
            let direct_arrival = route.current_time() + travel;

            // arriving after the delivery means the task is missed
            if direct_arrival > task.arrival_time() {
                trace!(vehicle = route.vehicle_id(), "too late for task, skipping");
                continue;
            }
            let waiting = task.arrival_time() - direct_arrival;

            let mut capacity_ok = route.residual_capacity() >= task.amount();
            let mut landfill_during_wait = false;
            let mut landfill_first = false;

            // a long enough wait can hide a full landfill round trip
            if !capacity_ok && waiting > Duration::ZERO {
                let detour = problem.travel_time(last, landfill_id)?
                    + problem.travel_time(landfill_id, task.swts_id())?;
                if detour <= waiting {
                    landfill_during_wait = true;
                    capacity_ok = true;
                }
            }

            let return_time = problem.travel_time(task.swts_id(), landfill_id)?;
            let effective_service_time = if landfill_during_wait {
                task.arrival_time()
            } else if !capacity_ok {
                // forced detour: only works if the vehicle still makes it
                // to the station in time
                let via_landfill = route.current_time()
                    + problem.travel_time(last, landfill_id)?
                    + problem.travel_time(landfill_id, task.swts_id())?;
                if via_landfill > task.arrival_time() {
                    continue;
                }
                landfill_first = true;
                task.arrival_time()
            } else {
                direct_arrival.max(task.arrival_time())
            };

            let total_time = effective_service_time + return_time;
            if total_time > problem.tv_max_duration() + problem.epsilon() {
                continue;
            }

            let mut cost = travel;
            if let Some(next) = next_task {
                if is_good_for_next(problem, route, task, next, effective_service_time)? {
                    cost = cost * 0.8;
                }
            }

            if best.as_ref().map(|plan| cost < plan.cost).unwrap_or(true) {
                best = Some(InsertionPlan {
                    route_index,
                    cost,
                    landfill_first,
                });
            }
        }

        Ok(best)
    }

    /// Commits `task` to the chosen route: a forced or opportunistic
    /// landfill stop first where the probe asked for one, then the pickup.
    fn commit_to_existing(
        &self,
        problem: &VrptProblem,
        tv_routes: &mut [TvRoute],
        plan: &InsertionPlan,
        task: &DeliveryTask,
    ) -> Result<(), SolverError> {
        let landfill_id = problem.landfill().id();
        let route = &mut tv_routes[plan.route_index];
        let last = route.last_location_id().unwrap_or(landfill_id);

        if plan.landfill_first || route.residual_capacity() < task.amount() {
            route.add_location(landfill_id, problem)?;
        } else if last != task.swts_id() {
            // opportunistic: empty the vehicle if the wait covers it
            let travel = problem.travel_time(last, task.swts_id())?;
            let direct_arrival = route.current_time() + travel;
            if direct_arrival < task.arrival_time() {
                let waiting = task.arrival_time() - direct_arrival;
                let detour = problem.travel_time(last, landfill_id)?
                    + problem.travel_time(landfill_id, task.swts_id())?;
                if detour <= waiting {
                    route.add_location(landfill_id, problem)?;
                }
            }
        }

        let ok = route.add_pickup(task.swts_id(), task.arrival_time(), task.amount(), problem)?;
        if !ok {
            return Err(SolverError::SchedulingInfeasible(format!(
                "pickup of {} at {} failed on {}",
                task.amount(),
                task.swts_id(),
                route.vehicle_id()
            )));
        }
        debug!(task = %task, vehicle = route.vehicle_id(), "assigned task to TV route");
        Ok(())
    }
}

/// Whether `route` would still be a good fit for `next` after serving
/// `task`: the next station is reachable in time and the residual capacity
/// after the pickup suffices.
fn is_good_for_next(
    problem: &VrptProblem,
    route: &TvRoute,
    task: &DeliveryTask,
    next: &DeliveryTask,
    effective_service_time: Duration,
) -> Result<bool, SolverError> {
    if next.arrival_time() < effective_service_time {
        return Ok(false);
    }
    let time_to_next = next.arrival_time() - effective_service_time;
    let travel_to_next = problem.travel_time(task.swts_id(), next.swts_id())?;
    Ok(travel_to_next <= time_to_next
        && route.residual_capacity().sub_max_zero(task.amount()) >= next.amount())
}

/// After serving a task the vehicle returns to the landfill if it is
/// (almost) full, if this was the last task, or if there is slack enough
/// for the round trip and it pays off for the next task.
fn apply_post_task_landfill_rule(
    problem: &VrptProblem,
    route: &mut TvRoute,
    task: &DeliveryTask,
    next_task: Option<&DeliveryTask>,
    q_min: Capacity,
) -> Result<(), SolverError> {
    let landfill_id = problem.landfill().id();
    let mut return_to_landfill = route.residual_capacity() < q_min || next_task.is_none();

    if let (false, Some(next)) = (return_to_landfill, next_task) {
        let time_to_next = next.arrival_time().sub_max_zero(task.arrival_time());
        let to_landfill = problem.travel_time(task.swts_id(), landfill_id)?;
        let from_landfill = problem.travel_time(landfill_id, next.swts_id())?;
        let direct_to_next = problem.travel_time(task.swts_id(), next.swts_id())?;

        if to_landfill + from_landfill <= time_to_next
            && (route.residual_capacity() < next.amount()
                || to_landfill + from_landfill < direct_to_next)
        {
            return_to_landfill = true;
        }
    }

    if return_to_landfill {
        route.add_location(landfill_id, problem)?;
    }
    Ok(())
}
