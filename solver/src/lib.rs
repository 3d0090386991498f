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

mod algorithm;
pub mod benchmark;
mod control;
mod errors;
pub mod generator;
pub mod gvns;
pub mod local_search;
pub mod multi_start;
pub mod objective;
#[cfg(test)]
pub(crate) mod test_utilities;
#[cfg(test)]
mod tests;
pub mod tv_scheduler;

use std::sync::Arc;

use model::problem::VrptProblem;
use solution::VrptSolution;
use tracing::info;

pub use algorithm::{
    Algorithm, Generator, Neighborhood, DEFAULT_GRASP_ALPHA, DEFAULT_GRASP_RCL_SIZE,
    DEFAULT_GVNS_MAX_ITERATIONS, DEFAULT_MULTI_START_STARTS,
};
pub use benchmark::{benchmark, BenchmarkRecord};
pub use control::SearchControl;
pub use errors::SolverError;
pub use local_search::LocalSearchParams;

use crate::generator::SolutionGenerator;
use crate::gvns::Gvns;
use crate::multi_start::MultiStart;
use crate::tv_scheduler::GreedyTvScheduler;

/// Runs the selected Phase-1 algorithm and returns a CV-only solution
/// covering every collection zone. Given a seed, stochastic algorithms
/// are reproducible.
pub fn solve_phase1(
    problem: &Arc<VrptProblem>,
    algorithm: &Algorithm,
    seed: Option<u64>,
) -> Result<VrptSolution, SolverError> {
    solve_phase1_with_control(problem, algorithm, seed, &SearchControl::new())
}

/// Like [`solve_phase1`], but with a cancellation handle. On cancellation
/// the trajectory algorithms return the best solution found so far.
pub fn solve_phase1_with_control(
    problem: &Arc<VrptProblem>,
    algorithm: &Algorithm,
    seed: Option<u64>,
    control: &SearchControl,
) -> Result<VrptSolution, SolverError> {
    algorithm.validate()?;
    info!(algorithm = %algorithm, instance = problem.name(), "solving phase 1");

    match algorithm {
        Algorithm::Greedy => generator::GreedyCvGenerator::new().generate(problem),
        Algorithm::Grasp { alpha, rcl_size } => {
            generator::GraspCvGenerator::new(*alpha, *rcl_size, seed)?.generate(problem)
        }
        Algorithm::MultiStart {
            starts,
            generator,
            local_search,
        } => MultiStart::new(*starts, generator.clone(), local_search.clone())
            .solve(problem, seed, control),
        Algorithm::Gvns {
            max_iterations,
            generator,
            neighborhoods,
        } => Gvns::new(*max_iterations, generator.clone(), neighborhoods.clone())
            .solve(problem, seed, control),
    }
}

/// Runs the Phase-2 scheduler on a Phase-1 solution: matches every
/// delivery task to a transportation vehicle and hauls the waste to the
/// landfill.
pub fn solve_phase2(
    problem: &Arc<VrptProblem>,
    phase1_solution: VrptSolution,
) -> Result<VrptSolution, SolverError> {
    info!(instance = problem.name(), "solving phase 2");
    GreedyTvScheduler::new().schedule(problem, phase1_solution)
}

/// Convenience call chaining both phases.
pub fn solve(
    problem: &Arc<VrptProblem>,
    algorithm: &Algorithm,
    seed: Option<u64>,
) -> Result<VrptSolution, SolverError> {
    let phase1_solution = solve_phase1(problem, algorithm, seed)?;
    solve_phase2(problem, phase1_solution)
}
