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

pub mod grasp;
pub mod greedy;

pub use grasp::GraspCvGenerator;
pub use greedy::GreedyCvGenerator;

use model::problem::VrptProblem;
use solution::VrptSolution;

use crate::errors::SolverError;

/// A constructive heuristic for Phase 1. The output is a CV-only solution
/// in which every collection zone appears in exactly one route and every
/// route satisfies its capacity and duration invariants, has returned to
/// the depot and carries no residual load.
pub trait SolutionGenerator {
    fn generate(&mut self, problem: &VrptProblem) -> Result<VrptSolution, SolverError>;

    fn name(&self) -> String;
}
