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

use std::sync::Arc;

use model::problem::VrptProblem;
use objective_framework::EvaluatedSolution;
use solution::VrptSolution;
use tracing::{debug, info};

use crate::algorithm::{Generator, Neighborhood};
use crate::control::SearchControl;
use crate::errors::SolverError;
use crate::objective;

/// Multi-Start: generate, improve, keep the best. Restarts only pay off
/// with a randomized generator; with the deterministic greedy one every
/// start looks the same.
pub struct MultiStart {
    starts: usize,
    generator: Generator,
    local_search: Neighborhood,
}

// static functions
impl MultiStart {
    pub fn new(starts: usize, generator: Generator, local_search: Neighborhood) -> MultiStart {
        MultiStart {
            starts,
            generator,
            local_search,
        }
    }
}

// methods
impl MultiStart {
    pub fn solve(
        &self,
        problem: &Arc<VrptProblem>,
        seed: Option<u64>,
        control: &SearchControl,
    ) -> Result<VrptSolution, SolverError> {
        let objective = objective::build(problem.clone());
        let mut generator = self.generator.build(seed)?;
        let local_search = self.local_search.build();

        let mut best: Option<EvaluatedSolution<VrptSolution>> = None;

        for start in 0..self.starts {
            // checkpoint: a cancelled search keeps the restarts finished so far
            if control.is_cancelled() {
                info!(start, "multi-start cancelled, returning best-so-far");
                break;
            }

            let initial = generator.generate(problem)?;
            let improved = local_search.improve(problem, &initial);
            let evaluated = objective.evaluate(improved);

            let is_new_best = best
                .as_ref()
                .map(|best| evaluated.objective_value() < best.objective_value())
                .unwrap_or(true);
            if is_new_best {
                debug!(
                    start,
                    cv_count = evaluated.solution().cv_count(),
                    "multi-start found new best"
                );
                best = Some(evaluated);
            }
        }

        match best {
            Some(best) => Ok(best.into_solution()),
            None => generator.generate(problem),
        }
    }
}
