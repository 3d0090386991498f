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
use std::time::Instant;

use model::problem::VrptProblem;
use serde::Serialize;
use tracing::info;

use crate::errors::SolverError;
use crate::Algorithm;

/// One measured run of an algorithm on an instance. Writing these out as
/// CSV or LaTeX is the driver's concern; the record is plain serde data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkRecord {
    pub instance: String,
    pub algorithm: String,
    pub zones: usize,
    pub run: usize,
    pub cv_count: usize,
    pub tv_count: usize,
    pub zones_visited: usize,
    pub total_cv_duration_seconds: f64,
    pub total_waste: f64,
    pub wall_clock_ms: u64,
}

/// Runs `algorithm` on every instance `runs_per_instance` times, solving
/// both phases, and reports one record per run.
pub fn benchmark(
    problems: &[Arc<VrptProblem>],
    algorithm: &Algorithm,
    runs_per_instance: usize,
) -> Result<Vec<BenchmarkRecord>, SolverError> {
    if runs_per_instance == 0 {
        return Err(SolverError::InvalidArgument(
            "benchmark needs at least one run per instance".to_string(),
        ));
    }
    algorithm.validate()?;

    let mut records = Vec::with_capacity(problems.len() * runs_per_instance);
    for problem in problems {
        for run in 0..runs_per_instance {
            let start = Instant::now();
            let solution = crate::solve(problem, algorithm, None)?;
            let wall_clock_ms = start.elapsed().as_millis() as u64;

            info!(
                instance = problem.name(),
                run,
                cv_count = solution.cv_count(),
                tv_count = solution.tv_count(),
                wall_clock_ms,
                "benchmark run finished"
            );

            records.push(BenchmarkRecord {
                instance: problem.name().to_string(),
                algorithm: algorithm.to_string(),
                zones: problem.number_of_zones(),
                run,
                cv_count: solution.cv_count(),
                tv_count: solution.tv_count(),
                zones_visited: solution.visited_zones(problem),
                total_cv_duration_seconds: solution.total_cv_duration().in_seconds(),
                total_waste: solution.total_waste_collected().value(),
                wall_clock_ms,
            });
        }
    }
    Ok(records)
}
