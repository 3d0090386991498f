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

use model::errors::ModelError;
use thiserror::Error;

/// Errors surfaced by the solving entry points. Feasibility failures
/// inside local search are never errors; operators discard the neighbor
/// and keep scanning.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Phase 1 cannot cover a zone with the given fleet parameters.
    #[error("infeasible: {0}")]
    Infeasible(String),

    /// Phase 2 cannot place a delivery task in any existing or new route.
    #[error("scheduling infeasible: {0}")]
    SchedulingInfeasible(String),
}
