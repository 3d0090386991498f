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

use std::fmt;

use crate::errors::SolverError;
use crate::generator::{GraspCvGenerator, GreedyCvGenerator, SolutionGenerator};
use crate::local_search::task_exchange_between_routes::TaskExchangeBetweenRoutes;
use crate::local_search::task_exchange_within_route::TaskExchangeWithinRoute;
use crate::local_search::task_reinsertion_between_routes::TaskReinsertionBetweenRoutes;
use crate::local_search::task_reinsertion_within_route::TaskReinsertionWithinRoute;
use crate::local_search::two_opt::TwoOpt;
use crate::local_search::{LocalSearch, LocalSearchParams};

pub const DEFAULT_GRASP_ALPHA: f64 = 0.3;
pub const DEFAULT_GRASP_RCL_SIZE: usize = 5;
pub const DEFAULT_MULTI_START_STARTS: usize = 10;
pub const DEFAULT_GVNS_MAX_ITERATIONS: usize = 50;

/// The constructive heuristics of Phase 1.
#[derive(Clone, Debug, PartialEq)]
pub enum Generator {
    Greedy,
    Grasp { alpha: f64, rcl_size: usize },
}

impl Default for Generator {
    fn default() -> Generator {
        Generator::Grasp {
            alpha: DEFAULT_GRASP_ALPHA,
            rcl_size: DEFAULT_GRASP_RCL_SIZE,
        }
    }
}

impl Generator {
    pub(crate) fn validate(&self) -> Result<(), SolverError> {
        match self {
            Generator::Greedy => Ok(()),
            Generator::Grasp { alpha, rcl_size } => {
                if !(0.0..=1.0).contains(alpha) {
                    return Err(SolverError::InvalidArgument(format!(
                        "GRASP alpha must lie in [0, 1]: {}",
                        alpha
                    )));
                }
                if *rcl_size == 0 {
                    return Err(SolverError::InvalidArgument(
                        "GRASP rcl_size must be at least 1".to_string(),
                    ));
                }
                Ok(())
            }
        }
    }

    pub(crate) fn build(
        &self,
        seed: Option<u64>,
    ) -> Result<Box<dyn SolutionGenerator>, SolverError> {
        match self {
            Generator::Greedy => Ok(Box::new(GreedyCvGenerator::new())),
            Generator::Grasp { alpha, rcl_size } => {
                Ok(Box::new(GraspCvGenerator::new(*alpha, *rcl_size, seed)?))
            }
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generator::Greedy => write!(f, "Greedy"),
            Generator::Grasp { alpha, rcl_size } => {
                write!(f, "GRASP(alpha={:.2}, rcl_size={})", alpha, rcl_size)
            }
        }
    }
}

/// The local-search neighborhoods, each with its iteration budget and
/// first- vs best-improvement switch.
#[derive(Clone, Debug, PartialEq)]
pub enum Neighborhood {
    TaskReinsertionWithinRoute(LocalSearchParams),
    TaskReinsertionBetweenRoutes(LocalSearchParams),
    TaskExchangeWithinRoute(LocalSearchParams),
    TaskExchangeBetweenRoutes(LocalSearchParams),
    TwoOpt(LocalSearchParams),
}

impl Neighborhood {
    /// The default neighborhood order of the GVNS descent.
    pub fn default_order() -> Vec<Neighborhood> {
        let params = LocalSearchParams::default();
        vec![
            Neighborhood::TaskReinsertionWithinRoute(params),
            Neighborhood::TaskReinsertionBetweenRoutes(params),
            Neighborhood::TaskExchangeWithinRoute(params),
            Neighborhood::TaskExchangeBetweenRoutes(params),
            Neighborhood::TwoOpt(params),
        ]
    }

    pub(crate) fn params(&self) -> LocalSearchParams {
        match self {
            Neighborhood::TaskReinsertionWithinRoute(params)
            | Neighborhood::TaskReinsertionBetweenRoutes(params)
            | Neighborhood::TaskExchangeWithinRoute(params)
            | Neighborhood::TaskExchangeBetweenRoutes(params)
            | Neighborhood::TwoOpt(params) => *params,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), SolverError> {
        if self.params().max_iterations == 0 {
            return Err(SolverError::InvalidArgument(
                "a neighborhood needs at least one iteration".to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn build(&self) -> Box<dyn LocalSearch> {
        match self {
            Neighborhood::TaskReinsertionWithinRoute(params) => {
                Box::new(TaskReinsertionWithinRoute::new(*params))
            }
            Neighborhood::TaskReinsertionBetweenRoutes(params) => {
                Box::new(TaskReinsertionBetweenRoutes::new(*params))
            }
            Neighborhood::TaskExchangeWithinRoute(params) => {
                Box::new(TaskExchangeWithinRoute::new(*params))
            }
            Neighborhood::TaskExchangeBetweenRoutes(params) => {
                Box::new(TaskExchangeBetweenRoutes::new(*params))
            }
            Neighborhood::TwoOpt(params) => Box::new(TwoOpt::new(*params)),
        }
    }
}

impl fmt::Display for Neighborhood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Neighborhood::TaskReinsertionWithinRoute(_) => "TaskReinsertionWithinRoute",
            Neighborhood::TaskReinsertionBetweenRoutes(_) => "TaskReinsertionBetweenRoutes",
            Neighborhood::TaskExchangeWithinRoute(_) => "TaskExchangeWithinRoute",
            Neighborhood::TaskExchangeBetweenRoutes(_) => "TaskExchangeBetweenRoutes",
            Neighborhood::TwoOpt(_) => "TwoOpt",
        };
        write!(f, "{}", name)
    }
}

/// The selectable Phase-1 algorithms of the library, dispatched as a sum
/// type instead of the string-keyed registry of older revisions.
#[derive(Clone, Debug, PartialEq)]
pub enum Algorithm {
    Greedy,
    Grasp {
        alpha: f64,
        rcl_size: usize,
    },
    MultiStart {
        starts: usize,
        generator: Generator,
        local_search: Neighborhood,
    },
    Gvns {
        max_iterations: usize,
        generator: Generator,
        neighborhoods: Vec<Neighborhood>,
    },
}

impl Algorithm {
    /// Multi-Start with its default configuration.
    pub fn default_multi_start() -> Algorithm {
        Algorithm::MultiStart {
            starts: DEFAULT_MULTI_START_STARTS,
            generator: Generator::default(),
            local_search: Neighborhood::TaskReinsertionBetweenRoutes(LocalSearchParams::default()),
        }
    }

    /// GVNS with its default configuration.
    pub fn default_gvns() -> Algorithm {
        Algorithm::Gvns {
            max_iterations: DEFAULT_GVNS_MAX_ITERATIONS,
            generator: Generator::default(),
            neighborhoods: Neighborhood::default_order(),
        }
    }

    pub fn validate(&self) -> Result<(), SolverError> {
        match self {
            Algorithm::Greedy => Ok(()),
            Algorithm::Grasp { alpha, rcl_size } => Generator::Grasp {
                alpha: *alpha,
                rcl_size: *rcl_size,
            }
            .validate(),
            Algorithm::MultiStart {
                starts,
                generator,
                local_search,
            } => {
                if *starts == 0 {
                    return Err(SolverError::InvalidArgument(
                        "Multi-Start needs at least one start".to_string(),
                    ));
                }
                generator.validate()?;
                local_search.validate()
            }
            Algorithm::Gvns {
                max_iterations,
                generator,
                neighborhoods,
            } => {
                if *max_iterations == 0 {
                    return Err(SolverError::InvalidArgument(
                        "GVNS needs at least one iteration".to_string(),
                    ));
                }
                if neighborhoods.is_empty() {
                    return Err(SolverError::InvalidArgument(
                        "GVNS needs a non-empty neighborhood list".to_string(),
                    ));
                }
                generator.validate()?;
                neighborhoods
                    .iter()
                    .try_for_each(|neighborhood| neighborhood.validate())
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Greedy => write!(f, "Greedy"),
            Algorithm::Grasp { alpha, rcl_size } => {
                write!(f, "GRASP(alpha={:.2}, rcl_size={})", alpha, rcl_size)
            }
            Algorithm::MultiStart {
                starts,
                generator,
                local_search,
            } => write!(f, "MultiStart({}, {}, {})", starts, generator, local_search),
            Algorithm::Gvns {
                max_iterations,
                generator,
                neighborhoods,
            } => write!(
                f,
                "GVNS({}, {}, {} neighborhoods)",
                max_iterations,
                generator,
                neighborhoods.len()
            ),
        }
    }
}
