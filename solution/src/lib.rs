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

mod cv_route;
mod delivery;
pub mod json_serialisation;
#[allow(clippy::module_inception)]
mod solution;
#[cfg(test)]
pub(crate) mod test_utilities;
mod tv_route;

pub use cv_route::CvRoute;
pub use delivery::DeliveryTask;
pub use solution::VrptSolution;
pub use tv_route::TvRoute;
