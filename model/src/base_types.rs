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

use crate::utilities::CopyStr;

pub mod capacity;
pub mod distance;
pub mod duration;
pub mod speed;

pub use capacity::Capacity;
pub use distance::{Distance, DistanceUnit};
pub use duration::{Duration, TimeUnit};
pub use speed::Speed;

/// Stable identifier of a location. Ids are short strings ("depot",
/// "zone_42", ...), so they are stored inline and stay copyable.
pub type LocationId = CopyStr<24>;

pub type VehicleCount = u32;
