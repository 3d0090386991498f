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

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative cancellation handle for the long-running searches. The
/// trajectory algorithms check it between Multi-Start restarts, at the top
/// of every GVNS iteration and between the neighborhoods of the VND
/// descent; on cancellation they return the best solution found so far.
///
/// Clones share the flag, so a driver can keep one handle and pass the
/// other into the search (which itself runs single-threaded).
#[derive(Clone, Default, Debug)]
pub struct SearchControl {
    cancelled: Arc<AtomicBool>,
}

impl SearchControl {
    pub fn new() -> SearchControl {
        SearchControl::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::SearchControl;

    #[test]
    fn cancellation_is_shared_between_clones() {
        let control = SearchControl::new();
        let clone = control.clone();

        assert!(!clone.is_cancelled());
        control.cancel();
        assert!(clone.is_cancelled());
    }
}
