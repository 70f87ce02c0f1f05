// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Pointer state and target hit testing.

use crate::geometry::{Point, ScopeLayout};
use crate::target::Target;

/// Maximum pointer distance in pixels for a target to count as hovered.
pub const HIT_RADIUS_PX: f32 = 18.0;

/// Latest pointer position in surface-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub pos: Point,
    pub inside: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            pos: Point::new(-9999.0, -9999.0),
            inside: false,
        }
    }
}

impl PointerState {
    /// Pointer inside the surface at the given position
    #[must_use]
    pub const fn at(x: f32, y: f32) -> Self {
        Self {
            pos: Point::new(x, y),
            inside: true,
        }
    }

    pub fn move_to(&mut self, pos: Point) {
        self.pos = pos;
        self.inside = true;
    }

    pub fn leave(&mut self) {
        self.inside = false;
    }
}

/// Index of the first target within [`HIT_RADIUS_PX`] of the pointer.
///
/// List order decides between overlapping hit circles; the distance is not
/// used as a tie-break. Returns `None` when the pointer is outside.
#[must_use]
pub fn find_hover(targets: &[Target], layout: &ScopeLayout, pointer: &PointerState) -> Option<usize> {
    if !pointer.inside {
        return None;
    }
    targets
        .iter()
        .position(|target| target.screen_position(layout).distance(pointer.pos) <= HIT_RADIUS_PX)
}
