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

//! Sweep angle and target pulse brightness.

use std::f32::consts::TAU;

use crate::geometry::angular_distance;

/// Angular speed of the sweep in radians per elapsed millisecond.
pub const SWEEP_RATE_RAD_PER_MS: f32 = 0.00045;
/// Half-width of the translucent cone drawn around the sweep line.
pub const SWEEP_HALF_WIDTH_RAD: f32 = 0.22;

/// Angular distance at which the sweep stops brightening a target.
pub const PULSE_FALLOFF_RAD: f32 = 0.45;
/// Dot alpha when the sweep is far away and the target is not hovered.
pub const PULSE_BASE: f32 = 0.18;
/// Extra alpha when the sweep sits exactly on the target.
pub const PULSE_SWEEP_GAIN: f32 = 0.55;
/// Extra alpha while the target is hovered.
pub const PULSE_HOVER_BOOST: f32 = 0.25;

/// Rotating scan line, kept in `[0, 2π)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sweep {
    angle: f32,
}

impl Sweep {
    #[must_use]
    pub fn at(angle: f32) -> Self {
        Self {
            angle: angle.rem_euclid(TAU),
        }
    }

    #[must_use]
    pub const fn angle(&self) -> f32 {
        self.angle
    }

    /// Advance by the time elapsed since the previous frame.
    ///
    /// Negative intervals (clock hiccups) leave the angle unchanged.
    pub fn advance(&mut self, elapsed_ms: f32) {
        let step = elapsed_ms.max(0.0) * SWEEP_RATE_RAD_PER_MS;
        self.angle = (self.angle + step).rem_euclid(TAU);
    }
}

/// Dot alpha for a target given the sweep position and hover state.
#[must_use]
pub fn pulse_intensity(sweep_angle: f32, target_angle: f32, hovered: bool) -> f32 {
    let distance = angular_distance(sweep_angle, target_angle);
    let sweep_boost = (1.0 - distance / PULSE_FALLOFF_RAD).max(0.0);
    let hover_boost = if hovered { PULSE_HOVER_BOOST } else { 0.0 };
    PULSE_BASE + sweep_boost * PULSE_SWEEP_GAIN + hover_boost
}
