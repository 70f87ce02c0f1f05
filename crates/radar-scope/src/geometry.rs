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

//! Scope layout and polar geometry.
//!
//! Angles follow screen conventions: 0 points right (east) and positive angles
//! turn clockwise because the y axis grows downwards.

use std::f32::consts::{PI, TAU};

/// Fraction of the smaller surface dimension used as the scope radius.
pub const RADIUS_FRACTION: f32 = 0.42;

/// A point in surface-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Centre and radius of the scope on the drawing surface.
///
/// Rebuilt whenever the surface changes size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScopeLayout {
    pub width: f32,
    pub height: f32,
    pub center: Point,
    pub radius: f32,
}

impl ScopeLayout {
    /// Layout for a surface of the given size with its origin at (0, 0).
    #[must_use]
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::with_origin(Point::default(), width, height)
    }

    /// Layout for a surface whose top-left corner sits at `origin`.
    #[must_use]
    pub fn with_origin(origin: Point, width: f32, height: f32) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        Self {
            width,
            height,
            center: Point::new(origin.x + width / 2.0, origin.y + height / 2.0),
            radius: width.min(height) * RADIUS_FRACTION,
        }
    }

    /// Map a radius fraction (0-1) and an angle in degrees to a surface point.
    #[must_use]
    pub fn polar_to_screen(&self, radius_fraction: f32, angle_deg: f32) -> Point {
        self.polar_to_screen_rad(self.radius * radius_fraction, angle_deg.to_radians())
    }

    /// Map an absolute pixel radius and an angle in radians to a surface point.
    #[must_use]
    pub fn polar_to_screen_rad(&self, radius_px: f32, angle_rad: f32) -> Point {
        Point::new(
            self.center.x + angle_rad.cos() * radius_px,
            self.center.y + angle_rad.sin() * radius_px,
        )
    }
}

/// Shortest signed difference `a - b`, wrapped into `[-π, π)`.
#[must_use]
pub fn signed_angle_delta(a: f32, b: f32) -> f32 {
    (a - b + PI).rem_euclid(TAU) - PI
}

/// Absolute shortest angular distance between two angles in radians.
#[must_use]
pub fn angular_distance(a: f32, b: f32) -> f32 {
    signed_angle_delta(a, b).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        let diff = (actual - expected).abs();
        assert!(diff < 1e-4, "expected {expected}, got {actual}, diff {diff}");
    }

    #[test]
    fn test_layout_uses_smaller_dimension() {
        let layout = ScopeLayout::from_size(1000.0, 500.0);
        assert_close(layout.radius, 210.0);
        assert_eq!(layout.center, Point::new(500.0, 250.0));
    }

    #[test]
    fn test_layout_with_origin_offsets_center() {
        let layout = ScopeLayout::with_origin(Point::new(10.0, 20.0), 200.0, 200.0);
        assert_eq!(layout.center, Point::new(110.0, 120.0));
    }

    #[test]
    fn test_polar_to_screen_cardinal_directions() {
        let layout = ScopeLayout::from_size(200.0, 200.0);
        let east = layout.polar_to_screen(1.0, 0.0);
        assert_close(east.x, 100.0 + layout.radius);
        assert_close(east.y, 100.0);

        // 90 degrees points down the screen
        let south = layout.polar_to_screen(1.0, 90.0);
        assert_close(south.x, 100.0);
        assert_close(south.y, 100.0 + layout.radius);

        let centre = layout.polar_to_screen(0.0, 123.0);
        assert_eq!(centre, layout.center);
    }

    #[test]
    fn test_angular_distance_zero_at_same_angle() {
        let target = 250_f32.to_radians();
        assert_close(angular_distance(target, target), 0.0);
        assert_close(angular_distance(target + TAU, target), 0.0);
    }

    #[test]
    fn test_angular_distance_wraps_across_zero() {
        let near_end = TAU - 0.1;
        assert_close(angular_distance(near_end, 0.1), 0.2);
        assert_close(angular_distance(0.1, near_end), 0.2);
        assert_close(signed_angle_delta(0.1, near_end), 0.2);
        assert_close(signed_angle_delta(near_end, 0.1), -0.2);
    }

    #[test]
    fn test_angular_distance_is_symmetric_and_bounded() {
        for step in 0..36 {
            let a = step as f32 * 0.37;
            let b = step as f32 * 1.91;
            let d = angular_distance(a, b);
            assert_close(d, angular_distance(b, a));
            assert!(d <= PI + 1e-4);
        }
    }
}
