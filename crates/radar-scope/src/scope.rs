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

//! Per-frame state of the radar scope.

use log::debug;
use rand::Rng;

use crate::geometry::{Point, ScopeLayout};
use crate::hover::{find_hover, PointerState};
use crate::sweep::Sweep;
use crate::target::{default_targets, Target};
use crate::trail::{PhosphorTrail, TrailFrame};

/// Everything the render loop mutates between frames.
///
/// The targets are fixed at construction; layout, pointer, hover, sweep and
/// trail are updated through the methods below, each by a single caller.
#[derive(Debug, Clone)]
pub struct ScopeState {
    targets: Vec<Target>,
    layout: ScopeLayout,
    pointer: PointerState,
    hovered: Option<usize>,
    sweep: Sweep,
    trail: PhosphorTrail,
    noise: bool,
}

impl Default for ScopeState {
    fn default() -> Self {
        Self::new(default_targets())
    }
}

impl ScopeState {
    #[must_use]
    pub fn new(targets: Vec<Target>) -> Self {
        Self {
            targets,
            layout: ScopeLayout::from_size(0.0, 0.0),
            pointer: PointerState::default(),
            hovered: None,
            sweep: Sweep::default(),
            trail: PhosphorTrail::new(),
            noise: true,
        }
    }

    /// Disable the random specks (the sweep trail is still recorded).
    #[must_use]
    pub fn with_noise(mut self, enabled: bool) -> Self {
        self.noise = enabled;
        self
    }

    #[must_use]
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    #[must_use]
    pub const fn layout(&self) -> &ScopeLayout {
        &self.layout
    }

    #[must_use]
    pub const fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    #[must_use]
    pub const fn sweep(&self) -> &Sweep {
        &self.sweep
    }

    #[must_use]
    pub const fn trail(&self) -> &PhosphorTrail {
        &self.trail
    }

    #[must_use]
    pub const fn hovered_index(&self) -> Option<usize> {
        self.hovered
    }

    #[must_use]
    pub fn hovered(&self) -> Option<&Target> {
        self.hovered.and_then(|i| self.targets.get(i))
    }

    /// Re-provision the layout for a new surface rect.
    ///
    /// A change of size discards the trail since its marks no longer line up.
    pub fn resize(&mut self, origin: Point, width: f32, height: f32) {
        let layout = ScopeLayout::with_origin(origin, width, height);
        if (layout.width - self.layout.width).abs() > f32::EPSILON
            || (layout.height - self.layout.height).abs() > f32::EPSILON
        {
            debug!("Scope resized to {width:.0}x{height:.0}, radius {:.1}", layout.radius);
            self.trail.clear();
        }
        self.layout = layout;
    }

    pub fn pointer_moved(&mut self, pos: Point) {
        self.pointer.move_to(pos);
    }

    pub fn pointer_left(&mut self) {
        self.pointer.leave();
        self.hovered = None;
    }

    /// Advance one frame: move the sweep, record this frame's marks and
    /// recompute the hover target while the pointer is inside.
    pub fn tick<R: Rng + ?Sized>(&mut self, elapsed_ms: f32, rng: &mut R) {
        self.sweep.advance(elapsed_ms);

        let frame = if self.noise {
            TrailFrame::with_noise(self.sweep.angle(), rng)
        } else {
            TrailFrame {
                sweep_angle: self.sweep.angle(),
                specks: Vec::new(),
            }
        };
        self.trail.push(frame);

        if self.pointer.inside {
            self.hovered = find_hover(&self.targets, &self.layout, &self.pointer);
        }
    }

    /// Target to show in the tooltip: hovered and pointer still inside.
    #[must_use]
    pub fn tooltip_target(&self) -> Option<(&Target, Point)> {
        if !self.pointer.inside {
            return None;
        }
        self.hovered()
            .map(|target| (target, target.screen_position(&self.layout)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn state() -> ScopeState {
        let mut state = ScopeState::default();
        state.resize(Point::default(), 800.0, 600.0);
        state
    }

    #[test]
    fn test_tick_updates_hover_while_inside() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = state();
        let about = state.targets()[0].screen_position(state.layout());

        state.pointer_moved(about);
        state.tick(16.0, &mut rng);
        assert_eq!(state.hovered().map(|t| t.id), Some("about"));
        assert_eq!(state.tooltip_target().map(|(t, _)| t.label), Some("ABOUT"));

        state.pointer_moved(Point::new(1.0, 1.0));
        state.tick(16.0, &mut rng);
        assert!(state.hovered().is_none());
        assert!(state.tooltip_target().is_none());
    }

    #[test]
    fn test_pointer_leave_clears_hover() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut state = state();
        let centre = state.layout().center;

        state.pointer_moved(centre);
        state.tick(16.0, &mut rng);
        assert_eq!(state.hovered_index(), Some(5));

        state.pointer_left();
        assert!(state.hovered().is_none());
        state.tick(16.0, &mut rng);
        assert!(state.hovered().is_none());
    }

    #[test]
    fn test_tick_records_trail_frames() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = state();
        state.tick(10.0, &mut rng);
        state.tick(10.0, &mut rng);
        assert_eq!(state.trail().len(), 2);
        assert!((state.sweep().angle() - 0.009).abs() < 1e-6);

        let mut quiet = ScopeState::default().with_noise(false);
        quiet.tick(10.0, &mut rng);
        quiet.tick(10.0, &mut rng);
        assert!(quiet.trail().current().is_some_and(|frame| frame.specks.is_empty()));
        assert!(quiet.trail().aged().all(|(frame, _)| frame.specks.is_empty()));
    }

    #[test]
    fn test_resize_recomputes_radius_and_clears_trail() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut state = state();
        state.tick(10.0, &mut rng);
        assert!(!state.trail().is_empty());

        state.resize(Point::default(), 400.0, 1000.0);
        assert!((state.layout().radius - 168.0).abs() < 1e-4);
        assert!(state.trail().is_empty());
    }
}
