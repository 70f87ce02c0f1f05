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

//! Phosphor persistence for ephemeral marks.
//!
//! The scope never clears outright: each frame darkens what was drawn before
//! by a fixed fraction. Instead of keeping a pixel buffer, the trail remembers
//! the marks that move between frames (the sweep line and the noise specks)
//! and replays them with the decay they would have accumulated.

use std::collections::VecDeque;
use std::f32::consts::TAU;

use rand::Rng;

/// Fraction of the previous frame's brightness removed every frame.
pub const TRAIL_FADE: f32 = 0.22;
/// Random specks scattered across the scope each frame.
pub const NOISE_SPECKS: usize = 14;
/// Upper bound on speck alpha.
const SPECK_MAX_ALPHA: f32 = 0.08;
/// Frames whose remaining brightness drops below this are discarded.
const TRAIL_CUTOFF: f32 = 0.01;

/// A single noise pixel, in polar scope coordinates so it survives resizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Speck {
    /// Distance from centre as a fraction of the radius
    pub radius: f32,
    pub angle: f32,
    pub alpha: f32,
}

impl Speck {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            radius: rng.random::<f32>(),
            angle: rng.random_range(0.0..TAU),
            alpha: rng.random_range(0.0..SPECK_MAX_ALPHA),
        }
    }
}

/// Marks produced by one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailFrame {
    pub sweep_angle: f32,
    pub specks: Vec<Speck>,
}

impl TrailFrame {
    pub fn with_noise<R: Rng + ?Sized>(sweep_angle: f32, rng: &mut R) -> Self {
        Self {
            sweep_angle,
            specks: (0..NOISE_SPECKS).map(|_| Speck::random(rng)).collect(),
        }
    }
}

/// Recent frames, newest first.
#[derive(Debug, Clone)]
pub struct PhosphorTrail {
    frames: VecDeque<TrailFrame>,
    capacity: usize,
}

impl Default for PhosphorTrail {
    fn default() -> Self {
        Self::new()
    }
}

impl PhosphorTrail {
    #[must_use]
    pub fn new() -> Self {
        Self {
            frames: VecDeque::new(),
            capacity: Self::frames_until_cutoff(),
        }
    }

    /// Number of frames before a mark fades below the cutoff.
    fn frames_until_cutoff() -> usize {
        let keep = 1.0 - TRAIL_FADE;
        let mut brightness = 1.0_f32;
        let mut frames = 0;
        while brightness >= TRAIL_CUTOFF {
            brightness *= keep;
            frames += 1;
        }
        frames
    }

    pub fn push(&mut self, frame: TrailFrame) {
        self.frames.push_front(frame);
        self.frames.truncate(self.capacity);
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The frame recorded by the latest tick, at full brightness.
    #[must_use]
    pub fn current(&self) -> Option<&TrailFrame> {
        self.frames.front()
    }

    /// Earlier frames with their remaining brightness, oldest first so newer
    /// marks paint over older ones. The current frame is not included.
    pub fn aged(&self) -> impl Iterator<Item = (&TrailFrame, f32)> {
        let keep = 1.0 - TRAIL_FADE;
        self.frames
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .map(move |(age, frame)| (frame, keep.powi(i32::try_from(age).unwrap_or(i32::MAX))))
    }
}
