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

//! Radar scope model for the landing-page radar menu.
//!
//! This library holds everything about the radar that does not depend on a
//! drawing backend, so the maths can be tested without a window:
//!
//! - **Geometry**: scope layout, polar to screen mapping, wrapped angular distance
//! - **Targets**: the fixed list of clickable aircraft and their silhouettes
//! - **Sweep**: the rotating scan angle and the per-target pulse brightness
//! - **Hover**: pointer state and the nearest-target hit test
//! - **Trail**: fading replay of recent sweep and noise marks
//! - **Scope**: the state object tying the above together for one frame
//!
//! # Example
//!
//! ```
//! use radar_scope::{default_targets, find_hover, PointerState, ScopeLayout, Sweep};
//!
//! let layout = ScopeLayout::from_size(800.0, 600.0);
//! let targets = default_targets();
//! let mut sweep = Sweep::default();
//! sweep.advance(16.0);
//!
//! // The register target sits at the scope centre.
//! let pointer = PointerState::at(layout.center.x, layout.center.y);
//! let hovered = find_hover(&targets, &layout, &pointer);
//! assert_eq!(hovered.map(|i| targets[i].id), Some("register"));
//! ```

pub mod geometry;
pub mod hover;
pub mod scope;
pub mod sweep;
pub mod target;
pub mod trail;

pub use geometry::{angular_distance, signed_angle_delta, Point, ScopeLayout, RADIUS_FRACTION};
pub use hover::{find_hover, PointerState, HIT_RADIUS_PX};
pub use scope::ScopeState;
pub use sweep::{
    pulse_intensity, Sweep, PULSE_BASE, PULSE_FALLOFF_RAD, PULSE_HOVER_BOOST, PULSE_SWEEP_GAIN,
    SWEEP_HALF_WIDTH_RAD, SWEEP_RATE_RAD_PER_MS,
};
pub use target::{default_targets, Outline, ParseSilhouetteError, Silhouette, Target};
pub use trail::{PhosphorTrail, Speck, TrailFrame, NOISE_SPECKS, TRAIL_FADE};
