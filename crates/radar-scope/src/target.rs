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

//! Clickable radar targets and their aircraft silhouettes.

use std::f32::consts::FRAC_PI_2;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::geometry::{Point, ScopeLayout};

/// Error returned when a silhouette tag is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown silhouette tag: {0}")]
pub struct ParseSilhouetteError(pub String);

/// Stylised aircraft outline drawn at a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Silhouette {
    /// Swept-wing jet (fuselage, wings, tailplane)
    Jet,
    /// Straight-wing propeller aircraft
    Prop,
    /// Delta-shaped drone
    Uav,
    /// Helicopter body with rotor and tail boom
    Helicopter,
    /// Ringed crosshair marking the scope centre
    Center,
}

/// One stroked primitive of a silhouette, in local coordinates.
///
/// Local space has the nose pointing along +x and is scaled by the
/// silhouette size, before any rotation or translation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    Path { points: Vec<Point>, closed: bool },
    Circle { center: Point, radius: f32 },
}

impl Outline {
    fn open(points: &[(f32, f32)], size: f32) -> Self {
        Self::Path {
            points: points.iter().map(|&(x, y)| Point::new(x * size, y * size)).collect(),
            closed: false,
        }
    }

    fn closed(points: &[(f32, f32)], size: f32) -> Self {
        Self::Path {
            points: points.iter().map(|&(x, y)| Point::new(x * size, y * size)).collect(),
            closed: true,
        }
    }
}

impl Silhouette {
    pub const ALL: [Self; 5] = [Self::Jet, Self::Prop, Self::Uav, Self::Helicopter, Self::Center];

    /// Short tag used in configuration and logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Jet => "jet",
            Self::Prop => "prop",
            Self::Uav => "uav",
            Self::Helicopter => "heli",
            Self::Center => "center",
        }
    }

    /// Strokes making up this silhouette at the given size in pixels.
    #[must_use]
    pub fn outline(self, size: f32) -> Vec<Outline> {
        match self {
            Self::Jet => vec![
                Outline::open(&[(-0.6, 0.0), (0.6, 0.0)], size),
                Outline::open(&[(-0.1, -0.28), (0.1, 0.0), (-0.1, 0.28)], size),
                Outline::open(&[(-0.55, -0.18), (-0.35, 0.0), (-0.55, 0.18)], size),
            ],
            Self::Prop => vec![
                Outline::open(&[(-0.55, 0.0), (0.6, 0.0)], size),
                Outline::open(&[(-0.1, -0.32), (0.05, 0.0), (-0.1, 0.32)], size),
                Outline::open(&[(-0.55, -0.18), (-0.35, 0.0), (-0.55, 0.18)], size),
                Outline::open(&[(0.6, -0.18), (0.6, 0.18)], size),
            ],
            Self::Uav => vec![Outline::closed(
                &[(-0.6, 0.0), (-0.1, -0.25), (0.6, 0.0), (-0.1, 0.25)],
                size,
            )],
            Self::Helicopter => vec![
                Outline::closed(
                    &[(-0.35, -0.12), (0.35, -0.12), (0.35, 0.12), (-0.35, 0.12)],
                    size,
                ),
                Outline::open(&[(-0.1, -0.28), (0.1, -0.28)], size),
                Outline::open(&[(-0.55, -0.28), (0.55, -0.28)], size),
                Outline::open(&[(0.35, 0.0), (0.6, 0.08)], size),
            ],
            Self::Center => vec![
                Outline::Circle {
                    center: Point::default(),
                    radius: size * 0.55,
                },
                Outline::open(&[(-0.75, 0.0), (0.75, 0.0)], size),
                Outline::open(&[(0.0, -0.75), (0.0, 0.75)], size),
            ],
        }
    }
}

impl fmt::Display for Silhouette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Silhouette {
    type Err = ParseSilhouetteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSilhouetteError(s.to_string()))
    }
}

/// A clickable point on the scope that opens a content panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub id: &'static str,
    /// Display label, also the key into the panel content registry
    pub label: &'static str,
    /// Distance from the centre as a fraction of the scope radius (0-1)
    pub radius: f32,
    /// Bearing in degrees, screen convention (0 = east, clockwise)
    pub angle_deg: f32,
    pub silhouette: Silhouette,
}

impl Target {
    #[must_use]
    pub const fn new(
        id: &'static str,
        label: &'static str,
        radius: f32,
        angle_deg: f32,
        silhouette: Silhouette,
    ) -> Self {
        Self {
            id,
            label,
            radius,
            angle_deg,
            silhouette,
        }
    }

    #[must_use]
    pub fn angle_rad(&self) -> f32 {
        self.angle_deg.to_radians()
    }

    /// Screen position of this target for the given layout
    #[must_use]
    pub fn screen_position(&self, layout: &ScopeLayout) -> Point {
        layout.polar_to_screen(self.radius, self.angle_deg)
    }

    /// Rotation applied to the silhouette so it points along the radial.
    #[must_use]
    pub fn heading_rad(&self) -> f32 {
        self.angle_rad() + FRAC_PI_2
    }
}

/// The six menu targets in hit-test priority order.
#[must_use]
pub fn default_targets() -> Vec<Target> {
    vec![
        Target::new("about", "ABOUT", 0.68, 250.0, Silhouette::Jet),
        Target::new("product", "PRODUCT", 0.78, 330.0, Silhouette::Jet),
        Target::new("applications", "APPLICATIONS", 0.75, 45.0, Silhouette::Jet),
        Target::new("contact", "CONTACT", 0.80, 190.0, Silhouette::Helicopter),
        Target::new("support", "SUPPORT", 0.50, 140.0, Silhouette::Jet),
        Target::new("register", "REGISTER YOUR INTEREST", 0.0, 90.0, Silhouette::Jet),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_targets_are_unique() {
        let targets = default_targets();
        assert_eq!(targets.len(), 6);

        let ids: HashSet<_> = targets.iter().map(|t| t.id).collect();
        let labels: HashSet<_> = targets.iter().map(|t| t.label).collect();
        assert_eq!(ids.len(), targets.len());
        assert_eq!(labels.len(), targets.len());

        for target in &targets {
            assert!((0.0..=1.0).contains(&target.radius), "{} out of range", target.id);
        }
    }

    #[test]
    fn test_only_contact_flies_a_helicopter() {
        for target in default_targets() {
            let expected = if target.id == "contact" {
                Silhouette::Helicopter
            } else {
                Silhouette::Jet
            };
            assert_eq!(target.silhouette, expected, "{}", target.id);
        }
    }

    #[test]
    fn test_silhouette_tag_round_trip() {
        for kind in Silhouette::ALL {
            assert_eq!(kind.as_str().parse::<Silhouette>(), Ok(kind));
        }
        assert_eq!("HELI".parse::<Silhouette>(), Ok(Silhouette::Helicopter));
        assert_eq!(
            "blimp".parse::<Silhouette>(),
            Err(ParseSilhouetteError("blimp".to_string()))
        );
    }

    #[test]
    fn test_outline_scales_with_size() {
        let small = Silhouette::Uav.outline(10.0);
        let large = Silhouette::Uav.outline(20.0);
        let (Outline::Path { points: a, closed }, Outline::Path { points: b, .. }) =
            (&small[0], &large[0])
        else {
            panic!("uav outline should be a path");
        };
        assert!(*closed);
        assert!(a[2].distance(Point::new(6.0, 0.0)) < 1e-4);
        assert!(b[2].distance(Point::new(12.0, 0.0)) < 1e-4);
    }

    #[test]
    fn test_center_outline_has_ring() {
        let outline = Silhouette::Center.outline(16.0);
        assert!(outline
            .iter()
            .any(|o| matches!(o, Outline::Circle { radius, .. } if (*radius - 8.8).abs() < 1e-4)));
    }

    #[test]
    fn test_heading_points_along_radial() {
        let target = Target::new("t", "T", 0.5, 0.0, Silhouette::Jet);
        assert!((target.heading_rad() - FRAC_PI_2).abs() < 1e-6);
    }
}
