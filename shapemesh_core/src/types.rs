// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: type definitions

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// Normal of the drawing plane. Geometry lives in the XZ plane.
pub const UP: Vec3 = Vec3 {
    x: 0.0,
    y: 1.0,
    z: 0.0,
};

/// Direction symbols start from when placing polygon corners.
pub const FORWARD: Vec3 = Vec3 {
    x: 0.0,
    y: 0.0,
    z: 1.0,
};

/// Squared magnitude below which a vector is treated as zero.
pub(crate) const NORMALIZE_EPSILON_SQ: f32 = 1e-10;

/// 2D vector, used for texture coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct Vec2 {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

/// 3D vector used for anchors, vertex positions and normals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct Vec3 {
    /// X coordinate
    pub x: f32,
    /// Height above the drawing plane
    #[serde(default)]
    pub y: f32,
    /// Z coordinate
    pub z: f32,
}

impl Vec3 {
    /// Zero vector.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Construct from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// A point on the drawing plane.
    pub const fn planar(x: f32, z: f32) -> Self {
        Self { x, y: 0.0, z }
    }

    /// Project onto the drawing plane by dropping the height.
    pub fn flatten(self) -> Self {
        Self { y: 0.0, ..self }
    }

    pub fn dot(self, o: Self) -> f32 {
        self.x * o.x + self.y * o.y + self.z * o.z
    }

    pub fn cross(self, o: Self) -> Self {
        Self {
            x: self.y * o.z - self.z * o.y,
            y: self.z * o.x - self.x * o.z,
            z: self.x * o.y - self.y * o.x,
        }
    }

    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction, or zero when the input is
    /// (nearly) zero-length.
    pub fn normalized(self) -> Self {
        let len_sq = self.length_squared();
        if len_sq <= NORMALIZE_EPSILON_SQ {
            return Self::ZERO;
        }
        self * (1.0 / len_sq.sqrt())
    }

    /// Unsigned angle to `other` in degrees.
    pub fn angle_deg(self, other: Self) -> f32 {
        let denom = (self.length_squared() * other.length_squared()).sqrt();
        if denom <= NORMALIZE_EPSILON_SQ {
            return 0.0;
        }
        (self.dot(other) / denom).clamp(-1.0, 1.0).acos().to_degrees()
    }

    /// Rotate about [`UP`] by `degrees`. Positive angles turn +Z towards +X.
    pub fn rotate_about_up(self, degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            x: self.x * cos + self.z * sin,
            y: self.y,
            z: self.z * cos - self.x * sin,
        }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, o: Self) -> Self {
        Self::new(self.x + o.x, self.y + o.y, self.z + o.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, o: Self) -> Self {
        Self::new(self.x - o.x, self.y - o.y, self.z - o.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, v: Vec3) -> Vec3 {
        v * self
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// RGBA colour. Carried through to the renderer, never used by geometry.
/// Defaults to opaque white.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);
    pub const CYAN: Self = Self::rgba(0, 255, 255, 255);
    pub const BLUE: Self = Self::rgba(0, 0, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_with_up_is_perpendicular_in_plane() {
        let t = Vec3::planar(0.6, -0.8);
        let n = UP.cross(t);
        assert_eq!(n.y, 0.0);
        assert!(n.dot(t).abs() < 1e-6);
        assert!((n.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn normalize_zero_stays_zero() {
        assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);
        let v = Vec3::planar(3.0, 4.0).normalized();
        assert!((v.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn rotate_forward_quarter_turn() {
        let v = FORWARD.rotate_about_up(90.0);
        assert!((v.x - 1.0).abs() < 1e-6);
        assert!(v.z.abs() < 1e-6);
        let back = v.rotate_about_up(-90.0);
        assert!((back.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn angle_between_axes() {
        let a = Vec3::planar(1.0, 0.0);
        let b = Vec3::planar(0.0, 2.0);
        assert!((a.angle_deg(b) - 90.0).abs() < 1e-4);
        assert!((a.angle_deg(-a) - 180.0).abs() < 1e-3);
    }

    #[test]
    fn flatten_drops_height() {
        assert_eq!(Vec3::new(1.0, 7.0, 2.0).flatten(), Vec3::planar(1.0, 2.0));
    }
}
