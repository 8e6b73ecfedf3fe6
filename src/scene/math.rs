//! Vector math for the scene model.

use serde::Serialize;
use std::ops::{Add, Mul, Neg, Sub};

/// A point or direction in scene space (y up, camera looking down -z)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn dot(&self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn length(&self) -> f64 {
        self.dot(*self).sqrt()
    }

    /// Unit vector in the same direction; the zero vector stays zero
    pub fn normalized(&self) -> Vec3 {
        let len = self.length();
        if len == 0.0 {
            *self
        } else {
            *self * (1.0 / len)
        }
    }

    pub fn rotate_x(&self, angle: f64) -> Vec3 {
        let (s, c) = angle.sin_cos();
        Vec3::new(self.x, self.y * c - self.z * s, self.y * s + self.z * c)
    }

    pub fn rotate_y(&self, angle: f64) -> Vec3 {
        let (s, c) = angle.sin_cos();
        Vec3::new(self.x * c + self.z * s, self.y, -self.x * s + self.z * c)
    }

    pub fn rotate_z(&self, angle: f64) -> Vec3 {
        let (s, c) = angle.sin_cos();
        Vec3::new(self.x * c - self.y * s, self.x * s + self.y * c, self.z)
    }

    /// Apply an XYZ Euler rotation (z first, then y, then x)
    pub fn rotate(&self, euler: Vec3) -> Vec3 {
        self.rotate_z(euler.z).rotate_y(euler.y).rotate_x(euler.x)
    }

    /// Average of a set of points
    pub fn centroid(points: &[Vec3]) -> Vec3 {
        if points.is_empty() {
            return Vec3::ZERO;
        }
        let sum = points.iter().fold(Vec3::ZERO, |acc, p| acc + *p);
        sum * (1.0 / points.len() as f64)
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

/// Position, Euler rotation (radians) and uniform scale of an object
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Local point to parent space
    pub fn apply(&self, local: Vec3) -> Vec3 {
        (local * self.scale).rotate(self.rotation) + self.position
    }

    /// Local direction to parent space, ignoring translation and scale
    pub fn apply_direction(&self, dir: Vec3) -> Vec3 {
        dir.rotate(self.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_rotate_y_quarter_turn() {
        let v = Vec3::new(1.0, 0.0, 0.0).rotate_y(FRAC_PI_2);
        assert!(v.x.abs() < 1e-12);
        assert!((v.z + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cross_follows_right_hand_rule() {
        let z = Vec3::new(1.0, 0.0, 0.0).cross(Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(z, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_transform_scales_rotates_then_translates() {
        let t = Transform {
            position: Vec3::new(0.0, 1.0, 0.0),
            rotation: Vec3::new(0.0, 0.0, FRAC_PI_2),
            scale: 2.0,
        };
        let p = t.apply(Vec3::new(1.0, 0.0, 0.0));
        assert!(p.x.abs() < 1e-12);
        assert!((p.y - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalized_zero() {
        assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);
        assert!((Vec3::new(3.0, 4.0, 0.0).normalized().length() - 1.0).abs() < 1e-9);
    }
}
