//! Perspective camera
//!
//! Fixed camera on the +z axis looking at the origin.

use crate::geometry::Point;

use super::math::Vec3;

/// A point after projection onto the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub point: Point,
    /// Distance in front of the camera, larger is farther
    pub depth: f64,
    /// Canvas pixels per scene unit at this depth
    pub pixels_per_unit: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees
    pub fov: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
    pub position: Vec3,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self {
            fov: 75.0,
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
            position: Vec3::new(0.0, 0.0, 6.0),
        }
    }
}

impl PerspectiveCamera {
    fn focal(&self) -> f64 {
        1.0 / (self.fov.to_radians() / 2.0).tan()
    }

    /// Project a scene point onto a `width` x `height` canvas
    ///
    /// Returns `None` for points outside the near/far range.
    pub fn project(&self, world: Vec3, width: f64, height: f64) -> Option<Projected> {
        let view = world - self.position;
        let depth = -view.z;
        if depth < self.near || depth > self.far {
            return None;
        }

        let f = self.focal();
        let ndc_x = f / self.aspect * view.x / depth;
        let ndc_y = f * view.y / depth;

        Some(Projected {
            point: Point::new((ndc_x + 1.0) / 2.0 * width, (1.0 - ndc_y) / 2.0 * height),
            depth,
            pixels_per_unit: f * height / 2.0 / depth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_projects_to_center() {
        let camera = PerspectiveCamera::default();
        let p = camera.project(Vec3::ZERO, 600.0, 600.0).unwrap();
        assert!((p.point.x - 300.0).abs() < 1e-9);
        assert!((p.point.y - 300.0).abs() < 1e-9);
        assert!((p.depth - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_up_is_up_on_screen() {
        let camera = PerspectiveCamera::default();
        let p = camera.project(Vec3::new(1.0, 1.0, 0.0), 600.0, 600.0).unwrap();
        assert!(p.point.x > 300.0);
        assert!(p.point.y < 300.0);
    }

    #[test]
    fn test_nearer_points_appear_larger() {
        let camera = PerspectiveCamera::default();
        let near = camera.project(Vec3::new(0.0, 0.0, 3.0), 600.0, 600.0).unwrap();
        let far = camera.project(Vec3::new(0.0, 0.0, -3.0), 600.0, 600.0).unwrap();
        assert!(near.pixels_per_unit > far.pixels_per_unit);
        assert!(near.depth < far.depth);
    }

    #[test]
    fn test_behind_camera_is_clipped() {
        let camera = PerspectiveCamera::default();
        assert!(camera.project(Vec3::new(0.0, 0.0, 7.0), 600.0, 600.0).is_none());
    }
}
