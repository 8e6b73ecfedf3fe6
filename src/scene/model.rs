//! Scene Model
//!
//! The decorative "data sphere" scene: books and documents orbiting a
//! wireframe sphere, with glowing data points joined by connector lines.
//!
//! Placement is randomised once from a seeded [`SmallRng`], so a seed always
//! yields the same scene. Motion is a pure function of elapsed seconds and
//! object index: [`SceneModel::update`] can be called with any time, in any
//! order, and gives the same pose.

use std::f64::consts::{PI, TAU};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::SceneConfig;

use super::math::{Transform, Vec3};
use super::render::Rgba;

pub const ORANGE: Rgba = Rgba::from_hex(0xff6b35);
pub const LIGHT_ORANGE: Rgba = Rgba::from_hex(0xff8c5a);
pub const CREAM: Rgba = Rgba::from_hex(0xfff5e6);
pub const WHITE: Rgba = Rgba::from_hex(0xffffff);

pub const BOOK_RING_RADIUS: f64 = 3.5;
pub const BOOK_DEPTH: f64 = 0.12;
pub const DOCUMENT_RING_RADIUS: f64 = 3.0;
pub const DOCUMENT_SIZE: (f64, f64) = (0.8, 1.1);
pub const SPHERE_RADIUS: f64 = 2.2;
pub const POINT_ORBIT_RADIUS: f64 = 2.4;
pub const POINT_RADIUS: f64 = 0.06;

/// A book: a box orbiting on the outer ring
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    /// Width, height and depth
    pub size: Vec3,
    pub color: Rgba,
    pub base: Transform,
    pub transform: Transform,
}

/// A document: a double-sided plane on the inner ring
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub color: Rgba,
    pub base: Transform,
    pub transform: Transform,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WireSphere {
    pub radius: f64,
    pub color: Rgba,
    pub transform: Transform,
}

/// A small glowing marker orbiting the sphere
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub color: Rgba,
    pub emissive: Rgba,
    /// Position before the first frame
    pub origin: Vec3,
    pub transform: Transform,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Ambient {
        color: Rgba,
        intensity: f64,
    },
    Point {
        color: Rgba,
        intensity: f64,
        position: Vec3,
        /// Distance at which the light fades out
        range: f64,
    },
}

/// A line joining two consecutive data points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    pub from: Vec3,
    pub to: Vec3,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneModel {
    /// Transform of the whole group, spun slowly around y
    pub root: Transform,
    pub books: Vec<Book>,
    pub documents: Vec<Document>,
    pub sphere: WireSphere,
    pub points: Vec<DataPoint>,
    pub lights: Vec<Light>,
    pub elapsed: f64,
}

impl SceneModel {
    /// Build the scene at rest
    pub fn build(config: &SceneConfig) -> Self {
        let mut rng = SmallRng::seed_from_u64(config.seed);

        let books = (0..config.book_count)
            .map(|i| {
                let angle = i as f64 / config.book_count as f64 * TAU;
                let size = Vec3::new(
                    0.6 + rng.gen::<f64>() * 0.3,
                    0.8 + rng.gen::<f64>() * 0.4,
                    BOOK_DEPTH,
                );
                let base = Transform {
                    position: Vec3::new(
                        angle.cos() * BOOK_RING_RADIUS,
                        -0.5 + rng.gen::<f64>(),
                        angle.sin() * BOOK_RING_RADIUS,
                    ),
                    rotation: Vec3::new(
                        rng.gen::<f64>() * 0.3,
                        angle + PI / 2.0,
                        rng.gen::<f64>() * 0.2,
                    ),
                    scale: 1.0,
                };
                Book {
                    size,
                    color: if i % 2 == 0 { ORANGE } else { LIGHT_ORANGE },
                    base,
                    transform: base,
                }
            })
            .collect();

        let documents = (0..config.document_count)
            .map(|i| {
                let angle = i as f64 / config.document_count as f64 * TAU + PI / 5.0;
                let base = Transform {
                    position: Vec3::new(
                        angle.cos() * DOCUMENT_RING_RADIUS,
                        rng.gen::<f64>() * 2.0 - 1.0,
                        angle.sin() * DOCUMENT_RING_RADIUS,
                    ),
                    rotation: Vec3::new(0.0, angle, 0.0),
                    scale: 1.0,
                };
                Document {
                    color: CREAM,
                    base,
                    transform: base,
                }
            })
            .collect();

        let points = (0..config.data_point_count)
            .map(|_| {
                let theta = rng.gen::<f64>() * TAU;
                let phi = rng.gen::<f64>() * PI;
                let origin = Vec3::new(
                    POINT_ORBIT_RADIUS * phi.sin() * theta.cos(),
                    POINT_ORBIT_RADIUS * phi.cos(),
                    POINT_ORBIT_RADIUS * phi.sin() * theta.sin(),
                );
                DataPoint {
                    color: LIGHT_ORANGE,
                    emissive: ORANGE.scaled(0.6),
                    origin,
                    transform: Transform::at(origin),
                }
            })
            .collect();

        let lights = vec![
            Light::Ambient {
                color: WHITE,
                intensity: 0.7,
            },
            Light::Point {
                color: ORANGE,
                intensity: 1.2,
                position: Vec3::new(5.0, 5.0, 5.0),
                range: 50.0,
            },
            Light::Point {
                color: LIGHT_ORANGE,
                intensity: 0.8,
                position: Vec3::new(-5.0, -5.0, 5.0),
                range: 50.0,
            },
            Light::Point {
                color: WHITE,
                intensity: 0.5,
                position: Vec3::new(0.0, 5.0, -5.0),
                range: 50.0,
            },
        ];

        Self {
            root: Transform::default(),
            books,
            documents,
            sphere: WireSphere {
                radius: SPHERE_RADIUS,
                color: ORANGE.with_alpha(0.8),
                transform: Transform::default(),
            },
            points,
            lights,
            elapsed: 0.0,
        }
    }

    /// Pose every object for `t` seconds after the first frame
    pub fn update(&mut self, t: f64) {
        self.elapsed = t;
        self.root.rotation.y = t * 0.08;

        for (i, book) in self.books.iter_mut().enumerate() {
            let phase = i as f64;
            book.transform.position.y =
                book.base.position.y - 0.12 * ((t * 0.5 + phase).cos() - phase.cos());
            book.transform.rotation.y = book.base.rotation.y + t * 0.12;
        }

        for (i, doc) in self.documents.iter_mut().enumerate() {
            let phase = i as f64;
            doc.transform.position.y = (t * 0.6 + phase * 0.5).sin() * 0.4;
            doc.transform.rotation.x = (t + phase).sin() * 0.08;
        }

        self.sphere.transform.scale = 1.0 + (t * 1.5).sin() * 0.1;
        self.sphere.transform.rotation.x = t * 0.24;
        self.sphere.transform.rotation.y = t * 0.3;

        let n = self.points.len() as f64;
        for (i, point) in self.points.iter_mut().enumerate() {
            let phase = i as f64;
            let angle = t * 0.25 + phase / n * TAU;
            let radius = POINT_ORBIT_RADIUS + (t * 1.5 + phase).sin() * 0.2;
            point.transform.position = Vec3::new(
                radius * angle.sin(),
                (t * 0.4 + phase).sin() * 0.5,
                radius * angle.cos(),
            );
            point.transform.scale = 1.0 + (t * 3.0 + phase).sin() * 0.3;
        }
    }

    /// Lines joining point i to point (i + 1) mod n, in group space
    pub fn connectors(&self) -> Vec<Connector> {
        let n = self.points.len();
        if n < 2 {
            return Vec::new();
        }
        (0..n)
            .map(|i| Connector {
                from: self.points[i].transform.position,
                to: self.points[(i + 1) % n].transform.position,
            })
            .collect()
    }

    /// Group space to world space
    pub fn to_world(&self, p: Vec3) -> Vec3 {
        self.root.apply(p)
    }

    pub fn object_count(&self) -> usize {
        self.books.len() + self.documents.len() + 1 + self.points.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> SceneModel {
        SceneModel::build(&SceneConfig::default())
    }

    #[test]
    fn test_default_counts() {
        let scene = model();
        assert_eq!(scene.books.len(), 6);
        assert_eq!(scene.documents.len(), 5);
        assert_eq!(scene.points.len(), 40);
        assert_eq!(scene.lights.len(), 4);
        assert_eq!(scene.connectors().len(), 40);
        assert_eq!(scene.object_count(), 52);
    }

    #[test]
    fn test_same_seed_same_scene() {
        assert_eq!(model(), model());

        let other = SceneModel::build(&SceneConfig {
            seed: 7,
            ..SceneConfig::default()
        });
        assert_ne!(model().books, other.books);
    }

    #[test]
    fn test_books_on_ring() {
        let scene = model();
        for book in &scene.books {
            let p = book.base.position;
            assert!(((p.x * p.x + p.z * p.z).sqrt() - BOOK_RING_RADIUS).abs() < 1e-9);
            assert!(p.y >= -0.5 && p.y <= 0.5);
            assert!(book.size.x >= 0.6 && book.size.x <= 0.9);
        }
        assert_eq!(scene.books[0].color, ORANGE);
        assert_eq!(scene.books[1].color, LIGHT_ORANGE);
    }

    #[test]
    fn test_points_start_on_orbit_sphere() {
        let scene = model();
        for point in &scene.points {
            assert!((point.origin.length() - POINT_ORBIT_RADIUS).abs() < 1e-9);
        }
    }

    #[test]
    fn test_update_at_zero_keeps_book_rest_pose() {
        let mut scene = model();
        scene.update(0.0);
        for book in &scene.books {
            assert!((book.transform.position.y - book.base.position.y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_update_formulas() {
        let mut scene = model();
        let t = 2.0;
        scene.update(t);

        assert!((scene.root.rotation.y - 0.16).abs() < 1e-9);
        assert!((scene.sphere.transform.scale - (1.0 + (3.0f64).sin() * 0.1)).abs() < 1e-9);
        assert!((scene.sphere.transform.rotation.y - 0.6).abs() < 1e-9);

        let doc = &scene.documents[2];
        assert!((doc.transform.position.y - ((1.2f64 + 1.0).sin() * 0.4)).abs() < 1e-9);

        let p = scene.points[0].transform.position;
        let r = 2.4 + (3.0f64).sin() * 0.2;
        assert!((p.x - (r * (0.5f64).sin())).abs() < 1e-9);
        assert!((p.z - (r * (0.5f64).cos())).abs() < 1e-9);
    }

    #[test]
    fn test_update_is_order_independent() {
        let mut a = model();
        let mut b = model();
        a.update(10.0);
        b.update(3.0);
        b.update(10.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_connectors_follow_points() {
        let mut scene = model();
        scene.update(1.5);
        let lines = scene.connectors();
        assert_eq!(lines[39].from, scene.points[39].transform.position);
        assert_eq!(lines[39].to, scene.points[0].transform.position);
    }

    #[test]
    fn test_single_point_has_no_connectors() {
        let scene = SceneModel::build(&SceneConfig {
            data_point_count: 1,
            ..SceneConfig::default()
        });
        assert!(scene.connectors().is_empty());
    }
}
