//! Scene Rendering
//!
//! Flattens a posed [`SceneModel`] into a [`Frame`]: a back-to-front list
//! of 2D draw commands any canvas-like surface can paint with the painter's
//! algorithm. The [`Renderer`] trait is the seam between this pure
//! projection and an actual drawing surface.

use std::cell::RefCell;
use std::rc::Rc;

use crate::geometry::Point;

use super::camera::PerspectiveCamera;
use super::math::{Transform, Vec3};
use super::model::{Light, SceneModel, POINT_RADIUS};

/// Wireframe sphere resolution
const SPHERE_RINGS: usize = 12;
const SPHERE_SEGMENTS: usize = 16;

/// Connector line opacity
const CONNECTOR_ALPHA: f64 = 0.4;

/// An sRGB color with alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
            a: 1.0,
        }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Multiply every channel by `factor`, saturating at white
    pub fn scaled(self, factor: f64) -> Self {
        let f = |c: u8| (c as f64 * factor).round().clamp(0.0, 255.0) as u8;
        Self {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
            a: self.a,
        }
    }

    /// Channel-wise product with a light color in 0..=1 per channel
    fn lit(self, light: [f64; 3]) -> Self {
        let f = |c: u8, l: f64| (c as f64 * l).round().clamp(0.0, 255.0) as u8;
        Self {
            r: f(self.r, light[0]),
            g: f(self.g, light[1]),
            b: f(self.b, light[2]),
            a: self.a,
        }
    }

    fn add(self, other: Rgba) -> Self {
        Self {
            r: self.r.saturating_add(other.r),
            g: self.g.saturating_add(other.g),
            b: self.b.saturating_add(other.b),
            a: self.a,
        }
    }

    fn unit(self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }

    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// One primitive of a frame
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Polygon {
        points: Vec<Point>,
        fill: Rgba,
        depth: f64,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Rgba,
        width: f64,
        depth: f64,
    },
    Dot {
        center: Point,
        radius: f64,
        fill: Rgba,
        depth: f64,
    },
}

impl DrawCommand {
    pub fn depth(&self) -> f64 {
        match self {
            DrawCommand::Polygon { depth, .. }
            | DrawCommand::Line { depth, .. }
            | DrawCommand::Dot { depth, .. } => *depth,
        }
    }
}

/// A projected scene ready to paint, farthest command first
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    /// Edge of the square canvas in CSS pixels
    pub size: f64,
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn polygons(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::Polygon { .. }))
    }

    pub fn lines(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn dots(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::Dot { .. }))
    }

    fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }
}

/// A drawing surface for frames
pub trait Renderer {
    /// Set the square canvas edge in CSS pixels
    fn resize(&mut self, size: f64);

    fn render(&mut self, frame: &Frame);

    /// Release the surface. No frame is rendered afterwards.
    fn dispose(&mut self);
}

/// Renderer shared between the frame loop and the scene guard
pub type SharedRenderer = Rc<RefCell<dyn Renderer>>;

/// Counters kept by [`RecordingRenderer`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderStats {
    pub frames: usize,
    pub size: f64,
    pub resizes: usize,
    pub disposed: bool,
    /// Command count of every rendered frame
    pub command_counts: Vec<usize>,
    /// Renders attempted after dispose
    pub late_renders: usize,
}

/// Headless renderer that records what it was asked to draw
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    stats: Rc<RefCell<RenderStats>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the counters, readable after the renderer is handed off
    pub fn stats(&self) -> Rc<RefCell<RenderStats>> {
        Rc::clone(&self.stats)
    }
}

impl Renderer for RecordingRenderer {
    fn resize(&mut self, size: f64) {
        let mut stats = self.stats.borrow_mut();
        stats.size = size;
        stats.resizes += 1;
    }

    fn render(&mut self, frame: &Frame) {
        let mut stats = self.stats.borrow_mut();
        if stats.disposed {
            stats.late_renders += 1;
            return;
        }
        stats.frames += 1;
        stats.command_counts.push(frame.commands.len());
    }

    fn dispose(&mut self) {
        self.stats.borrow_mut().disposed = true;
    }
}

/// Project the posed model into a depth-sorted frame
pub fn compose_frame(model: &SceneModel, camera: &PerspectiveCamera, size: f64) -> Frame {
    let mut commands = Vec::new();
    let project = |p: Vec3| camera.project(p, size, size);

    // Wireframe sphere
    let sphere = &model.sphere;
    let to_world = |p: Vec3| model.to_world(sphere.transform.apply(p));
    for (a, b) in sphere_edges(sphere.radius) {
        if let (Some(pa), Some(pb)) = (project(to_world(a)), project(to_world(b))) {
            commands.push(DrawCommand::Line {
                from: pa.point,
                to: pb.point,
                stroke: sphere.color,
                width: 1.0,
                depth: (pa.depth + pb.depth) / 2.0,
            });
        }
    }

    // Connectors between data points
    let connector_color = sphere.color.with_alpha(CONNECTOR_ALPHA);
    for line in model.connectors() {
        if let (Some(pa), Some(pb)) = (
            project(model.to_world(line.from)),
            project(model.to_world(line.to)),
        ) {
            commands.push(DrawCommand::Line {
                from: pa.point,
                to: pb.point,
                stroke: connector_color,
                width: 1.0,
                depth: (pa.depth + pb.depth) / 2.0,
            });
        }
    }

    // Books: closed boxes, back faces culled
    for book in &model.books {
        let half = book.size * 0.5;
        for face in box_faces(half) {
            if let Some(cmd) = face_command(model, camera, size, &book.transform, &face, book.color, true) {
                commands.push(cmd);
            }
        }
    }

    // Documents: double-sided planes
    for doc in &model.documents {
        let (w, h) = super::model::DOCUMENT_SIZE;
        let face = Face {
            corners: [
                Vec3::new(-w / 2.0, -h / 2.0, 0.0),
                Vec3::new(w / 2.0, -h / 2.0, 0.0),
                Vec3::new(w / 2.0, h / 2.0, 0.0),
                Vec3::new(-w / 2.0, h / 2.0, 0.0),
            ],
            normal: Vec3::new(0.0, 0.0, 1.0),
        };
        if let Some(cmd) = face_command(model, camera, size, &doc.transform, &face, doc.color, false) {
            commands.push(cmd);
        }
    }

    // Data points
    for point in &model.points {
        let world = model.to_world(point.transform.position);
        if let Some(p) = project(world) {
            let shade = light_at(&model.lights, world, Vec3::new(0.0, 0.0, 1.0));
            commands.push(DrawCommand::Dot {
                center: p.point,
                radius: (POINT_RADIUS * point.transform.scale * p.pixels_per_unit).max(0.5),
                fill: point.color.lit(shade).add(point.emissive),
                depth: p.depth,
            });
        }
    }

    commands.sort_by(|a, b| b.depth().total_cmp(&a.depth()));
    Frame { size, commands }
}

struct Face {
    corners: [Vec3; 4],
    normal: Vec3,
}

fn box_faces(h: Vec3) -> [Face; 6] {
    let v = |x: f64, y: f64, z: f64| Vec3::new(x * h.x, y * h.y, z * h.z);
    [
        Face {
            corners: [v(-1., -1., 1.), v(1., -1., 1.), v(1., 1., 1.), v(-1., 1., 1.)],
            normal: Vec3::new(0.0, 0.0, 1.0),
        },
        Face {
            corners: [v(1., -1., -1.), v(-1., -1., -1.), v(-1., 1., -1.), v(1., 1., -1.)],
            normal: Vec3::new(0.0, 0.0, -1.0),
        },
        Face {
            corners: [v(1., -1., 1.), v(1., -1., -1.), v(1., 1., -1.), v(1., 1., 1.)],
            normal: Vec3::new(1.0, 0.0, 0.0),
        },
        Face {
            corners: [v(-1., -1., -1.), v(-1., -1., 1.), v(-1., 1., 1.), v(-1., 1., -1.)],
            normal: Vec3::new(-1.0, 0.0, 0.0),
        },
        Face {
            corners: [v(-1., 1., 1.), v(1., 1., 1.), v(1., 1., -1.), v(-1., 1., -1.)],
            normal: Vec3::new(0.0, 1.0, 0.0),
        },
        Face {
            corners: [v(-1., -1., -1.), v(1., -1., -1.), v(1., -1., 1.), v(-1., -1., 1.)],
            normal: Vec3::new(0.0, -1.0, 0.0),
        },
    ]
}

fn face_command(
    model: &SceneModel,
    camera: &PerspectiveCamera,
    size: f64,
    transform: &Transform,
    face: &Face,
    color: Rgba,
    cull: bool,
) -> Option<DrawCommand> {
    let world: Vec<Vec3> = face
        .corners
        .iter()
        .map(|c| model.to_world(transform.apply(*c)))
        .collect();
    let center = Vec3::centroid(&world);
    let mut normal = model
        .root
        .apply_direction(transform.apply_direction(face.normal))
        .normalized();

    let towards_camera = camera.position - center;
    if normal.dot(towards_camera) <= 0.0 {
        if cull {
            return None;
        }
        normal = -normal;
    }

    let projected: Option<Vec<_>> = world.iter().map(|p| camera.project(*p, size, size)).collect();
    let projected = projected?;
    let depth = projected.iter().map(|p| p.depth).sum::<f64>() / projected.len() as f64;

    Some(DrawCommand::Polygon {
        points: projected.iter().map(|p| p.point).collect(),
        fill: color.lit(light_at(&model.lights, center, normal)),
        depth,
    })
}

/// Ambient plus Lambert diffuse from point lights with linear falloff
fn light_at(lights: &[Light], position: Vec3, normal: Vec3) -> [f64; 3] {
    let mut total = [0.0; 3];
    for light in lights {
        let (color, amount) = match *light {
            Light::Ambient { color, intensity } => (color, intensity),
            Light::Point {
                color,
                intensity,
                position: at,
                range,
            } => {
                let to_light = at - position;
                let distance = to_light.length();
                let falloff = (1.0 - distance / range).clamp(0.0, 1.0);
                let lambert = normal.dot(to_light.normalized()).max(0.0);
                (color, intensity * lambert * falloff)
            }
        };
        for (channel, c) in total.iter_mut().zip(color.unit()) {
            *channel += c * amount;
        }
    }
    total.map(|c| c.min(1.0))
}

/// Latitude rings and meridians of a sphere
fn sphere_edges(radius: f64) -> Vec<(Vec3, Vec3)> {
    use std::f64::consts::{PI, TAU};

    let at = |ring: usize, seg: usize| {
        let phi = ring as f64 / SPHERE_RINGS as f64 * PI;
        let theta = seg as f64 / SPHERE_SEGMENTS as f64 * TAU;
        Vec3::new(
            radius * phi.sin() * theta.cos(),
            radius * phi.cos(),
            radius * phi.sin() * theta.sin(),
        )
    };

    let mut edges = Vec::new();
    for ring in 1..SPHERE_RINGS {
        for seg in 0..SPHERE_SEGMENTS {
            edges.push((at(ring, seg), at(ring, (seg + 1) % SPHERE_SEGMENTS)));
        }
    }
    for seg in 0..SPHERE_SEGMENTS {
        for ring in 0..SPHERE_RINGS {
            edges.push((at(ring, seg), at(ring + 1, seg)));
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SceneConfig;

    fn frame_at(t: f64) -> Frame {
        let mut model = SceneModel::build(&SceneConfig::default());
        model.update(t);
        compose_frame(&model, &PerspectiveCamera::default(), 600.0)
    }

    #[test]
    fn test_rgba_css() {
        assert_eq!(Rgba::from_hex(0xff6b35).to_css(), "rgba(255, 107, 53, 1)");
        assert_eq!(Rgba::from_hex(0x808080).scaled(4.0).r, 255);
    }

    #[test]
    fn test_frame_contents() {
        let frame = frame_at(1.0);
        let sphere_lines = (SPHERE_RINGS - 1) * SPHERE_SEGMENTS + SPHERE_SEGMENTS * SPHERE_RINGS;
        assert_eq!(frame.lines(), sphere_lines + 40);
        assert_eq!(frame.dots(), 40);
        // Each closed box shows at most three faces; every document shows one
        assert!(frame.polygons() >= 6 + 5);
        assert!(frame.polygons() <= 6 * 3 + 5);
    }

    #[test]
    fn test_frame_is_back_to_front() {
        let frame = frame_at(4.2);
        assert!(frame
            .commands
            .windows(2)
            .all(|w| w[0].depth() >= w[1].depth()));
    }

    #[test]
    fn test_lighting_stays_in_range() {
        let model = SceneModel::build(&SceneConfig::default());
        let shade = light_at(&model.lights, Vec3::new(4.0, 4.0, 4.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(shade.iter().all(|c| (0.0..=1.0).contains(c)));
        // Ambient alone keeps faces visible
        let dark = light_at(&model.lights, Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(dark.iter().all(|c| *c >= 0.7 - 1e-9));
    }

    #[test]
    fn test_recording_renderer_ignores_late_frames() {
        let mut renderer = RecordingRenderer::new();
        let stats = renderer.stats();
        renderer.resize(300.0);
        renderer.render(&Frame::default());
        renderer.dispose();
        renderer.render(&Frame::default());

        let stats = stats.borrow();
        assert_eq!(stats.frames, 1);
        assert_eq!(stats.late_renders, 1);
        assert_eq!(stats.size, 300.0);
    }
}
