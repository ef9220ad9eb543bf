//! Wireframe objects: vertices drawn as dots, edges as lines.

use crate::math::color::Color3;
use crate::math::vec::Vec3;

use super::body::Body;
use super::cam::{Camera, Projected, project};
use super::scene::Object;
use super::target::Surface;

/// An edge between two vertices of a wireframe object.
#[derive(Copy, Clone, Debug)]
pub struct Edge {
    /// Indices of the edge's endpoints.
    pub ends: [usize; 2],
    /// Per-edge color; `None` falls back to the object's base color.
    pub color: Option<Color3>,
}

impl Edge {
    /// Creates an edge in the object's base color.
    pub const fn new(from: usize, to: usize) -> Self {
        Self { ends: [from, to], color: None }
    }

    /// Returns `self` with its own color.
    #[must_use]
    pub const fn in_color(mut self, color: Color3) -> Self {
        self.color = Some(color);
        self
    }
}

/// How a wireframe object renders its primitives.
///
/// Thicknesses are multiplied by the projection's inverse-distance
/// scale, so nearer geometry draws thicker; the result never goes
/// below one pixel.
#[derive(Copy, Clone, Debug)]
pub struct WireStyle {
    pub draw_points: bool,
    pub draw_lines: bool,
    pub point_thickness: f32,
    pub line_thickness: f32,
}

impl Default for WireStyle {
    fn default() -> Self {
        Self {
            draw_points: true,
            draw_lines: true,
            point_thickness: 5.0,
            line_thickness: 5.0,
        }
    }
}

/// An object drawn as vertex dots and edge lines.
///
/// Unlike polygon faces, wireframe primitives are not depth sorted;
/// edges draw in definition order, then dots on top of them. An edge
/// with an unprojectable endpoint, or a dot for an unprojectable
/// vertex, is skipped for the frame.
#[derive(Debug)]
pub struct WireObject {
    body: Body,
    edges: Vec<Edge>,
    style: WireStyle,
}

impl WireObject {
    /// Creates a wireframe object from local-frame vertices and edges,
    /// placed at `position`.
    ///
    /// # Panics
    /// If `verts` is empty or an edge index is out of bounds.
    pub fn new(
        verts: Vec<Vec3>,
        edges: Vec<Edge>,
        position: Vec3,
        color: Color3,
    ) -> Self {
        let len = verts.len();
        for edge in &edges {
            for &i in &edge.ends {
                assert!(i < len, "edge vertex index {i} out of bounds ({len})");
            }
        }
        Self {
            body: Body::new(verts, position, color),
            edges,
            style: WireStyle::default(),
        }
    }

    /// Returns `self` with the given style.
    #[must_use]
    pub fn style(mut self, style: WireStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns the object's transform state.
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Returns the object's edges.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

impl Object for WireObject {
    fn draw(&self, cam: &Camera, surface: &mut dyn Surface) {
        let s = self.body.read();
        let offset = cam.offset();
        let focal = cam.focal();

        let projected: Vec<Projected> = s
            .verts
            .iter()
            .map(|&v| project(cam.to_view(v), offset, focal))
            .collect();

        if self.style.draw_lines {
            for edge in &self.edges {
                let [a, b] = edge.ends;
                let (Some(from), Some(to)) = (projected[a].pos, projected[b].pos)
                else {
                    continue;
                };
                let scale = (projected[a].scale + projected[b].scale) / 2.0;
                let width = (self.style.line_thickness * scale).max(1.0);
                let color = edge.color.unwrap_or(s.color);
                surface.line(from, to, width as u32, color);
            }
        }

        if self.style.draw_points {
            for p in &projected {
                let Some(pos) = p.pos else { continue };
                let radius = (self.style.point_thickness * p.scale).max(1.0);
                surface.fill_circle(pos, radius as u32, s.color);
            }
        }
    }

    fn is_hidden(&self) -> bool {
        self.body.is_hidden()
    }
}
