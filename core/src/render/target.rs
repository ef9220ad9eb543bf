//! Drawing targets.

use crate::math::color::Color3;
use crate::math::vec::Vec2;

/// A surface that renderable objects draw their primitives onto.
///
/// The renderer is agnostic of how primitives are rasterized; it only
/// emits filled polygons, line segments, and filled circles in screen
/// coordinates. Implementations are expected to clip primitives that
/// extend past their bounds. Coordinates may be fractional and, after
/// projection clamping, lie within ±[`COORD_LIMIT`][crate::render::cam::COORD_LIMIT]
/// of the origin.
pub trait Surface {
    /// Fills the polygon with the given screen-space vertices.
    ///
    /// Vertex order may be clockwise or counterclockwise. Polygons with
    /// fewer than three vertices are ignored.
    fn fill_polygon(&mut self, verts: &[Vec2], color: Color3);

    /// Draws a line segment of the given width in pixels.
    fn line(&mut self, from: Vec2, to: Vec2, width: u32, color: Color3);

    /// Fills a circle of the given radius in pixels.
    fn fill_circle(&mut self, center: Vec2, radius: u32, color: Color3);
}
