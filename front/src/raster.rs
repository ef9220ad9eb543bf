//! Software rasterization of the renderer's 2D primitives.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use co::math::{Color3, Vec2, vec2};
use co::render::{Dims, Surface};

/// An owned pixel buffer that rasterizes the renderer's primitives.
///
/// Pixels are stored row-major in `0x00_RR_GG_BB` format, ready to
/// present to a window or write out as an image. All primitives clip
/// to the canvas bounds; drawing entirely off-canvas is a no-op.
pub struct Canvas {
    dims: Dims,
    buf: Vec<u32>,
}

impl Canvas {
    /// Creates a canvas of the given size, cleared to white.
    pub fn new(dims: Dims) -> Self {
        let len = dims.0 as usize * dims.1 as usize;
        Self {
            dims,
            buf: vec![Color3::WHITE.to_rgb_u32(); len],
        }
    }

    /// Returns the canvas size in pixels.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Returns the pixel data, row-major.
    pub fn data(&self) -> &[u32] {
        &self.buf
    }

    /// Fills the whole canvas with one color.
    pub fn clear(&mut self, color: Color3) {
        self.buf.fill(color.to_rgb_u32());
    }

    /// Returns the color of the pixel at (`x`, `y`).
    ///
    /// # Panics
    /// If the coordinates are out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Color3 {
        assert!(x < self.dims.0 && y < self.dims.1);
        let [_, r, g, b] =
            self.buf[(y * self.dims.0 + x) as usize].to_be_bytes();
        Color3([r, g, b])
    }

    /// Writes the canvas as a binary PPM image.
    pub fn write_ppm(&self, mut out: impl Write) -> io::Result<()> {
        let (w, h) = self.dims;
        write!(out, "P6\n{w} {h}\n255\n")?;
        for px in &self.buf {
            let [_, r, g, b] = px.to_be_bytes();
            out.write_all(&[r, g, b])?;
        }
        Ok(())
    }

    /// Saves the canvas as a binary PPM image file.
    pub fn save_ppm(&self, path: impl AsRef<Path>) -> io::Result<()> {
        self.write_ppm(BufWriter::new(File::create(path)?))
    }

    /// Fills the pixel row from `x0` to `x1` inclusive, clipped.
    fn span(&mut self, y: i64, x0: f32, x1: f32, color: u32) {
        let (w, h) = self.dims;
        if y < 0 || y >= h as i64 {
            return;
        }
        let x0 = (x0.round().max(0.0)) as i64;
        let x1 = (x1.round().min(w as f32 - 1.0)) as i64;
        let row = y as usize * w as usize;
        for x in x0..=x1 {
            self.buf[row + x as usize] = color;
        }
    }
}

impl Surface for Canvas {
    /// Fills the polygon by even-odd scanline: for every pixel row, the
    /// crossings of the perimeter are paired up and the spans between
    /// pairs filled. Handles convex and concave perimeters alike.
    fn fill_polygon(&mut self, verts: &[Vec2], color: Color3) {
        if verts.len() < 3 {
            return;
        }
        let c = color.to_rgb_u32();

        let ys = verts.iter().map(Vec2::y);
        let y_min = ys.clone().fold(f32::MAX, f32::min).floor().max(0.0) as i64;
        let y_max = ys
            .fold(f32::MIN, f32::max)
            .ceil()
            .min(self.dims.1 as f32 - 1.0) as i64;

        let mut xs = Vec::with_capacity(verts.len());
        for y in y_min..=y_max {
            // Sample scanlines at pixel centers to avoid double-counting
            // crossings at vertices with integer y.
            let yc = y as f32 + 0.5;
            xs.clear();
            for (i, a) in verts.iter().enumerate() {
                let b = verts[(i + 1) % verts.len()];
                if (a.y() <= yc) != (b.y() <= yc) {
                    let t = (yc - a.y()) / (b.y() - a.y());
                    xs.push(a.x() + t * (b.x() - a.x()));
                }
            }
            xs.sort_by(f32::total_cmp);
            for pair in xs.chunks_exact(2) {
                self.span(y, pair[0], pair[1], c);
            }
        }
    }

    /// Draws a thick line as the quad spanned by offsetting the segment
    /// half a width to each side. A zero-length segment degenerates to
    /// a dot.
    fn line(&mut self, from: Vec2, to: Vec2, width: u32, color: Color3) {
        let d = to - from;
        let len = d.len();
        let half = (width.max(1) as f32) / 2.0;
        if len == 0.0 {
            self.fill_circle(from, half.ceil() as u32, color);
            return;
        }
        let perp = vec2(-d.y(), d.x()) * (half / len);
        self.fill_polygon(
            &[from + perp, to + perp, to - perp, from - perp],
            color,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: u32, color: Color3) {
        let c = color.to_rgb_u32();
        let r = radius.max(1) as f32;
        let y_min = (center.y() - r).floor().max(0.0) as i64;
        let y_max = (center.y() + r).ceil().min(self.dims.1 as f32 - 1.0) as i64;
        for y in y_min..=y_max {
            let dy = y as f32 + 0.5 - center.y();
            let chord = r * r - dy * dy;
            if chord < 0.0 {
                continue;
            }
            let half_chord = chord.sqrt();
            self.span(y, center.x() - half_chord, center.x() + half_chord, c);
        }
    }
}

#[cfg(test)]
mod tests {
    use co::math::rgb;

    use super::*;

    const RED: Color3 = rgb(255, 0, 0);

    fn canvas() -> Canvas {
        Canvas::new((20, 20))
    }

    #[test]
    fn starts_white() {
        assert!(canvas().data().iter().all(|&p| p == 0x00FF_FFFF));
    }

    #[test]
    fn clearing() {
        let mut c = canvas();
        c.clear(RED);
        assert_eq!(c.get(0, 0), RED);
        assert_eq!(c.get(19, 19), RED);
    }

    #[test]
    fn polygon_fills_interior_only() {
        let mut c = canvas();
        c.fill_polygon(
            &[vec2(5.0, 5.0), vec2(15.0, 5.0), vec2(15.0, 15.0), vec2(5.0, 15.0)],
            RED,
        );
        assert_eq!(c.get(10, 10), RED);
        assert_eq!(c.get(2, 10), Color3::WHITE);
        assert_eq!(c.get(10, 2), Color3::WHITE);
        assert_eq!(c.get(18, 18), Color3::WHITE);
    }

    #[test]
    fn concave_polygon_respects_notch() {
        // A U shape open at the top: the gap between the arms is empty.
        let u = [
            vec2(2.0, 2.0),
            vec2(8.0, 2.0),
            vec2(8.0, 18.0),
            vec2(12.0, 18.0),
            vec2(12.0, 2.0),
            vec2(18.0, 2.0),
            vec2(18.0, 19.0),
            vec2(2.0, 19.0),
        ];
        let mut c = canvas();
        c.fill_polygon(&u, RED);
        assert_eq!(c.get(5, 10), RED);
        assert_eq!(c.get(15, 10), RED);
        assert_eq!(c.get(10, 10), Color3::WHITE);
    }

    #[test]
    fn degenerate_polygon_is_ignored() {
        let mut c = canvas();
        c.fill_polygon(&[vec2(1.0, 1.0), vec2(5.0, 5.0)], RED);
        assert!(c.data().iter().all(|&p| p == 0x00FF_FFFF));
    }

    #[test]
    fn offscreen_primitives_clip() {
        let mut c = canvas();
        c.fill_polygon(
            &[vec2(-100.0, -100.0), vec2(100.0, -100.0), vec2(0.0, 100.0)],
            RED,
        );
        c.fill_circle(vec2(-50.0, 10.0), 5, RED);
        c.line(vec2(-10.0, 25.0), vec2(30.0, 25.0), 3, RED);
        // Must not panic; the triangle covers the canvas center.
        assert_eq!(c.get(10, 10), RED);
    }

    #[test]
    fn horizontal_line_has_width() {
        let mut c = canvas();
        c.line(vec2(2.0, 10.0), vec2(18.0, 10.0), 4, RED);
        assert_eq!(c.get(10, 9), RED);
        assert_eq!(c.get(10, 11), RED);
        assert_eq!(c.get(10, 5), Color3::WHITE);
    }

    #[test]
    fn circle_is_round() {
        let mut c = canvas();
        c.fill_circle(vec2(10.0, 10.0), 5, RED);
        assert_eq!(c.get(10, 10), RED);
        assert_eq!(c.get(13, 10), RED);
        assert_eq!(c.get(10, 13), RED);
        // Corners of the bounding box stay empty.
        assert_eq!(c.get(5, 5), Color3::WHITE);
        assert_eq!(c.get(15, 15), Color3::WHITE);
    }

    #[test]
    fn ppm_output() {
        let mut c = Canvas::new((2, 1));
        c.clear(rgb(1, 2, 3));
        let mut out = Vec::new();
        c.write_ppm(&mut out).unwrap();
        assert_eq!(out, b"P6\n2 1\n255\n\x01\x02\x03\x01\x02\x03");
    }
}
