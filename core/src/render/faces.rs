//! Flat-shaded polygon-face objects.

use crate::math::color::Color3;
use crate::math::vec::{Vec2, Vec3};

use super::body::{Body, State};
use super::cam::{Camera, project};
use super::scene::Object;
use super::target::Surface;

/// A polygon face: vertex indices into the owning object's vertex list,
/// a fill color, and an optional shading normal.
///
/// Faces without a normal are drawn in their plain fill color even when
/// shading is enabled.
#[derive(Clone, Debug)]
pub struct Face {
    /// Indices of the face's corners, in perimeter order.
    pub verts: Vec<usize>,
    pub color: Color3,
    /// Outward normal scaled to length 255, in the object's reference
    /// frame. The shading factor is derived from its rotated z (up)
    /// component.
    pub normal: Option<Vec3>,
}

impl Face {
    /// Creates an unshaded face.
    pub fn new(verts: Vec<usize>, color: Color3) -> Self {
        Self { verts, color, normal: None }
    }

    /// Returns `self` with the given shading normal.
    #[must_use]
    pub fn with_normal(mut self, normal: Vec3) -> Self {
        self.normal = Some(normal);
        self
    }
}

/// An object drawn as filled polygons with optional flat shading.
///
/// Faces are depth sorted farthest-first each frame by their mean vertex
/// distance to the camera and filled in that order, so nearer faces
/// paint over farther ones. A face is skipped for the frame if any of
/// its vertices fails to project.
#[derive(Debug)]
pub struct FaceObject {
    body: Body,
    faces: Vec<Face>,
    shadow: bool,
    shadow_effect: f32,
}

impl FaceObject {
    /// Creates a face object from local-frame vertices and faces,
    /// placed at `position`. Shading is enabled by default.
    ///
    /// # Panics
    /// If `verts` is empty, if a face has fewer than three corners, or
    /// if a face index is out of bounds.
    pub fn new(
        verts: Vec<Vec3>,
        faces: Vec<Face>,
        position: Vec3,
        color: Color3,
    ) -> Self {
        let len = verts.len();
        for face in &faces {
            assert!(face.verts.len() >= 3, "face with fewer than 3 corners");
            for &i in &face.verts {
                assert!(i < len, "face vertex index {i} out of bounds ({len})");
            }
        }
        Self {
            body: Body::new(verts, position, color),
            faces,
            shadow: true,
            shadow_effect: 1.0,
        }
    }

    /// Returns `self` with shading enabled or disabled.
    #[must_use]
    pub fn shadow(mut self, shadow: bool) -> Self {
        self.shadow = shadow;
        self
    }

    /// Returns `self` with the given shading divisor. Values above 1
    /// darken every face; 1 leaves a face with a straight-up normal
    /// at its plain fill color.
    ///
    /// # Panics
    /// If `effect` is not positive.
    #[must_use]
    pub fn shadow_effect(mut self, effect: f32) -> Self {
        assert!(effect > 0.0, "shadow effect must be positive");
        self.shadow_effect = effect;
        self
    }

    /// Returns the object's transform state.
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Returns the object's faces.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns face indices sorted farthest-first by mean vertex
    /// distance to `cam_pos`.
    ///
    /// The sort is stable, so equidistant faces keep their definition
    /// order.
    fn depth_order(&self, s: &State, cam_pos: Vec3) -> Vec<usize> {
        let depths: Vec<f32> = self
            .faces
            .iter()
            .map(|f| {
                let sum: f32 = f
                    .verts
                    .iter()
                    .map(|&i| (s.verts[i] - cam_pos).len())
                    .sum();
                sum / f.verts.len() as f32
            })
            .collect();

        let mut order: Vec<usize> = (0..self.faces.len()).collect();
        order.sort_by(|&a, &b| depths[b].total_cmp(&depths[a]));
        order
    }

    /// Returns the face's fill color with flat shading applied.
    ///
    /// The stored normal is carried to world space by the transpose of
    /// the inverse-rotation matrix; its z component, in -255..=255,
    /// maps linearly to a brightness factor in 0..=1, further divided
    /// by the shading divisor.
    fn shade(&self, face: &Face, s: &State) -> Color3 {
        let Some(normal) = face.normal.filter(|_| self.shadow) else {
            return face.color;
        };
        let world = s.inv_rotation.apply_transposed(&normal);
        let brightness = (world.z() + 255.0) / 510.0 / self.shadow_effect;
        face.color.scaled(brightness)
    }
}

impl Object for FaceObject {
    fn draw(&self, cam: &Camera, surface: &mut dyn Surface) {
        let s = self.body.read();
        let offset = cam.offset();
        let focal = cam.focal();

        let mut poly: Vec<Vec2> = Vec::new();
        'faces: for i in self.depth_order(&s, cam.position()) {
            let face = &self.faces[i];
            poly.clear();
            for &vi in &face.verts {
                match project(cam.to_view(s.verts[vi]), offset, focal).pos {
                    Some(p) => poly.push(p),
                    None => continue 'faces,
                }
            }
            surface.fill_polygon(&poly, self.shade(face, &s));
        }
    }

    fn is_hidden(&self) -> bool {
        self.body.is_hidden()
    }
}
