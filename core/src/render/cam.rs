//! The pinhole camera and point projection.

use crate::math::angle::Angle;
use crate::math::mat::{Mat3, rotate_xzy};
use crate::math::vec::{Vec2, Vec3, vec2};

use super::Dims;

/// Largest magnitude of a projected screen coordinate.
///
/// Points very close to the camera plane can project to enormous
/// coordinates; they are clamped per axis rather than rejected so that
/// downstream primitive drawing stays within safe numeric bounds.
pub const COORD_LIMIT: f32 = 5000.0;

/// The result of projecting a single camera-space point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projected {
    /// The projected screen coordinates, or `None` if the point lies
    /// behind the camera plane. Every caller must check this before
    /// using the point; a primitive referencing an unprojectable point
    /// is skipped for the frame.
    pub pos: Option<Vec2>,
    /// Inverse distance from the camera, used to size points and line
    /// widths so that nearer geometry draws thicker. 1.0 when the point
    /// did not project.
    pub scale: f32,
}

/// Projects a camera-space point onto the screen.
///
/// The camera looks along the +y axis; +x is screen right and +z is up
/// (screen y grows downward, hence the negated z). A point with a
/// non-positive forward coordinate is behind the camera plane and yields
/// no projection; this is a defined sentinel, not an error. The exact
/// zero case would divide by zero and is likewise treated as
/// unprojectable.
///
/// # Examples
/// ```
/// # use corundum_core::math::{vec2, vec3};
/// # use corundum_core::render::cam::project;
/// let p = project(vec3(0.0, 3.0, 0.0), vec2(250.0, 250.0), 1.0);
/// assert_eq!(p.pos, Some(vec2(250.0, 250.0)));
/// assert_eq!(p.scale, 1.0 / 3.0);
/// ```
pub fn project(point: Vec3, offset: Vec2, focal_len: f32) -> Projected {
    if point.y() <= 0.0 {
        return Projected { pos: None, scale: 1.0 };
    }

    let focal_by_y = focal_len / point.y();
    let pos = vec2(point.x(), -point.z()) * focal_by_y + offset;
    let pos = vec2(
        pos.x().clamp(-COORD_LIMIT, COORD_LIMIT),
        pos.y().clamp(-COORD_LIMIT, COORD_LIMIT),
    );

    Projected {
        pos: Some(pos),
        scale: point.len().recip(),
    }
}

/// The scene's viewpoint: a position, an orientation, and a pinhole
/// projection defined by a focal length and viewport size.
///
/// Created once at scene start and mutated in place by relative move and
/// rotate calls issued from input handling; read by every object's draw
/// call within the same frame. All state is private and read through
/// accessors returning copies, so no caller can alias the camera's
/// internal arrays. Because mutation requires `&mut self`, a reader can
/// never observe the rotation matrix out of sync with the angles it was
/// derived from.
#[derive(Clone, Debug)]
pub struct Camera {
    pos: Vec3,
    pitch: Angle,
    yaw: Angle,
    matrix: Mat3,
    focal_len: f32,
    dims: Dims,
    /// World units per move step; consumed by input mapping.
    pub move_speed: f32,
    /// Rotation per rotate step; consumed by input mapping.
    pub rotate_speed: Angle,
}

impl Camera {
    /// Creates a camera at the origin looking along +y, with the given
    /// viewport size and a focal length of 1.
    pub fn new(dims: Dims) -> Self {
        Self {
            pos: Vec3::zero(),
            pitch: Angle::ZERO,
            yaw: Angle::ZERO,
            matrix: Mat3::IDENTITY,
            focal_len: 1.0,
            dims,
            move_speed: 0.1,
            rotate_speed: Angle::RIGHT / 45.0,
        }
    }

    /// Returns `self` moved to `pos`.
    #[must_use]
    pub fn at(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    /// Returns `self` with the given focal length.
    ///
    /// # Panics
    /// If `focal_len` is not positive.
    #[must_use]
    pub fn focal_len(mut self, focal_len: f32) -> Self {
        assert!(focal_len > 0.0, "focal length must be positive");
        self.focal_len = focal_len;
        self
    }

    /// Adds `delta` to the camera position.
    ///
    /// The delta is consumed as-is; whether it is meant in world or
    /// camera frame is the caller's decision, and any frame conversion
    /// happens before this call.
    pub fn move_relative(&mut self, delta: Vec3) {
        self.pos += delta;
    }

    /// Adds the deltas to the camera's pitch (about x) and yaw (about
    /// the z up axis) and rederives the rotation matrix.
    ///
    /// The matrix is consistent with the new angles by the time this
    /// returns; there is no observable intermediate state.
    pub fn rotate_relative(&mut self, d_pitch: Angle, d_yaw: Angle) {
        self.pitch += d_pitch;
        self.yaw += d_yaw;
        // World-to-view rotation: the negated-angle composite, same
        // convention as the objects' inverse-rotation matrix.
        self.matrix = rotate_xzy(-self.pitch, -self.yaw, Angle::ZERO);
    }

    /// Transforms a world-space point into camera space.
    pub fn to_view(&self, world: Vec3) -> Vec3 {
        self.matrix.apply(&(world - self.pos))
    }

    /// Returns the camera's world-space position.
    pub fn position(&self) -> Vec3 {
        self.pos
    }

    /// Returns the camera's cumulative pitch and yaw.
    pub fn orientation(&self) -> (Angle, Angle) {
        (self.pitch, self.yaw)
    }

    /// Returns the world-to-view rotation matrix.
    pub fn matrix(&self) -> Mat3 {
        self.matrix
    }

    /// Returns the focal length.
    pub fn focal(&self) -> f32 {
        self.focal_len
    }

    /// Returns the viewport size in pixels.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Returns the screen-space offset of the viewport center,
    /// added to every projected point.
    pub fn offset(&self) -> Vec2 {
        vec2(self.dims.0 as f32 / 2.0, self.dims.1 as f32 / 2.0)
    }
}
