//! Per-object transform state.
//!
//! A [`Body`] owns an object's vertices and the transform bookkeeping
//! that every object kind shares: position, accumulated rotation, scale,
//! and visibility. Face and wireframe objects embed a body and add their
//! own topology on top.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::math::angle::Angle;
use crate::math::color::Color3;
use crate::math::mat::{Mat3, rotate_xzy};
use crate::math::vec::{Vec3, centroid};

/// The mutable transform state of a renderable object.
///
/// Two vertex sets are kept. `original` holds the reference shape:
/// vertices in the object's local frame, rotated and scaled along with
/// the object but never translated. `verts` holds the world-space
/// vertices that drawing reads. The invariant `verts[i] == original[i]
/// + position` holds after every mutating call, which is what makes
/// [`Body::move_absolute`] idempotent.
#[derive(Debug)]
pub(crate) struct State {
    pub(crate) original: Vec<Vec3>,
    pub(crate) verts: Vec<Vec3>,
    pub(crate) position: Vec3,
    /// Accumulated rotation about the x, y, and z axes.
    pub(crate) rotation: [Angle; 3],
    pub(crate) scale: f32,
    /// Centroid of `verts`; refreshed by every mutating call.
    pub(crate) center: Vec3,
    /// The negated-angle rotation composite. Its transpose carries the
    /// objects' face normals into world space for shading.
    pub(crate) inv_rotation: Mat3,
    pub(crate) color: Color3,
    pub(crate) hidden: bool,
}

/// The transform state shared by every renderable object.
///
/// All state sits behind a reader-writer lock. Mutators take the write
/// lock, so a draw call holding the read lock never observes a
/// half-applied transform, and a mutation started mid-draw waits for
/// the frame to release the lock. Each body has its own lock; no
/// operation ever holds two of them, so lock ordering cannot deadlock.
#[derive(Debug)]
pub struct Body {
    state: RwLock<State>,
}

impl Body {
    /// Creates a body from local-frame vertices, placed at `position`.
    ///
    /// # Panics
    /// If `verts` is empty.
    pub fn new(verts: Vec<Vec3>, position: Vec3, color: Color3) -> Self {
        let center = centroid(&verts);
        let body = Self {
            state: RwLock::new(State {
                original: verts.clone(),
                verts,
                position: Vec3::zero(),
                rotation: [Angle::ZERO; 3],
                scale: 1.0,
                center,
                inv_rotation: Mat3::IDENTITY,
                color,
                hidden: false,
            }),
        };
        body.move_absolute(position);
        body
    }

    /// Translates the object by `delta`.
    pub fn move_relative(&self, delta: Vec3) {
        let mut guard = self.write();
        let s = &mut *guard;
        for v in &mut s.verts {
            *v += delta;
        }
        s.position += delta;
        s.center = centroid(&s.verts);
    }

    /// Places the object so that its reference shape sits at `target`.
    ///
    /// World vertices are recomputed from the reference shape rather
    /// than translated, so calling this twice with the same target is
    /// an exact no-op.
    pub fn move_absolute(&self, target: Vec3) {
        let mut guard = self.write();
        let s = &mut *guard;
        for (v, o) in s.verts.iter_mut().zip(&s.original) {
            *v = *o + target;
        }
        s.position = target;
        s.center = centroid(&s.verts);
    }

    /// Rotates the object about its own center.
    ///
    /// The angles turn about the world x, y, and z axes, applied in the
    /// pipeline's canonical order: x first, then z, then y.
    pub fn rotate_local(&self, x: Angle, y: Angle, z: Angle) {
        let mut guard = self.write();
        let pivot = guard.center;
        rotate(&mut guard, x, y, z, pivot);
    }

    /// Rotates the object about an arbitrary world-space pivot.
    ///
    /// A vertex lying exactly at the pivot does not move. The center is
    /// refreshed afterwards, since rotating about an external pivot
    /// sweeps the whole object to a new place.
    pub fn rotate_around_point(&self, x: Angle, y: Angle, z: Angle, pivot: Vec3) {
        rotate(&mut self.write(), x, y, z, pivot);
    }

    /// Rescales the object about a world-space pivot.
    ///
    /// `new_scale` is absolute, not a factor: setting the same scale
    /// twice is a no-op. The pivot keeps its exact position.
    ///
    /// # Panics
    /// If `new_scale` is not positive.
    pub fn set_scale(&self, new_scale: f32, pivot: Vec3) {
        assert!(new_scale > 0.0, "scale must be positive");
        let mut guard = self.write();
        let s = &mut *guard;
        let factor = new_scale / s.scale;
        for v in &mut s.verts {
            *v = pivot + (*v - pivot) * factor;
        }
        // Same pivot in the reference frame, which is offset from the
        // world frame by the object's position.
        let local_pivot = pivot - s.position;
        for o in &mut s.original {
            *o = local_pivot + (*o - local_pivot) * factor;
        }
        s.scale = new_scale;
        s.center = centroid(&s.verts);
    }

    /// Makes the object visible to the scene.
    pub fn show(&self) {
        self.write().hidden = false;
    }

    /// Hides the object; the scene skips hidden objects when drawing.
    pub fn hide(&self) {
        self.write().hidden = true;
    }

    /// Returns whether the object is hidden.
    pub fn is_hidden(&self) -> bool {
        self.read().hidden
    }

    /// Returns the object's position.
    pub fn position(&self) -> Vec3 {
        self.read().position
    }

    /// Returns the accumulated rotation about the x, y, and z axes.
    pub fn rotation(&self) -> [Angle; 3] {
        self.read().rotation
    }

    /// Returns the object's absolute scale.
    pub fn scale(&self) -> f32 {
        self.read().scale
    }

    /// Returns the centroid of the object's world-space vertices.
    pub fn center(&self) -> Vec3 {
        self.read().center
    }

    /// Returns the object's base color.
    pub fn color(&self) -> Color3 {
        self.read().color
    }

    /// Sets the object's base color.
    pub fn set_color(&self, color: Color3) {
        self.write().color = color;
    }

    /// Returns a snapshot of the object's world-space vertices.
    pub fn vertices(&self) -> Vec<Vec3> {
        self.read().verts.clone()
    }

    /// Returns the number of vertices.
    pub fn len(&self) -> usize {
        self.read().verts.len()
    }

    /// Always false; bodies cannot be created empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Read-locks the state for the duration of a draw call.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Applies a rotation about `pivot` to the locked state.
///
/// The reference shape rotates about the same pivot expressed in the
/// local frame, which is offset from the world frame by the object's
/// position. This keeps `verts[i] == original[i] + position` exact, so
/// a later absolute move reproduces the rotated shape at the new place.
fn rotate(s: &mut State, x: Angle, y: Angle, z: Angle, pivot: Vec3) {
    let m = rotate_xzy(x, z, y);
    for v in &mut s.verts {
        *v = m.apply(&(*v - pivot)) + pivot;
    }
    let local_pivot = pivot - s.position;
    for o in &mut s.original {
        *o = m.apply(&(*o - local_pivot)) + local_pivot;
    }
    let [rx, ry, rz] = &mut s.rotation;
    *rx += x;
    *ry += y;
    *rz += z;
    s.inv_rotation = rotate_xzy(-*rx, -*rz, -*ry);
    s.center = centroid(&s.verts);
}
