//! Core functionality of the `corundum` project.
//!
//! Corundum is a software 3D renderer built around a painter's-algorithm
//! pipeline: a scene of movable, rotatable, scalable objects made of
//! vertices and flat polygonal faces (or wireframe edges) is projected
//! through a pinhole camera onto an abstract 2D drawing surface.
//!
//! This crate contains the math library (vectors, matrices, angles,
//! colors), the per-object transform state, the camera, the face and
//! wireframe draw pipelines, and the scene driver. Window management and
//! mesh loading live in the `corundum-front` and `corundum-geom` crates.

pub mod math;
pub mod render;

pub mod prelude {
    pub use crate::math::{
        angle::{Angle, degs, rads},
        color::{Color3, rgb},
        mat::{Mat3, rotate_x, rotate_xzy, rotate_y, rotate_z},
        vec::{Vec2, Vec3, centroid, vec2, vec3},
    };

    pub use crate::render::{
        Dims,
        body::Body,
        cam::Camera,
        faces::{Face, FaceObject},
        scene::{Object, Scene},
        target::Surface,
        wire::{Edge, WireObject, WireStyle},
    };
}
