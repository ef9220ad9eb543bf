//! Vectors, matrices, angles, colors, and other basic mathematics.

pub mod angle;
pub mod approx;
pub mod color;
pub mod mat;
pub mod vec;

pub use angle::{Angle, degs, rads};
pub use color::{Color3, rgb};
pub use mat::{Mat3, rotate_x, rotate_xzy, rotate_y, rotate_z};
pub use vec::{Vec2, Vec3, centroid, vec2, vec3};
