//! The rendering pipeline: objects, camera, projection, and the
//! scene driver.
//!
//! Rendering follows the painter's algorithm: each polygon object sorts
//! its faces farthest-first by camera distance and fills them back to
//! front, so nearer faces overwrite farther ones. There is no depth
//! buffer; the ordering is a heuristic and can mis-order interpenetrating
//! or concave geometry.

pub mod body;
pub mod cam;
pub mod faces;
pub mod scene;
pub mod target;
pub mod wire;

pub use body::Body;
pub use cam::{Camera, Projected, project};
pub use faces::{Face, FaceObject};
pub use scene::{Object, Scene, SceneError};
pub use target::Surface;
pub use wire::{Edge, WireObject, WireStyle};

/// Width and height in pixels.
pub type Dims = (u32, u32);
