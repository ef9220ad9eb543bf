//! Mesh construction and loading for the `corundum` renderer.
//!
//! Builders in [`solids`] produce vertex and face (or edge) lists ready
//! to hand to `FaceObject` and `WireObject`; [`io`] loads triangle
//! meshes from binary STL data.

pub mod io;
pub mod solids;
