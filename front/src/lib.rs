//! Frontends for creating simple applications with `corundum`.

use std::time::Duration;

use raster::Canvas;

pub mod minifb;
pub mod raster;

/// Per-frame state. The window run method passes an instance of `Frame`
/// to the callback function on every iteration of the main loop.
pub struct Frame<'a, Win> {
    /// Elapsed time since the start of the first frame.
    pub t: Duration,
    /// Elapsed time since the start of the previous frame.
    pub dt: Duration,
    /// Canvas to draw the frame into, cleared before the callback runs.
    pub canvas: &'a mut Canvas,
    /// Reference to the window object.
    pub win: &'a mut Win,
}
