//! Frontend using the `minifb` crate for window creation and event handling.

use std::ops::ControlFlow::{self, Break};
use std::time::Instant;

use log::{debug, info};
use minifb::{Key, WindowOptions};

use co::math::Color3;
use co::render::Dims;

use crate::Frame;
use crate::raster::Canvas;

/// A lightweight wrapper of a `minifb` window.
pub struct Window {
    /// The wrapped minifb window.
    pub imp: minifb::Window,
    /// The width and height of the window.
    pub dims: Dims,
    /// The color the canvas is cleared to before each frame.
    pub clear_color: Color3,
}

/// Builder for creating `Window`s.
pub struct Builder<'title> {
    pub dims: Dims,
    pub title: &'title str,
    pub target_fps: Option<u32>,
    pub opts: WindowOptions,
}

impl Default for Builder<'_> {
    fn default() -> Self {
        Self {
            dims: (800, 600),
            title: "// corundum application //",
            target_fps: Some(60),
            opts: WindowOptions::default(),
        }
    }
}

impl<'t> Builder<'t> {
    /// Sets the width and height of the window.
    pub fn dims(mut self, dims: Dims) -> Self {
        self.dims = dims;
        self
    }
    /// Sets the title of the window.
    pub fn title(mut self, title: &'t str) -> Self {
        self.title = title;
        self
    }
    /// Sets the frame rate cap of the window. `None` means unlimited
    /// frame rate (the main loop runs as fast as possible).
    pub fn target_fps(mut self, fps: Option<u32>) -> Self {
        self.target_fps = fps;
        self
    }
    /// Sets other `minifb` options.
    pub fn options(mut self, opts: WindowOptions) -> Self {
        self.opts = opts;
        self
    }

    /// Creates the window.
    pub fn build(self) -> minifb::Result<Window> {
        let Self { dims, title, target_fps, opts } = self;
        let mut imp =
            minifb::Window::new(title, dims.0 as usize, dims.1 as usize, opts)?;
        if let Some(fps) = target_fps {
            imp.set_target_fps(fps as usize);
        }
        debug!("created {}×{} window", dims.0, dims.1);
        Ok(Window { imp, dims, clear_color: Color3::WHITE })
    }
}

impl Window {
    /// Returns a window builder.
    pub fn builder() -> Builder<'static> {
        Builder::default()
    }

    /// Updates the window content with pixel data from `canvas`.
    ///
    /// The data is interpreted as colors in `0x00_RR_GG_BB` format.
    ///
    /// # Panics
    /// If the canvas is smaller than the window.
    pub fn present(&mut self, canvas: &Canvas) {
        let (w, h) = self.dims;
        self.imp
            .update_with_buffer(canvas.data(), w as usize, h as usize)
            .unwrap();
    }

    /// Runs the main loop of the program, invoking the callback on each
    /// iteration to compute and draw the next frame.
    ///
    /// The main loop stops and this function returns if:
    /// * the user closes the window via the GUI (e.g. titlebar close button);
    /// * the Esc key is pressed; or
    /// * the callback returns `ControlFlow::Break`.
    pub fn run<F>(&mut self, mut frame_fn: F)
    where
        F: FnMut(&mut Frame<Self>) -> ControlFlow<()>,
    {
        let mut canvas = Canvas::new(self.dims);

        let start = Instant::now();
        let mut last = start;
        let mut frames = 0_u32;
        loop {
            if self.should_quit() {
                break;
            }
            canvas.clear(self.clear_color);
            let frame = &mut Frame {
                t: start.elapsed(),
                dt: last.elapsed(),
                canvas: &mut canvas,
                win: self,
            };

            last = Instant::now();
            if let Break(_) = frame_fn(frame) {
                break;
            }
            self.present(&canvas);
            frames += 1;
        }
        let secs = start.elapsed().as_secs_f32();
        info!("rendered {frames} frames in {secs:.1} s ({:.1} fps)", frames as f32 / secs);
    }

    fn should_quit(&self) -> bool {
        !self.imp.is_open() || self.imp.is_key_down(Key::Escape)
    }
}
