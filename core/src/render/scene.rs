//! The scene: object collection, camera, and frame driver.

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, warn};
use thiserror::Error;

use super::cam::Camera;
use super::target::Surface;

/// A renderable object managed by a [`Scene`].
///
/// Objects are shared as `Arc<dyn Object>` so that worker threads can
/// mutate an object the scene is drawing; implementations synchronize
/// internally (see [`Body`][super::Body]) and take `&self` throughout.
pub trait Object: Send + Sync {
    /// Advances the object's own animation, called once per frame
    /// before any object draws. The default does nothing.
    fn update(&self) {}

    /// Draws the object onto the surface from the camera's viewpoint.
    fn draw(&self, cam: &Camera, surface: &mut dyn Surface);

    /// Returns whether the object should be skipped when drawing.
    /// Hidden objects still receive update calls.
    fn is_hidden(&self) -> bool {
        false
    }
}

/// Error spawning an object from the type registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    /// The requested name has no registered factory.
    #[error("no object type registered as {0:?}")]
    UnknownType(String),
}

type Factory = Box<dyn Fn() -> Arc<dyn Object> + Send + Sync>;

/// An ordered collection of objects, a camera, and a registry of
/// named object factories.
///
/// Objects draw in insertion order; an object added later paints over
/// everything added before it. Depth sorting happens within polygon
/// objects, not between objects.
pub struct Scene {
    objects: Vec<Arc<dyn Object>>,
    /// The viewpoint every draw call renders from.
    pub camera: Camera,
    registry: HashMap<String, Factory>,
}

impl Scene {
    /// Creates an empty scene viewed through `camera`.
    pub fn new(camera: Camera) -> Self {
        Self {
            objects: Vec::new(),
            camera,
            registry: HashMap::new(),
        }
    }

    /// Adds an object to the end of the draw order and returns a
    /// shared handle to it.
    pub fn add(&mut self, object: Arc<dyn Object>) -> Arc<dyn Object> {
        self.objects.push(Arc::clone(&object));
        debug!("added object, scene size {}", self.objects.len());
        object
    }

    /// Removes the object identified by pointer equality with `object`.
    ///
    /// Returns whether the object was present. Removing an object that
    /// was never added, or was already removed, is not an error.
    pub fn remove(&mut self, object: &Arc<dyn Object>) -> bool {
        let before = self.objects.len();
        self.objects.retain(|o| !Arc::ptr_eq(o, object));
        let removed = self.objects.len() < before;
        if !removed {
            warn!("remove: object not in scene");
        }
        removed
    }

    /// Registers a factory under `name` for [`spawn`][Self::spawn].
    ///
    /// Registering the same name again replaces the old factory.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Arc<dyn Object> + Send + Sync + 'static,
    {
        self.registry.insert(name.into(), Box::new(factory));
    }

    /// Creates an object from the factory registered under `name` and
    /// adds it to the scene.
    pub fn spawn(&mut self, name: &str) -> Result<Arc<dyn Object>, SceneError> {
        let factory = self
            .registry
            .get(name)
            .ok_or_else(|| SceneError::UnknownType(name.into()))?;
        let object = factory();
        debug!("spawned {name:?}");
        Ok(self.add(object))
    }

    /// Advances and draws one frame: updates every object, then draws
    /// the visible ones in insertion order.
    pub fn advance(&mut self, surface: &mut dyn Surface) {
        for obj in &self.objects {
            obj.update();
        }
        for obj in &self.objects {
            if !obj.is_hidden() {
                obj.draw(&self.camera, surface);
            }
        }
    }

    /// Returns the scene's objects in draw order.
    pub fn objects(&self) -> &[Arc<dyn Object>] {
        &self.objects
    }

    /// Returns the number of objects in the scene.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns whether the scene has no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
