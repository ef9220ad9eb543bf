use std::ops::ControlFlow::Continue;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use minifb::{Key, KeyRepeat};

use co::prelude::*;
use co_front::minifb::Window;
use co_geom::solids::{Cube, Grid};

/// Interactive scene: a spinning cube animated from a worker thread
/// over a wireframe ground grid.
///
/// WASD moves the camera along the world x and y axes, Q and E move it
/// up and down, the arrow keys pitch and yaw it. Space spawns another
/// cube from the scene's type registry; X removes the newest one.
fn main() {
    env_logger::init();
    eprintln!("WASD/QE to move, arrows to look, Space to spawn, X to remove...");

    let mut win = Window::builder()
        .title("corundum//solids")
        .dims((800, 600))
        .build()
        .expect("could not create window");

    let camera = Camera::new(win.dims).at(vec3(0.0, -6.0, 1.0));
    let mut scene = Scene::new(camera);

    let (verts, edges) = Grid { cells: (10, 10), spacing: 1.0 }.build();
    scene.add(Arc::new(
        WireObject::new(verts, edges, vec3(0.0, 0.0, -1.0), rgb(90, 140, 90))
            .style(WireStyle {
                draw_points: false,
                line_thickness: 8.0,
                ..Default::default()
            }),
    ));

    let (verts, faces) = Cube { side_len: 1.5 }.build(rgb(200, 60, 40));
    let cube = Arc::new(FaceObject::new(
        verts,
        faces,
        vec3(0.0, 0.0, 1.0),
        rgb(200, 60, 40),
    ));
    scene.add(cube.clone());

    // The cube spins from its own thread while the main loop draws;
    // each body's lock keeps the two from interleaving mid-frame.
    thread::spawn(move || {
        loop {
            cube.body().rotate_local(degs(0.4), Angle::ZERO, degs(0.9));
            thread::sleep(Duration::from_millis(10));
        }
    });

    let spawned = AtomicUsize::new(0);
    scene.register("cube", move || {
        let n = spawned.fetch_add(1, Ordering::Relaxed) as f32;
        let (verts, faces) = Cube { side_len: 0.8 }.build(rgb(60, 90, 200));
        Arc::new(FaceObject::new(
            verts,
            faces,
            vec3(n.mul_add(1.2, -3.0), 3.0, 0.5),
            rgb(60, 90, 200),
        ))
    });

    let mut extras = Vec::new();
    win.run(|frame| {
        let cam = &mut scene.camera;
        let step = cam.move_speed;
        let keys = &frame.win.imp;

        let mut delta = Vec3::zero();
        for (key, dir) in [
            (Key::W, vec3(0.0, step, 0.0)),
            (Key::S, vec3(0.0, -step, 0.0)),
            (Key::A, vec3(-step, 0.0, 0.0)),
            (Key::D, vec3(step, 0.0, 0.0)),
            (Key::Q, vec3(0.0, 0.0, step)),
            (Key::E, vec3(0.0, 0.0, -step)),
        ] {
            if keys.is_key_down(key) {
                delta += dir;
            }
        }
        cam.move_relative(delta);

        let turn = cam.rotate_speed;
        let mut pitch = Angle::ZERO;
        let mut yaw = Angle::ZERO;
        if keys.is_key_down(Key::Up) {
            pitch = pitch + turn;
        }
        if keys.is_key_down(Key::Down) {
            pitch = pitch - turn;
        }
        if keys.is_key_down(Key::Left) {
            yaw = yaw + turn;
        }
        if keys.is_key_down(Key::Right) {
            yaw = yaw - turn;
        }
        if pitch != Angle::ZERO || yaw != Angle::ZERO {
            cam.rotate_relative(pitch, yaw);
        }

        if keys.is_key_pressed(Key::Space, KeyRepeat::No) {
            extras.push(scene.spawn("cube").expect("cube type is registered"));
        }
        if keys.is_key_pressed(Key::X, KeyRepeat::No) {
            if let Some(obj) = extras.pop() {
                scene.remove(&obj);
            }
        }

        scene.advance(frame.canvas);
        Continue(())
    });
}
