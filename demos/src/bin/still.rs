use std::io;
use std::sync::Arc;

use log::info;

use co::prelude::*;
use co_front::raster::Canvas;
use co_geom::solids::{Cuboid, Grid};

/// Renders a single frame without opening a window and saves it as
/// `still.ppm` in the working directory.
fn main() -> io::Result<()> {
    env_logger::init();

    let dims = (640, 480);
    let mut scene = Scene::new(
        Camera::new(dims).at(vec3(0.0, -5.0, 1.5)).focal_len(1.2),
    );

    let (verts, edges) = Grid { cells: (8, 8), spacing: 1.0 }.build();
    scene.add(Arc::new(
        WireObject::new(verts, edges, vec3(0.0, 1.0, -1.0), rgb(90, 140, 90))
            .style(WireStyle { draw_points: false, ..Default::default() }),
    ));

    let (verts, faces) = Cuboid {
        min: vec3(-1.0, -0.4, -0.6),
        max: vec3(1.0, 0.4, 0.6),
    }
    .build(rgb(200, 60, 40));
    let slab = Arc::new(FaceObject::new(
        verts,
        faces,
        vec3(0.0, 1.0, 0.5),
        rgb(200, 60, 40),
    ));
    slab.body().rotate_local(degs(20.0), Angle::ZERO, degs(30.0));
    scene.add(slab);

    let mut canvas = Canvas::new(dims);
    scene.advance(&mut canvas);

    canvas.save_ppm("still.ppm")?;
    info!("wrote {}×{} image to still.ppm", dims.0, dims.1);
    Ok(())
}
