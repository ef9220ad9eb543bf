//! Builders for simple geometric shapes.

use co::math::{Color3, Vec3, vec3};
use co::render::faces::Face;
use co::render::wire::Edge;

/// The length shading normals are scaled to; a normal's rotated z
/// component then maps from -255..=255 to a brightness in 0..=1.
pub const NORMAL_LEN: f32 = 255.0;

/// A rectangular cuboid, defined by two opposite corners.
///
/// Builds six quads with outward axis-aligned shading normals.
#[derive(Copy, Clone, Debug)]
pub struct Cuboid {
    pub min: Vec3,
    pub max: Vec3,
}

/// A cube with the given side length, centered on the origin.
#[derive(Copy, Clone, Debug)]
pub struct Cube {
    pub side_len: f32,
}

/// A flat grid of lines in the z = 0 plane, centered on the origin.
///
/// Builds a wireframe of `cells.0` × `cells.1` squares with the given
/// cell side length.
#[derive(Copy, Clone, Debug)]
pub struct Grid {
    pub cells: (u32, u32),
    pub spacing: f32,
}

impl Cuboid {
    /// Builds the cuboid's vertices and faces in the given fill color.
    pub fn build(&self, color: Color3) -> (Vec<Vec3>, Vec<Face>) {
        let (min, max) = (self.min, self.max);
        // Vertex i has max coordinates on the axes set in i's low bits:
        // bit 0 = x, bit 1 = y, bit 2 = z.
        let verts: Vec<Vec3> = (0..8)
            .map(|i| {
                vec3(
                    if i & 1 == 0 { min.x() } else { max.x() },
                    if i & 2 == 0 { min.y() } else { max.y() },
                    if i & 4 == 0 { min.z() } else { max.z() },
                )
            })
            .collect();

        let quads: [([usize; 4], Vec3); 6] = [
            ([0, 1, 3, 2], vec3(0.0, 0.0, -NORMAL_LEN)),
            ([4, 5, 7, 6], vec3(0.0, 0.0, NORMAL_LEN)),
            ([0, 1, 5, 4], vec3(0.0, -NORMAL_LEN, 0.0)),
            ([2, 3, 7, 6], vec3(0.0, NORMAL_LEN, 0.0)),
            ([0, 2, 6, 4], vec3(-NORMAL_LEN, 0.0, 0.0)),
            ([1, 3, 7, 5], vec3(NORMAL_LEN, 0.0, 0.0)),
        ];
        let faces = quads
            .into_iter()
            .map(|(is, n)| Face::new(is.to_vec(), color).with_normal(n))
            .collect();

        (verts, faces)
    }
}

impl Cube {
    /// Builds the cube's vertices and faces in the given fill color.
    pub fn build(&self, color: Color3) -> (Vec<Vec3>, Vec<Face>) {
        let h = self.side_len / 2.0;
        Cuboid {
            min: vec3(-h, -h, -h),
            max: vec3(h, h, h),
        }
        .build(color)
    }
}

impl Grid {
    /// Builds the grid's vertices and edges.
    pub fn build(&self) -> (Vec<Vec3>, Vec<Edge>) {
        let (nx, ny) = (self.cells.0 as usize, self.cells.1 as usize);
        let (w, h) = (nx + 1, ny + 1);
        let origin = vec3(
            -(nx as f32) * self.spacing / 2.0,
            -(ny as f32) * self.spacing / 2.0,
            0.0,
        );

        let mut verts = Vec::with_capacity(w * h);
        for j in 0..h {
            for i in 0..w {
                let p = vec3(i as f32, j as f32, 0.0) * self.spacing;
                verts.push(origin + p);
            }
        }

        let mut edges = Vec::with_capacity(nx * h + ny * w);
        for j in 0..h {
            for i in 0..w {
                let v = j * w + i;
                if i + 1 < w {
                    edges.push(Edge::new(v, v + 1));
                }
                if j + 1 < h {
                    edges.push(Edge::new(v, v + w));
                }
            }
        }

        (verts, edges)
    }
}

#[cfg(test)]
mod tests {
    use co::assert_approx_eq;
    use co::math::centroid;
    use co::math::rgb;

    use super::*;

    #[test]
    fn cuboid_has_six_quads() {
        let (verts, faces) = Cuboid {
            min: vec3(0.0, 0.0, 0.0),
            max: vec3(2.0, 4.0, 6.0),
        }
        .build(rgb(1, 2, 3));

        assert_eq!(verts.len(), 8);
        assert_eq!(faces.len(), 6);
        assert!(faces.iter().all(|f| f.verts.len() == 4));
        assert!(faces.iter().all(|f| f.color == rgb(1, 2, 3)));
        assert_approx_eq!(centroid(&verts), vec3(1.0, 2.0, 3.0));
    }

    #[test]
    fn cuboid_normals_point_outward() {
        let (verts, faces) = Cube { side_len: 2.0 }.build(rgb(0, 0, 0));
        let center = centroid(&verts);
        for face in &faces {
            let n = face.normal.unwrap();
            assert_approx_eq!(n.len(), NORMAL_LEN);
            // The normal points away from the cube center.
            let face_center =
                centroid(&face.verts.iter().map(|&i| verts[i]).collect::<Vec<_>>());
            assert!(n.dot(&(face_center - center)) > 0.0);
        }
    }

    #[test]
    fn cube_is_centered() {
        let (verts, _) = Cube { side_len: 3.0 }.build(rgb(0, 0, 0));
        assert_approx_eq!(centroid(&verts), Vec3::zero());
        for v in &verts {
            assert_approx_eq!(v.len(), 1.5 * 3.0_f32.sqrt());
        }
    }

    #[test]
    fn grid_counts() {
        let (verts, edges) = Grid { cells: (2, 3), spacing: 1.0 }.build();
        assert_eq!(verts.len(), 3 * 4);
        // 2 horizontal edges per row of 3 vertices, 3 vertical per column.
        assert_eq!(edges.len(), 2 * 4 + 3 * 3);
        assert_approx_eq!(centroid(&verts), Vec3::zero());
    }

    #[test]
    fn grid_lies_flat() {
        let (verts, _) = Grid { cells: (4, 4), spacing: 0.5 }.build();
        assert!(verts.iter().all(|v| v.z() == 0.0));
    }
}
