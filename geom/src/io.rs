//! Loading triangle meshes from binary STL data.

use std::collections::{HashMap, HashSet};
use std::io::{self, ErrorKind, Read};

use co::math::{Color3, Vec3};
use co::render::faces::Face;
use co::render::wire::Edge;
use log::debug;
use thiserror::Error;

use crate::solids::NORMAL_LEN;

/// Error reading an STL file.
#[derive(Debug, Error)]
pub enum StlError {
    #[error("reading STL data")]
    Io(#[from] io::Error),
    /// The header promised more triangles than the data contains.
    #[error("truncated STL: header promises {expected} triangles, found {found}")]
    Truncated { expected: u32, found: u32 },
}

/// Reads a binary STL mesh into a vertex and face list, with every
/// face in the given fill color.
///
/// The format is an 80-byte header, a little-endian `u32` triangle
/// count, and per triangle a normal and three vertices as `f32`
/// triplets followed by two attribute bytes, which are ignored.
///
/// STL repeats each vertex in every triangle that touches it; exactly
/// coincident vertices are merged so that transforming the object moves
/// the mesh as one. Normals are rescaled to the shading length; a zero
/// normal is recomputed from the winding, and a triangle degenerate
/// enough to defeat that too is kept unshaded.
pub fn read_stl(
    mut input: impl Read,
    color: Color3,
) -> Result<(Vec<Vec3>, Vec<Face>), StlError> {
    let mut header = [0; 80];
    input.read_exact(&mut header)?;
    let mut count = [0; 4];
    input.read_exact(&mut count)?;
    let count = u32::from_le_bytes(count);

    let mut verts: Vec<Vec3> = Vec::new();
    let mut index: HashMap<[u32; 3], usize> = HashMap::new();
    let mut faces = Vec::with_capacity(count as usize);

    let mut record = [0; 50];
    for found in 0..count {
        if let Err(e) = input.read_exact(&mut record) {
            return Err(if e.kind() == ErrorKind::UnexpectedEof {
                StlError::Truncated { expected: count, found }
            } else {
                e.into()
            });
        }

        let mut points = [Vec3::zero(); 4];
        for (i, p) in points.iter_mut().enumerate() {
            *p = read_vec3(&record[12 * i..]);
        }
        let [normal, corners @ ..] = points;

        let ids = corners.map(|c| {
            let key = c.0.map(f32::to_bits);
            *index.entry(key).or_insert_with(|| {
                verts.push(c);
                verts.len() - 1
            })
        });

        let mut face = Face::new(ids.to_vec(), color);
        if let Some(n) = shading_normal(normal, &corners) {
            face = face.with_normal(n);
        }
        faces.push(face);
    }

    debug!(
        "read {} triangles, {} distinct vertices",
        faces.len(),
        verts.len()
    );
    Ok((verts, faces))
}

/// Reads a binary STL mesh as a wireframe: the same merged vertices,
/// with one edge per distinct triangle side.
pub fn read_stl_wire(input: impl Read) -> Result<(Vec<Vec3>, Vec<Edge>), StlError> {
    let (verts, faces) = read_stl(input, Color3::BLACK)?;

    let mut seen = HashSet::new();
    let mut edges = Vec::new();
    for face in &faces {
        for (i, &a) in face.verts.iter().enumerate() {
            let b = face.verts[(i + 1) % face.verts.len()];
            if seen.insert((a.min(b), a.max(b))) {
                edges.push(Edge::new(a, b));
            }
        }
    }
    Ok((verts, edges))
}

fn read_vec3(data: &[u8]) -> Vec3 {
    let mut els = [0.0; 3];
    for (i, el) in els.iter_mut().enumerate() {
        let bytes = data[4 * i..4 * i + 4].try_into().unwrap();
        *el = f32::from_le_bytes(bytes);
    }
    els.into()
}

/// Rescales the stored normal to the shading length, deriving it from
/// the triangle winding if the file left it zeroed.
fn shading_normal(stored: Vec3, corners: &[Vec3; 3]) -> Option<Vec3> {
    let n = if stored.len() > 0.0 {
        stored
    } else {
        (corners[1] - corners[0]).cross(&(corners[2] - corners[0]))
    };
    (n.len() > 0.0).then(|| n.normalize() * NORMAL_LEN)
}

#[cfg(test)]
mod tests {
    use co::assert_approx_eq;
    use co::math::{rgb, vec3};

    use super::*;

    /// Encodes triangles as [normal, v0, v1, v2] records.
    fn stl_bytes(tris: &[[[f32; 3]; 4]]) -> Vec<u8> {
        let mut out = vec![0; 80];
        out.extend((tris.len() as u32).to_le_bytes());
        for tri in tris {
            for point in tri {
                for el in point {
                    out.extend(el.to_le_bytes());
                }
            }
            out.extend([0; 2]);
        }
        out
    }

    const TRI: [[f32; 3]; 4] = [
        [0.0, 0.0, 1.0],
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
    ];

    #[test]
    fn single_triangle() {
        let bytes = stl_bytes(&[TRI]);
        let (verts, faces) = read_stl(&bytes[..], rgb(7, 8, 9)).unwrap();

        assert_eq!(verts.len(), 3);
        assert_eq!(faces.len(), 1);
        assert_eq!(faces[0].verts, [0, 1, 2]);
        assert_eq!(faces[0].color, rgb(7, 8, 9));
        assert_approx_eq!(
            faces[0].normal.unwrap(),
            vec3(0.0, 0.0, NORMAL_LEN)
        );
    }

    #[test]
    fn shared_vertices_are_merged() {
        let mut second = TRI;
        second[3] = [1.0, 1.0, 0.0];
        let bytes = stl_bytes(&[TRI, second]);
        let (verts, faces) = read_stl(&bytes[..], Color3::BLACK).unwrap();

        // Two corners of the second triangle coincide with the first's.
        assert_eq!(verts.len(), 4);
        assert_eq!(faces[0].verts, [0, 1, 2]);
        assert_eq!(faces[1].verts, [0, 1, 3]);
    }

    #[test]
    fn zero_normal_is_derived_from_winding() {
        let mut tri = TRI;
        tri[0] = [0.0, 0.0, 0.0];
        let (_, faces) = read_stl(&stl_bytes(&[tri])[..], Color3::BLACK).unwrap();
        assert_approx_eq!(
            faces[0].normal.unwrap(),
            vec3(0.0, 0.0, NORMAL_LEN)
        );
    }

    #[test]
    fn degenerate_triangle_is_unshaded() {
        let tri = [
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
        ];
        let (_, faces) = read_stl(&stl_bytes(&[tri])[..], Color3::BLACK).unwrap();
        assert!(faces[0].normal.is_none());
    }

    #[test]
    fn wireframe_shares_triangle_sides() {
        let mut second = TRI;
        second[3] = [1.0, 1.0, 0.0];
        let bytes = stl_bytes(&[TRI, second]);
        let (verts, edges) = read_stl_wire(&bytes[..]).unwrap();

        assert_eq!(verts.len(), 4);
        // Two triangles sharing a side have five distinct edges.
        assert_eq!(edges.len(), 5);
    }

    #[test]
    fn empty_mesh() {
        let (verts, faces) = read_stl(&stl_bytes(&[])[..], Color3::BLACK).unwrap();
        assert!(verts.is_empty());
        assert!(faces.is_empty());
    }

    #[test]
    fn truncated_data_is_reported() {
        let mut bytes = stl_bytes(&[TRI, TRI]);
        bytes.truncate(bytes.len() - 10);
        let err = read_stl(&bytes[..], Color3::BLACK).unwrap_err();
        assert!(matches!(
            err,
            StlError::Truncated { expected: 2, found: 1 }
        ));
    }

    #[test]
    fn missing_header_is_io_error() {
        let err = read_stl(&[0_u8; 10][..], Color3::BLACK).unwrap_err();
        assert!(matches!(err, StlError::Io(_)));
    }
}
