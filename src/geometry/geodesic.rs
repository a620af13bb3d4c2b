use std::collections::HashMap;

use glam::DVec3;

use crate::{
    error::IcosphereError,
    geometry::{Edge, Face, Icosphere},
    math,
};

/// Maps an edge of the previous pass to the vertex created at its midpoint.
/// Lives for a single pass.
struct MidpointCache<'a> {
    parents: &'a [DVec3],
    added: Vec<DVec3>,
    indices: HashMap<Edge, usize>,
}

impl<'a> MidpointCache<'a> {
    fn new(parents: &'a [DVec3]) -> Self {
        Self {
            parents,
            added: Vec::new(),
            indices: HashMap::new(),
        }
    }

    fn midpoint(&mut self, v1: usize, v2: usize) -> usize {
        let Self {
            parents,
            added,
            indices,
        } = self;
        *indices.entry(Edge::new(v1, v2)).or_insert_with(|| {
            added.push(math::midpoint(parents[v1], parents[v2]));
            parents.len() + added.len() - 1
        })
    }

    fn into_vertices(self) -> Vec<DVec3> {
        let mut vertices = Vec::with_capacity(self.parents.len() + self.added.len());
        vertices.extend_from_slice(self.parents);
        vertices.extend(self.added);
        vertices
    }
}

/// Runs one subdivision pass, splitting every face into four.
///
/// Midpoints are averaged from the coordinates in `vertices` as given;
/// the whole returned vertex list is normalized once the pass is done.
pub fn subdivide(vertices: &[DVec3], faces: &[Face]) -> (Vec<DVec3>, Vec<Face>) {
    let mut cache = MidpointCache::new(vertices);
    let mut new_faces = Vec::with_capacity(faces.len() * 4);

    for &Face([v1, v2, v3]) in faces {
        let a = cache.midpoint(v1, v2);
        let b = cache.midpoint(v2, v3);
        let c = cache.midpoint(v3, v1);
        new_faces.extend([
            Face([v1, a, c]),
            Face([v2, b, a]),
            Face([v3, c, b]),
            Face([a, b, c]),
        ]);
    }

    let new_vertices = math::normalize_all(&cache.into_vertices());
    log::trace!(
        "pass produced {} vertices, {} faces",
        new_vertices.len(),
        new_faces.len()
    );
    (new_vertices, new_faces)
}

/// Builds an icosphere subdivided `level` times.
///
/// Fails with [`IcosphereError::InvalidArgument`] if `level` is negative.
/// There is no upper bound; face count grows as `20 * 4^level`, so callers
/// that take the level from user input should clamp it first (see
/// [`Settings`](crate::Settings)).
pub fn build(level: i64) -> Result<Icosphere, IcosphereError> {
    let levels = u32::try_from(level).map_err(|_| IcosphereError::InvalidArgument(level))?;
    log::debug!("building icosphere with {} subdivisions", levels);
    Ok(Icosphere::with_subdivisions(levels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::seed;

    #[test]
    fn shared_edges_reuse_midpoint() {
        let vertices = [DVec3::X, DVec3::Y, DVec3::Z, -DVec3::Z];
        let faces = [Face([0, 1, 2]), Face([1, 0, 3])];
        let (vertices, faces) = subdivide(&vertices, &faces);
        // 4 corners + 5 unique edge midpoints
        assert_eq!(vertices.len(), 9);
        assert_eq!(faces.len(), 8);
        assert_eq!(faces[0], Face([0, 4, 6]));
        assert_eq!(faces[4], Face([1, 4, 8]));
    }

    #[test]
    fn child_face_order() {
        let (vertices, faces) = seed();
        let (_, children) = subdivide(&vertices, &faces[..1]);
        let (a, b, c) = (12, 13, 14);
        assert_eq!(
            children,
            vec![
                Face([0, a, c]),
                Face([11, b, a]),
                Face([5, c, b]),
                Face([a, b, c]),
            ]
        );
    }

    #[test]
    fn midpoints_use_pass_start_coordinates() {
        let (vertices, faces) = seed();
        let (subdivided, _) = subdivide(&vertices, &faces);
        let expected = math::to_unit_sphere(math::midpoint(vertices[0], vertices[11]));
        assert_eq!(subdivided[12], expected);
    }

    #[test]
    fn negative_level_rejected() {
        assert_eq!(build(-1), Err(IcosphereError::InvalidArgument(-1)));
        assert_eq!(build(i64::MIN), Err(IcosphereError::InvalidArgument(i64::MIN)));
    }
}
