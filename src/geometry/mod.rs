mod geodesic;
mod icosahedron;

pub use self::geodesic::{build, subdivide};
pub use self::icosahedron::{seed, FACES as ICOSAHEDRON_FACES, VERTICES as ICOSAHEDRON_VERTICES};

use std::collections::BTreeSet;

use glam::DVec3;

/// A triangle as three indices into the vertex list, in winding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Face(pub [usize; 3]);

impl Face {
    /// The three edges of the triangle, in winding order.
    pub fn edges(&self) -> [Edge; 3] {
        let Face([v1, v2, v3]) = *self;
        [Edge::new(v1, v2), Edge::new(v2, v3), Edge::new(v3, v1)]
    }
}

/// An unordered pair of vertex indices. `Edge::new(a, b) == Edge::new(b, a)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    a: usize,
    b: usize,
}

impl Edge {
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            a: a.min(b),
            b: a.max(b),
        }
    }

    /// Endpoints, smaller index first.
    pub fn indices(&self) -> (usize, usize) {
        (self.a, self.b)
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.a == vertex || self.b == vertex
    }
}

/// Number of vertices after `level` subdivisions: 12 + 10 * (4^level - 1).
/// `None` if the count does not fit in a `usize`.
pub fn vertex_count(level: u32) -> Option<usize> {
    4usize
        .checked_pow(level)?
        .checked_mul(10)?
        .checked_add(2)
}

/// Number of faces after `level` subdivisions: 20 * 4^level.
pub fn face_count(level: u32) -> Option<usize> {
    4usize.checked_pow(level)?.checked_mul(20)
}

/// Number of unique edges after `level` subdivisions: 30 * 4^level.
pub fn edge_count(level: u32) -> Option<usize> {
    4usize.checked_pow(level)?.checked_mul(30)
}

/// A geodesic sphere mesh with its derived wireframe.
#[derive(Debug, Clone, PartialEq)]
pub struct Icosphere {
    pub level: u32,
    pub vertices: Vec<DVec3>,
    pub faces: Vec<Face>,
    pub edges: BTreeSet<Edge>,
}

impl Icosphere {
    /// Builds an icosphere subdivided `levels` times.
    pub fn with_subdivisions(levels: u32) -> Self {
        let (mut vertices, mut faces) = seed();
        for pass in 0..levels {
            log::trace!("subdivision pass {} of {}", pass + 1, levels);
            (vertices, faces) = subdivide(&vertices, &faces);
        }

        log::debug!("deriving edges from {} faces", faces.len());
        let edges = Self::derive_edges(&faces);

        Self {
            level: levels,
            vertices,
            faces,
            edges,
        }
    }

    /// Collects the unique edges of `faces`. Edges shared by adjacent faces
    /// appear once.
    pub fn derive_edges(faces: &[Face]) -> BTreeSet<Edge> {
        faces.iter().flat_map(Face::edges).collect()
    }
}
