//! Flat, GPU-ready buffers built from an [`Icosphere`].

use bytemuck::{Pod, Zeroable};
use glam::{DVec3, Vec3};

use crate::{error::IcosphereError, geometry::Icosphere};

#[derive(Debug, Default, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

fn index(i: usize) -> Result<u32, IcosphereError> {
    u32::try_from(i).map_err(|_| IcosphereError::IndexOverflow(i))
}

fn positions(vertices: &[DVec3]) -> Vec<[f32; 3]> {
    vertices.iter().map(|v| v.as_vec3().into()).collect()
}

/// Wireframe: vertex positions plus one index pair per unique edge.
pub struct LineModel {
    pub positions: Vec<[f32; 3]>,
    pub lines: Vec<[u32; 2]>,
}

impl LineModel {
    pub fn new(sphere: &Icosphere) -> Result<Self, IcosphereError> {
        let lines = sphere
            .edges
            .iter()
            .map(|edge| {
                let (a, b) = edge.indices();
                Ok([index(a)?, index(b)?])
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            positions: positions(&sphere.vertices),
            lines,
        })
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.lines)
    }
}

/// Solid mesh: vertices with normals plus one index triple per face.
pub struct TriangleModel {
    pub vertices: Vec<Vertex>,
    pub tris: Vec<[u32; 3]>,
}

impl TriangleModel {
    pub fn with_computed_normals(sphere: &Icosphere) -> Result<Self, IcosphereError> {
        let mut vertex_data = vec![Vertex::default(); sphere.vertices.len()];
        for (i, &vec) in sphere.vertices.iter().enumerate() {
            vertex_data[i].position = vec.as_vec3().into();
        }

        let mut tris = Vec::with_capacity(sphere.faces.len());
        for face in &sphere.faces {
            let [i, j, k] = face.0;
            let a = sphere.vertices[i];
            let b = sphere.vertices[j];
            let c = sphere.vertices[k];
            let normal = (b - a).cross(c - a).normalize().as_vec3();
            for &v in &face.0 {
                let vertex = &mut vertex_data[v];
                vertex.normal = (Vec3::from(vertex.normal) + normal).into();
            }
            tris.push([index(i)?, index(j)?, index(k)?]);
        }
        for vertex in &mut vertex_data {
            vertex.normal = Vec3::from(vertex.normal).normalize_or_zero().into();
        }

        Ok(Self {
            vertices: vertex_data,
            tris,
        })
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.tris)
    }
}
