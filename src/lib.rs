//! Geodesic sphere ("icosphere") generation.
//!
//! Starts from a regular icosahedron and repeatedly splits every triangle
//! into four, projecting the new vertices onto the unit sphere. Vertices
//! created on a shared edge are reused by both adjacent faces, so the mesh
//! stays watertight. The unique edge set is derived from the final faces for
//! wireframe drawing.
//!
//! ```
//! let sphere = icosphere::build(2).unwrap();
//! assert_eq!(sphere.vertices.len(), 162);
//! assert_eq!(sphere.faces.len(), 320);
//! assert_eq!(sphere.edges.len(), 480);
//! ```

mod error;
pub mod geometry;
pub mod math;
pub mod model;
mod settings;

pub use crate::{
    error::IcosphereError,
    geometry::{build, Edge, Face, Icosphere},
    settings::{Settings, MAX_SUBDIVISIONS},
};
