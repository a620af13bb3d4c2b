use glam::DVec3;
use once_cell::sync::Lazy;

use crate::{geometry::Face, math};

fn vertices() -> [DVec3; 12] {
    // Golden ratio
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;

    [
        DVec3::new(-1.0, phi, 0.0),
        DVec3::new(1.0, phi, 0.0),
        DVec3::new(-1.0, -phi, 0.0),
        DVec3::new(1.0, -phi, 0.0),
        DVec3::new(0.0, -1.0, phi),
        DVec3::new(0.0, 1.0, phi),
        DVec3::new(0.0, -1.0, -phi),
        DVec3::new(0.0, 1.0, -phi),
        DVec3::new(phi, 0.0, -1.0),
        DVec3::new(phi, 0.0, 1.0),
        DVec3::new(-phi, 0.0, -1.0),
        DVec3::new(-phi, 0.0, 1.0),
    ]
}

/// Icosahedron corners before projection onto the unit sphere.
pub static VERTICES: Lazy<[DVec3; 12]> = Lazy::new(vertices);

#[rustfmt::skip]
pub const FACES: [Face; 20] = [
    Face([0, 11, 5]),
    Face([0, 5, 1]),
    Face([0, 1, 7]),
    Face([0, 7, 10]),
    Face([0, 10, 11]),

    Face([1, 5, 9]),
    Face([5, 11, 4]),
    Face([11, 10, 2]),
    Face([10, 7, 6]),
    Face([7, 1, 8]),

    Face([3, 9, 4]),
    Face([3, 4, 2]),
    Face([3, 2, 6]),
    Face([3, 6, 8]),
    Face([3, 8, 9]),

    Face([4, 9, 5]),
    Face([2, 4, 11]),
    Face([6, 2, 10]),
    Face([8, 6, 7]),
    Face([9, 8, 1]),
];

/// The unsubdivided seed mesh, already normalized.
pub fn seed() -> (Vec<DVec3>, Vec<Face>) {
    (math::normalize_all(&*VERTICES), FACES.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_corner_has_five_neighbours() {
        let edges = crate::geometry::Icosphere::derive_edges(&FACES);
        for v in 0..12 {
            let degree = edges.iter().filter(|e| e.contains(v)).count();
            assert_eq!(degree, 5, "vertex {}", v);
        }
    }

    #[test]
    fn exported_tables_match_seed() {
        use crate::geometry::{ICOSAHEDRON_FACES, ICOSAHEDRON_VERTICES};

        let (vertices, faces) = seed();
        assert_eq!(faces, ICOSAHEDRON_FACES.to_vec());
        for (unit, corner) in vertices.iter().zip(ICOSAHEDRON_VERTICES.iter()) {
            assert_eq!(*unit, math::to_unit_sphere(*corner));
        }
    }

    #[test]
    fn seed_edges_have_equal_length() {
        let (vertices, faces) = seed();
        let expected = {
            let Face([a, b, _]) = faces[0];
            vertices[a].distance(vertices[b])
        };
        for Face([a, b, c]) in faces {
            for (p, q) in [(a, b), (b, c), (c, a)] {
                assert!((vertices[p].distance(vertices[q]) - expected).abs() < 1e-12);
            }
        }
    }
}
