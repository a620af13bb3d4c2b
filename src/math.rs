use glam::DVec3;

/// Projects `v` onto the unit sphere.
pub fn to_unit_sphere(v: DVec3) -> DVec3 {
    v / v.length()
}

pub fn normalize_all(vertices: &[DVec3]) -> Vec<DVec3> {
    vertices.iter().copied().map(to_unit_sphere).collect()
}

pub fn midpoint(a: DVec3, b: DVec3) -> DVec3 {
    (a + b) / 2.0
}
