//! Catalog coordinate geometry.

/// Cartesian position from catalog angles (degrees) and radial distance.
///
/// This is the catalog's fixed convention: ascension is measured from the
/// z axis, declination sweeps the x/y plane. The result is a pure
/// function of its three inputs.
pub fn position(ascension_deg: f64, declination_deg: f64, distance: f64) -> [f64; 3] {
    let ra = ascension_deg.to_radians();
    let dec = declination_deg.to_radians();
    [
        ra.sin() * dec.cos() * distance,
        ra.sin() * dec.sin() * distance,
        ra.cos() * distance,
    ]
}

/// Straight-line 3D distance between two positions.
pub fn distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}
