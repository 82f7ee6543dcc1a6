//! Conversions between a spin direction `(z, phi)` and a Cartesian vector.
//!
//! `z` is the projection on the quantization axis, `phi` the azimuth. Inputs
//! are not validated: `|z| > 1` or a zero vector produce NaN components.

/// `(sqrt(1 - z²)·cos φ, sqrt(1 - z²)·sin φ, z)`
pub fn to_cartesian(z: f64, phi: f64) -> [f64; 3] {
    let r = (1.0 - z * z).sqrt();
    [r * phi.cos(), r * phi.sin(), z]
}

/// `(v_z / |v|, atan2(v_y, v_x))`
pub fn to_spherical(v: [f64; 3]) -> (f64, f64) {
    (v[2] / norm(v), v[1].atan2(v[0]))
}

pub fn norm(v: [f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

pub fn spherical_to_cartesian(z1: f64, phi1: f64, z2: f64, phi2: f64) -> ([f64; 3], [f64; 3]) {
    (to_cartesian(z1, phi1), to_cartesian(z2, phi2))
}

/// Returns `([z1, z2], [phi1, phi2])`.
pub fn cartesian_to_spherical(v1: [f64; 3], v2: [f64; 3]) -> ([f64; 2], [f64; 2]) {
    let (z1, phi1) = to_spherical(v1);
    let (z2, phi2) = to_spherical(v2);
    ([z1, z2], [phi1, phi2])
}
