use crate::coords::norm;
use crate::opstr::{OpTerm, Subsystem};
use linalg::C64;
use std::f64::consts::FRAC_PI_2;

/// Cartesian axis, addressed by the `(theta, phi)` that selects it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn angles(self) -> (f64, f64) {
        match self {
            Axis::X => (FRAC_PI_2, 0.0),
            Axis::Y => (FRAC_PI_2, FRAC_PI_2),
            Axis::Z => (0.0, 0.0),
        }
    }
}

/// Coefficients of `z`, `-` and `+` for one spin species.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldComponents {
    pub z: f64,
    pub minus: C64,
    pub plus: C64,
}

/// Projects the magnitude of `v` on the direction `(theta, phi)`.
///
/// Only `|v|` enters; the direction comes entirely from the angles.
pub fn decompose(v: [f64; 3], theta: f64, phi: f64) -> FieldComponents {
    let mag = norm(v);
    let z = mag * theta.cos();
    let x = mag * theta.sin() * phi.cos();
    let y = mag * theta.sin() * phi.sin();

    FieldComponents {
        z,
        minus: C64::new(x / 2.0, -y / 2.0),
        plus: C64::new(x / 2.0, y / 2.0),
    }
}

impl FieldComponents {
    pub fn along(v: [f64; 3], axis: Axis) -> Self {
        let (theta, phi) = axis.angles();
        decompose(v, theta, phi)
    }

    /// `z`, `-`, `+` terms on site 0 of the given subsystem.
    pub fn terms(&self, sub: Subsystem) -> Vec<OpTerm> {
        vec![
            OpTerm::single(sub.opstr("z"), C64::new(self.z, 0.0), vec![0]),
            OpTerm::single(sub.opstr("-"), self.minus, vec![0]),
            OpTerm::single(sub.opstr("+"), self.plus, vec![0]),
        ]
    }
}
