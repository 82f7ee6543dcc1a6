use crate::backend::OperatorAlgebra;
use crate::error::Result;
use crate::operators::AngularMomentum;
use serde::{Deserialize, Serialize};

/// `h · J = h_x Jx + h_y Jy + h_z Jz`
pub fn dot<O: OperatorAlgebra>(h: [f64; 3], j: &[O; 3]) -> Result<O> {
    j[0].scale_real(h[0])
        .add(&j[1].scale_real(h[1]))?
        .add(&j[2].scale_real(h[2]))
}

/// Zeeman Hamiltonian `-(h1·J1) - (h2·J2)` used to prepare the initial state.
pub fn initial_hamiltonian<O: OperatorAlgebra>(
    h1: [f64; 3],
    h2: [f64; 3],
    j1: &[O; 3],
    j2: &[O; 3],
) -> Result<O> {
    let field = dot(h1, j1)?.add(&dot(h2, j2)?)?;
    Ok(field.scale_real(-1.0))
}

/// `-(h1·J1) - (h2·J2) + L1·Jz1² + L2·Jz2² + V·Jz1·Jz2`
pub fn dynamic_hamiltonian<O: OperatorAlgebra>(
    h1: [f64; 3],
    h2: [f64; 3],
    anisotropy: [f64; 2],
    coupling: f64,
    j1: &[O; 3],
    j2: &[O; 3],
    jzz: &[O; 2],
) -> Result<O> {
    let zeeman = initial_hamiltonian(h1, h2, j1, j2)?;
    let zz = j1[2].compose(&j2[2])?;
    zeeman
        .add(&jzz[0].scale_real(anisotropy[0]))?
        .add(&jzz[1].scale_real(anisotropy[1]))?
        .add(&zz.scale_real(coupling))
}

/// Scalars of the driven Hamiltonian.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DynamicParams {
    pub h1: [f64; 3],
    pub h2: [f64; 3],
    /// Single-ion anisotropies `[L1, L2]`.
    #[serde(default)]
    pub anisotropy: [f64; 2],
    /// Bilinear z-z coupling `V`.
    #[serde(default)]
    pub coupling: f64,
}

impl DynamicParams {
    pub fn hamiltonian<O: OperatorAlgebra>(&self, ops: &AngularMomentum<O>) -> Result<O> {
        dynamic_hamiltonian(
            self.h1,
            self.h2,
            self.anisotropy,
            self.coupling,
            &ops.j1,
            &ops.j2,
            &ops.jzz,
        )
    }
}
