use crate::backend::{OperatorAlgebra, SolverBackend};
use crate::error::Result;
use crate::field::{Axis, FieldComponents};
use crate::opstr::Subsystem;
use crate::spin::Spin;

/// Angular-momentum operators of both subsystems over one tensor basis.
#[derive(Clone, Debug)]
pub struct AngularMomentum<O> {
    /// `[Jx_1, Jy_1, Jz_1]`
    pub j1: [O; 3],
    /// `[Jx_2, Jy_2, Jz_2]`
    pub j2: [O; 3],
    /// `[Jz_1², Jz_2²]`
    pub jzz: [O; 2],
}

fn axis_operators<B: SolverBackend>(
    backend: &B,
    basis: &B::Basis,
    field: [f64; 3],
    sub: Subsystem,
) -> Result<[B::Operator; 3]> {
    let build = |axis: Axis| {
        let terms = FieldComponents::along(field, axis).terms(sub);
        backend.build_operator(&terms, basis)
    };
    Ok([build(Axis::X)?, build(Axis::Y)?, build(Axis::Z)?])
}

/// Builds `J1`, `J2` and the squared z operators.
///
/// Every operator is scaled by the magnitude of its subsystem's field.
pub fn build_angular_momentum_operators<B: SolverBackend>(
    backend: &B,
    sites: usize,
    spin1: Spin,
    spin2: Spin,
    field1: [f64; 3],
    field2: [f64; 3],
) -> Result<AngularMomentum<B::Operator>> {
    let basis = backend.build_basis(sites, spin1, spin2)?;

    let j1 = axis_operators(backend, &basis, field1, Subsystem::One)?;
    let j2 = axis_operators(backend, &basis, field2, Subsystem::Two)?;
    let jzz = [j1[2].compose(&j1[2])?, j2[2].compose(&j2[2])?];

    Ok(AngularMomentum { j1, j2, jzz })
}
