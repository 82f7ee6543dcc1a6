use linalg::{DenseOperator, C64};
use spins::{
    coords::{spherical_to_cartesian, to_cartesian},
    hamiltonian::{initial_hamiltonian, DynamicParams},
    observables::{extract_observables, to_spherical_trajectory},
    operators::build_angular_momentum_operators,
    times::TimeGrid,
    ExactDiagonalization, SolverBackend, Spin, SpinError,
};

#[test]
fn ground_state_aligns_with_initial_field() {
    let backend = ExactDiagonalization::new();
    let (h1, h2) = spherical_to_cartesian(0.35, 2.2, -0.6, -1.0);
    let ops = build_angular_momentum_operators(&backend, 1, Spin::HALF, Spin::ONE, h1, h2).unwrap();
    let h_ini = initial_hamiltonian(h1, h2, &ops.j1, &ops.j2).unwrap();
    let psi0 = backend.ground_state(&h_ini).unwrap();

    let obs =
        extract_observables(&backend, &psi0, &h_ini, &[0.0], &ops.j1, &ops.j2, false).unwrap();
    let sph = to_spherical_trajectory(&obs.j1, &obs.j2).unwrap();

    assert!((sph.z1[0] - 0.35).abs() < 1e-9, "z1 = {}", sph.z1[0]);
    assert!((sph.phi1[0] - 2.2).abs() < 1e-9, "phi1 = {}", sph.phi1[0]);
    assert!((sph.z2[0] + 0.6).abs() < 1e-9, "z2 = {}", sph.z2[0]);
    assert!((sph.phi2[0] + 1.0).abs() < 1e-9, "phi2 = {}", sph.phi2[0]);

    // Fully polarized: |⟨J⟩| = S for unit fields.
    let jz2 = obs.j2.z[0].re;
    let jx2 = obs.j2.x[0].re;
    let jy2 = obs.j2.y[0].re;
    assert!(((jx2 * jx2 + jy2 * jy2 + jz2 * jz2).sqrt() - 1.0).abs() < 1e-9);
}

#[test]
fn z_field_precesses_azimuth_at_constant_height() {
    let backend = ExactDiagonalization::new();
    let h1 = to_cartesian(0.0, 0.0);
    let h2 = to_cartesian(0.5, 0.0);
    let ops =
        build_angular_momentum_operators(&backend, 1, Spin::HALF, Spin::HALF, h1, h2).unwrap();
    let psi0 = backend
        .ground_state(&initial_hamiltonian(h1, h2, &ops.j1, &ops.j2).unwrap())
        .unwrap();

    let params = DynamicParams {
        h1: [0.0, 0.0, 1.0],
        h2: [0.0, 0.0, 1.0],
        anisotropy: [0.0, 0.0],
        coupling: 0.0,
    };
    let h_dyn = params.hamiltonian(&ops).unwrap();
    let times = TimeGrid::new(0.0, 2.0, 21).samples().unwrap();

    let obs =
        extract_observables(&backend, &psi0, &h_dyn, &times, &ops.j1, &ops.j2, false).unwrap();
    let sph = to_spherical_trajectory(&obs.j1, &obs.j2).unwrap();

    for (i, &t) in times.iter().enumerate() {
        assert!(sph.z1[i].abs() < 1e-9);
        assert!((sph.z2[i] - 0.5).abs() < 1e-9);
        assert!((sph.phi1[i] - t).abs() < 1e-9, "t = {}, phi1 = {}", t, sph.phi1[i]);
        assert!((sph.phi2[i] - t).abs() < 1e-9, "t = {}, phi2 = {}", t, sph.phi2[i]);
    }
}

#[test]
fn coupled_evolution_conserves_energy_and_z() {
    let backend = ExactDiagonalization::new();
    let (h1, h2) = spherical_to_cartesian(0.2, 0.4, -0.3, 1.7);
    let three_halves = Spin::from_halves(3).unwrap();
    let ops =
        build_angular_momentum_operators(&backend, 1, Spin::ONE, three_halves, h1, h2).unwrap();
    let psi0 = backend
        .ground_state(&initial_hamiltonian(h1, h2, &ops.j1, &ops.j2).unwrap())
        .unwrap();

    let params = DynamicParams {
        h1: [0.0, 0.0, 0.8],
        h2: [0.0, 0.0, -0.4],
        anisotropy: [0.3, -0.2],
        coupling: 0.7,
    };
    let h_dyn = params.hamiltonian(&ops).unwrap();
    let times = TimeGrid::new(0.0, 5.0, 26).samples().unwrap();

    let m = backend
        .evolve_and_measure(
            &psi0,
            &h_dyn,
            &times,
            &[("H", &h_dyn), ("Jz_1", &ops.j1[2]), ("Jz_2", &ops.j2[2])],
            true,
        )
        .unwrap();

    let energy = m.trajectory("H").unwrap();
    let jz1 = m.trajectory("Jz_1").unwrap();
    let jz2 = m.trajectory("Jz_2").unwrap();
    for i in 0..times.len() {
        assert!((energy[i] - energy[0]).norm() < 1e-9);
        assert!((jz1[i] - jz1[0]).norm() < 1e-9);
        assert!((jz2[i] - jz2[0]).norm() < 1e-9);
    }

    let states = m.states.unwrap();
    assert_eq!(states.len(), times.len());
    for s in &states {
        assert!((s.norm() - 1.0).abs() < 1e-9);
    }
}

#[test]
fn transverse_coupling_moves_z() {
    let backend = ExactDiagonalization::new();
    let h1 = to_cartesian(0.9, 0.0);
    let h2 = to_cartesian(0.9, 0.0);
    let ops =
        build_angular_momentum_operators(&backend, 1, Spin::HALF, Spin::HALF, h1, h2).unwrap();
    let psi0 = backend
        .ground_state(&initial_hamiltonian(h1, h2, &ops.j1, &ops.j2).unwrap())
        .unwrap();

    let params = DynamicParams {
        h1: [1.0, 0.0, 0.0],
        h2: [0.0, 0.0, 0.0],
        anisotropy: [0.0, 0.0],
        coupling: 0.0,
    };
    let h_dyn = params.hamiltonian(&ops).unwrap();
    let times = TimeGrid::new(0.0, 1.0, 11).samples().unwrap();
    let obs =
        extract_observables(&backend, &psi0, &h_dyn, &times, &ops.j1, &ops.j2, false).unwrap();
    let sph = to_spherical_trajectory(&obs.j1, &obs.j2).unwrap();

    assert!((sph.z1[0] - 0.9).abs() < 1e-9);
    assert!((sph.z1[10] - sph.z1[0]).abs() > 1e-3);
    // Subsystem 2 feels no field and no coupling.
    assert!((sph.z2[10] - 0.9).abs() < 1e-9);
}

#[test]
fn evolution_input_errors() {
    let backend = ExactDiagonalization::new();
    let ops = build_angular_momentum_operators(
        &backend,
        1,
        Spin::HALF,
        Spin::HALF,
        [0.0, 0.0, 1.0],
        [0.0, 0.0, 1.0],
    )
    .unwrap();
    let h = initial_hamiltonian([0.0, 0.0, 1.0], [0.0, 0.0, 1.0], &ops.j1, &ops.j2).unwrap();
    let psi0 = backend.ground_state(&h).unwrap();

    let err = extract_observables(&backend, &psi0, &h, &[], &ops.j1, &ops.j2, false).unwrap_err();
    assert_eq!(err, SpinError::EmptyTimeGrid);

    let m = backend.evolve_and_measure(&psi0, &h, &[0.0], &[], false).unwrap();
    assert!(matches!(m.trajectory("Jx_1"), Err(SpinError::UnknownObservable(_))));
    assert!(m.states.is_none());

    let small = DenseOperator::identity(2);
    assert!(matches!(
        backend.evolve_and_measure(&psi0, &small, &[0.0], &[], false),
        Err(SpinError::DimensionMismatch { .. })
    ));

    // A bare raising operator is not a valid generator.
    let raising = ops.j1[0].add(&ops.j1[1].scale(C64::new(0.0, 1.0)));
    assert!(matches!(backend.ground_state(&raising), Err(SpinError::NotHermitian(_))));
}

#[test]
fn repeated_observable_names_are_rejected() {
    let backend = ExactDiagonalization::new();
    let ops = build_angular_momentum_operators(
        &backend,
        1,
        Spin::HALF,
        Spin::HALF,
        [0.0, 0.0, 1.0],
        [1.0, 0.0, 0.0],
    )
    .unwrap();
    let h = initial_hamiltonian([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], &ops.j1, &ops.j2).unwrap();
    let psi0 = backend.ground_state(&h).unwrap();

    let err = backend
        .evolve_and_measure(
            &psi0,
            &h,
            &[0.0, 1.0, 2.0],
            &[("Jz_1", &ops.j1[2]), ("Jx_2", &ops.j2[0]), ("Jz_1", &ops.j1[2])],
            false,
        )
        .unwrap_err();
    assert_eq!(err, SpinError::DuplicateObservable("Jz_1".to_string()));

    // Distinct names keep one sample per time each.
    let m = backend
        .evolve_and_measure(
            &psi0,
            &h,
            &[0.0, 1.0, 2.0],
            &[("Jz_1", &ops.j1[2]), ("Jx_2", &ops.j2[0])],
            false,
        )
        .unwrap();
    assert_eq!(m.trajectory("Jz_1").unwrap().len(), 3);
    assert_eq!(m.trajectory("Jx_2").unwrap().len(), 3);
}

#[test]
fn hermiticity_tolerance_scales_with_magnitude() {
    let backend = ExactDiagonalization::new();
    let big = |skew: f64| {
        let mut h = DenseOperator::diagonal(&[1.0e6, -1.0e6]);
        h.set(0, 1, C64::new(1.0e5 + skew, 0.0));
        h.set(1, 0, C64::new(1.0e5, 0.0));
        h
    };

    // Rounding-level asymmetry on a large operator is accepted.
    let g = backend.ground_state(&big(2.0e-7)).unwrap();
    assert!((g.norm() - 1.0).abs() < 1e-12);

    // A genuine asymmetry is still rejected.
    assert!(matches!(backend.ground_state(&big(1.0)), Err(SpinError::NotHermitian(_))));

    // Small operators keep the absolute floor.
    let mut small = DenseOperator::diagonal(&[1.0, -1.0]);
    small.set(0, 1, C64::new(1.0e-6, 0.0));
    assert!(matches!(backend.ground_state(&small), Err(SpinError::NotHermitian(_))));
}
