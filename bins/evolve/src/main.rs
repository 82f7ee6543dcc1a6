use anyhow::{bail, Context};
use clap::Parser;
use simulator::{output::write_trajectory_csv, simulate, RunConfig};
use spins::Spin;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Coupled two-spin dynamics: prepare along (z, phi), evolve, record (z, phi)(t)
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, allow_negative_numbers = true)]
struct Args {
    /// TOML run configuration (flags below override it)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Spin magnitude of subsystem 1, e.g. 1/2
    #[arg(long)]
    spin1: Option<Spin>,

    /// Spin magnitude of subsystem 2
    #[arg(long)]
    spin2: Option<Spin>,

    /// Sites per subsystem
    #[arg(long)]
    sites: Option<usize>,

    /// Use Pauli matrices instead of spin operators (spin 1/2 only)
    #[arg(long)]
    pauli: bool,

    /// Initial z of subsystem 1
    #[arg(long)]
    z1: Option<f64>,

    /// Initial azimuth of subsystem 1
    #[arg(long)]
    phi1: Option<f64>,

    /// Initial z of subsystem 2
    #[arg(long)]
    z2: Option<f64>,

    /// Initial azimuth of subsystem 2
    #[arg(long)]
    phi2: Option<f64>,

    /// z-z coupling V
    #[arg(long)]
    coupling: Option<f64>,

    /// Anisotropy L1
    #[arg(long)]
    l1: Option<f64>,

    /// Anisotropy L2
    #[arg(long)]
    l2: Option<f64>,

    /// Final time
    #[arg(long)]
    t_max: Option<f64>,

    /// Number of time samples
    #[arg(long)]
    steps: Option<usize>,

    /// Output CSV path
    #[arg(long, default_value = "trajectory.csv")]
    out: PathBuf,
}

impl Args {
    fn into_config(self) -> anyhow::Result<(RunConfig, PathBuf)> {
        let mut cfg = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };

        if let Some(s) = self.spin1 {
            cfg.spin1 = s;
        }
        if let Some(s) = self.spin2 {
            cfg.spin2 = s;
        }
        if let Some(n) = self.sites {
            cfg.sites = n;
        }
        cfg.pauli |= self.pauli;
        if let Some(z) = self.z1 {
            cfg.initial.z[0] = z;
        }
        if let Some(p) = self.phi1 {
            cfg.initial.phi[0] = p;
        }
        if let Some(z) = self.z2 {
            cfg.initial.z[1] = z;
        }
        if let Some(p) = self.phi2 {
            cfg.initial.phi[1] = p;
        }
        if let Some(v) = self.coupling {
            cfg.dynamic.coupling = v;
        }
        if let Some(l) = self.l1 {
            cfg.dynamic.anisotropy[0] = l;
        }
        if let Some(l) = self.l2 {
            cfg.dynamic.anisotropy[1] = l;
        }
        if let Some(t) = self.t_max {
            cfg.times.stop = t;
        }
        if let Some(n) = self.steps {
            cfg.times.steps = n;
        }

        for z in cfg.initial.z {
            if !(-1.0..=1.0).contains(&z) {
                bail!("initial z must lie in [-1, 1], got {}", z);
            }
        }

        Ok((cfg, self.out))
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let (cfg, out_path) = Args::parse().into_config()?;
    info!(
        spin1 = %cfg.spin1,
        spin2 = %cfg.spin2,
        sites = cfg.sites,
        coupling = cfg.dynamic.coupling,
        "starting run"
    );

    let out = simulate(&cfg).context("simulation failed")?;
    write_trajectory_csv(&out_path, &out)?;

    let s = &out.spherical;
    let last = s.len() - 1;
    println!("E(H_dyn) = {:.6}", out.energy);
    println!(
        "t = {:.3}: z1 = {:.4}, phi1 = {:.4}, z2 = {:.4}, phi2 = {:.4}",
        out.times[last], s.z1[last], s.phi1[last], s.z2[last], s.phi2[last]
    );
    println!("Wrote {} samples to {}", s.len(), out_path.display());

    Ok(())
}
