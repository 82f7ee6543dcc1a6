use clap::{Parser, ValueEnum};
use simulator::{output::write_sweep_csv, sweep, sweep::linspace, RunConfig, SweepParam};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Parallel sweep of the z-z coupling or anisotropy",
    allow_negative_numbers = true
)]
struct Args {
    /// TOML run configuration used as the base point
    #[arg(long)]
    config: Option<PathBuf>,

    /// Parameter to vary
    #[arg(long, value_enum, default_value_t = Param::Coupling)]
    param: Param,

    /// Comma-separated list of values (overrides --start/--stop/--count)
    #[arg(long)]
    values: Option<String>,

    /// First value of the sweep
    #[arg(long, default_value_t = 0.0)]
    start: f64,

    /// Last value of the sweep
    #[arg(long, default_value_t = 2.0)]
    stop: f64,

    /// Number of sweep points
    #[arg(long, default_value_t = 21)]
    count: usize,

    /// Number of Rayon worker threads (0 = Rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Output CSV path
    #[arg(long, default_value = "coupling_sweep.csv")]
    out: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Param {
    Coupling,
    L1,
    L2,
}

impl From<Param> for SweepParam {
    fn from(p: Param) -> Self {
        match p {
            Param::Coupling => SweepParam::Coupling,
            Param::L1 => SweepParam::Anisotropy1,
            Param::L2 => SweepParam::Anisotropy2,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()?;
    }

    let base = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };

    let values = match &args.values {
        Some(list) => parse_values(list)?,
        None => linspace(args.start, args.stop, args.count),
    };
    if values.is_empty() {
        anyhow::bail!("sweep needs at least one value");
    }

    let param = SweepParam::from(args.param);
    info!(param = param.name(), points = values.len(), "starting sweep");

    let start = Instant::now();
    let rows = sweep(&base, param, &values)?;
    let elapsed = start.elapsed().as_secs_f64();

    for r in &rows {
        println!(
            "{}={:.4} z1_final={:.4} z2_final={:.4} z1_mean={:.4} z2_mean={:.4}",
            param.name(),
            r.value,
            r.z1_final,
            r.z2_final,
            r.z1_mean,
            r.z2_mean
        );
    }
    println!("Sweep of {} points took {:.3} s", rows.len(), elapsed);

    write_sweep_csv(&args.out, &rows)?;
    Ok(())
}

fn parse_values(input: &str) -> anyhow::Result<Vec<f64>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| {
            t.parse::<f64>()
                .map_err(|e| anyhow::anyhow!("invalid sweep value `{}`: {}", t, e))
        })
        .collect()
}
