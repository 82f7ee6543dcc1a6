use crate::error::SimError;
use crate::run::SimulationOutput;
use crate::sweep::SweepRow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

fn create(path: &Path) -> Result<BufWriter<File>, SimError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| SimError::Output {
            path: path.to_path_buf(),
            source,
        })
}

fn wrap(path: &Path) -> impl Fn(io::Error) -> SimError + '_ {
    move |source| SimError::Output {
        path: path.to_path_buf(),
        source,
    }
}

/// One row per time sample: real parts of ⟨J⟩ and the spherical angles.
pub fn write_trajectory_csv(path: &Path, out: &SimulationOutput) -> Result<(), SimError> {
    let mut w = create(path)?;
    write_trajectory(&mut w, out).map_err(wrap(path))
}

pub fn write_trajectory<W: Write>(w: &mut W, out: &SimulationOutput) -> io::Result<()> {
    writeln!(w, "t,jx1,jy1,jz1,jx2,jy2,jz2,z1,phi1,z2,phi2")?;
    let s = &out.spherical;
    for (i, t) in out.times.iter().enumerate() {
        let a = out.j1.real_at(i);
        let b = out.j2.real_at(i);
        writeln!(
            w,
            "{},{},{},{},{},{},{},{},{},{},{}",
            t, a[0], a[1], a[2], b[0], b[1], b[2], s.z1[i], s.phi1[i], s.z2[i], s.phi2[i]
        )?;
    }
    w.flush()
}

pub fn write_sweep_csv(path: &Path, rows: &[SweepRow]) -> Result<(), SimError> {
    let mut w = create(path)?;
    write_sweep(&mut w, rows).map_err(wrap(path))
}

pub fn write_sweep<W: Write>(w: &mut W, rows: &[SweepRow]) -> io::Result<()> {
    writeln!(w, "value,z1_final,z2_final,z1_mean,z2_mean")?;
    for r in rows {
        writeln!(
            w,
            "{},{},{},{},{}",
            r.value, r.z1_final, r.z2_final, r.z1_mean, r.z2_mean
        )?;
    }
    w.flush()
}
