use crate::error::SimError;
use serde::{Deserialize, Serialize};
use spins::{coords::spherical_to_cartesian, hamiltonian::DynamicParams, times::TimeGrid, Spin};
use std::fs;
use std::path::Path;

/// Initial orientation of both subsystems as `(z, phi)` pairs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InitialOrientation {
    pub z: [f64; 2],
    pub phi: [f64; 2],
}

impl InitialOrientation {
    /// Unit field vectors pointing along the two orientations.
    pub fn fields(&self) -> ([f64; 3], [f64; 3]) {
        spherical_to_cartesian(self.z[0], self.phi[0], self.z[1], self.phi[1])
    }
}

/// One simulation run, as read from a TOML file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Sites per subsystem; fields act on site 0.
    #[serde(default = "default_sites")]
    pub sites: usize,
    pub spin1: Spin,
    pub spin2: Spin,
    /// Pauli matrices instead of spin operators (spin 1/2 only).
    #[serde(default)]
    pub pauli: bool,
    pub initial: InitialOrientation,
    pub dynamic: DynamicParams,
    pub times: TimeGrid,
}

fn default_sites() -> usize {
    1
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            sites: 1,
            spin1: Spin::HALF,
            spin2: Spin::HALF,
            pauli: false,
            initial: InitialOrientation {
                z: [0.0, 0.0],
                phi: [0.0, 0.0],
            },
            dynamic: DynamicParams {
                h1: [0.0, 0.0, 1.0],
                h2: [0.0, 0.0, 1.0],
                anisotropy: [0.0, 0.0],
                coupling: 0.0,
            },
            times: TimeGrid::new(0.0, 10.0, 201),
        }
    }
}

impl RunConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, SimError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, SimError> {
        let contents = fs::read_to_string(path).map_err(|source| SimError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::RunConfig;
    use spins::Spin;

    const EXAMPLE: &str = r#"
sites = 1
spin1 = "1/2"
spin2 = "1"

[initial]
z   = [0.5, -0.3]
phi = [0.0, 1.2]

[dynamic]
h1 = [0.0, 0.0, 1.0]
h2 = [0.0, 0.0, -1.0]
anisotropy = [0.2, 0.1]
coupling = 0.5

[times]
start = 0.0
stop = 10.0
steps = 201
"#;

    #[test]
    fn parses_full_example() {
        let cfg = RunConfig::from_toml_str(EXAMPLE).unwrap();
        assert_eq!(cfg.spin1, Spin::HALF);
        assert_eq!(cfg.spin2, Spin::ONE);
        assert!(!cfg.pauli);
        assert_eq!(cfg.initial.phi, [0.0, 1.2]);
        assert_eq!(cfg.dynamic.anisotropy, [0.2, 0.1]);
        assert_eq!(cfg.dynamic.coupling, 0.5);
        assert_eq!(cfg.times.steps, 201);
    }

    #[test]
    fn optional_keys_default() {
        let trimmed = EXAMPLE
            .replace("sites = 1\n", "")
            .replace("anisotropy = [0.2, 0.1]\n", "")
            .replace("coupling = 0.5\n", "");
        let cfg = RunConfig::from_toml_str(&trimmed).unwrap();
        assert_eq!(cfg.sites, 1);
        assert_eq!(cfg.dynamic.anisotropy, [0.0, 0.0]);
        assert_eq!(cfg.dynamic.coupling, 0.0);
    }

    #[test]
    fn rejects_bad_spin_and_unknown_keys() {
        assert!(RunConfig::from_toml_str(&EXAMPLE.replace("\"1/2\"", "\"1/3\"")).is_err());
        assert!(RunConfig::from_toml_str(&format!("seed = 3\n{}", EXAMPLE)).is_err());
    }

    #[test]
    fn serializes_back_to_the_same_config() {
        let cfg = RunConfig::default();
        let text = toml::to_string(&cfg).unwrap();
        assert_eq!(RunConfig::from_toml_str(&text).unwrap(), cfg);
    }
}
