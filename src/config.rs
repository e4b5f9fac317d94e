//! TOML run configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::relax::Scheme;
use crate::{Convergence, Error};

/// Settings for a single plate run.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Plate temperature, which also sets the plate size. Prompted for when absent.
    #[serde(default)]
    pub temperature: Option<usize>,
    #[serde(default = "default_max_iter")]
    pub max_iter: usize,
    #[serde(default)]
    pub scheme: Scheme,
    /// Stop once no cell moves by more than this; exact equality when absent.
    #[serde(default)]
    pub tolerance: Option<f64>,
    /// Where to write the rendered plot.
    #[serde(default = "default_svg")]
    pub svg: PathBuf,
    #[serde(default)]
    pub print_state: bool,
    #[serde(default)]
    pub verbose: bool,
}

fn default_max_iter() -> usize {
    3000
}

fn default_svg() -> PathBuf {
    PathBuf::from("heatplate.svg")
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            temperature: None,
            max_iter: default_max_iter(),
            scheme: Scheme::default(),
            tolerance: None,
            svg: default_svg(),
            print_state: false,
            verbose: false,
        }
    }
}

impl RunConfig {
    /// Reads a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, Error> {
        Ok(toml::from_str(text)?)
    }

    #[inline]
    pub fn convergence(&self) -> Convergence {
        self.tolerance.map_or(Convergence::Exact, Convergence::Tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = RunConfig::from_toml("").unwrap();

        assert_eq!(config, RunConfig::default());
        assert_eq!(config.max_iter, 3000);
        assert_eq!(config.scheme, Scheme::Hybrid);
        assert_eq!(config.convergence(), Convergence::Exact);
        assert_eq!(config.svg, PathBuf::from("heatplate.svg"));
    }

    #[test]
    fn reads_every_field() {
        let config = RunConfig::from_toml(
            r#"
            temperature = 25
            max_iter = 500
            scheme = "pure-jacobi"
            tolerance = 1e-9
            svg = "out/plate.svg"
            print_state = true
            verbose = true
            "#,
        )
        .unwrap();

        assert_eq!(config.temperature, Some(25));
        assert_eq!(config.max_iter, 500);
        assert_eq!(config.scheme, Scheme::PureJacobi);
        assert_eq!(config.convergence(), Convergence::Tolerance(1e-9));
        assert_eq!(config.svg, PathBuf::from("out/plate.svg"));
        assert!(config.print_state);
        assert!(config.verbose);
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(matches!(
            RunConfig::from_toml("temprature = 3"),
            Err(Error::Config(_))
        ));
    }
}
