//! Relaxation update schemes.

mod hybrid_solver;
mod jacobi_solver;

pub use hybrid_solver::HybridSolver;
pub use jacobi_solver::JacobiSolver;

use serde::Deserialize;

/// Selects how the interior cells are updated during a sweep.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Scheme {
    /// Refreshes the snapshot cell by cell within the sweep, so cells already
    /// visited are read one sweep newer than cells not yet visited.
    #[default]
    Hybrid,
    /// Snapshots the whole grid before the sweep.
    PureJacobi,
}

/// The five-point average of the four cardinal neighbours.
#[inline]
pub(crate) fn cardinal_mean(up: f64, down: f64, left: f64, right: f64) -> f64 {
    0.25 * (up + down + left + right)
}
