use crate::relax::{cardinal_mean, Scheme};
use crate::{PlateState, Solver, SweepDescriptor};

/// Updates the snapshot and the field together in one row-major pass.
///
/// Each interior cell first copies its current value into `previous`, then is
/// recomputed from `previous`. Neighbours already visited this sweep (`i-1`
/// and `j-1`) therefore read the result of the last sweep, while neighbours
/// not yet visited (`i+1` and `j+1`) read the value from the sweep before it.
/// The traversal order is part of the numerical result.
#[derive(Copy, Clone, Debug, Default)]
pub struct HybridSolver;

impl Solver for HybridSolver {
    #[inline]
    fn sweep(&mut self, desc: SweepDescriptor) {
        let npoints = desc.params.size;
        let PlateState { current, previous } = desc.state;

        for i in 1..=npoints {
            for j in 1..=npoints {
                previous[[i, j]] = current[[i, j]];
                current[[i, j]] = cardinal_mean(
                    previous[[i - 1, j]],
                    previous[[i + 1, j]],
                    previous[[i, j - 1]],
                    previous[[i, j + 1]],
                );
            }
        }
    }

    fn scheme(&self) -> Scheme {
        Scheme::Hybrid
    }
}
