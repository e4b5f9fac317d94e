use crate::relax::{cardinal_mean, Scheme};
use crate::{PlateState, Solver, SweepDescriptor};

/// Double-buffered Jacobi: every cell of a sweep reads the same snapshot.
#[derive(Copy, Clone, Debug, Default)]
pub struct JacobiSolver;

impl Solver for JacobiSolver {
    #[inline]
    fn sweep(&mut self, desc: SweepDescriptor) {
        let npoints = desc.params.size;
        let PlateState { current, previous } = desc.state;

        previous.assign(&*current);
        ndarray::Zip::from(&mut current.slice_mut(ndarray::s![1..=npoints, 1..=npoints]))
            .and(previous.windows((3, 3)))
            .for_each(|cur, around| {
                *cur = cardinal_mean(
                    around[[0, 1]],
                    around[[2, 1]],
                    around[[1, 0]],
                    around[[1, 2]],
                );
            });
    }

    fn scheme(&self) -> Scheme {
        Scheme::PureJacobi
    }
}
