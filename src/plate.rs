use log::{debug, info, warn};

use crate::{Error, Solver, SweepDescriptor};

/// Plate specific parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlateParameters {
    /// The number of interior cells along each side of the plate.
    pub size: usize,
    /// The temperature held along the left edge of the plate.
    pub temperature: f64,
}

impl PlateParameters {
    /// The shape of the grid, halo cells included.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.size + 2, self.size + 2)
    }

    /// Whether `value` may sit at `index` of a grid for this plate.
    ///
    /// The left halo column holds the edge temperature, the rest of the halo
    /// holds zero and interior cells lie within `[0, T]`.
    pub fn admits(&self, (row, col): (usize, usize), value: f64) -> bool {
        let last = self.size + 1;
        if col == 0 {
            value == self.temperature
        } else if row == 0 || row == last || col == last {
            value == 0.0
        } else {
            (0.0..=self.temperature).contains(&value)
        }
    }
}

/// Describes the temperature field of the plate.
#[derive(Clone, Debug)]
pub struct PlateState {
    /// The temperatures after the last completed sweep.
    pub current: ndarray::Array2<f64>,
    /// The temperatures the last sweep read from.
    pub previous: ndarray::Array2<f64>,
}

impl PlateState {
    /// Creates the initial state: every cell at zero except the left halo column.
    pub fn new(params: PlateParameters) -> Self {
        let mut current = ndarray::Array2::<f64>::zeros(params.shape());
        current.column_mut(0).fill(params.temperature);
        let previous = current.clone();

        Self { current, previous }
    }
}

/// Describes a plate.
pub struct PlateDescriptor<S: Solver> {
    /// The `Solver` that relaxes the plate.
    pub solver: S,
    /// The parameters for the plate.
    pub params: PlateParameters,
    /// The state that the plate starts in.
    pub init_state: Option<PlateState>,
}

/// When two consecutive sweeps are considered to agree.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Convergence {
    /// Every cell is bitwise equal to its previous value.
    Exact,
    /// No cell moved by more than the given amount.
    Tolerance(f64),
}

impl Default for Convergence {
    fn default() -> Self {
        Convergence::Exact
    }
}

impl Convergence {
    /// Checks whether `state` has reached a fixed point.
    pub fn is_reached(&self, state: &PlateState) -> bool {
        match *self {
            Convergence::Exact => state.current == state.previous,
            Convergence::Tolerance(eps) => {
                let max_delta = ndarray::Zip::from(&state.current)
                    .and(&state.previous)
                    .fold(0.0_f64, |acc, &cur, &prev| acc.max((cur - prev).abs()));
                max_delta <= eps
            }
        }
    }
}

/// Describes a solve run.
#[derive(Copy, Clone, Debug)]
pub struct RunDescriptor {
    /// The maximum number of sweeps to run.
    pub max_iter: usize,
    /// How convergence is detected.
    pub convergence: Convergence,
    /// Whether or not to print progress to the console.
    pub verbose: bool,
}

impl Default for RunDescriptor {
    fn default() -> Self {
        Self {
            max_iter: 3000,
            convergence: Convergence::Exact,
            verbose: false,
        }
    }
}

/// The main `struct` of the framework.
pub struct HeatPlate<S: Solver> {
    solver: S,
    params: PlateParameters,
    state: PlateState,
    iterations: usize,
    converged: bool,
}

impl<S: Solver> HeatPlate<S> {
    /// Creates a new `HeatPlate` instance.
    #[inline]
    pub fn new(desc: PlateDescriptor<S>) -> Result<Self, Error> {
        let params = desc.params;
        if params.size == 0 {
            return Err(Error::InvalidDimension(0));
        }
        if !params.temperature.is_finite() || params.temperature < 0.0 {
            return Err(Error::InvalidTemperature(params.temperature));
        }

        let state = desc.init_state.unwrap_or_else(|| PlateState::new(params));
        let expected_shape = params.shape();
        for (grid_name, grid) in [("Current", &state.current), ("Previous", &state.previous)] {
            if grid.dim() != expected_shape {
                return Err(Error::BadInit {
                    grid_name: grid_name.to_string(),
                    input_shape: grid.dim(),
                    expected_shape,
                });
            }
            if let Some(((row, col), &value)) = grid
                .indexed_iter()
                .find(|&(index, &value)| !params.admits(index, value))
            {
                return Err(Error::BadInitValue {
                    grid_name: grid_name.to_string(),
                    row,
                    col,
                    value,
                });
            }
        }

        Ok(Self {
            solver: desc.solver,
            params,
            state,
            iterations: 0,
            converged: false,
        })
    }

    /// Runs sweeps until convergence or until `max_iter` sweeps have run.
    ///
    /// Returns the number of sweeps run by this call.
    pub fn solve(&mut self, desc: RunDescriptor) -> Result<usize, Error> {
        if desc.max_iter == 0 {
            return Err(Error::InvalidIterationBudget(desc.max_iter));
        }
        if let Convergence::Tolerance(eps) = desc.convergence {
            if !eps.is_finite() || eps < 0.0 {
                return Err(Error::InvalidTolerance(eps));
            }
        }

        debug!(
            "solving {0}x{0} plate at T = {1} with {2:?} scheme, up to {3} sweeps",
            self.params.size,
            self.params.temperature,
            self.solver.scheme(),
            desc.max_iter,
        );

        // setup output if verbose
        let bar = if desc.verbose {
            println!("max # of sweeps: {}", desc.max_iter);
            Some(indicatif::ProgressBar::new(desc.max_iter as u64))
        } else {
            None
        };

        let mut count = 0;
        self.converged = false;
        while count < desc.max_iter && !self.converged {
            self.solver.sweep(SweepDescriptor {
                state: &mut self.state,
                params: self.params,
            });
            count += 1;
            self.converged = desc.convergence.is_reached(&self.state);

            if let Some(ref bar) = bar {
                bar.inc(1)
            }
        }

        if let Some(ref bar) = bar {
            bar.finish();
        }

        self.iterations += count;
        if self.converged {
            info!("converged after {} sweeps", count);
        } else {
            warn!("reached the limit of {} sweeps without converging", desc.max_iter);
        }

        Ok(count)
    }

    /// The temperatures after the last completed sweep.
    #[inline]
    pub fn current(&self) -> ndarray::ArrayView2<f64> {
        self.state.current.view()
    }

    /// The temperatures the last sweep read from.
    #[inline]
    pub fn previous(&self) -> ndarray::ArrayView2<f64> {
        self.state.previous.view()
    }

    #[inline]
    pub fn params(&self) -> PlateParameters {
        self.params
    }

    /// Total number of sweeps run over every call to `solve`.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Whether the last call to `solve` stopped on convergence.
    #[inline]
    pub fn converged(&self) -> bool {
        self.converged
    }

    pub fn into_state(self) -> PlateState {
        self.state
    }
}
