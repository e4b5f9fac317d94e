//! A framework for modelling steady-state heat distribution on a 2D square plate.
//!
//! The plate is discretised into an `(N+2) x (N+2)` grid whose outer ring of halo
//! cells holds the boundary condition: the left edge is kept at a constant
//! temperature, every other edge at zero. Interior cells are relaxed sweep by
//! sweep until two consecutive states agree.

mod plate;

pub mod config;
pub mod input;
pub mod prelude;
pub mod relax;
pub mod render;
pub mod report;

pub use plate::{
    Convergence, HeatPlate, PlateDescriptor, PlateParameters, PlateState, RunDescriptor,
};

/// Represents an error in the simulation.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Plate size must be a positive integer (got {0})")]
    InvalidDimension(i64),
    #[error("Plate temperature must be a finite, non-negative number (got {0})")]
    InvalidTemperature(f64),
    #[error("Iteration budget must be a positive integer (got {0})")]
    InvalidIterationBudget(usize),
    #[error("Convergence tolerance must be a finite, non-negative number (got {0})")]
    InvalidTolerance(f64),
    #[error("Could not parse {input:?} as an integer temperature")]
    InvalidInput {
        input: String,
    },
    #[error("Init {grid_name} grid does not have expected shape \
        ( {grid_name} grid shape: {input_shape:?}, \
        expected shape: {expected_shape:?} )")]
    BadInit {
        grid_name: String,
        input_shape: (usize, usize),
        expected_shape: (usize, usize),
    },
    #[error("Init {grid_name} grid holds {value} at [{row},{col}], \
        which breaks the plate's boundary conditions")]
    BadInitValue {
        grid_name: String,
        row: usize,
        col: usize,
        value: f64,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] toml::de::Error),
}

/// Performs the relaxation sweeps of a plate.
pub trait Solver {
    /// Updates every interior cell of the plate once.
    fn sweep(&mut self, desc: SweepDescriptor);

    /// The update scheme this solver implements.
    fn scheme(&self) -> relax::Scheme;
}

/// Describes the state a `Solver` should sweep over.
pub struct SweepDescriptor<'a> {
    pub state: &'a mut PlateState,
    pub params: PlateParameters,
}
