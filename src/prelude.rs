//! Includes commonly used library components.

pub use crate::{
    Convergence,
    HeatPlate,
    PlateDescriptor,
    PlateParameters,
    PlateState,
    RunDescriptor,
    Solver,
    SweepDescriptor,
};
pub use crate::relax::{HybridSolver, JacobiSolver, Scheme};
pub use crate::render::Renderer;
