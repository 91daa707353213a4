//! fk-solver: section analyses on a meshed fiber section.
//!
//! - `bracket`: safeguarded secant root finder used for axial equilibrium
//! - `moment_curvature`: curvature sweep under a constant axial load
//! - `pm_interaction`: ACI 318-19 axial-moment interaction envelope
//!
//! Every step or plane is a pure function of the section and its inputs, so
//! both drivers evaluate them in parallel and collect in canonical order.

pub mod bracket;
pub mod error;
pub mod moment_curvature;
pub mod pm_interaction;

pub use bracket::{BracketConfig, BracketResult, Scan, scan_sign_change, solve_bracketed};
pub use error::{SolverError, SolverResult};
pub use moment_curvature::{
    ConvergenceWarning, MomentCurvatureConfig, MomentCurvatureResult, MomentCurvatureSolver,
};
pub use pm_interaction::{
    PmInteractionResult, PmInteractionSolver, PmParams, PmPointKind, TransverseReinforcement,
    beta1,
};
