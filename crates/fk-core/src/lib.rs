//! fk-core: stable foundation for fiberkit.
//!
//! Contains:
//! - numeric (Real + finiteness check)
//! - sweep (linear / logarithmic point generation)
//! - units (unit system used for code-formula defaults)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod sweep;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{FkError, FkResult};
pub use numeric::*;
pub use sweep::{SweepDefinition, SweepType};
pub use units::UnitSystem;
