//! Sweep point generation.
//!
//! Supports parametric sweeps across curvature, neutral-axis depth, and other
//! analysis parameters.

use crate::{FkError, Real};
use std::fmt;

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SweepType {
    /// Uniformly spaced points
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

/// Definition of a single parameter sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepDefinition {
    pub start: Real,
    pub end: Real,
    /// Number of points to generate
    pub num_points: usize,
    /// Spacing type
    pub sweep_type: SweepType,
}

impl SweepDefinition {
    pub fn new(
        start: Real,
        end: Real,
        num_points: usize,
        sweep_type: SweepType,
    ) -> Result<Self, FkError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(FkError::InvalidArg {
                what: "sweep bounds must be finite",
            });
        }
        if num_points < 2 {
            return Err(FkError::InvalidArg {
                what: "sweep must have at least 2 points",
            });
        }
        if (start - end).abs() < 1e-300 {
            return Err(FkError::InvalidArg {
                what: "sweep start and end must differ",
            });
        }
        if sweep_type == SweepType::Logarithmic && (start <= 0.0 || end <= 0.0) {
            return Err(FkError::InvalidArg {
                what: "logarithmic sweep bounds must be positive",
            });
        }

        Ok(Self {
            start,
            end,
            num_points,
            sweep_type,
        })
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<Real> {
        match self.sweep_type {
            SweepType::Linear => self.generate_linear(),
            SweepType::Logarithmic => self.generate_logarithmic(),
        }
    }

    fn generate_linear(&self) -> Vec<Real> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        let delta = (self.end - self.start) / (self.num_points - 1) as Real;
        let mut points: Vec<Real> = (0..self.num_points)
            .map(|i| self.start + i as Real * delta)
            .collect();

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end;
        points
    }

    fn generate_logarithmic(&self) -> Vec<Real> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        if self.start <= 0.0 || self.end <= 0.0 {
            return self.generate_linear();
        }

        let log_start = self.start.ln();
        let log_delta = (self.end.ln() - log_start) / (self.num_points - 1) as Real;
        let mut points: Vec<Real> = (0..self.num_points)
            .map(|i| (log_start + i as Real * log_delta).exp())
            .collect();

        // Ensure exact endpoints
        points[0] = self.start;
        points[self.num_points - 1] = self.end;
        points
    }
}

impl fmt::Display for SweepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep from {} to {} ({} points, {})",
            self.start, self.end, self.num_points, self.sweep_type
        )
    }
}
