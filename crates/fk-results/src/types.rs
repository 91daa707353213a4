//! Row types produced by the section solvers.

use crate::table::{TableRow, format_f64, format_opt, parse_bool, parse_f64, parse_opt};
use serde::{Deserialize, Serialize};

/// One converged (or flagged) step of a moment-curvature analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MomentCurvatureRow {
    pub curvature: f64,
    pub moment: f64,
    /// External axial load, as supplied (compression-negative)
    pub axial_force: f64,
    /// `None` when the strain field is uniform
    pub neutral_axis: Option<f64>,
    /// Largest compressive strain in any concrete fiber
    pub extreme_concrete_strain: f64,
    /// Most tensile bar strain (compression-positive, 0 without bars)
    pub extreme_steel_strain: f64,
    /// Some bar is at or past its yield strain in tension
    pub steel_yielded: bool,
    /// Axial equilibrium residual at the accepted state
    pub residual: f64,
    pub converged: bool,
}

impl TableRow for MomentCurvatureRow {
    const HEADERS: &'static [&'static str] = &[
        "curvature",
        "moment",
        "axial_force",
        "neutral_axis",
        "extreme_concrete_strain",
        "extreme_steel_strain",
        "steel_yielded",
        "residual",
        "converged",
    ];

    fn to_fields(&self) -> Vec<String> {
        vec![
            format_f64(self.curvature),
            format_f64(self.moment),
            format_f64(self.axial_force),
            format_opt(self.neutral_axis),
            format_f64(self.extreme_concrete_strain),
            format_f64(self.extreme_steel_strain),
            self.steel_yielded.to_string(),
            format_f64(self.residual),
            self.converged.to_string(),
        ]
    }

    fn from_fields(fields: &[&str]) -> Result<Self, String> {
        Ok(Self {
            curvature: parse_f64(fields[0], "curvature")?,
            moment: parse_f64(fields[1], "moment")?,
            axial_force: parse_f64(fields[2], "axial_force")?,
            neutral_axis: parse_opt(fields[3], "neutral_axis")?,
            extreme_concrete_strain: parse_f64(fields[4], "extreme_concrete_strain")?,
            extreme_steel_strain: parse_f64(fields[5], "extreme_steel_strain")?,
            steel_yielded: parse_bool(fields[6], "steel_yielded")?,
            residual: parse_f64(fields[7], "residual")?,
            converged: parse_bool(fields[8], "converged")?,
        })
    }
}

/// One point of a P-M interaction envelope.
///
/// Axial force is compression-positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PmRow {
    pub axial_force: f64,
    pub moment: f64,
    /// Depth of the neutral axis below the compression face; `None` at the
    /// uniform-strain end points
    pub neutral_axis_depth: Option<f64>,
    /// Net tensile strain in the extreme tension bar (tension-positive)
    pub tensile_strain: f64,
    pub phi_factor: f64,
    pub phi_axial: f64,
    pub phi_moment: f64,
}

impl TableRow for PmRow {
    const HEADERS: &'static [&'static str] = &[
        "axial_force",
        "moment",
        "neutral_axis_depth",
        "tensile_strain",
        "phi",
        "phi_axial_force",
        "phi_moment",
    ];

    fn to_fields(&self) -> Vec<String> {
        vec![
            format_f64(self.axial_force),
            format_f64(self.moment),
            format_opt(self.neutral_axis_depth),
            format_f64(self.tensile_strain),
            format_f64(self.phi_factor),
            format_f64(self.phi_axial),
            format_f64(self.phi_moment),
        ]
    }

    fn from_fields(fields: &[&str]) -> Result<Self, String> {
        Ok(Self {
            axial_force: parse_f64(fields[0], "axial_force")?,
            moment: parse_f64(fields[1], "moment")?,
            neutral_axis_depth: parse_opt(fields[2], "neutral_axis_depth")?,
            tensile_strain: parse_f64(fields[3], "tensile_strain")?,
            phi_factor: parse_f64(fields[4], "phi")?,
            phi_axial: parse_f64(fields[5], "phi_axial_force")?,
            phi_moment: parse_f64(fields[6], "phi_moment")?,
        })
    }
}
