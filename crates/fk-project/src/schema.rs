//! Analysis file schema.
//!
//! All quantities are in the project's unit system (kip/in/ksi or N/mm/MPa).
//! Missing sections fall back to the values of the stock 24 x 36 column.

use fk_core::UnitSystem;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub units: UnitSystem,
    #[serde(default)]
    pub materials: MaterialsDef,
    #[serde(default)]
    pub section: SectionDef,
    #[serde(default)]
    pub analysis: AnalysisDef,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            version: crate::migrate::LATEST_VERSION,
            name: "Rectangular column".to_string(),
            units: UnitSystem::Imperial,
            materials: MaterialsDef::default(),
            section: SectionDef::default(),
            analysis: AnalysisDef::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MaterialsDef {
    #[serde(default)]
    pub unconfined: UnconfinedConcreteDef,
    #[serde(default)]
    pub confined: ConfinedConcreteDef,
    #[serde(default)]
    pub steel: SteelDef,
}

/// Cover concrete (Todeschini).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnconfinedConcreteDef {
    pub fpc: f64,
    /// Elastic modulus; derived from `fpc` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ec: Option<f64>,
    /// Defaults to twice the peak strain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ultimate_strain: Option<f64>,
}

impl Default for UnconfinedConcreteDef {
    fn default() -> Self {
        Self {
            fpc: 4.0,
            ec: None,
            ultimate_strain: None,
        }
    }
}

/// Core concrete (Mander).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfinedConcreteDef {
    pub fpc: f64,
    pub peak_strain: f64,
    pub ultimate_strain: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ec: Option<f64>,
}

impl Default for ConfinedConcreteDef {
    fn default() -> Self {
        Self {
            fpc: 6.0,
            peak_strain: 0.004,
            ultimate_strain: 0.014,
            ec: None,
        }
    }
}

/// Reinforcing steel (bilinear).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SteelDef {
    pub fy: f64,
    pub es: f64,
    /// Post-yield stiffness as a fraction of `es`
    #[serde(default)]
    pub hardening: f64,
}

impl Default for SteelDef {
    fn default() -> Self {
        Self {
            fy: 60.0,
            es: 29_000.0,
            hardening: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionDef {
    pub width: f64,
    pub height: f64,
    /// Cover to the bar centerline
    pub cover: f64,
    #[serde(default = "default_mesh")]
    pub mesh_dx: f64,
    #[serde(default = "default_mesh")]
    pub mesh_dy: f64,
    /// Counter-clockwise rotation in degrees, `[0, 360)`
    #[serde(default)]
    pub rotate_deg: f64,
    #[serde(default)]
    pub top_bars: BarLayerDef,
    /// Perimeter bars at mid-height spanning the core width
    #[serde(default)]
    pub mid_bars: BarLayerDef,
    #[serde(default)]
    pub bottom_bars: BarLayerDef,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bar_groups: Vec<BarGroupDef>,
}

fn default_mesh() -> f64 {
    0.85
}

impl Default for SectionDef {
    fn default() -> Self {
        Self {
            width: 24.0,
            height: 36.0,
            cover: 2.5,
            mesh_dx: default_mesh(),
            mesh_dy: default_mesh(),
            rotate_deg: 0.0,
            top_bars: BarLayerDef::new(0.79, 3),
            mid_bars: BarLayerDef::new(0.79, 2),
            bottom_bars: BarLayerDef::new(0.79, 3),
            bar_groups: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BarLayerDef {
    /// Area of one bar
    pub area: f64,
    pub count: usize,
    #[serde(default = "default_rows")]
    pub rows: usize,
    #[serde(default)]
    pub row_spacing: f64,
}

fn default_rows() -> usize {
    1
}

impl BarLayerDef {
    pub fn new(area: f64, count: usize) -> Self {
        Self {
            area,
            count,
            rows: 1,
            row_spacing: 0.0,
        }
    }
}

impl Default for BarLayerDef {
    fn default() -> Self {
        Self::new(0.0, 0)
    }
}

/// Additional grid of bars in section coordinates (origin at the center).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BarGroupDef {
    pub id: String,
    pub x0: f64,
    pub y0: f64,
    pub width: f64,
    pub height: f64,
    pub nx: usize,
    pub ny: usize,
    pub area: f64,
    #[serde(default)]
    pub perimeter_only: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moment_curvature: Option<MomentCurvatureDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pm_interaction: Option<PmInteractionDef>,
}

impl Default for AnalysisDef {
    fn default() -> Self {
        Self {
            moment_curvature: Some(MomentCurvatureDef::default()),
            pm_interaction: Some(PmInteractionDef::default()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MomentCurvatureDef {
    /// Applied axial load, compression negative
    pub axial_load: f64,
    pub phi_target: f64,
    #[serde(default = "default_steps")]
    pub steps: usize,
    #[serde(default = "default_true")]
    pub parallel: bool,
}

fn default_steps() -> usize {
    100
}

fn default_true() -> bool {
    true
}

impl Default for MomentCurvatureDef {
    fn default() -> Self {
        Self {
            axial_load: -180.0,
            phi_target: 0.0002,
            steps: default_steps(),
            parallel: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransverseDef {
    #[default]
    Tied,
    Spiral,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PmInteractionDef {
    #[serde(default = "default_ecu")]
    pub ultimate_strain: f64,
    #[serde(default = "default_points")]
    pub points: usize,
    #[serde(default)]
    pub transverse: TransverseDef,
    #[serde(default)]
    pub both_directions: bool,
}

fn default_ecu() -> f64 {
    0.003
}

fn default_points() -> usize {
    100
}

impl Default for PmInteractionDef {
    fn default() -> Self {
        Self {
            ultimate_strain: default_ecu(),
            points: default_points(),
            transverse: TransverseDef::Tied,
            both_directions: false,
        }
    }
}
