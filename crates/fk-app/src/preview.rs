//! Serializable section and material preview for plotting frontends.

use crate::analysis_service::{build_materials, build_section_with};
use crate::error::AppResult;
use fk_core::UnitSystem;
use fk_materials::MaterialLaw;
use fk_project::schema::Project;
use fk_section::{Footprint, Section, SharedLaw};
use serde::Serialize;

const CURVE_SAMPLES: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FiberShape {
    Polygon { vertices: Vec<[f64; 2]> },
    Circle { center: [f64; 2], radius: f64 },
}

impl From<Footprint> for FiberShape {
    fn from(footprint: Footprint) -> Self {
        match footprint {
            Footprint::Polygon(vertices) => FiberShape::Polygon { vertices },
            Footprint::Circle { center, radius } => FiberShape::Circle { center, radius },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FiberPreview {
    pub material: String,
    pub area: f64,
    pub shape: FiberShape,
}

/// Sampled stress-strain curve of one law.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialCurve {
    pub name: String,
    pub peak_stress: f64,
    pub peak_strain: f64,
    /// `(strain, stress)` pairs, compression positive
    pub points: Vec<[f64; 2]>,
}

impl MaterialCurve {
    pub fn sample(law: &dyn MaterialLaw) -> Self {
        let (lo, hi) = law.plot_domain();
        let refs = law.reference_points();
        Self {
            name: law.name().to_string(),
            peak_stress: refs.peak_stress,
            peak_strain: refs.peak_strain,
            points: law
                .stress_curve(lo, hi, CURVE_SAMPLES)
                .into_iter()
                .map(|(e, s)| [e, s])
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionPreview {
    pub name: String,
    pub units: UnitSystem,
    pub centroid: [f64; 2],
    pub total_area: f64,
    pub concrete_area: f64,
    pub steel_area: f64,
    pub fibers: Vec<FiberPreview>,
    pub materials: Vec<MaterialCurve>,
}

impl SectionPreview {
    pub fn new(name: &str, units: UnitSystem, section: &Section, laws: &[SharedLaw]) -> Self {
        let c = section.centroid();
        Self {
            name: name.to_string(),
            units,
            centroid: [c.x, c.y],
            total_area: section.total_area(),
            concrete_area: section.concrete_area(),
            steel_area: section.steel_area(),
            fibers: section
                .fibers()
                .iter()
                .map(|f| FiberPreview {
                    material: f.material().name().to_string(),
                    area: f.area(),
                    shape: f.footprint().into(),
                })
                .collect(),
            materials: laws.iter().map(|law| MaterialCurve::sample(law.as_ref())).collect(),
        }
    }

    pub fn to_json(&self) -> AppResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| crate::error::AppError::Results(format!("preview serialization: {e}")))
    }
}

/// Mesh the project's section and sample its material laws.
pub fn preview(project: &Project) -> AppResult<SectionPreview> {
    let materials = build_materials(project)?;
    let section = build_section_with(project, &materials)?;
    Ok(SectionPreview::new(
        &project.name,
        project.units,
        &section,
        &[materials.unconfined, materials.confined, materials.steel],
    ))
}
