//! Axial-moment interaction envelope per ACI 318-19.
//!
//! Concrete is replaced by an equivalent rectangular stress block of
//! `0.85 f'c` over depth `β1 c`, steel is elastic-perfectly-plastic, and the
//! extreme compression fiber sits at the ultimate strain `εcu`. Axial force
//! in the envelope is compression-positive.

use crate::error::{SolverError, SolverResult, check_finite};
use fk_core::{Real, SweepDefinition, SweepType, UnitSystem};
use fk_materials::{Bilinear, MaterialLaw};
use fk_results::{PmRow, ResultTable};
use fk_section::geometry::{clip_horizontal, polygon_area_centroid};
use fk_section::{Fiber, Section};
use rayon::prelude::*;
use tracing::{debug, info};

/// Net tensile strain beyond `εty` at which a section is tension-controlled.
const TENSION_CONTROL_MARGIN: Real = 0.003;
const PHI_TENSION: Real = 0.90;

/// Lateral reinforcement type, selects the strength reduction factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransverseReinforcement {
    #[default]
    Tied,
    Spiral,
}

impl TransverseReinforcement {
    /// φ for compression-controlled sections.
    pub fn phi_compression(self) -> Real {
        match self {
            Self::Tied => 0.65,
            Self::Spiral => 0.75,
        }
    }

    /// Fraction of `φ P0` allowed as maximum axial compression.
    pub fn max_axial_fraction(self) -> Real {
        match self {
            Self::Tied => 0.80,
            Self::Spiral => 0.85,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PmParams {
    /// Concrete compressive strength
    pub fpc: Real,
    /// Steel yield strength
    pub fy: Real,
    /// Steel elastic modulus
    pub es: Real,
    pub units: UnitSystem,
    /// Extreme compression fiber strain at nominal strength
    pub ultimate_strain: Real,
    /// Neutral-axis depths in the sweep, excluding end points
    pub points: usize,
    pub transverse: TransverseReinforcement,
    /// Also sweep with the `-y` face in compression
    pub both_directions: bool,
}

impl Default for PmParams {
    fn default() -> Self {
        Self {
            fpc: 4.0,
            fy: 60.0,
            es: 29_000.0,
            units: UnitSystem::Imperial,
            ultimate_strain: 0.003,
            points: 100,
            transverse: TransverseReinforcement::Tied,
            both_directions: false,
        }
    }
}

impl PmParams {
    pub fn validate(&self) -> SolverResult<()> {
        for (what, value) in [
            ("fpc", self.fpc),
            ("fy", self.fy),
            ("es", self.es),
            ("ultimate_strain", self.ultimate_strain),
        ] {
            check_finite(value, what)?;
            if value <= 0.0 {
                return Err(SolverError::InvalidParams {
                    what: format!("{what} must be positive, got {value}"),
                });
            }
        }
        if self.points < 2 {
            return Err(SolverError::InvalidParams {
                what: format!("points must be at least 2, got {}", self.points),
            });
        }
        Ok(())
    }

    pub fn yield_strain(&self) -> Real {
        self.fy / self.es
    }
}

/// Stress block depth factor (ACI 318-19 Table 22.2.2.4.3).
pub fn beta1(fpc: Real, units: UnitSystem) -> Real {
    let raw = match units {
        UnitSystem::Imperial => 0.85 - 0.05 * (units.stress_to_psi(fpc) - 4000.0) / 1000.0,
        UnitSystem::Metric => 0.85 - 0.05 * (fpc - 28.0) / 7.0,
    };
    raw.clamp(0.65, 0.85)
}

/// Role of an envelope point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PmPointKind {
    PureCompression,
    Sweep,
    Balanced,
    PureTension,
}

/// Envelope rows in sweep order, with the role of each row.
#[derive(Debug, Clone)]
pub struct PmInteractionResult {
    table: ResultTable<PmRow>,
    kinds: Vec<PmPointKind>,
}

impl PmInteractionResult {
    pub fn rows(&self) -> &[PmRow] {
        self.table.rows()
    }

    pub fn table(&self) -> &ResultTable<PmRow> {
        &self.table
    }

    pub fn into_table(self) -> ResultTable<PmRow> {
        self.table
    }

    pub fn kinds(&self) -> &[PmPointKind] {
        &self.kinds
    }

    fn first(&self, kind: PmPointKind) -> Option<&PmRow> {
        self.kinds
            .iter()
            .position(|k| *k == kind)
            .map(|i| &self.rows()[i])
    }

    pub fn pure_compression(&self) -> Option<&PmRow> {
        self.first(PmPointKind::PureCompression)
    }

    pub fn balanced(&self) -> Option<&PmRow> {
        self.first(PmPointKind::Balanced)
    }

    pub fn pure_tension(&self) -> Option<&PmRow> {
        self.first(PmPointKind::PureTension)
    }
}

/// Strain state evaluated for one envelope point.
#[derive(Debug, Clone, Copy)]
enum Plane {
    Compression,
    Depth(Real),
    Tension,
}

/// Which face carries the compression block.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Face {
    Top,
    Bottom,
}

impl Face {
    /// Depth of `y` below this face.
    fn depth_of(self, section: &Section, y: Real) -> Real {
        let (y_min, y_max) = section.extent_y();
        match self {
            Face::Top => y_max - y,
            Face::Bottom => y - y_min,
        }
    }
}

struct Resultant {
    axial: Real,
    moment: Real,
    tensile_strain: Real,
}

/// P-M interaction driver for one section.
#[derive(Debug, Clone)]
pub struct PmInteractionSolver<'a> {
    section: &'a Section,
    params: PmParams,
    steel: Bilinear,
    beta1: Real,
}

impl<'a> PmInteractionSolver<'a> {
    pub fn new(section: &'a Section, params: PmParams) -> SolverResult<Self> {
        params.validate()?;
        let steel = Bilinear::elastic_perfectly_plastic(params.fy, params.es)?;
        Ok(Self {
            section,
            beta1: beta1(params.fpc, params.units),
            params,
            steel,
        })
    }

    pub fn beta1(&self) -> Real {
        self.beta1
    }

    /// Nominal axial capacity with every fiber at `εcu`.
    pub fn nominal_compression(&self) -> Real {
        self.evaluate(Face::Top, Plane::Compression).axial
    }

    pub fn run(&self) -> SolverResult<PmInteractionResult> {
        let mut plan = self.branch(Face::Top)?;
        if self.params.both_directions {
            let mut reverse = self.branch(Face::Bottom)?;
            reverse.reverse();
            plan.extend(reverse);
        }

        let p0 = self.nominal_compression();
        let phi_c = self.params.transverse.phi_compression();
        let axial_cap = self.params.transverse.max_axial_fraction() * phi_c * p0;

        let rows: Vec<PmRow> = plan
            .par_iter()
            .map(|&(face, plane, _)| {
                let r = self.evaluate(face, plane);
                let phi = self.phi_factor(r.tensile_strain);
                PmRow {
                    axial_force: r.axial,
                    moment: r.moment,
                    neutral_axis_depth: match plane {
                        Plane::Depth(c) => Some(c),
                        Plane::Compression | Plane::Tension => None,
                    },
                    tensile_strain: r.tensile_strain,
                    phi_factor: phi,
                    phi_axial: (phi * r.axial).min(axial_cap),
                    phi_moment: phi * r.moment,
                }
            })
            .collect();
        let kinds = plan.into_iter().map(|(_, _, kind)| kind).collect();

        info!(
            points = rows.len(),
            p0,
            beta1 = self.beta1,
            "P-M interaction sweep complete"
        );

        Ok(PmInteractionResult {
            table: ResultTable::new(rows),
            kinds,
        })
    }

    /// Points of one branch, from pure compression to pure tension.
    fn branch(&self, face: Face) -> SolverResult<Vec<(Face, Plane, PmPointKind)>> {
        let depth = self.section.depth();
        let sweep = SweepDefinition::new(
            10.0 * depth,
            0.001 * depth,
            self.params.points,
            SweepType::Logarithmic,
        )?;
        let mut depths: Vec<(Real, PmPointKind)> = sweep
            .generate_points()
            .into_iter()
            .map(|c| (c, PmPointKind::Sweep))
            .collect();

        if let Some(dt) = self.extreme_tension_depth(face) {
            let ecu = self.params.ultimate_strain;
            let cb = ecu / (ecu + self.params.yield_strain()) * dt;
            let at = depths.iter().position(|(c, _)| *c < cb).unwrap_or(depths.len());
            depths.insert(at, (cb, PmPointKind::Balanced));
            debug!(cb, dt, ?face, "balanced neutral axis depth");
        }

        let mut plan = Vec::with_capacity(depths.len() + 2);
        plan.push((face, Plane::Compression, PmPointKind::PureCompression));
        plan.extend(
            depths
                .into_iter()
                .map(|(c, kind)| (face, Plane::Depth(c), kind)),
        );
        plan.push((face, Plane::Tension, PmPointKind::PureTension));
        Ok(plan)
    }

    /// Depth of the bar farthest from the compression face.
    fn extreme_tension_depth(&self, face: Face) -> Option<Real> {
        self.section
            .node_fibers()
            .map(|bar| face.depth_of(self.section, bar.coord().y))
            .max_by(Real::total_cmp)
    }

    /// Strength reduction factor (ACI 318-19 Table 21.2.2).
    fn phi_factor(&self, tensile_strain: Real) -> Real {
        let phi_c = self.params.transverse.phi_compression();
        let ety = self.params.yield_strain();
        if tensile_strain <= ety {
            phi_c
        } else if tensile_strain >= ety + TENSION_CONTROL_MARGIN {
            PHI_TENSION
        } else {
            phi_c + (PHI_TENSION - phi_c) * (tensile_strain - ety) / TENSION_CONTROL_MARGIN
        }
    }

    /// Compression-positive strain at depth `d` below the compression face.
    fn strain_at_depth(&self, plane: Plane, d: Real) -> Real {
        let ecu = self.params.ultimate_strain;
        match plane {
            Plane::Compression => ecu,
            Plane::Tension => -(self.params.yield_strain() + TENSION_CONTROL_MARGIN),
            Plane::Depth(c) => ecu * (c - d) / c,
        }
    }

    fn evaluate(&self, face: Face, plane: Plane) -> Resultant {
        let ecu = self.params.ultimate_strain;
        let ety = self.params.yield_strain();
        let block_stress = 0.85 * self.params.fpc;
        let yc = self.section.centroid().y;
        let (y_min, y_max) = self.section.extent_y();
        let depth = self.section.depth();

        let block = match plane {
            Plane::Compression => depth,
            Plane::Tension => 0.0,
            Plane::Depth(c) => (self.beta1 * c).min(depth),
        };

        let (y_cut, keep_above) = match face {
            Face::Top => (y_max - block, true),
            Face::Bottom => (y_min + block, false),
        };

        let mut axial = 0.0;
        let mut moment = 0.0;
        let mut tensile_strain: Option<Real> = None;

        for fiber in self.section.fibers() {
            match fiber {
                Fiber::Patch(patch) if block > 0.0 => {
                    let (area, centroid) = if block >= depth {
                        (patch.area(), patch.centroid())
                    } else {
                        let clipped = clip_horizontal(patch.vertices(), y_cut, keep_above);
                        if clipped.len() < 3 {
                            continue;
                        }
                        polygon_area_centroid(&clipped)
                    };
                    let force = block_stress * area;
                    axial += force;
                    moment += force * (centroid.y - yc);
                }
                Fiber::Patch(_) => {}
                Fiber::Node(bar) => {
                    let y = bar.coord().y;
                    let d = face.depth_of(self.section, y);
                    let strain = self.strain_at_depth(plane, d);
                    let mut stress = self.steel.stress(strain);
                    if d <= block && strain > 0.0 {
                        stress -= block_stress;
                    }
                    let force = stress * bar.area();
                    axial += force;
                    moment += force * (y - yc);
                    tensile_strain = Some(tensile_strain.map_or(-strain, |t| t.max(-strain)));
                }
            }
        }

        let tensile_strain = tensile_strain.unwrap_or_else(|| match plane {
            Plane::Depth(c) => ecu * (depth - c) / c,
            Plane::Compression => -ecu,
            Plane::Tension => ety + TENSION_CONTROL_MARGIN,
        });

        Resultant {
            axial,
            moment,
            tensile_strain,
        }
    }
}
