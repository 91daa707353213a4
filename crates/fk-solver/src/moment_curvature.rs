//! Moment-curvature analysis under a constant axial load.
//!
//! For each curvature in `0, φ/n, 2φ/n, ..., φ` the neutral axis is located
//! so that the fiber forces balance the applied axial load, and the moment
//! about the section centroid is recorded.

use crate::bracket::{BracketConfig, BracketResult, Scan, scan_sign_change, solve_bracketed};
use crate::error::{SolverError, SolverResult, check_finite};
use fk_core::Real;
use fk_materials::CRUSH_RAMP_FRACTION;
use fk_results::{MomentCurvatureRow, ResultTable};
use fk_section::{Fiber, Section, StrainPlane, section_response};
use rayon::prelude::*;
use std::fmt;
use tracing::{debug, info, warn};

/// Moment-curvature solver configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentCurvatureConfig {
    /// Curvature increments between zero and the target
    pub steps: usize,
    /// Hard cap on emitted rows
    pub max_rows: usize,
    pub root: BracketConfig,
    /// Evaluate steps on the rayon pool
    pub parallel: bool,
}

impl Default for MomentCurvatureConfig {
    fn default() -> Self {
        Self {
            steps: 100,
            max_rows: 10_000,
            root: BracketConfig::default(),
            parallel: true,
        }
    }
}

impl MomentCurvatureConfig {
    pub fn validate(&self) -> SolverResult<()> {
        if self.steps == 0 {
            return Err(SolverError::InvalidParams {
                what: "steps must be at least 1".to_string(),
            });
        }
        if self.max_rows < 2 {
            return Err(SolverError::InvalidParams {
                what: format!("max_rows must be at least 2, got {}", self.max_rows),
            });
        }
        if self.root.scan_segments == 0 {
            return Err(SolverError::InvalidParams {
                what: "bracket scan needs at least one segment".to_string(),
            });
        }
        if self.root.max_iterations == 0 {
            return Err(SolverError::InvalidParams {
                what: "root finder needs at least one iteration".to_string(),
            });
        }
        for (what, tol) in [("abs_tol", self.root.abs_tol), ("rel_tol", self.root.rel_tol)] {
            if !tol.is_finite() || tol < 0.0 {
                return Err(SolverError::InvalidParams {
                    what: format!("{what} must be finite and non-negative, got {tol}"),
                });
            }
        }
        Ok(())
    }
}

/// A step whose axial equilibrium was not met within tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceWarning {
    /// Row index
    pub step: usize,
    pub curvature: Real,
    pub residual: Real,
    pub iterations: usize,
}

impl fmt::Display for ConvergenceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "step {} (curvature {}) did not converge: residual {} after {} iterations",
            self.step, self.curvature, self.residual, self.iterations
        )
    }
}

/// Rows in curvature order plus the warnings raised while producing them.
#[derive(Debug, Clone)]
pub struct MomentCurvatureResult {
    table: ResultTable<MomentCurvatureRow>,
    warnings: Vec<ConvergenceWarning>,
}

impl MomentCurvatureResult {
    pub fn rows(&self) -> &[MomentCurvatureRow] {
        self.table.rows()
    }

    pub fn table(&self) -> &ResultTable<MomentCurvatureRow> {
        &self.table
    }

    pub fn into_table(self) -> ResultTable<MomentCurvatureRow> {
        self.table
    }

    pub fn warnings(&self) -> &[ConvergenceWarning] {
        &self.warnings
    }

    pub fn is_converged(&self) -> bool {
        self.warnings.is_empty()
    }

    /// First row at which a bar has yielded in tension.
    pub fn first_yield(&self) -> Option<&MomentCurvatureRow> {
        self.rows().iter().find(|r| r.steel_yielded)
    }

    /// Row with the largest moment magnitude.
    pub fn peak_moment(&self) -> Option<&MomentCurvatureRow> {
        self.rows()
            .iter()
            .max_by(|a, b| a.moment.abs().total_cmp(&b.moment.abs()))
    }
}

/// Strain scales gathered once from the section's material laws.
#[derive(Debug, Clone, Copy)]
struct StrainScales {
    /// Largest yield strain of any law (falls back to the smallest peak strain)
    yield_max: Real,
    /// Largest ultimate strain of any law
    ultimate_max: Real,
    /// Σ area · peak stress
    force_capacity: Real,
}

impl StrainScales {
    fn of(section: &Section) -> Self {
        let mut yield_max: Option<Real> = None;
        let mut peak_min = Real::INFINITY;
        let mut ultimate_max: Real = 0.0;
        let mut force_capacity = 0.0;

        for fiber in section.fibers() {
            let refs = fiber.material().reference_points();
            if let Some(ey) = refs.yield_strain {
                yield_max = Some(yield_max.map_or(ey, |m| m.max(ey)));
            }
            peak_min = peak_min.min(refs.peak_strain);
            if let Some(eu) = refs.ultimate_strain {
                ultimate_max = ultimate_max.max(eu);
            }
            force_capacity += fiber.area() * refs.peak_stress.abs();
        }

        Self {
            yield_max: yield_max.unwrap_or(peak_min),
            ultimate_max: ultimate_max.max(peak_min),
            force_capacity,
        }
    }
}

struct StepOutcome {
    row: MomentCurvatureRow,
    iterations: usize,
}

/// Moment-curvature driver for one section.
#[derive(Debug, Clone)]
pub struct MomentCurvatureSolver<'a> {
    section: &'a Section,
    config: MomentCurvatureConfig,
    scales: StrainScales,
}

impl<'a> MomentCurvatureSolver<'a> {
    pub fn new(section: &'a Section, config: MomentCurvatureConfig) -> Self {
        Self {
            section,
            config,
            scales: StrainScales::of(section),
        }
    }

    /// Sweep curvature from zero to `phi_target` under the axial load
    /// `p_external` (compression-negative).
    ///
    /// Non-convergent steps are still emitted, flagged and listed in
    /// [`MomentCurvatureResult::warnings`].
    pub fn run(&self, p_external: Real, phi_target: Real) -> SolverResult<MomentCurvatureResult> {
        self.config.validate()?;
        check_finite(p_external, "axial load")?;
        check_finite(phi_target, "target curvature")?;

        let steps = if phi_target == 0.0 {
            0
        } else if self.config.steps >= self.config.max_rows {
            warn!(
                requested = self.config.steps,
                max_rows = self.config.max_rows,
                "curvature steps capped at row limit"
            );
            self.config.max_rows - 1
        } else {
            self.config.steps
        };

        // Internal axial load is compression-positive
        let p_internal = -p_external;
        let tol = self
            .config
            .root
            .tolerance(self.scales.force_capacity + p_external.abs());

        let solve = |i: usize| {
            let curvature = if steps == 0 {
                0.0
            } else {
                phi_target * i as Real / steps as Real
            };
            self.solve_step(curvature, p_internal, p_external, tol)
        };

        let outcomes: Vec<StepOutcome> = if self.config.parallel {
            (0..=steps).into_par_iter().map(solve).collect()
        } else {
            (0..=steps).map(solve).collect()
        };

        let mut warnings = Vec::new();
        let mut rows = Vec::with_capacity(outcomes.len());
        for (step, outcome) in outcomes.into_iter().enumerate() {
            if !outcome.row.converged {
                let warning = ConvergenceWarning {
                    step,
                    curvature: outcome.row.curvature,
                    residual: outcome.row.residual,
                    iterations: outcome.iterations,
                };
                warn!(%warning, "moment-curvature step not converged");
                warnings.push(warning);
            }
            rows.push(outcome.row);
        }

        info!(
            rows = rows.len(),
            phi_target,
            p_external,
            unconverged = warnings.len(),
            "moment-curvature sweep complete"
        );

        Ok(MomentCurvatureResult {
            table: ResultTable::new(rows),
            warnings,
        })
    }

    /// Axial force of the section minus the target, for a given plane.
    fn axial_residual(&self, plane: &StrainPlane, p_internal: Real) -> Real {
        section_response(self.section, plane).axial - p_internal
    }

    fn solve_step(
        &self,
        curvature: Real,
        p_internal: Real,
        p_external: Real,
        tol: Real,
    ) -> StepOutcome {
        let root = self.config.root;

        // Parametrized by the strain at the centroid: the residual rises with
        // it until the section crushes, then falls
        let y_ref = self.section.centroid().y;
        let plane = |strain: Real| StrainPlane {
            axial_strain: strain,
            curvature,
            y_ref,
        };
        let f = |strain: Real| self.axial_residual(&plane(strain), p_internal);

        let f0 = f(0.0);
        let solution = if f0.abs() <= tol {
            BracketResult {
                x: 0.0,
                residual: f0,
                iterations: 0,
                converged: true,
            }
        } else {
            let spread = curvature.abs() * self.section.depth();
            let end = if f0 < 0.0 {
                self.scales.ultimate_max * (1.0 + CRUSH_RAMP_FRACTION) + spread
            } else {
                -(10.0 * self.scales.yield_max + spread)
            };
            match scan_sign_change(&f, (0.0, f0), end, root.scan_segments) {
                Scan::Bracket { lo, hi } => solve_bracketed(&f, lo, hi, tol, root.max_iterations),
                Scan::Exhausted {
                    x,
                    residual,
                    evaluations,
                } => BracketResult {
                    x,
                    residual,
                    iterations: evaluations,
                    converged: false,
                },
            }
        };
        let plane = plane(solution.x);

        debug!(
            curvature,
            residual = solution.residual,
            iterations = solution.iterations,
            "moment-curvature step"
        );

        StepOutcome {
            row: self.describe(&plane, p_external, solution),
            iterations: solution.iterations,
        }
    }

    fn describe(
        &self,
        plane: &StrainPlane,
        p_external: Real,
        solution: BracketResult,
    ) -> MomentCurvatureRow {
        let forces = section_response(self.section, plane);

        let mut extreme_concrete: Option<Real> = None;
        let mut extreme_steel: Option<Real> = None;
        let mut yielded = false;
        for fiber in self.section.fibers() {
            let strain = plane.strain_at(fiber.position().y);
            match fiber {
                Fiber::Patch(_) => {
                    extreme_concrete = Some(extreme_concrete.map_or(strain, |e| e.max(strain)));
                }
                Fiber::Node(bar) => {
                    extreme_steel = Some(extreme_steel.map_or(strain, |e| e.min(strain)));
                    let refs = bar.material().reference_points();
                    let ey = refs.yield_strain.unwrap_or(refs.peak_strain);
                    yielded |= strain <= -ey;
                }
            }
        }

        MomentCurvatureRow {
            curvature: plane.curvature,
            moment: forces.moment,
            axial_force: p_external,
            neutral_axis: plane.neutral_axis(),
            extreme_concrete_strain: extreme_concrete.unwrap_or(0.0),
            extreme_steel_strain: extreme_steel.unwrap_or(0.0),
            steel_yielded: yielded,
            residual: solution.residual,
            converged: solution.converged,
        }
    }
}
