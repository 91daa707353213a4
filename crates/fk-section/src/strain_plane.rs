//! Linear strain field shared by the moment-curvature and P-M solvers.

use crate::fiber::Fiber;
use crate::section::Section;
use fk_core::Real;

/// Plane-sections-remain-plane strain field:
/// `ε(y) = axial_strain + curvature · (y - y_ref)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrainPlane {
    /// Strain at `y_ref`
    pub axial_strain: Real,
    pub curvature: Real,
    pub y_ref: Real,
}

impl StrainPlane {
    /// Same strain at every fiber.
    pub fn uniform(strain: Real) -> Self {
        Self {
            axial_strain: strain,
            curvature: 0.0,
            y_ref: 0.0,
        }
    }

    /// Zero strain at `y_na`, compression on the `+y` side for positive curvature.
    pub fn from_neutral_axis(curvature: Real, y_na: Real) -> Self {
        Self {
            axial_strain: 0.0,
            curvature,
            y_ref: y_na,
        }
    }

    #[inline]
    pub fn strain_at(&self, y: Real) -> Real {
        self.axial_strain + self.curvature * (y - self.y_ref)
    }

    /// Position of zero strain, undefined for a uniform field.
    pub fn neutral_axis(&self) -> Option<Real> {
        if self.curvature == 0.0 {
            None
        } else {
            Some(self.y_ref - self.axial_strain / self.curvature)
        }
    }
}

/// Resultant axial force and moment about the section centroid.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SectionForces {
    pub axial: Real,
    pub moment: Real,
}

/// Integrate a per-fiber force response over the section.
///
/// `response(fiber, strain)` returns the fiber's axial force at its strain.
pub fn section_response_with<F>(section: &Section, plane: &StrainPlane, response: F) -> SectionForces
where
    F: Fn(&Fiber, Real) -> Real,
{
    let yc = section.centroid().y;
    section
        .fibers()
        .iter()
        .fold(SectionForces::default(), |acc, fiber| {
            let y = fiber.position().y;
            let force = response(fiber, plane.strain_at(y));
            SectionForces {
                axial: acc.axial + force,
                moment: acc.moment + force * (y - yc),
            }
        })
}

/// Section resultants using each fiber's own material law.
pub fn section_response(section: &Section, plane: &StrainPlane) -> SectionForces {
    section_response_with(section, plane, |fiber, strain| fiber.force(strain))
}
