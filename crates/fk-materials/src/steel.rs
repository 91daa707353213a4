//! Bilinear reinforcing steel.

use crate::error::{MaterialError, MaterialResult, check_positive};
use crate::law::{MaterialLaw, ReferencePoints};
use fk_core::Real;

/// Symmetric bilinear steel: elastic to `fy`, then a hardening branch of
/// slope `b Es` (flat when `b = 0`).
#[derive(Debug, Clone, PartialEq)]
pub struct Bilinear {
    name: String,
    /// Yield stress
    pub fy: Real,
    /// Elastic modulus
    pub es: Real,
    /// Post-yield stiffness as a fraction of `es`
    pub hardening: Real,
}

impl Bilinear {
    pub fn new(fy: Real, es: Real) -> MaterialResult<Self> {
        check_positive(fy, "fy")?;
        check_positive(es, "es")?;
        Ok(Self {
            name: "Steel-Bilinear".to_string(),
            fy,
            es,
            hardening: 0.0,
        })
    }

    /// Elastic-perfectly-plastic steel, as assumed by code capacity checks.
    pub fn elastic_perfectly_plastic(fy: Real, es: Real) -> MaterialResult<Self> {
        Self::new(fy, es)
    }

    /// Set the strain-hardening ratio, `0 <= b < 1`.
    pub fn with_hardening(mut self, b: Real) -> MaterialResult<Self> {
        if !b.is_finite() || !(0.0..1.0).contains(&b) {
            return Err(MaterialError::OutOfRange {
                what: "hardening",
                value: b,
                min: 0.0,
                max: 1.0,
            });
        }
        self.hardening = b;
        Ok(self)
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Yield strain `fy / Es`.
    pub fn yield_strain(&self) -> Real {
        self.fy / self.es
    }
}

impl MaterialLaw for Bilinear {
    fn name(&self) -> &str {
        &self.name
    }

    fn stress(&self, strain: Real) -> Real {
        let ey = self.yield_strain();
        if strain.abs() <= ey {
            return self.es * strain;
        }
        let plastic = strain.abs() - ey;
        strain.signum() * (self.fy + self.hardening * self.es * plastic)
    }

    fn reference_points(&self) -> ReferencePoints {
        let ey = self.yield_strain();
        ReferencePoints {
            peak_stress: self.fy,
            peak_strain: ey,
            yield_strain: Some(ey),
            ultimate_strain: None,
        }
    }

    fn plot_domain(&self) -> (Real, Real) {
        let span = (2.5 * self.yield_strain()).max(0.005);
        (-span, span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade60() -> Bilinear {
        Bilinear::new(60.0, 29_000.0).unwrap()
    }

    #[test]
    fn elastic_branch() {
        let s = grade60();
        assert!((s.stress(0.001) - 29.0).abs() < 1e-12);
        assert!((s.stress(-0.001) + 29.0).abs() < 1e-12);
    }

    #[test]
    fn plastic_branch_is_flat() {
        let s = grade60();
        assert_eq!(s.stress(0.01), 60.0);
        assert_eq!(s.stress(-0.05), -60.0);
    }

    #[test]
    fn hardening_branch_rises() {
        let s = grade60().with_hardening(0.01).unwrap();
        let ey = s.yield_strain();
        let expected = 60.0 + 0.01 * 29_000.0 * 0.01;
        assert!((s.stress(ey + 0.01) - expected).abs() < 1e-9);
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(Bilinear::new(0.0, 29_000.0).is_err());
        assert!(Bilinear::new(60.0, -1.0).is_err());
        assert!(grade60().with_hardening(1.5).is_err());
    }

    #[test]
    fn reference_points_report_yield() {
        let rp = grade60().reference_points();
        assert_eq!(rp.yield_strain, Some(60.0 / 29_000.0));
        assert_eq!(rp.peak_stress, 60.0);
    }
}
