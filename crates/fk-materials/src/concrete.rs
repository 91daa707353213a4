//! Concrete laws: Todeschini (unconfined) and Mander (confined).
//!
//! Both laws rise monotonically to a peak, soften, and lose capacity at the
//! ultimate (spalling) strain. Concrete carries no tension.

use crate::error::{MaterialError, MaterialResult, check_positive};
use crate::law::{MaterialLaw, ReferencePoints};
use fk_core::{Real, UnitSystem};

/// Width of the linear crushing branch past the ultimate strain, as a
/// fraction of that strain. Keeps stress continuous at `εu`.
pub const CRUSH_RAMP_FRACTION: Real = 0.05;

/// Apply the crushing ramp to a backbone curve.
///
/// `backbone` is evaluated on `(0, εu]`; past `εu` the stress falls linearly
/// to zero at `εu (1 + CRUSH_RAMP_FRACTION)`.
fn with_crushing(strain: Real, ultimate: Real, backbone: impl Fn(Real) -> Real) -> Real {
    if strain <= 0.0 {
        return 0.0;
    }
    if strain <= ultimate {
        return backbone(strain);
    }
    let ramp = CRUSH_RAMP_FRACTION * ultimate;
    let past = strain - ultimate;
    if past >= ramp {
        return 0.0;
    }
    backbone(ultimate) * (1.0 - past / ramp)
}

fn check_strain_order(
    lower_name: &'static str,
    lower: Real,
    upper_name: &'static str,
    upper: Real,
) -> MaterialResult<()> {
    if lower >= upper {
        return Err(MaterialError::NonMonotonicStrain {
            lower_name,
            lower,
            upper_name,
            upper,
        });
    }
    Ok(())
}

/// Todeschini parabola for unconfined concrete.
///
/// `σ = 2 (0.9 f'c) (ε/εo) / (1 + (ε/εo)²)` with `εo = 1.71 f'c / Ec`.
#[derive(Debug, Clone, PartialEq)]
pub struct Todeschini {
    name: String,
    /// Compressive strength
    pub fpc: Real,
    /// Initial elastic modulus
    pub ec: Real,
    /// Strain at peak stress
    pub eo: Real,
    /// Ultimate (spalling) strain
    pub emax: Real,
}

impl Todeschini {
    /// Create with the modulus derived from `fpc` for the given unit system.
    ///
    /// The ultimate strain defaults to `2 εo`.
    pub fn new(fpc: Real, units: UnitSystem) -> MaterialResult<Self> {
        check_positive(fpc, "fpc")?;
        Self::with_modulus(fpc, units.concrete_modulus(fpc))
    }

    /// Create with an explicit elastic modulus.
    pub fn with_modulus(fpc: Real, ec: Real) -> MaterialResult<Self> {
        check_positive(fpc, "fpc")?;
        check_positive(ec, "ec")?;
        let eo = 1.71 * fpc / ec;
        Ok(Self {
            name: "Concrete-Unconfined".to_string(),
            fpc,
            ec,
            eo,
            emax: 2.0 * eo,
        })
    }

    /// Override the ultimate strain. Must exceed the peak strain.
    pub fn with_ultimate_strain(mut self, emax: Real) -> MaterialResult<Self> {
        check_positive(emax, "emax")?;
        check_strain_order("eo", self.eo, "emax", emax)?;
        self.emax = emax;
        Ok(self)
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    fn backbone(&self, strain: Real) -> Real {
        let x = strain / self.eo;
        2.0 * 0.9 * self.fpc * x / (1.0 + x * x)
    }
}

impl MaterialLaw for Todeschini {
    fn name(&self) -> &str {
        &self.name
    }

    fn stress(&self, strain: Real) -> Real {
        with_crushing(strain, self.emax, |e| self.backbone(e))
    }

    fn reference_points(&self) -> ReferencePoints {
        ReferencePoints {
            peak_stress: 0.9 * self.fpc,
            peak_strain: self.eo,
            yield_strain: None,
            ultimate_strain: Some(self.emax),
        }
    }

    fn plot_domain(&self) -> (Real, Real) {
        (-0.001, 1.1 * self.emax * (1.0 + CRUSH_RAMP_FRACTION))
    }
}

/// Mander model for confined concrete.
///
/// `σ = f'cc x r / (r - 1 + x^r)`, `x = ε/εo`, `r = Ec / (Ec - f'cc/εo)`.
/// Peak and ultimate strains are supplied, not derived from confinement.
#[derive(Debug, Clone, PartialEq)]
pub struct Mander {
    name: String,
    /// Confined compressive strength
    pub fpc: Real,
    /// Strain at peak stress
    pub eo: Real,
    /// Ultimate strain
    pub emax: Real,
    /// Initial elastic modulus
    pub ec: Real,
    r: Real,
}

impl Mander {
    /// Create with the modulus derived from `fpc` for the given unit system.
    pub fn new(fpc: Real, eo: Real, emax: Real, units: UnitSystem) -> MaterialResult<Self> {
        check_positive(fpc, "fpc")?;
        Self::with_modulus(fpc, eo, emax, units.concrete_modulus(fpc))
    }

    /// Create with an explicit elastic modulus.
    pub fn with_modulus(fpc: Real, eo: Real, emax: Real, ec: Real) -> MaterialResult<Self> {
        check_positive(fpc, "fpc")?;
        check_positive(eo, "eo")?;
        check_positive(emax, "emax")?;
        check_positive(ec, "ec")?;
        check_strain_order("eo", eo, "emax", emax)?;

        let esec = fpc / eo;
        if ec <= esec {
            return Err(MaterialError::ModulusBelowSecant { ec, esec });
        }

        Ok(Self {
            name: "Concrete-Confined".to_string(),
            fpc,
            eo,
            emax,
            ec,
            r: ec / (ec - esec),
        })
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Curve shape exponent `r`.
    pub fn r(&self) -> Real {
        self.r
    }

    fn backbone(&self, strain: Real) -> Real {
        let x = strain / self.eo;
        self.fpc * x * self.r / (self.r - 1.0 + x.powf(self.r))
    }
}

impl MaterialLaw for Mander {
    fn name(&self) -> &str {
        &self.name
    }

    fn stress(&self, strain: Real) -> Real {
        with_crushing(strain, self.emax, |e| self.backbone(e))
    }

    fn reference_points(&self) -> ReferencePoints {
        ReferencePoints {
            peak_stress: self.fpc,
            peak_strain: self.eo,
            yield_strain: None,
            ultimate_strain: Some(self.emax),
        }
    }

    fn plot_domain(&self) -> (Real, Real) {
        (-0.001, 1.1 * self.emax * (1.0 + CRUSH_RAMP_FRACTION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unconfined() -> Todeschini {
        Todeschini::new(4.0, UnitSystem::Imperial).unwrap()
    }

    fn confined() -> Mander {
        Mander::new(6.0, 0.004, 0.014, UnitSystem::Imperial).unwrap()
    }

    #[test]
    fn todeschini_peak_is_ninety_percent_fpc() {
        let c = unconfined();
        assert!((c.stress(c.eo) - 3.6).abs() < 1e-12);
        assert!(c.stress(0.9 * c.eo) < c.stress(c.eo));
        assert!(c.stress(1.1 * c.eo) < c.stress(c.eo));
    }

    #[test]
    fn todeschini_default_strains() {
        let c = unconfined();
        // Ec = 3605 ksi, eo = 1.71 * 4 / 3605
        assert!((c.eo - 0.001_897).abs() < 1e-6);
        assert!((c.emax - 2.0 * c.eo).abs() < 1e-15);
    }

    #[test]
    fn mander_peak_equals_fpc() {
        let c = confined();
        assert!((c.stress(0.004) - 6.0).abs() < 1e-12);
        assert!(c.r() > 1.0);
    }

    #[test]
    fn concrete_has_no_tension() {
        assert_eq!(unconfined().stress(-0.001), 0.0);
        assert_eq!(confined().stress(-0.001), 0.0);
    }

    #[test]
    fn crushed_concrete_carries_nothing() {
        let c = confined();
        let gone = c.emax * (1.0 + 1.2 * CRUSH_RAMP_FRACTION);
        assert_eq!(c.stress(gone), 0.0);
        assert_eq!(c.stress(2.0 * gone), 0.0);
        let halfway = c.emax * (1.0 + 0.5 * CRUSH_RAMP_FRACTION);
        assert!((c.stress(halfway) - 0.5 * c.stress(c.emax)).abs() < 1e-9);
    }

    #[test]
    fn mander_rejects_peak_beyond_ultimate() {
        let err = Mander::new(6.0, 0.02, 0.014, UnitSystem::Imperial).unwrap_err();
        assert!(matches!(err, MaterialError::NonMonotonicStrain { .. }));
    }

    #[test]
    fn mander_rejects_soft_modulus() {
        // Esec = 6 / 0.004 = 1500 > 1000
        let err = Mander::with_modulus(6.0, 0.004, 0.014, 1000.0).unwrap_err();
        assert!(matches!(err, MaterialError::ModulusBelowSecant { .. }));
    }

    #[test]
    fn todeschini_rejects_negative_strength() {
        assert!(Todeschini::new(-4.0, UnitSystem::Imperial).is_err());
        assert!(unconfined().with_ultimate_strain(0.001).is_err());
    }

    #[test]
    fn metric_modulus_scales_strain() {
        let c = Todeschini::new(28.0, UnitSystem::Metric).unwrap();
        // Ec = 4700 sqrt(28) = 24870 MPa
        assert!((c.eo - 1.71 * 28.0 / 24_870.1).abs() < 1e-6);
    }
}
