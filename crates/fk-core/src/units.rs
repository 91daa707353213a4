//! Unit system tag.
//!
//! All computation is unit-agnostic: the caller supplies every length, area
//! and stress in one consistent system. The tag is only consulted by the
//! empirical code formulas that are not dimensionally homogeneous (concrete
//! modulus from strength, stress-block factor).

use crate::Real;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UnitSystem {
    /// kip, in, ksi
    #[default]
    Imperial,
    /// N, mm, MPa
    Metric,
}

pub const PSI_PER_KSI: Real = 1000.0;
pub const PSI_PER_MPA: Real = 145.037_737_730_209_2;

impl UnitSystem {
    /// Concrete elastic modulus from compressive strength (ACI 318 normal-weight).
    pub fn concrete_modulus(self, fpc: Real) -> Real {
        match self {
            UnitSystem::Imperial => 57_000.0 * (fpc * PSI_PER_KSI).sqrt() / PSI_PER_KSI,
            UnitSystem::Metric => 4_700.0 * fpc.sqrt(),
        }
    }

    /// Convert a stress in this system to psi.
    pub fn stress_to_psi(self, stress: Real) -> Real {
        match self {
            UnitSystem::Imperial => stress * PSI_PER_KSI,
            UnitSystem::Metric => stress * PSI_PER_MPA,
        }
    }

    pub fn length_unit(self) -> &'static str {
        match self {
            UnitSystem::Imperial => "in",
            UnitSystem::Metric => "mm",
        }
    }

    pub fn force_unit(self) -> &'static str {
        match self {
            UnitSystem::Imperial => "kip",
            UnitSystem::Metric => "N",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Imperial => write!(f, "Imperial (kip, in)"),
            Self::Metric => write!(f, "Metric (N, mm)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imperial_modulus_matches_aci() {
        // 57000 sqrt(4000) psi = 3605 ksi
        let ec = UnitSystem::Imperial.concrete_modulus(4.0);
        assert!((ec - 3604.997).abs() < 0.01);
    }

    #[test]
    fn metric_modulus_matches_aci() {
        let ec = UnitSystem::Metric.concrete_modulus(25.0);
        assert!((ec - 23_500.0).abs() < 1e-9);
    }

    #[test]
    fn stress_to_psi_per_system() {
        assert!((UnitSystem::Imperial.stress_to_psi(4.0) - 4000.0).abs() < 1e-9);
        assert!((UnitSystem::Metric.stress_to_psi(28.0) - 4061.06).abs() < 0.01);
    }

    #[test]
    fn default_is_imperial() {
        assert_eq!(UnitSystem::default(), UnitSystem::Imperial);
    }
}
