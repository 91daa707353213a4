//! Core trait for uniaxial material models.

use fk_core::Real;
use std::fmt::Debug;

/// Characteristic points of a stress-strain law, used by the solvers to pick
/// brackets, scale tolerances, and flag yielding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePoints {
    /// Largest compressive stress the law reaches
    pub peak_stress: Real,
    /// Strain at `peak_stress` (the yield strain for steel)
    pub peak_strain: Real,
    /// Yield strain, for laws with a distinct elastic limit
    pub yield_strain: Option<Real>,
    /// Strain beyond which the material has lost capacity
    pub ultimate_strain: Option<Real>,
}

/// Trait for strain -> stress relationships carried by fibers.
///
/// Laws are immutable after construction and pure: `stress` may be probed at
/// any sequence of strains, from any number of threads.
pub trait MaterialLaw: Send + Sync + Debug {
    /// Display name, used by plotting collaborators.
    fn name(&self) -> &str;

    /// Stress at the given strain (compression-positive).
    ///
    /// Total over the reals: out-of-range strains saturate or return zero,
    /// depending on the model.
    fn stress(&self, strain: Real) -> Real;

    /// Characteristic strains and the peak stress.
    fn reference_points(&self) -> ReferencePoints;

    /// Strain range that shows the full shape of the law.
    fn plot_domain(&self) -> (Real, Real);

    /// Axial force carried by an area at the given strain.
    fn force(&self, strain: Real, area: Real) -> Real {
        self.stress(strain) * area
    }

    /// Sample the law at `n` evenly spaced strains in `[lo, hi]`.
    fn stress_curve(&self, lo: Real, hi: Real, n: usize) -> Vec<(Real, Real)> {
        if n < 2 {
            return vec![(lo, self.stress(lo))];
        }
        let step = (hi - lo) / (n - 1) as Real;
        (0..n)
            .map(|i| {
                let strain = if i == n - 1 { hi } else { lo + i as Real * step };
                (strain, self.stress(strain))
            })
            .collect()
    }
}
