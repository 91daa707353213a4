//! Properties shared by every material law.

use fk_core::UnitSystem;
use fk_materials::{Bilinear, CRUSH_RAMP_FRACTION, Mander, MaterialLaw, Todeschini};
use proptest::prelude::*;

fn laws() -> Vec<Box<dyn MaterialLaw>> {
    vec![
        Box::new(Todeschini::new(4.0, UnitSystem::Imperial).unwrap()),
        Box::new(Mander::new(6.0, 0.004, 0.014, UnitSystem::Imperial).unwrap()),
        Box::new(Bilinear::new(60.0, 29_000.0).unwrap()),
        Box::new(
            Bilinear::new(60.0, 29_000.0)
                .unwrap()
                .with_hardening(0.02)
                .unwrap(),
        ),
    ]
}

/// Strains at which each law changes branch.
fn breakpoints(law: &dyn MaterialLaw) -> Vec<f64> {
    let rp = law.reference_points();
    let mut points = vec![0.0, rp.peak_strain];
    if let Some(ey) = rp.yield_strain {
        points.push(ey);
        points.push(-ey);
    }
    if let Some(eu) = rp.ultimate_strain {
        points.push(eu);
        points.push(eu * (1.0 + CRUSH_RAMP_FRACTION));
    }
    points
}

#[test]
fn zero_strain_gives_zero_stress() {
    for law in laws() {
        assert_eq!(law.stress(0.0), 0.0, "{}", law.name());
    }
}

#[test]
fn stress_is_continuous_at_breakpoints() {
    let h = 1e-10;
    for law in laws() {
        let scale = law.reference_points().peak_stress;
        for e in breakpoints(law.as_ref()) {
            let left = law.stress(e - h);
            let right = law.stress(e + h);
            assert!(
                (left - right).abs() < 1e-4 * scale,
                "{} jumps at strain {}: {} vs {}",
                law.name(),
                e,
                left,
                right
            );
        }
    }
}

#[test]
fn stress_curve_spans_plot_domain() {
    for law in laws() {
        let (lo, hi) = law.plot_domain();
        let curve = law.stress_curve(lo, hi, 200);
        assert_eq!(curve.len(), 200);
        assert_eq!(curve[0].0, lo);
        assert_eq!(curve[199].0, hi);
        assert!(curve.windows(2).all(|w| w[1].0 > w[0].0));
    }
}

proptest! {
    #[test]
    fn stress_is_bounded_by_peak(strain in -0.1_f64..0.1_f64) {
        for law in laws() {
            let rp = law.reference_points();
            let sigma = law.stress(strain);
            prop_assert!(sigma.is_finite());
            if rp.yield_strain.is_none() {
                prop_assert!(sigma >= 0.0);
                prop_assert!(sigma <= rp.peak_stress * (1.0 + 1e-12));
            }
        }
    }

    #[test]
    fn steel_is_odd(strain in -0.05_f64..0.05_f64) {
        let steel = Bilinear::new(60.0, 29_000.0).unwrap();
        prop_assert!((steel.stress(strain) + steel.stress(-strain)).abs() < 1e-12);
    }

    #[test]
    fn concrete_rises_before_peak(a in 0.0_f64..0.004_f64, b in 0.0_f64..0.004_f64) {
        let core = Mander::new(6.0, 0.004, 0.014, UnitSystem::Imperial).unwrap();
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        prop_assert!(core.stress(lo) <= core.stress(hi) + 1e-12);
    }
}
