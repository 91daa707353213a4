//! P-M interaction envelope of the 24 x 36 in column section.

use fk_core::UnitSystem;
use fk_materials::{Bilinear, Mander, Todeschini};
use fk_section::{BarGroup, BarLayer, MeshSize, RectangularConfined, Section, SectionBuilder, SharedLaw};
use fk_solver::{PmInteractionSolver, PmParams, PmPointKind, TransverseReinforcement};
use std::sync::Arc;

const BAR: f64 = 0.79;

fn column(top: usize, mid: usize, bottom: usize) -> Section {
    let core: SharedLaw =
        Arc::new(Mander::new(6.0, 0.004, 0.014, UnitSystem::Imperial).unwrap());
    let cover: SharedLaw = Arc::new(Todeschini::new(4.0, UnitSystem::Imperial).unwrap());
    let steel: SharedLaw = Arc::new(Bilinear::new(60.0, 29_000.0).unwrap());

    let geometry = RectangularConfined {
        width: 24.0,
        height: 36.0,
        cover: 2.5,
        mesh: MeshSize::default(),
        top_bars: BarLayer::new(BAR, top),
        bottom_bars: BarLayer::new(BAR, bottom),
    };
    let mid = BarGroup {
        x0: -9.5,
        y0: 0.0,
        width: 19.0,
        height: 0.0,
        nx: mid,
        ny: 1,
        area: BAR,
        perimeter_only: true,
    };
    let mut builder =
        SectionBuilder::rectangular_confined(&geometry, core, cover, steel.clone()).unwrap();
    builder.add_bar_group("mid", &mid, steel).unwrap();
    builder.mesh(0.0).unwrap()
}

#[test]
fn special_points_match_hand_calculation() {
    let section = column(3, 2, 3);
    let result = PmInteractionSolver::new(&section, PmParams::default())
        .unwrap()
        .run()
        .unwrap();

    let ast = 8.0 * BAR;
    let p0 = 0.85 * 4.0 * (864.0 - ast) + 60.0 * ast;

    let pc = result.pure_compression().unwrap();
    assert!((pc.axial_force - p0).abs() < 1e-6 * p0);
    assert!(pc.moment.abs() < 1e-6);
    assert_eq!(pc.neutral_axis_depth, None);
    assert!((pc.phi_factor - 0.65).abs() < 1e-12);
    assert!((pc.phi_axial - 0.80 * 0.65 * p0).abs() < 1e-6 * p0);

    let pt = result.pure_tension().unwrap();
    assert!((pt.axial_force + 60.0 * ast).abs() < 1e-9);
    assert!(pt.moment.abs() < 1e-6);
    assert!((pt.phi_factor - 0.90).abs() < 1e-12);

    let balanced = result.balanced().unwrap();
    let ey = 60.0 / 29_000.0;
    let dt = 18.0 + 15.5;
    let cb = 0.003 / (0.003 + ey) * dt;
    assert!((balanced.neutral_axis_depth.unwrap() - cb).abs() < 1e-9);
    assert!((balanced.tensile_strain - ey).abs() < 1e-12);
    assert!((balanced.phi_factor - 0.65).abs() < 1e-9);
    assert!(balanced.moment > 0.0);
}

#[test]
fn rows_follow_the_sweep_order() {
    let section = column(3, 2, 3);
    let params = PmParams::default();
    let result = PmInteractionSolver::new(&section, params).unwrap().run().unwrap();
    let rows = result.rows();

    assert_eq!(rows.len(), params.points + 3);
    assert_eq!(result.kinds()[0], PmPointKind::PureCompression);
    assert_eq!(*result.kinds().last().unwrap(), PmPointKind::PureTension);

    let depths: Vec<f64> = rows.iter().filter_map(|r| r.neutral_axis_depth).collect();
    assert_eq!(depths.len(), params.points + 1);
    assert!(depths.windows(2).all(|w| w[1] < w[0]));
    assert!((depths[0] - 360.0).abs() < 1e-9);

    // Axial capacity falls as the neutral axis rises
    assert!(rows.windows(2).all(|w| w[1].axial_force <= w[0].axial_force + 1e-9));
    assert!(rows.iter().all(|r| r.moment >= -1e-6));
    assert!(rows.iter().all(|r| (0.65..=0.90).contains(&r.phi_factor)));
}

#[test]
fn spiral_columns_use_spiral_factors() {
    let section = column(3, 2, 3);
    let params = PmParams {
        transverse: TransverseReinforcement::Spiral,
        ..Default::default()
    };
    let result = PmInteractionSolver::new(&section, params).unwrap().run().unwrap();
    let pc = result.pure_compression().unwrap();
    assert!((pc.phi_factor - 0.75).abs() < 1e-12);
    assert!((pc.phi_axial - 0.85 * 0.75 * pc.axial_force).abs() < 1e-6);
}

#[test]
fn both_directions_mirror_for_symmetric_section() {
    let section = column(3, 2, 3);
    let params = PmParams {
        both_directions: true,
        ..Default::default()
    };
    let result = PmInteractionSolver::new(&section, params).unwrap().run().unwrap();
    let rows = result.rows();
    let half = params.points + 3;
    assert_eq!(rows.len(), 2 * half);
    assert_eq!(result.kinds()[half], PmPointKind::PureTension);
    assert_eq!(*result.kinds().last().unwrap(), PmPointKind::PureCompression);

    for k in 0..half {
        let pos = rows[half - 1 - k];
        let neg = rows[half + k];
        assert!((pos.axial_force - neg.axial_force).abs() < 1e-5);
        assert!((pos.moment + neg.moment).abs() < 1e-5);
    }
}

#[test]
fn plain_concrete_has_no_balanced_point() {
    let section = column(0, 0, 0);
    let result = PmInteractionSolver::new(&section, PmParams::default())
        .unwrap()
        .run()
        .unwrap();

    assert!(result.balanced().is_none());
    assert!(result.kinds().iter().all(|k| *k != PmPointKind::Balanced));
    let pc = result.pure_compression().unwrap();
    assert!((pc.axial_force - 0.85 * 4.0 * 864.0).abs() < 1e-6);
    assert_eq!(result.pure_tension().unwrap().axial_force, 0.0);
}

#[test]
fn metric_units_change_beta1_only() {
    let section = column(3, 2, 3);
    let imperial = PmInteractionSolver::new(&section, PmParams::default()).unwrap();
    let metric = PmInteractionSolver::new(
        &section,
        PmParams {
            units: UnitSystem::Metric,
            ..Default::default()
        },
    )
    .unwrap();
    // 4 "MPa" is far below 28 MPa, so the factor saturates
    assert_eq!(metric.beta1(), 0.85);
    assert!((imperial.beta1() - 0.85).abs() < 1e-12);
    assert!((imperial.nominal_compression() - metric.nominal_compression()).abs() < 1e-9);
}

#[test]
fn invalid_params_are_rejected() {
    let section = column(3, 2, 3);
    let params = PmParams {
        fy: 0.0,
        ..Default::default()
    };
    assert!(PmInteractionSolver::new(&section, params).is_err());
}
