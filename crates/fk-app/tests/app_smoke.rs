//! End-to-end: project file -> section -> analyses -> CSV.

use fk_app::{
    FiberShape, build_section, load_project, preview, run_moment_curvature, run_pm_interaction,
    save_project, validate_project,
};
use fk_project::schema::{BarGroupDef, Project};
use fk_results::{MomentCurvatureRow, PmRow, ResultTable};

#[test]
fn default_project_runs_both_analyses() {
    let project = Project::default();
    let section = build_section(&project).unwrap();
    assert_eq!(section.node_fibers().count(), 8);

    let mk_def = project.analysis.moment_curvature.clone().unwrap();
    let mk = run_moment_curvature(&section, &mk_def).unwrap();
    assert_eq!(mk.rows().len(), mk_def.steps + 1);
    assert!(mk.is_converged());

    let pm_def = project.analysis.pm_interaction.clone().unwrap();
    let pm = run_pm_interaction(&project, &section, &pm_def).unwrap();
    assert!(pm.balanced().is_some());

    // Tables survive a CSV round trip
    let mk_csv = mk.table().to_csv();
    assert_eq!(
        ResultTable::<MomentCurvatureRow>::from_csv(&mk_csv).unwrap(),
        *mk.table()
    );
    let pm_csv = pm.table().to_csv();
    assert_eq!(ResultTable::<PmRow>::from_csv(&pm_csv).unwrap(), *pm.table());
}

#[test]
fn save_load_validate_cycle() {
    let mut project = Project::default();
    project.name = "Cycle".to_string();
    project.section.bar_groups.push(BarGroupDef {
        id: "sides".to_string(),
        x0: -9.5,
        y0: -8.0,
        width: 19.0,
        height: 16.0,
        nx: 2,
        ny: 3,
        area: 0.44,
        perimeter_only: true,
    });

    let path = std::env::temp_dir().join("fk_app_cycle.yaml");
    save_project(&path, &project).unwrap();
    let loaded = load_project(&path).unwrap();
    assert_eq!(loaded, project);

    let fibers = validate_project(&loaded).unwrap();
    let section = build_section(&loaded).unwrap();
    assert_eq!(fibers, section.fibers().len());
    // 8 layer bars + 6 group bars (2 x 3 grid, all on the perimeter)
    assert_eq!(section.node_fibers().count(), 14);
}

#[test]
fn mesh_errors_surface_from_validation() {
    let mut project = Project::default();
    project.section.bar_groups.push(BarGroupDef {
        id: "bad".to_string(),
        x0: 0.0,
        y0: 0.0,
        width: 1.0,
        height: 1.0,
        nx: 1,
        ny: 1,
        area: -1.0,
        perimeter_only: false,
    });
    assert!(validate_project(&project).is_err());
}

#[test]
fn preview_lists_fibers_and_curves() {
    let project = Project::default();
    let preview = preview(&project).unwrap();

    assert_eq!(preview.materials.len(), 3);
    assert!(preview.materials.iter().all(|c| c.points.len() == 200));
    assert!((preview.concrete_area - 864.0).abs() < 1e-9);

    let circles = preview
        .fibers
        .iter()
        .filter(|f| matches!(f.shape, FiberShape::Circle { .. }))
        .count();
    assert_eq!(circles, 8);

    let json = preview.to_json().unwrap();
    assert!(json.contains("\"kind\": \"polygon\""));
    assert!(json.contains("Concrete-Confined"));
}
