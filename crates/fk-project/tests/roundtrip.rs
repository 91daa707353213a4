use fk_core::UnitSystem;
use fk_project::schema::*;
use fk_project::{from_yaml_str, load, load_json, load_yaml, save_json, save_yaml};

#[test]
fn roundtrip_yaml_default_project() {
    let project = Project::default();

    let path = std::env::temp_dir().join("fk_project_roundtrip_default.yaml");
    save_yaml(&path, &project).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn roundtrip_json_with_bar_groups() {
    let mut project = Project {
        name: "Wall pier".to_string(),
        units: UnitSystem::Metric,
        ..Project::default()
    };
    project.section.bar_groups.push(BarGroupDef {
        id: "boundary".to_string(),
        x0: -200.0,
        y0: -300.0,
        width: 400.0,
        height: 600.0,
        nx: 3,
        ny: 4,
        area: 200.0,
        perimeter_only: true,
    });
    project.section.width = 600.0;
    project.section.height = 900.0;
    project.section.cover = 60.0;
    project.section.mesh_dx = 20.0;
    project.section.mesh_dy = 20.0;
    project.analysis.pm_interaction = Some(PmInteractionDef {
        transverse: TransverseDef::Spiral,
        both_directions: true,
        ..PmInteractionDef::default()
    });

    let path = std::env::temp_dir().join("fk_project_roundtrip_groups.json");
    save_json(&path, &project).unwrap();
    assert_eq!(load_json(&path).unwrap(), project);
    assert_eq!(load(&path).unwrap(), project);
}

#[test]
fn minimal_yaml_uses_column_defaults() {
    let yaml = r#"
version: 1
name: Minimal
"#;
    let project = from_yaml_str(yaml).unwrap();
    assert_eq!(project.units, UnitSystem::Imperial);
    assert_eq!(project.section, SectionDef::default());
    assert_eq!(project.materials, MaterialsDef::default());
    let mk = project.analysis.moment_curvature.unwrap();
    assert_eq!(mk.axial_load, -180.0);
    assert_eq!(mk.phi_target, 0.0002);
}

#[test]
fn partial_sections_fill_optional_fields() {
    let yaml = r#"
version: 1
name: Narrow
units: metric
section:
  width: 300
  height: 500
  cover: 40
  top_bars: { area: 314, count: 2 }
  bottom_bars: { area: 314, count: 4, rows: 2, row_spacing: 50 }
analysis:
  pm_interaction:
    transverse: spiral
"#;
    let project = from_yaml_str(yaml).unwrap();
    assert_eq!(project.units, UnitSystem::Metric);
    assert_eq!(project.section.mesh_dx, 0.85);
    assert_eq!(project.section.mid_bars.count, 0);
    assert_eq!(project.section.top_bars.rows, 1);
    assert_eq!(project.section.bottom_bars.rows, 2);
    assert!(project.analysis.moment_curvature.is_none());
    let pm = project.analysis.pm_interaction.unwrap();
    assert_eq!(pm.transverse, TransverseDef::Spiral);
    assert_eq!(pm.points, 100);
}

#[test]
fn version_zero_is_migrated() {
    let yaml = r#"
version: 0
name: Legacy
"#;
    let project = from_yaml_str(yaml).unwrap();
    assert_eq!(project.version, fk_project::LATEST_VERSION);
    assert_eq!(project.units, UnitSystem::Imperial);
}

#[test]
fn invalid_file_is_rejected_on_load() {
    let yaml = r#"
version: 1
name: Bad rotation
section:
  width: 24
  height: 36
  cover: 2.5
  rotate_deg: 360
"#;
    let err = from_yaml_str(yaml).unwrap_err();
    assert!(err.to_string().contains("rotate_deg"));
}
