use clap::{Parser, Subcommand, ValueEnum};
use fk_app::{AppError, AppResult};
use fk_project::schema::{Project, TransverseDef};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fk")]
#[command(about = "fiberkit - fiber section analysis of reinforced concrete", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a project file and mesh its section
    Validate {
        /// Path to the project file (YAML, or JSON by extension)
        project_path: PathBuf,
    },
    /// Run moment-curvature analysis
    Mk {
        /// Path to the project file
        project_path: PathBuf,
        /// Applied axial load, compression negative (overrides the project)
        #[arg(long, allow_hyphen_values = true)]
        axial: Option<f64>,
        /// Target curvature (overrides the project)
        #[arg(long, allow_hyphen_values = true)]
        phi_target: Option<f64>,
        /// Number of curvature increments
        #[arg(long)]
        steps: Option<usize>,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Run ACI 318-19 P-M interaction analysis
    Pm {
        /// Path to the project file
        project_path: PathBuf,
        /// Lateral reinforcement type (overrides the project)
        #[arg(long, value_enum)]
        transverse: Option<TransverseArg>,
        /// Also sweep with the bottom face in compression
        #[arg(long)]
        both_directions: bool,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export fiber footprints and material curves as JSON
    Preview {
        /// Path to the project file
        project_path: PathBuf,
        /// Output JSON file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write the default column project
    Init {
        /// Path of the project file to create
        project_path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TransverseArg {
    Tied,
    Spiral,
}

impl From<TransverseArg> for TransverseDef {
    fn from(arg: TransverseArg) -> Self {
        match arg {
            TransverseArg::Tied => TransverseDef::Tied,
            TransverseArg::Spiral => TransverseDef::Spiral,
        }
    }
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Mk {
            project_path,
            axial,
            phi_target,
            steps,
            output,
        } => cmd_mk(&project_path, axial, phi_target, steps, output.as_deref()),
        Commands::Pm {
            project_path,
            transverse,
            both_directions,
            output,
        } => cmd_pm(&project_path, transverse, both_directions, output.as_deref()),
        Commands::Preview {
            project_path,
            output,
        } => cmd_preview(&project_path, output.as_deref()),
        Commands::Init {
            project_path,
            force,
        } => cmd_init(&project_path, force),
    }
}

fn cmd_validate(project_path: &Path) -> AppResult<()> {
    println!("Validating project: {}", project_path.display());
    let project = fk_app::load_project(project_path)?;
    let fibers = fk_app::validate_project(&project)?;
    println!("  Units: {}", project.units);
    println!("✓ Project is valid ({} fibers)", fibers);
    Ok(())
}

fn cmd_mk(
    project_path: &Path,
    axial: Option<f64>,
    phi_target: Option<f64>,
    steps: Option<usize>,
    output: Option<&Path>,
) -> AppResult<()> {
    let project = fk_app::load_project(project_path)?;
    let mut def = project.analysis.moment_curvature.clone().unwrap_or_default();
    if let Some(p) = axial {
        def.axial_load = p;
    }
    if let Some(phi) = phi_target {
        def.phi_target = phi;
    }
    if let Some(n) = steps {
        def.steps = n;
    }

    let section = fk_app::build_section(&project)?;
    let result = fk_app::run_moment_curvature(&section, &def)?;

    for warning in result.warnings() {
        eprintln!("warning: {}", warning);
    }
    write_output(output, &result.table().to_csv(), result.rows().len())?;

    if output.is_some() {
        let units = project.units;
        let moment_unit = format!("{}-{}", units.force_unit(), units.length_unit());
        if let Some(row) = result.first_yield() {
            println!(
                "  First tension yield: phi = {:.3e}, M = {:.1} {}",
                row.curvature, row.moment, moment_unit
            );
        }
        if let Some(row) = result.peak_moment() {
            println!(
                "  Peak moment: phi = {:.3e}, M = {:.1} {}",
                row.curvature, row.moment, moment_unit
            );
        }
    }
    Ok(())
}

fn cmd_pm(
    project_path: &Path,
    transverse: Option<TransverseArg>,
    both_directions: bool,
    output: Option<&Path>,
) -> AppResult<()> {
    let project = fk_app::load_project(project_path)?;
    let mut def = project.analysis.pm_interaction.clone().unwrap_or_default();
    if let Some(t) = transverse {
        def.transverse = t.into();
    }
    def.both_directions |= both_directions;

    let section = fk_app::build_section(&project)?;
    let result = fk_app::run_pm_interaction(&project, &section, &def)?;
    write_output(output, &result.table().to_csv(), result.rows().len())?;

    if output.is_some() {
        let force = project.units.force_unit();
        if let Some(row) = result.pure_compression() {
            println!("  Pure compression: P0 = {:.1} {}", row.axial_force, force);
        }
        if let Some(row) = result.balanced() {
            println!(
                "  Balanced: P = {:.1} {}, M = {:.1} {}-{}",
                row.axial_force,
                force,
                row.moment,
                force,
                project.units.length_unit()
            );
        }
        if let Some(row) = result.pure_tension() {
            println!("  Pure tension: P = {:.1} {}", row.axial_force, force);
        }
    }
    Ok(())
}

fn cmd_preview(project_path: &Path, output: Option<&Path>) -> AppResult<()> {
    let project = fk_app::load_project(project_path)?;
    let preview = fk_app::preview(&project)?;
    write_output(output, &preview.to_json()?, preview.fibers.len())
}

fn cmd_init(project_path: &Path, force: bool) -> AppResult<()> {
    if project_path.exists() && !force {
        return Err(AppError::Project(format!(
            "{} already exists (use --force to overwrite)",
            project_path.display()
        )));
    }
    fk_app::save_project(project_path, &Project::default())?;
    println!("✓ Wrote default project to {}", project_path.display());
    Ok(())
}

/// Write to file or stdout.
fn write_output(output: Option<&Path>, content: &str, count: usize) -> AppResult<()> {
    if let Some(path) = output {
        std::fs::write(path, content)?;
        println!("✓ Exported {} rows to {}", count, path.display());
    } else {
        print!("{}", content);
    }
    Ok(())
}
