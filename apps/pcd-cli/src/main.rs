use clap::{Parser, Subcommand};
use pcd_core::{to_bar, to_m3_per_kg};
use pcd_model::{
    CalculatorKind, DiagramPoint, ModelConstants, PhaseCalculator, PhaseError, PressureSweep,
    SweepError, SweepSpacing,
};
use std::path::{Path, PathBuf};
use thiserror::Error;

type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
enum CliError {
    #[error("{0}")]
    Phase(#[from] PhaseError),

    #[error("{0}")]
    Sweep(#[from] SweepError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser)]
#[command(name = "pcd-cli")]
#[command(about = "Phase-change diagram CLI - liquid/vapor specific volumes vs pressure", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the specific volumes at one pressure
    Eval {
        /// Pressure [bar]
        #[arg(allow_hyphen_values = true)]
        pressure: String,
        /// Calculator: interpolated or table
        #[arg(long, default_value = "interpolated")]
        model: CalculatorKind,
        /// YAML file overriding the reference constants
        #[arg(long)]
        constants: Option<PathBuf>,
    },
    /// Sweep a pressure range and export the diagram as CSV
    Sweep {
        /// Start pressure [bar]
        #[arg(long)]
        start: String,
        /// End pressure [bar]
        #[arg(long)]
        end: String,
        /// Number of points
        #[arg(long, default_value_t = 21)]
        points: usize,
        /// Logarithmic spacing
        #[arg(long)]
        log: bool,
        /// Calculator: interpolated or table
        #[arg(long, default_value = "interpolated")]
        model: CalculatorKind,
        /// YAML file overriding the reference constants
        #[arg(long)]
        constants: Option<PathBuf>,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the model constants and derived decay coefficients
    Constants {
        /// YAML file overriding the reference constants
        #[arg(long)]
        constants: Option<PathBuf>,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Eval {
            pressure,
            model,
            constants,
        } => cmd_eval(&pressure, model, constants.as_deref()),
        Commands::Sweep {
            start,
            end,
            points,
            log,
            model,
            constants,
            output,
        } => {
            let spacing = if log {
                SweepSpacing::Logarithmic
            } else {
                SweepSpacing::Linear
            };
            cmd_sweep(
                &start,
                &end,
                points,
                spacing,
                model,
                constants.as_deref(),
                output.as_deref(),
            )
        }
        Commands::Constants { constants } => cmd_constants(constants.as_deref()),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn load_constants(path: Option<&Path>) -> CliResult<ModelConstants> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading model constants");
            Ok(ModelConstants::load_yaml(path)?)
        }
        None => Ok(ModelConstants::reference()),
    }
}

fn cmd_eval(pressure: &str, kind: CalculatorKind, constants: Option<&Path>) -> CliResult<()> {
    let calc = PhaseCalculator::new(kind, load_constants(constants)?);
    let volumes = calc.evaluate(Some(pressure))?;
    println!("{}", serde_json::to_string(&volumes)?);
    Ok(())
}

fn cmd_sweep(
    start: &str,
    end: &str,
    points: usize,
    spacing: SweepSpacing,
    kind: CalculatorKind,
    constants: Option<&Path>,
    output: Option<&Path>,
) -> CliResult<()> {
    let sweep = PressureSweep::from_text(start, end, points, spacing)?;
    let calc = PhaseCalculator::new(kind, load_constants(constants)?);
    tracing::info!(%sweep, model = %kind, "running sweep");

    let rows = calc.diagram(&sweep)?;
    let csv = render_csv(&rows);

    // Write to file or stdout
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!("✓ Exported {} diagram points to {}", rows.len(), path.display());
    } else {
        print!("{}", csv);
    }

    Ok(())
}

fn cmd_constants(constants: Option<&Path>) -> CliResult<()> {
    let c = load_constants(constants)?;
    print!("{}", render_constants(&c));
    Ok(())
}

fn render_constants(c: &ModelConstants) -> String {
    format!(
        "VF0 = {} m^3/kg\nVC  = {} m^3/kg\nVG0 = {} m^3/kg\nPC  = {} bar\nB_F = {} 1/bar\nB_G = {} 1/bar\n",
        c.vf0(),
        to_m3_per_kg(c.critical_volume()),
        c.vg0(),
        to_bar(c.critical_pressure()),
        c.b_f(),
        c.b_g(),
    )
}

fn render_csv(rows: &[DiagramPoint]) -> String {
    let mut csv = String::from("pressure,specific_volume_liquid,specific_volume_vapor\n");
    for row in rows {
        csv.push_str(&format!(
            "{},{},{}\n",
            row.pressure, row.volumes.specific_volume_liquid, row.volumes.specific_volume_vapor
        ));
    }
    csv
}
