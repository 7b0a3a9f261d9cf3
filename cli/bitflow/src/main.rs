//! bitflow CLI — drives an FPGA device-compiler toolchain to produce
//! emulator, report, simulator, and hardware artifacts from one source
//! unit.

mod commands;
mod manifest;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};

use bitflow_config::BuildOverrides;
use manifest::Manifest;

#[derive(Parser)]
#[command(name = "bitflow", version, about = "FPGA build-flow orchestrator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the selected targets (default: emulator and report)
    Build {
        /// Target names (emulator, report, simulator, hardware)
        targets: Vec<String>,

        #[command(flatten)]
        overrides: OverrideArgs,

        /// Device compiler binary (overrides the manifest)
        #[arg(long)]
        toolchain: Option<String>,

        /// Source compilation unit (overrides the manifest)
        #[arg(long)]
        source: Option<PathBuf>,

        /// Print invocations without running the toolchain
        #[arg(long)]
        dry_run: bool,

        /// Stop at the first failing target
        #[arg(long)]
        fail_fast: bool,
    },

    /// Show the composed flags for the selected targets
    Flags {
        /// Target names (emulator, report, simulator, hardware)
        targets: Vec<String>,

        #[command(flatten)]
        overrides: OverrideArgs,

        /// Export format (json)
        #[arg(long)]
        export: Option<String>,
    },

    /// Board capability registry
    Boards {
        #[command(subcommand)]
        action: BoardsAction,
    },

    /// Check toolchain and project status
    Doctor {
        /// Check a specific device compiler binary
        #[arg(long)]
        toolchain: Option<String>,
    },

    /// Remove build artifacts
    Clean,

    /// Create a new bitflow project
    Init {
        /// Project name
        name: String,
    },
}

#[derive(Subcommand)]
enum BoardsAction {
    /// List registered board descriptors
    List,
    /// Describe one board descriptor
    Describe {
        /// Board descriptor
        id: String,
    },
}

/// Build-parameter overrides shared by `build` and `flags`.
#[derive(Args)]
struct OverrideArgs {
    /// Target board descriptor
    #[arg(long)]
    board: Option<String>,

    /// Enable hardware profiling instrumentation
    #[arg(long)]
    profile: bool,

    /// Compile for the large sensor array geometry
    #[arg(long)]
    large_sensor_array: bool,

    /// Explicit sensor count constant
    #[arg(long)]
    num_sensors: Option<u32>,

    /// Lower bound on QR-decomposition iterations
    #[arg(long)]
    qrd_min_iterations: Option<u32>,

    /// Flags appended verbatim (and last) to the hardware link stage
    #[arg(long, allow_hyphen_values = true)]
    extra_hardware_flags: Option<String>,
}

impl OverrideArgs {
    /// Command-line flags as a sparse override layer. Boolean flags can
    /// only switch features on; leaving them off defers to the manifest.
    fn into_overrides(self) -> BuildOverrides {
        BuildOverrides {
            board: self.board,
            profiling: self.profile.then_some(true),
            large_sensor_array: self.large_sensor_array.then_some(true),
            num_sensors: self.num_sensors,
            qrd_min_iterations: self.qrd_min_iterations,
            extra_hardware_flags: self.extra_hardware_flags,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Build {
            targets,
            overrides,
            toolchain,
            source,
            dry_run,
            fail_fast,
        } => {
            let (manifest, project_dir) = load_manifest_required(&cwd)?;
            commands::build::run(
                &project_dir,
                &manifest,
                &targets,
                overrides.into_overrides(),
                toolchain.as_deref(),
                source.as_deref(),
                dry_run,
                fail_fast,
            )
        }

        Commands::Flags {
            targets,
            overrides,
            export,
        } => {
            let (manifest, project_dir) = load_manifest_required(&cwd)?;
            commands::flags::run(
                &project_dir,
                &manifest,
                &targets,
                overrides.into_overrides(),
                export.as_deref(),
            )
        }

        Commands::Boards { action } => match action {
            BoardsAction::List => commands::boards::list(),
            BoardsAction::Describe { id } => commands::boards::describe(&id),
        },

        Commands::Doctor { toolchain } => commands::doctor::run(&cwd, toolchain.as_deref()),

        Commands::Clean => {
            let project_dir = match Manifest::find_and_load(&cwd)? {
                Some((_, dir)) => dir,
                None => cwd,
            };
            commands::clean::run(&project_dir)
        }

        Commands::Init { name } => commands::init::run(&name),
    }
}

/// Load the manifest, erroring if none is found.
fn load_manifest_required(cwd: &Path) -> anyhow::Result<(Manifest, PathBuf)> {
    match Manifest::find_and_load(cwd)? {
        Some((manifest, dir)) => Ok((manifest, dir)),
        None => anyhow::bail!("no bitflow.toml found (run `bitflow init` first)"),
    }
}
