//! Main CLI application for the toroidal Game of Life

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{debug, warn};
use std::path::PathBuf;
use toroidal_life::{
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::PatternKind,
    simulation::{JsonRenderer, Renderer, Simulation, TerminalRenderer},
    utils::ColorOutput,
};

#[derive(Parser)]
#[command(name = "toroidal_life")]
#[command(about = "Conway's Game of Life on a toroidal grid")]
#[command(version = "0.1.0")]
struct Cli {
    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation (default)
    Run(RunArgs),

    /// Create a default configuration file
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args, Default)]
struct RunArgs {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid side length (overrides config)
    #[arg(short, long)]
    size: Option<usize>,

    /// Number of generations (overrides config)
    #[arg(short, long)]
    generations: Option<u64>,

    /// Delay between generations in milliseconds (overrides config)
    #[arg(short, long)]
    delay_ms: Option<u64>,

    /// Seed pattern (overrides config)
    #[arg(short, long, value_enum)]
    pattern: Option<PatternKind>,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Print frames one after another instead of clearing the screen
    #[arg(long)]
    no_clear: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.unwrap_or_else(|| Commands::Run(RunArgs::default())) {
        Commands::Run(args) => run_command(args),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn load_settings(args: &RunArgs) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) if path.exists() => Settings::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        Some(path) => {
            warn!("config file {} not found, using defaults", path.display());
            Settings::default()
        }
        None => Settings::default(),
    };

    let cli_overrides = CliOverrides {
        size: args.size,
        generations: args.generations,
        delay_ms: args.delay_ms,
        pattern: args.pattern,
        format: args.format,
        no_clear: args.no_clear,
    };
    settings.merge_with_cli(&cli_overrides);

    settings.validate().context("Configuration validation failed")?;
    Ok(settings)
}

fn run_command(args: RunArgs) -> Result<()> {
    let settings = load_settings(&args)?;
    debug!("settings: {:?}", settings);

    let mut renderer: Box<dyn Renderer> = match settings.display.format {
        OutputFormat::Text => Box::new(TerminalRenderer::stdout(settings.display.clone())),
        OutputFormat::Json => Box::new(JsonRenderer::stdout()),
    };

    let mut simulation = Simulation::new(settings)
        .context("Failed to create simulation")?;
    simulation.run(renderer.as_mut())?;

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up configuration..."));

    let config_dir = directory.join("config");
    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create directory {}", config_dir.display()))?;

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default().to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("{}", ColorOutput::warning(&format!(
            "Skipped: {} (already exists)", config_path.display()
        )));
    }

    // One variant per non-default pattern, small enough to read at a glance
    let variants_dir = config_dir.join("patterns");
    for kind in [PatternKind::Block, PatternKind::Blinker, PatternKind::Beacon] {
        let mut variant = Settings::default();
        variant.grid.size = 10;
        variant.simulation.generations = 20;
        variant.pattern.kind = kind;

        let variant_path = variants_dir.join(format!("{}.yaml", kind));
        if variant_path.exists() && !force {
            println!("Skipped: {} (already exists)", variant_path.display());
            continue;
        }
        variant.to_file(&variant_path)
            .with_context(|| format!("Failed to create {} configuration", kind))?;
    }
    println!("Created pattern configurations in: {}", variants_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nRun: toroidal_life run --config {}", config_path.display());

    Ok(())
}
