//! icongen CLI - embed vector icons into a generated C header
//!
//! Usage: icongen <COMMAND>
//!
//! Commands:
//!   generate  Write the icon header
//!   check     Verify the icon header is up to date
//!   module    Show the module manifest

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use icongen::config::{env_symbol_prefix, Config, CONFIG_FILE_NAME, ENV_SYMBOL_PREFIX};
use icongen::{IconGenerator, Verbosity};

/// icongen - embed vector icons into a generated C header
#[derive(Parser, Debug)]
#[command(name = "icongen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file (defaults to ./icongen.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the icon header
    Generate(InputArgs),

    /// Verify the icon header is up to date (exits non-zero if not)
    Check(InputArgs),

    /// Show the module manifest
    Module,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Icon files, in the order they are embedded
    inputs: Vec<PathBuf>,

    /// Path of the generated header
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory scanned for icons when no inputs are given
    #[arg(long)]
    icons_dir: Option<PathBuf>,

    /// Prefix of the generated C identifiers
    #[arg(long)]
    prefix: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, config_path) = load_config(cli.config.as_deref())?;
    init_tracing(config.output.verbosity, cli.verbose);

    match cli.command {
        Commands::Generate(args) => cmd_generate(config, &config_path, &args, cli.json),
        Commands::Check(args) => cmd_check(config, &config_path, &args, cli.json),
        Commands::Module => cmd_module(cli.json),
    }
}

fn load_config(explicit: Option<&Path>) -> Result<(Config, PathBuf)> {
    let (config, warnings, path) = match explicit {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            (config.with_env_overrides(), warnings, path.to_path_buf())
        }
        None => {
            let (config, warnings) = Config::load_or_default(None)?;
            (config, warnings, PathBuf::from(CONFIG_FILE_NAME))
        }
    };

    // Logging is not set up yet, so warnings go straight to stderr.
    for w in &warnings {
        match w.line {
            Some(line) => eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, w.file.display(), line),
            None => eprintln!("⚠ Unknown config key '{}' in {}", w.key, w.file.display()),
        }
        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?", suggestion);
        }
    }

    Ok((config, path))
}

fn init_tracing(verbosity: Verbosity, flag_count: u8) {
    let directive = if flag_count >= 3 {
        "trace"
    } else {
        verbosity.raised_by(flag_count).filter_directive()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Everything a generate/check run needs, after CLI flags are applied.
struct Plan {
    generator: IconGenerator,
    output: PathBuf,
    inputs: Vec<PathBuf>,
}

fn build_plan(mut config: Config, config_path: &Path, args: &InputArgs) -> Result<Plan> {
    // Validate once every override is applied, naming where the prefix came from.
    let origin = if let Some(prefix) = &args.prefix {
        config.generator.symbol_prefix = prefix.clone();
        Path::new("--prefix")
    } else if env_symbol_prefix().is_some() {
        Path::new(ENV_SYMBOL_PREFIX)
    } else {
        config_path
    };
    config.validate(origin)?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| config.generator.output.clone());
    let inputs = resolve_inputs(args, &config)?;

    tracing::debug!(
        output = %output.display(),
        inputs = inputs.len(),
        prefix = %config.generator.symbol_prefix,
        "resolved generation plan"
    );

    Ok(Plan {
        generator: IconGenerator::new(config.symbols()),
        output,
        inputs,
    })
}

/// Positional inputs, then `--icons-dir`, then configured sources, then the
/// configured icon directory.
fn resolve_inputs(args: &InputArgs, config: &Config) -> Result<Vec<PathBuf>> {
    if !args.inputs.is_empty() {
        return Ok(args.inputs.clone());
    }

    let generator = &config.generator;
    let dir = match &args.icons_dir {
        Some(dir) => dir,
        None if !generator.sources.is_empty() => return Ok(generator.sources.clone()),
        None => &generator.icons_dir,
    };

    let found = icongen::models::discover_icons(dir, &generator.extension)
        .with_context(|| format!("failed to scan icon directory {}", dir.display()))?;
    if found.is_empty() {
        anyhow::bail!(
            "no .{} icons found in {}",
            generator.extension,
            dir.display()
        );
    }
    Ok(found)
}

fn cmd_generate(config: Config, config_path: &Path, args: &InputArgs, json: bool) -> Result<()> {
    let plan = build_plan(config, config_path, args)?;

    if !json {
        println!("🎨 icongen generate");
        println!("Output: {}", plan.output.display());
    }

    let header = plan
        .generator
        .generate(&plan.output, &plan.inputs)
        .context("icon header generation failed")?;
    let artifact = &header.artifact;
    let hash = header.hash();

    if json {
        let output = serde_json::json!({
            "event": "generate",
            "status": "success",
            "output": plan.output.display().to_string(),
            "count": artifact.count(),
            "hash": hash,
            "symbols": plan.generator.symbols(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("\n✓ Embedded {} icons", artifact.count());
        for name in artifact.names() {
            println!("    - {}", name);
        }
        println!("  {}", hash);
        println!();
    }

    Ok(())
}

fn cmd_check(config: Config, config_path: &Path, args: &InputArgs, json: bool) -> Result<()> {
    use icongen::CheckOutcome;

    let plan = build_plan(config, config_path, args)?;
    let outcome = icongen::check(&plan.generator, &plan.output, &plan.inputs)
        .context("icon header check failed")?;

    if json {
        let output = serde_json::json!({
            "event": "check",
            "status": outcome.status(),
            "output": plan.output.display().to_string(),
            "inputs": plan.inputs.len(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("🔍 icongen check");
        println!("Output: {}", plan.output.display());
        println!();
        match &outcome {
            CheckOutcome::UpToDate => println!("🟢 Header is up to date"),
            CheckOutcome::Missing => println!("🔴 Header is missing. Run `icongen generate`."),
            CheckOutcome::Stale { diff } => {
                print!("{}", diff);
                println!();
                println!("🔴 Header is stale. Run `icongen generate`.");
            }
        }
    }

    if !outcome.is_up_to_date() {
        std::process::exit(1);
    }
    Ok(())
}

fn cmd_module(json: bool) -> Result<()> {
    let module = icongen::ND_MODULE;

    if json {
        let output = serde_json::json!({
            "event": "module",
            "doc_classes": module.doc_classes,
            "doc_path": module.doc_path,
            "icons_path": module.icons_path,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("📦 Module manifest");
        println!("Docs:  {}", module.doc_path);
        println!("Icons: {}", module.icons_path);
        println!("\nDocumentation classes ({}):", module.doc_classes.len());
        for class in module.doc_classes {
            println!("  - {}", class);
        }
    }

    Ok(())
}
