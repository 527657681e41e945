//! targetdoc CLI entry point
//!
//! Usage:
//!   targetdoc generate           Write {build_dir}/docs/target-list.md
//!   targetdoc list               List classified targets
//!   targetdoc builds             Show the build list
//!   targetdoc mcp                Start MCP server over stdio

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::{ColoredString, Colorize};
use tracing_subscriber::EnvFilter;

use targetdoc::buildfile::{BuildListProvider, Category, ImportWalker, Visibility};
use targetdoc::cli::{
    commands::{BuildsArgs, GenerateArgs, ListArgs, OutputFormat},
    run_mcp_server, Cli, Commands,
};
use targetdoc::config::{interpolate_config, load_config, Config};
use targetdoc::docgen::DocGenerator;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = run(cli).await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr so stdout stays clean for documents, JSON and MCP frames.
/// `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "targetdoc=debug" } else { "targetdoc=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Mcp => {
            run_mcp_server(cli.config.as_deref()).await?;
        }
        Commands::Generate(args) => {
            generate(args, cli.config.as_deref(), cli.verbose)?;
        }
        Commands::List(args) => {
            list_targets(args, cli.config.as_deref())?;
        }
        Commands::Builds(args) => {
            list_build_files(args, cli.config.as_deref())?;
        }
    }

    Ok(())
}

/// Load configuration and apply command-line path overrides
fn resolve_config(
    config_path: Option<&str>,
    build_file: Option<String>,
    build_dir: Option<String>,
) -> Result<Config> {
    let mut config = load_config(config_path)?;
    if let Some(build_file) = build_file {
        config.docs.build_file = build_file;
    }
    if let Some(build_dir) = build_dir {
        config.docs.build_dir = build_dir;
    }
    interpolate_config(&mut config);
    Ok(config)
}

fn walker_for(config: &Config) -> ImportWalker {
    ImportWalker::new(&config.docs.build_file).with_properties(config.properties.clone())
}

/// Generate the target documentation
fn generate(args: GenerateArgs, config_path: Option<&str>, verbose: bool) -> Result<()> {
    let config = resolve_config(config_path, args.build_file, args.build_dir)?;
    let generator = DocGenerator::new(&config);
    let walker = walker_for(&config);

    if args.stdout {
        let docs = generator
            .generate(&walker)
            .context("Failed to generate documentation")?;
        print!("{}", docs.document);
        return Ok(());
    }

    let (path, docs) = generator
        .write(&walker)
        .context("Failed to generate documentation")?;

    if verbose {
        eprintln!(
            "{}: {} target(s) from {} build file(s)",
            "classified".cyan(),
            docs.targets.len(),
            docs.build_files.len()
        );
    }
    println!("{}: {}", "Wrote".green(), path.display());

    Ok(())
}

fn category_label(category: Option<Category>) -> ColoredString {
    let name = category.map(|c| c.name()).unwrap_or("-");
    match category {
        Some(Category::Build) => name.green(),
        Some(Category::Wrapper) => name.magenta(),
        Some(Category::Callback) => name.cyan(),
        Some(Category::Deprecated) => name.yellow(),
        Some(Category::Helper) | None => name.normal(),
    }
}

/// List classified targets
fn list_targets(args: ListArgs, config_path: Option<&str>) -> Result<()> {
    let config = resolve_config(config_path, args.build_file, None)?;
    let (_, targets) = DocGenerator::new(&config)
        .classify_targets(&walker_for(&config))
        .context("Failed to classify targets")?;

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&serde_json::json!({
                "build_file": config.docs.build_file,
                "targets": targets
            }))?;
            println!("{}", json);
        }
        OutputFormat::Plain => {
            for target in &targets {
                println!("{}", target.name);
            }
        }
        OutputFormat::Table => {
            println!("{}: {}", "Build file".cyan(), config.docs.build_file);
            println!();
            if targets.is_empty() {
                println!("No targets found.");
            } else {
                let max_name_width = targets.iter().map(|t| t.name.len()).max().unwrap_or(10);

                for target in &targets {
                    let hidden = if target.visibility == Visibility::Hidden {
                        "hidden".dimmed().to_string()
                    } else {
                        String::new()
                    };
                    println!(
                        "  {:<10}  {:width$}  {}  {}",
                        category_label(target.category),
                        target.name,
                        target.description,
                        hidden,
                        width = max_name_width
                    );
                }
            }
        }
    }

    Ok(())
}

/// Show the build files reachable from the root build file
fn list_build_files(args: BuildsArgs, config_path: Option<&str>) -> Result<()> {
    let config = resolve_config(config_path, args.build_file, None)?;
    let build_files = walker_for(&config)
        .build_list()
        .context("Failed to read build list")?;

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&build_files)?);
        }
        OutputFormat::Plain => {
            for info in &build_files {
                println!("{}", info.path.display());
            }
        }
        OutputFormat::Table => {
            for info in &build_files {
                let name = if info.name.is_empty() {
                    "(unnamed)".dimmed()
                } else {
                    info.name.green()
                };
                println!(
                    "{}{}  {}",
                    "  ".repeat(info.level),
                    name,
                    info.path.display()
                );
            }
        }
    }

    Ok(())
}
