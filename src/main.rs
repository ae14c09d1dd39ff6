//! gridsmith: generate and splice Symbols grid-selection components.
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use gridsmith::{component, config, patch, report, routes};
use std::io;
use std::path::Path;
use std::{fs, process};

#[derive(Parser)]
#[command(name = "gridsmith")]
#[command(about = "Generate and splice Symbols grid-selection components", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Clone the template repository into a new project directory
    Init {
        /// Directory name for the new project
        #[arg(value_name = "PROJECT")]
        name: String,
    },
    /// Generate the GridSelection component and splice it into the project
    Create {
        /// Number of columns
        #[arg(long, short = 'x', value_name = "N",
              value_parser = clap::value_parser!(u32).range(1..))]
        columns: Option<u32>,
        /// Number of rows
        #[arg(long, short = 'y', value_name = "N",
              value_parser = clap::value_parser!(u32).range(1..))]
        rows: Option<u32>,
        /// Print a JSON report instead of progress messages
        #[arg(long)]
        json: bool,
    },
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let cfg = config::Config::load();

    match args.command {
        Cmd::Init { name } => init_project(&name, &cfg),
        Cmd::Create {
            columns,
            rows,
            json,
        } => {
            // Command line args override config defaults
            let spec = component::GridSpec {
                columns: columns.unwrap_or(cfg.columns),
                rows: rows.unwrap_or(cfg.rows),
            };
            create(spec, &cfg, json)
        }
    }
}

/// Clone the template repository and print next steps.
fn init_project(name: &str, cfg: &config::Config) -> io::Result<()> {
    println!("Cloning template repository into {name}...");
    let status = process::Command::new("git")
        .args(["clone", &cfg.template_repo, name])
        .status()?;
    if !status.success() {
        return Err(io::Error::other(format!("git clone exited with {status}")));
    }

    println!("\nProject {name} created successfully!");
    println!("\nNext steps:");
    println!("  cd {name}");
    println!("  npm install");
    println!("  npm start");
    println!("\nTo generate a custom grid:");
    println!("  gridsmith create -x 20 -y 10");
    Ok(())
}

/// Generate the component, patch both documents, and persist the results.
///
/// The components document is required; the pages document is patched only
/// when present and written only when registration changed it. Each document
/// is fully patched in memory before anything is written, so a failure never
/// leaves a half-transformed file behind.
fn create(spec: component::GridSpec, cfg: &config::Config, json: bool) -> io::Result<()> {
    let components_path = Path::new(&cfg.components_path);
    if !components_path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!(
                "{} not found. Make sure you are in a Symbols project directory.",
                cfg.components_path
            ),
        ));
    }

    let document = fs::read_to_string(components_path)?;
    let fragment = spec.render();
    let patched = patch::patch_declaration(&document, component::DECLARATION_NAME, &fragment);
    let components_outcome = patched.outcome;
    fs::write(components_path, patched.text)?;

    let pages_path = Path::new(&cfg.pages_path);
    let pages_outcome = if pages_path.exists() {
        let pages = fs::read_to_string(pages_path)?;
        let (text, outcome) =
            routes::ensure_route(&pages, routes::MARKER, "/", routes::ROUTE_BLOCK);
        if outcome == routes::RouteOutcome::Registered {
            fs::write(pages_path, text)?;
        }
        Some(outcome)
    } else {
        None
    };

    if json {
        let summary = report::CreateReport {
            columns: spec.columns,
            rows: spec.rows,
            total_cells: spec.total_cells(),
            components: components_outcome,
            pages: pages_outcome,
        };
        let out = serde_json::to_string_pretty(&summary).map_err(io::Error::other)?;
        println!("{out}");
        return Ok(());
    }

    if components_outcome == patch::PatchOutcome::Replaced {
        println!(
            "Updated {} component with {}x{} grid",
            component::DECLARATION_NAME,
            spec.columns,
            spec.rows
        );
    } else {
        println!(
            "Added {} component with {}x{} grid",
            component::DECLARATION_NAME,
            spec.columns,
            spec.rows
        );
    }
    match pages_outcome {
        Some(routes::RouteOutcome::Registered) => {
            println!(
                "Updated {} to include {} component",
                cfg.pages_path,
                component::DECLARATION_NAME
            );
        }
        Some(routes::RouteOutcome::AnchorMissing) => {
            eprintln!(
                "Warning: no '/' route found in {}; register {} manually",
                cfg.pages_path,
                component::DECLARATION_NAME
            );
        }
        _ => {}
    }

    println!("\nGrid component generated successfully!");
    println!("Grid size: {} columns x {} rows", spec.columns, spec.rows);
    println!("Total cells: {}", spec.total_cells());
    println!("\nRun 'npm start' to see your grid in action.");
    Ok(())
}
