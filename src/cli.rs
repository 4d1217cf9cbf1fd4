// CLI module - command-line argument parsing and handlers
//
// Subcommands run headless and exit without starting the TUI:
// - config --show / --path / --reset: configuration management
// - diagram <architecture> [--step N]: print a diagram layout as JSON
// - catalog: list the built-in architectures and use cases

use crate::animator::AnimationState;
use crate::config::{Config, VERSION};
use crate::diagram;
use crate::model::Catalog;
use clap::{Parser, Subcommand};
use std::io::Write;

/// Exit status for an unknown architecture id
const EXIT_UNKNOWN_ARCHITECTURE: i32 = 2;

/// identity-lens - Compare traditional, blockchain and hybrid identity systems
#[derive(Parser)]
#[command(name = "identity-lens")]
#[command(version = VERSION)]
#[command(
    about = "Terminal dashboard comparing identity management architectures",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Skip the overwrite confirmation for --reset
        #[arg(long, short = 'y')]
        yes: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },

    /// Print an architecture diagram layout as JSON
    Diagram {
        /// Architecture id: traditional, blockchain, hybrid
        architecture: String,

        /// Animation step to render (taken modulo the flow count)
        #[arg(long)]
        step: Option<usize>,
    },

    /// List built-in architectures and use cases
    Catalog,
}

/// Handle CLI commands. Returns true if a command was handled (exit after).
pub fn handle_cli(cli: &Cli) -> bool {
    match &cli.command {
        Some(Commands::Config {
            show,
            reset,
            yes,
            path,
        }) => {
            if *path {
                handle_config_path();
            } else if *show {
                handle_config_show();
            } else if *reset {
                handle_config_reset(*yes);
            } else {
                println!("Usage: identity-lens config [--show|--reset [--yes]|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
            }
            true
        }
        Some(Commands::Diagram { architecture, step }) => {
            handle_diagram(architecture, *step);
            true
        }
        Some(Commands::Catalog) => {
            handle_catalog();
            true
        }
        None => false, // No subcommand, run the TUI
    }
}

fn load_catalog() -> Catalog {
    match Catalog::builtin() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error: built-in catalog is invalid: {}", e);
            std::process::exit(1);
        }
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
    match &config.state_file {
        Some(state) => println!("# State file: {}", state.display()),
        None => println!("# State file: none (in-memory)"),
    }
}

fn handle_config_reset(yes: bool) {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if path.exists() && !yes {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        let _ = std::io::stderr().flush();

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err()
            || !input.trim().eq_ignore_ascii_case("y")
        {
            println!("Aborted.");
            return;
        }
    }

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            std::process::exit(1);
        }
    }

    // Write the default config (using Config's single source of truth)
    if let Err(e) = std::fs::write(&path, Config::default().to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}

/// Animation state for `diagram --step`; `None` renders the static view
fn requested_state(step: Option<usize>, flow_count: usize) -> AnimationState {
    match step {
        Some(step) if flow_count > 0 => AnimationState::at_step(step % flow_count),
        _ => AnimationState::STATIC,
    }
}

fn handle_diagram(id: &str, step: Option<usize>) {
    let catalog = load_catalog();
    let Some(architecture) = catalog.architecture(id) else {
        eprintln!(
            "Error: unknown architecture '{}' (expected traditional, blockchain or hybrid)",
            id
        );
        std::process::exit(EXIT_UNKNOWN_ARCHITECTURE);
    };

    let state = requested_state(step, architecture.flows.len());
    let layout = diagram::layout(architecture, state);

    match serde_json::to_string_pretty(&layout) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing diagram: {}", e);
            std::process::exit(1);
        }
    }
}

fn handle_catalog() {
    let catalog = load_catalog();

    println!("Architectures:");
    for architecture in catalog.architectures() {
        println!(
            "  {:<12} {:<36} {} nodes, {} flows",
            architecture.id.id(),
            architecture.name,
            architecture.nodes.len(),
            architecture.flows.len()
        );
    }

    println!();
    println!("Use cases:");
    for use_case in catalog.use_cases() {
        println!(
            "  {:<20} {:<32} {}",
            use_case.id,
            use_case.name,
            use_case.system_type.label()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn diagram_subcommand_parses_step() {
        let cli = Cli::try_parse_from(["identity-lens", "diagram", "hybrid", "--step", "3"]).unwrap();
        match cli.command {
            Some(Commands::Diagram { architecture, step }) => {
                assert_eq!(architecture, "hybrid");
                assert_eq!(step, Some(3));
            }
            _ => panic!("expected diagram command"),
        }
    }

    #[test]
    fn step_wraps_modulo_flow_count() {
        assert_eq!(requested_state(Some(9), 6), AnimationState::at_step(3));
        assert_eq!(requested_state(None, 6), AnimationState::STATIC);
        assert_eq!(requested_state(Some(2), 0), AnimationState::STATIC);
    }
}
