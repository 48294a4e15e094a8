//! tslister CLI — the command-line interface for the TypeScript type lister.
//!
//! Provides `tslister list` to produce a project's external type list and
//! `tslister clean` to empty the shared result cache.

#![warn(missing_docs)]

mod clean;
mod list;
mod pipeline;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

/// tslister — list the external types of a TypeScript project.
#[derive(Parser, Debug)]
#[command(name = "tslister", version, about = "TypeScript type lister")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a custom `tslister.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the external types of a project.
    List(ListArgs),
    /// Remove every entry from the result cache.
    Clean,
}

/// Arguments for the `tslister list` subcommand.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Project root directory.
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Output format for the type list.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Skip the cache lookup and always run the engine. Fresh results are
    /// still stored.
    #[arg(long)]
    pub no_cache: bool,
}

/// Type list output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Optional path to a custom config file.
    pub config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let global = GlobalArgs {
        quiet: cli.quiet,
        config: cli.config,
    };

    let result = match cli.command {
        Command::List(ref args) => list::run(args, &global),
        Command::Clean => clean::run(&global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_list_default() {
        let cli = Cli::parse_from(["tslister", "list"]);
        match cli.command {
            Command::List(args) => {
                assert_eq!(args.dir, PathBuf::from("."));
                assert_eq!(args.format, ReportFormat::Text);
                assert!(!args.no_cache);
            }
            _ => panic!("expected List command"),
        }
    }

    #[test]
    fn parse_list_with_args() {
        let cli = Cli::parse_from([
            "tslister",
            "list",
            "web/MyProject",
            "--format",
            "json",
            "--no-cache",
        ]);
        match cli.command {
            Command::List(args) => {
                assert_eq!(args.dir, PathBuf::from("web/MyProject"));
                assert_eq!(args.format, ReportFormat::Json);
                assert!(args.no_cache);
            }
            _ => panic!("expected List command"),
        }
    }

    #[test]
    fn parse_clean() {
        let cli = Cli::parse_from(["tslister", "clean"]);
        assert!(matches!(cli.command, Command::Clean));
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::parse_from(["tslister", "--quiet", "--config", "alt.toml", "list"]);
        assert!(cli.quiet);
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
    }
}
