//! CLI module for the enchantment lookup tool
//!
//! ## Commands
//!
//! - `<QUERY>` - Resolve a protocol id or alias (default action)
//! - `id <ID>` - Resolve a protocol id
//! - `lookup <ALIAS>` - Resolve an alias (case-insensitive)
//! - `list` - List every enchantment type
//! - `reference` - Print the Markdown reference page
//! - `check` - Report registry integrity issues
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//! - `lookup` - Input resolution and "unknown enchantment" diagnostics
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod lookup;

use std::fmt;
use std::process;

use clap::{Parser, Subcommand};
use miette::{GraphicalReportHandler, GraphicalTheme};

use crate::render::{OutputFormat, RenderConfig};
use crate::version::ENCHANT_VERSION;
use lookup::LookupError;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<LookupError> for CliError {
    /// Render the lookup miss as a miette diagnostic (code, message, suggestion).
    fn from(err: LookupError) -> Self {
        let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
        let mut out = String::new();
        match handler.render_report(&mut out, &err) {
            Ok(()) => CliError::failure(out.trim_end()),
            Err(_) => CliError::failure(format!("Error: {err}")),
        }
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Look up enchantment types by protocol id or alias
#[derive(Parser, Debug)]
#[command(name = "enchant")]
#[command(version = ENCHANT_VERSION)]
#[command(about = "Look up enchantment types by protocol id or alias", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Protocol id or alias to resolve (default action when no subcommand given)
    #[arg(value_name = "QUERY", allow_negative_numbers = true)]
    pub query: Option<String>,

    /// Output layout
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Hide alias lists
    #[arg(long = "no-aliases", global = true)]
    pub no_aliases: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a protocol id
    Id {
        /// Numeric enchantment id, as sent by the game
        #[arg(value_name = "ID", allow_negative_numbers = true)]
        id: i32,
    },

    /// Resolve an alias (case-insensitive)
    Lookup {
        /// Alias such as `sharp` or `FireProtection`
        #[arg(value_name = "ALIAS")]
        alias: String,
    },

    /// List every enchantment type
    List,

    /// Print a Markdown reference page generated from the registry
    Reference,

    /// Check the registry for duplicate ids/aliases and other data issues
    Check,
}

impl Cli {
    /// Build the render configuration from global flags.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::new()
            .with_format(self.format)
            .with_aliases(!self.no_aliases)
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.render_config();

    match cli.command {
        Some(Command::Id { id }) => commands::show_id(id, &config),
        Some(Command::Lookup { alias }) => commands::show_alias(&alias, &config),
        Some(Command::List) => commands::list(&config),
        Some(Command::Reference) => commands::reference(),
        Some(Command::Check) => commands::check(),
        None => {
            // Default: resolve the query if provided
            if let Some(query) = cli.query {
                commands::show_query(&query, &config)
            } else {
                Err(CliError::failure(
                    "Error: expected a protocol id, an alias, or a subcommand (see --help)",
                ))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
