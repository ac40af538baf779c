//! CLI command implementations
//!
//! Every command returns `CliResult<ExitCode>`; printing happens here, exiting happens in `cli::run`.

use enchant_core::{EnchantmentInfo, registry};

use super::lookup::{self, LookupError};
use super::{CliError, CliResult, ExitCode};
use crate::render::{self, RenderConfig};

/// Resolve a protocol id and print the record.
#[tracing::instrument(skip(config))]
pub fn show_id(id: i32, config: &RenderConfig) -> CliResult<ExitCode> {
    print_record(lookup::find_by_id(id), config)
}

/// Resolve an alias and print the record.
#[tracing::instrument(skip(config))]
pub fn show_alias(alias: &str, config: &RenderConfig) -> CliResult<ExitCode> {
    print_record(lookup::find_by_alias(alias), config)
}

/// Resolve an id-or-alias query and print the record (default action).
#[tracing::instrument(skip(config))]
pub fn show_query(query: &str, config: &RenderConfig) -> CliResult<ExitCode> {
    print_record(lookup::find(query), config)
}

/// Print every record in declaration order.
#[tracing::instrument(skip_all)]
pub fn list(config: &RenderConfig) -> CliResult<ExitCode> {
    let out = render::render_list(registry().iter(), config);
    if !out.is_empty() {
        println!("{out}");
    }
    Ok(ExitCode::SUCCESS)
}

/// Print the Markdown reference page.
pub fn reference() -> CliResult<ExitCode> {
    print!("{}", render::render_reference());
    Ok(ExitCode::SUCCESS)
}

/// Report registry integrity issues. Fails if there are any.
#[tracing::instrument]
pub fn check() -> CliResult<ExitCode> {
    let reg = registry();
    let issues = reg.issues();
    if issues.is_empty() {
        println!(
            "ok: {} enchantments, {} aliases",
            reg.len(),
            reg.alias_keys().count()
        );
        return Ok(ExitCode::SUCCESS);
    }

    for issue in issues {
        eprintln!("- {issue}");
    }
    Err(CliError::failure(format!(
        "Error: {} registry integrity issue(s) found",
        issues.len()
    )))
}

fn print_record(found: Result<&'static EnchantmentInfo, LookupError>, config: &RenderConfig) -> CliResult<ExitCode> {
    let info = found.map_err(CliError::from)?;
    tracing::debug!(id = info.id, kind = ?info.kind, "resolved enchantment");
    println!("{}", render::render_record(info, config));
    Ok(ExitCode::SUCCESS)
}
