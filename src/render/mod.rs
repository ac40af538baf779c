//! Text renderers for enchantment records.
//!
//! ## Modules
//!
//! - `config` - Output layout options ([`RenderConfig`])
//! - `markdown` - Generated Markdown reference page
//!
//! All renderers are pure: they return a `String` without a trailing newline and leave printing to the caller.

pub mod config;
pub mod markdown;

pub use config::{OutputFormat, RenderConfig};
pub use markdown::render_reference;

use enchant_core::EnchantmentInfo;
use serde_json::{Value, json};

/// Render a single record.
///
/// JSON output is an object; the other layouts are the one-row form of [`render_list`].
pub fn render_record(info: &EnchantmentInfo, config: &RenderConfig) -> String {
    match config.format {
        OutputFormat::Json => format!("{:#}", record_json(info, config.show_aliases)),
        _ => render_list([info], config),
    }
}

/// Render records in iteration order.
pub fn render_list<'a>(entries: impl IntoIterator<Item = &'a EnchantmentInfo>, config: &RenderConfig) -> String {
    let entries: Vec<&EnchantmentInfo> = entries.into_iter().collect();
    match config.format {
        OutputFormat::Plain => entries
            .iter()
            .map(|e| plain_line(e, config.show_aliases))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Table => table(&entries, config.show_aliases),
        OutputFormat::Json => {
            let items: Vec<Value> = entries.iter().map(|e| record_json(e, config.show_aliases)).collect();
            format!("{:#}", Value::Array(items))
        }
    }
}

fn plain_line(info: &EnchantmentInfo, show_aliases: bool) -> String {
    if show_aliases {
        format!("{} {} ({})", info.id, info.name, info.aliases.join(", "))
    } else {
        format!("{} {}", info.id, info.name)
    }
}

fn table(entries: &[&EnchantmentInfo], show_aliases: bool) -> String {
    let id_width = entries
        .iter()
        .map(|e| e.id.to_string().len())
        .chain(["ID".len()])
        .max()
        .unwrap_or(2);
    let name_width = entries
        .iter()
        .map(|e| e.name.len())
        .chain(["NAME".len()])
        .max()
        .unwrap_or(4);

    let row = |id: &str, name: &str, aliases: &str| {
        let line = if show_aliases {
            format!("{id:>id_width$}  {name:<name_width$}  {aliases}")
        } else {
            format!("{id:>id_width$}  {name}")
        };
        line.trim_end().to_string()
    };

    let mut lines = vec![row("ID", "NAME", "ALIASES")];
    for e in entries {
        lines.push(row(&e.id.to_string(), e.name, &e.aliases.join(", ")));
    }
    lines.join("\n")
}

fn record_json(info: &EnchantmentInfo, show_aliases: bool) -> Value {
    if show_aliases {
        json!({ "id": info.id, "name": info.name, "aliases": info.aliases })
    } else {
        json!({ "id": info.id, "name": info.name })
    }
}
