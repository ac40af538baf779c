//! Generate a Markdown reference page from the enchantment registry.
//!
//! ## Notes
//! - The output is meant to be checked into docs as a derived artifact: `enchant reference > docs/enchantments.md`.
//! - Do not edit the generated Markdown by hand; update `enchant_core::ENCHANTMENTS` instead.

use enchant_core::{ENCHANTMENTS, EnchantmentInfo};

/// Render the full reference page for [`ENCHANTMENTS`].
///
/// The result ends with exactly one newline.
pub fn render_reference() -> String {
    render_reference_for(ENCHANTMENTS)
}

/// Render a reference page for an arbitrary table (used by tests).
///
/// Every section ends with a single newline; sections are separated by one blank line.
pub fn render_reference_for(table: &[EnchantmentInfo]) -> String {
    let mut sections = vec![banner(), records_section(table)];
    let gaps = unassigned_ranges(table);
    if !gaps.is_empty() {
        sections.push(gaps_section(&gaps));
    }
    sections.join("\n")
}

fn banner() -> String {
    let mut out = String::from("# Enchantment reference\n\n");
    out.push_str("!!! warning \"Generated file\"\n");
    out.push_str("    Do not edit this page by hand.\n");
    out.push_str("    Regenerate with: `enchant reference > docs/enchantments.md`\n");
    out
}

fn records_section(table: &[EnchantmentInfo]) -> String {
    let mut out = String::from("## Enchantments\n\n");
    out.push_str("Aliases are matched case-insensitively.\n\n");
    out.push_str("| Id | Name | Variant | Aliases |\n");
    out.push_str("|---:|---|---|---|\n");
    for e in table {
        let aliases = e
            .aliases
            .iter()
            .map(|a| format!("`{}`", a))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("| {} | {} | `{:?}` | {} |\n", e.id, e.name, e.kind, aliases));
    }
    out
}

fn gaps_section(gaps: &[(i32, i32)]) -> String {
    let mut out = String::from("## Unassigned ids\n\n");
    out.push_str("These protocol ids fall between known enchantments and resolve to nothing.\n\n");
    for &(start, end) in gaps {
        if start == end {
            out.push_str(&format!("- {start}\n"));
        } else {
            out.push_str(&format!("- {start}–{end}\n"));
        }
    }
    out
}

/// Inclusive id ranges between the smallest and largest known id that no record claims.
fn unassigned_ranges(table: &[EnchantmentInfo]) -> Vec<(i32, i32)> {
    let mut ids: Vec<i32> = table.iter().map(|e| e.id).collect();
    ids.sort_unstable();
    ids.dedup();

    // A gap of at least two keeps `w[0] + 1` and `w[1] - 1` inside `i32`.
    ids.windows(2)
        .filter(|w| i64::from(w[1]) - i64::from(w[0]) > 1)
        .map(|w| (w[0] + 1, w[1] - 1))
        .collect()
}
