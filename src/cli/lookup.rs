//! Resolve user input to registry records, with diagnostics for misses.
//!
//! The registry itself reports a miss as `None`. At the CLI boundary a miss becomes a [`LookupError`] so it can be
//! rendered with a suggestion of the closest known alias.

use enchant_core::{ENCHANTMENTS, EnchantmentInfo, Query, registry};
use miette::Diagnostic;
use thiserror::Error;

/// Maximum edit distance for a "did you mean" suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Input that does not name any enchantment.
#[derive(Debug, Error, Diagnostic)]
pub enum LookupError {
    #[error("unknown enchantment: {query:?}")]
    #[diagnostic(code(enchant::unknown_alias))]
    UnknownAlias {
        query: String,
        #[help]
        help: Option<String>,
    },

    #[error("unknown enchantment id: {id}")]
    #[diagnostic(code(enchant::unknown_id))]
    UnknownId {
        id: i32,
        #[help]
        help: Option<String>,
    },
}

/// Resolve a protocol id.
pub fn find_by_id(id: i32) -> Result<&'static EnchantmentInfo, LookupError> {
    registry().by_id(id).ok_or_else(|| LookupError::UnknownId {
        id,
        help: Some(format!("known ids are {}", id_ranges(registry().iter().map(|e| e.id)))),
    })
}

/// Resolve an alias (case-insensitive).
pub fn find_by_alias(alias: &str) -> Result<&'static EnchantmentInfo, LookupError> {
    registry().by_alias(alias).ok_or_else(|| LookupError::UnknownAlias {
        query: alias.to_string(),
        help: suggest(alias).map(|s| format!("did you mean `{s}`?")),
    })
}

/// Resolve a protocol id if `query` parses as one, otherwise an alias. Classification is [`Query::parse`].
pub fn find(query: &str) -> Result<&'static EnchantmentInfo, LookupError> {
    match Query::parse(query) {
        Query::Id(id) => find_by_id(id),
        Query::Alias(alias) => find_by_alias(alias),
    }
}

/// Suggest the known alias closest to `query`, if any is close enough.
///
/// Ties go to the alias declared first.
pub fn suggest(query: &str) -> Option<&'static str> {
    let query = query.to_lowercase();
    ENCHANTMENTS
        .iter()
        .flat_map(|e| e.aliases.iter().copied())
        .map(|alias| (alias, strsim::levenshtein(&query, alias)))
        .min_by_key(|&(_, distance)| distance)
        .filter(|&(_, distance)| distance <= MAX_SUGGESTION_DISTANCE)
        .map(|(alias, _)| alias)
}

/// Compact listing of ids, e.g. `0-7, 16-22`.
fn id_ranges(ids: impl IntoIterator<Item = i32>) -> String {
    let mut ids: Vec<i32> = ids.into_iter().collect();
    ids.sort_unstable();
    ids.dedup();

    let mut ranges: Vec<(i32, i32)> = Vec::new();
    for id in ids {
        match ranges.last_mut() {
            Some((_, end)) if end.checked_add(1) == Some(id) => *end = id,
            _ => ranges.push((id, id)),
        }
    }

    ranges
        .iter()
        .map(|&(start, end)| if start == end { start.to_string() } else { format!("{start}-{end}") })
        .collect::<Vec<_>>()
        .join(", ")
}
