//! Id and alias indexes over the enchantment table.
//!
//! The process-wide [`EnchantmentRegistry`] is built once, on first use, from [`ENCHANTMENTS`] and is read-only
//! afterwards. Lookups only take `&self`, so concurrent readers need no locking.
//!
//! ## Notes
//! - Alias keys are lowercased once at insertion; [`EnchantmentRegistry::by_alias`] lowercases the query once.
//! - The table is expected to have unique ids and unique aliases. If it does not, the later entry wins in the index
//!   and the collision is recorded as a [`RegistryIssue`] and logged at `warn` level.

use std::collections::HashMap;
use std::sync::OnceLock;

use thiserror::Error;

use crate::enchantments::{ENCHANTMENTS, EnchantmentInfo, EnchantmentType};

/// A data-integrity problem found while indexing an enchantment table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryIssue {
    #[error("enchantment id {id} is claimed by both {first:?} and {second:?}")]
    DuplicateId {
        id: i32,
        first: EnchantmentType,
        second: EnchantmentType,
    },

    #[error("alias {alias:?} is claimed by both {first:?} and {second:?}; {second:?} wins")]
    DuplicateAlias {
        alias: String,
        first: EnchantmentType,
        second: EnchantmentType,
    },

    #[error("alias {alias:?} of {kind:?} is not lowercase")]
    AliasNotLowercase { alias: &'static str, kind: EnchantmentType },

    #[error("{kind:?} has no aliases")]
    NoAliases { kind: EnchantmentType },
}

/// Indexes over an enchantment table.
#[derive(Debug)]
pub struct EnchantmentRegistry {
    entries: &'static [EnchantmentInfo],
    by_id: HashMap<i32, &'static EnchantmentInfo>,
    by_alias: HashMap<String, &'static EnchantmentInfo>,
    issues: Vec<RegistryIssue>,
}

static REGISTRY: OnceLock<EnchantmentRegistry> = OnceLock::new();

/// Return the process-wide registry over [`ENCHANTMENTS`], building it on first call.
///
/// Construction runs at most once even with concurrent first callers; every caller sees the finished indexes.
pub fn registry() -> &'static EnchantmentRegistry {
    REGISTRY.get_or_init(|| EnchantmentRegistry::build(ENCHANTMENTS))
}

impl EnchantmentRegistry {
    /// Index `table` by id and by lowercased alias.
    ///
    /// ## Parameters
    /// - `table`: The records to index, in insertion order.
    ///
    /// ## Returns
    /// - The registry. Integrity problems never fail construction; inspect [`EnchantmentRegistry::issues`].
    ///
    /// ## Notes
    /// - On a duplicate id or alias the later record replaces the earlier one in the index.
    pub fn build(table: &'static [EnchantmentInfo]) -> Self {
        let mut by_id: HashMap<i32, &'static EnchantmentInfo> = HashMap::with_capacity(table.len());
        let mut by_alias: HashMap<String, &'static EnchantmentInfo> = HashMap::new();
        let mut issues = Vec::new();

        for entry in table {
            if let Some(prev) = by_id.insert(entry.id, entry) {
                issues.push(RegistryIssue::DuplicateId {
                    id: entry.id,
                    first: prev.kind,
                    second: entry.kind,
                });
            }

            if entry.aliases.is_empty() {
                issues.push(RegistryIssue::NoAliases { kind: entry.kind });
            }

            for &alias in entry.aliases {
                let key = alias.to_lowercase();
                if key != alias {
                    issues.push(RegistryIssue::AliasNotLowercase {
                        alias,
                        kind: entry.kind,
                    });
                }
                if let Some(prev) = by_alias.insert(key.clone(), entry) {
                    issues.push(RegistryIssue::DuplicateAlias {
                        alias: key,
                        first: prev.kind,
                        second: entry.kind,
                    });
                }
            }
        }

        for issue in &issues {
            tracing::warn!(%issue, "enchantment registry integrity issue");
        }
        tracing::debug!(
            ids = by_id.len(),
            aliases = by_alias.len(),
            issues = issues.len(),
            "built enchantment registry"
        );

        Self {
            entries: table,
            by_id,
            by_alias,
            issues,
        }
    }

    /// Return the record with protocol id `id`, if any.
    pub fn by_id(&self, id: i32) -> Option<&'static EnchantmentInfo> {
        self.by_id.get(&id).copied()
    }

    /// Return the record owning `alias` (compared case-insensitively), if any.
    pub fn by_alias(&self, alias: &str) -> Option<&'static EnchantmentInfo> {
        self.by_alias.get(alias.to_lowercase().as_str()).copied()
    }

    /// Every alias key in the index, lowercased, in no particular order.
    pub fn alias_keys(&self) -> impl Iterator<Item = &str> {
        self.by_alias.keys().map(String::as_str)
    }

    /// Integrity problems recorded while building.
    pub fn issues(&self) -> &[RegistryIssue] {
        &self.issues
    }

    /// Iterate over the indexed records in table order.
    pub fn iter(&self) -> impl Iterator<Item = &'static EnchantmentInfo> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
