//! Provide the canonical enchantment vocabulary shared by the `enchant` tool and anything that talks to the game's
//! item protocol.
//!
//! This crate is intentionally small and dependency-light. It contains:
//! - a `const` table of every known enchantment type ([`enchantments::ENCHANTMENTS`]) with its protocol id, display
//!   name and lookup aliases, and
//! - a process-wide [`registry::EnchantmentRegistry`] that indexes that table by id and by alias.
//!
//! ## Notes
//!
//! - **No IO**: the registry is compiled-in data. The only side effects are `tracing` events emitted while the
//!   indexes are built.
//! - Callers should work with [`EnchantmentType`] for identity and never compare raw alias strings themselves.
//!
//! ## Examples
//! ```rust
//! use enchant_core::{EnchantmentType, from_id, lookup};
//!
//! assert_eq!(lookup("SHARP"), Some(EnchantmentType::DamageAll));
//! assert_eq!(from_id(16).map(|e| e.name()), Some("Sharpness"));
//! assert_eq!(from_id(9), None);
//! ```

pub mod enchantments;
pub mod registry;

pub use enchantments::{
    ENCHANTMENTS, EnchantmentInfo, EnchantmentType, Query, UnknownEnchantment, UnknownEnchantmentId, from_id, id,
    lookup, resolve, resolve_info,
};
pub use registry::{EnchantmentRegistry, RegistryIssue, registry};
