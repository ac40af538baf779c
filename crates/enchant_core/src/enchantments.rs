//! Enchantment type vocabulary.
//!
//! This module defines the canonical set of enchantment types understood by the tool. Callers should use the stable
//! identifier [`EnchantmentType`] for identity and query the protocol id, display name and aliases through
//! [`EnchantmentInfo`] / [`ENCHANTMENTS`].
//!
//! ## Notes
//! - Protocol ids are **not contiguous**. The gaps (8–15, 23–32, 36–47, 52–60) mirror the game's own numbering and
//!   must not be "compacted".
//! - Alias matching via [`lookup`] is **case-insensitive**. Aliases are stored lowercase.
//! - Some aliases carry historical misspellings (`"explotionprotection"`). They are accepted spellings that users
//!   already type, so they stay as they are.
//!
//! ## Examples
//! ```rust
//! use enchant_core::enchantments::{self, EnchantmentType};
//!
//! assert_eq!(enchantments::lookup("fireprotection"), Some(EnchantmentType::ProtectionFire));
//! assert_eq!(enchantments::lookup("FlameProtection"), Some(EnchantmentType::ProtectionFire));
//! assert_eq!(EnchantmentType::ProtectionFire.id(), 1);
//! assert_eq!(EnchantmentType::ProtectionFire.name(), "Fire protection");
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::registry::registry;

/// Protocol ids for every enchantment type.
///
/// These are the numbers the game sends on the wire. Prefer these constants over literals.
pub mod id {
    pub const PROTECTION_ENVIRONMENTAL: i32 = 0;
    pub const PROTECTION_FIRE: i32 = 1;
    pub const PROTECTION_FALL: i32 = 2;
    pub const PROTECTION_EXPLOSIONS: i32 = 3;
    pub const PROTECTION_PROJECTILE: i32 = 4;
    pub const OXYGEN: i32 = 5;
    pub const WATER_WORKER: i32 = 6;
    pub const THORNS: i32 = 7;
    pub const DAMAGE_ALL: i32 = 16;
    pub const DAMAGE_UNDEAD: i32 = 17;
    pub const DAMAGE_ARTHROPODS: i32 = 18;
    pub const KNOCKBACK: i32 = 19;
    pub const FIRE_ASPECT: i32 = 20;
    pub const LOOT_BONUS_MOBS: i32 = 21;
    pub const DIG_SPEED: i32 = 22;
    pub const SILK_TOUCH: i32 = 33;
    pub const DURABILITY: i32 = 34;
    pub const LOOT_BONUS_BLOCKS: i32 = 35;
    pub const ARROW_DAMAGE: i32 = 48;
    pub const ARROW_KNOCKBACK: i32 = 49;
    pub const ARROW_FIRE: i32 = 50;
    pub const ARROW_INFINITE: i32 = 51;
    pub const LUCK: i32 = 61;
    pub const LURE: i32 = 62;
}

/// Stable identifier for an enchantment type.
///
/// Variants are declared in the same order as [`ENCHANTMENTS`]; the discriminant doubles as the table index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EnchantmentType {
    // Armor
    ProtectionEnvironmental,
    ProtectionFire,
    ProtectionFall,
    ProtectionExplosions,
    ProtectionProjectile,
    Oxygen,
    WaterWorker,
    Thorns,

    // Melee weapons
    DamageAll,
    DamageUndead,
    DamageArthropods,
    Knockback,
    FireAspect,
    LootBonusMobs,

    // Tools
    DigSpeed,
    SilkTouch,
    Durability,
    LootBonusBlocks,

    // Bows
    ArrowDamage,
    ArrowKnockback,
    ArrowFire,
    ArrowInfinite,

    // Fishing rods
    Luck,
    Lure,
}

/// Metadata for an enchantment type.
///
/// ## Notes
/// - `name` is the user-facing display name.
/// - `aliases` are the lowercase spellings accepted by [`lookup`]. Every entry has at least one.
/// - This type is `Copy` so the registry can live in a `const` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnchantmentInfo {
    pub kind: EnchantmentType,
    pub id: i32,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
}

/// Registry of all enchantment types, in declaration order.
pub const ENCHANTMENTS: &[EnchantmentInfo] = &[
    info(
        EnchantmentType::ProtectionEnvironmental,
        id::PROTECTION_ENVIRONMENTAL,
        "Protection",
        &["protection"],
    ),
    info(
        EnchantmentType::ProtectionFire,
        id::PROTECTION_FIRE,
        "Fire protection",
        &["fireprotection", "flameprotection"],
    ),
    info(
        EnchantmentType::ProtectionFall,
        id::PROTECTION_FALL,
        "Feather falling",
        &["featherfalling", "fallprotection", "fallingprotection"],
    ),
    info(
        EnchantmentType::ProtectionExplosions,
        id::PROTECTION_EXPLOSIONS,
        "Blast protection",
        &["explotionprotection", "explotionsprotection", "blastprotection"],
    ),
    info(
        EnchantmentType::ProtectionProjectile,
        id::PROTECTION_PROJECTILE,
        "Projectile protection",
        &["projectileprotection"],
    ),
    info(
        EnchantmentType::Oxygen,
        id::OXYGEN,
        "Respiration",
        &["respiration", "oxygen", "breathing"],
    ),
    info(
        EnchantmentType::WaterWorker,
        id::WATER_WORKER,
        "Aqua affinity",
        &["waterworker", "aquaaffinity", "watermine"],
    ),
    info(
        EnchantmentType::Thorns,
        id::THORNS,
        "Thorns",
        &["thorns", "highcrit", "thorn", "highercrit"],
    ),
    info(
        EnchantmentType::DamageAll,
        id::DAMAGE_ALL,
        "Sharpness",
        &["alldamage", "sharpness", "sharp"],
    ),
    info(
        EnchantmentType::DamageUndead,
        id::DAMAGE_UNDEAD,
        "Smite",
        &["smite", "damageundead", "undeaddamage"],
    ),
    info(
        EnchantmentType::DamageArthropods,
        id::DAMAGE_ARTHROPODS,
        "Bane of Arthropods",
        &["baneofarthropods", "baneofarthropod", "arthropod"],
    ),
    info(EnchantmentType::Knockback, id::KNOCKBACK, "Knockback", &["knockback"]),
    info(
        EnchantmentType::FireAspect,
        id::FIRE_ASPECT,
        "Fire aspect",
        &["fireaspect", "fire", "meleefire", "meleeflame"],
    ),
    info(EnchantmentType::LootBonusMobs, id::LOOT_BONUS_MOBS, "Looting", &["looting"]),
    info(
        EnchantmentType::DigSpeed,
        id::DIG_SPEED,
        "Efficiency",
        &["efficiency", "digspeed", "minespeed"],
    ),
    info(
        EnchantmentType::SilkTouch,
        id::SILK_TOUCH,
        "Silk touch",
        &["silktouch", "softtouch"],
    ),
    info(
        EnchantmentType::Durability,
        id::DURABILITY,
        "Unbreaking",
        &["durability", "unbreaking"],
    ),
    info(
        EnchantmentType::LootBonusBlocks,
        id::LOOT_BONUS_BLOCKS,
        "Fortune",
        &["fortune", "lootbonus"],
    ),
    info(
        EnchantmentType::ArrowDamage,
        id::ARROW_DAMAGE,
        "Power",
        &["power", "arrowdamage", "arrowpower"],
    ),
    info(
        EnchantmentType::ArrowKnockback,
        id::ARROW_KNOCKBACK,
        "Punch",
        &["punch", "arrowpunch", "arrowknockback"],
    ),
    info(
        EnchantmentType::ArrowFire,
        id::ARROW_FIRE,
        "Flame",
        &["firearrow", "flame", "flamearrow"],
    ),
    info(
        EnchantmentType::ArrowInfinite,
        id::ARROW_INFINITE,
        "Infinity",
        &["infinity", "infinite", "unlimited", "infinitearrows", "unlimitedarrows"],
    ),
    info(
        EnchantmentType::Luck,
        id::LUCK,
        "Luck of the sea",
        &["luck", "luckofthesea", "luckofsea", "rodluck"],
    ),
    info(EnchantmentType::Lure, id::LURE, "Lure", &["lure", "rodlure"]),
];

impl EnchantmentType {
    /// Return the protocol id.
    pub fn id(self) -> i32 {
        self.info().id
    }

    /// Return the user-facing display name (e.g. `"Bane of Arthropods"`).
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Return the accepted lookup aliases, in declaration order.
    pub fn aliases(self) -> &'static [&'static str] {
        self.info().aliases
    }

    /// Return the full metadata entry for this enchantment type.
    ///
    /// ## Notes
    /// - `ENCHANTMENTS` is declared in variant order, so this is a direct index. The registry guardrail tests pin
    ///   that ordering.
    pub fn info(self) -> &'static EnchantmentInfo {
        &ENCHANTMENTS[self as usize]
    }

    /// Iterate over every enchantment type in declaration order.
    pub fn all() -> impl Iterator<Item = EnchantmentType> {
        ENCHANTMENTS.iter().map(|e| e.kind)
    }

    /// Resolve a protocol id. See [`from_id`].
    pub fn from_id(id: i32) -> Option<EnchantmentType> {
        from_id(id)
    }

    /// Resolve a user-typed alias. See [`lookup`].
    pub fn lookup(alias: &str) -> Option<EnchantmentType> {
        lookup(alias)
    }
}

impl fmt::Display for EnchantmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name any enchantment type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown enchantment: {0:?}")]
pub struct UnknownEnchantment(pub String);

/// Returned when a protocol id does not belong to any enchantment type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown enchantment id: {0}")]
pub struct UnknownEnchantmentId(pub i32);

impl FromStr for EnchantmentType {
    type Err = UnknownEnchantment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(s).ok_or_else(|| UnknownEnchantment(s.to_string()))
    }
}

impl TryFrom<i32> for EnchantmentType {
    type Error = UnknownEnchantmentId;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        from_id(id).ok_or(UnknownEnchantmentId(id))
    }
}

/// Resolve a protocol id to an enchantment type.
///
/// ## Parameters
/// - `id`: Any integer. Ids outside the table (including negative ones and the gaps between ranges) are not errors.
///
/// ## Returns
/// - `Some(EnchantmentType)` if `id` belongs to a known enchantment.
/// - `None` otherwise.
///
/// ## Examples
/// ```rust
/// use enchant_core::enchantments::{self, EnchantmentType};
///
/// assert_eq!(enchantments::from_id(35), Some(EnchantmentType::LootBonusBlocks));
/// assert_eq!(enchantments::from_id(36), None);
/// ```
pub fn from_id(id: i32) -> Option<EnchantmentType> {
    registry().by_id(id).map(|e| e.kind)
}

/// Resolve a user-typed alias to an enchantment type.
///
/// ## Parameters
/// - `alias`: Candidate alias, in any letter case.
///
/// ## Returns
/// - `Some(EnchantmentType)` if the lowercased `alias` is a known alias.
/// - `None` otherwise.
///
/// ## Notes
/// - Matching is **case-insensitive**; the display name itself is not an alias unless listed as one.
pub fn lookup(alias: &str) -> Option<EnchantmentType> {
    registry().by_alias(alias).map(|e| e.kind)
}

/// A free-form query, classified by how it names a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query<'a> {
    /// The trimmed input parsed as an `i32`.
    Id(i32),
    /// Anything else, trimmed. Case is left as typed.
    Alias(&'a str),
}

impl<'a> Query<'a> {
    /// Classify `input`: surrounding whitespace is ignored, and anything that parses as an `i32` is an id.
    pub fn parse(input: &'a str) -> Self {
        let input = input.trim();
        match input.parse::<i32>() {
            Ok(id) => Query::Id(id),
            Err(_) => Query::Alias(input),
        }
    }
}

/// Resolve a free-form query to its full record. See [`Query::parse`] for how the input is classified.
pub fn resolve_info(query: &str) -> Option<&'static EnchantmentInfo> {
    match Query::parse(query) {
        Query::Id(id) => registry().by_id(id),
        Query::Alias(alias) => registry().by_alias(alias),
    }
}

/// Resolve a free-form query: a protocol id if it parses as an integer, otherwise an alias.
///
/// Leading and trailing whitespace is ignored.
pub fn resolve(query: &str) -> Option<EnchantmentType> {
    resolve_info(query).map(|e| e.kind)
}

const fn info(
    kind: EnchantmentType,
    id: i32,
    name: &'static str,
    aliases: &'static [&'static str],
) -> EnchantmentInfo {
    EnchantmentInfo { kind, id, name, aliases }
}
