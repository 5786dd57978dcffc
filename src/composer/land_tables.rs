//! Fixed land-selection tables (§4.5.1), grounded verbatim on the
//! original implementation's `deck_builder/builder_constants.py`
//! (`GENERIC_FETCH_LANDS`, `COLOR_TO_FETCH_LANDS`, `KINDRED_STAPLE_LANDS`,
//! `DUAL_LAND_TYPE_MAP`, `TRIPLE_LAND_TYPE_MAP`, `STAPLE_LAND_CONDITIONS`,
//! `PROTECTED_LANDS`).

use std::collections::BTreeSet;

use crate::card::{Color, ColorSet};

/// Basics reserved as non-basic land slots when sizing the basic-land
/// sub-budget (`ideals.lands - NON_BASIC_RESERVE`).
pub const NON_BASIC_RESERVE: u32 = 10;

/// Generic fetch lands available regardless of commander color.
pub const GENERIC_FETCH_LANDS: &[&str] = &[
    "Evolving Wilds",
    "Terramorphic Expanse",
    "Shire Terrace",
    "Escape Tunnel",
    "Promising Vein",
    "Myriad Landscape",
    "Fabled Passage",
    "Terminal Moraine",
    "Prismatic Vista",
];

/// Per-color fetch lands, unioned across every color in the commander's
/// identity.
pub fn color_fetch_lands(color: Color) -> &'static [&'static str] {
    match color {
        Color::White => &[
            "Flooded Strand",
            "Windswept Heath",
            "Marsh Flats",
            "Arid Mesa",
            "Brokers Hideout",
            "Obscura Storefront",
            "Cabaretti Courtyard",
        ],
        Color::Blue => &[
            "Flooded Strand",
            "Polluted Delta",
            "Scalding Tarn",
            "Misty Rainforest",
            "Brokers Hideout",
            "Obscura Storefront",
            "Maestros Theater",
        ],
        Color::Black => &[
            "Polluted Delta",
            "Bloodstained Mire",
            "Marsh Flats",
            "Verdant Catacombs",
            "Obscura Storefront",
            "Maestros Theater",
            "Riveteers Overlook",
        ],
        Color::Red => &[
            "Bloodstained Mire",
            "Wooded Foothills",
            "Scalding Tarn",
            "Arid Mesa",
            "Maestros Theater",
            "Riveteers Overlook",
            "Cabaretti Courtyard",
        ],
        Color::Green => &[
            "Wooded Foothills",
            "Windswept Heath",
            "Verdant Catacombs",
            "Misty Rainforest",
            "Brokers Hideout",
            "Riveteers Overlook",
            "Cabaretti Courtyard",
        ],
    }
}

/// Kindred staple lands, included (in this order) ahead of any
/// tribe-referencing land found in the rest of the pool.
pub const KINDRED_STAPLE_LANDS: &[&str] = &["Path of Ancestry", "Three Tree City", "Cavern of Souls"];

/// Guild dual-land subtype strings, keyed by the canonical guild name.
pub fn dual_land_subtype(guild: &str) -> Option<&'static str> {
    match guild {
        "azorius" => Some("Plains Island"),
        "dimir" => Some("Island Swamp"),
        "rakdos" => Some("Swamp Mountain"),
        "gruul" => Some("Mountain Forest"),
        "selesnya" => Some("Forest Plains"),
        "orzhov" => Some("Plains Swamp"),
        "golgari" => Some("Swamp Forest"),
        "simic" => Some("Forest Island"),
        "izzet" => Some("Island Mountain"),
        "boros" => Some("Mountain Plains"),
        _ => None,
    }
}

/// Shard/wedge triple-land subtype strings, keyed by the canonical
/// three-color name.
pub fn triple_land_subtype(shard: &str) -> Option<&'static str> {
    match shard {
        "bant" => Some("Forest Plains Island"),
        "esper" => Some("Plains Island Swamp"),
        "grixis" => Some("Island Swamp Mountain"),
        "jund" => Some("Swamp Mountain Forest"),
        "naya" => Some("Mountain Forest Plains"),
        "mardu" => Some("Mountain Plains Swamp"),
        "abzan" => Some("Plains Swamp Forest"),
        "sultai" => Some("Swamp Forest Island"),
        "temur" => Some("Forest Island Mountain"),
        "jeskai" => Some("Island Mountain Plains"),
        _ => None,
    }
}

/// The ten canonical two-color guild names, used to enumerate which
/// dual-land subtype strings apply to a >=2-color identity.
pub const GUILD_NAMES: &[&str] = &[
    "azorius", "dimir", "rakdos", "gruul", "selesnya", "orzhov", "golgari", "simic", "izzet", "boros",
];

/// The ten canonical three-color shard/wedge names.
pub const SHARD_NAMES: &[&str] = &[
    "bant", "esper", "grixis", "jund", "naya", "mardu", "abzan", "sultai", "temur", "jeskai",
];

/// `(land_name, predicate)` table for step 2 of the land builder. Each
/// predicate takes the commander's theme tags, its color identity, and
/// its power.
pub fn staple_land_predicates() -> Vec<(&'static str, fn(&BTreeSet<String>, ColorSet, i32) -> bool)> {
    vec![
        ("Reliquary Tower", |_tags, _colors, _power| true),
        ("Ash Barrens", |tags, _colors, _power| !tags.iter().any(|t| t == "Landfall")),
        ("Command Tower", |_tags, colors, _power| colors.len() > 1),
        ("Exotic Orchard", |_tags, colors, _power| colors.len() > 1),
        ("War Room", |_tags, colors, _power| colors.len() <= 2),
        ("Rogue's Passage", |_tags, _colors, power| power >= 5),
    ]
}

/// Lands that may never be removed by the pruning step (§4.5.1 step 8):
/// basics plus the kindred staples plus whatever staples step 2 added.
pub fn is_protected(name: &str, basics: &[&str], staples_added: &[String]) -> bool {
    basics.contains(&name)
        || KINDRED_STAPLE_LANDS.contains(&name)
        || staples_added.iter().any(|s| s == name)
}
