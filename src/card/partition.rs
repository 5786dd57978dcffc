//! Partitions a loaded corpus by canonical color-identity name.

use std::collections::BTreeMap;

use super::types::Card;

/// All 32 canonical color-identity names, in the order slice files are
/// expected to exist.
pub const CANONICAL_IDENTITIES: [&str; 32] = [
    "colorless", "white", "blue", "black", "red", "green", "azorius", "dimir", "rakdos", "gruul",
    "selesnya", "orzhov", "golgari", "simic", "izzet", "boros", "esper", "grixis", "jund", "naya",
    "bant", "abzan", "jeskai", "mardu", "sultai", "temur", "glint", "dune", "witch", "yore", "ink",
    "wubrg",
];

/// Splits `cards` into one bucket per canonical color-identity name. The
/// partition is total and disjoint: every card lands in exactly one
/// bucket, keyed by its own `color_identity`.
pub fn partition_by_color(cards: Vec<Card>) -> BTreeMap<&'static str, Vec<Card>> {
    let mut slices: BTreeMap<&'static str, Vec<Card>> = BTreeMap::new();
    for card in cards {
        let key = card.color_identity.canonical_name();
        slices.entry(key).or_default().push(card);
    }
    slices
}
