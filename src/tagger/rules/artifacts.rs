//! Phase 9: the artifact family.

use lazy_static::lazy_static;
use regex::Regex;

use crate::card::Card;

/// `(token type, oracle-text needle)`. The generic "Artifact Tokens" tag
/// fires for any of these plus the bare `create .* artifact token` case.
const TYPED_TOKENS: &[(&str, &str)] = &[
    ("Treasure", "treasure token"),
    ("Food", "food token"),
    ("Gold", "gold token"),
    ("Clue", "clue token"),
    ("Blood", "blood token"),
    ("Junk", "junk token"),
    ("Map", "map token"),
    ("Powerstone", "powerstone token"),
    ("Incubator", "incubator token"),
];

lazy_static! {
    static ref GENERIC_ARTIFACT_TOKEN_RE: Regex = Regex::new(r"(?i)create.*artifact token").unwrap();
    static ref FABRICATE_RE: Regex = Regex::new(r"(?i)\bfabricate\b").unwrap();
    static ref ARTIFACTS_MATTER_TRIGGER_RE: Regex =
        Regex::new(r"(?i)whenever (you cast |an?)?artifact|number of artifacts you control|artifact enters").unwrap();
    static ref VEHICLE_RE: Regex = Regex::new(r"(?i)\bcrew\b").unwrap();
}

pub fn apply(cards: &mut [Card]) {
    for card in cards.iter_mut() {
        let text = card.oracle_text().to_string();

        let mut tagged_token = false;
        for (kind, needle) in TYPED_TOKENS {
            if text.to_lowercase().contains(needle) {
                card.add_tags(["Artifact Tokens"]);
                card.theme_tags.insert(format!("{kind} Tokens"));
                tagged_token = true;
            }
        }
        if !tagged_token && GENERIC_ARTIFACT_TOKEN_RE.is_match(&text) {
            card.add_tags(["Artifact Tokens"]);
        }
        if FABRICATE_RE.is_match(&text) {
            card.add_tags(["Artifact Tokens", "Fabricate"]);
        }
        if ARTIFACTS_MATTER_TRIGGER_RE.is_match(&text) {
            card.add_tags(["Artifacts Matter"]);
        }
        if card.type_line.contains("Equipment") {
            card.add_tags(["Equipment"]);
        }
        if card.type_line.contains("Vehicle") || VEHICLE_RE.is_match(&text) {
            card.add_tags(["Vehicles"]);
        }
    }
}
