//! Phase 20: interaction family — Counterspells, Board Wipes, Combat
//! Tricks (needs Instant/Flash from phase 6), Protection, Removal.

use lazy_static::lazy_static;
use regex::Regex;

use crate::card::Card;

lazy_static! {
    static ref COUNTERSPELL_RE: Regex = Regex::new(r"(?i)counter target spell").unwrap();
    static ref BOARD_WIPE_RE: Regex = Regex::new(
        r"(?i)destroy all creatures|each creature gets -\d+/-\d+|all creatures get -\d+/-\d+|destroy each creature"
    )
    .unwrap();
    static ref COMBAT_TRICK_RE: Regex = Regex::new(r"(?i)target creature gets \+\d+/\+\d+|until end of turn").unwrap();
    static ref PROTECTION_RE: Regex = Regex::new(r"(?i)protection from|hexproof|gains indestructible|can't be countered").unwrap();
    static ref REMOVAL_RE: Regex =
        Regex::new(r"(?i)destroy target (creature|permanent|artifact|enchantment)|exile target (creature|permanent)|target creature gets -\d+/-\d+").unwrap();
}

pub fn apply(cards: &mut [Card]) {
    for card in cards.iter_mut() {
        let text = card.oracle_text().to_string();
        let is_instant_or_flash = card.type_line.contains("Instant") || card.has_tag("Flash");

        if COUNTERSPELL_RE.is_match(&text) {
            card.add_tags(["Counterspells", "Interaction"]);
        }
        if BOARD_WIPE_RE.is_match(&text) {
            card.add_tags(["Board Wipes", "Interaction"]);
        }
        if is_instant_or_flash && COMBAT_TRICK_RE.is_match(&text) {
            card.add_tags(["Combat Tricks"]);
        }
        if PROTECTION_RE.is_match(&text) {
            card.add_tags(["Protection", "Interaction"]);
        }
        if REMOVAL_RE.is_match(&text) {
            card.add_tags(["Removal", "Interaction"]);
        }
    }
}
