//! Phase 10: the enchantment family.

use lazy_static::lazy_static;
use regex::Regex;

use crate::card::Card;

lazy_static! {
    static ref ROLE_TOKEN_RE: Regex = Regex::new(r"(?i)role token").unwrap();
    static ref SHARD_TOKEN_RE: Regex = Regex::new(r"(?i)shard token").unwrap();
    static ref GENERIC_ENCHANTMENT_TOKEN_RE: Regex = Regex::new(r"(?i)create.*enchantment token").unwrap();
    static ref ENCHANTMENTS_MATTER_TRIGGER_RE: Regex =
        Regex::new(r"(?i)whenever (you cast |an?)?enchantment|number of enchantments you control|enchantment enters").unwrap();
    static ref CONSTELLATION_RE: Regex = Regex::new(r"(?i)\bconstellation\b").unwrap();
    static ref EERIE_RE: Regex = Regex::new(r"(?i)\beerie\b").unwrap();
}

pub fn apply(cards: &mut [Card]) {
    for card in cards.iter_mut() {
        let text = card.oracle_text().to_string();

        if ROLE_TOKEN_RE.is_match(&text) {
            card.add_tags(["Enchantment Tokens", "Roles"]);
        }
        if SHARD_TOKEN_RE.is_match(&text) {
            card.add_tags(["Enchantment Tokens", "Shard"]);
        }
        if GENERIC_ENCHANTMENT_TOKEN_RE.is_match(&text) {
            card.add_tags(["Enchantment Tokens"]);
        }
        if ENCHANTMENTS_MATTER_TRIGGER_RE.is_match(&text) {
            card.add_tags(["Enchantments Matter"]);
        }
        if card.type_line.contains("Aura") {
            card.add_tags(["Auras", "Voltron"]);
        }
        if CONSTELLATION_RE.is_match(&text) {
            card.add_tags(["Constellation"]);
        }
        if card.type_line.contains("Saga") {
            card.add_tags(["Sagas"]);
        }
        if card.type_line.contains("Case") {
            card.add_tags(["Cases"]);
        }
        if card.type_line.contains("Room") {
            card.add_tags(["Rooms"]);
            if EERIE_RE.is_match(&text) {
                card.add_tags(["Eerie"]);
            }
        }
        if card.type_line.contains("Class") {
            card.add_tags(["Classes"]);
        }
        if card.type_line.contains("Background") {
            card.add_tags(["Backgrounds"]);
        }
        if card.type_line.contains("Shrine") {
            card.add_tags(["Shrines"]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::ColorSet;

    #[test]
    fn saga_type_line_tags_sagas() {
        let mut cards = vec![Card {
            name: "X".into(),
            face_name: "X".into(),
            edhrec_rank: None,
            color_identity: ColorSet::empty(),
            colors: ColorSet::empty(),
            mana_cost: None,
            mana_value: 0,
            type_line: "Enchantment — Saga".into(),
            power: None,
            toughness: None,
            oracle_text: Some(String::new()),
            keywords: Default::default(),
            creature_types: Default::default(),
            theme_tags: Default::default(),
            layout: "normal".into(),
            side: String::new(),
        }];
        apply(&mut cards);
        assert!(cards[0].has_tag("Sagas"));
    }
}
