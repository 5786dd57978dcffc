//! Phase 17: the spellslinger family — Spellslinger, Storm, Magecraft,
//! Cantrips, Spell Copy.

use lazy_static::lazy_static;
use regex::Regex;

use crate::card::Card;

lazy_static! {
    static ref STORM_RE: Regex = Regex::new(r"(?i)\bstorm\b").unwrap();
    static ref MAGECRAFT_RE: Regex = Regex::new(r"(?i)\bmagecraft\b").unwrap();
    static ref SPELL_COPY_RE: Regex = Regex::new(r"(?i)copy (that |the )?(target |target spell|instant or sorcery spell)").unwrap();
    static ref CANTRIP_RE: Regex = Regex::new(r"(?i)draw a card\.?\s*$").unwrap();
}

pub fn apply(cards: &mut [Card]) {
    for card in cards.iter_mut() {
        let text = card.oracle_text().to_string();
        let is_spell = card.type_line.contains("Instant") || card.type_line.contains("Sorcery");

        if STORM_RE.is_match(&text) {
            card.add_tags(["Spellslinger", "Storm"]);
        }
        if MAGECRAFT_RE.is_match(&text) {
            card.add_tags(["Spellslinger", "Magecraft"]);
        }
        if SPELL_COPY_RE.is_match(&text) {
            card.add_tags(["Spellslinger", "Spell Copy"]);
        }
        if is_spell && CANTRIP_RE.is_match(text.trim()) && card.mana_value <= 2 {
            card.add_tags(["Cantrips", "Spellslinger"]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::ColorSet;

    #[test]
    fn tags_storm() {
        let mut cards = vec![Card {
            name: "X".into(),
            face_name: "X".into(),
            edhrec_rank: None,
            color_identity: ColorSet::empty(),
            colors: ColorSet::empty(),
            mana_cost: None,
            mana_value: 1,
            type_line: "Sorcery".into(),
            power: None,
            toughness: None,
            oracle_text: Some("Storm (When you cast this spell, copy it for each spell cast before it this turn.)".into()),
            keywords: Default::default(),
            creature_types: Default::default(),
            theme_tags: Default::default(),
            layout: "normal".into(),
            side: String::new(),
        }];
        apply(&mut cards);
        assert!(cards[0].has_tag("Storm"));
    }
}
