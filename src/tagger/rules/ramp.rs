//! Phase 18: the ramp family — Mana Dork, Mana Rock, Extra Lands, Land
//! Search.

use lazy_static::lazy_static;
use regex::Regex;

use crate::card::Card;

lazy_static! {
    static ref MANA_ABILITY_RE: Regex = Regex::new(r"(?i)add \{?[wubrgc]\}?|add one mana|add \d+ mana").unwrap();
    static ref EXTRA_LAND_RE: Regex = Regex::new(r"(?i)play an additional land|play two additional lands").unwrap();
    static ref LAND_SEARCH_RE: Regex = Regex::new(r"(?i)search your library for a (basic )?land card").unwrap();
}

pub fn apply(cards: &mut [Card]) {
    for card in cards.iter_mut() {
        let text = card.oracle_text().to_string();

        if MANA_ABILITY_RE.is_match(&text) {
            if card.is_creature() {
                card.add_tags(["Ramp", "Mana Dork"]);
            } else if card.type_line.contains("Artifact") {
                card.add_tags(["Ramp", "Mana Rock"]);
            } else {
                card.add_tags(["Ramp"]);
            }
        }
        if EXTRA_LAND_RE.is_match(&text) {
            card.add_tags(["Ramp", "Extra Lands"]);
        }
        if LAND_SEARCH_RE.is_match(&text) {
            card.add_tags(["Ramp", "Land Search"]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::ColorSet;

    #[test]
    fn creature_with_mana_ability_is_mana_dork() {
        let mut cards = vec![Card {
            name: "Llanowar Elves".into(),
            face_name: "Llanowar Elves".into(),
            edhrec_rank: None,
            color_identity: ColorSet::empty(),
            colors: ColorSet::empty(),
            mana_cost: None,
            mana_value: 1,
            type_line: "Creature — Elf Druid".into(),
            power: Some("1".into()),
            toughness: Some("1".into()),
            oracle_text: Some("{T}: Add {G}.".into()),
            keywords: Default::default(),
            creature_types: Default::default(),
            theme_tags: Default::default(),
            layout: "normal".into(),
            side: String::new(),
        }];
        apply(&mut cards);
        assert!(cards[0].has_tag("Mana Dork"));
    }
}
