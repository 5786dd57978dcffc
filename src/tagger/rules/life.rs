//! Phase 13: the life family.

use lazy_static::lazy_static;
use regex::Regex;

use crate::card::Card;

const LIFE_ADJACENT_KINDRED: &[&str] = &["Angel", "Bat", "Cleric", "Vampire"];

lazy_static! {
    static ref LIFEGAIN_RE: Regex = Regex::new(r"(?i)you gain \d+ life|gain life equal to").unwrap();
    static ref LIFELINK_TEXT_RE: Regex = Regex::new(r"(?i)gain life equal to.*damage").unwrap();
    static ref LIFELOSS_RE: Regex = Regex::new(r"(?i)lose \d+ life|loses \d+ life").unwrap();
}

pub fn apply(cards: &mut [Card]) {
    for card in cards.iter_mut() {
        let text = card.oracle_text().to_string();

        if LIFEGAIN_RE.is_match(&text) {
            card.add_tags(["Lifegain"]);
        }
        if card.has_tag("Lifelink") || LIFELINK_TEXT_RE.is_match(&text) {
            card.add_tags(["Lifegain", "Lifelink"]);
        }
        if LIFELOSS_RE.is_match(&text) {
            card.add_tags(["Life Loss"]);
        }
        if card.has_tag("Food Tokens") {
            card.add_tags(["Lifegain"]);
        }
        if LIFE_ADJACENT_KINDRED.iter().any(|t| card.creature_types.contains(*t)) {
            card.add_tags(["Lifegain"]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::ColorSet;

    #[test]
    fn tags_basic_lifegain() {
        let mut cards = vec![Card {
            name: "X".into(),
            face_name: "X".into(),
            edhrec_rank: None,
            color_identity: ColorSet::empty(),
            colors: ColorSet::empty(),
            mana_cost: None,
            mana_value: 0,
            type_line: "Instant".into(),
            power: None,
            toughness: None,
            oracle_text: Some("You gain 3 life.".into()),
            keywords: Default::default(),
            creature_types: Default::default(),
            theme_tags: Default::default(),
            layout: "normal".into(),
            side: String::new(),
        }];
        apply(&mut cards);
        assert!(cards[0].has_tag("Lifegain"));
    }
}
