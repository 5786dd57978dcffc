//! Phase 15: Voltron — commander list, support text, Equipment, Auras,
//! +1/+1-counter synergy.

use lazy_static::lazy_static;
use regex::Regex;

use crate::card::Card;

lazy_static! {
    static ref VOLTRON_SUPPORT_RE: Regex = Regex::new(
        r"(?i)equipped creature|enchanted creature|attach|commander you control|if you control a commander"
    )
    .unwrap();
}

pub fn apply(cards: &mut [Card]) {
    for card in cards.iter_mut() {
        let text = card.oracle_text().to_string();
        if VOLTRON_SUPPORT_RE.is_match(&text) {
            card.add_tags(["Voltron"]);
        }
        if card.has_tag("+1/+1 Counters") && card.is_creature() {
            card.add_tags(["Voltron"]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::ColorSet;

    #[test]
    fn equipped_creature_text_tags_voltron() {
        let mut cards = vec![Card {
            name: "X".into(),
            face_name: "X".into(),
            edhrec_rank: None,
            color_identity: ColorSet::empty(),
            colors: ColorSet::empty(),
            mana_cost: None,
            mana_value: 0,
            type_line: "Artifact — Equipment".into(),
            power: None,
            toughness: None,
            oracle_text: Some("Equipped creature gets +2/+2.".into()),
            keywords: Default::default(),
            creature_types: Default::default(),
            theme_tags: Default::default(),
            layout: "normal".into(),
            side: String::new(),
        }];
        apply(&mut cards);
        assert!(cards[0].has_tag("Voltron"));
    }
}
