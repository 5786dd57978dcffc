//! Phase 5: card-type blanket tags, and phase 6: the raw keyword mirror.

use crate::card::Card;

/// `(type substring, tags to add)`, checked in order against `type_line`.
const TYPE_TAG_TABLE: &[(&str, &[&str])] = &[
    ("Artifact", &["Artifacts Matter"]),
    ("Enchantment", &["Enchantments Matter"]),
    ("Instant", &["Spells Matter", "Spellslinger"]),
    ("Sorcery", &["Spells Matter", "Spellslinger"]),
    ("Land", &["Lands Matter"]),
    ("Planeswalker", &["Superfriends"]),
    ("Battle", &["Battles Matter"]),
    ("Equipment", &["Equipment", "Voltron"]),
    ("Aura", &["Auras", "Voltron"]),
];

pub fn apply_blanket_tags(cards: &mut [Card]) {
    for card in cards.iter_mut() {
        for (needle, tags) in TYPE_TAG_TABLE {
            if card.type_line.contains(needle) {
                card.add_tags(tags.iter().copied());
            }
        }
    }
}

/// Every keyword already recorded on the card becomes a tag verbatim.
pub fn apply_keyword_mirror(cards: &mut [Card]) {
    for card in cards.iter_mut() {
        let keywords: Vec<String> = card.keywords.iter().cloned().collect();
        for keyword in keywords {
            card.theme_tags.insert(keyword);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::ColorSet;

    fn blank(type_line: &str) -> Card {
        Card {
            name: "X".into(),
            face_name: "X".into(),
            edhrec_rank: None,
            color_identity: ColorSet::empty(),
            colors: ColorSet::empty(),
            mana_cost: None,
            mana_value: 0,
            type_line: type_line.into(),
            power: None,
            toughness: None,
            oracle_text: None,
            keywords: Default::default(),
            creature_types: Default::default(),
            theme_tags: Default::default(),
            layout: "normal".into(),
            side: String::new(),
        }
    }

    #[test]
    fn equipment_gets_both_equipment_and_voltron() {
        let mut cards = vec![blank("Artifact — Equipment")];
        apply_blanket_tags(&mut cards);
        assert!(cards[0].theme_tags.contains("Equipment"));
        assert!(cards[0].theme_tags.contains("Voltron"));
        assert!(cards[0].theme_tags.contains("Artifacts Matter"));
    }

    #[test]
    fn keyword_mirror_copies_verbatim() {
        let mut cards = vec![blank("Creature")];
        cards[0].keywords.insert("Flying".to_string());
        apply_keyword_mirror(&mut cards);
        assert!(cards[0].theme_tags.contains("Flying"));
    }
}
