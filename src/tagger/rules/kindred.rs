//! Phase 4: kindred mirroring. Every creature type a card carries becomes
//! a `"<Type> Kindred"` tag.

use crate::card::Card;

pub fn apply(cards: &mut [Card]) {
    for card in cards.iter_mut() {
        let tags: Vec<String> = card.creature_types.iter().map(|t| format!("{t} Kindred")).collect();
        for tag in tags {
            card.theme_tags.insert(tag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::ColorSet;

    #[test]
    fn mirrors_every_creature_type() {
        let mut cards = vec![Card {
            name: "X".into(),
            face_name: "X".into(),
            edhrec_rank: None,
            color_identity: ColorSet::empty(),
            colors: ColorSet::empty(),
            mana_cost: None,
            mana_value: 0,
            type_line: "Creature — Goblin Warrior".into(),
            power: None,
            toughness: None,
            oracle_text: None,
            keywords: Default::default(),
            creature_types: ["Goblin".to_string(), "Warrior".to_string()].into_iter().collect(),
            theme_tags: Default::default(),
            layout: "normal".into(),
            side: String::new(),
        }];
        apply(&mut cards);
        assert!(cards[0].theme_tags.contains("Goblin Kindred"));
        assert!(cards[0].theme_tags.contains("Warrior Kindred"));
    }
}
