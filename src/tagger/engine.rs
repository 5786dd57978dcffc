//! Orchestrates the fixed 21-phase rule order of §4.3.1 over one
//! color-identity slice.

use crate::card::Card;

use super::creature_types::{apply_outlaw_rollup, extract_creature_types};
use super::rules::{
    artifacts, blanket, counters, draw, enchantments, exile, interaction, kindred, lands_matter,
    life, other, ramp, spellslinger, tokens, voltron,
};

/// Runs every tagging phase, in order, over one slice. Pure: running
/// twice on the same unenriched input produces identical output.
pub struct TagEngine;

impl TagEngine {
    pub fn run(mut cards: Vec<Card>) -> Vec<Card> {
        let start = std::time::Instant::now();

        // Phases 1-2: creature types and the Outlaw rollup.
        extract_creature_types(&mut cards);
        apply_outlaw_rollup(&mut cards);

        // Phase 3: tag initialization is implicit — `Card::theme_tags`
        // starts empty from the loader.

        // Phase 4: kindred mirroring.
        kindred::apply(&mut cards);

        // Phase 5-6: blanket type tags, raw keyword mirror.
        blanket::apply_blanket_tags(&mut cards);
        blanket::apply_keyword_mirror(&mut cards);

        // Phases 7.a-f (draw family) through 18 (ramp), in declared order.
        draw::apply(&mut cards);
        artifacts::apply(&mut cards);
        enchantments::apply(&mut cards);
        exile::apply(&mut cards);
        tokens::apply(&mut cards);
        life::apply(&mut cards);
        counters::apply(&mut cards);
        voltron::apply(&mut cards);
        lands_matter::apply(&mut cards);
        spellslinger::apply(&mut cards);
        ramp::apply(&mut cards);

        // Phase 19: other themes (order-independent among themselves).
        other::apply(&mut cards);

        // Phase 20: interaction family.
        interaction::apply(&mut cards);

        // Phase 21: sort finalization. `theme_tags`/`creature_types` are
        // `BTreeSet`s, so they are already lexicographically ordered;
        // nothing further to do here.

        log::debug!("tag engine processed {} cards in {:?}", cards.len(), start.elapsed());
        cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::ColorSet;

    fn card(name: &str, type_line: &str, text: &str) -> Card {
        Card {
            name: name.into(),
            face_name: name.into(),
            edhrec_rank: None,
            color_identity: ColorSet::empty(),
            colors: ColorSet::empty(),
            mana_cost: None,
            mana_value: 1,
            type_line: type_line.into(),
            power: Some("1".into()),
            toughness: Some("1".into()),
            oracle_text: Some(text.into()),
            keywords: Default::default(),
            creature_types: Default::default(),
            theme_tags: Default::default(),
            layout: "normal".into(),
            side: String::new(),
        }
    }

    #[test]
    fn running_twice_on_fresh_input_is_idempotent() {
        let cards = vec![card("Goblin Guide", "Creature — Goblin", "Haste")];
        let once = TagEngine::run(cards.clone());
        let twice = TagEngine::run(cards);
        assert_eq!(once[0].theme_tags, twice[0].theme_tags);
        assert_eq!(once[0].creature_types, twice[0].creature_types);
    }

    #[test]
    fn kindred_mirror_follows_creature_type_extraction() {
        let cards = vec![card("Goblin Guide", "Creature — Goblin", "Haste")];
        let tagged = TagEngine::run(cards);
        assert!(tagged[0].has_tag("Goblin Kindred"));
    }

    #[test]
    fn rhystic_study_gets_card_draw_conditional_draw_and_stax() {
        let cards = vec![card(
            "Rhystic Study",
            "Enchantment",
            "Whenever an opponent casts a spell, unless that player pays {1}, you draw a card.",
        )];
        let tagged = TagEngine::run(cards);
        assert!(tagged[0].has_tag("Card Draw"));
        assert!(tagged[0].has_tag("Conditional Draw"));
        assert!(tagged[0].has_tag("Stax"));
        assert!(!tagged[0].has_tag("Unconditional Draw"));
    }
}
