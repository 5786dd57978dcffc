//! Phase 14: the counters family — general counters, +1/+1 (and Hydra),
//! -1/-1, and one tag per named counter type.

use lazy_static::lazy_static;
use regex::Regex;

use crate::card::Card;

/// The ~170 canonical named counter types the original tagger
/// recognizes, besides the two ubiquitous +1/+1 and -1/-1 counters.
pub const NAMED_COUNTER_TYPES: &[&str] = &[
    "Acorn", "Aegis", "Age", "Aim", "Arrow", "Arrowhead", "Awakening", "Bait", "Blaze", "Blessing",
    "Blight", "Blood", "Bloodline", "Bloodstain", "Book", "Bounty", "Brain", "Bribery", "Brick",
    "Burden", "Cage", "Carrion", "Charge", "Coin", "Collection", "Component", "Contested",
    "Corruption", "CRANK!", "Credit", "Croak", "Corpse", "Crystal", "Cube", "Currency", "Death",
    "Defense", "Delay", "Depletion", "Descent", "Despair", "Devotion", "Divinity", "Doom", "Dream",
    "Duty", "Echo", "Egg", "Elixir", "Ember", "Energy", "Enlightened", "Eon", "Eruption",
    "Everything", "Experience", "Eyeball", "Eyestalk", "Fade", "Fate", "Feather", "Feeding",
    "Fellowship", "Fetch", "Filibuster", "Finality", "Flame", "Flood", "Foreshadow", "Fungus",
    "Fury", "Fuse", "Gem", "Ghostform", "Glyph", "Gold", "Growth", "Hack", "Harmony", "Hatching",
    "Hatchling", "Healing", "Hit", "Hope", "Hone", "Hoofprint", "Hour", "Hourglass", "Hunger",
    "Ice", "Imposter", "Incarnation", "Incubation", "Infection", "Influence", "Ingenuity", "Intel",
    "Intervention", "Invitation", "Isolation", "Javelin", "Judgment", "Keyword", "Ki", "Kick",
    "Knickknack", "Knowledge", "Landmark", "Level", "Loot", "Lore", "Loyalty", "Luck", "Magnet",
    "Manabond", "Manifestation", "Mannequin", "Mask", "Matrix", "Memory", "Midway", "Mine",
    "Mining", "Mire", "Music", "Muster", "Necrodermis", "Nest", "Net", "Night", "Oil", "Omen",
    "Ore", "Page", "Pain", "Palliation", "Paralyzing", "Pause", "Petal", "Petrification",
    "Phyresis", "Phylactery", "Pin", "Plague", "Plot", "Point", "Poison", "Polyp", "Possession",
    "Pressure", "Prey", "Pupa", "Quest", "Rad", "Rejection", "Reprieve", "Rev", "Revival",
    "Ribbon", "Ritual", "Rope", "Rust", "Scream", "Scroll", "Shell", "Shield", "Silver", "Shred",
    "Sleep", "Sleight", "Slime", "Slumber", "Soot", "Soul", "Spark", "Spite", "Spore", "Stash",
    "Storage", "Story", "Strife", "Study", "Stun", "Supply", "Suspect", "Takeover", "Task",
    "Ticket", "Tide", "Time", "Tower", "Training", "Trap", "Treasure", "Unity", "Unlock", "Valor",
    "Velocity", "Verse", "Vitality", "Void", "Volatile", "Vortex", "Vow", "Voyage", "Wage",
    "Winch", "Wind", "Wish",
];

lazy_static! {
    static ref PLUS_ONE_RE: Regex = Regex::new(r"(?i)\+1/\+1 counter").unwrap();
    static ref MINUS_ONE_RE: Regex = Regex::new(r"(?i)-1/-1 counter").unwrap();
    static ref GENERAL_COUNTERS_RE: Regex = Regex::new(r"(?i)\bcounter(s)?\b").unwrap();
}

pub fn apply(cards: &mut [Card]) {
    for card in cards.iter_mut() {
        let text = card.oracle_text().to_string();

        if GENERAL_COUNTERS_RE.is_match(&text) {
            card.add_tags(["Counters Matter"]);
        }
        if PLUS_ONE_RE.is_match(&text) {
            card.add_tags(["Counters Matter", "+1/+1 Counters"]);
            if card.creature_types.contains("Hydra") {
                card.add_tags(["Hydra Kindred"]);
            }
        }
        if MINUS_ONE_RE.is_match(&text) {
            card.add_tags(["Counters Matter", "-1/-1 Counters"]);
        }
        for counter_name in NAMED_COUNTER_TYPES {
            let needle = format!("{} counter", counter_name.to_lowercase());
            if text.to_lowercase().contains(&needle) {
                card.add_tags(["Counters Matter"]);
                card.theme_tags.insert(format!("{counter_name} Counters"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::ColorSet;

    fn card(text: &str) -> Card {
        Card {
            name: "X".into(),
            face_name: "X".into(),
            edhrec_rank: None,
            color_identity: ColorSet::empty(),
            colors: ColorSet::empty(),
            mana_cost: None,
            mana_value: 0,
            type_line: "Creature".into(),
            power: None,
            toughness: None,
            oracle_text: Some(text.into()),
            keywords: Default::default(),
            creature_types: Default::default(),
            theme_tags: Default::default(),
            layout: "normal".into(),
            side: String::new(),
        }
    }

    #[test]
    fn tags_plus_one_counters() {
        let mut cards = vec![card("Put a +1/+1 counter on target creature.")];
        apply(&mut cards);
        assert!(cards[0].has_tag("+1/+1 Counters"));
        assert!(cards[0].has_tag("Counters Matter"));
    }

    #[test]
    fn tags_named_counter_type() {
        let mut cards = vec![card("Put an energy counter on target creature.")];
        apply(&mut cards);
        assert!(cards[0].has_tag("Energy Counters"));
    }
}
