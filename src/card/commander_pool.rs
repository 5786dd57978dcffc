//! Restricts a corpus to commander-eligible rows.

use super::types::Card;

const COMMANDER_TYPE_MARKERS: [&str; 5] = [
    "Legendary Creature",
    "Legendary Artifact Creature",
    "Legendary Enchantment Creature",
    "Legendary Artifact",
    "Legendary Planeswalker",
];

const CAN_BE_COMMANDER_TEXT: &str = "can be your commander";

/// Cards banned in the Commander format, carried over from the original
/// implementation's `banned_cards` list.
pub const BANNED_CARDS: &[&str] = &[
    "Ancestral Recall",
    "Balance",
    "Biorhythm",
    "Black Lotus",
    "Braids, Cabal Minion",
    "Chaos Orb",
    "Coalition Victory",
    "Channel",
    "Dockside Extortionist",
    "Emrakul, the Aeons Torn",
    "Erayo, Soratami Ascendant",
    "Falling Star",
    "Fastbond",
    "Flash",
    "Gifts Ungiven",
    "Golos, Tireless Pilgrim",
    "Griselbrand",
    "Hullbreacher",
    "Iona, Shield of Emeria",
    "Karakas",
    "Jeweled Lotus",
    "Leovold, Emissary of Trest",
    "Library of Alexandria",
    "Limited Resources",
    "Lutri, the Spellchaser",
    "Mana Crypt",
    "Mox Emerald",
    "Mox Jet",
    "Mox Pearl",
    "Mox Ruby",
    "Mox Sapphire",
    "Nadu, Winged Wisdom",
    "Panoptic Mirror",
    "Paradox Engine",
    "Primeval Titan",
    "Prophet of Kruphix",
    "Recurring Nightmare",
    "Rofellos, Llanowar Emissary",
    "Shahrazad",
    "Sundering Titan",
    "Sway of the Stars",
    "Sylvan Primordial",
    "Time Vault",
    "Time Walk",
    "Tinker",
    "Tolarian Academy",
    "Trade Secrets",
    "Upheaval",
    "Yawgmoth's Bargain",
    "Invoke Prejudice",
    "Cleanse",
    "Stone-Throwing Devils",
    "Pradesh Gypsies",
    "Jihad",
    "Imprison",
    "Crusade",
];

fn is_commander_eligible(card: &Card) -> bool {
    COMMANDER_TYPE_MARKERS.iter().any(|marker| card.type_line.contains(marker))
        || card.oracle_text().contains(CAN_BE_COMMANDER_TEXT)
}

fn is_banned(card: &Card) -> bool {
    BANNED_CARDS.contains(&card.name.as_str())
}

/// Retains rows eligible to serve as a commander, with banned cards
/// removed.
pub fn load_commander_pool(cards: &[Card]) -> Vec<Card> {
    cards
        .iter()
        .filter(|c| is_commander_eligible(c) && !is_banned(c))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::types::ColorSet;

    fn card(name: &str, type_line: &str, text: &str) -> Card {
        Card {
            name: name.to_string(),
            face_name: name.to_string(),
            edhrec_rank: None,
            color_identity: ColorSet::empty(),
            colors: ColorSet::empty(),
            mana_cost: None,
            mana_value: 0,
            type_line: type_line.to_string(),
            power: None,
            toughness: None,
            oracle_text: Some(text.to_string()),
            keywords: Default::default(),
            creature_types: Default::default(),
            theme_tags: Default::default(),
            layout: "normal".to_string(),
            side: String::new(),
        }
    }

    #[test]
    fn admits_legendary_creatures_and_text_grants() {
        let pool = load_commander_pool(&[
            card("Atraxa, Praetors' Voice", "Legendary Creature — Phyrexian Angel", ""),
            card("Grist, the Hunger Tide", "Legendary Planeswalker — Grist", ""),
            card("Gavi, Nest Warden", "Legendary Creature — Bird", "Gavi, Nest Warden can be your commander."),
            card("Lightning Bolt", "Instant", "Deals 3 damage."),
        ]);
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn removes_banned_cards() {
        let pool = load_commander_pool(&[card("Mana Crypt", "Legendary Artifact", "")]);
        assert!(pool.is_empty());
    }
}
