//! Phase 1-2: creature-type extraction and the Outlaw rollup.

use std::collections::BTreeSet;

use crate::card::Card;

/// The closed vocabulary of creature-type tokens the engine recognizes.
/// Anything outside this list found in a type line (set names,
/// descriptors) is not treated as a creature type.
pub const CREATURE_TYPES: &[&str] = &[
    "Advisor", "Aetherborn", "Alien", "Ally", "Angel", "Antelope", "Ape", "Archer", "Archon",
    "Armadillo", "Army", "Artificer", "Assassin", "Assembly-Worker", "Astartes", "Atog", "Aurochs",
    "Automaton", "Avatar", "Azra", "Badger", "Balloon", "Barbarian", "Bard", "Basilisk", "Bat",
    "Bear", "Beast", "Beaver", "Beeble", "Beholder", "Berserker", "Bird", "Blinkmoth", "Boar",
    "Brainiac", "Bringer", "Brushwagg", "C'tan", "Camarid", "Camel", "Capybara", "Caribou",
    "Carrier", "Cat", "Centaur", "Chicken", "Child", "Chimera", "Citizen", "Cleric", "Clown",
    "Cockatrice", "Construct", "Coward", "Coyote", "Crab", "Crocodile", "Custodes", "Cyberman",
    "Cyclops", "Dalek", "Dauthi", "Demigod", "Demon", "Deserter", "Detective", "Devil", "Dinosaur",
    "Djinn", "Doctor", "Dog", "Dragon", "Drake", "Dreadnought", "Drone", "Druid", "Dryad", "Dwarf",
    "Efreet", "Egg", "Elder", "Eldrazi", "Elemental", "Elephant", "Elf", "Elk", "Employee", "Eye",
    "Faerie", "Ferret", "Fish", "Flagbearer", "Fox", "Fractal", "Frog", "Fungus", "Gamer",
    "Gargoyle", "Germ", "Giant", "Gith", "Glimmer", "Gnoll", "Gnome", "Goat", "Goblin", "God",
    "Golem", "Gorgon", "Graveborn", "Gremlin", "Griffin", "Guest", "Hag", "Halfling", "Hamster",
    "Harpy", "Head", "Hellion", "Hero", "Hippo", "Hippogriff", "Homarid", "Homunculus", "Hornet",
    "Horror", "Horse", "Human", "Hydra", "Hyena", "Illusion", "Imp", "Incarnation", "Inkling",
    "Inquisitor", "Insect", "Jackal", "Jellyfish", "Juggernaut", "Kavu", "Kirin", "Kithkin",
    "Knight", "Kobold", "Kor", "Kraken", "Lamia", "Lammasu", "Leech", "Leviathan", "Lhurgoyf",
    "Licid", "Lizard", "Manticore", "Masticore", "Mercenary", "Merfolk", "Metathran", "Minion",
    "Minotaur", "Mite", "Mole", "Monger", "Mongoose", "Monk", "Monkey", "Moonfolk", "Mount",
    "Mouse", "Mutant", "Myr", "Mystic", "Naga", "Nautilus", "Necron", "Nephilim", "Nightmare",
    "Nightstalker", "Ninja", "Noble", "Noggle", "Nomad", "Nymph", "Octopus", "Ogre", "Ooze", "Orb",
    "Orc", "Orgg", "Otter", "Ouphe", "Ox", "Oyster", "Pangolin", "Peasant", "Pegasus", "Pentavite",
    "Performer", "Pest", "Phelddagrif", "Phoenix", "Phyrexian", "Pilot", "Pincher", "Pirate",
    "Plant", "Porcupine", "Possum", "Praetor", "Primarch", "Prism", "Processor", "Rabbit",
    "Raccoon", "Ranger", "Rat", "Rebel", "Reflection", "Reveler", "Rhino", "Rigger", "Robot",
    "Rogue", "Rukh", "Sable", "Salamander", "Samurai", "Sand", "Saproling", "Satyr", "Scarecrow",
    "Scientist", "Scion", "Scorpion", "Scout", "Sculpture", "Serf", "Serpent", "Servo", "Shade",
    "Shaman", "Shapeshifter", "Shark", "Sheep", "Siren", "Skeleton", "Skunk", "Slith", "Sliver",
    "Sloth", "Slug", "Snail", "Snake", "Soldier", "Soltari", "Spawn", "Specter", "Spellshaper",
    "Sphinx", "Spider", "Spike", "Spirit", "Splinter", "Sponge", "Spy", "Squid", "Squirrel",
    "Starfish", "Surrakar", "Survivor", "Synth", "Teddy", "Tentacle", "Tetravite", "Thalakos",
    "Thopter", "Thrull", "Tiefling", "Time Lord", "Toy", "Treefolk", "Trilobite", "Triskelavite",
    "Troll", "Turtle", "Tyranid", "Unicorn", "Urzan", "Vampire", "Varmint", "Vedalken", "Volver",
    "Wall", "Walrus", "Warlock", "Warrior", "Wasp", "Weasel", "Weird", "Werewolf", "Whale",
    "Wizard", "Wolf", "Wolverine", "Wombat", "Worm", "Wraith", "Wurm", "Yeti", "Zombie", "Zubera",
];

/// Card-type and non-creature subtype tokens that must never be read as
/// a creature type, even though they sometimes appear after the dash
/// (e.g. on vehicles or artifact creatures).
const NON_CREATURE_TYPES: &[&str] = &[
    "Legendary", "Creature", "Enchantment", "Artifact", "Battle", "Sorcery", "Instant", "Land",
    "Blood", "Clue", "Food", "Gold", "Incubator", "Junk", "Map", "Powerstone", "Treasure",
    "Equipment", "Fortification", "Vehicle", "Bobblehead", "Attraction", "Contraption", "Siege",
    "Aura", "Background", "Saga", "Role", "Shard", "Cartouche", "Case", "Class", "Curse", "Rune",
    "Shrine", "Plains", "Island", "Swamp", "Forest", "Mountain", "Cave", "Desert", "Gate", "Lair",
    "Locus", "Mine", "Power-Plant", "Sphere", "Tower", "Urza's",
];

/// Cards whose oracle text contains a creature-type word that does not
/// describe the card itself (e.g. a card referencing "Dragons" in a
/// reminder-text sense). Excluded from the oracle-text fold-in scan.
const ORACLE_SCAN_IGNORE_LIST: &[&str] = &["Song of the Dryads"];

const OUTLAW_TYPES: [&str; 5] = ["Assassin", "Mercenary", "Pirate", "Rogue", "Warlock"];

fn subtypes_after_dash(type_line: &str) -> Vec<&str> {
    type_line
        .split(" — ")
        .nth(1)
        .map(|tail| tail.split_whitespace().collect())
        .unwrap_or_default()
}

/// Phase 1: extracts `creature_types` for every `Creature` row by parsing
/// the post-em-dash portion of the type line, then folding in bare
/// mentions of canonical creature types found in the oracle text.
pub fn extract_creature_types(cards: &mut [Card]) {
    for card in cards.iter_mut() {
        if !card.is_creature() {
            continue;
        }
        let mut types = BTreeSet::new();
        for token in subtypes_after_dash(&card.type_line) {
            if CREATURE_TYPES.contains(&token) && !NON_CREATURE_TYPES.contains(&token) {
                types.insert(token.to_string());
            }
        }
        if !ORACLE_SCAN_IGNORE_LIST.contains(&card.name.as_str()) {
            let text = card.oracle_text().to_string();
            for candidate in CREATURE_TYPES {
                if *candidate != card.name && text.contains(candidate) {
                    types.insert(candidate.to_string());
                }
            }
        }
        card.creature_types = types;
    }
}

/// Phase 2: adds the `Outlaw` creature type to any row whose
/// `creature_types` already contains one of the five outlaw tribes.
pub fn apply_outlaw_rollup(cards: &mut [Card]) {
    for card in cards.iter_mut() {
        if OUTLAW_TYPES.iter().any(|t| card.creature_types.contains(*t)) {
            card.creature_types.insert("Outlaw".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::ColorSet;

    fn creature(name: &str, type_line: &str, text: &str) -> Card {
        Card {
            name: name.to_string(),
            face_name: name.to_string(),
            edhrec_rank: None,
            color_identity: ColorSet::empty(),
            colors: ColorSet::empty(),
            mana_cost: None,
            mana_value: 0,
            type_line: type_line.to_string(),
            power: Some("1".to_string()),
            toughness: Some("1".to_string()),
            oracle_text: Some(text.to_string()),
            keywords: Default::default(),
            creature_types: Default::default(),
            theme_tags: Default::default(),
            layout: "normal".to_string(),
            side: String::new(),
        }
    }

    #[test]
    fn extracts_subtypes_after_dash() {
        let mut cards = vec![creature("Goblin Guide", "Creature — Goblin", "")];
        extract_creature_types(&mut cards);
        assert!(cards[0].creature_types.contains("Goblin"));
    }

    #[test]
    fn outlaw_rollup_fires_on_any_outlaw_tribe() {
        let mut cards = vec![creature("Orcish Bowmasters", "Creature — Orc Rogue", "")];
        extract_creature_types(&mut cards);
        apply_outlaw_rollup(&mut cards);
        assert!(cards[0].creature_types.contains("Outlaw"));
    }

    #[test]
    fn non_creature_rows_are_untouched() {
        let mut cards = vec![creature("Sol Ring", "Artifact", "")];
        cards[0].type_line = "Artifact".to_string();
        extract_creature_types(&mut cards);
        assert!(cards[0].creature_types.is_empty());
    }
}
