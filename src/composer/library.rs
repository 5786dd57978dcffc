//! `DeckEntry` / `DeckLibrary` (§3): the in-progress 100-card library.
//!
//! Grounded on the teacher's `deck/types.rs::Deck` (a builder-held
//! struct with `Default`-style construction) and `settings.py`'s
//! `MULTIPLE_COPY_CARDS` list for the count-field-instead-of-duplicate-
//! rows representation.

use std::collections::{BTreeSet, HashMap};

use crate::card::{Card, CommanderProfile};

/// Cards Commander format allows more than one copy of. The library
/// holds a single entry with a `count` field for these; only at
/// finalization is the display name rebuilt as `"Name x N"`.
pub const MULTIPLE_COPY_CARDS: &[&str] = &[
    "Dragon's Approach",
    "Hare Apparent",
    "Nazgûl",
    "Persistent Petitioners",
    "Rat Colony",
    "Relentless Rats",
    "Seven Dwarves",
    "Shadowborn Apostle",
    "Slime Against Humanity",
    "Templar Knight",
];

pub fn allows_multiple_copies(name: &str) -> bool {
    MULTIPLE_COPY_CARDS.iter().any(|c| *c == name) || name.starts_with("Snow-Covered ") || is_basic_land_name(name)
}

fn is_basic_land_name(name: &str) -> bool {
    matches!(name, "Plains" | "Island" | "Swamp" | "Mountain" | "Forest" | "Wastes")
}

/// A tuple `(name, card_type, mana_cost, mana_value, creature_types,
/// theme_tags, is_commander)` plus a `count` field (§3).
#[derive(Debug, Clone)]
pub struct DeckEntry {
    pub name: String,
    pub card_type: String,
    pub mana_cost: String,
    pub mana_value: u32,
    pub creature_types: BTreeSet<String>,
    pub theme_tags: BTreeSet<String>,
    pub is_commander: bool,
    pub count: u32,
}

impl DeckEntry {
    fn from_card(card: &Card, is_commander: bool) -> Self {
        Self {
            name: card.name.clone(),
            card_type: card.type_line.clone(),
            mana_cost: card.mana_cost.clone().unwrap_or_default(),
            mana_value: card.mana_value,
            creature_types: card.creature_types.clone(),
            theme_tags: card.theme_tags.clone(),
            is_commander,
            count: 1,
        }
    }
}

/// The library being assembled (§3). Grows monotonically through
/// composition, then undergoes bounded land-pruning, then is sorted and
/// written. Entries are keyed by name for O(1) "already in the library"
/// checks; insertion order is preserved separately for stable sorting
/// at finalize.
#[derive(Debug, Clone)]
pub struct DeckLibrary {
    entries: HashMap<String, DeckEntry>,
    order: Vec<String>,
}

impl DeckLibrary {
    /// Seeds the library with the commander at its reserved slot.
    pub fn new(commander: &CommanderProfile) -> Self {
        let mut lib = Self {
            entries: HashMap::new(),
            order: Vec::new(),
        };
        let entry = DeckEntry {
            name: commander.name.clone(),
            card_type: commander.type_line.clone(),
            mana_cost: commander.mana_cost.clone(),
            mana_value: commander.mana_value,
            creature_types: commander.creature_types.clone(),
            theme_tags: commander.commander_tags.clone(),
            is_commander: true,
            count: 1,
        };
        lib.order.push(entry.name.clone());
        lib.entries.insert(entry.name.clone(), entry);
        lib
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of physical cards represented (commander + every copy of
    /// every entry) — the count `|library| = 100` in T8 refers to.
    pub fn len(&self) -> usize {
        self.entries.values().map(|e| e.count as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn land_count(&self) -> usize {
        self.entries
            .values()
            .filter(|e| e.card_type.contains("Land"))
            .map(|e| e.count as usize)
            .sum()
    }

    pub fn basic_count(&self, basic_name: &str) -> u32 {
        self.entries.get(basic_name).map(|e| e.count).unwrap_or(0)
    }

    /// Adds one copy of `card`. If `card.name` is on the multiple-copy
    /// list and already present, increments its count instead of
    /// refusing the insert (the "exceptions for the multiple-copy list"
    /// referenced in §4.5.2).
    pub fn add(&mut self, card: &Card) {
        if let Some(existing) = self.entries.get_mut(&card.name) {
            if allows_multiple_copies(&card.name) {
                existing.count += 1;
            }
            return;
        }
        let entry = DeckEntry::from_card(card, false);
        self.order.push(entry.name.clone());
        self.entries.insert(entry.name.clone(), entry);
    }

    /// Adds `n` basic lands of a given display name, merging into an
    /// existing entry if present (basics are always on the
    /// multiple-copy allowance).
    pub fn add_basics(&mut self, name: &str, n: u32) {
        if n == 0 {
            return;
        }
        if let Some(existing) = self.entries.get_mut(name) {
            existing.count += n;
        } else {
            let entry = DeckEntry {
                name: name.to_string(),
                card_type: "Basic Land".to_string(),
                mana_cost: String::new(),
                mana_value: 0,
                creature_types: BTreeSet::new(),
                theme_tags: BTreeSet::new(),
                is_commander: false,
                count: n,
            };
            self.order.push(entry.name.clone());
            self.entries.insert(entry.name.clone(), entry);
        }
    }

    /// Removes one copy of a basic land by name; drops the entry
    /// entirely once its count reaches zero. Returns whether a copy was
    /// removed.
    pub fn remove_one_basic(&mut self, name: &str) -> bool {
        let Some(entry) = self.entries.get_mut(name) else {
            return false;
        };
        if entry.count == 0 {
            return false;
        }
        entry.count -= 1;
        if entry.count == 0 {
            self.entries.remove(name);
            self.order.retain(|n| n != name);
        }
        true
    }

    /// Removes an arbitrary non-basic entry by name (land pruning step
    /// 8's last resort).
    pub fn remove_entry(&mut self, name: &str) -> bool {
        if self.entries.remove(name).is_some() {
            self.order.retain(|n| n != name);
            true
        } else {
            false
        }
    }

    pub fn basic_land_names(&self) -> Vec<String> {
        self.order
            .iter()
            .filter(|n| is_basic_land_name(n) || n.starts_with("Snow-Covered "))
            .cloned()
            .collect()
    }

    pub fn non_basic_land_names(&self) -> Vec<String> {
        self.order
            .iter()
            .filter(|n| {
                let Some(e) = self.entries.get(*n) else { return false };
                e.card_type.contains("Land") && !is_basic_land_name(n) && !n.starts_with("Snow-Covered ")
            })
            .cloned()
            .collect()
    }

    /// Iterates entries in insertion order (commander first).
    pub fn entries(&self) -> Vec<&DeckEntry> {
        self.order.iter().filter_map(|n| self.entries.get(n)).collect()
    }

    pub fn into_entries(self) -> Vec<DeckEntry> {
        self.order
            .into_iter()
            .filter_map(|n| self.entries.get(&n).cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::ColorSet;

    fn commander() -> CommanderProfile {
        CommanderProfile {
            name: "Atraxa, Praetors' Voice".into(),
            type_line: "Legendary Creature — Phyrexian Angel Horror".into(),
            oracle_text: String::new(),
            power: "4".into(),
            toughness: "4".into(),
            mana_cost: "{G}{W}{U}{B}".into(),
            mana_value: 4,
            color_identity: ColorSet::parse("W, U, B, G"),
            colors: ColorSet::parse("W, U, B, G"),
            creature_types: Default::default(),
            commander_tags: Default::default(),
            themes: Vec::new(),
        }
    }

    #[test]
    fn new_library_seeds_commander_at_slot_one() {
        let lib = DeckLibrary::new(&commander());
        assert_eq!(lib.len(), 1);
        assert!(lib.entries()[0].is_commander);
    }

    #[test]
    fn basics_merge_into_a_single_entry() {
        let mut lib = DeckLibrary::new(&commander());
        lib.add_basics("Forest", 5);
        lib.add_basics("Forest", 3);
        assert_eq!(lib.basic_count("Forest"), 8);
        assert_eq!(lib.len(), 9);
    }

    #[test]
    fn multiple_copy_card_increments_rather_than_refusing() {
        let mut lib = DeckLibrary::new(&commander());
        let apostle = Card {
            name: "Shadowborn Apostle".into(),
            face_name: "Shadowborn Apostle".into(),
            edhrec_rank: None,
            color_identity: ColorSet::parse("B"),
            colors: ColorSet::parse("B"),
            mana_cost: Some("{B}".into()),
            mana_value: 1,
            type_line: "Creature — Cleric".into(),
            power: Some("1".into()),
            toughness: Some("1".into()),
            oracle_text: None,
            keywords: Default::default(),
            creature_types: Default::default(),
            theme_tags: Default::default(),
            layout: "normal".into(),
            side: String::new(),
        };
        for _ in 0..9 {
            lib.add(&apostle);
        }
        assert!(lib.contains("Shadowborn Apostle"));
        assert_eq!(lib.entries().iter().find(|e| e.name == "Shadowborn Apostle").unwrap().count, 9);
    }
}
