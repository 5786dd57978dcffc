//! Finalize (§4.5.5, §6): CMC/pip stats, duplicate-name collapse, the
//! fixed type-order sort with the commander pinned at row 0, and CSV
//! emission.
//!
//! Grounded on the teacher's `export/markdown.rs` (struct-holding
//! exporter pattern), retargeted to CSV since §6 requires CSV output,
//! not markdown.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::card::Color;
use crate::error::{DeckError, DeckResult};

use super::library::{DeckEntry, DeckLibrary};

/// Average mana value (over non-land entries) and colored-pip
/// distribution, computed for display purposes (§4.5.5).
#[derive(Debug, Clone)]
pub struct DeckStats {
    pub average_mana_value: f64,
    pub pip_distribution: HashMap<Color, u32>,
}

fn count_pips(mana_cost: &str, pips: &mut HashMap<Color, u32>) {
    for color in Color::ALL {
        let symbol = format!("{{{}}}", color.letter());
        let count = mana_cost.matches(&symbol).count() as u32;
        if count > 0 {
            *pips.entry(color).or_insert(0) += count;
        }
    }
}

pub fn compute_stats(entries: &[DeckEntry]) -> DeckStats {
    let mut total_mv = 0u64;
    let mut non_land_count = 0u64;
    let mut pips = HashMap::new();
    for entry in entries {
        if !entry.card_type.contains("Land") {
            total_mv += entry.mana_value as u64 * entry.count as u64;
            non_land_count += entry.count as u64;
        }
        for _ in 0..entry.count {
            count_pips(&entry.mana_cost, &mut pips);
        }
    }
    let average_mana_value = if non_land_count > 0 {
        total_mv as f64 / non_land_count as f64
    } else {
        0.0
    };
    DeckStats {
        average_mana_value,
        pip_distribution: pips,
    }
}

/// Fixed sort order for card types (§4.5.5). An entry's bucket is the
/// first name in this list that appears in its (possibly compound)
/// type line — `"Artifact Creature"` sorts as `Creature`.
const TYPE_ORDER: &[&str] = &[
    "Planeswalker",
    "Battle",
    "Creature",
    "Instant",
    "Sorcery",
    "Artifact",
    "Enchantment",
    "Land",
];

fn type_rank(card_type: &str) -> usize {
    TYPE_ORDER
        .iter()
        .position(|t| card_type.contains(t))
        .unwrap_or(TYPE_ORDER.len())
}

/// Formats an entry's display name: the bare name when `count == 1`
/// (Open Question #4), `"Name x N"` otherwise.
pub fn display_name(entry: &DeckEntry) -> String {
    if entry.count <= 1 {
        entry.name.clone()
    } else {
        format!("{} x {}", entry.name, entry.count)
    }
}

/// Stable-sorts entries by `(type_order, name)`, then moves the
/// commander to index 0.
pub fn sort_entries(mut entries: Vec<DeckEntry>) -> Vec<DeckEntry> {
    entries.sort_by(|a, b| {
        type_rank(&a.card_type)
            .cmp(&type_rank(&b.card_type))
            .then_with(|| a.name.cmp(&b.name))
    });
    if let Some(pos) = entries.iter().position(|e| e.is_commander) {
        let commander = entries.remove(pos);
        entries.insert(0, commander);
    }
    entries
}

/// `<output_dir>/<commander_name>_<YYYYMMDD-HHMMSS>.csv` (§6).
pub fn output_path(output_dir: &str, commander_name: &str, timestamp: &str) -> PathBuf {
    let safe_name: String = commander_name
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    Path::new(output_dir).join(format!("{safe_name}_{timestamp}.csv"))
}

fn output_err(message: impl std::fmt::Display) -> DeckError {
    DeckError::OutputError { message: message.to_string() }
}

/// Writes the finalized library to CSV with the columns required by §6.
pub fn write_deck_csv(path: &Path, entries: &[DeckEntry]) -> DeckResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| output_err(format!("{}: {e}", parent.display())))?;
    }
    let mut writer = csv::Writer::from_path(path).map_err(output_err)?;
    writer
        .write_record(["Card Name", "Card Type", "Mana Cost", "Mana Value", "Creature Types", "Themes", "Commander"])
        .map_err(output_err)?;

    for entry in entries {
        let creature_types = entry.creature_types.iter().cloned().collect::<Vec<_>>().join(", ");
        let themes = entry.theme_tags.iter().cloned().collect::<Vec<_>>().join(", ");
        writer
            .write_record([
                display_name(entry),
                entry.card_type.clone(),
                entry.mana_cost.clone(),
                entry.mana_value.to_string(),
                creature_types,
                themes,
                entry.is_commander.to_string(),
            ])
            .map_err(output_err)?;
    }
    writer.flush().map_err(output_err)?;
    Ok(())
}

/// Runs the finalize step over a completed library: stats, sort, and
/// write. Returns the stats for display and the path written to.
pub fn finalize(library: DeckLibrary, output_dir: &str, commander_name: &str, timestamp: &str) -> DeckResult<(DeckStats, PathBuf)> {
    let entries = sort_entries(library.into_entries());
    let stats = compute_stats(&entries);
    let path = output_path(output_dir, commander_name, timestamp);
    write_deck_csv(&path, &entries)?;
    Ok((stats, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn entry(name: &str, card_type: &str, is_commander: bool) -> DeckEntry {
        DeckEntry {
            name: name.into(),
            card_type: card_type.into(),
            mana_cost: String::new(),
            mana_value: 0,
            creature_types: BTreeSet::new(),
            theme_tags: BTreeSet::new(),
            is_commander,
            count: 1,
        }
    }

    #[test]
    fn commander_always_sorts_to_row_zero() {
        let entries = vec![
            entry("Forest", "Basic Land", false),
            entry("Atraxa, Praetors' Voice", "Legendary Creature", true),
            entry("Sol Ring", "Artifact", false),
        ];
        let sorted = sort_entries(entries);
        assert!(sorted[0].is_commander);
        assert_eq!(sorted[0].name, "Atraxa, Praetors' Voice");
    }

    #[test]
    fn artifact_creature_sorts_as_creature() {
        let entries = vec![entry("Wurmcoil Engine", "Artifact Creature — Wurm", false), entry("Sol Ring", "Artifact", false)];
        let sorted = sort_entries(entries);
        assert_eq!(sorted[0].name, "Wurmcoil Engine");
    }

    #[test]
    fn singleton_count_has_no_suffix() {
        let e = entry("Sol Ring", "Artifact", false);
        assert_eq!(display_name(&e), "Sol Ring");
    }

    #[test]
    fn multi_copy_count_gets_suffix() {
        let mut e = entry("Relentless Rats", "Creature — Rat", false);
        e.count = 12;
        assert_eq!(display_name(&e), "Relentless Rats x 12");
    }
}
