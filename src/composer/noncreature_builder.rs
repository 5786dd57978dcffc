//! The shared "add by tag" routine and the non-creature builders that
//! call it in the fixed order of §4.5.3: Ramp, Board Wipes, Interaction,
//! Card Advantage.

use crate::card::Card;
use crate::config::Ideals;
use crate::price::PriceGate;

use super::library::{allows_multiple_copies, DeckLibrary};
use super::scoring::sort_by_priority;

/// Which subset of the color-identity slice a builder draws from, per
/// the fixed per-builder pool policy of §4.5.3 (Open Question #1: kept
/// literally as this table, not re-derived per call site).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolScope {
    Full,
    NonCreature,
    Creature,
    NonPlaneswalker,
}

impl PoolScope {
    fn matches(self, card: &Card) -> bool {
        match self {
            PoolScope::Full => true,
            PoolScope::NonCreature => !card.is_creature(),
            PoolScope::Creature => card.is_creature(),
            PoolScope::NonPlaneswalker => !card.is_planeswalker(),
        }
    }
}

fn present_count(library: &DeckLibrary, tag: &str) -> u32 {
    library
        .entries()
        .iter()
        .filter(|e| e.theme_tags.iter().any(|t| t == tag))
        .map(|e| e.count)
        .sum()
}

fn creature_count(library: &DeckLibrary) -> u32 {
    library.entries().iter().filter(|e| e.card_type.contains("Creature")).map(|e| e.count).sum()
}

/// "Add by tag" (§4.5.3): counts already-present cards carrying `tag`;
/// if at or above `target`, does nothing. Otherwise picks up to
/// `target - present + 1` more from the top-by-rank subset of size
/// `ceil(remaining * 2.0)`, respecting the price ceiling and an
/// optional soft creature cap.
pub async fn add_by_tag(
    library: &mut DeckLibrary,
    price_gate: &PriceGate,
    pool: &[Card],
    scope: PoolScope,
    tag: &str,
    target: u32,
    theme_names: &[String],
    creature_cap: Option<u32>,
) {
    let present = present_count(library, tag);
    if present >= target {
        return;
    }
    let remaining = target - present;
    let pool_size = ((remaining as f64) * 2.0).ceil() as usize;

    let mut candidates: Vec<&Card> = pool
        .iter()
        .filter(|c| scope.matches(c))
        .filter(|c| c.theme_tags.iter().any(|t| t == tag))
        .filter(|c| !library.contains(&c.name) || allows_multiple_copies(&c.name))
        .collect();
    candidates.sort_by_key(|c| c.edhrec_rank.unwrap_or(u32::MAX));
    candidates.truncate(pool_size);
    sort_by_priority(&mut candidates, theme_names);

    let mut added = 0u32;
    let max_added = remaining + 1;
    for card in candidates {
        if added >= max_added {
            break;
        }
        if let Some(cap) = creature_cap {
            if card.is_creature() && creature_count(library) >= cap {
                continue;
            }
        }
        if price_gate.admit(&card.name).await {
            library.add(card);
            added += 1;
        }
    }
}

/// Runs Ramp, Board Wipes, Interaction, and Card Advantage in the fixed
/// order of §4.5.3, each via `add_by_tag`.
pub async fn build_noncreatures(
    pool: &[Card],
    ideals: &Ideals,
    theme_names: &[String],
    price_gate: &PriceGate,
    library: &mut DeckLibrary,
) {
    let soft_cap = (1.1 * ideals.creatures as f64).round() as u32;

    add_by_tag(
        library,
        price_gate,
        pool,
        PoolScope::NonCreature,
        "Mana Rock",
        (ideals.ramp as f64 / 3.0).ceil() as u32,
        theme_names,
        None,
    )
    .await;
    add_by_tag(
        library,
        price_gate,
        pool,
        PoolScope::Creature,
        "Mana Dork",
        (ideals.ramp as f64 / 4.0).ceil() as u32,
        theme_names,
        Some(soft_cap),
    )
    .await;
    add_by_tag(library, price_gate, pool, PoolScope::NonCreature, "Ramp", ideals.ramp, theme_names, None).await;

    add_by_tag(library, price_gate, pool, PoolScope::Full, "Board Wipes", ideals.wipes, theme_names, None).await;

    add_by_tag(
        library,
        price_gate,
        pool,
        PoolScope::NonPlaneswalker,
        "Removal",
        ideals.removal,
        theme_names,
        None,
    )
    .await;
    add_by_tag(
        library,
        price_gate,
        pool,
        PoolScope::NonPlaneswalker,
        "Protection",
        ideals.protection,
        theme_names,
        None,
    )
    .await;

    add_by_tag(
        library,
        price_gate,
        pool,
        PoolScope::Full,
        "Conditional Draw",
        (ideals.card_advantage as f64 * 0.2).ceil() as u32,
        theme_names,
        None,
    )
    .await;
    add_by_tag(
        library,
        price_gate,
        pool,
        PoolScope::NonPlaneswalker,
        "Unconditional Draw",
        (ideals.card_advantage as f64 * 0.8).ceil() as u32,
        theme_names,
        None,
    )
    .await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::ColorSet;

    fn card(name: &str, tags: &[&str]) -> Card {
        Card {
            name: name.into(),
            face_name: name.into(),
            edhrec_rank: Some(100),
            color_identity: ColorSet::empty(),
            colors: ColorSet::empty(),
            mana_cost: None,
            mana_value: 2,
            type_line: "Artifact".into(),
            power: None,
            toughness: None,
            oracle_text: None,
            keywords: Default::default(),
            creature_types: Default::default(),
            theme_tags: tags.iter().map(|s| s.to_string()).collect(),
            layout: "normal".into(),
            side: String::new(),
        }
    }

    fn commander() -> crate::card::CommanderProfile {
        crate::card::CommanderProfile {
            name: "X".into(),
            type_line: "Legendary Creature".into(),
            oracle_text: String::new(),
            power: "1".into(),
            toughness: "1".into(),
            mana_cost: String::new(),
            mana_value: 1,
            color_identity: ColorSet::empty(),
            colors: ColorSet::empty(),
            creature_types: Default::default(),
            commander_tags: Default::default(),
            themes: Vec::new(),
        }
    }

    #[tokio::test]
    async fn does_nothing_once_target_is_met() {
        let mut library = DeckLibrary::new(&commander());
        let ramp1 = card("Sol Ring", &["Ramp"]);
        library.add(&ramp1);
        let pool = vec![card("Other Ramp", &["Ramp"])];
        let gate = PriceGate::unlimited();
        add_by_tag(&mut library, &gate, &pool, PoolScope::NonCreature, "Ramp", 1, &[], None).await;
        assert!(!library.contains("Other Ramp"));
    }

    #[tokio::test]
    async fn adds_up_to_shortfall_plus_one() {
        let mut library = DeckLibrary::new(&commander());
        let pool = vec![card("A", &["Ramp"]), card("B", &["Ramp"]), card("C", &["Ramp"])];
        let gate = PriceGate::unlimited();
        add_by_tag(&mut library, &gate, &pool, PoolScope::NonCreature, "Ramp", 2, &[], None).await;
        let added = pool.iter().filter(|c| library.contains(&c.name)).count();
        assert!(added <= 3);
        assert!(added >= 2);
    }
}
