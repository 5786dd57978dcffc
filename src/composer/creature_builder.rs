//! Theme-weighted creature builder (§4.5.2).
//!
//! Grounded on spec's exact formulas; shares the `add_by_tag` routine
//! (in `noncreature_builder.rs`) conceptually, but creature selection
//! additionally weighs by theme and by a multi-match priority score —
//! grounded on the teacher's `synergy/detector.rs::aggregate_themes`
//! (HashMap accumulation + sort-by-count pattern).

use crate::card::Card;
use crate::commander::ThemeWeights;
use crate::config::Ideals;
use crate::price::PriceGate;

use super::library::{allows_multiple_copies, DeckLibrary};
use super::scoring::sort_by_priority;

fn ceil_div(target: u32, weight: f64, multiplier: f64) -> usize {
    (target as f64 * weight * multiplier).ceil().max(0.0) as usize
}

/// Tag a creature must carry to be eligible for a given theme: its own
/// name, or "Kindred Support" when the theme itself is a kindred theme.
fn theme_tag_for(theme: &str) -> Vec<String> {
    if theme.ends_with("Kindred") {
        vec![theme.to_string(), "Kindred Support".to_string()]
    } else {
        vec![theme.to_string()]
    }
}

/// Runs the theme-weighted creature fill over one color-identity slice.
pub async fn build_creatures(
    pool: &[Card],
    weights: &ThemeWeights,
    ideals: &Ideals,
    price_gate: &PriceGate,
    library: &mut DeckLibrary,
) {
    let ordered = weights.ordered();
    let all_theme_names: Vec<String> = ordered.iter().map(|(name, _)| name.clone()).collect();

    for (theme, weight) in &ordered {
        let wanted = theme_tag_for(theme);
        let pick_count = ceil_div(ideals.creatures, *weight, 0.9);
        let pool_size = ceil_div(ideals.creatures, *weight, 2.0);

        let mut candidates: Vec<&Card> = pool
            .iter()
            .filter(|c| c.is_creature())
            .filter(|c| wanted.iter().any(|t| c.theme_tags.contains(t)))
            .filter(|c| !library.contains(&c.name) || allows_multiple_copies(&c.name))
            .collect();
        candidates.sort_by_key(|c| c.edhrec_rank.unwrap_or(u32::MAX));
        candidates.truncate(pool_size);
        sort_by_priority(&mut candidates, &all_theme_names);

        let mut added = 0;
        for card in candidates {
            if added >= pick_count {
                break;
            }
            if price_gate.admit(&card.name).await {
                library.add(card);
                added += 1;
            }
        }
    }
}
