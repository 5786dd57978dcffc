//! Fill-to-100 (§4.5.4): once every targeted builder has run, top the
//! library up to exactly 100 entries by re-running theme-based
//! "add by tag" with shrinking weight multipliers.

use std::time::Instant;

use crate::card::Card;
use crate::commander::ThemeWeights;
use crate::config::{DECK_SIZE, FILL_DRY_ROUND_LIMIT, FILL_MIN_ATTEMPTS, FILL_TIME_BUDGET_SECS};
use crate::error::{DeckError, DeckResult};
use crate::price::PriceGate;

use super::library::DeckLibrary;
use super::noncreature_builder::{add_by_tag, PoolScope};

fn multiplier_for_slot(slot: &str) -> f64 {
    match slot {
        "hidden" => 1.0,
        "primary" => 0.5,
        "secondary" => 0.3,
        "tertiary" => 0.2,
        _ => 0.0,
    }
}

/// Named theme slots in the fixed order the fill loop cycles through.
fn named_slots(weights: &ThemeWeights) -> Vec<(&'static str, String)> {
    let mut slots = Vec::new();
    if let Some((name, _)) = &weights.hidden {
        slots.push(("hidden", name.clone()));
    }
    slots.push(("primary", weights.primary.0.clone()));
    if let Some((name, _)) = &weights.secondary {
        slots.push(("secondary", name.clone()));
    }
    if let Some((name, _)) = &weights.tertiary {
        slots.push(("tertiary", name.clone()));
    }
    slots
}

/// Runs the fill-to-100 loop. Returns `Ok(())` once `library.len() ==
/// 100`; returns `Err(CompositionIncomplete)` (non-fatal, per §7) if
/// the loop exhausts its bounds first, leaving `library` short.
pub async fn fill_to_100(
    pool: &[Card],
    weights: &ThemeWeights,
    price_gate: &PriceGate,
    library: &mut DeckLibrary,
) -> DeckResult<()> {
    let initial_shortfall = DECK_SIZE.saturating_sub(library.len());
    if initial_shortfall == 0 {
        return Ok(());
    }

    let theme_names: Vec<String> = weights.ordered().into_iter().map(|(n, _)| n).collect();
    let slots = named_slots(weights);
    let max_attempts = FILL_MIN_ATTEMPTS.max(2 * initial_shortfall as u32);
    let deadline = Instant::now() + std::time::Duration::from_secs(FILL_TIME_BUDGET_SECS);

    let mut attempts = 0u32;
    let mut dry_rounds = 0u32;
    while library.len() < DECK_SIZE {
        if attempts >= max_attempts || Instant::now() >= deadline || dry_rounds >= FILL_DRY_ROUND_LIMIT {
            break;
        }
        let before = library.len();
        let shortfall = DECK_SIZE.saturating_sub(library.len()) as f64;

        for (slot, theme) in &slots {
            if library.len() >= DECK_SIZE {
                break;
            }
            let target = (shortfall * multiplier_for_slot(slot)).ceil().max(1.0) as u32;
            add_by_tag(library, price_gate, pool, PoolScope::Full, theme, target, &theme_names, None).await;
        }

        attempts += 1;
        if library.len() == before {
            dry_rounds += 1;
        } else {
            dry_rounds = 0;
        }
    }

    if library.len() < DECK_SIZE {
        return Err(DeckError::CompositionIncomplete { final_count: library.len() });
    }
    Ok(())
}
