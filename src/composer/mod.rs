//! Deck Composer (§4.5): builds a 100-card library around a resolved
//! commander and themes, then finalizes it to CSV.

pub mod creature_builder;
pub mod fill;
pub mod finalize;
pub mod land_builder;
pub mod land_tables;
pub mod library;
pub mod noncreature_builder;
pub mod scoring;

pub use finalize::DeckStats;
pub use library::DeckLibrary;

use crate::card::{Card, CommanderProfile};
use crate::commander::ThemeWeights;
use crate::config::{LandPreferences, RunConfig};
use crate::error::DeckResult;
use crate::price::PriceGate;
use crate::ui::UserInterface;

/// Runs the full builder pipeline — lands, creatures, non-creatures,
/// fill-to-100 — over one color-identity slice, in the fixed order
/// §4.5 lays out. Returns the assembled library even when fill-to-100
/// falls short; the caller decides whether to surface that as a
/// warning (§7).
pub async fn compose_deck(
    pool: &[Card],
    commander: &CommanderProfile,
    weights: &ThemeWeights,
    config: &RunConfig,
    prefs: &LandPreferences,
    price_gate: &PriceGate,
    ui: &dyn UserInterface,
) -> (DeckLibrary, DeckResult<()>) {
    let mut library = DeckLibrary::new(commander);
    let theme_names: Vec<String> = weights.ordered().into_iter().map(|(name, _)| name).collect();

    if let Err(e) = land_builder::build_lands(
        pool,
        commander,
        &theme_names,
        &config.ideals,
        prefs,
        price_gate,
        ui,
        &mut library,
    )
    .await
    {
        ui.display(&format!("land building warning: {e}"));
    }

    creature_builder::build_creatures(pool, weights, &config.ideals, price_gate, &mut library).await;

    noncreature_builder::build_noncreatures(pool, &config.ideals, &theme_names, price_gate, &mut library).await;

    let fill_result = fill::fill_to_100(pool, weights, price_gate, &mut library).await;

    let price_result = price_gate.check_deck();
    if let Err(e) = &price_result {
        ui.display(&format!("price warning: {e}"));
    }

    (library, fill_result.and(price_result))
}
