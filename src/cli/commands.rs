//! Drives one full deck-construction run: load corpus, tag, select a
//! commander, resolve themes, compose, finalize.

use colored::Colorize;

use crate::card::partition::CANONICAL_IDENTITIES;
use crate::card::{load_commander_pool, load_full_corpus, partition_by_color, Card, ColorSet};
use crate::commander::{resolve_themes, select_commander, ThemeWeights};
use crate::composer::compose_deck;
use crate::config::{LandPreferences, RunConfig};
use crate::error::DeckResult;
use crate::price::{PriceGate, ScryfallPriceOracle};
use crate::tagger::TagEngine;
use crate::ui::{TerminalUi, UserInterface};

use super::args::Cli;

pub async fn run(cli: Cli) {
    let ui = TerminalUi::new();

    match run_build(&cli, &ui).await {
        Ok(path) => {
            println!();
            println!("{}", format!("Deck list written to {}", path).green().bold());
        }
        Err(e) => {
            eprintln!("{}: {}", "Error".red(), e);
        }
    }
}

async fn run_build(cli: &Cli, ui: &dyn UserInterface) -> DeckResult<String> {
    ui.display(&format!("Loading card corpus from {}", cli.corpus));
    let corpus = load_full_corpus(&cli.corpus)?;
    let tagged = TagEngine::run(corpus);
    let commander_pool = load_commander_pool(&tagged);

    let commander = select_commander(&commander_pool, ui)?;
    let weights = resolve_themes(&commander, ui)?;

    let slices = partition_by_color(tagged);
    // A commander's legal pool is every slice whose color identity is a
    // subset of its own — not just the one exact-match slice. An Azorius
    // commander draws from colorless + blue + white + azorius, mirroring
    // `MONO_COLOR_MAP`/`DUAL_COLOR_MAP`'s `files_to_load` lists.
    let pool: Vec<Card> = CANONICAL_IDENTITIES
        .iter()
        .filter(|name| ColorSet::from_canonical_name(name).is_subset(&commander.color_identity))
        .flat_map(|name| slices.get(*name).cloned().unwrap_or_default())
        .collect();

    let mut config = RunConfig {
        output_dir: cli.output_dir.clone(),
        ..RunConfig::default()
    };
    // CLI flags override the $20.00/$400.00 `Ideals::default()` ceilings;
    // an omitted flag keeps the default rather than disabling the check.
    config.ideals.max_card_price = cli.max_card_price.or(config.ideals.max_card_price);
    config.ideals.max_deck_price = cli.max_deck_price.or(config.ideals.max_deck_price);
    let prefs = LandPreferences::default();

    let price_gate = if config.ideals.max_card_price.is_some() || config.ideals.max_deck_price.is_some() {
        PriceGate::new(
            Box::new(ScryfallPriceOracle::new()),
            config.ideals.max_card_price,
            config.ideals.max_deck_price,
        )
    } else {
        PriceGate::unlimited()
    };

    let (library, compose_result) = compose_deck(&pool, &commander, &weights, &config, &prefs, &price_gate, ui).await;
    if let Err(e) = &compose_result {
        ui.display(&format!("composition warning: {e}"));
    }

    describe_themes(ui, &weights);

    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S").to_string();
    let (stats, path) = crate::composer::finalize::finalize(library, &config.output_dir, &commander.name, &timestamp)?;
    ui.display(&format!(
        "Average mana value (nonland): {:.2}",
        stats.average_mana_value
    ));

    Ok(path.display().to_string())
}

fn describe_themes(ui: &dyn UserInterface, weights: &ThemeWeights) {
    let mut lines = vec![format!("Primary theme: {} ({:.0}%)", weights.primary.0, weights.primary.1 * 100.0)];
    if let Some((name, w)) = &weights.secondary {
        lines.push(format!("Secondary theme: {name} ({:.0}%)", w * 100.0));
    }
    if let Some((name, w)) = &weights.tertiary {
        lines.push(format!("Tertiary theme: {name} ({:.0}%)", w * 100.0));
    }
    if let Some((name, w)) = &weights.hidden {
        lines.push(format!("Hidden theme: {name} ({:.0}%)", w * 100.0));
    }
    ui.display(&lines.join("\n"));
}
