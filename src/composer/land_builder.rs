//! Land builder (§4.5.1): basics, staples, fetches, kindred lands,
//! dual/triple lands, misc utility lands, then pruning to target.
//!
//! Grounded on the teacher's `deck/builder.rs` (`DeckBuilder`
//! consuming-builder-pattern struct), generalized from "a mana-symbol
//! deck config" to "a land sub-library", using `rand` for the sampling
//! steps the original implementation performs with `random.sample`.

use rand::seq::SliceRandom;
use rand::thread_rng;
use rand::Rng;

use crate::card::{Card, Color, CommanderProfile};
use crate::config::{Ideals, LandPreferences, LAND_PRUNE_ATTEMPT_MULTIPLIER};
use crate::error::DeckResult;
use crate::price::PriceGate;
use crate::ui::UserInterface;

use super::land_tables::{
    self, color_fetch_lands, dual_land_subtype, staple_land_predicates, triple_land_subtype,
    GENERIC_FETCH_LANDS, GUILD_NAMES, KINDRED_STAPLE_LANDS, SHARD_NAMES,
};
use super::library::DeckLibrary;

fn basic_land_name(color: Color, snow: bool) -> &'static str {
    if snow {
        color.snow_basic_land()
    } else {
        color.basic_land()
    }
}

/// `log::info!`s once the Wastes/no-snow-variant fallback (Open
/// Question #2) the first time a commander with the `Snow` tag and a
/// colorless-adjacent pip has to fall back to a non-snow basic.
fn add_basics(
    library: &mut DeckLibrary,
    commander: &CommanderProfile,
    total: u32,
    ui: &dyn UserInterface,
) {
    let colors: Vec<Color> = commander.colors.iter().collect();
    if colors.is_empty() {
        library.add_basics("Wastes", total);
        return;
    }
    let snow = commander.commander_tags.iter().any(|t| t == "Snow");
    if snow {
        ui.display("Commander carries the Snow tag: using snow-covered basics (Wastes has no snow variant).");
    }

    let per_color = total / colors.len() as u32;
    let remainder = total % colors.len() as u32;
    for (i, color) in colors.iter().enumerate() {
        let mut n = per_color;
        if (i as u32) < remainder {
            n += 1;
        }
        library.add_basics(basic_land_name(*color, snow), n);
    }
}

fn add_staples(library: &mut DeckLibrary, commander: &CommanderProfile, pool: &[Card], staples_added: &mut Vec<String>) {
    for (name, predicate) in staple_land_predicates() {
        if library.contains(name) {
            continue;
        }
        if !pool.iter().any(|c| c.name == name) {
            continue;
        }
        let power: i32 = commander.power.parse().unwrap_or(0);
        if predicate(&commander.commander_tags, commander.color_identity, power) {
            if let Some(card) = pool.iter().find(|c| c.name == name) {
                library.add(card);
                staples_added.push(name.to_string());
            }
        }
    }
}

async fn add_fetch_lands(
    library: &mut DeckLibrary,
    commander: &CommanderProfile,
    pool: &[Card],
    prefs: &LandPreferences,
    price_gate: &PriceGate,
    ui: &dyn UserInterface,
) -> DeckResult<()> {
    let k = ui
        .prompt_number(
            "How many fetch lands would you like? (0-9)",
            prefs.fetch_land_count as f64,
        )
        .map(|n| (n.round() as i64).clamp(0, 9) as usize)
        .unwrap_or(prefs.fetch_land_count as usize);
    if k == 0 {
        return Ok(());
    }

    let mut names: Vec<&str> = GENERIC_FETCH_LANDS.to_vec();
    for color in commander.colors.iter() {
        names.extend(color_fetch_lands(color));
    }
    names.sort();
    names.dedup();

    let mut candidates: Vec<&Card> = pool.iter().filter(|c| names.contains(&c.name.as_str())).collect();
    candidates.retain(|c| !library.contains(&c.name));

    let mut admitted = Vec::new();
    for card in &candidates {
        if admitted.len() >= k {
            break;
        }
        if price_gate.admit(&card.name).await {
            admitted.push(*card);
        }
    }
    // Sample without replacement unless the admitted pool is smaller
    // than k (with-replacement only then, per §4.5.1 step 3).
    let chosen: Vec<&Card> = if admitted.len() >= k {
        let mut rng = thread_rng();
        admitted.as_mut_slice().shuffle(&mut rng);
        admitted.into_iter().take(k).collect()
    } else {
        admitted
    };
    for card in chosen {
        library.add(card);
    }
    Ok(())
}

fn add_kindred_lands(library: &mut DeckLibrary, themes: &[String], pool: &[Card]) {
    let tribes: Vec<&str> = themes
        .iter()
        .filter_map(|t| t.strip_suffix(" Kindred"))
        .collect();
    if tribes.is_empty() {
        return;
    }
    for name in KINDRED_STAPLE_LANDS {
        if let Some(card) = pool.iter().find(|c| c.name == *name) {
            if !library.contains(&card.name) {
                library.add(card);
            }
        }
    }
    for card in pool.iter().filter(|c| c.is_land()) {
        if library.contains(&card.name) {
            continue;
        }
        let haystack = format!("{} {}", card.type_line, card.oracle_text());
        if tribes.iter().any(|tribe| haystack.to_lowercase().contains(&tribe.to_lowercase())) {
            library.add(card);
        }
    }
}

async fn add_dual_lands(
    library: &mut DeckLibrary,
    commander: &CommanderProfile,
    pool: &[Card],
    price_gate: &PriceGate,
    ui: &dyn UserInterface,
) -> DeckResult<()> {
    if commander.colors.len() < 2 {
        return Ok(());
    }
    if !ui.prompt_confirm("Include guild dual lands for your commander's colors?", true).unwrap_or(true) {
        return Ok(());
    }
    let present_guilds: Vec<&str> = GUILD_NAMES
        .iter()
        .copied()
        .filter(|g| guild_is_subset_of(g, commander))
        .collect();

    let mut matches: Vec<&Card> = Vec::new();
    for guild in present_guilds {
        let Some(subtype) = dual_land_subtype(guild) else { continue };
        matches.extend(pool.iter().filter(|c| c.is_land() && c.type_line.contains(subtype)));
    }
    matches.sort_by_key(|c| c.edhrec_rank.unwrap_or(u32::MAX));
    matches.dedup_by(|a, b| a.name == b.name);

    for card in matches {
        if library.contains(&card.name) {
            continue;
        }
        if price_gate.admit(&card.name).await {
            library.add(card);
        }
    }
    Ok(())
}

fn guild_is_subset_of(guild: &str, commander: &CommanderProfile) -> bool {
    // A guild's two colors must both appear in the commander's identity.
    let colors: Vec<Color> = commander.colors.iter().collect();
    for a in &colors {
        for b in &colors {
            if a == b {
                continue;
            }
            let mut pair = crate::card::ColorSet::empty();
            pair.insert(*a);
            pair.insert(*b);
            if pair.canonical_name() == guild {
                return true;
            }
        }
    }
    false
}

async fn add_triple_lands(
    library: &mut DeckLibrary,
    commander: &CommanderProfile,
    pool: &[Card],
    price_gate: &PriceGate,
    ui: &dyn UserInterface,
) -> DeckResult<()> {
    if commander.colors.len() < 3 {
        return Ok(());
    }
    if !ui.prompt_confirm("Include shard/wedge triple lands?", true).unwrap_or(true) {
        return Ok(());
    }
    let colors: Vec<Color> = commander.colors.iter().collect();
    let mut matches: Vec<&Card> = Vec::new();
    for shard in SHARD_NAMES {
        let Some(subtype) = triple_land_subtype(shard) else { continue };
        let triple_ok = combinations_of_three(&colors)
            .iter()
            .any(|combo| {
                let mut set = crate::card::ColorSet::empty();
                for c in combo {
                    set.insert(*c);
                }
                set.canonical_name() == *shard
            });
        if triple_ok {
            matches.extend(pool.iter().filter(|c| c.is_land() && c.type_line.contains(subtype)));
        }
    }
    matches.sort_by_key(|c| c.edhrec_rank.unwrap_or(u32::MAX));
    matches.dedup_by(|a, b| a.name == b.name);

    for card in matches {
        if library.contains(&card.name) {
            continue;
        }
        if price_gate.admit(&card.name).await {
            library.add(card);
        }
    }
    Ok(())
}

fn combinations_of_three(colors: &[Color]) -> Vec<[Color; 3]> {
    let mut out = Vec::new();
    for i in 0..colors.len() {
        for j in (i + 1)..colors.len() {
            for k in (j + 1)..colors.len() {
                out.push([colors[i], colors[j], colors[k]]);
            }
        }
    }
    out
}

fn add_misc_lands(library: &mut DeckLibrary, pool: &[Card]) {
    let mut lands: Vec<&Card> = pool.iter().filter(|c| c.is_land() && !library.contains(&c.name)).collect();
    lands.sort_by_key(|c| c.edhrec_rank.unwrap_or(u32::MAX));
    lands.truncate(100);

    let mut rng = thread_rng();
    lands.shuffle(&mut rng);
    let count = rng.gen_range(5..=10);
    for card in lands.into_iter().take(count) {
        library.add(card);
    }
}

/// Step 8: prune basics back toward `ideals.lands`, always removing
/// from the color with the highest current basic count, up to
/// `1.5 * (ideals.lands - ideals.basic_lands)` attempts.
fn prune_to_target(library: &mut DeckLibrary, ideals: &Ideals, staples_added: &[String]) {
    let attempt_budget =
        (LAND_PRUNE_ATTEMPT_MULTIPLIER * (ideals.lands.saturating_sub(ideals.basic_lands)) as f64).round() as u32;
    let mut attempts = 0;
    while library.land_count() as u32 > ideals.lands && attempts < attempt_budget {
        let basics = library.basic_land_names();
        if basics.is_empty() {
            break;
        }
        let mut ranked = basics.clone();
        ranked.sort_by_key(|n| std::cmp::Reverse(library.basic_count(n)));
        let target = &ranked[0];
        if !library.remove_one_basic(target) {
            break;
        }
        attempts += 1;
    }

    // If still over and no basics remain, remove a random non-basic
    // that isn't protected.
    while library.land_count() as u32 > ideals.lands {
        let candidates: Vec<String> = library
            .non_basic_land_names()
            .into_iter()
            .filter(|n| !land_tables::is_protected(n, &[], staples_added))
            .collect();
        let Some(pick) = candidates.choose(&mut thread_rng()) else {
            break;
        };
        if !library.remove_entry(pick) {
            break;
        }
    }
}

/// Runs the full land builder over one color-identity slice.
pub async fn build_lands(
    pool: &[Card],
    commander: &CommanderProfile,
    themes: &[String],
    ideals: &Ideals,
    prefs: &LandPreferences,
    price_gate: &PriceGate,
    ui: &dyn UserInterface,
    library: &mut DeckLibrary,
) -> DeckResult<()> {
    let basic_target = ideals.lands.saturating_sub(land_tables::NON_BASIC_RESERVE);
    add_basics(library, commander, basic_target, ui);

    let mut staples_added = Vec::new();
    add_staples(library, commander, pool, &mut staples_added);

    add_fetch_lands(library, commander, pool, prefs, price_gate, ui).await?;

    add_kindred_lands(library, themes, pool);

    if prefs.include_dual_lands {
        add_dual_lands(library, commander, pool, price_gate, ui).await?;
    }
    if prefs.include_triple_lands {
        add_triple_lands(library, commander, pool, price_gate, ui).await?;
    }

    add_misc_lands(library, pool);

    prune_to_target(library, ideals, &staples_added);
    Ok(())
}
