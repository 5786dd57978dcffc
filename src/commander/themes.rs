//! `resolve_themes` (§4.4): primary/secondary/tertiary/hidden theme
//! selection and weight normalization.

use std::collections::BTreeMap;

use crate::card::CommanderProfile;
use crate::error::DeckResult;
use crate::ui::UserInterface;

/// One resolved theme and its final, normalized weight.
#[derive(Debug, Clone)]
pub struct ThemeWeights {
    pub hidden: Option<(String, f64)>,
    pub primary: (String, f64),
    pub secondary: Option<(String, f64)>,
    pub tertiary: Option<(String, f64)>,
}

impl ThemeWeights {
    /// Themes in fixed priority order, skipping absent slots — the order
    /// the Deck Composer's builders consume them in.
    pub fn ordered(&self) -> Vec<(String, f64)> {
        let mut out = Vec::new();
        if let Some(h) = &self.hidden {
            out.push(h.clone());
        }
        out.push(self.primary.clone());
        if let Some(s) = &self.secondary {
            out.push(s.clone());
        }
        if let Some(t) = &self.tertiary {
            out.push(t.clone());
        }
        out
    }
}

/// Fixed table of `(kindred-theme, color, suggested-card)` triples that
/// trigger the hidden-theme prompt.
const HIDDEN_THEME_TABLE: &[(&str, char, &str)] = &[
    ("Rat Kindred", 'B', "Rat Colony / Relentless Rats"),
    ("Spellslinger", 'R', "Dragon's Approach"),
    ("Mill", 'B', "Persistent Petitioners"),
    ("Vampire Kindred", 'B', "Bloodline Keeper"),
    ("Elf Kindred", 'G', "Elvish Archdruid"),
];

/// Kindred-theme weight boosts applied when that theme is primary,
/// before the final normalization pass.
fn kindred_boost(theme: &str) -> f64 {
    if theme.ends_with("Kindred") {
        1.3
    } else {
        1.0
    }
}

fn find_hidden_suggestion(selected: &[String], colors: &str) -> Option<(&'static str, &'static str)> {
    HIDDEN_THEME_TABLE
        .iter()
        .find(|(theme, color, _)| selected.iter().any(|s| s == theme) && colors.contains(*color))
        .map(|(theme, _, card)| (*theme, *card))
}

/// Presents the commander's `commander_tags` as candidates, prompts for
/// primary (mandatory), secondary and tertiary (optional), offers a
/// hidden-theme prompt when eligible, then normalizes weights.
pub fn resolve_themes(profile: &CommanderProfile, ui: &dyn UserInterface) -> DeckResult<ThemeWeights> {
    let candidates: Vec<String> = profile.commander_tags.iter().cloned().collect();

    let primary_name = ui.prompt_choice("Choose your primary theme", &candidates)?;
    // Primary starts at 1.0 and stays there — the "reduction" §4.4 step 2
    // describes is the *relative* pull secondary/tertiary exert during
    // normalization, not a literal reassignment of the primary weight
    // (confirmed against the worked S6 normalization example).
    let primary_weight = 1.0;

    let remaining: Vec<String> = candidates.iter().filter(|c| **c != primary_name).cloned().collect();
    let mut secondary_name = None;
    let mut secondary_weight = 0.0;
    let mut tertiary_name = None;
    let mut tertiary_weight = 0.0;

    if !remaining.is_empty() && ui.prompt_confirm("Add a secondary theme?", false)? {
        let choice = ui.prompt_choice("Choose your secondary theme", &remaining)?;
        secondary_weight = 0.6;
        secondary_name = Some(choice);
    }

    if let Some(sec) = &secondary_name {
        let remaining2: Vec<String> = remaining.iter().filter(|c| *c != sec).cloned().collect();
        if !remaining2.is_empty() && ui.prompt_confirm("Add a tertiary theme?", false)? {
            let choice = ui.prompt_choice("Choose your tertiary theme", &remaining2)?;
            tertiary_weight = 0.3;
            tertiary_name = Some(choice);
        }
    }

    let mut selected: Vec<String> = vec![primary_name.clone()];
    selected.extend(secondary_name.clone());
    selected.extend(tertiary_name.clone());

    let mut hidden = None;
    if let Some((theme, suggestion)) = find_hidden_suggestion(&selected, &profile.color_identity.to_string()) {
        let prompt = format!("Build around {theme} with cards like {suggestion}?");
        if ui.prompt_confirm(&prompt, false)? {
            // Residual weight after primary/secondary/tertiary are
            // halved/thirded, per the in-tree formula (Open Question #3).
            let residual = (1.0 - primary_weight / 3.0 - secondary_weight / 2.0 - tertiary_weight).clamp(0.0, 1.0);
            hidden = Some((theme.to_string(), residual));
        }
    }

    let mut weights: BTreeMap<&str, f64> = BTreeMap::new();
    weights.insert("primary", primary_weight * kindred_boost(&primary_name));
    if secondary_weight > 0.0 {
        weights.insert("secondary", secondary_weight);
    }
    if tertiary_weight > 0.0 {
        weights.insert("tertiary", tertiary_weight);
    }
    if let Some((_, w)) = &hidden {
        weights.insert("hidden", *w);
    }

    let total: f64 = weights.values().sum();
    let normalize = |w: f64| if total > 0.0 { w / total } else { 0.0 };

    Ok(ThemeWeights {
        hidden: hidden.map(|(name, w)| (name, normalize(w))),
        primary: (primary_name.clone(), normalize(*weights.get("primary").unwrap())),
        secondary: secondary_name.map(|name| (name, normalize(secondary_weight))),
        tertiary: tertiary_name.map(|name| (name, normalize(tertiary_weight))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::ColorSet;
    use std::cell::RefCell;

    struct ScriptedUi {
        confirms: RefCell<Vec<bool>>,
        choices: RefCell<Vec<String>>,
    }

    impl UserInterface for ScriptedUi {
        fn prompt_text(&self, _message: &str) -> DeckResult<String> {
            unimplemented!()
        }
        fn prompt_number(&self, _message: &str, default: f64) -> DeckResult<f64> {
            Ok(default)
        }
        fn prompt_choice(&self, _message: &str, _choices: &[String]) -> DeckResult<String> {
            Ok(self.choices.borrow_mut().remove(0))
        }
        fn prompt_confirm(&self, _message: &str, _default: bool) -> DeckResult<bool> {
            Ok(self.confirms.borrow_mut().remove(0))
        }
        fn display(&self, _message: &str) {}
    }

    fn profile(tags: &[&str]) -> CommanderProfile {
        CommanderProfile {
            name: "X".into(),
            type_line: "Legendary Creature".into(),
            oracle_text: String::new(),
            power: "1".into(),
            toughness: "1".into(),
            mana_cost: String::new(),
            mana_value: 1,
            color_identity: ColorSet::parse("G"),
            colors: ColorSet::parse("G"),
            creature_types: Default::default(),
            commander_tags: tags.iter().map(|s| s.to_string()).collect(),
            themes: Vec::new(),
        }
    }

    #[test]
    fn primary_only_normalizes_to_full_weight() {
        let p = profile(&["Ramp"]);
        let ui = ScriptedUi {
            confirms: RefCell::new(vec![false]),
            choices: RefCell::new(vec!["Ramp".to_string()]),
        };
        let weights = resolve_themes(&p, &ui).unwrap();
        assert!((weights.primary.1 - 1.0).abs() < 1e-9);
        assert!(weights.secondary.is_none());
    }

    #[test]
    fn tokens_spellslinger_mill_normalize_per_s6() {
        let p = profile(&["Tokens", "Spellslinger", "Mill"]);
        let ui = ScriptedUi {
            confirms: RefCell::new(vec![true, true]),
            choices: RefCell::new(vec!["Tokens".to_string(), "Spellslinger".to_string(), "Mill".to_string()]),
        };
        let weights = resolve_themes(&p, &ui).unwrap();
        assert!((weights.primary.1 - 0.526).abs() < 0.01);
        assert!((weights.secondary.as_ref().unwrap().1 - 0.316).abs() < 0.01);
        assert!((weights.tertiary.as_ref().unwrap().1 - 0.158).abs() < 0.01);
        let total = weights.primary.1 + weights.secondary.as_ref().unwrap().1 + weights.tertiary.as_ref().unwrap().1;
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn weights_sum_to_one_with_secondary() {
        let p = profile(&["Ramp", "Lifegain"]);
        let ui = ScriptedUi {
            confirms: RefCell::new(vec![true, false]),
            choices: RefCell::new(vec!["Ramp".to_string(), "Lifegain".to_string()]),
        };
        let weights = resolve_themes(&p, &ui).unwrap();
        let total = weights.primary.1 + weights.secondary.as_ref().map(|(_, w)| *w).unwrap_or(0.0);
        assert!((total - 1.0).abs() < 1e-9);
    }
}
