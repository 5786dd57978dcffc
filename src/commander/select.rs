//! `select_commander` (§4.4): exact match, fuzzy match, confirm loop.

use crate::card::{Card, CommanderProfile};
use crate::error::{DeckError, DeckResult};
use crate::ui::UserInterface;

use super::fuzzy::{is_confident_match, top_matches};
use super::validate::validate_commander;

const NONE_OF_THESE: &str = "None of these";

fn to_profile(card: &Card) -> CommanderProfile {
    CommanderProfile {
        name: card.name.clone(),
        type_line: card.type_line.clone(),
        oracle_text: card.oracle_text().to_string(),
        power: card.power.clone().unwrap_or_default(),
        toughness: card.toughness.clone().unwrap_or_default(),
        mana_cost: card.mana_cost.clone().unwrap_or_default(),
        mana_value: card.mana_value,
        color_identity: card.color_identity,
        colors: card.colors,
        creature_types: card.creature_types.clone(),
        commander_tags: card.theme_tags.clone(),
        themes: Vec::new(),
    }
}

fn find_by_name<'a>(pool: &'a [Card], name: &str) -> Option<&'a Card> {
    pool.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

fn resolve_one_name(pool: &[Card], input: &str, ui: &dyn UserInterface) -> DeckResult<Option<String>> {
    if let Some(card) = find_by_name(pool, input) {
        return Ok(Some(card.name.clone()));
    }

    let matches = top_matches(input, pool);
    if matches.is_empty() {
        return Ok(None);
    }
    if is_confident_match(&matches) {
        return Ok(Some(matches[0].name.clone()));
    }

    let mut choices: Vec<String> = matches.iter().map(|m| m.name.clone()).collect();
    choices.push(NONE_OF_THESE.to_string());
    let picked = ui.prompt_choice("Did you mean one of these?", &choices)?;
    if picked == NONE_OF_THESE {
        Ok(None)
    } else {
        Ok(Some(picked))
    }
}

/// Drives the full name-entry / fuzzy-match / confirm loop until the
/// user accepts a commander or explicitly cancels.
pub fn select_commander(pool: &[Card], ui: &dyn UserInterface) -> DeckResult<CommanderProfile> {
    loop {
        let input = ui.prompt_text("Enter your commander's name")?;
        let Some(resolved_name) = resolve_one_name(pool, &input, ui)? else {
            ui.display("No match found, try again.");
            continue;
        };
        let Some(card) = find_by_name(pool, &resolved_name) else {
            ui.display("That card isn't in the commander pool.");
            continue;
        };

        ui.display(&format!(
            "{}\n{}\n{}/{}  {}",
            card.name, card.type_line, card.power.clone().unwrap_or_default(), card.toughness.clone().unwrap_or_default(), card.oracle_text()
        ));
        if ui.prompt_confirm("Use this commander?", true)? {
            validate_commander(card)?;
            return Ok(to_profile(card));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::ColorSet;
    use std::cell::RefCell;

    fn card(name: &str) -> Card {
        Card {
            name: name.into(),
            face_name: name.into(),
            edhrec_rank: None,
            color_identity: ColorSet::empty(),
            colors: ColorSet::empty(),
            mana_cost: None,
            mana_value: 2,
            type_line: "Legendary Creature — Human".into(),
            power: Some("2".into()),
            toughness: Some("2".into()),
            oracle_text: Some(String::new()),
            keywords: Default::default(),
            creature_types: Default::default(),
            theme_tags: Default::default(),
            layout: "normal".into(),
            side: String::new(),
        }
    }

    struct ScriptedUi {
        texts: RefCell<Vec<String>>,
        confirms: RefCell<Vec<bool>>,
    }

    impl UserInterface for ScriptedUi {
        fn prompt_text(&self, _message: &str) -> DeckResult<String> {
            Ok(self.texts.borrow_mut().remove(0))
        }
        fn prompt_number(&self, _message: &str, default: f64) -> DeckResult<f64> {
            Ok(default)
        }
        fn prompt_choice(&self, _message: &str, choices: &[String]) -> DeckResult<String> {
            Ok(choices[0].clone())
        }
        fn prompt_confirm(&self, _message: &str, _default: bool) -> DeckResult<bool> {
            Ok(self.confirms.borrow_mut().remove(0))
        }
        fn display(&self, _message: &str) {}
    }

    #[test]
    fn exact_case_insensitive_match_short_circuits() {
        let pool = vec![card("Atraxa, Praetors' Voice")];
        let ui = ScriptedUi {
            texts: RefCell::new(vec!["atraxa, praetors' voice".to_string()]),
            confirms: RefCell::new(vec![true]),
        };
        let profile = select_commander(&pool, &ui).unwrap();
        assert_eq!(profile.name, "Atraxa, Praetors' Voice");
    }

    #[test]
    fn rejecting_confirmation_returns_to_name_prompt() {
        let pool = vec![card("Atraxa, Praetors' Voice")];
        let ui = ScriptedUi {
            texts: RefCell::new(vec!["atraxa".to_string(), "atraxa, praetors' voice".to_string()]),
            confirms: RefCell::new(vec![false, true]),
        };
        let profile = select_commander(&pool, &ui).unwrap();
        assert_eq!(profile.name, "Atraxa, Praetors' Voice");
    }
}
