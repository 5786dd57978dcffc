//! `validate_commander` (§4.4).

use crate::card::{Card, ColorSet};
use crate::error::{CommanderValidationKind, DeckError, DeckResult};

const CAN_BE_COMMANDER_TEXT: &str = "can be your commander";

fn parse_stat(raw: &str) -> Option<i32> {
    if raw.contains('*') || raw.contains('X') {
        return Some(0);
    }
    raw.parse().ok()
}

/// Validates that `card` is legal as a commander: type line or grant
/// text, non-negative mana value, non-negative toughness (power may be
/// negative, as with `*-1/*`), and an expressible color identity.
pub fn validate_commander(card: &Card) -> DeckResult<()> {
    let type_line_ok = card.type_line.contains("Legendary") && card.type_line.contains("Creature");
    let text_grant = card.oracle_text().contains(CAN_BE_COMMANDER_TEXT);
    if !type_line_ok && !text_grant {
        return Err(DeckError::CommanderValidation(CommanderValidationKind::TypeLine {
            type_line: card.type_line.clone(),
        }));
    }

    let toughness_ok = card
        .toughness
        .as_deref()
        .and_then(parse_stat)
        .map(|t| t >= 0)
        .unwrap_or(true);
    if !toughness_ok {
        return Err(DeckError::CommanderValidation(CommanderValidationKind::Stats {
            power: card.power.clone().unwrap_or_default(),
            toughness: card.toughness.clone().unwrap_or_default(),
        }));
    }

    if card.color_identity.canonical_name() == "colorless" && !card.color_identity.is_empty() {
        return Err(DeckError::CommanderValidation(CommanderValidationKind::ColorIdentity {
            raw: card.color_identity.to_string(),
        }));
    }
    let _: ColorSet = card.color_identity;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::ColorSet as CS;

    fn card(type_line: &str, text: &str, toughness: Option<&str>) -> Card {
        Card {
            name: "X".into(),
            face_name: "X".into(),
            edhrec_rank: None,
            color_identity: CS::parse("G"),
            colors: CS::parse("G"),
            mana_cost: None,
            mana_value: 2,
            type_line: type_line.into(),
            power: Some("-1".into()),
            toughness: toughness.map(str::to_string),
            oracle_text: Some(text.into()),
            keywords: Default::default(),
            creature_types: Default::default(),
            theme_tags: Default::default(),
            layout: "normal".into(),
            side: String::new(),
        }
    }

    #[test]
    fn legendary_creature_is_valid() {
        assert!(validate_commander(&card("Legendary Creature — Human", "", Some("3"))).is_ok());
    }

    #[test]
    fn text_grant_without_legendary_creature_is_valid() {
        assert!(validate_commander(&card("Creature — Bird", "This can be your commander.", Some("1"))).is_ok());
    }

    #[test]
    fn negative_power_is_allowed() {
        assert!(validate_commander(&card("Legendary Creature — Avatar", "", Some("0"))).is_ok());
    }

    #[test]
    fn non_legendary_non_grant_is_rejected() {
        assert!(validate_commander(&card("Creature — Human", "", Some("1"))).is_err());
    }
}
