//! Phase 12: creature tokens, token modifiers/doublers, tokens-matter.

use lazy_static::lazy_static;
use regex::Regex;

use crate::card::Card;

lazy_static! {
    static ref CREATURE_TOKEN_RE: Regex = Regex::new(r"(?i)create.*creature token").unwrap();
    static ref DOUBLER_RE: Regex =
        Regex::new(r"(?i)if you would create.*(instead create|create twice that many)|doubl\w* the number of tokens").unwrap();
    static ref TOKENS_MATTER_RE: Regex =
        Regex::new(r"(?i)tokens you control|for each token|whenever a token").unwrap();
}

pub fn apply(cards: &mut [Card]) {
    for card in cards.iter_mut() {
        let text = card.oracle_text().to_string();
        if CREATURE_TOKEN_RE.is_match(&text) {
            card.add_tags(["Token Creation"]);
        }
        if DOUBLER_RE.is_match(&text) {
            card.add_tags(["Token Creation", "Token Doubler"]);
        }
        if TOKENS_MATTER_RE.is_match(&text) {
            card.add_tags(["Tokens Matter"]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::ColorSet;

    #[test]
    fn detects_creature_token_creation() {
        let mut cards = vec![Card {
            name: "X".into(),
            face_name: "X".into(),
            edhrec_rank: None,
            color_identity: ColorSet::empty(),
            colors: ColorSet::empty(),
            mana_cost: None,
            mana_value: 0,
            type_line: "Sorcery".into(),
            power: None,
            toughness: None,
            oracle_text: Some("Create two 1/1 white Soldier creature tokens.".into()),
            keywords: Default::default(),
            creature_types: Default::default(),
            theme_tags: Default::default(),
            layout: "normal".into(),
            side: String::new(),
        }];
        apply(&mut cards);
        assert!(cards[0].has_tag("Token Creation"));
    }
}
