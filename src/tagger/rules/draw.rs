//! Phase 8: the draw family. Order within this file matters: Cycling,
//! Conditional Draw, Loot, Cost-paid Draw and Replacement Draw all run
//! before Unconditional Draw, whose tag is the residue after those
//! exclusions (§4.3.3).

use lazy_static::lazy_static;
use regex::Regex;

use crate::card::Card;

/// Every tag this family can emit; `Unconditional Draw`'s exclusion set
/// is defined directly against this list per the original's
/// `DRAW_RELATED_TAGS` table.
pub const DRAW_RELATED_TAGS: &[&str] = &[
    "Card Draw",
    "Conditional Draw",
    "Cycling",
    "Life to Draw",
    "Loot",
    "Replacement Draw",
    "Sacrifice to Draw",
    "Unconditional Draw",
];

const DRAW_EXCLUSION_PATTERNS: &[&str] = &["annihilator", "ravenous"];

const NUM_TO_SEARCH: &[&str] = &[
    "a", "an", "one", "1", "two", "2", "three", "3", "four", "4", "five", "5", "six", "6",
    "seven", "7", "eight", "8", "nine", "9", "ten", "10", "x", "one or more",
];

lazy_static! {
    static ref DRAW_N_CARDS: Regex = {
        let nums = NUM_TO_SEARCH.join("|");
        Regex::new(&format!(r"(?i)draw\s+(?:{nums})\s+cards?\b")).unwrap()
    };
    static ref CYCLING_RE: Regex = Regex::new(r"(?i)\bcycling\b|\bcycle\b").unwrap();
    static ref CONNIVE_RE: Regex = Regex::new(r"(?i)\bconnive\b").unwrap();
    static ref BLOOD_TOKEN_RE: Regex = Regex::new(r"(?i)blood token").unwrap();
    static ref LOOT_RE: Regex = Regex::new(r"(?i)draw.*then discard|discard.*then draw").unwrap();
    static ref CONDITIONAL_DRAW_RE: Regex =
        Regex::new(r"(?i)(when|whenever|if).*draw a card|draw a card for each").unwrap();
    static ref LIFE_TO_DRAW_RE: Regex = Regex::new(r"(?i)pay \d+ life.*draw|lose \d+ life.*draw").unwrap();
    static ref SACRIFICE_TO_DRAW_RE: Regex = Regex::new(r"(?i)sacrifice.*draw a card").unwrap();
    static ref REPLACEMENT_DRAW_RE: Regex =
        Regex::new(r"(?i)if you would draw a card|instead of drawing|draw.*instead of").unwrap();
    static ref WHEEL_RE: Regex = Regex::new(r"(?i)each player draws (?:seven|\d+) cards?|shuffles?.*hand into.*library").unwrap();
}

fn already_has_any(card: &Card, tags: &[&str]) -> bool {
    tags.iter().any(|t| card.has_tag(t))
}

pub fn apply(cards: &mut [Card]) {
    for card in cards.iter_mut() {
        let text = card.oracle_text().to_string();
        let mut drew_something = false;

        if CYCLING_RE.is_match(&text) {
            card.add_tags(["Cycling"]);
            drew_something = true;
        }
        if CONNIVE_RE.is_match(&text) {
            card.add_tags(["Loot", "Connive"]);
            drew_something = true;
        }
        if LOOT_RE.is_match(&text) {
            card.add_tags(["Loot"]);
            drew_something = true;
        }
        if BLOOD_TOKEN_RE.is_match(&text) {
            card.add_tags(["Loot", "Blood Tokens"]);
            drew_something = true;
        }
        if CONDITIONAL_DRAW_RE.is_match(&text) {
            card.add_tags(["Conditional Draw"]);
            drew_something = true;
        }
        if LIFE_TO_DRAW_RE.is_match(&text) {
            card.add_tags(["Life to Draw", "Conditional Draw"]);
            drew_something = true;
        }
        if SACRIFICE_TO_DRAW_RE.is_match(&text) {
            card.add_tags(["Sacrifice to Draw", "Conditional Draw"]);
            drew_something = true;
        }
        if REPLACEMENT_DRAW_RE.is_match(&text) {
            card.add_tags(["Replacement Draw"]);
            drew_something = true;
        }
        if WHEEL_RE.is_match(&text) {
            card.add_tags(["Wheels"]);
            drew_something = true;
        }

        // Unconditional Draw: the residue after every other draw-shaped
        // tag above has had a chance to fire.
        let excluded_tags = [
            "Cycling",
            "Conditional Draw",
            "Loot",
            "Replacement Draw",
            "Life to Draw",
            "Sacrifice to Draw",
            "Unconditional Draw",
        ];
        let has_exclusion_text = DRAW_EXCLUSION_PATTERNS.iter().any(|p| text.to_lowercase().contains(p));
        if DRAW_N_CARDS.is_match(&text) && !already_has_any(card, &excluded_tags) && !has_exclusion_text {
            card.add_tags(["Unconditional Draw"]);
            drew_something = true;
        }

        // `Card Draw` is the family-wide rollup: any sub-tag above
        // implies it, matching the original's `DRAW_RELATED_TAGS` usage
        // as a blanket "this card touches card draw" marker.
        if drew_something {
            card.add_tags(["Card Draw"]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::ColorSet;

    fn card(text: &str) -> Card {
        Card {
            name: "X".into(),
            face_name: "X".into(),
            edhrec_rank: None,
            color_identity: ColorSet::empty(),
            colors: ColorSet::empty(),
            mana_cost: None,
            mana_value: 0,
            type_line: "Instant".into(),
            power: None,
            toughness: None,
            oracle_text: Some(text.into()),
            keywords: Default::default(),
            creature_types: Default::default(),
            theme_tags: Default::default(),
            layout: "normal".into(),
            side: String::new(),
        }
    }

    #[test]
    fn plain_draw_gets_unconditional() {
        let mut cards = vec![card("Draw two cards.")];
        apply(&mut cards);
        assert!(cards[0].has_tag("Unconditional Draw"));
    }

    #[test]
    fn annihilator_never_gets_unconditional_draw() {
        let mut cards = vec![card("Annihilator 2. Draw two cards.")];
        apply(&mut cards);
        assert!(!cards[0].has_tag("Unconditional Draw"));
    }

    #[test]
    fn conditional_draw_excludes_unconditional() {
        let mut cards = vec![card("Whenever a creature enters, draw a card.")];
        apply(&mut cards);
        assert!(cards[0].has_tag("Conditional Draw"));
        assert!(!cards[0].has_tag("Unconditional Draw"));
    }

    #[test]
    fn cycling_excludes_unconditional_draw() {
        let mut cards = vec![card("Cycling {2}. Draw a card.")];
        apply(&mut cards);
        assert!(cards[0].has_tag("Cycling"));
        assert!(!cards[0].has_tag("Unconditional Draw"));
    }
}
