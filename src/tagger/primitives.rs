//! Rule primitives shared by every rule family: five boolean mask
//! builders over a card row, plus the two numeric comparators and the
//! `apply_tags` contract.

use regex::{Regex, RegexBuilder};

use crate::card::Card;

/// Either a literal substring or a pre-compiled pattern. Callers choose
/// which at construction time; matching is always case-insensitive.
pub enum Pattern {
    Literal(String),
    Regex(Regex),
}

impl Pattern {
    pub fn literal(s: impl Into<String>) -> Self {
        Pattern::Literal(s.into())
    }

    pub fn regex(pattern: &str) -> Self {
        Pattern::Regex(
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .unwrap_or_else(|e| panic!("invalid pattern {pattern:?}: {e}")),
        )
    }

    fn is_match(&self, haystack: &str) -> bool {
        match self {
            Pattern::Literal(lit) => haystack.to_lowercase().contains(&lit.to_lowercase()),
            Pattern::Regex(re) => re.is_match(haystack),
        }
    }
}

/// A how-to-combine switch for multi-pattern masks: `Or` (default) or
/// `And`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combine {
    Or,
    And,
}

fn combine(haystack: &str, patterns: &[Pattern], mode: Combine) -> bool {
    match mode {
        Combine::Or => patterns.iter().any(|p| p.is_match(haystack)),
        Combine::And => !patterns.is_empty() && patterns.iter().all(|p| p.is_match(haystack)),
    }
}

/// Matches against `oracle_text`.
pub fn text_mask(card: &Card, patterns: &[Pattern], mode: Combine) -> bool {
    combine(card.oracle_text(), patterns, mode)
}

/// Matches against `type_line` (case-insensitive substring, OR-combined).
pub fn type_mask(card: &Card, patterns: &[Pattern]) -> bool {
    combine(&card.type_line, patterns, Combine::Or)
}

/// Matches against `name` (case-insensitive substring, OR-combined).
pub fn name_mask(card: &Card, patterns: &[Pattern]) -> bool {
    combine(&card.name, patterns, Combine::Or)
}

/// Matches against `keywords` (case-insensitive membership). A card with
/// no keywords never matches.
pub fn keyword_mask(card: &Card, wanted: &[&str]) -> bool {
    if card.keywords.is_empty() {
        return false;
    }
    wanted
        .iter()
        .any(|w| card.keywords.iter().any(|k| k.eq_ignore_ascii_case(w)))
}

/// Matches if `needle` is a substring of any member of `theme_tags`.
pub fn tag_mask(card: &Card, needle: &str) -> bool {
    card.theme_tags.iter().any(|t| t.to_lowercase().contains(&needle.to_lowercase()))
}

/// Numeric comparison operators for `mana_value_cmp`/`power_toughness_cmp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Ge,
    Le,
    Gt,
    Lt,
}

pub fn mana_value_cmp(card: &Card, op: CmpOp, n: u32) -> bool {
    let mv = card.mana_value;
    match op {
        CmpOp::Eq => mv == n,
        CmpOp::Ge => mv >= n,
        CmpOp::Le => mv <= n,
        CmpOp::Gt => mv > n,
        CmpOp::Lt => mv < n,
    }
}

/// Parses a power/toughness field that may be `*`, `X`, or `N+M` shaped
/// (e.g. `*+1`) into a best-effort integer, defaulting unparseable
/// variable values to 0.
fn parse_pt(value: &str) -> i32 {
    value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect::<String>()
        .parse()
        .unwrap_or(0)
}

pub fn power_toughness_cmp(card: &Card, field: PtField, op: CmpOp, n: i32) -> bool {
    let raw = match field {
        PtField::Power => card.power.as_deref(),
        PtField::Toughness => card.toughness.as_deref(),
    };
    let Some(raw) = raw else { return false };
    let value = parse_pt(raw);
    match op {
        CmpOp::Eq => value == n,
        CmpOp::Ge => value >= n,
        CmpOp::Le => value <= n,
        CmpOp::Gt => value > n,
        CmpOp::Lt => value < n,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PtField {
    Power,
    Toughness,
}

/// For every card where `mask` holds, unions `tags` into that card's
/// `theme_tags`. Idempotent and order-independent within one invocation.
pub fn apply_tags(cards: &mut [Card], mask: impl Fn(&Card) -> bool, tags: &[&'static str]) {
    for card in cards.iter_mut() {
        if mask(card) {
            card.add_tags(tags.iter().copied());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::ColorSet;

    fn blank_card(name: &str, text: &str, type_line: &str) -> Card {
        Card {
            name: name.to_string(),
            face_name: name.to_string(),
            edhrec_rank: None,
            color_identity: ColorSet::empty(),
            colors: ColorSet::empty(),
            mana_cost: None,
            mana_value: 0,
            type_line: type_line.to_string(),
            power: None,
            toughness: None,
            oracle_text: Some(text.to_string()),
            keywords: Default::default(),
            creature_types: Default::default(),
            theme_tags: Default::default(),
            layout: "normal".to_string(),
            side: String::new(),
        }
    }

    #[test]
    fn text_mask_is_case_insensitive() {
        let card = blank_card("X", "Draw a card.", "Instant");
        assert!(text_mask(&card, &[Pattern::literal("DRAW A CARD")], Combine::Or));
    }

    #[test]
    fn apply_tags_is_idempotent() {
        let mut cards = vec![blank_card("X", "Draw a card.", "Instant")];
        for _ in 0..2 {
            apply_tags(&mut cards, |c| text_mask(c, &[Pattern::literal("draw a card")], Combine::Or), &["Unconditional Draw"]);
        }
        assert_eq!(cards[0].theme_tags.len(), 1);
    }

    #[test]
    fn keyword_mask_never_matches_empty_keywords() {
        let card = blank_card("X", "", "Creature");
        assert!(!keyword_mask(&card, &["Flying"]));
    }
}
