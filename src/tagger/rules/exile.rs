//! Phase 11: the exile family — generic Exile Matters, Cascade, Discover,
//! Foretell, Imprint, Impulse (verbatim contract, §4.3.3), Plot, Suspend.

use lazy_static::lazy_static;
use regex::Regex;

use crate::card::Card;

const IMPULSE_NAME_LIST: &[&str] = &[
    "Abrade",
    "Act of Treason",
    "Bloodstone Goblin",
    "Hazoret's Favor",
    "Light Up the Stage",
];

lazy_static! {
    static ref EXILE_MATTERS_RE: Regex = Regex::new(r"(?i)exile(d)?\b").unwrap();
    static ref CASCADE_RE: Regex = Regex::new(r"(?i)\bcascade\b").unwrap();
    static ref DISCOVER_RE: Regex = Regex::new(r"(?i)\bdiscover \d+\b").unwrap();
    static ref FORETELL_RE: Regex = Regex::new(r"(?i)\bforetell\b").unwrap();
    static ref IMPRINT_RE: Regex = Regex::new(r"(?i)\bimprint\b").unwrap();
    static ref PLOT_RE: Regex = Regex::new(r"(?i)\bplot\b").unwrap();
    static ref SUSPEND_RE: Regex = Regex::new(r"(?i)\bsuspend\b").unwrap();

    static ref IMPULSE_EXILE_TOP_RE: Regex = Regex::new(r"(?i)exile the top").unwrap();
    static ref IMPULSE_MAY_PLAY_RE: Regex = Regex::new(r"(?i)may cast|may play").unwrap();
    static ref JUNK_TOKEN_RE: Regex = Regex::new(r"(?i)junk token").unwrap();
    static ref IMPULSE_EXCLUDE_LAYER_ONE: Regex =
        Regex::new(r"(?i)damage to each|damage to target|deals combat damage|raid|target opponent's hand").unwrap();
    static ref IMPULSE_EXCLUDE_LAYER_TWO: Regex = Regex::new(
        r"(?i)each opponent|morph|opponent's library|skip your draw|target opponent|that player's|you may look at the top card"
    )
    .unwrap();
}

fn is_impulse(card: &Card) -> bool {
    let text = card.oracle_text();
    let positive = (IMPULSE_EXILE_TOP_RE.is_match(text) && IMPULSE_MAY_PLAY_RE.is_match(text))
        || IMPULSE_NAME_LIST.contains(&card.name.as_str())
        || JUNK_TOKEN_RE.is_match(text);
    if !positive {
        return false;
    }
    if IMPULSE_EXCLUDE_LAYER_ONE.is_match(text) {
        return false;
    }
    if !card.is_planeswalker() && IMPULSE_EXCLUDE_LAYER_TWO.is_match(text) {
        return false;
    }
    true
}

pub fn apply(cards: &mut [Card]) {
    for card in cards.iter_mut() {
        let text = card.oracle_text().to_string();

        if EXILE_MATTERS_RE.is_match(&text) {
            card.add_tags(["Exile Matters"]);
        }
        if CASCADE_RE.is_match(&text) {
            card.add_tags(["Exile Matters", "Cascade"]);
        }
        if DISCOVER_RE.is_match(&text) {
            card.add_tags(["Exile Matters", "Discover"]);
        }
        if FORETELL_RE.is_match(&text) {
            card.add_tags(["Exile Matters", "Foretell"]);
        }
        if IMPRINT_RE.is_match(&text) {
            card.add_tags(["Exile Matters", "Imprint"]);
        }
        if PLOT_RE.is_match(&text) {
            card.add_tags(["Exile Matters", "Plot"]);
        }
        if SUSPEND_RE.is_match(&text) {
            card.add_tags(["Exile Matters", "Suspend"]);
        }
        if is_impulse(card) {
            card.add_tags(["Exile Matters", "Impulse"]);
            if JUNK_TOKEN_RE.is_match(&text) {
                card.add_tags(["Junk Tokens"]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::ColorSet;

    fn card(name: &str, text: &str, type_line: &str) -> Card {
        Card {
            name: name.into(),
            face_name: name.into(),
            edhrec_rank: None,
            color_identity: ColorSet::empty(),
            colors: ColorSet::empty(),
            mana_cost: None,
            mana_value: 0,
            type_line: type_line.into(),
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
    fn plain_impulse_draw_tags_impulse() {
        let mut cards = vec![card(
            "Light Up the Stage",
            "Exile the top two cards of your library. Until the end of your next turn, you may play those cards.",
            "Sorcery",
        )];
        apply(&mut cards);
        assert!(cards[0].has_tag("Impulse"));
    }

    #[test]
    fn layer_one_exclusion_blocks_impulse() {
        let mut cards = vec![card(
            "X",
            "Exile the top card of your library. You may play it. It deals combat damage to target player.",
            "Sorcery",
        )];
        apply(&mut cards);
        assert!(!cards[0].has_tag("Impulse"));
    }

    #[test]
    fn layer_two_exclusion_blocks_non_planeswalkers() {
        let mut cards = vec![card(
            "X",
            "Exile the top card of your library. Each opponent may play it. You may cast it.",
            "Sorcery",
        )];
        apply(&mut cards);
        assert!(!cards[0].has_tag("Impulse"));
    }

    #[test]
    fn layer_two_exclusion_spares_planeswalkers() {
        let mut cards = vec![card(
            "X",
            "Exile the top card of your library. Each opponent may play it. You may cast it.",
            "Legendary Planeswalker — X",
        )];
        apply(&mut cards);
        assert!(cards[0].has_tag("Impulse"));
    }
}
