//! Phase 16: the lands-matter family — general Lands Matter, Domain,
//! Landfall, Landwalk, Land Types Matter.

use lazy_static::lazy_static;
use regex::Regex;

use crate::card::Card;

const BASIC_LAND_TYPES: &[&str] = &["Plains", "Island", "Swamp", "Mountain", "Forest"];

lazy_static! {
    static ref LAND_PLAY_RE: Regex = Regex::new(
        r"(?i)play a land|play an additional land|play two additional lands|play lands from|put a land card|put a basic land card"
    )
    .unwrap();
    static ref LAND_SEARCH_RE: Regex = Regex::new(
        r"(?i)search your library for a basic land card|search your library for a land card|search your library for up to two basic land|search their library for a basic land card"
    )
    .unwrap();
    static ref LAND_STATE_RE: Regex = Regex::new(
        r"(?i)land enters|land card is put into your graveyard|number of lands you control|one or more land cards|sacrifice a land|target land"
    )
    .unwrap();
    static ref DOMAIN_RE: Regex = Regex::new(r"(?i)\bdomain\b|basic land types among lands you control").unwrap();
    static ref LANDFALL_RE: Regex = Regex::new(r"(?i)\blandfall\b").unwrap();
    static ref LANDWALK_RE: Regex = Regex::new(r"(?i)\bislandwalk\b|\bswampwalk\b|\bmountainwalk\b|\bforestwalk\b|\bplainswalk\b").unwrap();
}

pub fn apply(cards: &mut [Card]) {
    for card in cards.iter_mut() {
        let text = card.oracle_text().to_string();

        if LAND_PLAY_RE.is_match(&text) || LAND_SEARCH_RE.is_match(&text) || LAND_STATE_RE.is_match(&text) {
            card.add_tags(["Lands Matter"]);
        }
        if DOMAIN_RE.is_match(&text) {
            card.add_tags(["Lands Matter", "Domain"]);
        }
        if LANDFALL_RE.is_match(&text) {
            card.add_tags(["Lands Matter", "Landfall"]);
        }
        if LANDWALK_RE.is_match(&text) {
            card.add_tags(["Lands Matter", "Landwalk"]);
        }
        for land_type in BASIC_LAND_TYPES {
            let needle = format!("{} you control", land_type.to_lowercase());
            if text.to_lowercase().contains(&needle) {
                card.add_tags(["Lands Matter"]);
                card.theme_tags.insert("Land Types Matter".to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::ColorSet;

    #[test]
    fn tags_landfall() {
        let mut cards = vec![Card {
            name: "X".into(),
            face_name: "X".into(),
            edhrec_rank: None,
            color_identity: ColorSet::empty(),
            colors: ColorSet::empty(),
            mana_cost: None,
            mana_value: 0,
            type_line: "Creature".into(),
            power: None,
            toughness: None,
            oracle_text: Some("Landfall — Whenever a land enters under your control, put a +1/+1 counter.".into()),
            keywords: Default::default(),
            creature_types: Default::default(),
            theme_tags: Default::default(),
            layout: "normal".into(),
            side: String::new(),
        }];
        apply(&mut cards);
        assert!(cards[0].has_tag("Landfall"));
    }
}
