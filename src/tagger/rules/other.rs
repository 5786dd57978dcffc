//! Phase 19: "other themes" — strictly order-independent among
//! themselves, but run after every family above since several of them
//! read tags (Tokens, Artifacts) those families set.

use lazy_static::lazy_static;
use regex::Regex;

use crate::card::Card;

/// Cards on the Commander multiple-copy exception list (§4.5, §6).
pub const MULTIPLE_COPY_CARDS: &[&str] = &[
    "Relentless Rats",
    "Rat Colony",
    "Persistent Petitioners",
    "Shadowborn Apostle",
    "Dragon's Approach",
    "Nazgûl",
    "Seven Dwarves",
];

lazy_static! {
    static ref SAC_RE: Regex = Regex::new(r"(?i)sacrifice a creature|whenever a creature.*dies|dies, ").unwrap();
    static ref BIG_MANA_RE: Regex = Regex::new(r"(?i)cost \{[\d]+\} more|additional cost.*mana|spend mana as though").unwrap();
    static ref BLINK_RE: Regex = Regex::new(r"(?i)exile.*return.*battlefield|exile.*then return|flicker").unwrap();
    static ref BURN_RE: Regex = Regex::new(r"(?i)deals \d+ damage to (any target|target player|target opponent)").unwrap();
    static ref CLONE_RE: Regex = Regex::new(r"(?i)copy of (a|target) creature|as a copy of").unwrap();
    static ref CONTROL_RE: Regex = Regex::new(r"(?i)counter target spell|destroy target|return target.*to.*hand").unwrap();
    static ref ENERGY_RE: Regex = Regex::new(r"(?i)\benergy counter\b|get \{e\}").unwrap();
    static ref INFECT_RE: Regex = Regex::new(r"(?i)\binfect\b|\btoxic\b").unwrap();
    static ref HISTORIC_RE: Regex = Regex::new(r"(?i)historic spell|legendary creature, artifact, or saga").unwrap();
    static ref MILL_RE: Regex = Regex::new(r"(?i)mills? \d+ cards?|put the top \d+ cards.*into.*graveyard").unwrap();
    static ref MONARCH_RE: Regex = Regex::new(r"(?i)\bthe monarch\b|become(s)? the monarch").unwrap();
    static ref REANIMATE_RE: Regex =
        Regex::new(r"(?i)return.*creature card.*from (a |your |target player's )?graveyard.*to the battlefield").unwrap();
    static ref STAX_RE: Regex = Regex::new(r"(?i)players can't|each player.*skip|spells cost \{\d+\} more|unless that player pays|unless its controller pays").unwrap();
    static ref THEFT_RE: Regex = Regex::new(r"(?i)gain control of target|you control (enchanted|target) (creature|permanent)").unwrap();
    static ref TOUGHNESS_RE: Regex = Regex::new(r"(?i)toughness is greater|with toughness \d+ or greater|power is less than").unwrap();
    static ref TOPDECK_RE: Regex = Regex::new(r"(?i)play with the top card.*revealed|you may look at the top card").unwrap();
    static ref X_SPELLS_RE: Regex = Regex::new(r"\{X\}").unwrap();
    static ref AGGRO_RE: Regex = Regex::new(r"(?i)haste|must attack|attacks each (combat|turn) if able").unwrap();
}

pub fn apply(cards: &mut [Card]) {
    for card in cards.iter_mut() {
        let text = card.oracle_text().to_string();

        if AGGRO_RE.is_match(&text) {
            card.add_tags(["Aggro"]);
        }
        if SAC_RE.is_match(&text) {
            card.add_tags(["Aristocrats"]);
        }
        if BIG_MANA_RE.is_match(&text) {
            card.add_tags(["Big Mana"]);
        }
        if BLINK_RE.is_match(&text) {
            card.add_tags(["Blink"]);
        }
        if BURN_RE.is_match(&text) {
            card.add_tags(["Burn"]);
        }
        if CLONE_RE.is_match(&text) {
            card.add_tags(["Clones"]);
        }
        if CONTROL_RE.is_match(&text) {
            card.add_tags(["Control"]);
        }
        if ENERGY_RE.is_match(&text) {
            card.add_tags(["Energy"]);
        }
        if INFECT_RE.is_match(&text) {
            card.add_tags(["Infect"]);
        }
        if card.type_line.contains("Legendary") || HISTORIC_RE.is_match(&text) {
            card.add_tags(["Legends Matter"]);
        }
        if card.is_creature() && card.mana_value <= 2 {
            card.add_tags(["Little Fellas"]);
        }
        if MILL_RE.is_match(&text) {
            card.add_tags(["Mill"]);
        }
        if MONARCH_RE.is_match(&text) {
            card.add_tags(["Monarch"]);
        }
        if MULTIPLE_COPY_CARDS.contains(&card.name.as_str()) {
            card.add_tags(["Multiple Copies"]);
        }
        if card.is_planeswalker() {
            card.add_tags(["Superfriends"]);
        }
        if REANIMATE_RE.is_match(&text) {
            card.add_tags(["Reanimate"]);
        }
        if STAX_RE.is_match(&text) {
            card.add_tags(["Stax"]);
        }
        if THEFT_RE.is_match(&text) {
            card.add_tags(["Theft"]);
        }
        if TOUGHNESS_RE.is_match(&text) {
            card.add_tags(["Toughness Matters"]);
        }
        if TOPDECK_RE.is_match(&text) {
            card.add_tags(["Topdeck"]);
        }
        if X_SPELLS_RE.is_match(card.mana_cost.as_deref().unwrap_or("")) {
            card.add_tags(["X Spells"]);
        }
    }
}
