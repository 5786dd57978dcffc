//! Internal card representation.
//!
//! Mirrors the semantic data model of the card corpus (name, face name,
//! mana cost/value, type line, oracle text, keywords) plus the two sets
//! the Tag Engine computes: `creature_types` and `theme_tags`.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five colors of Magic mana, in WUBRG order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Blue,
    Black,
    Red,
    Green,
}

impl Color {
    pub const ALL: [Color; 5] = [Color::White, Color::Blue, Color::Black, Color::Red, Color::Green];

    pub fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Blue => 'U',
            Color::Black => 'B',
            Color::Red => 'R',
            Color::Green => 'G',
        }
    }

    pub fn from_letter(c: char) -> Option<Color> {
        match c.to_ascii_uppercase() {
            'W' => Some(Color::White),
            'U' => Some(Color::Blue),
            'B' => Some(Color::Black),
            'R' => Some(Color::Red),
            'G' => Some(Color::Green),
            _ => None,
        }
    }

    pub fn basic_land(self) -> &'static str {
        match self {
            Color::White => "Plains",
            Color::Blue => "Island",
            Color::Black => "Swamp",
            Color::Red => "Mountain",
            Color::Green => "Forest",
        }
    }

    pub fn snow_basic_land(self) -> &'static str {
        match self {
            Color::White => "Snow-Covered Plains",
            Color::Blue => "Snow-Covered Island",
            Color::Black => "Snow-Covered Swamp",
            Color::Red => "Snow-Covered Mountain",
            Color::Green => "Snow-Covered Forest",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// An ordered (WUBRG-canonical) set over the five colors. Used for both
/// `colors` and `color_identity`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorSet(u8);

impl ColorSet {
    pub fn empty() -> Self {
        Self(0)
    }

    fn bit(c: Color) -> u8 {
        1 << Color::ALL.iter().position(|x| *x == c).unwrap()
    }

    pub fn insert(&mut self, c: Color) {
        self.0 |= Self::bit(c);
    }

    pub fn contains(&self, c: Color) -> bool {
        self.0 & Self::bit(c) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        Color::ALL.iter().copied().filter(move |c| self.contains(*c))
    }

    pub fn is_subset(&self, other: &ColorSet) -> bool {
        self.0 & other.0 == self.0
    }

    /// Parses a comma-and-space-separated string of single uppercase
    /// color letters, e.g. `"B, G"`. Empty string or the literal
    /// `"Colorless"` means the empty set.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("colorless") {
            return Self::empty();
        }
        let mut set = Self::empty();
        for part in trimmed.split(',') {
            if let Some(c) = Color::from_letter(part.trim().chars().next().unwrap_or(' ')) {
                set.insert(c);
            }
        }
        set
    }

    /// The canonical color-identity name used to partition the corpus and
    /// to name output files, e.g. `{W,U}` -> `"azorius"`, `{}` ->
    /// `"colorless"`.
    pub fn canonical_name(&self) -> &'static str {
        use Color::*;
        let mut colors: Vec<Color> = self.iter().collect();
        colors.sort();
        match colors.as_slice() {
            [] => "colorless",
            [White] => "white",
            [Blue] => "blue",
            [Black] => "black",
            [Red] => "red",
            [Green] => "green",
            [White, Blue] => "azorius",
            [White, Black] => "orzhov",
            [White, Red] => "boros",
            [White, Green] => "selesnya",
            [Blue, Black] => "dimir",
            [Blue, Red] => "izzet",
            [Blue, Green] => "simic",
            [Black, Red] => "rakdos",
            [Black, Green] => "golgari",
            [Red, Green] => "gruul",
            [White, Blue, Black] => "esper",
            [White, Blue, Red] => "jeskai",
            [White, Blue, Green] => "bant",
            [White, Black, Red] => "mardu",
            [White, Black, Green] => "abzan",
            [White, Red, Green] => "naya",
            [Blue, Black, Red] => "grixis",
            [Blue, Black, Green] => "sultai",
            [Blue, Red, Green] => "temur",
            [Black, Red, Green] => "jund",
            [White, Blue, Black, Red] => "yore",
            [White, Blue, Black, Green] => "witch",
            [White, Blue, Red, Green] => "ink",
            [White, Black, Red, Green] => "dune",
            [Blue, Black, Red, Green] => "glint",
            [White, Blue, Black, Red, Green] => "wubrg",
            _ => "colorless",
        }
    }

    /// Inverse of `canonical_name`: the `ColorSet` a canonical
    /// color-identity name denotes. Used to find every slice a
    /// commander's identity is allowed to draw from (every slice whose
    /// `ColorSet` is a subset of the commander's).
    pub fn from_canonical_name(name: &str) -> Self {
        use Color::*;
        let colors: &[Color] = match name {
            "colorless" => &[],
            "white" => &[White],
            "blue" => &[Blue],
            "black" => &[Black],
            "red" => &[Red],
            "green" => &[Green],
            "azorius" => &[White, Blue],
            "orzhov" => &[White, Black],
            "boros" => &[White, Red],
            "selesnya" => &[White, Green],
            "dimir" => &[Blue, Black],
            "izzet" => &[Blue, Red],
            "simic" => &[Blue, Green],
            "rakdos" => &[Black, Red],
            "golgari" => &[Black, Green],
            "gruul" => &[Red, Green],
            "esper" => &[White, Blue, Black],
            "jeskai" => &[White, Blue, Red],
            "bant" => &[White, Blue, Green],
            "mardu" => &[White, Black, Red],
            "abzan" => &[White, Black, Green],
            "naya" => &[White, Red, Green],
            "grixis" => &[Blue, Black, Red],
            "sultai" => &[Blue, Black, Green],
            "temur" => &[Blue, Red, Green],
            "jund" => &[Black, Red, Green],
            "yore" => &[White, Blue, Black, Red],
            "witch" => &[White, Blue, Black, Green],
            "ink" => &[White, Blue, Red, Green],
            "dune" => &[White, Black, Red, Green],
            "glint" => &[Blue, Black, Red, Green],
            "wubrg" => &[White, Blue, Black, Red, Green],
            _ => &[],
        };
        let mut set = Self::empty();
        for c in colors {
            set.insert(*c);
        }
        set
    }
}

impl fmt::Display for ColorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: String = self.iter().map(|c| c.letter()).collect();
        write!(f, "{letters}")
    }
}

/// A card row, post-loading. `creature_types` and `theme_tags` start
/// empty and are populated by the Tag Engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    pub face_name: String,
    pub edhrec_rank: Option<u32>,
    pub color_identity: ColorSet,
    pub colors: ColorSet,
    pub mana_cost: Option<String>,
    pub mana_value: u32,
    pub type_line: String,
    pub power: Option<String>,
    pub toughness: Option<String>,
    pub oracle_text: Option<String>,
    pub keywords: BTreeSet<String>,
    pub creature_types: BTreeSet<String>,
    pub theme_tags: BTreeSet<String>,
    pub layout: String,
    pub side: String,
}

impl Card {
    pub fn oracle_text(&self) -> &str {
        self.oracle_text.as_deref().unwrap_or("")
    }

    pub fn is_creature(&self) -> bool {
        self.type_line.contains("Creature")
    }

    pub fn is_land(&self) -> bool {
        self.type_line.contains("Land")
    }

    pub fn is_planeswalker(&self) -> bool {
        self.type_line.contains("Planeswalker")
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.theme_tags.iter().any(|t| t == tag)
    }

    pub fn add_tags(&mut self, tags: impl IntoIterator<Item = &'static str>) {
        for tag in tags {
            self.theme_tags.insert(tag.to_string());
        }
    }
}

/// A legendary creature (or other commander-eligible permanent) selected
/// to build a deck around, with its resolved theme picks.
#[derive(Debug, Clone)]
pub struct CommanderProfile {
    pub name: String,
    pub type_line: String,
    pub oracle_text: String,
    pub power: String,
    pub toughness: String,
    pub mana_cost: String,
    pub mana_value: u32,
    pub color_identity: ColorSet,
    pub colors: ColorSet,
    pub creature_types: BTreeSet<String>,
    pub commander_tags: BTreeSet<String>,
    pub themes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_name_round_trips_through_from_canonical_name() {
        for &identity in crate::card::partition::CANONICAL_IDENTITIES.iter() {
            let set = ColorSet::from_canonical_name(identity);
            assert_eq!(set.canonical_name(), identity);
        }
    }

    #[test]
    fn mono_and_colorless_slices_are_subsets_of_a_guild_commander() {
        let azorius = ColorSet::parse("W, U");
        assert!(ColorSet::empty().is_subset(&azorius));
        assert!(ColorSet::parse("W").is_subset(&azorius));
        assert!(ColorSet::parse("U").is_subset(&azorius));
        assert!(ColorSet::parse("W, U").is_subset(&azorius));
        assert!(!ColorSet::parse("B").is_subset(&azorius));
        assert!(!ColorSet::parse("W, U, B").is_subset(&azorius));
    }
}
