//! Loads and validates the card corpus CSV, per the schema in §6.

use std::collections::BTreeSet;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

use crate::error::{CorpusErrorKind, DeckError, DeckResult};

use super::types::{Card, ColorSet};

lazy_static! {
    static ref POWER_TOUGHNESS_RE: Regex = Regex::new(r"^[\d*+\-X]+$").unwrap();
}

const REQUIRED_COLUMNS: &[&str] = &[
    "name",
    "faceName",
    "edhrecRank",
    "colorIdentity",
    "colors",
    "manaCost",
    "manaValue",
    "type",
    "creatureTypes",
    "text",
    "power",
    "toughness",
    "keywords",
    "themeTags",
    "layout",
    "side",
];

/// Raw deserialization target matching the CSV header exactly. Optional
/// columns are empty-string-or-absent in the source file.
#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    #[serde(rename = "faceName")]
    face_name: String,
    #[serde(rename = "edhrecRank")]
    edhrec_rank: Option<u32>,
    #[serde(rename = "colorIdentity")]
    color_identity: String,
    colors: String,
    #[serde(rename = "manaCost")]
    mana_cost: Option<String>,
    #[serde(rename = "manaValue")]
    mana_value: f64,
    #[serde(rename = "type")]
    type_line: String,
    #[serde(rename = "creatureTypes")]
    creature_types: Option<String>,
    text: Option<String>,
    power: Option<String>,
    toughness: Option<String>,
    keywords: Option<String>,
    #[serde(rename = "themeTags")]
    theme_tags: Option<String>,
    layout: Option<String>,
    side: Option<String>,
}

/// Parses a Python-style list literal (`['A', 'B']`), accepting both
/// quote styles. An empty or absent field yields an empty set.
fn parse_list_literal(raw: &Option<String>) -> BTreeSet<String> {
    let Some(raw) = raw else {
        return BTreeSet::new();
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "[]" {
        return BTreeSet::new();
    }
    let inner = trimmed.trim_start_matches('[').trim_end_matches(']');
    inner
        .split(',')
        .map(|s| s.trim().trim_matches('\'').trim_matches('"').to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn validate_header(headers: &csv::StringRecord) -> DeckResult<()> {
    let present: Vec<&str> = headers.iter().collect();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !present.contains(col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(DeckError::CorpusError(CorpusErrorKind::SchemaError {
            missing_columns: missing,
        }));
    }
    Ok(())
}

fn row_to_card(row: CsvRow) -> DeckResult<Card> {
    if let Some(rank) = row.edhrec_rank {
        if rank > 100_000 {
            return Err(DeckError::CorpusError(CorpusErrorKind::OutOfRange {
                field: "edhrecRank".to_string(),
                value: rank.to_string(),
            }));
        }
    }
    if !(0.0..=20.0).contains(&row.mana_value) {
        return Err(DeckError::CorpusError(CorpusErrorKind::OutOfRange {
            field: "manaValue".to_string(),
            value: row.mana_value.to_string(),
        }));
    }
    for (field, value) in [("power", &row.power), ("toughness", &row.toughness)] {
        if let Some(v) = value {
            if !v.is_empty() && !POWER_TOUGHNESS_RE.is_match(v) {
                return Err(DeckError::CorpusError(CorpusErrorKind::MalformedPowerToughness {
                    name: row.name.clone(),
                    value: format!("{field}={v}"),
                }));
            }
        }
    }

    Ok(Card {
        name: row.name,
        face_name: row.face_name,
        edhrec_rank: row.edhrec_rank,
        color_identity: ColorSet::parse(&row.color_identity),
        colors: ColorSet::parse(&row.colors),
        mana_cost: row.mana_cost.filter(|s| !s.is_empty()),
        mana_value: row.mana_value.round() as u32,
        type_line: row.type_line,
        power: row.power.filter(|s| !s.is_empty()),
        toughness: row.toughness.filter(|s| !s.is_empty()),
        oracle_text: row.text.filter(|s| !s.is_empty()),
        keywords: parse_list_literal(&row.keywords),
        creature_types: parse_list_literal(&row.creature_types),
        theme_tags: parse_list_literal(&row.theme_tags),
        layout: row.layout.unwrap_or_default(),
        side: row.side.unwrap_or_default(),
    })
}

/// Reads the full corpus from `path`, validating schema and per-row
/// invariants. Returns one `Card` per row, in file order.
pub fn load_full_corpus(path: impl AsRef<Path>) -> DeckResult<Vec<Card>> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|_| {
            DeckError::CorpusError(CorpusErrorKind::MissingCorpus {
                path: path.display().to_string(),
            })
        })?;

    validate_header(reader.headers().map_err(|_| {
        DeckError::CorpusError(CorpusErrorKind::SchemaError {
            missing_columns: REQUIRED_COLUMNS.iter().map(|s| s.to_string()).collect(),
        })
    })?)?;

    let mut cards = Vec::new();
    let mut seen_names = BTreeSet::new();
    for result in reader.deserialize::<CsvRow>() {
        let row = result.map_err(|_| {
            DeckError::CorpusError(CorpusErrorKind::SchemaError {
                missing_columns: vec!["(malformed row)".to_string()],
            })
        })?;
        if !seen_names.insert(row.name.clone()) {
            return Err(DeckError::CorpusError(CorpusErrorKind::DuplicateName { name: row.name }));
        }
        cards.push(row_to_card(row)?);
    }

    if cards.is_empty() {
        return Err(DeckError::CorpusError(CorpusErrorKind::EmptyCorpus));
    }

    log::info!("loaded {} cards from {}", cards.len(), path.display());
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(rows: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "name,faceName,edhrecRank,colorIdentity,colors,manaCost,manaValue,type,creatureTypes,text,power,toughness,keywords,themeTags,layout,side"
        )
        .unwrap();
        write!(file, "{rows}").unwrap();
        file
    }

    #[test]
    fn loads_a_minimal_valid_corpus() {
        let file = write_fixture(
            "Llanowar Elves,Llanowar Elves,500,G,G,{G},1,Creature — Elf Druid,\"['Elf', 'Druid']\",\"Tap: Add G.\",1,1,,[],normal,\n",
        );
        let cards = load_full_corpus(file.path()).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].name, "Llanowar Elves");
        assert_eq!(cards[0].mana_value, 1);
    }

    #[test]
    fn rejects_duplicate_names() {
        let file = write_fixture(
            "Card A,Card A,1,,,,0,Land,[],,,,,[],normal,\nCard A,Card A,1,,,,0,Land,[],,,,,[],normal,\n",
        );
        let err = load_full_corpus(file.path()).unwrap_err();
        assert!(matches!(err, DeckError::CorpusError(CorpusErrorKind::DuplicateName { .. })));
    }

    #[test]
    fn rejects_missing_file() {
        let err = load_full_corpus("/nonexistent/path.csv").unwrap_err();
        assert!(matches!(err, DeckError::CorpusError(CorpusErrorKind::MissingCorpus { .. })));
    }

    #[test]
    fn parses_python_list_literal_variants() {
        assert_eq!(
            parse_list_literal(&Some("['Elf', 'Druid']".to_string())),
            BTreeSet::from(["Elf".to_string(), "Druid".to_string()])
        );
        assert_eq!(parse_list_literal(&Some("[]".to_string())), BTreeSet::new());
        assert_eq!(parse_list_literal(&None), BTreeSet::new());
    }
}
