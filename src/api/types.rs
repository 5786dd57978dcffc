use serde::{Deserialize, Serialize};

/// A single face of a double-faced or split card (unused fields beyond
/// `name` ignored by serde — Scryfall's payload carries many more).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardFace {
    pub name: String,
}

/// The subset of a Scryfall card object the Price Gate needs: enough to
/// resolve a USD price for the queried name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    #[serde(default)]
    pub type_line: String,
    pub prices: Option<Prices>,
    /// For double-faced cards, split cards, etc.
    pub card_faces: Option<Vec<CardFace>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prices {
    pub usd: Option<String>,
    pub usd_foil: Option<String>,
    pub eur: Option<String>,
    pub tix: Option<String>,
}
