//! Fuzzy name matching for commander selection, scaled to the original
//! implementation's 0-100 convention.

use crate::card::Card;
use crate::config::{FUZZY_MATCH_THRESHOLD, MAX_FUZZY_CHOICES};

/// One fuzzy match candidate, with its score on a 0-100 scale.
#[derive(Debug, Clone)]
pub struct FuzzyMatch {
    pub name: String,
    pub score: f64,
}

fn score(input: &str, candidate: &str) -> f64 {
    strsim::jaro_winkler(&input.to_lowercase(), &candidate.to_lowercase()) * 100.0
}

/// Scores `input` against every card name in `pool`, returning the top
/// `MAX_FUZZY_CHOICES` matches sorted by descending score.
pub fn top_matches(input: &str, pool: &[Card]) -> Vec<FuzzyMatch> {
    let mut scored: Vec<FuzzyMatch> = pool
        .iter()
        .map(|c| FuzzyMatch {
            name: c.name.clone(),
            score: score(input, &c.name),
        })
        .collect();
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap());
    scored.truncate(MAX_FUZZY_CHOICES);
    scored
}

/// True when the best match alone clears the acceptance threshold and
/// can be returned directly without prompting among candidates.
pub fn is_confident_match(matches: &[FuzzyMatch]) -> bool {
    matches.first().map(|m| m.score >= FUZZY_MATCH_THRESHOLD).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::ColorSet;

    fn card(name: &str) -> Card {
        Card {
            name: name.into(),
            face_name: name.into(),
            edhrec_rank: None,
            color_identity: ColorSet::empty(),
            colors: ColorSet::empty(),
            mana_cost: None,
            mana_value: 0,
            type_line: "Legendary Creature".into(),
            power: Some("1".into()),
            toughness: Some("1".into()),
            oracle_text: None,
            keywords: Default::default(),
            creature_types: Default::default(),
            theme_tags: Default::default(),
            layout: "normal".into(),
            side: String::new(),
        }
    }

    #[test]
    fn near_exact_typo_scores_high() {
        let pool = vec![card("Atraxa, Praetors' Voice")];
        let matches = top_matches("Atraxa Praetors Voice", &pool);
        assert!(matches[0].score >= FUZZY_MATCH_THRESHOLD);
    }

    #[test]
    fn truncates_to_max_choices() {
        let pool: Vec<Card> = (0..20).map(|i| card(&format!("Card {i}"))).collect();
        let matches = top_matches("Card", &pool);
        assert!(matches.len() <= MAX_FUZZY_CHOICES);
    }
}
