//! The multi-match priority score shared by every builder that orders
//! candidates beyond plain EDHREC rank (§4.5.2): a card matching more of
//! the deck's resolved themes sorts earlier.

use crate::card::Card;

pub fn priority_score(card: &Card, theme_names: &[String]) -> f64 {
    let matches = theme_names.iter().filter(|t| card.theme_tags.contains(*t)).count();
    1.2_f64.powi(matches as i32)
}

/// Stable sort by priority score descending, ties broken by EDHREC
/// rank ascending (more popular first).
pub fn sort_by_priority<'a>(cards: &mut Vec<&'a Card>, theme_names: &[String]) {
    cards.sort_by(|a, b| {
        let score_cmp = priority_score(b, theme_names)
            .partial_cmp(&priority_score(a, theme_names))
            .unwrap_or(std::cmp::Ordering::Equal);
        if score_cmp != std::cmp::Ordering::Equal {
            return score_cmp;
        }
        a.edhrec_rank.unwrap_or(u32::MAX).cmp(&b.edhrec_rank.unwrap_or(u32::MAX))
    });
}
