//! The `UserInterface` capability (§6): the one seam between the
//! deck-construction core and whatever frontend drives it.

use crate::error::DeckResult;

/// Five operations cover every interactive decision point in the core.
/// A CLI, a GUI, and a test harness can each implement this without the
/// core knowing which one it's talking to.
pub trait UserInterface {
    fn prompt_text(&self, message: &str) -> DeckResult<String>;
    fn prompt_number(&self, message: &str, default: f64) -> DeckResult<f64>;
    fn prompt_choice(&self, message: &str, choices: &[String]) -> DeckResult<String>;
    fn prompt_confirm(&self, message: &str, default: bool) -> DeckResult<bool>;
    fn display(&self, message: &str);
}
