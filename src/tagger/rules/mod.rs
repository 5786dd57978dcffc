//! One module per rule family, named for the theme it tags. Execution
//! order is fixed by `engine::TagEngine::run`, not by declaration order
//! here.

pub mod artifacts;
pub mod blanket;
pub mod counters;
pub mod draw;
pub mod enchantments;
pub mod exile;
pub mod interaction;
pub mod kindred;
pub mod lands_matter;
pub mod life;
pub mod other;
pub mod ramp;
pub mod spellslinger;
pub mod tokens;
pub mod voltron;
