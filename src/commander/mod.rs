//! Commander Selection & Theme Resolver (§4.4).

pub mod fuzzy;
pub mod select;
pub mod themes;
pub mod validate;

pub use select::select_commander;
pub use themes::{resolve_themes, ThemeWeights};
pub use validate::validate_commander;
