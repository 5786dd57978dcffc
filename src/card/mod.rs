//! Card Corpus Loader: schema, CSV loading, validation, and
//! color-identity partitioning.

pub mod commander_pool;
pub mod loader;
pub mod partition;
pub mod types;

pub use commander_pool::load_commander_pool;
pub use loader::load_full_corpus;
pub use partition::partition_by_color;
pub use types::{Card, Color, ColorSet, CommanderProfile};
