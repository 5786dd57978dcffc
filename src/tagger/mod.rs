//! The Tag Engine (§4.3): enriches each card with `creature_types` and
//! `theme_tags` by running a fixed, ordered sequence of rule families.

pub mod creature_types;
pub mod engine;
pub mod primitives;
pub mod rules;

pub use engine::TagEngine;
