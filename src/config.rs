//! Run-wide configuration, passed explicitly rather than held in process
//! globals (the source uses module-level globals such as `use_scrython`;
//! we thread a `RunConfig` value through the engine and composer instead).

/// Per-role target counts the composer tries to hit. Defaults mirror the
/// original implementation's `builder_constants.py`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ideals {
    pub lands: u32,
    pub basic_lands: u32,
    pub non_basic_reserve: u32,
    pub ramp: u32,
    pub creatures: u32,
    pub removal: u32,
    pub wipes: u32,
    pub card_advantage: u32,
    pub protection: u32,
    pub free_slots: u32,
    pub max_card_price: Option<f64>,
    pub max_deck_price: Option<f64>,
}

impl Default for Ideals {
    fn default() -> Self {
        Self {
            lands: 35,
            basic_lands: 20,
            non_basic_reserve: 10,
            ramp: 8,
            creatures: 25,
            removal: 10,
            wipes: 2,
            card_advantage: 10,
            protection: 8,
            free_slots: 3,
            max_card_price: Some(20.0),
            max_deck_price: Some(400.0),
        }
    }
}

/// Fetch-land, dual/triple-land and misc-land selection knobs that the
/// user is prompted for during land building.
#[derive(Debug, Clone, PartialEq)]
pub struct LandPreferences {
    pub fetch_land_count: u32,
    pub include_dual_lands: bool,
    pub include_triple_lands: bool,
    pub misc_land_count: u32,
}

impl Default for LandPreferences {
    fn default() -> Self {
        Self {
            fetch_land_count: 3,
            include_dual_lands: true,
            include_triple_lands: true,
            misc_land_count: 7,
        }
    }
}

/// Tolerance applied to price ceilings: a card at 110% of the per-card
/// limit, or a deck at 110% of the deck limit, is still accepted.
pub const PRICE_TOLERANCE: f64 = 1.1;

/// Fixed backoff between retried price lookups.
pub const PRICE_RETRY_DELAY_MS: u64 = 100;

/// Maximum retry attempts for a single price lookup.
pub const PRICE_MAX_RETRIES: u32 = 3;

/// Fuzzy-match acceptance threshold (0-100 scale) and candidate-list size
/// for commander name resolution.
pub const FUZZY_MATCH_THRESHOLD: f64 = 90.0;
pub const MAX_FUZZY_CHOICES: usize = 5;

/// Bounds on the land-pruning attempt budget, expressed as a multiplier
/// of the basic/non-basic gap the composer is trying to close.
pub const LAND_PRUNE_ATTEMPT_MULTIPLIER: f64 = 1.5;

/// Fill-to-100 loop bounds.
pub const FILL_MIN_ATTEMPTS: u32 = 20;
pub const FILL_TIME_BUDGET_SECS: u64 = 60;
pub const FILL_DRY_ROUND_LIMIT: u32 = 5;

/// The final deck size, including the commander.
pub const DECK_SIZE: usize = 100;

/// Top-level configuration threaded through a single composition run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub ideals: Ideals,
    pub land_preferences: LandPreferences,
    pub output_dir: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ideals: Ideals::default(),
            land_preferences: LandPreferences::default(),
            output_dir: "deck_files".to_string(),
        }
    }
}
