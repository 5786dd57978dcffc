//! Error taxonomy for the deck-construction core.
//!
//! Each variant corresponds to one error *kind* from the design: errors
//! that are recovered locally, errors that are surfaced to a prompt flow,
//! and errors that are fatal to the run. See each variant's doc comment
//! for its propagation policy.

use std::fmt;

/// Top-level error type returned by every fallible operation in the core.
#[derive(Debug, Clone)]
pub enum DeckError {
    /// Bad user input: empty text, non-numeric where a number was
    /// required, a choice outside the given set, or a retry budget
    /// exceeded. Recovered locally by re-prompting, up to 3 attempts.
    InputValidation { message: String },

    /// The selected commander fails type line, stats, color identity, or
    /// theme validation. Surfaced to the commander-selection flow, which
    /// re-prompts.
    CommanderValidation(CommanderValidationKind),

    /// Loading or validating the card corpus failed. Fatal to the run;
    /// the driver may attempt one automatic re-download.
    CorpusError(CorpusErrorKind),

    /// A builder found no eligible candidates for a required role. Logged
    /// as a warning; the builder exits cleanly with a partial
    /// contribution.
    NoEligibleCards { role: String, pool_size: usize },

    /// A price lookup or price-ceiling check failed. Non-fatal at card
    /// scope; the card is skipped.
    Price(PriceErrorKind),

    /// The land-pruning loop could not reach its target within its
    /// attempt budget. Logged as a warning; composition continues.
    LandBalancing { target: u32, actual: u32, attempts: u32 },

    /// The fill-to-100 loop exited with fewer than 100 entries. Warning
    /// only; the output file is still written.
    CompositionIncomplete { final_count: usize },

    /// Writing the finalized deck list failed (directory creation, file
    /// creation, or CSV encoding). Fatal to the run.
    OutputError { message: String },
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::InputValidation { message } => write!(f, "invalid input: {message}"),
            DeckError::CommanderValidation(kind) => write!(f, "commander validation failed: {kind}"),
            DeckError::CorpusError(kind) => write!(f, "card corpus error: {kind}"),
            DeckError::NoEligibleCards { role, pool_size } => write!(
                f,
                "no eligible cards for role '{role}' (pool had {pool_size} candidates)"
            ),
            DeckError::Price(kind) => write!(f, "price gate error: {kind}"),
            DeckError::LandBalancing {
                target,
                actual,
                attempts,
            } => write!(
                f,
                "land pruning did not converge: wanted {target}, have {actual} after {attempts} attempts"
            ),
            DeckError::CompositionIncomplete { final_count } => write!(
                f,
                "deck composition incomplete: only {final_count}/100 entries filled"
            ),
            DeckError::OutputError { message } => write!(f, "failed to write deck list: {message}"),
        }
    }
}

impl std::error::Error for DeckError {}

#[derive(Debug, Clone)]
pub enum CommanderValidationKind {
    TypeLine { type_line: String },
    Stats { power: String, toughness: String },
    ColorIdentity { raw: String },
    MissingTags,
    MissingThemes,
}

impl fmt::Display for CommanderValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommanderValidationKind::TypeLine { type_line } => write!(
                f,
                "type line '{type_line}' is neither a legendary creature nor marked 'can be your commander'"
            ),
            CommanderValidationKind::Stats { power, toughness } => {
                write!(f, "invalid power/toughness: {power}/{toughness}")
            }
            CommanderValidationKind::ColorIdentity { raw } => {
                write!(f, "color identity '{raw}' is not one of the 32 canonical names")
            }
            CommanderValidationKind::MissingTags => write!(f, "commander has no theme tags to build around"),
            CommanderValidationKind::MissingThemes => write!(f, "no themes were resolved for this commander"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum CorpusErrorKind {
    MissingCorpus { path: String },
    SchemaError { missing_columns: Vec<String> },
    EmptyCorpus,
    DuplicateName { name: String },
    OutOfRange { field: String, value: String },
    MalformedPowerToughness { name: String, value: String },
}

impl fmt::Display for CorpusErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusErrorKind::MissingCorpus { path } => write!(f, "corpus file not found: {path}"),
            CorpusErrorKind::SchemaError { missing_columns } => {
                write!(f, "missing required columns: {}", missing_columns.join(", "))
            }
            CorpusErrorKind::EmptyCorpus => write!(f, "corpus contains zero rows"),
            CorpusErrorKind::DuplicateName { name } => write!(f, "duplicate card name: {name}"),
            CorpusErrorKind::OutOfRange { field, value } => {
                write!(f, "field '{field}' out of range: {value}")
            }
            CorpusErrorKind::MalformedPowerToughness { name, value } => {
                write!(f, "card '{name}' has malformed power/toughness: {value}")
            }
        }
    }
}

/// Price-gate error, mirroring the retryable/not-retryable split used for
/// every outbound lookup in this core.
#[derive(Debug, Clone)]
pub struct PriceErrorKind {
    pub message: String,
    pub is_retryable: bool,
}

impl PriceErrorKind {
    pub fn retryable(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_retryable: true,
        }
    }

    pub fn not_retryable(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_retryable: false,
        }
    }

    pub fn limit_exceeded(name: &str, price: f64, limit: f64) -> Self {
        Self {
            message: format!("{name} costs ${price:.2}, over the ${limit:.2} limit"),
            is_retryable: false,
        }
    }
}

impl fmt::Display for PriceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

pub type DeckResult<T> = Result<T, DeckError>;
