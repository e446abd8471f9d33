use thiserror::Error;

/// Errors raised while constructing or evaluating a [`GasMix`](super::GasMix).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GasMixError {
    /// A fraction is outside `[0, 1]`, or O2 and He together exceed 100%.
    #[error("invalid composition (O2 {o2}, He {he}): {reason}")]
    InvalidComposition { o2: f64, he: f64, reason: String },

    /// The caller asked for something the formulas are not defined for.
    ///
    /// For example, a MOD at an oxygen partial pressure of 2 bar or more.
    #[error("precondition violated: {context}")]
    PreconditionViolation { context: String },
}

/// Error returned when a mixture cannot be parsed from text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseGasMixError {
    /// The text is neither a preset name nor an `O2/He` percentage pair.
    #[error("unrecognised gas mix `{0}`; expected a preset name or O2/He percentages like `21/35`")]
    Unrecognised(String),

    /// The percentages parsed but do not describe a valid mixture.
    #[error(transparent)]
    Invalid(#[from] GasMixError),
}
