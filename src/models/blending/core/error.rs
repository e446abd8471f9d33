use thiserror::Error;
use uom::si::f64::AmountOfSubstance;

use crate::support::{
    eos::EosError,
    gas::{GasMix, GasMixError},
};

/// Errors that can occur while planning a fill.
#[derive(Debug, Error)]
pub enum PlanError {
    /// A requested mixture is not a valid composition.
    #[error(transparent)]
    InvalidComposition(#[from] GasMixError),

    /// Nitrogen must be added but the top-up gas contains none.
    #[error("a source of N2 (top-up gas) is required for this mix")]
    NoNitrogenSource {
        top_up: GasMix,
        deficit: AmountOfSubstance,
    },

    /// O2 or He still overshoots after the correction bleed.
    #[error("unable to blend {target} using the available gases")]
    InfeasibleBlend {
        target: GasMix,
        o2_fill: AmountOfSubstance,
        he_fill: AmountOfSubstance,
    },

    /// An input or intermediate state broke an invariant of the planner.
    #[error("precondition violated: {context}")]
    PreconditionViolation { context: String },

    /// Converting between pressure and molar amount failed.
    #[error(transparent)]
    Eos(#[from] EosError),
}
