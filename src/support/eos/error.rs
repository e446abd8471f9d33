use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::Energy;

/// Errors that may occur when evaluating an equation of state.
#[derive(Debug, Error)]
pub enum EosError {
    /// The input state is outside the model's valid domain.
    ///
    /// For example, a non-positive volume or absolute temperature, or a
    /// molar amount whose co-volume fills the vessel.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// The bracketing root finder failed, typically because the bracket
    /// around the ideal-gas estimate holds no sign change.
    #[error("root finder error")]
    RootFinder(#[from] bisection::Error),

    /// The root finder reached the iteration limit without converging.
    #[error("root finder hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best residual of the molar equation, in energy units (Pa·m³).
        residual: Energy,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
