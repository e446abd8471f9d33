use twine_solvers::equation::bisection;

/// Solver configuration for the Van der Waals molar amount.
///
/// The defaults bound the work to at most 200 bisection steps; the bracket
/// spans a factor of four around the ideal estimate, so an absolute
/// tolerance of `1e-12` mol is reached in roughly 50 steps for a full
/// cylinder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootFinderConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the molar amount, in mol.
    pub moles_tol: f64,

    /// Absolute tolerance on the residual of the molar equation, in J (Pa·m³).
    pub residual_tol: f64,
}

impl Default for RootFinderConfig {
    fn default() -> Self {
        Self {
            max_iters: 200,
            moles_tol: 1e-12,
            residual_tol: 1e-9,
        }
    }
}

impl RootFinderConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.moles_tol,
            x_rel_tol: 0.0,
            residual_tol: self.residual_tol,
        }
    }
}
