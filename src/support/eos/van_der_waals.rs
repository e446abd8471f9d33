//! Van der Waals equation of state for O2/He/N2 mixtures.
//!
//! `(p + a·n²/V²)·(V − n·b) = n·R·T`
//!
//! The effective `a` and `b` of a mixture come from the classic mixing rules
//! (see [`MixingParameters`]). Pressure is explicit in `n`; the molar amount
//! is not, and is found with bisection on a bracket around the ideal-gas
//! estimate.

mod config;
mod mixing;
mod problem;

pub use config::RootFinderConfig;
pub use mixing::{MixingParameters, VdwConstants};

use twine_solvers::equation::bisection;
use uom::si::{
    amount_of_substance::mole,
    energy::joule,
    f64::{AmountOfSubstance, Energy, Pressure, ThermodynamicTemperature, Volume},
    pressure::pascal,
};

use crate::support::{gas::GasMix, units::R_IDEAL_GASES};

use super::{EosError, EquationOfState, IdealGas, si_vessel};

use problem::{VdwMolesModel, VdwMolesProblem};

/// Real-gas model using the Van der Waals equation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VanDerWaals {
    config: RootFinderConfig,
}

impl VanDerWaals {
    #[must_use]
    pub fn new(config: RootFinderConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> RootFinderConfig {
        self.config
    }

    /// Computes `p = n·R·T / (V − n·b) − a·(n/V)²` in SI units.
    ///
    /// # Errors
    ///
    /// Returns [`EosError::OutOfDomain`] if the co-volume `n·b` fills the vessel.
    pub fn pressure_si(
        n: f64,
        v: f64,
        t: f64,
        params: &MixingParameters,
    ) -> Result<f64, EosError> {
        let free_volume = v - n * params.b;
        if free_volume <= 0.0 {
            return Err(EosError::OutOfDomain {
                context: format!("{n} mol has a co-volume of at least {v} m³"),
            });
        }

        Ok((n * R_IDEAL_GASES * t) / free_volume - params.a * (n / v).powi(2))
    }

    /// Solves for `n` in SI units.
    ///
    /// The search bracket is `[n_ideal / 2, 2 · n_ideal]`. A zero pressure
    /// returns zero moles without iterating.
    ///
    /// # Errors
    ///
    /// Returns [`EosError::OutOfDomain`] for a negative pressure,
    /// [`EosError::RootFinder`] if the bracket holds no root, and
    /// [`EosError::MaxIters`] if the solver does not converge.
    pub fn moles_si(
        &self,
        p: f64,
        v: f64,
        t: f64,
        params: &MixingParameters,
    ) -> Result<f64, EosError> {
        if p.is_nan() || p < 0.0 {
            return Err(EosError::OutOfDomain {
                context: format!("pressure {p} Pa"),
            });
        }
        if p == 0.0 {
            return Ok(0.0);
        }

        let estimate = IdealGas::moles_si(p, v, t);

        let model = VdwMolesModel::new(p, v, t, *params);
        let solution = bisection::solve(
            &model,
            &VdwMolesProblem,
            [estimate / 2.0, estimate * 2.0],
            &self.config.bisection(),
            |event: &bisection::Event<'_, _, _>| {
                // Past the co-volume pole the gas cannot fit, so the trial
                // amount is too large: steer as for a positive residual.
                if event.result().is_err() {
                    return Some(bisection::Action::assume_positive());
                }
                None
            },
        )?;

        if solution.status != bisection::Status::Converged {
            return Err(EosError::MaxIters {
                residual: Energy::new::<joule>(solution.residual),
                iters: solution.iters,
            });
        }

        let n = solution.snapshot.output.moles.get::<mole>();
        tracing::trace!(
            ideal = estimate,
            real = n,
            iters = solution.iters,
            "solved van der waals molar amount"
        );
        Ok(n)
    }
}

impl EquationOfState for VanDerWaals {
    fn moles(
        &self,
        pressure: Pressure,
        volume: Volume,
        temperature: ThermodynamicTemperature,
        mix: &GasMix,
    ) -> Result<AmountOfSubstance, EosError> {
        let (v, t) = si_vessel(volume, temperature)?;
        let params = MixingParameters::for_mix(mix);
        let n = self.moles_si(pressure.get::<pascal>(), v, t, &params)?;
        Ok(AmountOfSubstance::new::<mole>(n))
    }

    fn pressure(
        &self,
        moles: AmountOfSubstance,
        volume: Volume,
        temperature: ThermodynamicTemperature,
        mix: &GasMix,
    ) -> Result<Pressure, EosError> {
        let (v, t) = si_vessel(volume, temperature)?;
        let params = MixingParameters::for_mix(mix);
        let p = Self::pressure_si(moles.get::<mole>(), v, t, &params)?;
        Ok(Pressure::new::<pascal>(p))
    }
}
