//! Fill planning algorithm.
//!
//! The planner works on [`MolarVector`]s, the absolute O2/He/N2 content of
//! the vessel, and converts to and from pressure with the ideal gas law.
//!
//! 1. Convert the initial and target states to molar vectors.
//! 2. If any component already exceeds its target, bleed: empty the vessel
//!    when it holds a component the target must not contain, otherwise
//!    shrink the contents uniformly until nothing exceeds its target.
//! 3. Size the top-up from the remaining nitrogen deficit.
//! 4. Size the pure O2 and He fills from what is left after the top-up.
//! 5. If the top-up alone would overshoot O2 or He, bleed once more so the
//!    top-up fits, then repeat 3 and 4. A second overshoot is infeasible.
//! 6. Emit the bleed (if any), the O2 fill, the He fill and the top-up.

mod additions;
mod error;
mod molar;
mod request;
mod step;

pub use error::PlanError;
pub use molar::MolarVector;
pub use request::{FillRequest, Vessel};
pub use step::{FillGas, FillPlan, FillStep, PlannedStep};

use crate::support::{
    constraint::{Constraint, NonNegative},
    eos::{EquationOfState, IdealGas},
    gas::GasMix,
};

use additions::Additions;

/// Amounts below this fraction of the target content are treated as zero.
///
/// Bleeding and re-filling the same gas leaves rounding noise of a few ulps;
/// without a threshold that noise would surface as spurious steps.
const RELATIVE_TOLERANCE: f64 = 1e-9;

/// Plans the steps that take the vessel from its initial to its target state.
///
/// # Errors
///
/// - [`PlanError::NoNitrogenSource`] if nitrogen must be added but the
///   top-up gas contains none.
/// - [`PlanError::InfeasibleBlend`] if O2 or He still overshoots after the
///   one permitted correction bleed.
/// - [`PlanError::PreconditionViolation`] for negative pressures or an
///   inconsistent correction ratio.
/// - [`PlanError::Eos`] if the vessel volume or temperature is not positive.
pub fn plan_fill(request: &FillRequest) -> Result<FillPlan, PlanError> {
    let FillRequest {
        target,
        target_pressure,
        initial,
        initial_pressure,
        vessel,
        top_up,
    } = *request;

    for (which, pressure) in [("initial", initial_pressure), ("target", target_pressure)] {
        NonNegative::check(&pressure).map_err(|e| PlanError::PreconditionViolation {
            context: format!("{which} pressure: {e}"),
        })?;
    }

    let thermo = IdealGas;
    let Vessel {
        volume,
        temperature,
    } = vessel;

    let contents = |pressure, mix: &GasMix| -> Result<MolarVector, PlanError> {
        let total = thermo.moles(pressure, volume, temperature, mix)?;
        Ok(MolarVector::from_total(total, mix))
    };
    let pressure_of =
        |moles: &MolarVector| thermo.pressure(moles.total(), volume, temperature, &moles.mix());

    let target_moles = contents(target_pressure, &target)?;
    let tolerance = target_moles.total() * RELATIVE_TOLERANCE;

    let mut current = contents(initial_pressure, &initial)?.bleed_to_fit(&target_moles);
    debug_assert!(current.is_physical());
    tracing::debug!(?current, target = ?target_moles, "established molar vectors");

    let mut additions = Additions::size(&current, &target_moles, &top_up, tolerance)?;

    if additions.overshoots(tolerance) {
        let correction = additions.correction_ratio(&current);
        if correction > 1.0 {
            return Err(PlanError::PreconditionViolation {
                context: format!("overshoot correction ratio {correction} exceeds 1"),
            });
        }

        current = current.scaled(1.0 - correction);
        tracing::debug!(correction, ?current, "bled to make room for the top-up");

        additions = Additions::size(&current, &target_moles, &top_up, tolerance)?;
        if additions.overshoots(tolerance) {
            return Err(PlanError::InfeasibleBlend {
                target,
                o2_fill: additions.o2,
                he_fill: additions.he,
            });
        }
    }

    let mut steps = Vec::with_capacity(4);

    let bled_to = pressure_of(&current)?;
    if bled_to < initial_pressure * (1.0 - RELATIVE_TOLERANCE) {
        steps.push(PlannedStep::new(FillStep::Bleed { to: bled_to }, current.mix()));
    }

    if additions.o2 > tolerance {
        current.o2 += additions.o2;
        let to = pressure_of(&current)?;
        steps.push(PlannedStep::new(
            FillStep::Fill {
                gas: FillGas::O2,
                to,
            },
            current.mix(),
        ));
    }

    if additions.he > tolerance {
        current.he += additions.he;
        let to = pressure_of(&current)?;
        steps.push(PlannedStep::new(
            FillStep::Fill {
                gas: FillGas::He,
                to,
            },
            current.mix(),
        ));
    }

    current = current + additions.top_up;
    let to = pressure_of(&current)?;
    steps.push(PlannedStep::new(FillStep::TopUp { to }, current.mix()));

    tracing::debug!(steps = steps.len(), final_mix = %current.mix(), "planned fill");

    Ok(FillPlan::new(steps, current))
}
