//! Equations of state relating pressure, volume, temperature and molar amount.
//!
//! Two providers share the [`EquationOfState`] contract:
//!
//! - [`IdealGas`]: `p·V = n·R·T`, closed form in both directions.
//! - [`VanDerWaals`]: composition-dependent real-gas correction, closed form
//!   for pressure and solved iteratively for molar amount.
//!
//! The public methods take [`uom`] quantities, so callers may work in bar,
//! liters and degrees Celsius or directly in SI. Each provider also exposes
//! `*_si` functions over plain `f64` in pascal, cubic meter, kelvin and mole,
//! which is the form the root finder works in.

mod error;
mod ideal_gas;
mod van_der_waals;

pub use error::EosError;
pub use ideal_gas::IdealGas;
pub use van_der_waals::{MixingParameters, RootFinderConfig, VanDerWaals, VdwConstants};

use uom::si::{
    f64::{AmountOfSubstance, Pressure, ThermodynamicTemperature, Volume},
    thermodynamic_temperature::kelvin,
    volume::cubic_meter,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    gas::GasMix,
};

/// Conversion between vessel state and molar amount.
///
/// The mixture is passed to every call; models that do not depend on
/// composition ignore it.
pub trait EquationOfState {
    /// Returns the molar amount of gas at the given state.
    ///
    /// # Errors
    ///
    /// Returns [`EosError`] if the state is outside the model's domain or
    /// the amount cannot be solved for.
    fn moles(
        &self,
        pressure: Pressure,
        volume: Volume,
        temperature: ThermodynamicTemperature,
        mix: &GasMix,
    ) -> Result<AmountOfSubstance, EosError>;

    /// Returns the pressure of `moles` of gas at the given state.
    ///
    /// # Errors
    ///
    /// Returns [`EosError`] if the state is outside the model's domain.
    fn pressure(
        &self,
        moles: AmountOfSubstance,
        volume: Volume,
        temperature: ThermodynamicTemperature,
        mix: &GasMix,
    ) -> Result<Pressure, EosError>;
}

/// Extracts SI volume and absolute temperature, both of which must be positive.
fn si_vessel(
    volume: Volume,
    temperature: ThermodynamicTemperature,
) -> Result<(f64, f64), EosError> {
    let v = volume.get::<cubic_meter>();
    let t = temperature.get::<kelvin>();

    StrictlyPositive::check(&v).map_err(|e| EosError::OutOfDomain {
        context: format!("volume {v} m³: {e}"),
    })?;
    StrictlyPositive::check(&t).map_err(|e| EosError::OutOfDomain {
        context: format!("absolute temperature {t} K: {e}"),
    })?;

    Ok((v, t))
}
