//! Ideal gas equation of state: `p·V = n·R·T`.

use uom::si::{
    amount_of_substance::mole,
    f64::{AmountOfSubstance, Pressure, ThermodynamicTemperature, Volume},
    pressure::pascal,
};

use crate::support::{gas::GasMix, units::R_IDEAL_GASES};

use super::{EosError, EquationOfState, si_vessel};

/// Ideal gas model, independent of composition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdealGas;

impl IdealGas {
    /// Computes `n = p·V / (R·T)` in SI units.
    #[must_use]
    pub fn moles_si(p: f64, v: f64, t: f64) -> f64 {
        (p * v) / (R_IDEAL_GASES * t)
    }

    /// Computes `p = n·R·T / V` in SI units.
    #[must_use]
    pub fn pressure_si(n: f64, v: f64, t: f64) -> f64 {
        (n * R_IDEAL_GASES * t) / v
    }
}

impl EquationOfState for IdealGas {
    fn moles(
        &self,
        pressure: Pressure,
        volume: Volume,
        temperature: ThermodynamicTemperature,
        _mix: &GasMix,
    ) -> Result<AmountOfSubstance, EosError> {
        let (v, t) = si_vessel(volume, temperature)?;
        let n = Self::moles_si(pressure.get::<pascal>(), v, t);
        Ok(AmountOfSubstance::new::<mole>(n))
    }

    fn pressure(
        &self,
        moles: AmountOfSubstance,
        volume: Volume,
        temperature: ThermodynamicTemperature,
        _mix: &GasMix,
    ) -> Result<Pressure, EosError> {
        let (v, t) = si_vessel(volume, temperature)?;
        let p = Self::pressure_si(moles.get::<mole>(), v, t);
        Ok(Pressure::new::<pascal>(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::{
        gas::presets::AIR,
        units::{bar, celsius, in_bar, liters},
    };

    #[test]
    fn one_mole_at_standard_conditions() {
        // 22.711 L/mol at 0 °C and 1 bar.
        let n = IdealGas
            .moles(bar(1.0), liters(22.710_954_64), celsius(0.0), &AIR)
            .unwrap();
        assert_relative_eq!(n.get::<mole>(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn full_cylinder() {
        let n = IdealGas
            .moles(bar(200.0), liters(10.0), celsius(20.0), &AIR)
            .unwrap();
        assert_relative_eq!(n.get::<mole>(), 82.055, epsilon = 1e-3);
    }

    #[test]
    fn pressure_moles_roundtrip() {
        let volume = liters(12.0);
        let temperature = celsius(15.0);

        let n = IdealGas
            .moles(bar(232.0), volume, temperature, &AIR)
            .unwrap();
        let p = IdealGas.pressure(n, volume, temperature, &AIR).unwrap();

        assert_relative_eq!(in_bar(p), 232.0, epsilon = 1e-12);
    }

    #[test]
    fn empty_vessel_holds_no_gas() {
        let n = IdealGas
            .moles(bar(0.0), liters(10.0), celsius(20.0), &AIR)
            .unwrap();
        assert_eq!(n.get::<mole>(), 0.0);
    }

    #[test]
    fn rejects_degenerate_vessels() {
        assert!(matches!(
            IdealGas.moles(bar(1.0), liters(0.0), celsius(20.0), &AIR),
            Err(EosError::OutOfDomain { .. })
        ));
        assert!(matches!(
            IdealGas.pressure(
                AmountOfSubstance::new::<mole>(1.0),
                liters(10.0),
                celsius(-273.15),
                &AIR
            ),
            Err(EosError::OutOfDomain { .. })
        ));
    }
}
