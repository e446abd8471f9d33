//! Problem formulation for solving the Van der Waals equation for `n`.

use std::convert::Infallible;

use thiserror::Error;
use twine_core::{EquationProblem, Model};
use uom::si::{
    amount_of_substance::mole,
    energy::joule,
    f64::{AmountOfSubstance, Energy},
};

use crate::support::units::R_IDEAL_GASES;

use super::MixingParameters;

/// The trial amount's co-volume fills the whole vessel.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("co-volume of {moles} mol exceeds the vessel volume")]
pub(super) struct CoVolumeExceeded {
    moles: f64,
}

/// Result of evaluating the molar equation at a trial amount.
#[derive(Debug, Clone, Copy)]
pub(super) struct Evaluation {
    pub(super) moles: AmountOfSubstance,

    /// `n·R·T − (p + a·(n/V)²)·(V − n·b)`.
    ///
    /// Negative below the root and positive above it.
    pub(super) residual: Energy,
}

/// Model adapter evaluating the molar equation at fixed `p`, `V`, `T`, in SI.
pub(super) struct VdwMolesModel {
    p: f64,
    v: f64,
    t: f64,
    params: MixingParameters,
}

impl VdwMolesModel {
    pub(super) fn new(p: f64, v: f64, t: f64, params: MixingParameters) -> Self {
        Self { p, v, t, params }
    }
}

impl Model for VdwMolesModel {
    type Input = AmountOfSubstance;
    type Output = Evaluation;
    type Error = CoVolumeExceeded;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let Self { p, v, t, params } = *self;
        let n = input.get::<mole>();

        let free_volume = v - n * params.b;
        if free_volume <= 0.0 {
            return Err(CoVolumeExceeded { moles: n });
        }

        let residual = n * R_IDEAL_GASES * t - (p + params.a * (n / v).powi(2)) * free_volume;

        Ok(Evaluation {
            moles: *input,
            residual: Energy::new::<joule>(residual),
        })
    }
}

/// Equation problem whose single residual is the molar equation in joules.
pub(super) struct VdwMolesProblem;

impl EquationProblem<1> for VdwMolesProblem {
    type Input = AmountOfSubstance;
    type Output = Evaluation;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(AmountOfSubstance::new::<mole>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.residual.get::<joule>()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::{eos::IdealGas, gas::presets::AIR};

    fn model() -> VdwMolesModel {
        VdwMolesModel::new(200.0e5, 0.01, 293.15, MixingParameters::for_mix(&AIR))
    }

    #[test]
    fn residual_changes_sign_across_bracket() {
        let estimate = IdealGas::moles_si(200.0e5, 0.01, 293.15);
        let model = model();

        let low = model
            .call(&AmountOfSubstance::new::<mole>(estimate / 2.0))
            .unwrap();
        let high = model
            .call(&AmountOfSubstance::new::<mole>(estimate * 2.0))
            .unwrap();

        assert!(low.residual.get::<joule>() < 0.0);
        assert!(high.residual.get::<joule>() > 0.0);
    }

    #[test]
    fn co_volume_pole_is_an_error() {
        let params = MixingParameters::for_mix(&AIR);
        let n = 1.01 * 0.01 / params.b;
        assert!(model().call(&AmountOfSubstance::new::<mole>(n)).is_err());
    }
}
