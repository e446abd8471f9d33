use uom::si::{amount_of_substance::mole, f64::AmountOfSubstance};

use crate::support::gas::GasMix;

use super::{MolarVector, PlanError};

/// Gas to add on top of the current content to reach the target.
///
/// The top-up is sized first, from the nitrogen deficit. The pure O2 and He
/// fills cover whatever the top-up leaves short and go negative when the
/// top-up alone would overshoot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Additions {
    pub(super) top_up: MolarVector,
    pub(super) o2: AmountOfSubstance,
    pub(super) he: AmountOfSubstance,
}

impl Additions {
    /// Sizes the top-up and the pure fills for the current content.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::NoNitrogenSource`] if the nitrogen deficit
    /// exceeds `tolerance` and the top-up gas contains no nitrogen.
    pub(super) fn size(
        current: &MolarVector,
        target: &MolarVector,
        top_up: &GasMix,
        tolerance: AmountOfSubstance,
    ) -> Result<Self, PlanError> {
        let deficit = target.n2 - current.n2;

        let top_up_total = if top_up.n2() > 0.0 {
            deficit / top_up.n2()
        } else if deficit > tolerance {
            return Err(PlanError::NoNitrogenSource {
                top_up: *top_up,
                deficit,
            });
        } else {
            AmountOfSubstance::new::<mole>(0.0)
        };

        let top_up = MolarVector::from_total(top_up_total, top_up);

        Ok(Self {
            top_up,
            o2: target.o2 - current.o2 - top_up.o2,
            he: target.he - current.he - top_up.he,
        })
    }

    /// Returns `true` if the top-up delivers more O2 or He than the target needs.
    pub(super) fn overshoots(&self, tolerance: AmountOfSubstance) -> bool {
        self.o2 < -tolerance || self.he < -tolerance
    }

    /// Fraction of `current` to bleed so that neither fill is negative.
    ///
    /// Taken over the components present in the vessel. Returns zero when
    /// nothing in the vessel can be bled to help.
    pub(super) fn correction_ratio(&self, current: &MolarVector) -> f64 {
        [(self.o2, current.o2), (self.he, current.he)]
            .into_iter()
            .filter(|(_, present)| present.get::<mole>() > 0.0)
            .map(|(fill, present)| -fill.get::<mole>() / present.get::<mole>())
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::gas::presets::{AIR, EAN32, HELIUM, OXYGEN};

    fn moles(n: f64) -> AmountOfSubstance {
        AmountOfSubstance::new::<mole>(n)
    }

    #[test]
    fn nitrox_from_empty() {
        let target = MolarVector::from_total(moles(100.0), &EAN32);
        let additions =
            Additions::size(&MolarVector::empty(), &target, &AIR, moles(1e-9)).unwrap();

        let air = 68.0 / AIR.n2();
        assert_relative_eq!(additions.top_up.total().get::<mole>(), air, epsilon = 1e-9);
        assert_relative_eq!(
            additions.o2.get::<mole>(),
            32.0 - air * AIR.o2(),
            epsilon = 1e-9
        );
        assert_relative_eq!(additions.he.get::<mole>(), 0.0);
        assert!(!additions.overshoots(moles(1e-9)));
    }

    #[test]
    fn nitrogen_free_top_up_is_empty() {
        let target = MolarVector::from_total(moles(50.0), &GasMix::new(0.21, 0.79).unwrap());
        let additions =
            Additions::size(&MolarVector::empty(), &target, &HELIUM, moles(1e-9)).unwrap();

        assert_eq!(additions.top_up, MolarVector::empty());
        assert_relative_eq!(additions.o2.get::<mole>(), 10.5, epsilon = 1e-12);
        assert_relative_eq!(additions.he.get::<mole>(), 39.5, epsilon = 1e-12);
    }

    #[test]
    fn missing_nitrogen_source() {
        let target = MolarVector::from_total(moles(100.0), &EAN32);
        let err =
            Additions::size(&MolarVector::empty(), &target, &OXYGEN, moles(1e-9)).unwrap_err();

        assert!(matches!(err, PlanError::NoNitrogenSource { top_up, .. } if top_up == OXYGEN));
    }

    #[test]
    fn correction_ratio_targets_the_worst_overshoot() {
        let current = MolarVector {
            o2: moles(10.0),
            he: moles(20.0),
            n2: moles(0.0),
        };
        let additions = Additions {
            top_up: MolarVector::empty(),
            o2: moles(-5.0),
            he: moles(-4.0),
        };

        assert!(additions.overshoots(moles(1e-9)));
        assert_relative_eq!(additions.correction_ratio(&current), 0.5);
    }

    #[test]
    fn correction_ratio_ignores_absent_components() {
        let additions = Additions {
            top_up: MolarVector::empty(),
            o2: moles(-5.0),
            he: moles(1.0),
        };

        assert_relative_eq!(additions.correction_ratio(&MolarVector::empty()), 0.0);
    }
}
