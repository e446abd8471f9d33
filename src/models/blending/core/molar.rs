use std::ops::Add;

use uom::si::{amount_of_substance::mole, f64::AmountOfSubstance};

use crate::support::{
    constraint::{Constraint, NonNegative},
    gas::{Component, GasMix},
};

/// Absolute molar content of a vessel, per component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MolarVector {
    pub o2: AmountOfSubstance,
    pub he: AmountOfSubstance,
    pub n2: AmountOfSubstance,
}

impl MolarVector {
    /// An empty vessel.
    #[must_use]
    pub fn empty() -> Self {
        let zero = AmountOfSubstance::new::<mole>(0.0);
        Self {
            o2: zero,
            he: zero,
            n2: zero,
        }
    }

    /// Splits a total amount across components by the mixture's fractions.
    #[must_use]
    pub fn from_total(total: AmountOfSubstance, mix: &GasMix) -> Self {
        Self {
            o2: total * mix.o2(),
            he: total * mix.he(),
            n2: total * mix.n2(),
        }
    }

    #[must_use]
    pub fn get(&self, component: Component) -> AmountOfSubstance {
        match component {
            Component::O2 => self.o2,
            Component::He => self.he,
            Component::N2 => self.n2,
        }
    }

    #[must_use]
    pub fn total(&self) -> AmountOfSubstance {
        self.o2 + self.he + self.n2
    }

    /// Scales every component by the same factor.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            o2: self.o2 * factor,
            he: self.he * factor,
            n2: self.n2 * factor,
        }
    }

    /// Composition of the content; an empty vessel yields zero fractions.
    #[must_use]
    pub fn mix(&self) -> GasMix {
        GasMix::from_moles(self.o2, self.he, self.n2)
    }

    /// Returns `true` if no component is negative.
    #[must_use]
    pub fn is_physical(&self) -> bool {
        Component::ALL
            .iter()
            .all(|&c| NonNegative::check(&self.get(c)).is_ok())
    }

    /// Bleeds this content until no component exceeds `target`.
    ///
    /// Returns the content unchanged if it already fits. If a component is
    /// present that `target` does not contain at all, the vessel is emptied.
    /// Otherwise every component is scaled by the inverse of the largest
    /// `current / target` ratio, so the binding component lands exactly on
    /// its target.
    #[must_use]
    pub fn bleed_to_fit(&self, target: &Self) -> Self {
        let exceeds = Component::ALL
            .iter()
            .any(|&c| self.get(c) > target.get(c));
        if !exceeds {
            return *self;
        }

        let unwanted = Component::ALL.iter().any(|&c| {
            self.get(c).get::<mole>() > 0.0 && target.get(c).get::<mole>() <= 0.0
        });
        if unwanted {
            return Self::empty();
        }

        let ratio = Component::ALL
            .iter()
            .filter(|&&c| target.get(c).get::<mole>() > 0.0)
            .map(|&c| self.get(c).get::<mole>() / target.get(c).get::<mole>())
            .fold(1.0, f64::max);

        self.scaled(ratio.recip())
    }
}

impl Add for MolarVector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            o2: self.o2 + rhs.o2,
            he: self.he + rhs.he,
            n2: self.n2 + rhs.n2,
        }
    }
}
