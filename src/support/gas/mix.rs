use std::{fmt, str::FromStr};

use uom::si::{
    amount_of_substance::mole,
    f64::{AmountOfSubstance, MolarMass},
    molar_mass::gram_per_mole,
};

use crate::support::constraint::{Constraint, UnitInterval};

use super::{Component, GasMixError, ParseGasMixError, Preset, presets};

/// A three-component breathing gas, stored as O2 and He molar fractions.
///
/// The nitrogen fraction is derived as `1 - O2 - He`, so a valid mixture
/// always sums to one.
///
/// # Example
///
/// ```
/// use blndr::support::gas::{Component, GasMix};
///
/// let trimix = GasMix::new(0.21, 0.35).unwrap();
/// assert!((trimix.n2() - 0.44).abs() < 1e-12);
/// assert_eq!(trimix.fraction(Component::He), 0.35);
/// assert_eq!(
///     trimix.to_string(),
///     "Gas mix: O2 21.00%, He 35.00%, N2 44.00%",
/// );
///
/// assert!(GasMix::new(0.5, 0.6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasMix {
    o2: f64,
    he: f64,
}

impl GasMix {
    /// Creates a mixture from its oxygen and helium fractions.
    ///
    /// # Errors
    ///
    /// Returns [`GasMixError::InvalidComposition`] if either fraction is
    /// outside `[0, 1]` or if their sum exceeds one.
    pub fn new(o2: f64, he: f64) -> Result<Self, GasMixError> {
        let invalid = |reason: String| GasMixError::InvalidComposition { o2, he, reason };

        UnitInterval::check(&o2).map_err(|e| invalid(format!("O2 fraction: {e}")))?;
        UnitInterval::check(&he).map_err(|e| invalid(format!("He fraction: {e}")))?;

        if o2 + he > 1.0 {
            return Err(invalid(
                "sum of O2 and He fractions cannot exceed 100%".to_string(),
            ));
        }

        Ok(Self { o2, he })
    }

    /// Creates a mixture without validation.
    ///
    /// Only used for the compile-time presets, whose fractions are known good.
    pub(crate) const fn new_unchecked(o2: f64, he: f64) -> Self {
        Self { o2, he }
    }

    /// Creates a mixture by normalizing per-component molar amounts.
    ///
    /// An empty vessel (all amounts zero) yields the zero/zero mixture.
    #[must_use]
    pub fn from_moles(o2: AmountOfSubstance, he: AmountOfSubstance, n2: AmountOfSubstance) -> Self {
        let total = (o2 + he + n2).get::<mole>();
        if total == 0.0 {
            return Self { o2: 0.0, he: 0.0 };
        }
        Self {
            o2: o2.get::<mole>() / total,
            he: he.get::<mole>() / total,
        }
    }

    #[must_use]
    pub fn o2(&self) -> f64 {
        self.o2
    }

    #[must_use]
    pub fn he(&self) -> f64 {
        self.he
    }

    /// Nitrogen fraction, the balance of the mixture.
    ///
    /// Clamped at zero: O2 and He fractions that sum to one in decimal
    /// (0.32 + 0.68) can leave a negative balance of one ulp.
    #[must_use]
    pub fn n2(&self) -> f64 {
        (1.0 - (self.o2 + self.he)).max(0.0)
    }

    /// Returns the fraction of one component.
    #[must_use]
    pub fn fraction(&self, component: Component) -> f64 {
        match component {
            Component::O2 => self.o2,
            Component::He => self.he,
            Component::N2 => self.n2(),
        }
    }

    /// Returns `[O2, He, N2]` fractions.
    #[must_use]
    pub fn fractions(&self) -> [f64; 3] {
        [self.o2, self.he, self.n2()]
    }

    /// Fraction-weighted molar mass of the mixture.
    #[must_use]
    pub fn molar_mass(&self) -> MolarMass {
        let grams = Component::ALL
            .iter()
            .map(|&c| self.fraction(c) * c.molar_mass().get::<gram_per_mole>())
            .sum();
        MolarMass::new::<gram_per_mole>(grams)
    }
}

/// Air, the default starting content and top-up gas.
impl Default for GasMix {
    fn default() -> Self {
        presets::AIR
    }
}

impl fmt::Display for GasMix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Gas mix: O2 {:.2}%, He {:.2}%, N2 {:.2}%",
            self.o2 * 100.0,
            self.he * 100.0,
            self.n2() * 100.0
        )
    }
}

/// Parses a preset name (`air`, `ean32`, `o2`, ...), a nitrox O2 percentage
/// (`32`), or an `O2/He` percentage pair (`21/35`).
impl FromStr for GasMix {
    type Err = ParseGasMixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(preset) = s.parse::<Preset>() {
            return Ok(preset.mix());
        }

        let unrecognised = || ParseGasMixError::Unrecognised(s.to_string());
        let percent = |text: &str| text.trim().parse::<f64>().map_err(|_| unrecognised());

        let (o2, he) = match s.split_once('/') {
            Some((o2, he)) => (percent(o2)?, percent(he)?),
            None => (percent(s)?, 0.0),
        };

        Ok(GasMix::new(o2 / 100.0, he / 100.0)?)
    }
}
