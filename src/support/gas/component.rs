use std::fmt;

use uom::si::{f64::MolarMass, molar_mass::gram_per_mole};

/// One of the three molar components of a breathing gas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    O2,
    He,
    N2,
}

impl Component {
    /// All components, in the order used by [`GasMix::fractions`](super::GasMix::fractions).
    pub const ALL: [Component; 3] = [Component::O2, Component::He, Component::N2];

    /// Position of this component in fraction and molar arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Component::O2 => 0,
            Component::He => 1,
            Component::N2 => 2,
        }
    }

    /// Chemical symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Component::O2 => "O2",
            Component::He => "He",
            Component::N2 => "N2",
        }
    }

    /// Molar mass of the pure component.
    #[must_use]
    pub fn molar_mass(self) -> MolarMass {
        let grams = match self {
            Component::O2 => 31.9988,
            Component::He => 4.002_060_2,
            Component::N2 => 28.013_48,
        };
        MolarMass::new::<gram_per_mole>(grams)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
