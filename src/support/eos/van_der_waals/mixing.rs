use crate::support::gas::{Component, GasMix};

/// Van der Waals constants of a pure component, in SI units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VdwConstants {
    /// Attraction parameter, Pa·m⁶/mol².
    pub a: f64,
    /// Co-volume, m³/mol.
    pub b: f64,
}

impl VdwConstants {
    #[must_use]
    pub const fn of(component: Component) -> Self {
        match component {
            Component::O2 => Self {
                a: 0.1382,
                b: 3.186e-5,
            },
            Component::He => Self {
                a: 0.00346,
                b: 2.380e-5,
            },
            Component::N2 => Self {
                a: 0.1370,
                b: 3.870e-5,
            },
        }
    }
}

/// Effective Van der Waals constants of a mixture.
///
/// - `a_mix = Σᵢ Σⱼ xᵢ·xⱼ·√(aᵢ·aⱼ)`
/// - `b_mix = Σᵢ xᵢ·bᵢ`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixingParameters {
    /// Attraction parameter, Pa·m⁶/mol².
    pub a: f64,
    /// Co-volume, m³/mol.
    pub b: f64,
}

impl MixingParameters {
    #[must_use]
    pub fn for_mix(mix: &GasMix) -> Self {
        let x = mix.fractions();
        let constants = Component::ALL.map(VdwConstants::of);

        let mut a = 0.0;
        for (x_i, c_i) in x.iter().zip(&constants) {
            for (x_j, c_j) in x.iter().zip(&constants) {
                a += x_i * x_j * (c_i.a * c_j.a).sqrt();
            }
        }

        let b = x.iter().zip(&constants).map(|(x_i, c_i)| x_i * c_i.b).sum();

        Self { a, b }
    }
}
