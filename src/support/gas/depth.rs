//! Depth limits of a mixture: maximum operating depth and equivalent air depth.
//!
//! Both use the seawater approximation of 10 m per bar of ambient pressure.

use uom::si::{
    f64::{Length, Pressure},
    length::meter,
};

use crate::support::units::{bar, in_bar};

use super::{GasMix, GasMixError, presets};

/// Conventional oxygen partial pressure limit for the working phase of a dive.
pub const DEFAULT_PP_O2_BAR: f64 = 1.4;

/// Oxygen partial pressures at or above this value are refused.
pub const MAX_PP_O2_BAR: f64 = 2.0;

const METERS_PER_BAR: f64 = 10.0;

/// Whether a computed depth is floored to whole meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Floor to whole meters, erring on the shallow side.
    #[default]
    Floor,
    /// Keep the exact value.
    Exact,
}

impl Rounding {
    fn apply(self, meters: f64) -> Length {
        let meters = match self {
            Rounding::Floor => meters.floor(),
            Rounding::Exact => meters,
        };
        Length::new::<meter>(meters)
    }
}

impl GasMix {
    /// Maximum operating depth at the given oxygen partial pressure limit.
    ///
    /// `MOD = 10 · (ppO2 / O2 − 1)`
    ///
    /// # Errors
    ///
    /// Returns [`GasMixError::PreconditionViolation`] if `pp_o2` is at or
    /// above [`MAX_PP_O2_BAR`], or if the mixture contains no oxygen.
    ///
    /// ```
    /// use blndr::support::{gas::{Rounding, presets::AIR}, units::bar};
    /// use uom::si::length::meter;
    ///
    /// let depth = AIR.max_operating_depth(bar(1.4), Rounding::Floor).unwrap();
    /// assert_eq!(depth.get::<meter>(), 56.0);
    /// ```
    pub fn max_operating_depth(
        &self,
        pp_o2: Pressure,
        rounding: Rounding,
    ) -> Result<Length, GasMixError> {
        let pp_o2 = in_bar(pp_o2);
        if pp_o2.is_nan() || pp_o2 >= MAX_PP_O2_BAR {
            return Err(GasMixError::PreconditionViolation {
                context: format!("ppO2 of {pp_o2} bar must be below {MAX_PP_O2_BAR} bar"),
            });
        }
        if self.o2() <= 0.0 {
            return Err(GasMixError::PreconditionViolation {
                context: "MOD is undefined for a mix without oxygen".to_string(),
            });
        }

        Ok(rounding.apply(METERS_PER_BAR * (pp_o2 / self.o2() - 1.0)))
    }

    /// Equivalent air depth: the depth at which air has the same nitrogen
    /// partial pressure as this mixture at `depth`.
    ///
    /// `EAD = (depth + 10) · N2 / N2_air − 10`
    ///
    /// When `depth` is `None`, the floored MOD at [`DEFAULT_PP_O2_BAR`] is used.
    ///
    /// # Errors
    ///
    /// Propagates the MOD errors when `depth` is `None`.
    pub fn equivalent_air_depth(
        &self,
        depth: Option<Length>,
        rounding: Rounding,
    ) -> Result<Length, GasMixError> {
        let depth = match depth {
            Some(depth) => depth,
            None => self.max_operating_depth(bar(DEFAULT_PP_O2_BAR), Rounding::Floor)?,
        };

        let narcotic_ratio = self.n2() / presets::AIR.n2();
        let ead = (depth.get::<meter>() + METERS_PER_BAR) * narcotic_ratio - METERS_PER_BAR;
        Ok(rounding.apply(ead))
    }
}
