//! Named mixtures used at every fill station.
//!
//! The constants are plain values; [`Preset`] is the read-only registry that
//! maps names to them.

use std::{fmt, str::FromStr};

use super::{GasMix, ParseGasMixError};

/// Atmospheric air, 20.95% O2.
pub const AIR: GasMix = GasMix::new_unchecked(0.2095, 0.0);

/// Enriched air nitrox, 32% O2.
pub const EAN32: GasMix = GasMix::new_unchecked(0.32, 0.0);

/// Enriched air nitrox, 36% O2.
pub const EAN36: GasMix = GasMix::new_unchecked(0.36, 0.0);

/// Enriched air nitrox, 40% O2.
pub const EAN40: GasMix = GasMix::new_unchecked(0.40, 0.0);

/// Pure oxygen.
pub const OXYGEN: GasMix = GasMix::new_unchecked(1.0, 0.0);

/// Pure helium.
pub const HELIUM: GasMix = GasMix::new_unchecked(0.0, 1.0);

/// Pure nitrogen.
pub const NITROGEN: GasMix = GasMix::new_unchecked(0.0, 0.0);

/// Registry of the named mixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Air,
    Ean32,
    Ean36,
    Ean40,
    Oxygen,
    Helium,
    Nitrogen,
}

impl Preset {
    pub const ALL: [Preset; 7] = [
        Preset::Air,
        Preset::Ean32,
        Preset::Ean36,
        Preset::Ean40,
        Preset::Oxygen,
        Preset::Helium,
        Preset::Nitrogen,
    ];

    /// The mixture this preset stands for.
    #[must_use]
    pub const fn mix(self) -> GasMix {
        match self {
            Preset::Air => AIR,
            Preset::Ean32 => EAN32,
            Preset::Ean36 => EAN36,
            Preset::Ean40 => EAN40,
            Preset::Oxygen => OXYGEN,
            Preset::Helium => HELIUM,
            Preset::Nitrogen => NITROGEN,
        }
    }

    /// Short name accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Preset::Air => "air",
            Preset::Ean32 => "ean32",
            Preset::Ean36 => "ean36",
            Preset::Ean40 => "ean40",
            Preset::Oxygen => "o2",
            Preset::Helium => "he",
            Preset::Nitrogen => "n2",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ParseGasMixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseGasMixError::Unrecognised(s.to_string()))
    }
}
