//! Breathing-gas mixtures of oxygen, helium and nitrogen.
//!
//! A [`GasMix`] stores the oxygen and helium molar fractions; nitrogen is the
//! balance `1 - O2 - He` and is always derived. Mixtures are immutable values
//! created per computation step.
//!
//! Common mixtures are available as constants in [`presets`] and through the
//! read-only [`Preset`] registry.

mod component;
mod depth;
mod error;
mod mix;

pub mod presets;

pub use component::Component;
pub use depth::{DEFAULT_PP_O2_BAR, MAX_PP_O2_BAR, Rounding};
pub use error::{GasMixError, ParseGasMixError};
pub use mix::GasMix;
pub use presets::Preset;
