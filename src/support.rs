//! Supporting utilities used by the blending model.
//!
//! - [`units`]: Conversion constants and practical-unit constructors.
//! - [`constraint`]: Numeric invariants checked at construction time.
//! - [`gas`]: Gas mixtures, presets and depth limits.
//! - [`eos`]: Ideal and Van der Waals equations of state.

pub mod constraint;
pub mod eos;
pub mod gas;
pub mod units;
