//! Unit conversion constants and practical-unit constructors.
//!
//! This crate uses [`uom`] for every physical quantity that crosses a public
//! API. Blending work is done in the units printed on a cylinder gauge
//! (bar, liter, degree Celsius), while the equations of state are evaluated
//! in SI (pascal, cubic meter, kelvin, mole).
//!
//! The constants here are the fixed conversion factors between the two,
//! and the helpers build [`uom`] quantities from practical-unit values:
//!
//! ```
//! use blndr::support::units::{bar, celsius, in_bar, liters};
//! use uom::si::{thermodynamic_temperature::kelvin, volume::cubic_meter};
//!
//! let p = bar(200.0);
//! let v = liters(12.0);
//! let t = celsius(20.0);
//!
//! assert_eq!(in_bar(p), 200.0);
//! assert!((v.get::<cubic_meter>() - 0.012).abs() < 1e-15);
//! assert!((t.get::<kelvin>() - 293.15).abs() < 1e-12);
//! ```

use uom::si::{
    f64::{Pressure, ThermodynamicTemperature, Volume},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
    volume::cubic_meter,
};

/// Pascals per bar.
pub const BAR_TO_PASCAL: f64 = 1.0e5;

/// Cubic meters per liter.
pub const LITER_TO_CUBIC_METER: f64 = 1.0e-3;

/// Offset from degrees Celsius to kelvin.
pub const CELSIUS_TO_KELVIN: f64 = 273.15;

/// Molar gas constant, J/(mol·K).
pub const R_IDEAL_GASES: f64 = 8.314_462_618;

/// Creates a pressure from a value in bar.
#[must_use]
pub fn bar(value: f64) -> Pressure {
    Pressure::new::<pascal>(value * BAR_TO_PASCAL)
}

/// Returns a pressure expressed in bar.
#[must_use]
pub fn in_bar(pressure: Pressure) -> f64 {
    pressure.get::<pascal>() / BAR_TO_PASCAL
}

/// Creates a volume from a value in liters.
#[must_use]
pub fn liters(value: f64) -> Volume {
    Volume::new::<cubic_meter>(value * LITER_TO_CUBIC_METER)
}

/// Creates a temperature from a value in degrees Celsius.
#[must_use]
pub fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<kelvin>(value + CELSIUS_TO_KELVIN)
}
