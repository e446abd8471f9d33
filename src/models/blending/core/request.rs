use uom::si::f64::{Pressure, ThermodynamicTemperature, Volume};

use crate::support::{
    gas::{GasMix, presets},
    units::{bar, celsius, liters},
};

use super::PlanError;

/// Water volume and temperature of the vessel being filled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vessel {
    pub volume: Volume,
    pub temperature: ThermodynamicTemperature,
}

impl Vessel {
    #[must_use]
    pub fn new(volume: Volume, temperature: ThermodynamicTemperature) -> Self {
        Self {
            volume,
            temperature,
        }
    }
}

/// A 10 L cylinder at 20 °C.
impl Default for Vessel {
    fn default() -> Self {
        Self::new(liters(10.0), celsius(20.0))
    }
}

/// Inputs to [`plan_fill`](super::plan_fill).
///
/// Pressures are absolute contents as read on the vessel gauge. Use
/// [`FillRequest::new`] for the usual defaults and the `with_*` builders to
/// override them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillRequest {
    pub target: GasMix,
    pub target_pressure: Pressure,
    pub initial: GasMix,
    pub initial_pressure: Pressure,
    pub vessel: Vessel,
    pub top_up: GasMix,
}

impl FillRequest {
    /// Requests `target` at 200 bar in an empty default vessel, topped up with air.
    #[must_use]
    pub fn new(target: GasMix) -> Self {
        Self {
            target,
            target_pressure: bar(200.0),
            initial: presets::AIR,
            initial_pressure: bar(0.0),
            vessel: Vessel::default(),
            top_up: presets::AIR,
        }
    }

    /// Like [`FillRequest::new`], with the target given as O2 and He fractions.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidComposition`] if the fractions do not form
    /// a valid mixture.
    pub fn from_fractions(o2: f64, he: f64) -> Result<Self, PlanError> {
        Ok(Self::new(GasMix::new(o2, he)?))
    }

    #[must_use]
    pub fn with_target_pressure(self, target_pressure: Pressure) -> Self {
        Self {
            target_pressure,
            ..self
        }
    }

    /// Sets the current content of the vessel.
    #[must_use]
    pub fn with_initial(self, initial: GasMix, initial_pressure: Pressure) -> Self {
        Self {
            initial,
            initial_pressure,
            ..self
        }
    }

    #[must_use]
    pub fn with_vessel(self, vessel: Vessel) -> Self {
        Self { vessel, ..self }
    }

    #[must_use]
    pub fn with_top_up(self, top_up: GasMix) -> Self {
        Self { top_up, ..self }
    }
}
