use std::fmt;

use uom::si::f64::Pressure;

use crate::support::{
    gas::{Component, GasMix},
    units::{bar, in_bar},
};

use super::MolarVector;

/// A pure gas added by a [`FillStep::Fill`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FillGas {
    O2,
    He,
}

impl FillGas {
    #[must_use]
    pub fn component(self) -> Component {
        match self {
            Self::O2 => Component::O2,
            Self::He => Component::He,
        }
    }
}

impl fmt::Display for FillGas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.component(), f)
    }
}

/// One operator action, carrying the gauge pressure to stop at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FillStep {
    Bleed { to: Pressure },
    Fill { gas: FillGas, to: Pressure },
    TopUp { to: Pressure },
}

impl FillStep {
    /// Pressure reached at the end of this step.
    #[must_use]
    pub fn pressure(&self) -> Pressure {
        match *self {
            Self::Bleed { to } | Self::Fill { to, .. } | Self::TopUp { to } => to,
        }
    }
}

impl fmt::Display for FillStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bleed { to } => write!(f, "[BLEED] to {:.2} bar", in_bar(*to)),
            Self::Fill { gas, to } => write!(f, "[FILL] with {gas} up to {:.2} bar", in_bar(*to)),
            Self::TopUp { to } => write!(f, "[TOP-UP] to {:.2}bar", in_bar(*to)),
        }
    }
}

/// A step together with the vessel composition once it is done.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannedStep {
    pub step: FillStep,
    pub mix: GasMix,
}

impl PlannedStep {
    #[must_use]
    pub fn new(step: FillStep, mix: GasMix) -> Self {
        Self { step, mix }
    }
}

/// Ordered steps of a fill and the resulting vessel content.
///
/// Always ends with a [`FillStep::TopUp`], which may be a no-op when no
/// nitrogen is needed.
#[derive(Debug, Clone, PartialEq)]
pub struct FillPlan {
    steps: Vec<PlannedStep>,
    contents: MolarVector,
}

impl FillPlan {
    pub(super) fn new(steps: Vec<PlannedStep>, contents: MolarVector) -> Self {
        Self { steps, contents }
    }

    #[must_use]
    pub fn steps(&self) -> &[PlannedStep] {
        &self.steps
    }

    /// Molar content after the last step.
    #[must_use]
    pub fn contents(&self) -> MolarVector {
        self.contents
    }

    #[must_use]
    pub fn final_pressure(&self) -> Pressure {
        self.steps
            .last()
            .map_or_else(|| bar(0.0), |s| s.step.pressure())
    }

    #[must_use]
    pub fn final_mix(&self) -> GasMix {
        self.contents.mix()
    }
}

/// Renders the numbered step list, one step per line.
impl fmt::Display for FillPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, planned) in self.steps.iter().enumerate() {
            writeln!(f, " {}. {}", i + 1, planned.step)?;
        }
        Ok(())
    }
}
