//! Fill planning for a single pressure vessel.
//!
//! Given the vessel's current contents and a target mixture and pressure,
//! [`plan_fill`] derives the ordered operator steps: an optional bleed, pure
//! oxygen and helium fills, and a final top-up with the reference gas.
//!
//! ```
//! use blndr::models::blending::{FillGas, FillRequest, FillStep, plan_fill};
//! use blndr::support::{gas::{GasMix, presets}, units::bar};
//!
//! let request = FillRequest::new(GasMix::new(0.20, 0.15).unwrap())
//!     .with_initial(presets::OXYGEN, bar(50.0));
//!
//! let plan = plan_fill(&request).unwrap();
//! let lines: Vec<String> = plan.steps().iter().map(|s| s.step.to_string()).collect();
//!
//! assert_eq!(
//!     lines,
//!     [
//!         "[BLEED] to 5.55 bar",
//!         "[FILL] with He up to 35.55 bar",
//!         "[TOP-UP] to 200.00bar",
//!     ]
//! );
//! assert!(matches!(plan.steps()[1].step, FillStep::Fill { gas: FillGas::He, .. }));
//! ```
//!
//! All molar conversions use the ideal gas law. The Van der Waals model in
//! [`crate::support::eos`] is available for comparison but does not drive
//! the plan.

mod core;

pub use self::core::{
    FillGas, FillPlan, FillRequest, FillStep, MolarVector, PlanError, PlannedStep, Vessel,
    plan_fill,
};

use twine_core::Model;

/// [`Model`] adapter over [`plan_fill`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillPlanner;

impl Model for FillPlanner {
    type Input = FillRequest;
    type Output = FillPlan;
    type Error = PlanError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        plan_fill(input)
    }
}
