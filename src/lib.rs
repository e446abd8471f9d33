//! # blndr
//!
//! Partial-pressure gas blending for scuba cylinders, built on
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Given a vessel's current contents and a target oxygen/helium/nitrogen
//! mixture at a target pressure, blndr plans the operator steps that get
//! there: an optional bleed, pure O2 and He fills, and a final top-up with a
//! nitrogen-bearing gas such as air.
//!
//! ## Crate layout
//!
//! - [`models`]: The fill planner, as a plain function and as a
//!   [`twine_core::Model`].
//! - [`support`]: Gas mixtures, equations of state, numeric constraints and
//!   unit helpers used by the planner.
//!
//! The `blndr` binary is a thin command-line front end over
//! [`models::blending::plan_fill`].
//!
//! Note: [`support`] is public because it is useful on its own, but its API
//! is not stable.

pub mod models;
pub mod support;
