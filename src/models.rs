//! Public blending models.
//!
//! Each model lives in its own module with an internal `core` submodule where
//! the computation lives. The [`twine_core::Model`] implementation is a thin
//! adapter that delegates to the core API, which is also exposed as a plain
//! function for callers that do not use Twine.

pub mod blending;
