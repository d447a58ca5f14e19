//! # Twine Insulation
//!
//! Steady-state heat balance of insulated pipes as
//! [Twine](https://github.com/isentropic-dev/twine) models.
//!
//! A pipe carries a hot liquid and is wrapped in insulation. Heat reaches the
//! insulation surface through the liquid boundary layer and the insulation,
//! and leaves it by natural convection and radiation to still air. The crate
//! finds the surface temperature at which both flows match.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models: interpolation, fluid
//!   property tables, convection and radiation correlations, constraints and
//!   unit extensions.
//!
//! ## Diagnostics
//!
//! Solvers emit [`tracing`] events: a single warning per solver when an
//! exponentiation produces a non-finite value, debug summaries of the scan and
//! convergence, and a trace event per bisection step. The crate never
//! installs a subscriber.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once it is useful across models or outside this crate.

pub mod models;
pub mod support;
