//! # iBMB Fire
//!
//! Parametric compartment fire temperature-time curves after the iBMB
//! method, built as [Twine](https://github.com/isentropic-dev/twine) models.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Quick start
//!
//! ```
//! use ibmb_fire::models::fire::ibmb::compute;
//!
//! let curve = compute(4.0, 4.0, 3.0, 1, 3.2, 2.5, 20.0, 300.0, 511.0, 1500.0)?;
//! for (minutes, celsius) in curve.iter().step_by(100) {
//!     println!("{minutes:6.1} min  {celsius:7.1} °C");
//! }
//! # Ok::<(), ibmb_fire::models::fire::ibmb::IbmbError>(())
//! ```
//!
//! ## Features
//!
//! - `plot`: Enables `Curve::render` for PNG export via `plotters`.
//!
//! Note: APIs in [`support`] are public because they're useful, but they are
//! not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
