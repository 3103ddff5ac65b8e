//! Core 2-D hard-disk lattice configuration library.
//!
//! Main components:
//! - [`packing`] — box sizing from the target packing fraction.
//! - [`lattice`] — square and triangular (hex) lattice builders.
//! - [`pbc`] — periodic wrap-around and image tiling helpers.
//! - [`config`] — run parameters for the generation pipeline.
//! - [`error`] — error type shared by all fallible operations.

pub mod config;
pub mod error;
pub mod lattice;
pub mod packing;
pub mod pbc;
