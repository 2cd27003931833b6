// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Interpolation math: exact float comparisons and short names are idiomatic
#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_precision_loss)]

//! Time-stamped pose interpolation for spatial audio.
//!
//! Spatial audio engines receive source and listener positions as discrete
//! updates (network packets, UI events, physics ticks) but render audio at
//! a much finer granularity. Snapping a source to each new position
//! produces audible zipper artifacts; earshot smooths the motion instead by
//! interpolating between the two most recent samples.
//!
//! # Key entry points
//!
//! - [`Pose`] - a position plus forward/up orientation basis sampled at a
//!   specific time, with time-based interpolation between two reference
//!   poses
//! - [`PoseTracker`] - owns the start/current/end poses for one audio
//!   source or listener and drives interpolation across update ticks
//! - [`math`] - the projection and spherical-interpolation primitives the
//!   pose math is built on
//!
//! # Conventions
//!
//! Timestamps are caller-supplied scalars in any monotonic unit (seconds by
//! convention); the crate never reads a clock. Direction vectors are unit
//! length by convention, not enforcement: feeding non-unit forward/up
//! vectors into interpolation yields undefined directions.

pub mod math;
pub mod pose;
pub mod tracker;

pub use pose::Pose;
pub use tracker::PoseTracker;
