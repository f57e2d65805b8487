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
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera auto-framing, ray picking, and tweened selection for 3D viewers.
//!
//! Vantage is renderer-agnostic: the host owns the window, GPU, and asset
//! loading, and feeds vantage bounding boxes and pointer positions. Vantage
//! answers where the camera should go and how picked objects should move.
//!
//! # Key entry points
//!
//! - [`camera::fit::fit`] - frame a bounding box at a field of view and pitch
//! - [`camera::controller::OrbitController`] - orbit-style camera controls
//! - [`scene::Scene`] - node tree of transforms and geometry bounds
//! - [`showroom::Showroom`] - double-click-to-frame model viewer
//! - [`chess::ChessBoard`] - click-to-select board with tweened pieces
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! Everything is single-threaded and synchronous. The framing math is a pure
//! function of its inputs; controllers own plain state and are driven by the
//! host's event loop through [`input::InputEvent`] and
//! [`animation::Animator::update`].

pub mod animation;
pub mod bounds;
pub mod camera;
pub mod chess;
pub mod error;
pub mod input;
pub mod options;
pub mod picking;
pub mod scene;
pub mod showroom;

pub use bounds::BoundingBox;
pub use camera::fit::{fit, ViewFitter, ViewRequest, ViewResult};
pub use error::VantageError;
