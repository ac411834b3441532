//! Display wrappers for run results and listings.
//!
//! Every wrapper implements [`std::fmt::Display`] producing markdown, which
//! the CLI renders to the terminal. The run report also serializes to JSON.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ Planner/Document│    │    Wrappers     │    │   Terminal /    │
//! │  Device/Section │───▶│ (report, lists) │───▶│      JSON       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`report`]: Summary of one generation run ([`GenerationReport`])
//! - [`catalog`]: Listings of supported devices and sections
//!
//! ## Usage
//!
//! ```rust
//! use plannergen_core::{display::Devices, devices::Device};
//!
//! let output = Devices(Device::ALL.to_vec()).to_string();
//! assert!(output.contains("supernote_a5x"));
//! ```

pub mod catalog;
pub mod report;

pub use catalog::{Devices, Sections};
pub use report::{GenerationReport, SectionEntry};
