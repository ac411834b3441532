//! Core library for the plannergen planner generator.
//!
//! This crate turns a calendar year into typesetting markup for a hyperlinked
//! planner sized for an e-ink device: a title page, an annual overview,
//! quarterly, monthly, weekly and daily pages, and to-do and notes sections.
//! Every page carries a header with navigation tabs that link back into the
//! document.
//!
//! # Pipeline
//!
//! - **Calendar** ([`calendar`]): the year decomposed into quarters, months,
//!   weeks and days, each with a unique reference used as a link anchor
//! - **Markup** ([`tex`], [`pages`]): blocks of lines assembled into pages,
//!   each page followed by a page-break marker
//! - **Planner** ([`planner`]): headers and content blocks per section,
//!   configured for one device and hand
//! - **Output** ([`document`], [`display`]): section files plus a root file,
//!   and a report of what was written
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::Weekday;
//! use plannergen_core::{params::Section, PlannerBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new(2024)
//!     .with_weekday(Weekday::Monday)
//!     .build()?;
//!
//! let document = planner.generate_document(&[Section::Title, Section::Monthlies])?;
//! assert_eq!(document.total_pages(), 13);
//! assert!(document.root().contains("\\input{monthlies}"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod calendar;
pub mod config;
pub mod devices;
pub mod display;
pub mod document;
pub mod error;
pub mod pages;
pub mod params;
pub mod planner;
pub mod tex;

// Re-export commonly used types
pub use calendar::{Day, Month, Quarter, Week, Year};
pub use config::{ConfigFile, Layout};
pub use devices::Device;
pub use display::{Devices, GenerationReport, Sections};
pub use document::{Document, SectionOutput};
pub use error::{PlannerError, Result};
pub use params::{Generate, MainHand, Section};
pub use planner::{Planner, PlannerBuilder};
