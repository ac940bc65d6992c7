//! # srb_core - Solid Rocket Motor Sizing Engine
//!
//! `srb_core` sizes solid-rocket-motor components from named catalogs of
//! casing materials, propellants and nozzles. The engineering content is the
//! casing model: a weld-derated thin-wall thickness equation with a corrosion
//! allowance, and a capsule ("pill") volume model for wall volume and mass.
//!
//! ## Design Philosophy
//!
//! - **Pure**: Derived quantities are recomputed from current inputs on every call
//! - **Shared, immutable catalog data**: Entries are handed out as `Arc` snapshots
//! - **Forgiving loader**: Malformed catalog sections are skipped with a warning
//! - **JSON/TOML**: All records implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use srb_core::casing::CasingGeometry;
//! use srb_core::catalog::Catalog;
//!
//! let catalog = Catalog::with_defaults();
//! let steel = catalog.material("Steel4130").unwrap();
//!
//! let casing = CasingGeometry::new(steel, 2.0, 0.5).with_mawp(5.0e6);
//! println!("wall = {:.2} mm, mass = {:.1} kg", casing.thickness() * 1000.0, casing.mass());
//! ```
//!
//! ## Modules
//!
//! - [`casing`] - Casing geometry: thickness, volumes, mass
//! - [`calculations`] - Serializable casing sizing inputs and results
//! - [`catalog`] - Material, propellant and nozzle catalogs
//! - [`config_node`] - Tagged config sections and the decode/encode step
//! - [`curve`] - Piecewise curves (nozzle atmosphere curve)
//! - [`project`] - Project container for motor designs
//! - [`file_io`] - Atomic project and catalog file operations
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod casing;
pub mod catalog;
pub mod config_node;
pub mod curve;
pub mod errors;
pub mod file_io;
pub mod project;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use casing::CasingGeometry;
pub use catalog::{CasingMaterial, Catalog, Nozzle, Propellant};
pub use config_node::{ConfigEntry, ConfigNode};
pub use errors::{CalcError, CalcResult, LoadWarning};
pub use file_io::{load_catalog, load_project, save_catalog, save_project};
pub use project::{Project, ProjectMetadata};
