//! # Sizing Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable, materials by catalog key)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input, catalog) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`casing`] - Pressure-vessel casing thickness, volumes and mass

pub mod casing;

// Re-export commonly used types
pub use casing::{CasingInput, CasingResult};
