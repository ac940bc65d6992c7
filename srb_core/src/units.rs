//! # Unit Types
//!
//! Type-safe wrappers for the units used in motor sizing. These are plain
//! `f64` newtypes that serialize as bare numbers.
//!
//! ## SI Units (Primary)
//!
//! The sizing formulas work in SI internally:
//! - Length: metres (m), with millimetres (mm) for wall thickness display
//! - Pressure/stress: pascals (Pa), megapascals (MPa), psi for US catalogs
//! - Volume: cubic metres (m³), litres (L)
//! - Mass: kilograms (kg)
//!
//! ## Example
//!
//! ```rust
//! use srb_core::units::{Megapascals, Millimeters, Meters, Pascals};
//!
//! let wall = Meters(0.0027);
//! let wall_mm: Millimeters = wall.into();
//! assert!((wall_mm.0 - 2.7).abs() < 1e-9);
//!
//! let mawp: Pascals = Megapascals(5.0).into();
//! assert_eq!(mawp.0, 5.0e6);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Pascals per psi
pub const PA_PER_PSI: f64 = 6_894.757_293_168;

// ============================================================================
// Length Units
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Pressure Units
// ============================================================================

/// Pressure or stress in pascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Pressure or stress in megapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

/// Pressure or stress in pounds per square inch
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Psi(pub f64);

impl From<Megapascals> for Pascals {
    fn from(mpa: Megapascals) -> Self {
        Pascals(mpa.0 * 1.0e6)
    }
}

impl From<Pascals> for Megapascals {
    fn from(pa: Pascals) -> Self {
        Megapascals(pa.0 / 1.0e6)
    }
}

impl From<Psi> for Pascals {
    fn from(psi: Psi) -> Self {
        Pascals(psi.0 * PA_PER_PSI)
    }
}

impl From<Pascals> for Psi {
    fn from(pa: Pascals) -> Self {
        Psi(pa.0 / PA_PER_PSI)
    }
}

// ============================================================================
// Volume Units
// ============================================================================

/// Volume in cubic metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMeters(pub f64);

/// Volume in litres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Liters(pub f64);

impl From<CubicMeters> for Liters {
    fn from(m3: CubicMeters) -> Self {
        Liters(m3.0 * 1000.0)
    }
}

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Millimeters);
impl_arithmetic!(Pascals);
impl_arithmetic!(Megapascals);
impl_arithmetic!(Psi);
impl_arithmetic!(CubicMeters);
impl_arithmetic!(Liters);
impl_arithmetic!(Kilograms);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_to_millimeters() {
        let mm: Millimeters = Meters(0.5).into();
        assert_eq!(mm.0, 500.0);
    }

    #[test]
    fn test_psi_to_pascals() {
        let pa: Pascals = Psi(1000.0).into();
        assert!((pa.0 - 6_894_757.293).abs() < 0.01);

        let back: Psi = pa.into();
        assert!((back.0 - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_cubic_meters_to_liters() {
        let l: Liters = CubicMeters(0.25).into();
        assert_eq!(l.0, 250.0);
    }

    #[test]
    fn test_mass_arithmetic() {
        let casing = Kilograms(66.2);
        let grain = Kilograms(120.0);
        assert!(((casing + grain).value() - 186.2).abs() < 1e-9);
        assert_eq!((grain / 2.0).value(), 60.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Meters(2.0);
        let b = Meters(0.5);
        assert_eq!((a + b).0, 2.5);
        assert_eq!((a - b).0, 1.5);
        assert_eq!((a * 2.0).0, 4.0);
        assert_eq!((a / 2.0).0, 1.0);
    }

    #[test]
    fn test_serialization() {
        let p = Pascals(5.0e6);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "5000000.0");

        let roundtrip: Pascals = serde_json::from_str(&json).unwrap();
        assert_eq!(p, roundtrip);
    }
}
