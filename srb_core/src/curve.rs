//! # Float Curves
//!
//! Keyed piecewise curves used by catalog entries, e.g. the nozzle
//! atmosphere curve mapping ambient pressure to a normalized thrust
//! coefficient.
//!
//! Between two keys the curve is a cubic Hermite segment built from the left
//! key's out-tangent and the right key's in-tangent. Outside the key range
//! the value is held at the first/last key. An empty curve evaluates to 0.
//!
//! ## Config Encoding
//!
//! A curve is written as an array of rows, `[time, value]` or
//! `[time, value, in_tangent, out_tangent]`:
//!
//! ```toml
//! atmosphereCurve = [[0.0, 1.0], [1.0, 0.8, -0.2, -0.2]]
//! ```
//!
//! ## Example
//!
//! ```rust
//! use srb_core::curve::FloatCurve;
//!
//! let mut curve = FloatCurve::new();
//! curve.add(0.0, 1.0);
//! curve.add(1.0, 0.8);
//!
//! assert_eq!(curve.evaluate(0.0), 1.0);
//! assert_eq!(curve.evaluate(5.0), 0.8);
//! assert!((curve.evaluate(0.5) - 0.9).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

/// A single curve key.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CurveKey {
    /// Abscissa (ambient pressure in atm for atmosphere curves)
    pub time: f64,
    /// Curve value at `time`
    pub value: f64,
    /// Slope entering this key
    pub in_tangent: f64,
    /// Slope leaving this key
    pub out_tangent: f64,
}

impl CurveKey {
    /// Key with flat tangents
    pub fn new(time: f64, value: f64) -> Self {
        CurveKey {
            time,
            value,
            in_tangent: 0.0,
            out_tangent: 0.0,
        }
    }

    fn has_tangents(&self) -> bool {
        self.in_tangent != 0.0 || self.out_tangent != 0.0
    }
}

/// Piecewise cubic Hermite curve, keys sorted by `time`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct FloatCurve {
    keys: Vec<CurveKey>,
}

impl FloatCurve {
    /// Create an empty curve
    pub fn new() -> Self {
        FloatCurve { keys: Vec::new() }
    }

    /// Create a curve from keys in any order
    pub fn from_keys(keys: impl IntoIterator<Item = CurveKey>) -> Self {
        let mut curve = FloatCurve::new();
        for key in keys {
            curve.insert(key);
        }
        curve
    }

    /// Add a key with flat tangents
    pub fn add(&mut self, time: f64, value: f64) {
        self.insert(CurveKey::new(time, value));
    }

    /// Add a key with explicit tangents
    pub fn add_with_tangents(&mut self, time: f64, value: f64, in_tangent: f64, out_tangent: f64) {
        self.insert(CurveKey {
            time,
            value,
            in_tangent,
            out_tangent,
        });
    }

    /// Insert a key, keeping the key list sorted. Keys at an equal time are
    /// kept in insertion order.
    pub fn insert(&mut self, key: CurveKey) {
        let idx = self.keys.partition_point(|k| k.time <= key.time);
        self.keys.insert(idx, key);
    }

    /// Keys in ascending time order
    pub fn keys(&self) -> &[CurveKey] {
        &self.keys
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True when the curve has no keys
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Time range covered by the keys
    pub fn time_range(&self) -> Option<(f64, f64)> {
        match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => Some((first.time, last.time)),
            _ => None,
        }
    }

    /// Evaluate the curve at `time`.
    pub fn evaluate(&self, time: f64) -> f64 {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return 0.0,
        };

        let idx = self.keys.partition_point(|k| k.time <= time);
        if idx == 0 {
            return first.value;
        }
        if idx == self.keys.len() {
            return last.value;
        }

        hermite(&self.keys[idx - 1], &self.keys[idx], time)
    }
}

/// Cubic Hermite segment between `k0` and `k1`; requires `k0.time < k1.time`.
fn hermite(k0: &CurveKey, k1: &CurveKey, time: f64) -> f64 {
    let dt = k1.time - k0.time;
    let s = (time - k0.time) / dt;
    let s2 = s * s;
    let s3 = s2 * s;

    let h00 = 2.0 * s3 - 3.0 * s2 + 1.0;
    let h10 = s3 - 2.0 * s2 + s;
    let h01 = -2.0 * s3 + 3.0 * s2;
    let h11 = s3 - s2;

    h00 * k0.value + h10 * dt * k0.out_tangent + h01 * k1.value + h11 * dt * k1.in_tangent
}

impl TryFrom<Vec<Vec<f64>>> for FloatCurve {
    type Error = String;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        let mut curve = FloatCurve::new();
        for (i, row) in rows.into_iter().enumerate() {
            let key = match row.as_slice() {
                [time, value] => CurveKey::new(*time, *value),
                [time, value, in_tangent, out_tangent] => CurveKey {
                    time: *time,
                    value: *value,
                    in_tangent: *in_tangent,
                    out_tangent: *out_tangent,
                },
                other => {
                    return Err(format!(
                        "curve key {} has {} values, expected 2 or 4",
                        i,
                        other.len()
                    ))
                }
            };
            curve.insert(key);
        }
        Ok(curve)
    }
}

impl From<FloatCurve> for Vec<Vec<f64>> {
    fn from(curve: FloatCurve) -> Self {
        curve
            .keys
            .iter()
            .map(|k| {
                if k.has_tangents() {
                    vec![k.time, k.value, k.in_tangent, k.out_tangent]
                } else {
                    vec![k.time, k.value]
                }
            })
            .collect()
    }
}
