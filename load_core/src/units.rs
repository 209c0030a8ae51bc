//! # Unit Types
//!
//! Type-safe wrappers for electrical units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64
//! wrappers with transparent JSON serialization).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Service calculations use a tiny, fixed set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Example
//!
//! ```rust
//! use load_core::units::{Watts, Amps};
//!
//! let load = Watts(14_400.0);
//! let amps: Amps = load.amps_at(240.0);
//! assert_eq!(amps.0, 60.0);
//! ```

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

/// Electrical load in watts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watts(pub f64);

/// Current in amperes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amps(pub f64);

/// Floor area in square metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMetres(pub f64);

impl Watts {
    /// Convert to amperes at the given system voltage
    pub fn amps_at(self, voltage: f64) -> Amps {
        Amps(self.0 / voltage)
    }

    /// The larger of two loads
    pub fn max(self, other: Watts) -> Watts {
        Watts(self.0.max(other.0))
    }
}

impl Add for Watts {
    type Output = Watts;

    fn add(self, rhs: Watts) -> Watts {
        Watts(self.0 + rhs.0)
    }
}

impl AddAssign for Watts {
    fn add_assign(&mut self, rhs: Watts) {
        self.0 += rhs.0;
    }
}

/// Scaling by a demand or diversity factor
impl Mul<f64> for Watts {
    type Output = Watts;

    fn mul(self, factor: f64) -> Watts {
        Watts(self.0 * factor)
    }
}

impl Sum for Watts {
    fn sum<I: Iterator<Item = Watts>>(iter: I) -> Watts {
        iter.fold(Watts(0.0), Add::add)
    }
}

impl Amps {
    /// The larger of two currents
    pub fn max(self, other: Amps) -> Amps {
        Amps(self.0.max(other.0))
    }
}
