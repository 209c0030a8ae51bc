//! # Conductor Sizing Tables
//!
//! Standard overcurrent-protection ratings and conductor size lookups by
//! material, per the CEC ampacity tables.
//!
//! ## Two Distinct Tables
//!
//! Panel feeders and service-entrance conductors are sized from different
//! tables and must never be conflated:
//!
//! - **Feeder table** - unit panel feeders, from the 75 °C ampacity columns
//!   of Tables 2 (copper) and 4 (aluminum)
//! - **Service table** - service-entrance conductors, from the reduced
//!   residential-service sizing of Table 39
//!
//! ## Example
//!
//! ```rust
//! use load_core::conductors::{select_ocp, ConductorMaterial};
//! use load_core::units::Amps;
//!
//! let selection = select_ocp(Amps(58.3));
//! assert_eq!(selection.rating.amps(), 60);
//! assert!(!selection.exceeds_table);
//!
//! let desc = selection.rating.feeder_conductor(ConductorMaterial::Copper);
//! assert_eq!(desc, "#6 AWG Copper");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;
use crate::units::Amps;

/// Conductor material selection
///
/// Chosen once per request and applied uniformly to every unit feeder and
/// to the service-entrance conductor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ConductorMaterial {
    /// Copper conductors
    #[default]
    Copper,
    /// Aluminum conductors
    Aluminum,
}

impl ConductorMaterial {
    /// All materials for UI selection
    pub const ALL: [ConductorMaterial; 2] = [ConductorMaterial::Copper, ConductorMaterial::Aluminum];

    /// Display name (matches the wire-level `conductor_type` strings)
    pub fn display_name(&self) -> &'static str {
        match self {
            ConductorMaterial::Copper => "Copper",
            ConductorMaterial::Aluminum => "Aluminum",
        }
    }
}

impl fmt::Display for ConductorMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ConductorMaterial {
    type Err = CalcError;

    /// Parse a wire-level material string, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "copper" | "cu" => Ok(ConductorMaterial::Copper),
            "aluminum" | "aluminium" | "al" => Ok(ConductorMaterial::Aluminum),
            _ => Err(CalcError::unknown_conductor(s)),
        }
    }
}

/// Standard overcurrent-protection device rating
///
/// The ascending set of standard breaker sizes this calculator selects from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OcpRating {
    /// 60 A
    A60,
    /// 100 A
    A100,
    /// 125 A
    A125,
    /// 150 A
    A150,
    /// 200 A
    A200,
}

impl OcpRating {
    /// All standard ratings, ascending
    pub const ALL: [OcpRating; 5] = [
        OcpRating::A60,
        OcpRating::A100,
        OcpRating::A125,
        OcpRating::A150,
        OcpRating::A200,
    ];

    /// Rating in amperes
    pub fn amps(&self) -> u32 {
        match self {
            OcpRating::A60 => 60,
            OcpRating::A100 => 100,
            OcpRating::A125 => 125,
            OcpRating::A150 => 150,
            OcpRating::A200 => 200,
        }
    }

    /// Panel-feeder conductor for this rating (75 °C columns, Tables 2 and 4)
    pub fn feeder_conductor(&self, material: ConductorMaterial) -> &'static str {
        match (material, self) {
            (ConductorMaterial::Copper, OcpRating::A60) => "#6 AWG Copper",
            (ConductorMaterial::Copper, OcpRating::A100) => "#3 AWG Copper",
            (ConductorMaterial::Copper, OcpRating::A125) => "#1 AWG Copper",
            (ConductorMaterial::Copper, OcpRating::A150) => "#1/0 AWG Copper",
            (ConductorMaterial::Copper, OcpRating::A200) => "#3/0 AWG Copper",
            (ConductorMaterial::Aluminum, OcpRating::A60) => "#4 AWG Aluminum",
            (ConductorMaterial::Aluminum, OcpRating::A100) => "#1 AWG Aluminum",
            (ConductorMaterial::Aluminum, OcpRating::A125) => "#2/0 AWG Aluminum",
            (ConductorMaterial::Aluminum, OcpRating::A150) => "#3/0 AWG Aluminum",
            (ConductorMaterial::Aluminum, OcpRating::A200) => "250 kcmil Aluminum",
        }
    }

    /// Service-entrance conductor for this rating (Table 39 residential sizing)
    pub fn service_conductor(&self, material: ConductorMaterial) -> &'static str {
        match (material, self) {
            (ConductorMaterial::Copper, OcpRating::A60) => "#6 AWG Copper",
            (ConductorMaterial::Copper, OcpRating::A100) => "#4 AWG Copper",
            (ConductorMaterial::Copper, OcpRating::A125) => "#2 AWG Copper",
            (ConductorMaterial::Copper, OcpRating::A150) => "#1 AWG Copper",
            (ConductorMaterial::Copper, OcpRating::A200) => "#2/0 AWG Copper",
            (ConductorMaterial::Aluminum, OcpRating::A60) => "#4 AWG Aluminum",
            (ConductorMaterial::Aluminum, OcpRating::A100) => "#2 AWG Aluminum",
            (ConductorMaterial::Aluminum, OcpRating::A125) => "#1/0 AWG Aluminum",
            (ConductorMaterial::Aluminum, OcpRating::A150) => "#2/0 AWG Aluminum",
            (ConductorMaterial::Aluminum, OcpRating::A200) => "#4/0 AWG Aluminum",
        }
    }
}

impl fmt::Display for OcpRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} A", self.amps())
    }
}

/// Outcome of selecting an OCP rating for a calculated amperage.
///
/// When the amperage exceeds the largest standard rating the selection is
/// clamped to that rating and `exceeds_table` is set; callers must surface
/// the condition rather than report the clamped rating as adequate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcpSelection {
    /// Selected standard rating
    pub rating: OcpRating,
    /// The calculated amperage exceeds every standard rating
    pub exceeds_table: bool,
}

/// Select the smallest standard OCP rating covering the given amperage.
pub fn select_ocp(amps: Amps) -> OcpSelection {
    for rating in OcpRating::ALL {
        if f64::from(rating.amps()) >= amps.0 {
            return OcpSelection {
                rating,
                exceeds_table: false,
            };
        }
    }
    OcpSelection {
        rating: OcpRating::A200,
        exceeds_table: true,
    }
}
