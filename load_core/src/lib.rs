//! # load_core - Residential Service Load Calculation Engine
//!
//! `load_core` computes electrical service load sizing for residential
//! buildings per the Canadian Electrical Code's Section 8 demand-factor
//! rules: per-unit calculated loads, the multi-unit diversity combination,
//! and OCP/conductor selection from the code's sizing tables.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Static Tables**: All code tables are read-only compile-time data
//!
//! ## Quick Start
//!
//! ```rust
//! use load_core::calculations::unit_load::{calculate, UnitInput};
//! use load_core::calculations::service::summarize;
//! use load_core::conductors::ConductorMaterial;
//!
//! let unit = UnitInput {
//!     area_m2: 120.0,
//!     space_heating: 6000.0,
//!     range_watts: 12_000.0,
//!     ..Default::default()
//! };
//!
//! let material = ConductorMaterial::Copper;
//! let results: Vec<_> = [unit]
//!     .iter()
//!     .filter_map(|u| calculate(u, material).transpose())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! let service = summarize(&results, material).unwrap();
//! println!("Service: {} A, {}", service.service_ocp, service.service_conductor);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Unit and building-level calculation pipeline
//! - [`cec_rules`] - Demand factors, diversity tiers, minimum service rules
//! - [`conductors`] - OCP ratings and conductor sizing tables
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod cec_rules;
pub mod conductors;
pub mod errors;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{ServiceResult, UnitInput, UnitResult};
pub use conductors::ConductorMaterial;
pub use errors::{CalcError, CalcResult};
