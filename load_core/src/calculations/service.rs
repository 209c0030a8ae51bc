//! # Building Service Calculation
//!
//! Combines per-unit loads into a building service size: the multi-unit
//! diversity rule over the non-HVAC loads, the full-value HVAC sum, and the
//! service OCP / service-entrance conductor selection.
//!
//! ## Example
//!
//! ```rust
//! use load_core::calculations::unit_load::{calculate, UnitInput};
//! use load_core::calculations::service::summarize;
//! use load_core::conductors::ConductorMaterial;
//!
//! let unit = UnitInput {
//!     area_m2: 90.0,
//!     space_heating: 3000.0,
//!     range_watts: 8000.0,
//!     ..Default::default()
//! };
//! let results = vec![calculate(&unit, ConductorMaterial::Copper).unwrap().unwrap()];
//!
//! let service = summarize(&results, ConductorMaterial::Copper).unwrap();
//! assert_eq!(service.total_watts, 14_000.0);
//! assert_eq!(service.service_ocp, 100);
//! ```

use serde::{Deserialize, Serialize};

use crate::cec_rules::{diversity_factor, minimum_service_amps, SERVICE_VOLTAGE};
use crate::conductors::{select_ocp, ConductorMaterial, OcpSelection};
use crate::units::{SquareMetres, Watts};

use super::unit_load::UnitResult;

/// Combined non-HVAC building load under the multi-unit diversity rule.
///
/// The heaviest unit counts at 100% and each subsequent unit (ranked by
/// descending non-HVAC load) at its tier's percentage. HVAC is deliberately
/// untouched here: it is summed at full value per unit and added by the
/// caller, since heating load sees no diversity.
pub fn combined_load(units: &[UnitResult]) -> Watts {
    let mut loads: Vec<f64> = units.iter().map(|u| u.calculated_load_no_hvac).collect();
    loads.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));

    loads
        .into_iter()
        .enumerate()
        .map(|(rank, load)| Watts(load) * diversity_factor(rank))
        .sum()
}

/// Total HVAC load: the sum of each unit's HVAC portion at full value.
pub fn total_hvac_load(units: &[UnitResult]) -> Watts {
    units.iter().map(|u| Watts(u.hvac_delta())).sum()
}

/// Service OCP and conductor selection for a final combined load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSizing {
    /// Selected service OCP rating in amperes
    pub ocp: u32,

    /// Service-entrance conductor size and material
    pub conductor: String,

    /// The required amperage exceeds the largest standard OCP rating
    pub ocp_exceeds_table: bool,
}

/// Size the service OCP and service-entrance conductor.
///
/// The final combined load (HVAC already included) is converted to amps and
/// floored at the code minimum for the unit count before selecting the
/// smallest adequate standard rating. The conductor comes from the
/// service-entrance table, which is distinct from the panel-feeder table.
pub fn calculate(
    final_load: Watts,
    units: &[UnitResult],
    material: ConductorMaterial,
) -> ServiceSizing {
    let calculated = final_load.amps_at(SERVICE_VOLTAGE);
    let area = units.first().map(|u| u.area_m2).unwrap_or(0.0);
    let minimum = minimum_service_amps(units.len(), SquareMetres(area));

    let OcpSelection {
        rating,
        exceeds_table,
    } = select_ocp(calculated.max(minimum));

    ServiceSizing {
        ocp: rating.amps(),
        conductor: rating.service_conductor(material).to_string(),
        ocp_exceeds_table: exceeds_table,
    }
}

/// Building-level aggregate for one request.
///
/// Derived entirely from the unit results; recomputed every request.
///
/// ## JSON Example
///
/// ```json
/// {
///   "combined_no_hvac_watts": 11000.0,
///   "total_hvac_watts": 3000.0,
///   "total_watts": 14000.0,
///   "total_amps": 58.33,
///   "service_ocp": 100,
///   "service_conductor": "#4 AWG Copper",
///   "ocp_exceeds_table": false
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceResult {
    /// Diversified non-HVAC building load in watts
    pub combined_no_hvac_watts: f64,

    /// Sum of per-unit HVAC portions in watts, no diversity applied
    pub total_hvac_watts: f64,

    /// Final combined load in watts
    pub total_watts: f64,

    /// Final combined load converted to amps
    pub total_amps: f64,

    /// Selected service OCP rating in amperes
    pub service_ocp: u32,

    /// Service-entrance conductor size and material
    pub service_conductor: String,

    /// The service amperage exceeds the largest standard OCP rating
    pub ocp_exceeds_table: bool,
}

/// Combine unit results into the building service summary.
///
/// Returns `None` when the final combined load is not positive (which also
/// covers an empty unit list); callers report that as "no load calculated"
/// rather than as a zero-amp service.
pub fn summarize(units: &[UnitResult], material: ConductorMaterial) -> Option<ServiceResult> {
    let combined_no_hvac = combined_load(units);
    let total_hvac = total_hvac_load(units);
    let final_load = combined_no_hvac + total_hvac;

    if final_load.0 <= 0.0 {
        return None;
    }

    let sizing = calculate(final_load, units, material);

    Some(ServiceResult {
        combined_no_hvac_watts: combined_no_hvac.0,
        total_hvac_watts: total_hvac.0,
        total_watts: final_load.0,
        total_amps: final_load.amps_at(SERVICE_VOLTAGE).0,
        service_ocp: sizing.ocp,
        service_conductor: sizing.conductor,
        ocp_exceeds_table: sizing.ocp_exceeds_table,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(no_hvac: f64, hvac: f64, area_m2: f64) -> UnitResult {
        UnitResult {
            area_m2,
            calculated_load: no_hvac + hvac,
            calculated_load_no_hvac: no_hvac,
            unit_amps: (no_hvac + hvac) / 240.0,
            unit_ocp: 60,
            unit_conductor: "#6 AWG Copper".to_string(),
            ocp_exceeds_table: false,
        }
    }

    #[test]
    fn test_combined_load_single_unit() {
        let units = vec![unit(5000.0, 0.0, 90.0)];
        assert_eq!(combined_load(&units), Watts(5000.0));
    }

    #[test]
    fn test_combined_load_two_equal_units() {
        // Heaviest at 100%, second at 65%
        let units = vec![unit(5000.0, 0.0, 90.0), unit(5000.0, 0.0, 90.0)];
        assert_eq!(combined_load(&units), Watts(8250.0));
    }

    #[test]
    fn test_combined_load_ranks_by_descending_load() {
        // The heaviest unit must take the 100% slot regardless of order
        let units = vec![unit(4000.0, 0.0, 80.0), unit(10_000.0, 0.0, 120.0)];
        assert_eq!(combined_load(&units), Watts(10_000.0 + 0.65 * 4000.0));
    }

    #[test]
    fn test_combined_load_tier_walkthrough() {
        // Six equal units: 100% + 65% + 65% + 40% + 40% + 25%
        let units: Vec<UnitResult> = (0..6).map(|_| unit(10_000.0, 0.0, 90.0)).collect();
        let expected = 10_000.0 * (1.0 + 0.65 + 0.65 + 0.40 + 0.40 + 0.25);
        assert_eq!(combined_load(&units), Watts(expected));
    }

    #[test]
    fn test_combined_load_empty() {
        assert_eq!(combined_load(&[]), Watts(0.0));
    }

    #[test]
    fn test_hvac_summed_at_full_value() {
        let units = vec![unit(5000.0, 3000.0, 90.0), unit(5000.0, 4000.0, 90.0)];
        assert_eq!(total_hvac_load(&units), Watts(7000.0));

        // Diversity applies to the non-HVAC component only
        let summary = summarize(&units, ConductorMaterial::Copper).unwrap();
        assert_eq!(summary.combined_no_hvac_watts, 8250.0);
        assert_eq!(summary.total_hvac_watts, 7000.0);
        assert_eq!(summary.total_watts, 15_250.0);
    }

    #[test]
    fn test_minimum_service_floor() {
        // 58 A calculated, but a 90 m² single unit floors the service at 100 A
        let units = vec![unit(11_000.0, 3000.0, 90.0)];
        let sizing = calculate(Watts(14_000.0), &units, ConductorMaterial::Copper);
        assert_eq!(sizing.ocp, 100);
        assert_eq!(sizing.conductor, "#4 AWG Copper");

        // A small unit keeps the 60 A minimum
        let small = vec![unit(5000.0, 0.0, 45.0)];
        let sizing = calculate(Watts(5000.0), &small, ConductorMaterial::Copper);
        assert_eq!(sizing.ocp, 60);
        assert_eq!(sizing.conductor, "#6 AWG Copper");

        // Two units floor at 100 A even when tiny
        let two = vec![unit(2000.0, 0.0, 30.0), unit(2000.0, 0.0, 30.0)];
        let sizing = calculate(Watts(5300.0), &two, ConductorMaterial::Copper);
        assert_eq!(sizing.ocp, 100);
    }

    #[test]
    fn test_service_ocp_monotonic_in_load() {
        let units = vec![unit(5000.0, 0.0, 45.0)];
        let mut previous = 0;
        for watts in (1..=70).map(|k| k as f64 * 1000.0) {
            let sizing = calculate(Watts(watts), &units, ConductorMaterial::Copper);
            assert!(sizing.ocp >= previous, "OCP decreased at {watts} W");
            previous = sizing.ocp;
        }
    }

    #[test]
    fn test_service_clamp_flagged() {
        let units = vec![unit(5000.0, 0.0, 45.0)];
        let sizing = calculate(Watts(60_000.0), &units, ConductorMaterial::Aluminum);
        assert_eq!(sizing.ocp, 200);
        assert!(sizing.ocp_exceeds_table);
        assert_eq!(sizing.conductor, "#4/0 AWG Aluminum");
    }

    #[test]
    fn test_summarize_no_load() {
        assert!(summarize(&[], ConductorMaterial::Copper).is_none());
    }

    #[test]
    fn test_summarize_golden_single_unit() {
        let units = vec![unit(11_000.0, 3000.0, 90.0)];
        let summary = summarize(&units, ConductorMaterial::Copper).unwrap();
        assert_eq!(summary.combined_no_hvac_watts, 11_000.0);
        assert_eq!(summary.total_hvac_watts, 3000.0);
        assert_eq!(summary.total_watts, 14_000.0);
        assert!((summary.total_amps - 14_000.0 / 240.0).abs() < 1e-9);
        assert_eq!(summary.service_ocp, 100);
        assert_eq!(summary.service_conductor, "#4 AWG Copper");
    }
}
