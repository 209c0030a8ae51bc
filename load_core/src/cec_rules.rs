//! # CEC Demand Factors
//!
//! Demand-factor rules for dwelling-unit service calculations per the
//! Canadian Electrical Code, Section 8.
//!
//! ## Overview
//!
//! Connected loads are reduced by code-defined demand factors to estimate
//! realistic peak load:
//!
//! ```text
//! unit load = basic(area) + range + appliances + additional + EV + HVAC
//! building  = 100% of heaviest unit (no HVAC) + tiered % of the rest + ΣHVAC
//! ```
//!
//! ## Factor Summary
//!
//! | Item          | Demand treatment                              |
//! |---------------|-----------------------------------------------|
//! | Basic load    | 5000 W first 90 m², +1000 W per further 90 m² |
//! | Range         | 6000 W + 40% of rating above 12 kW            |
//! | Water heater  | 100% of rating                                |
//! | Steamer       | 100% of rating                                |
//! | Pool/hot tub  | 100% of rating                                |
//! | EV charging   | 100% of rating                                |
//! | HVAC          | larger of heat/cool when interlocked          |
//! | Multi-unit    | 100% / 65% / 40% / 25% / 10% by rank          |
//!
//! ## Reference
//!
//! CEC 2021, Section 8: Circuit loading and demand factors

use crate::units::{Amps, SquareMetres, Watts};

// ============================================================================
// CEC Code Section References
// ============================================================================

/// CEC code section references for the demand-factor rules applied here.
///
/// These constants provide traceable references to the Canadian Electrical
/// Code (CEC 2021).
pub mod cec_ref {
    /// Basic load from living area
    pub const BASIC_LOAD: &str = "Rule 8-200(1)(a)(i)-(ii)";
    /// Electric range demand
    pub const RANGE: &str = "Rule 8-200(1)(a)(iv)";
    /// Water heaters, pools, hot tubs at full rating
    pub const FIXED_APPLIANCES: &str = "Rule 8-200(1)(a)(v)";
    /// Electric vehicle supply equipment
    pub const EV_CHARGING: &str = "Rule 8-200(1)(a)(vi)";
    /// Interlocked heating/cooling takes the larger load
    pub const HVAC_INTERLOCK: &str = "Rule 8-106(4)";
    /// Multi-unit diversity percentages
    pub const DIVERSITY: &str = "Rule 8-202(3)(a)";
    /// Minimum ampacity of a dwelling service
    pub const MINIMUM_SERVICE: &str = "Rule 8-200(1)(b)";
}

/// Single-phase dwelling service voltage (V)
pub const SERVICE_VOLTAGE: f64 = 240.0;

// ============================================================================
// Basic Load (living area)
// ============================================================================

/// Basic load for the first area tier (W)
pub const BASIC_LOAD_FIRST_TIER: Watts = Watts(5000.0);

/// Additional basic load per area tier beyond the first (W)
pub const BASIC_LOAD_PER_EXTRA_TIER: Watts = Watts(1000.0);

/// Living-area tier size (m²)
pub const BASIC_AREA_TIER_M2: f64 = 90.0;

/// Basic load from living area per Rule 8-200(1)(a)(i)-(ii).
///
/// 5000 W for the first 90 m², plus 1000 W for each 90 m² or portion
/// thereof in excess. A unit with no living area contributes no basic load.
pub fn basic_load(area: SquareMetres) -> Watts {
    if area.0 <= 0.0 {
        return Watts(0.0);
    }
    if area.0 <= BASIC_AREA_TIER_M2 {
        return BASIC_LOAD_FIRST_TIER;
    }
    let extra_tiers = ((area.0 - BASIC_AREA_TIER_M2) / BASIC_AREA_TIER_M2).ceil();
    BASIC_LOAD_FIRST_TIER + BASIC_LOAD_PER_EXTRA_TIER * extra_tiers
}

// ============================================================================
// Electric Range
// ============================================================================

/// Demand for a single range rated 12 kW or less (W)
pub const RANGE_BASE_DEMAND: Watts = Watts(6000.0);

/// Range rating above which the excess is counted at 40% (W)
pub const RANGE_FULL_RATING_W: f64 = 12_000.0;

/// Demand factor on the portion of a range rating above 12 kW
pub const RANGE_EXCESS_FACTOR: f64 = 0.40;

/// Electric range demand per Rule 8-200(1)(a)(iv).
///
/// 6000 W for a range rated up to 12 kW, plus 40% of any rating in excess.
/// A unit without a range (zero rating) contributes nothing.
pub fn range_demand(rating: Watts) -> Watts {
    if rating.0 <= 0.0 {
        return Watts(0.0);
    }
    if rating.0 <= RANGE_FULL_RATING_W {
        return RANGE_BASE_DEMAND;
    }
    RANGE_BASE_DEMAND + Watts(rating.0 - RANGE_FULL_RATING_W) * RANGE_EXCESS_FACTOR
}

// ============================================================================
// EV Charging
// ============================================================================

/// EV supply equipment demand per Rule 8-200(1)(a)(vi).
///
/// Counted at 100% of rating. Kept as a separate rule item: EV charging is
/// added to the non-HVAC base and never participates in the HVAC treatment.
pub fn ev_charging_demand(rating: Watts) -> Watts {
    rating
}

// ============================================================================
// Space Heating / Air Conditioning
// ============================================================================

/// Heating and cooling demand per Rule 8-106(4).
///
/// When the two systems are interlocked they cannot run simultaneously, so
/// only the larger load is counted. Otherwise both are counted in full.
pub fn hvac_demand(space_heating: Watts, air_conditioning: Watts, interlocked: bool) -> Watts {
    if interlocked {
        space_heating.max(air_conditioning)
    } else {
        space_heating + air_conditioning
    }
}

// ============================================================================
// Multi-Unit Diversity
// ============================================================================

/// Diversity factor by unit rank per Rule 8-202(3)(a).
///
/// Units are ranked by descending calculated load (no HVAC); rank 0 is the
/// heaviest unit. Not all units peak simultaneously, so the contribution of
/// each subsequent unit declines:
///
/// | Rank            | Factor |
/// |-----------------|--------|
/// | 1st (heaviest)  | 1.00   |
/// | 2nd - 3rd       | 0.65   |
/// | 4th - 5th       | 0.40   |
/// | 6th - 20th      | 0.25   |
/// | 21st onward     | 0.10   |
pub fn diversity_factor(rank: usize) -> f64 {
    match rank {
        0 => 1.00,
        1..=2 => 0.65,
        3..=4 => 0.40,
        5..=19 => 0.25,
        _ => 0.10,
    }
}

// ============================================================================
// Minimum Service Ampacity
// ============================================================================

/// Minimum service for a single dwelling unit of 80 m² or more (A)
pub const MIN_SERVICE_LARGE: Amps = Amps(100.0);

/// Minimum service for a single dwelling unit under 80 m² (A)
pub const MIN_SERVICE_SMALL: Amps = Amps(60.0);

/// Living-area threshold for the larger single-unit minimum (m²)
pub const MIN_SERVICE_AREA_THRESHOLD_M2: f64 = 80.0;

/// Minimum service ampacity per Rule 8-200(1)(b).
///
/// A single dwelling unit requires at least 100 A when its living area is
/// 80 m² or more, 60 A otherwise. A service supplying two or more units
/// requires at least 100 A regardless of the calculated load; `area` is
/// ignored in that case.
pub fn minimum_service_amps(unit_count: usize, area: SquareMetres) -> Amps {
    if unit_count >= 2 {
        return MIN_SERVICE_LARGE;
    }
    if area.0 >= MIN_SERVICE_AREA_THRESHOLD_M2 {
        MIN_SERVICE_LARGE
    } else {
        MIN_SERVICE_SMALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_load_tiers() {
        assert_eq!(basic_load(SquareMetres(0.0)), Watts(0.0));
        assert_eq!(basic_load(SquareMetres(45.0)), Watts(5000.0));
        assert_eq!(basic_load(SquareMetres(90.0)), Watts(5000.0));
        // Any portion of a further 90 m² counts as a full tier
        assert_eq!(basic_load(SquareMetres(91.0)), Watts(6000.0));
        assert_eq!(basic_load(SquareMetres(180.0)), Watts(6000.0));
        assert_eq!(basic_load(SquareMetres(181.0)), Watts(7000.0));
        assert_eq!(basic_load(SquareMetres(450.0)), Watts(9000.0));
    }

    #[test]
    fn test_range_demand() {
        assert_eq!(range_demand(Watts(0.0)), Watts(0.0));
        assert_eq!(range_demand(Watts(8000.0)), Watts(6000.0));
        assert_eq!(range_demand(Watts(12_000.0)), Watts(6000.0));
        // 6000 + 40% of the 2 kW excess
        assert_eq!(range_demand(Watts(14_000.0)), Watts(6800.0));
    }

    #[test]
    fn test_hvac_interlock() {
        assert_eq!(hvac_demand(Watts(3000.0), Watts(4000.0), true), Watts(4000.0));
        assert_eq!(hvac_demand(Watts(3000.0), Watts(4000.0), false), Watts(7000.0));
        assert_eq!(hvac_demand(Watts(5000.0), Watts(0.0), true), Watts(5000.0));
    }

    #[test]
    fn test_diversity_tiers() {
        assert_eq!(diversity_factor(0), 1.00);
        assert_eq!(diversity_factor(1), 0.65);
        assert_eq!(diversity_factor(2), 0.65);
        assert_eq!(diversity_factor(3), 0.40);
        assert_eq!(diversity_factor(4), 0.40);
        assert_eq!(diversity_factor(5), 0.25);
        assert_eq!(diversity_factor(19), 0.25);
        assert_eq!(diversity_factor(20), 0.10);
        assert_eq!(diversity_factor(100), 0.10);
    }

    #[test]
    fn test_minimum_service() {
        assert_eq!(minimum_service_amps(1, SquareMetres(90.0)), Amps(100.0));
        assert_eq!(minimum_service_amps(1, SquareMetres(80.0)), Amps(100.0));
        assert_eq!(minimum_service_amps(1, SquareMetres(79.0)), Amps(60.0));
        // Multi-unit services ignore area
        assert_eq!(minimum_service_amps(2, SquareMetres(0.0)), Amps(100.0));
        assert_eq!(minimum_service_amps(12, SquareMetres(40.0)), Amps(100.0));
    }
}
