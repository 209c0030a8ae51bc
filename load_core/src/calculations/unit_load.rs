//! # Dwelling Unit Load Calculation
//!
//! Derives a single dwelling unit's demand load, panel amperage, panel OCP
//! rating, and panel-feeder conductor from its raw load contributors.
//!
//! ## Assumptions
//!
//! - Single-phase 240 V service (fixed)
//! - Basic load from living area per Rule 8-200(1)(a)(i)-(ii)
//! - Heating/cooling interlock per Rule 8-106(4)
//! - EV charging counted in the non-HVAC base
//!
//! ## Example
//!
//! ```rust
//! use load_core::calculations::unit_load::{calculate, UnitInput};
//! use load_core::conductors::ConductorMaterial;
//!
//! let input = UnitInput {
//!     area_m2: 90.0,
//!     space_heating: 3000.0,
//!     range_watts: 8000.0,
//!     ..Default::default()
//! };
//!
//! let result = calculate(&input, ConductorMaterial::Copper).unwrap().unwrap();
//! assert_eq!(result.calculated_load_no_hvac, 11_000.0);
//! assert_eq!(result.calculated_load, 14_000.0);
//! assert_eq!(result.unit_ocp, 60);
//! ```

use serde::{Deserialize, Serialize};

use crate::cec_rules::{
    basic_load, ev_charging_demand, hvac_demand, range_demand, SERVICE_VOLTAGE,
};
use crate::conductors::{select_ocp, ConductorMaterial};
use crate::errors::{CalcError, CalcResult};
use crate::units::{SquareMetres, Watts};

/// Raw load contributors for one dwelling unit.
///
/// Every field defaults to zero (or false) when absent, so sparse request
/// payloads deserialize cleanly.
///
/// ## JSON Example
///
/// ```json
/// {
///   "area_m2": 120.0,
///   "space_heating": 6000.0,
///   "air_conditioning": 4000.0,
///   "heating_cooling_interlocked": true,
///   "range_watts": 12000.0,
///   "additional_load": 1500.0,
///   "tankless_watts": 9000.0,
///   "steamer_watts": 0.0,
///   "pool_hot_tub_watts": 0.0,
///   "ev_charging_watts": 7200.0
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitInput {
    /// Living area in square metres
    #[serde(default)]
    pub area_m2: f64,

    /// Space-heating rating in watts
    #[serde(default)]
    pub space_heating: f64,

    /// Air-conditioning rating in watts
    #[serde(default)]
    pub air_conditioning: f64,

    /// Heating and cooling are interlocked (cannot run simultaneously),
    /// so only the larger of the two is counted
    #[serde(default)]
    pub heating_cooling_interlocked: bool,

    /// Electric range rating in watts
    #[serde(default)]
    pub range_watts: f64,

    /// Additional/general loads in watts, counted at full value
    #[serde(default)]
    pub additional_load: f64,

    /// Tankless water heater rating in watts
    #[serde(default)]
    pub tankless_watts: f64,

    /// Steamer rating in watts
    #[serde(default)]
    pub steamer_watts: f64,

    /// Pool or hot tub rating in watts
    #[serde(default)]
    pub pool_hot_tub_watts: f64,

    /// EV supply equipment rating in watts
    #[serde(default)]
    pub ev_charging_watts: f64,
}

impl UnitInput {
    /// Validate input parameters.
    ///
    /// Absent fields default to zero upstream; present fields must not be
    /// negative.
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("area_m2", self.area_m2),
            ("space_heating", self.space_heating),
            ("air_conditioning", self.air_conditioning),
            ("range_watts", self.range_watts),
            ("additional_load", self.additional_load),
            ("tankless_watts", self.tankless_watts),
            ("steamer_watts", self.steamer_watts),
            ("pool_hot_tub_watts", self.pool_hot_tub_watts),
            ("ev_charging_watts", self.ev_charging_watts),
        ];
        for (field, value) in fields {
            if value < 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Value cannot be negative",
                ));
            }
        }
        Ok(())
    }

    /// True when the unit contributes no load at all.
    ///
    /// This is the zero-load exclusion rule: a record whose numeric fields
    /// are all zero does not represent a dwelling unit and is skipped rather
    /// than reported as a 0 W unit. The interlock flag is ignored here.
    pub fn has_no_load(&self) -> bool {
        self.area_m2 == 0.0
            && self.space_heating == 0.0
            && self.air_conditioning == 0.0
            && self.range_watts == 0.0
            && self.additional_load == 0.0
            && self.tankless_watts == 0.0
            && self.steamer_watts == 0.0
            && self.pool_hot_tub_watts == 0.0
            && self.ev_charging_watts == 0.0
    }

    /// HVAC contribution per Rule 8-106(4)
    pub fn hvac_watts(&self) -> Watts {
        hvac_demand(
            Watts(self.space_heating),
            Watts(self.air_conditioning),
            self.heating_cooling_interlocked,
        )
    }
}

/// Calculated loads and panel sizing for one dwelling unit.
///
/// Created fresh per request and immutable once returned.
///
/// ## JSON Example
///
/// ```json
/// {
///   "area_m2": 90.0,
///   "calculated_load": 14000.0,
///   "calculated_load_no_hvac": 11000.0,
///   "unit_amps": 58.33,
///   "unit_ocp": 60,
///   "unit_conductor": "#6 AWG Copper",
///   "ocp_exceeds_table": false
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitResult {
    /// Living area in square metres (echoed from the input)
    pub area_m2: f64,

    /// Total demand load in watts, HVAC included
    pub calculated_load: f64,

    /// Demand load in watts excluding the HVAC contribution
    pub calculated_load_no_hvac: f64,

    /// Panel amperage: calculated_load / 240
    pub unit_amps: f64,

    /// Selected panel OCP rating in amperes
    pub unit_ocp: u32,

    /// Panel-feeder conductor size and material
    pub unit_conductor: String,

    /// The unit amperage exceeds the largest standard OCP rating; the
    /// reported rating is the clamped table maximum
    pub ocp_exceeds_table: bool,
}

impl UnitResult {
    /// HVAC portion of the unit load (always non-negative)
    pub fn hvac_delta(&self) -> f64 {
        self.calculated_load - self.calculated_load_no_hvac
    }
}

/// Calculate one dwelling unit's demand load and panel sizing.
///
/// Returns `Ok(None)` for a unit with no meaningful load (see
/// [`UnitInput::has_no_load`]); such records are excluded from the building
/// combination entirely.
///
/// # Arguments
///
/// * `input` - Raw load contributors for the unit
/// * `material` - Conductor material for the panel feeder lookup
///
/// # Returns
///
/// * `Ok(Some(UnitResult))` - Calculated loads and panel sizing
/// * `Ok(None)` - The unit has no load to calculate
/// * `Err(CalcError)` - If inputs are invalid
pub fn calculate(
    input: &UnitInput,
    material: ConductorMaterial,
) -> CalcResult<Option<UnitResult>> {
    input.validate()?;

    if input.has_no_load() {
        return Ok(None);
    }

    // Non-HVAC base: basic load plus appliance demands, Rule 8-200(1)(a)
    let mut no_hvac = basic_load(SquareMetres(input.area_m2));
    no_hvac += range_demand(Watts(input.range_watts));
    no_hvac += Watts(input.tankless_watts);
    no_hvac += Watts(input.steamer_watts);
    no_hvac += Watts(input.pool_hot_tub_watts);
    no_hvac += Watts(input.additional_load);
    no_hvac += ev_charging_demand(Watts(input.ev_charging_watts));

    let total = no_hvac + input.hvac_watts();
    let amps = total.amps_at(SERVICE_VOLTAGE);
    let selection = select_ocp(amps);

    Ok(Some(UnitResult {
        area_m2: input.area_m2,
        calculated_load: total.0,
        calculated_load_no_hvac: no_hvac.0,
        unit_amps: amps.0,
        unit_ocp: selection.rating.amps(),
        unit_conductor: selection.rating.feeder_conductor(material).to_string(),
        ocp_exceeds_table: selection.exceeds_table,
    }))
}
