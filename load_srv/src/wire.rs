//! # Wire Shapes and Input Adapters
//!
//! The request boundary accepts two historical body shapes and normalizes
//! both into the engine's [`UnitInput`] records, isolating `load_core` from
//! the wire format entirely:
//!
//! - **Direct list**: `{"units": [{...}, ...], "conductor_type": "Copper"}`
//! - **Flat indexed fallback**: `num_units` records synthesized from 1-based
//!   keys (`unit_1_area_m2`, `unit_1_range_watts`, ...), kept for backward
//!   compatibility with older frontends
//!
//! The response field labels in [`CalculateReport`] are a frozen wire
//! contract consumed by existing clients; do not rename them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use load_core::calculations::service::{self, ServiceResult};
use load_core::calculations::unit_load;
use load_core::{CalcError, CalcResult, ConductorMaterial, UnitInput, UnitResult};

/// Informational response when no record resolves to a load
pub const MSG_NO_VALID_UNITS: &str = "No valid units provided. No load calculated.";

/// Informational response when the combined load is not positive
pub const MSG_NO_LOAD: &str = "No load calculated.";

/// One unit's row in the success response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitEntry {
    pub unit_index: usize,
    pub area_m2: f64,
    pub total_unit_load_watts: f64,
    pub unit_amps: f64,
    pub unit_panel_ocp_size: u32,
    pub unit_panel_conductor: String,
}

/// Success response for a calculation request.
///
/// The renamed labels are the legacy wire contract, preserved bit-for-bit.
/// `warnings` is additive: present only when an OCP selection was clamped at
/// the table maximum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateReport {
    pub units: Vec<UnitEntry>,

    #[serde(rename = "Combined No-HVAC Load (Watts)")]
    pub combined_no_hvac_watts: f64,

    #[serde(rename = "Total HVAC Load (Watts)")]
    pub total_hvac_watts: f64,

    #[serde(rename = "Total Calculated Load (Watts)")]
    pub total_watts: f64,

    #[serde(rename = "Total Amps")]
    pub total_amps: f64,

    #[serde(rename = "Service OCP size (Amps)")]
    pub service_ocp: u32,

    #[serde(rename = "Service Conductor Type and Size")]
    pub service_conductor: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Outcome of processing one calculation request.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// At least one unit resolved to a load
    Report(Box<CalculateReport>),
    /// No record resolved to a load
    NoValidUnits,
    /// Units resolved but the combined load is not positive
    NoLoad,
}

/// Process one request body into a calculation outcome.
pub fn process(body: &Value) -> CalcResult<Outcome> {
    let material = parse_conductor(body)?;
    let inputs = parse_units(body)?;

    let mut results: Vec<UnitResult> = Vec::with_capacity(inputs.len());
    for input in &inputs {
        if let Some(result) = unit_load::calculate(input, material)? {
            results.push(result);
        }
    }

    if results.is_empty() {
        return Ok(Outcome::NoValidUnits);
    }

    match service::summarize(&results, material) {
        Some(summary) => Ok(Outcome::Report(Box::new(build_report(&results, summary)))),
        None => Ok(Outcome::NoLoad),
    }
}

/// Parse the request's conductor material (default Copper).
pub fn parse_conductor(body: &Value) -> CalcResult<ConductorMaterial> {
    match body.get("conductor_type") {
        None | Some(Value::Null) => Ok(ConductorMaterial::default()),
        Some(Value::String(s)) => s.parse(),
        Some(other) => Err(CalcError::invalid_input(
            "conductor_type",
            other.to_string(),
            "Expected a string",
        )),
    }
}

/// Normalize the request body into unit records via whichever adapter the
/// body shape selects.
pub fn parse_units(body: &Value) -> CalcResult<Vec<UnitInput>> {
    if let Some(units) = body.get("units").and_then(Value::as_array) {
        return units
            .iter()
            .map(|unit| {
                serde_json::from_value(unit.clone()).map_err(|e| {
                    CalcError::invalid_input("units", unit.to_string(), e.to_string())
                })
            })
            .collect();
    }

    let num_units = match body.get("num_units") {
        None | Some(Value::Null) => 1,
        Some(v) => v.as_u64().ok_or_else(|| {
            CalcError::invalid_input("num_units", v.to_string(), "Expected a non-negative integer")
        })? as usize,
    };

    (1..=num_units).map(|i| unit_from_flat(body, i)).collect()
}

/// Build one unit record from the legacy flat indexed keys.
fn unit_from_flat(body: &Value, index: usize) -> CalcResult<UnitInput> {
    Ok(UnitInput {
        area_m2: flat_f64(body, &format!("unit_{index}_area_m2"))?,
        space_heating: flat_f64(body, &format!("unit_{index}_space_heating"))?,
        air_conditioning: flat_f64(body, &format!("unit_{index}_air_conditioning"))?,
        heating_cooling_interlocked: flat_bool(
            body,
            &format!("unit_{index}_heating_cooling_interlocked"),
        )?,
        range_watts: flat_f64(body, &format!("unit_{index}_range_watts"))?,
        // Legacy key is plural even though the engine field is singular
        additional_load: flat_f64(body, &format!("unit_{index}_additional_loads"))?,
        tankless_watts: flat_f64(body, &format!("unit_{index}_tankless_watts"))?,
        steamer_watts: flat_f64(body, &format!("unit_{index}_steamer_watts"))?,
        pool_hot_tub_watts: flat_f64(body, &format!("unit_{index}_pool_hot_tub_watts"))?,
        ev_charging_watts: flat_f64(body, &format!("unit_{index}_ev_charging_watts"))?,
    })
}

/// Read an optional numeric key; absent means zero, non-numeric is an error.
fn flat_f64(body: &Value, key: &str) -> CalcResult<f64> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(0.0),
        Some(v) => v
            .as_f64()
            .ok_or_else(|| CalcError::invalid_input(key, v.to_string(), "Expected a number")),
    }
}

/// Read an optional boolean key; absent means false.
fn flat_bool(body: &Value, key: &str) -> CalcResult<bool> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(false),
        Some(v) => v
            .as_bool()
            .ok_or_else(|| CalcError::invalid_input(key, v.to_string(), "Expected a boolean")),
    }
}

fn build_report(units: &[UnitResult], summary: ServiceResult) -> CalculateReport {
    let mut warnings = Vec::new();

    let entries = units
        .iter()
        .enumerate()
        .map(|(i, unit)| {
            let unit_index = i + 1;
            if unit.ocp_exceeds_table {
                warnings.push(format!(
                    "Unit {}: calculated amperage {:.1} A exceeds the largest standard OCP rating; {} A reported",
                    unit_index, unit.unit_amps, unit.unit_ocp
                ));
            }
            UnitEntry {
                unit_index,
                area_m2: unit.area_m2,
                total_unit_load_watts: unit.calculated_load,
                unit_amps: unit.unit_amps,
                unit_panel_ocp_size: unit.unit_ocp,
                unit_panel_conductor: unit.unit_conductor.clone(),
            }
        })
        .collect();

    if summary.ocp_exceeds_table {
        warnings.push(format!(
            "Service: calculated amperage {:.1} A exceeds the largest standard OCP rating; {} A reported",
            summary.total_amps, summary.service_ocp
        ));
    }

    CalculateReport {
        units: entries,
        combined_no_hvac_watts: summary.combined_no_hvac_watts,
        total_hvac_watts: summary.total_hvac_watts,
        total_watts: summary.total_watts,
        total_amps: summary.total_amps,
        service_ocp: summary.service_ocp,
        service_conductor: summary.service_conductor,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_direct_list_adapter() {
        let body = json!({
            "conductor_type": "Aluminum",
            "units": [
                {"area_m2": 90.0, "range_watts": 8000.0},
                {"area_m2": 45.0}
            ]
        });
        let units = parse_units(&body).unwrap();
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].range_watts, 8000.0);
        assert_eq!(units[1].area_m2, 45.0);
        assert_eq!(
            parse_conductor(&body).unwrap(),
            ConductorMaterial::Aluminum
        );
    }

    #[test]
    fn test_flat_fallback_adapter() {
        let body = json!({
            "num_units": 2,
            "unit_1_area_m2": 90.0,
            "unit_1_range_watts": 8000.0,
            "unit_1_additional_loads": 1500.0,
            "unit_2_area_m2": 45.0,
            "unit_2_heating_cooling_interlocked": true
        });
        let units = parse_units(&body).unwrap();
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].area_m2, 90.0);
        assert_eq!(units[0].additional_load, 1500.0);
        assert!(units[1].heating_cooling_interlocked);
    }

    #[test]
    fn test_flat_fallback_defaults_to_one_unit() {
        let body = json!({"unit_1_area_m2": 90.0});
        let units = parse_units(&body).unwrap();
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].area_m2, 90.0);
    }

    #[test]
    fn test_non_numeric_field_is_an_error() {
        let body = json!({"unit_1_area_m2": "ninety"});
        let err = parse_units(&body).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let body = json!({"units": [{"area_m2": "ninety"}]});
        assert!(parse_units(&body).is_err());
    }

    #[test]
    fn test_conductor_defaults_to_copper() {
        let body = json!({"units": []});
        assert_eq!(parse_conductor(&body).unwrap(), ConductorMaterial::Copper);
    }

    #[test]
    fn test_process_no_valid_units() {
        let body = json!({"units": []});
        assert!(matches!(process(&body).unwrap(), Outcome::NoValidUnits));

        // All-zero records are excluded, not counted as 0 W units
        let body = json!({"num_units": 3});
        assert!(matches!(process(&body).unwrap(), Outcome::NoValidUnits));
    }

    #[test]
    fn test_report_labels_are_frozen() {
        let body = json!({
            "conductor_type": "Copper",
            "units": [{"area_m2": 90.0, "space_heating": 3000.0, "range_watts": 8000.0}]
        });
        let Outcome::Report(report) = process(&body).unwrap() else {
            panic!("expected a report");
        };
        let value = serde_json::to_value(&*report).unwrap();

        assert_eq!(value["Combined No-HVAC Load (Watts)"], 11_000.0);
        assert_eq!(value["Total HVAC Load (Watts)"], 3000.0);
        assert_eq!(value["Total Calculated Load (Watts)"], 14_000.0);
        assert_eq!(value["Service OCP size (Amps)"], 100);
        assert_eq!(value["Service Conductor Type and Size"], "#4 AWG Copper");
        assert_eq!(value["units"][0]["unit_index"], 1);
        assert_eq!(value["units"][0]["unit_panel_ocp_size"], 60);
        assert_eq!(value["units"][0]["unit_panel_conductor"], "#6 AWG Copper");
        // No clamped selection, so no warnings key at all
        assert!(value.get("warnings").is_none());
    }

    #[test]
    fn test_clamped_selection_emits_warning() {
        let body = json!({
            "units": [{
                "area_m2": 400.0,
                "space_heating": 30000.0,
                "air_conditioning": 10000.0,
                "range_watts": 14000.0,
                "tankless_watts": 12000.0,
                "ev_charging_watts": 19200.0
            }]
        });
        let Outcome::Report(report) = process(&body).unwrap() else {
            panic!("expected a report");
        };
        assert!(!report.warnings.is_empty());
        assert!(report.warnings[0].contains("exceeds the largest standard OCP rating"));
    }
}
