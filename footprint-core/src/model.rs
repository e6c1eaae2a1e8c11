//! Input and output value types for a footprint calculation.
//!
//! All types are plain immutable values: the engine is stateless and
//! re-entrant, nothing here has identity or lifecycle beyond a single
//! calculation. Wire names are camelCase so serialized documents stay
//! compatible with stored calculations.

use serde::{Deserialize, Serialize};

/// Rounds to 2 decimals, the reporting resolution for kg CO2e values.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// --- Input ---

/// Activity quantities for one footprint calculation.
///
/// A missing scope group is treated as an all-zero group, never an error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CarbonFootprintInput {
    pub scope1: Option<Scope1Input>,
    pub scope2: Option<Scope2Input>,
    pub scope3: Option<Scope3Input>,
}

/// Direct emissions: on-site combustion and refrigerant leakage.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Scope1Input {
    pub energy_carriers: Option<EnergyCarrierInput>,
    pub fleet: Option<FleetInput>,
    pub refrigerants: Option<RefrigerantInput>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnergyCarrierInput {
    /// m3
    pub natural_gas: Option<f64>,
    /// liters
    pub heating_oil: Option<f64>,
    /// tonnes
    pub coal: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FleetInput {
    /// liters
    pub gasoline: Option<f64>,
    /// liters, fleet vehicles
    pub diesel: Option<f64>,
    /// liters, stationary generators
    pub diesel_generators: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RefrigerantInput {
    /// kg leaked
    pub r407c: Option<f64>,
    /// kg leaked
    pub r32: Option<f64>,
    /// kg leaked
    pub r410a: Option<f64>,
}

/// Indirect emissions from purchased energy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Scope2Input {
    /// kWh
    pub electricity: Option<f64>,
    /// GJ
    pub district_heating: Option<f64>,
}

/// Other indirect emissions: utilities, waste and business travel.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Scope3Input {
    /// m3
    pub water: Option<f64>,
    /// m3
    pub sewage: Option<f64>,
    /// kg
    pub paper_eco_labeled: Option<f64>,
    /// kg
    pub paper_standard: Option<f64>,
    /// kg (paper/electronics/toners)
    pub waste: Option<f64>,
    pub air_travel: Vec<TravelItem>,
    pub train_travel: Vec<TravelItem>,
}

/// One named travel entry (flight or train route).
///
/// Entries with a missing or non-positive distance contribute zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TravelItem {
    pub name: Option<String>,
    /// km
    pub distance: Option<f64>,
}

// --- Output ---

/// Calculation result, all values in kg CO2e.
///
/// `total_footprint` is rounded to 2 decimals; scope totals are the raw
/// unrounded sums of their category contributions, while the breakdown
/// components are rounded independently. Summing a breakdown can
/// therefore differ from its scope total by a few hundredths.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonFootprintOutput {
    pub scope1_total: f64,
    pub scope2_total: f64,
    pub scope3_total: f64,
    pub total_footprint: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub scope1_breakdown: Option<Scope1Breakdown>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub scope2_breakdown: Option<Scope2Breakdown>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub scope3_breakdown: Option<Scope3Breakdown>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scope1Breakdown {
    pub energy_carriers: f64,
    pub fleet: f64,
    pub refrigerants: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scope2Breakdown {
    pub electricity: f64,
    pub district_heating: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scope3Breakdown {
    pub water_and_sewage: f64,
    pub paper_and_waste: f64,
    pub air_travel: f64,
    pub train_travel: f64,
}
