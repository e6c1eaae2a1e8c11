use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use validator::Validate;

use footprint_core::{
    CarbonFootprintInput, CarbonFootprintOutput, EnergyCarrierInput, FleetInput,
    RefrigerantInput, Scope1Breakdown, Scope1Input, Scope2Breakdown, Scope2Input,
    Scope3Breakdown, Scope3Input, TravelItem,
};

// --- Request Models ---

// Mirroring footprint_core::model types for the request body so the API
// surface owns its validation rules and schema annotations. Negative
// quantities are rejected here, before the engine runs; travel entries
// with non-positive distances are accepted and contribute zero, per the
// engine's contract.

#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
#[schema(example = json!({
  "scope1": {
    "energyCarriers": { "naturalGas": 1500.0, "heatingOil": 200.0 },
    "fleet": { "gasoline": 1200.0, "diesel": 800.0, "dieselGenerators": 150.0 },
    "refrigerants": { "r410a": 2.0 }
  },
  "scope2": { "electricity": 42000.0, "districtHeating": 12.5 },
  "scope3": {
    "water": 350.0,
    "sewage": 350.0,
    "paperEcoLabeled": 40.0,
    "paperStandard": 80.0,
    "waste": 220.0,
    "airTravel": [
      { "name": "WAW-VIE", "distance": 560.0 },
      { "name": "WAW-JFK", "distance": 6857.0 }
    ],
    "trainTravel": [
      { "name": "WAW-KRK", "distance": 293.0 }
    ]
  }
}))]
pub struct CalculateRequest {
    #[validate(nested)]
    pub scope1: Option<Scope1Request>,
    #[validate(nested)]
    pub scope2: Option<Scope2Request>,
    #[validate(nested)]
    pub scope3: Option<Scope3Request>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Scope1Request {
    #[validate(nested)]
    pub energy_carriers: Option<EnergyCarriersRequest>,
    #[validate(nested)]
    pub fleet: Option<FleetRequest>,
    #[validate(nested)]
    pub refrigerants: Option<RefrigerantsRequest>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct EnergyCarriersRequest {
    /// Natural gas consumption in m3.
    #[validate(range(min = 0.0))]
    pub natural_gas: Option<f64>,
    /// Heating oil consumption in liters.
    #[validate(range(min = 0.0))]
    pub heating_oil: Option<f64>,
    /// Coal consumption in tonnes.
    #[validate(range(min = 0.0))]
    pub coal: Option<f64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct FleetRequest {
    /// Gasoline consumption in liters.
    #[validate(range(min = 0.0))]
    pub gasoline: Option<f64>,
    /// Fleet diesel consumption in liters.
    #[validate(range(min = 0.0))]
    pub diesel: Option<f64>,
    /// Generator diesel consumption in liters.
    #[validate(range(min = 0.0))]
    pub diesel_generators: Option<f64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RefrigerantsRequest {
    /// R407C leakage in kg.
    #[validate(range(min = 0.0))]
    pub r407c: Option<f64>,
    /// R32 leakage in kg.
    #[validate(range(min = 0.0))]
    pub r32: Option<f64>,
    /// R410A leakage in kg.
    #[validate(range(min = 0.0))]
    pub r410a: Option<f64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Scope2Request {
    /// Purchased electricity in kWh.
    #[validate(range(min = 0.0))]
    pub electricity: Option<f64>,
    /// District heating in GJ.
    #[validate(range(min = 0.0))]
    pub district_heating: Option<f64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Scope3Request {
    /// Water consumption in m3.
    #[validate(range(min = 0.0))]
    pub water: Option<f64>,
    /// Sewage volume in m3.
    #[validate(range(min = 0.0))]
    pub sewage: Option<f64>,
    /// Eco-labeled paper in kg.
    #[validate(range(min = 0.0))]
    pub paper_eco_labeled: Option<f64>,
    /// Standard paper in kg.
    #[validate(range(min = 0.0))]
    pub paper_standard: Option<f64>,
    /// Waste (paper/electronics/toners) in kg.
    #[validate(range(min = 0.0))]
    pub waste: Option<f64>,
    pub air_travel: Vec<TravelItemRequest>,
    pub train_travel: Vec<TravelItemRequest>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct TravelItemRequest {
    /// Flight or route description.
    pub name: Option<String>,
    /// Distance in km; missing or non-positive entries contribute zero.
    pub distance: Option<f64>,
}

// --- Request -> engine model conversions ---

impl From<CalculateRequest> for CarbonFootprintInput {
    fn from(req: CalculateRequest) -> Self {
        CarbonFootprintInput {
            scope1: req.scope1.map(Into::into),
            scope2: req.scope2.map(Into::into),
            scope3: req.scope3.map(Into::into),
        }
    }
}

impl From<Scope1Request> for Scope1Input {
    fn from(req: Scope1Request) -> Self {
        Scope1Input {
            energy_carriers: req.energy_carriers.map(|g| EnergyCarrierInput {
                natural_gas: g.natural_gas,
                heating_oil: g.heating_oil,
                coal: g.coal,
            }),
            fleet: req.fleet.map(|g| FleetInput {
                gasoline: g.gasoline,
                diesel: g.diesel,
                diesel_generators: g.diesel_generators,
            }),
            refrigerants: req.refrigerants.map(|g| RefrigerantInput {
                r407c: g.r407c,
                r32: g.r32,
                r410a: g.r410a,
            }),
        }
    }
}

impl From<Scope2Request> for Scope2Input {
    fn from(req: Scope2Request) -> Self {
        Scope2Input {
            electricity: req.electricity,
            district_heating: req.district_heating,
        }
    }
}

impl From<Scope3Request> for Scope3Input {
    fn from(req: Scope3Request) -> Self {
        Scope3Input {
            water: req.water,
            sewage: req.sewage,
            paper_eco_labeled: req.paper_eco_labeled,
            paper_standard: req.paper_standard,
            waste: req.waste,
            air_travel: req.air_travel.into_iter().map(Into::into).collect(),
            train_travel: req.train_travel.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<TravelItemRequest> for TravelItem {
    fn from(req: TravelItemRequest) -> Self {
        TravelItem {
            name: req.name,
            distance: req.distance,
        }
    }
}

// --- Response Models ---

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    /// Scope 1 total in kg CO2e (unrounded).
    pub scope1_total: f64,
    /// Scope 2 total in kg CO2e (unrounded).
    pub scope2_total: f64,
    /// Scope 3 total in kg CO2e (unrounded).
    pub scope3_total: f64,
    /// Grand total in kg CO2e, rounded to 2 decimals.
    pub total_footprint: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope1_breakdown: Option<Scope1BreakdownResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope2_breakdown: Option<Scope2BreakdownResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope3_breakdown: Option<Scope3BreakdownResponse>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Scope1BreakdownResponse {
    pub energy_carriers: f64,
    pub fleet: f64,
    pub refrigerants: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Scope2BreakdownResponse {
    pub electricity: f64,
    pub district_heating: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Scope3BreakdownResponse {
    pub water_and_sewage: f64,
    pub paper_and_waste: f64,
    pub air_travel: f64,
    pub train_travel: f64,
}

impl From<CarbonFootprintOutput> for CalculateResponse {
    fn from(output: CarbonFootprintOutput) -> Self {
        CalculateResponse {
            scope1_total: output.scope1_total,
            scope2_total: output.scope2_total,
            scope3_total: output.scope3_total,
            total_footprint: output.total_footprint,
            scope1_breakdown: output.scope1_breakdown.map(
                |Scope1Breakdown {
                     energy_carriers,
                     fleet,
                     refrigerants,
                 }| Scope1BreakdownResponse {
                    energy_carriers,
                    fleet,
                    refrigerants,
                },
            ),
            scope2_breakdown: output.scope2_breakdown.map(
                |Scope2Breakdown {
                     electricity,
                     district_heating,
                 }| Scope2BreakdownResponse {
                    electricity,
                    district_heating,
                },
            ),
            scope3_breakdown: output.scope3_breakdown.map(
                |Scope3Breakdown {
                     water_and_sewage,
                     paper_and_waste,
                     air_travel,
                     train_travel,
                 }| Scope3BreakdownResponse {
                    water_and_sewage,
                    paper_and_waste,
                    air_travel,
                    train_travel,
                },
            ),
        }
    }
}

// --- Error Model ---

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub status_code: u16,
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}
