//! Scope 1: direct emissions.
//!
//! Stationary combustion (energy carriers), mobile combustion (fleet and
//! generators) and refrigerant leakage. Combustion follows the
//! quantity -> GJ -> per-GJ gas factors -> CO2e chain; refrigerants are
//! a direct GWP multiplication on the leaked mass.

use crate::co2e;
use crate::factors::{self, FuelFactors};
use crate::model::{round2, EnergyCarrierInput, FleetInput, RefrigerantInput, Scope1Breakdown, Scope1Input};

/// Scope 1 result: raw total plus the 2-decimal category breakdown.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Scope1Summary {
    pub total: f64,
    pub breakdown: Scope1Breakdown,
}

pub fn calculate(input: &Scope1Input) -> Scope1Summary {
    let energy_carriers = energy_carriers(input.energy_carriers.as_ref());
    let fleet = fleet(input.fleet.as_ref());
    let refrigerants = refrigerants(input.refrigerants.as_ref());

    Scope1Summary {
        total: energy_carriers + fleet + refrigerants,
        breakdown: Scope1Breakdown {
            energy_carriers: round2(energy_carriers),
            fleet: round2(fleet),
            refrigerants: round2(refrigerants),
        },
    }
}

/// Combustion CO2e for one fuel quantity. Missing or zero quantity
/// contributes nothing.
fn fuel_co2e(quantity: Option<f64>, to_gj: f64, fuel: &FuelFactors) -> f64 {
    let Some(quantity) = quantity else { return 0.0 };
    if quantity == 0.0 {
        return 0.0;
    }
    let gj = quantity * to_gj;
    co2e::combine(
        gj * fuel.co2_kg_per_gj,
        gj * fuel.ch4_kg_per_gj,
        gj * fuel.n2o_kg_per_gj,
    )
}

fn energy_carriers(input: Option<&EnergyCarrierInput>) -> f64 {
    let Some(input) = input else { return 0.0 };

    fuel_co2e(input.natural_gas, factors::NATURAL_GAS_M3_TO_GJ, &factors::NATURAL_GAS)
        + fuel_co2e(input.heating_oil, factors::HEATING_OIL_L_TO_GJ, &factors::HEATING_OIL)
        + fuel_co2e(input.coal, factors::COAL_TONNES_TO_GJ, &factors::COAL)
}

fn fleet(input: Option<&FleetInput>) -> f64 {
    let Some(input) = input else { return 0.0 };

    // Fleet diesel and generator diesel share factors but stay separate
    // input quantities.
    fuel_co2e(input.gasoline, factors::GASOLINE_L_TO_GJ, &factors::GASOLINE)
        + fuel_co2e(input.diesel, factors::DIESEL_L_TO_GJ, &factors::DIESEL)
        + fuel_co2e(input.diesel_generators, factors::DIESEL_L_TO_GJ, &factors::DIESEL)
}

fn refrigerants(input: Option<&RefrigerantInput>) -> f64 {
    let Some(input) = input else { return 0.0 };

    input.r407c.map_or(0.0, |kg| kg * factors::R407C_GWP)
        + input.r32.map_or(0.0, |kg| kg * factors::R32_GWP)
        + input.r410a.map_or(0.0, |kg| kg * factors::R410A_GWP)
}
