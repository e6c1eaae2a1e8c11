//! Scope 2: indirect emissions from purchased energy.
//!
//! Electricity and district heating use direct CO2e-per-unit factors;
//! no CH4/N2O decomposition is tracked for purchased energy.

use crate::factors;
use crate::model::{round2, Scope2Breakdown, Scope2Input};

/// Scope 2 result: raw total plus the 2-decimal category breakdown.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Scope2Summary {
    pub total: f64,
    pub breakdown: Scope2Breakdown,
}

pub fn calculate(input: &Scope2Input) -> Scope2Summary {
    let electricity = electricity(input.electricity);
    let district_heating = district_heating(input.district_heating);

    Scope2Summary {
        total: electricity + district_heating,
        breakdown: Scope2Breakdown {
            electricity: round2(electricity),
            district_heating: round2(district_heating),
        },
    }
}

fn electricity(kwh: Option<f64>) -> f64 {
    let Some(kwh) = kwh else { return 0.0 };
    if kwh == 0.0 {
        return 0.0;
    }
    // kWh -> MWh, then the per-MWh factor.
    let mwh = kwh / 1000.0;
    mwh * factors::ELECTRICITY_KG_CO2E_PER_MWH
}

fn district_heating(gj: Option<f64>) -> f64 {
    let Some(gj) = gj else { return 0.0 };
    if gj == 0.0 {
        return 0.0;
    }
    // Already in GJ, no unit conversion needed.
    gj * factors::DISTRICT_HEATING_KG_CO2E_PER_GJ
}
