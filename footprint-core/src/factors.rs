//! Emission factor table.
//!
//! Fixed conversion constants and emission factors following standard
//! GHG Protocol methodologies. Everything in here is a compile-time
//! constant; there is no runtime mutation path.

/// Combustion emission factors for a fuel, per gigajoule of energy content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FuelFactors {
    pub co2_kg_per_gj: f64,
    pub ch4_kg_per_gj: f64,
    pub n2o_kg_per_gj: f64,
}

/// Air travel emission factors for one haul tier.
///
/// CO2 is given in kg per mile; CH4 and N2O are given in grams per mile
/// and must be converted to kg before CO2e aggregation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HaulFactors {
    pub co2_kg_per_mile: f64,
    pub ch4_g_per_mile: f64,
    pub n2o_g_per_mile: f64,
}

// -- Energy conversion factors (to GJ) --

pub const NATURAL_GAS_M3_TO_GJ: f64 = 0.039492;
pub const HEATING_OIL_L_TO_GJ: f64 = 0.0344;
pub const COAL_TONNES_TO_GJ: f64 = 22.55;
pub const GASOLINE_L_TO_GJ: f64 = 0.0319;
pub const DIESEL_L_TO_GJ: f64 = 0.0353;

// -- Combustion emission factors (per GJ) --

pub const NATURAL_GAS: FuelFactors = FuelFactors {
    co2_kg_per_gj: 57.65,
    ch4_kg_per_gj: 0.0009479,
    n2o_kg_per_gj: 0.0000948,
};

pub const HEATING_OIL: FuelFactors = FuelFactors {
    co2_kg_per_gj: 74.10,
    ch4_kg_per_gj: 0.0028,
    n2o_kg_per_gj: 0.0006,
};

pub const COAL: FuelFactors = FuelFactors {
    co2_kg_per_gj: 94.78,
    ch4_kg_per_gj: 0.0104,
    n2o_kg_per_gj: 0.0015,
};

pub const GASOLINE: FuelFactors = FuelFactors {
    co2_kg_per_gj: 69.30,
    ch4_kg_per_gj: 0.0028,
    n2o_kg_per_gj: 0.0006,
};

pub const DIESEL: FuelFactors = FuelFactors {
    co2_kg_per_gj: 74.10,
    ch4_kg_per_gj: 0.0028,
    n2o_kg_per_gj: 0.0006,
};

// -- Global Warming Potential factors for refrigerants --
// Leaked refrigerant mass is already CO2e-equivalent after this multiplier.

pub const R407C_GWP: f64 = 1624.0;
pub const R32_GWP: f64 = 677.0;
pub const R410A_GWP: f64 = 1924.0;

// -- Scope 2: purchased energy (direct CO2e factors, only CO2 counted) --

pub const ELECTRICITY_KG_CO2E_PER_MWH: f64 = 698.0;
pub const DISTRICT_HEATING_KG_CO2E_PER_GJ: f64 = 95.05;

// -- Distance conversion --

pub const KM_TO_MILES: f64 = 0.6214;

// -- Air travel haul thresholds (km) --
// short < 480, 480 <= medium < 3680, long >= 3680; classified on the
// original km distance, not the converted miles.

pub const SHORT_HAUL_MAX_KM: f64 = 480.0;
pub const LONG_HAUL_MIN_KM: f64 = 3680.0;

// -- Scope 3: water & sewage (per m3) --

pub const WATER_KG_CO2E_PER_M3: f64 = 0.149;
pub const SEWAGE_KG_CO2E_PER_M3: f64 = 0.272;

// -- Scope 3: paper & waste (per tonne; inputs arrive in kg) --

pub const PAPER_ECO_LABELED_KG_CO2E_PER_TONNE: f64 = 739.4;
pub const PAPER_STANDARD_KG_CO2E_PER_TONNE: f64 = 919.4;
pub const WASTE_KG_CO2E_PER_TONNE: f64 = 21.29;

// -- Scope 3: air travel (per mile) --

pub const SHORT_HAUL: HaulFactors = HaulFactors {
    co2_kg_per_mile: 0.215,
    ch4_g_per_mile: 0.0077,
    n2o_g_per_mile: 0.0068,
};

pub const MEDIUM_HAUL: HaulFactors = HaulFactors {
    co2_kg_per_mile: 0.133,
    ch4_g_per_mile: 0.0006,
    n2o_g_per_mile: 0.0042,
};

pub const LONG_HAUL: HaulFactors = HaulFactors {
    co2_kg_per_mile: 0.165,
    ch4_g_per_mile: 0.0006,
    n2o_g_per_mile: 0.0052,
};

// -- Scope 3: train travel --
// CO2 is per km; CH4 and N2O are per mile and already expressed in kg.

pub const TRAIN_CO2_KG_PER_KM: f64 = 0.028;
pub const TRAIN_CH4_KG_PER_MILE: f64 = 0.0000092;
pub const TRAIN_N2O_KG_PER_MILE: f64 = 0.0000026;
