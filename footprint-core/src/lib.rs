//! # Footprint Core Library
//!
//! Emissions-calculation engine for organizational greenhouse-gas
//! footprints: converts activity quantities (fuel volumes, electricity,
//! travel distances, waste) into kg CO2-equivalent, broken down by GHG
//! Protocol scopes 1/2/3.
//!
//! The engine is a pure function pipeline: no I/O, no shared mutable
//! state, re-entrant from any number of callers. All emission factors
//! are compile-time constants.

// Declare modules
pub mod co2e;
pub mod factors;
pub mod footprint;
pub mod model;
pub mod scope1;
pub mod scope2;
pub mod scope3;

// Re-export public types
pub use footprint::calculate_carbon_footprint;
pub use model::{
    CarbonFootprintInput, CarbonFootprintOutput, EnergyCarrierInput, FleetInput,
    RefrigerantInput, Scope1Breakdown, Scope1Input, Scope2Breakdown, Scope2Input,
    Scope3Breakdown, Scope3Input, TravelItem,
};
