//! Footprint orchestrator.
//!
//! Composes the three scope calculators into the single entry point of
//! the engine. The three scopes are independent; they are evaluated
//! sequentially because the whole calculation is O(number of input
//! fields).

use crate::model::{round2, CarbonFootprintInput, CarbonFootprintOutput};
use crate::{scope1, scope2, scope3};

/// Computes the full footprint for one set of activity quantities.
///
/// A missing scope group contributes an all-zero scope. Only the grand
/// total is rounded here; scope totals stay unrounded while the
/// per-category breakdowns carry 2-decimal values.
pub fn calculate_carbon_footprint(input: &CarbonFootprintInput) -> CarbonFootprintOutput {
    let scope1 = input
        .scope1
        .as_ref()
        .map(scope1::calculate)
        .unwrap_or_default();
    let scope2 = input
        .scope2
        .as_ref()
        .map(scope2::calculate)
        .unwrap_or_default();
    let scope3 = input
        .scope3
        .as_ref()
        .map(scope3::calculate)
        .unwrap_or_default();

    let total_footprint = scope1.total + scope2.total + scope3.total;
    log::debug!(
        "footprint calculated: scope1={} scope2={} scope3={} total={}",
        scope1.total,
        scope2.total,
        scope3.total,
        total_footprint
    );

    CarbonFootprintOutput {
        scope1_total: scope1.total,
        scope2_total: scope2.total,
        scope3_total: scope3.total,
        total_footprint: round2(total_footprint),
        scope1_breakdown: Some(scope1.breakdown),
        scope2_breakdown: Some(scope2.breakdown),
        scope3_breakdown: Some(scope3.breakdown),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        EnergyCarrierInput, RefrigerantInput, Scope1Input, Scope2Input, Scope3Input, TravelItem,
    };

    fn populated_input() -> CarbonFootprintInput {
        CarbonFootprintInput {
            scope1: Some(Scope1Input {
                energy_carriers: Some(EnergyCarrierInput {
                    natural_gas: Some(1500.0),
                    heating_oil: Some(200.0),
                    ..Default::default()
                }),
                refrigerants: Some(RefrigerantInput {
                    r407c: Some(1.5),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            scope2: Some(Scope2Input {
                electricity: Some(42_000.0),
                district_heating: Some(12.5),
            }),
            scope3: Some(Scope3Input {
                water: Some(350.0),
                sewage: Some(350.0),
                paper_standard: Some(80.0),
                waste: Some(220.0),
                air_travel: vec![
                    TravelItem {
                        name: Some("WAW-VIE".to_string()),
                        distance: Some(560.0),
                    },
                    TravelItem {
                        name: Some("WAW-JFK".to_string()),
                        distance: Some(6857.0),
                    },
                ],
                train_travel: vec![TravelItem {
                    name: Some("WAW-KRK".to_string()),
                    distance: Some(293.0),
                }],
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_all_absent_input_is_all_zero() {
        let output = calculate_carbon_footprint(&CarbonFootprintInput::default());
        assert_eq!(output.scope1_total, 0.0);
        assert_eq!(output.scope2_total, 0.0);
        assert_eq!(output.scope3_total, 0.0);
        assert_eq!(output.total_footprint, 0.0);
        assert_eq!(output.scope1_breakdown.unwrap(), Default::default());
        assert_eq!(output.scope2_breakdown.unwrap(), Default::default());
        assert_eq!(output.scope3_breakdown.unwrap(), Default::default());
    }

    #[test]
    fn test_idempotent_for_identical_input() {
        let input = populated_input();
        let first = calculate_carbon_footprint(&input);
        let second = calculate_carbon_footprint(&input);
        assert_eq!(first, second);
    }

    #[test]
    fn test_grand_total_is_rounded_sum_of_scope_totals() {
        let output = calculate_carbon_footprint(&populated_input());
        let raw = output.scope1_total + output.scope2_total + output.scope3_total;
        assert_eq!(output.total_footprint, crate::model::round2(raw));
    }

    #[test]
    fn test_scope_totals_stay_unrounded() {
        // Refrigerant quantity chosen so the scope total carries more
        // than two decimals: 1.0001 * 1624 = 162.41624.
        let input = CarbonFootprintInput {
            scope1: Some(Scope1Input {
                refrigerants: Some(RefrigerantInput {
                    r407c: Some(1.0001),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        let output = calculate_carbon_footprint(&input);

        assert!((output.scope1_total - 162.41624).abs() < 1e-9);
        assert_ne!(output.scope1_total, crate::model::round2(output.scope1_total));
        // The breakdown component is rounded.
        assert_eq!(output.scope1_breakdown.unwrap().refrigerants, 162.42);
        // The grand total is rounded.
        assert_eq!(output.total_footprint, 162.42);
    }

    #[test]
    fn test_increasing_a_field_never_decreases_its_scope() {
        let base = populated_input();
        let base_output = calculate_carbon_footprint(&base);

        let mut more_electricity = base.clone();
        more_electricity.scope2.as_mut().unwrap().electricity = Some(50_000.0);
        let output = calculate_carbon_footprint(&more_electricity);
        assert!(output.scope2_total >= base_output.scope2_total);

        let mut more_water = base.clone();
        more_water.scope3.as_mut().unwrap().water = Some(1000.0);
        let output = calculate_carbon_footprint(&more_water);
        assert!(output.scope3_total >= base_output.scope3_total);
    }

    #[test]
    fn test_missing_group_equals_empty_group() {
        let missing = CarbonFootprintInput {
            scope2: Some(Scope2Input {
                electricity: Some(1000.0),
                district_heating: None,
            }),
            ..Default::default()
        };
        let empty = CarbonFootprintInput {
            scope1: Some(Scope1Input::default()),
            scope2: Some(Scope2Input {
                electricity: Some(1000.0),
                district_heating: None,
            }),
            scope3: Some(Scope3Input::default()),
        };
        assert_eq!(
            calculate_carbon_footprint(&missing),
            calculate_carbon_footprint(&empty)
        );
    }

    #[test]
    fn test_electricity_scenario() {
        let input = CarbonFootprintInput {
            scope2: Some(Scope2Input {
                electricity: Some(1000.0),
                district_heating: None,
            }),
            ..Default::default()
        };
        let output = calculate_carbon_footprint(&input);
        assert_eq!(output.scope2_total, 698.0);
        assert_eq!(output.total_footprint, 698.0);
        let breakdown = output.scope2_breakdown.unwrap();
        assert_eq!(breakdown.electricity, 698.0);
        assert_eq!(breakdown.district_heating, 0.0);
    }

    #[test]
    fn test_output_survives_persistence_round_trip() {
        // Stored calculations are redisplayed without recomputation; the
        // serialized document must reproduce the output exactly.
        let output = calculate_carbon_footprint(&populated_input());
        let json = serde_json::to_string(&output).unwrap();
        let reread: CarbonFootprintOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(reread, output);
    }
}
