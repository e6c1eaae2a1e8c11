//! Scope 3: other indirect emissions.
//!
//! Utilities (water/sewage), paper and waste, and business travel.
//! Air travel is classified into haul tiers by the original km distance
//! before the per-mile factors apply; train travel mixes a per-km CO2
//! factor with per-mile CH4/N2O factors.

use crate::co2e;
use crate::factors::{self, HaulFactors};
use crate::model::{round2, Scope3Breakdown, Scope3Input, TravelItem};

/// Scope 3 result: raw total plus the 2-decimal category breakdown.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Scope3Summary {
    pub total: f64,
    pub breakdown: Scope3Breakdown,
}

pub fn calculate(input: &Scope3Input) -> Scope3Summary {
    let water_and_sewage = water_and_sewage(input.water, input.sewage);
    let paper_and_waste = paper_and_waste(input.paper_eco_labeled, input.paper_standard, input.waste);
    let air_travel = air_travel(&input.air_travel);
    let train_travel = train_travel(&input.train_travel);

    Scope3Summary {
        total: water_and_sewage + paper_and_waste + air_travel + train_travel,
        breakdown: Scope3Breakdown {
            water_and_sewage: round2(water_and_sewage),
            paper_and_waste: round2(paper_and_waste),
            air_travel: round2(air_travel),
            train_travel: round2(train_travel),
        },
    }
}

/// Direct-factor CO2e for one quantity. Missing or zero contributes
/// nothing.
fn direct_co2e(quantity: Option<f64>, factor: f64) -> f64 {
    let Some(quantity) = quantity else { return 0.0 };
    if quantity == 0.0 {
        return 0.0;
    }
    quantity * factor
}

fn water_and_sewage(water_m3: Option<f64>, sewage_m3: Option<f64>) -> f64 {
    direct_co2e(water_m3, factors::WATER_KG_CO2E_PER_M3)
        + direct_co2e(sewage_m3, factors::SEWAGE_KG_CO2E_PER_M3)
}

/// Per-tonne CO2e for a quantity given in kg: the quantity is divided
/// down to tonnes before the factor applies.
fn per_tonne_co2e(kg: Option<f64>, factor_per_tonne: f64) -> f64 {
    let Some(kg) = kg else { return 0.0 };
    if kg == 0.0 {
        return 0.0;
    }
    (kg / 1000.0) * factor_per_tonne
}

fn paper_and_waste(eco_kg: Option<f64>, standard_kg: Option<f64>, waste_kg: Option<f64>) -> f64 {
    per_tonne_co2e(eco_kg, factors::PAPER_ECO_LABELED_KG_CO2E_PER_TONNE)
        + per_tonne_co2e(standard_kg, factors::PAPER_STANDARD_KG_CO2E_PER_TONNE)
        + per_tonne_co2e(waste_kg, factors::WASTE_KG_CO2E_PER_TONNE)
}

/// Haul tier for a flight, decided on the km distance (not miles).
fn haul_factors(distance_km: f64) -> &'static HaulFactors {
    if distance_km < factors::SHORT_HAUL_MAX_KM {
        &factors::SHORT_HAUL
    } else if distance_km < factors::LONG_HAUL_MIN_KM {
        &factors::MEDIUM_HAUL
    } else {
        &factors::LONG_HAUL
    }
}

fn air_travel(items: &[TravelItem]) -> f64 {
    let mut total = 0.0;

    for item in items {
        let Some(distance) = item.distance else { continue };
        if distance <= 0.0 {
            continue;
        }

        let tier = haul_factors(distance);
        let miles = distance * factors::KM_TO_MILES;
        let co2 = miles * tier.co2_kg_per_mile;
        // CH4 and N2O factors are in grams per mile.
        let ch4 = miles * tier.ch4_g_per_mile / 1000.0;
        let n2o = miles * tier.n2o_g_per_mile / 1000.0;

        total += co2e::combine(co2, ch4, n2o);
    }

    total
}

fn train_travel(items: &[TravelItem]) -> f64 {
    let mut total = 0.0;

    for item in items {
        let Some(distance) = item.distance else { continue };
        if distance <= 0.0 {
            continue;
        }

        // CO2 from km directly; CH4/N2O from the mile-converted distance,
        // factors already in kg.
        let co2 = distance * factors::TRAIN_CO2_KG_PER_KM;
        let miles = distance * factors::KM_TO_MILES;
        let ch4 = miles * factors::TRAIN_CH4_KG_PER_MILE;
        let n2o = miles * factors::TRAIN_N2O_KG_PER_MILE;

        total += co2e::combine(co2, ch4, n2o);
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors;

    fn flight(distance: f64) -> TravelItem {
        TravelItem {
            name: Some("flight".to_string()),
            distance: Some(distance),
        }
    }

    #[test]
    fn test_empty_input_is_zero() {
        let summary = calculate(&Scope3Input::default());
        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.breakdown, Scope3Breakdown::default());
    }

    #[test]
    fn test_water_and_sewage_direct_factors() {
        let summary = calculate(&Scope3Input {
            water: Some(100.0),
            sewage: Some(50.0),
            ..Default::default()
        });
        let expected = 100.0 * factors::WATER_KG_CO2E_PER_M3 + 50.0 * factors::SEWAGE_KG_CO2E_PER_M3;
        assert_eq!(summary.total, expected);
        assert_eq!(summary.breakdown.water_and_sewage, round2(expected));
    }

    #[test]
    fn test_paper_and_waste_are_per_tonne() {
        // 1000 kg of standard paper is exactly one tonne.
        let summary = calculate(&Scope3Input {
            paper_standard: Some(1000.0),
            ..Default::default()
        });
        assert!((summary.total - factors::PAPER_STANDARD_KG_CO2E_PER_TONNE).abs() < 1e-9);

        let summary = calculate(&Scope3Input {
            paper_eco_labeled: Some(250.0),
            waste: Some(500.0),
            ..Default::default()
        });
        let expected = (250.0 / 1000.0) * factors::PAPER_ECO_LABELED_KG_CO2E_PER_TONNE
            + (500.0 / 1000.0) * factors::WASTE_KG_CO2E_PER_TONNE;
        assert!((summary.total - expected).abs() < 1e-9);
    }

    #[test]
    fn test_haul_tier_boundaries() {
        assert_eq!(*haul_factors(100.0), factors::SHORT_HAUL);
        assert_eq!(*haul_factors(479.99), factors::SHORT_HAUL);
        assert_eq!(*haul_factors(480.0), factors::MEDIUM_HAUL);
        assert_eq!(*haul_factors(3679.99), factors::MEDIUM_HAUL);
        assert_eq!(*haul_factors(3680.0), factors::LONG_HAUL);
        assert_eq!(*haul_factors(10000.0), factors::LONG_HAUL);
    }

    #[test]
    fn test_short_haul_flight_reference_value() {
        let summary = calculate(&Scope3Input {
            air_travel: vec![flight(100.0)],
            ..Default::default()
        });

        let miles = 100.0 * factors::KM_TO_MILES;
        let expected = crate::co2e::combine(
            miles * factors::SHORT_HAUL.co2_kg_per_mile,
            miles * factors::SHORT_HAUL.ch4_g_per_mile / 1000.0,
            miles * factors::SHORT_HAUL.n2o_g_per_mile / 1000.0,
        );
        assert_eq!(summary.total, expected);
        assert!((summary.total - 13.4855).abs() < 1e-3);
        assert_eq!(summary.breakdown.air_travel, 13.49);
    }

    #[test]
    fn test_flights_skip_missing_and_non_positive_distances() {
        let summary = calculate(&Scope3Input {
            air_travel: vec![
                TravelItem { name: Some("no distance".to_string()), distance: None },
                flight(0.0),
                flight(-120.0),
                flight(100.0),
            ],
            ..Default::default()
        });
        let only_valid = calculate(&Scope3Input {
            air_travel: vec![flight(100.0)],
            ..Default::default()
        });
        assert_eq!(summary.total, only_valid.total);
    }

    #[test]
    fn test_flights_accumulate_across_entries() {
        let combined = calculate(&Scope3Input {
            air_travel: vec![flight(300.0), flight(1500.0), flight(8000.0)],
            ..Default::default()
        });
        let separate: f64 = [300.0, 1500.0, 8000.0]
            .iter()
            .map(|&km| {
                calculate(&Scope3Input {
                    air_travel: vec![flight(km)],
                    ..Default::default()
                })
                .total
            })
            .sum();
        assert!((combined.total - separate).abs() < 1e-9);
    }

    #[test]
    fn test_train_travel_reference_value() {
        let summary = calculate(&Scope3Input {
            train_travel: vec![TravelItem {
                name: Some("commuter line".to_string()),
                distance: Some(500.0),
            }],
            ..Default::default()
        });

        let miles = 500.0 * factors::KM_TO_MILES;
        let expected = crate::co2e::combine(
            500.0 * factors::TRAIN_CO2_KG_PER_KM,
            miles * factors::TRAIN_CH4_KG_PER_MILE,
            miles * factors::TRAIN_N2O_KG_PER_MILE,
        );
        assert_eq!(summary.total, expected);
        assert_eq!(summary.breakdown.train_travel, round2(expected));
    }

    #[test]
    fn test_categories_sum_into_total() {
        let summary = calculate(&Scope3Input {
            water: Some(30.0),
            sewage: Some(30.0),
            paper_standard: Some(100.0),
            waste: Some(40.0),
            air_travel: vec![flight(700.0)],
            train_travel: vec![TravelItem {
                name: None,
                distance: Some(120.0),
            }],
            ..Default::default()
        });

        let b = summary.breakdown;
        let rounded_sum = b.water_and_sewage + b.paper_and_waste + b.air_travel + b.train_travel;
        // Breakdown components are rounded independently; the raw total
        // may differ from their sum by a few hundredths.
        assert!((summary.total - rounded_sum).abs() <= 0.04);
        assert!(summary.total > 0.0);
    }
}
