use std::error::Error;

use footprint_core::{
    calculate_carbon_footprint, CarbonFootprintInput, EnergyCarrierInput, FleetInput,
    RefrigerantInput, Scope1Input, Scope2Input, Scope3Input, TravelItem,
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Computing the footprint of a sample office...");

    let input = sample_office_input();
    let output = calculate_carbon_footprint(&input);

    println!("Scope 1 (direct):            {:>12.2} kg CO2e", output.scope1_total);
    println!("Scope 2 (purchased energy):  {:>12.2} kg CO2e", output.scope2_total);
    println!("Scope 3 (other indirect):    {:>12.2} kg CO2e", output.scope3_total);
    println!("Total footprint:             {:>12.2} kg CO2e", output.total_footprint);

    if let Some(breakdown) = &output.scope3_breakdown {
        println!();
        println!("Scope 3 breakdown:");
        println!("  water & sewage: {:.2}", breakdown.water_and_sewage);
        println!("  paper & waste:  {:.2}", breakdown.paper_and_waste);
        println!("  air travel:     {:.2}", breakdown.air_travel);
        println!("  train travel:   {:.2}", breakdown.train_travel);
    }

    println!();
    println!("Full document:");
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

/// A mid-sized office: gas heating, a small car fleet, one AC refill,
/// grid electricity, utilities and a handful of business trips.
fn sample_office_input() -> CarbonFootprintInput {
    CarbonFootprintInput {
        scope1: Some(Scope1Input {
            energy_carriers: Some(EnergyCarrierInput {
                natural_gas: Some(12_000.0),
                heating_oil: None,
                coal: None,
            }),
            fleet: Some(FleetInput {
                gasoline: Some(3_400.0),
                diesel: Some(5_100.0),
                diesel_generators: Some(250.0),
            }),
            refrigerants: Some(RefrigerantInput {
                r407c: None,
                r32: Some(0.8),
                r410a: None,
            }),
        }),
        scope2: Some(Scope2Input {
            electricity: Some(85_000.0),
            district_heating: Some(40.0),
        }),
        scope3: Some(Scope3Input {
            water: Some(620.0),
            sewage: Some(590.0),
            paper_eco_labeled: Some(150.0),
            paper_standard: Some(90.0),
            waste: Some(1_300.0),
            air_travel: vec![
                TravelItem {
                    name: Some("WAW-VIE".to_string()),
                    distance: Some(560.0),
                },
                TravelItem {
                    name: Some("WAW-CDG".to_string()),
                    distance: Some(1_365.0),
                },
                TravelItem {
                    name: Some("WAW-JFK".to_string()),
                    distance: Some(6_857.0),
                },
            ],
            train_travel: vec![
                TravelItem {
                    name: Some("WAW-KRK".to_string()),
                    distance: Some(293.0),
                },
                TravelItem {
                    name: Some("WAW-GDA".to_string()),
                    distance: Some(340.0),
                },
            ],
        }),
    }
}
