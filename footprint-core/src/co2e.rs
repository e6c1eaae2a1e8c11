//! CO2e aggregation.
//!
//! Global formula combining the three tracked greenhouse gases into a
//! single CO2-equivalent mass: `CO2e = CO2 + CH4 * 28 + N2O * 265`.

/// 100-year Global Warming Potential of methane.
pub const CH4_GWP_100: f64 = 28.0;

/// 100-year Global Warming Potential of nitrous oxide.
pub const N2O_GWP_100: f64 = 265.0;

/// Combines CO2, CH4 and N2O masses (all in kg) into kg CO2e.
///
/// Accepts any finite values including zero; pure, no error conditions.
pub fn combine(co2_kg: f64, ch4_kg: f64, n2o_kg: f64) -> f64 {
    co2_kg + ch4_kg * CH4_GWP_100 + n2o_kg * N2O_GWP_100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_weights_each_gas() {
        assert_eq!(combine(1.0, 0.0, 0.0), 1.0);
        assert_eq!(combine(0.0, 1.0, 0.0), 28.0);
        assert_eq!(combine(0.0, 0.0, 1.0), 265.0);
    }

    #[test]
    fn test_combine_zero_is_zero() {
        assert_eq!(combine(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_combine_is_linear_sum() {
        let co2e = combine(2.5, 0.1, 0.01);
        assert!((co2e - (2.5 + 0.1 * 28.0 + 0.01 * 265.0)).abs() < 1e-12);
    }
}
