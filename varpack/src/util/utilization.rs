/// Decay constant mapping an occupancy product to a utilization estimate
pub const UTILIZATION_DECAY: f64 = 0.93;

/// Utilization estimate of an occupancy product `P`: `-ln(P) / ln(0.93)`.
///
/// Only used for reporting. An absent or non-positive product yields `0.0`.
pub fn utilization(occupancy_product: Option<u64>) -> f64 {
    match occupancy_product {
        Some(p) if p > 0 => -(p as f64).ln() / UTILIZATION_DECAY.ln(),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn product_of_one_is_zero() {
        assert_eq!(utilization(Some(1)), 0.0);
    }

    #[test]
    fn degenerate_products_are_zero() {
        assert_eq!(utilization(None), 0.0);
        assert_eq!(utilization(Some(0)), 0.0);
    }

    #[test]
    fn grows_with_product() {
        let u2 = utilization(Some(2));
        assert!(approx_eq!(f64, u2, 9.551_337_509_447, epsilon = 1e-9));
        assert!(utilization(Some(4)) > u2);
        assert!(approx_eq!(f64, utilization(Some(4)), 2.0 * u2, epsilon = 1e-12));
    }
}
