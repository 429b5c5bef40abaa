use crate::instance::{EmsrInstance, InputError};
use crate::protection::quantile::reserve;

/// EMSR-b protection levels, one per class boundary.
///
/// All classes above a boundary are pooled into one synthetic class with the
/// summed mean, the summed variance and the demand-weighted average price;
/// the reserve is then computed once per boundary with the boundary class's
/// price discounted against the pooled price, and clamped to the capacity.
/// Boundary 0 has an empty pool (its weighted price would divide by zero)
/// and is skipped outright, the output covers boundaries 1..n.
pub fn emsr_b(instance: &EmsrInstance) -> Result<Vec<f64>, InputError> {
    instance.check_lengths()?;

    let n = instance.nb_classes;
    let mut levels = Vec::with_capacity(n.saturating_sub(1));

    let mut pooled_mean = 0.0;
    let mut pooled_revenue = 0.0;
    let mut pooled_variance = 0.0;

    for i in 1..n {
        pooled_mean += instance.demand_means[i - 1];
        pooled_revenue += instance.demand_means[i - 1] * instance.prices[i - 1];
        pooled_variance += instance.demand_std_devs[i - 1] * instance.demand_std_devs[i - 1];

        let pooled_price = pooled_revenue / pooled_mean;
        let protected = reserve(
            pooled_mean,
            pooled_variance.sqrt(),
            instance.prices[i] / pooled_price,
            Some(instance.capacity),
        );

        levels.push(protected.max(0.0));
    }

    Ok(levels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textbook_instance() -> EmsrInstance {
        EmsrInstance {
            nb_classes: 4,
            prices: vec![1050.0, 567.0, 534.0, 520.0],
            demand_means: vec![17.3, 45.1, 39.6, 34.0],
            demand_std_devs: vec![5.8, 15.0, 13.2, 11.3],
            capacity: 136.0,
        }
    }

    #[test]
    fn textbook_protection_levels() {
        let levels = emsr_b(&textbook_instance()).unwrap();
        let expected = [16.717, 50.944, 83.155];

        assert_eq!(levels.len(), expected.len());
        for (level, expected) in levels.iter().zip(expected) {
            assert!((level - expected).abs() < 1e-2, "got {level}, expected {expected}");
        }
    }

    #[test]
    fn one_level_per_boundary() {
        let levels = emsr_b(&textbook_instance()).unwrap();
        assert_eq!(levels.len(), 3);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let mut instance = textbook_instance();
        instance.prices.push(500.0);
        assert!(emsr_b(&instance).is_err());
    }

    #[test]
    fn levels_never_exceed_capacity() {
        let mut instance = textbook_instance();
        instance.capacity = 60.0;
        let levels = emsr_b(&instance).unwrap();
        assert!(levels.iter().all(|l| *l <= 60.0));
    }

    #[test]
    fn first_boundary_matches_pairwise_formula() {
        // with a single class in the pool, both heuristics agree
        let instance = textbook_instance();
        let a = crate::protection::emsr_a(&instance).unwrap();
        let b = emsr_b(&instance).unwrap();
        assert!((a[0] - b[0]).abs() < 1e-9);
    }
}
