use crate::instance::{EmsrInstance, InputError};
use crate::protection::quantile::reserve;

/// EMSR-a protection levels, one per class boundary.
///
/// Each ordered pair (i, j) with i < j gets its own reserve: class i's demand
/// alone, facing the discount ratio price[j] / price[i]. The protection level
/// at boundary j is the column sum of those pairwise reserves. The pairwise
/// entries stay uncapped: the classic formulation threads the capacity into
/// the formula but never clamps with it, and capping them here would break
/// parity with the published tables.
pub fn emsr_a(instance: &EmsrInstance) -> Result<Vec<f64>, InputError> {
    instance.check_lengths()?;

    let n = instance.nb_classes;
    let matrix = pairwise_reserves(instance);

    let mut levels = Vec::with_capacity(n.saturating_sub(1));
    for j in 1..n {
        let protected = (0..j).map(|i| matrix[i][j]).sum::<f64>();
        levels.push(protected.max(0.0));
    }

    Ok(levels)
}

/// The full pairwise reserve matrix. Only the upper triangle is meaningful,
/// entries with i >= j stay at zero.
pub(crate) fn pairwise_reserves(instance: &EmsrInstance) -> Vec<Vec<f64>> {
    let n = instance.nb_classes;
    let mut matrix = vec![vec![0.0; n]; n];

    for i in 0..n {
        for j in (i + 1)..n {
            matrix[i][j] = reserve(
                instance.demand_means[i],
                instance.demand_std_devs[i],
                instance.prices[j] / instance.prices[i],
                None,
            );
        }
    }

    matrix
}
