//! This module defines an abstract representation of an EMSR instance.

use serde::{Serialize, Deserialize};
use thiserror::Error;

/// A nested fare-class inventory problem: one shared capacity and a set of
/// demand classes ordered by strictly decreasing price, so index 0 is the
/// highest fare. Demand for each class is Normal(mean, std_dev).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmsrInstance {
    pub nb_classes: usize,
    pub prices: Vec<f64>,
    pub demand_means: Vec<f64>,
    pub demand_std_devs: Vec<f64>,
    pub capacity: f64,
}

/// The per-class vectors must all have exactly `nb_classes` entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected} entries per class vector, got {prices} prices, {means} means, {std_devs} std deviations")]
pub struct InputError {
    pub expected: usize,
    pub prices: usize,
    pub means: usize,
    pub std_devs: usize,
}

impl EmsrInstance {
    pub fn check_lengths(&self) -> Result<(), InputError> {
        if self.prices.len() != self.nb_classes
            || self.demand_means.len() != self.nb_classes
            || self.demand_std_devs.len() != self.nb_classes {
            Err(InputError {
                expected: self.nb_classes,
                prices: self.prices.len(),
                means: self.demand_means.len(),
                std_devs: self.demand_std_devs.len(),
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_lengths_pass() {
        let instance = EmsrInstance {
            nb_classes: 2,
            prices: vec![800.0, 500.0],
            demand_means: vec![20.0, 40.0],
            demand_std_devs: vec![5.0, 10.0],
            capacity: 100.0,
        };
        assert!(instance.check_lengths().is_ok());
    }

    #[test]
    fn mismatched_lengths_fail() {
        let instance = EmsrInstance {
            nb_classes: 4,
            prices: vec![1050.0, 567.0, 534.0, 520.0],
            demand_means: vec![17.3, 45.1, 39.6],
            demand_std_devs: vec![5.8, 15.0, 13.2, 11.3],
            capacity: 136.0,
        };
        let err = instance.check_lengths().unwrap_err();
        assert_eq!(err.expected, 4);
        assert_eq!(err.means, 3);
    }
}
