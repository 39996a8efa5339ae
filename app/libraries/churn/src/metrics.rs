use crate::risk::HIGH_RISK_THRESHOLD;
use serde::{Deserialize, Serialize};

/// Anything that already carries a churn probability.
pub trait Scored {
    fn is_active(&self) -> bool;
    fn churn_probability(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChurnMetrics {
    pub total_customers: usize,
    pub active_customers: usize,
    pub high_risk_customers: usize,
    pub average_churn_probability: f64,
}

/// Dashboard summary over a scored collection. An empty collection reports
/// zero everywhere, including the average.
pub fn calculate_metrics<T: Scored>(customers: &[T]) -> ChurnMetrics {
    let total_customers = customers.len();
    if total_customers == 0 {
        return ChurnMetrics::default();
    }
    let active_customers = customers.iter().filter(|c| c.is_active()).count();
    let high_risk_customers = customers
        .iter()
        .filter(|c| c.churn_probability() > HIGH_RISK_THRESHOLD)
        .count();
    let sum: f64 = customers.iter().map(Scored::churn_probability).sum();
    ChurnMetrics {
        total_customers,
        active_customers,
        high_risk_customers,
        average_churn_probability: round_2(sum / total_customers as f64),
    }
}

fn round_2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
