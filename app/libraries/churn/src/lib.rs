//! Churn risk heuristics shared by the API and the seeding tool.
//!
//! Nothing here touches storage: scores are derived on every read and never
//! persisted, so changing the weights re-scores every customer.

pub mod metrics;
pub mod risk;
pub mod score;

pub use metrics::{ChurnMetrics, Scored, calculate_metrics};
pub use risk::{HIGH_RISK_THRESHOLD, MEDIUM_RISK_THRESHOLD, RiskType};
pub use score::{ChurnFactors, predict_churn};
