use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct HealthOutput {
    pub status: String,
}

impl HealthOutput {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_owned(),
        }
    }
}
