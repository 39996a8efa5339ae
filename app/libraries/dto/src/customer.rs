use app_churn::{RiskType, Scored, predict_churn};
use app_error::AppError;
use app_schema::customer::Customer;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCustomerInput {
    pub id: String,
    pub name: String,
    pub age: i32,
    pub credit_score: i32,
    pub balance: f64,
    pub num_products: i32,
    pub has_insurance: bool,
    pub tenure: i32,
    pub is_active: bool,
    pub last_transaction: NaiveDate,
    pub location: String,
}

impl PostCustomerInput {
    /// Checks field ranges and turns the payload into a storable row.
    pub fn into_customer(self) -> Result<Customer, AppError> {
        let id = self.id.trim();
        if id.is_empty() {
            return Err(AppError::bad_request("Customer id is required"));
        }
        if self.name.trim().is_empty() {
            return Err(AppError::bad_request("Customer name is required"));
        }
        if self.age < 0 {
            return Err(AppError::bad_request("age must not be negative"));
        }
        if self.credit_score < 0 {
            return Err(AppError::bad_request("creditScore must not be negative"));
        }
        if !self.balance.is_finite() {
            return Err(AppError::bad_request("balance must be a finite number"));
        }
        if self.num_products < 1 {
            return Err(AppError::bad_request("numProducts must be at least 1"));
        }
        if self.tenure < 0 {
            return Err(AppError::bad_request("tenure must not be negative"));
        }
        Ok(Customer {
            id: id.to_owned(),
            name: self.name,
            age: self.age,
            credit_score: self.credit_score,
            balance: self.balance,
            num_products: self.num_products,
            has_insurance: self.has_insurance,
            tenure: self.tenure,
            is_active: self.is_active,
            last_transaction: self.last_transaction,
            location: self.location,
        })
    }
}

/// A stored customer plus its score, computed at read time.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCustomer {
    #[serde(flatten)]
    pub customer: Customer,
    pub churn_probability: f64,
    pub risk_level: RiskType,
}

impl From<Customer> for ScoredCustomer {
    fn from(customer: Customer) -> Self {
        let churn_probability = predict_churn(&customer.factors());
        Self {
            customer,
            churn_probability,
            risk_level: RiskType::from_probability(churn_probability),
        }
    }
}

impl Scored for ScoredCustomer {
    fn is_active(&self) -> bool {
        self.customer.is_active
    }

    fn churn_probability(&self) -> f64 {
        self.churn_probability
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn payload() -> serde_json::Value {
        json!({
            "id": "CUS00042",
            "name": "Maria Garcia",
            "age": 45,
            "creditScore": 800,
            "balance": 5000.0,
            "numProducts": 2,
            "hasInsurance": true,
            "tenure": 3,
            "isActive": false,
            "lastTransaction": "2024-05-01",
            "location": "Houston"
        })
    }

    #[test]
    fn scored_customer_flattens_fields() {
        let input: PostCustomerInput = serde_json::from_value(payload()).unwrap();
        let scored = ScoredCustomer::from(input.into_customer().unwrap());
        let json = serde_json::to_value(&scored).unwrap();
        assert_eq!(json["id"], "CUS00042");
        assert_eq!(json["creditScore"], 800);
        assert!((json["churnProbability"].as_f64().unwrap() - 0.4).abs() < 1e-9);
        assert_eq!(json["riskLevel"], "low");
    }

    #[test]
    fn rejects_out_of_range_fields() {
        for (field, value) in [
            ("id", json!("  ")),
            ("name", json!("")),
            ("age", json!(-1)),
            ("numProducts", json!(0)),
            ("tenure", json!(-3)),
        ] {
            let mut body = payload();
            body[field] = value;
            let input: PostCustomerInput = serde_json::from_value(body).unwrap();
            let err = input.into_customer().unwrap_err();
            assert_eq!(err.status.as_u16(), 400, "{field} should be rejected");
        }
    }

    #[test]
    fn malformed_date_does_not_parse() {
        let mut body = payload();
        body["lastTransaction"] = json!("yesterday");
        assert!(serde_json::from_value::<PostCustomerInput>(body).is_err());
    }
}
