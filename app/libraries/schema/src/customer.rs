use app_churn::ChurnFactors;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
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

impl Customer {
    #[inline]
    pub fn select_base() -> &'static str {
        include_str!("../../../SQL/customers/select_base.sql")
    }

    #[inline]
    pub fn insert_query() -> &'static str {
        include_str!("../../../SQL/customers/insert.sql")
    }

    #[inline]
    pub fn create_table() -> &'static str {
        include_str!("../../../SQL/init/customers.sql")
    }

    pub fn factors(&self) -> ChurnFactors {
        ChurnFactors {
            age: self.age,
            credit_score: self.credit_score,
            balance: self.balance,
            num_products: self.num_products,
            has_insurance: self.has_insurance,
            tenure: self.tenure,
            is_active: self.is_active,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn camel_case_wire_format() {
        let customer = Customer {
            id: "CUS00001".into(),
            name: "Emma Thompson".into(),
            age: 34,
            credit_score: 712,
            balance: 1520.5,
            num_products: 2,
            has_insurance: true,
            tenure: 3,
            is_active: false,
            last_transaction: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            location: "Chicago".into(),
        };
        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["creditScore"], 712);
        assert_eq!(json["numProducts"], 2);
        assert_eq!(json["hasInsurance"], true);
        assert_eq!(json["lastTransaction"], "2024-03-09");
        assert!(!customer.factors().is_active);
    }
}
