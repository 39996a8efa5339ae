/// The subset of a customer record the risk heuristic looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChurnFactors {
    pub age: i32,
    pub credit_score: i32,
    pub balance: f64,
    pub num_products: i32,
    pub has_insurance: bool,
    pub tenure: i32,
    pub is_active: bool,
}

/// Fixed-weight additive risk score, clamped to `[0, 1]`.
pub fn predict_churn(customer: &ChurnFactors) -> f64 {
    let mut risk_score = 0.0;

    // Age
    if customer.age > 60 {
        risk_score += 0.2;
    } else if customer.age < 30 {
        risk_score += 0.1;
    }

    // Credit score
    if customer.credit_score < 650 {
        risk_score += 0.3;
    } else if customer.credit_score < 750 {
        risk_score += 0.1;
    }

    if customer.balance < 1000.0 {
        risk_score += 0.2;
    }

    // Product usage
    if customer.num_products == 1 {
        risk_score += 0.2;
    } else if customer.num_products > 3 {
        risk_score -= 0.1;
    }

    if !customer.has_insurance {
        risk_score += 0.1;
    }

    // Tenure
    if customer.tenure < 2 {
        risk_score += 0.3;
    } else if customer.tenure > 5 {
        risk_score -= 0.2;
    }

    if !customer.is_active {
        risk_score += 0.4;
    }

    f64::clamp(risk_score, 0.0, 1.0)
}
