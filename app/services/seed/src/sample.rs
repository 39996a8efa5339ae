use app_schema::customer::Customer;
use chrono::{Duration, NaiveDate};
use rand::Rng;

const NAMES: [&str; 20] = [
    "Emma Thompson",
    "James Wilson",
    "Sarah Davis",
    "Michael Brown",
    "Lisa Anderson",
    "David Martinez",
    "Jennifer Taylor",
    "Robert Johnson",
    "Maria Garcia",
    "William Lee",
    "Patricia Moore",
    "John Smith",
    "Linda Williams",
    "Richard Miller",
    "Elizabeth Jones",
    "Thomas White",
    "Susan Brown",
    "Joseph Davis",
    "Margaret Wilson",
    "Charles Taylor",
];

const LOCATIONS: [&str; 5] = ["New York", "Los Angeles", "Chicago", "Houston", "Phoenix"];

pub fn sample_id(index: usize) -> String {
    format!("CUS{:05}", index + 1)
}

/// Fabricated dashboard customers: ids `CUS00001`.., names cycle through a
/// fixed list, the last transaction falls within 30 days before `today`.
pub fn sample_customers<R: Rng>(
    rng: &mut R,
    count: usize,
    today: NaiveDate,
) -> Vec<Customer> {
    (0..count)
        .map(|i| Customer {
            id: sample_id(i),
            name: NAMES[i % NAMES.len()].to_owned(),
            age: rng.gen_range(25..70),
            credit_score: rng.gen_range(580..850),
            balance: f64::from(rng.gen_range(1000..100_000_i32)),
            num_products: rng.gen_range(1..=4),
            has_insurance: rng.gen_bool(0.5),
            tenure: rng.gen_range(0..20),
            is_active: rng.gen_bool(0.8),
            last_transaction: today - Duration::days(rng.gen_range(0..30)),
            location: LOCATIONS[rng.gen_range(0..LOCATIONS.len())].to_owned(),
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use app_dto::customer::PostCustomerInput;
    use rand::{SeedableRng, rngs::StdRng};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
    }

    #[test]
    fn ids_and_names_follow_dashboard_layout() {
        let mut rng = StdRng::seed_from_u64(7);
        let customers = sample_customers(&mut rng, 25, today());
        assert_eq!(customers.len(), 25);
        assert_eq!(customers[0].id, "CUS00001");
        assert_eq!(customers[19].id, "CUS00020");
        assert_eq!(customers[0].name, "Emma Thompson");
        assert_eq!(customers[20].name, "Emma Thompson");
    }

    #[test]
    fn fields_stay_in_range_and_validate() {
        let mut rng = StdRng::seed_from_u64(42);
        for c in sample_customers(&mut rng, 200, today()) {
            assert!((25..70).contains(&c.age));
            assert!((580..850).contains(&c.credit_score));
            assert!((1000.0..100_000.0).contains(&c.balance));
            assert!((1..=4).contains(&c.num_products));
            assert!((0..20).contains(&c.tenure));
            assert!(c.last_transaction <= today());
            assert!(c.last_transaction > today() - Duration::days(30));
            assert!(LOCATIONS.contains(&c.location.as_str()));

            let input = PostCustomerInput {
                id: c.id.clone(),
                name: c.name.clone(),
                age: c.age,
                credit_score: c.credit_score,
                balance: c.balance,
                num_products: c.num_products,
                has_insurance: c.has_insurance,
                tenure: c.tenure,
                is_active: c.is_active,
                last_transaction: c.last_transaction,
                location: c.location.clone(),
            };
            assert_eq!(input.into_customer().unwrap(), c);
        }
    }

    #[test]
    fn same_seed_same_customers() {
        let a = sample_customers(&mut StdRng::seed_from_u64(1), 10, today());
        let b = sample_customers(&mut StdRng::seed_from_u64(1), 10, today());
        assert_eq!(a, b);
    }
}
