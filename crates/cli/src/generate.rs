//! Synthetic rosters for demos and benchmarks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use roster_loader::{Employee, EmployeeId};

const FIRST_NAMES: [&str; 12] = [
    "Ann", "Bob", "Carmen", "Dev", "Erin", "Femi", "Gus", "Hana", "Ivan", "Jia", "Kofi", "Lena",
];
const LAST_NAMES: [&str; 10] = [
    "Lee", "Ray", "Diaz", "Patel", "Bobbitt", "Ade", "Novak", "Sato", "Olsen", "Kim",
];
const DEPARTMENTS: [&str; 6] = ["Engineering", "Sales", "Marketing", "Support", "Finance", "HR"];

fn pick<'a>(rng: &mut StdRng, values: &[&'a str]) -> &'a str {
    values[rng.random_range(0..values.len())]
}

/// Build `count` employees with ids 1..=count from a seeded generator.
///
/// The same seed always produces the same roster.
pub fn generate_roster(count: usize, seed: u64) -> Vec<Employee> {
    let mut rng = StdRng::seed_from_u64(seed);
    (1..=count)
        .map(|n| {
            let first = pick(&mut rng, &FIRST_NAMES);
            let last = pick(&mut rng, &LAST_NAMES);
            let department = pick(&mut rng, &DEPARTMENTS);
            let email = format!("{}.{}{}@example.com", first.to_lowercase(), last.to_lowercase(), n);
            Employee::new(
                n as EmployeeId,
                first,
                last,
                email,
                department,
                rng.random_range(1..=5),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_roster() {
        let roster = generate_roster(25, 7);

        assert_eq!(roster.len(), 25);
        assert_eq!(roster[0].id, 1);
        assert!(roster.iter().all(|e| matches!(e.performance_rating, Some(1..=5))));
        assert!(roster_loader::parser::validate(&roster).is_ok());
    }

    #[test]
    fn test_generate_is_deterministic_per_seed() {
        assert_eq!(generate_roster(10, 42), generate_roster(10, 42));
    }
}
