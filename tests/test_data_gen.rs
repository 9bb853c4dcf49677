//! Deterministic data generators shared by the integration tests.
#![allow(dead_code)]

/// Small linear congruential generator; enough for reproducible fixtures.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Lcg(seed)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }

    pub fn below(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound
    }
}

/// `len` integers drawn from `0..bound`.
pub fn generate_numbers(seed: u64, len: usize, bound: u32) -> Vec<i64> {
    let mut rng = Lcg::new(seed);
    (0..len).map(|_| rng.below(bound) as i64).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: &str, age: u32) -> Self {
        Person {
            name: name.to_string(),
            age,
        }
    }
}

pub fn people() -> Vec<Person> {
    vec![
        Person::new("Alice", 30),
        Person::new("Bob", 25),
        Person::new("Charlie", 35),
        Person::new("Alice", 40),
        Person::new("Eve", 28),
    ]
}

/// `(key, position)` rows with keys drawn from `0..keys`, so duplicates are common.
pub fn generate_keyed_rows(seed: u64, len: usize, keys: u32) -> Vec<(u32, usize)> {
    let mut rng = Lcg::new(seed);
    (0..len).map(|pos| (rng.below(keys), pos)).collect()
}
