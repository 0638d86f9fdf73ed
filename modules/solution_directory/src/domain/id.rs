//! Short identifier generation

use rand::{distr::Alphanumeric, Rng};

/// Length of generated company and solution ids
pub const SHORT_ID_LEN: usize = 8;

/// Source of candidate ids. Uniqueness is checked by storage on insert.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Uniform random ids over `[A-Za-z0-9]`
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(SHORT_ID_LEN)
            .map(char::from)
            .collect()
    }
}

/// Whether `id` has the shape of a generated id
pub fn is_short_id(id: &str) -> bool {
    id.len() == SHORT_ID_LEN && id.bytes().all(|b| b.is_ascii_alphanumeric())
}
