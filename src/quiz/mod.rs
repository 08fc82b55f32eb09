//! Quiz selector: picks the next unseen question for a play session.

use crate::domain::Question;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::fmt;
use std::sync::Mutex;

/// Source of randomness for quiz selection.
///
/// Implementations return an index in `0..len`, or `None` when `len` is 0.
pub trait QuestionPicker: Send + Sync + fmt::Debug {
    fn pick(&self, len: usize) -> Option<usize>;
}

/// Picker backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl QuestionPicker for RandomPicker {
    fn pick(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(rand::thread_rng().gen_range(0..len))
    }
}

/// Deterministic picker for reproducible sessions and tests.
#[derive(Debug)]
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl QuestionPicker for SeededPicker {
    fn pick(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        Some(rng.gen_range(0..len))
    }
}

/// Pick one question uniformly at random among those not in `previous`.
pub fn select_next(
    candidates: Vec<Question>,
    previous: &HashSet<i64>,
    picker: &dyn QuestionPicker,
) -> Option<Question> {
    let mut unseen: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();

    let idx = picker.pick(unseen.len())?;
    Some(unseen.swap_remove(idx))
}
