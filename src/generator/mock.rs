use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{GenerateError, Generator};
use crate::question::Question;

/// A scripted generator for tests. Returns pre-defined results in order
/// and counts how many times it was called.
pub struct MockGenerator {
    script: Mutex<VecDeque<Result<Question, GenerateError>>>,
    calls: AtomicUsize,
}

impl MockGenerator {
    pub fn new(script: Vec<Result<Question, GenerateError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// How many times `generate` has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Generator for MockGenerator {
    async fn generate(&self) -> Result<Question, GenerateError> {
        let i = self.calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("MockGenerator: script exhausted (called {} times)", i + 1))
    }
}
