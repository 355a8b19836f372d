use std::sync::Arc;
use tracing::{error, info, warn};

use crate::generator::Generator;
use crate::publisher::Publisher;

/// Total generation attempts per trigger: the first pass plus one retry.
const MAX_ATTEMPTS: usize = 2;

/// How a run ended. Never surfaced to the HTTP caller; the handler answers
/// the same way regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A publish was attempted. A failed submission still counts: the
    /// terminal step is never retried.
    Published,
    /// Every generation attempt failed or came back empty.
    Failed,
}

/// One generate-and-publish pass. Wires a [`Generator`] to a [`Publisher`]
/// with a single bounded retry around generation.
pub struct Orchestrator {
    generator: Arc<dyn Generator>,
    publisher: Arc<dyn Publisher>,
}

impl Orchestrator {
    pub fn new(generator: Arc<dyn Generator>, publisher: Arc<dyn Publisher>) -> Self {
        Self {
            generator,
            publisher,
        }
    }

    /// Run the full sequence: generate, validate, publish. A failed or
    /// empty generation re-runs the whole sequence once; a failed publish
    /// is logged and dropped.
    pub async fn run(&self) -> Outcome {
        for attempt in 1..=MAX_ATTEMPTS {
            match self.generator.generate().await {
                Ok(question)
                    if question.question.is_empty() || question.options.is_empty() =>
                {
                    warn!(attempt, "no question or options generated");
                }
                Ok(question) => {
                    info!(
                        question = %question.question,
                        options = question.options.len(),
                        correct_option_id = question.correct_option_id,
                        "question generated"
                    );
                    // Terminal step: a retry here would re-run generation
                    // too, so the error is logged and dropped.
                    if let Err(err) = self.publisher.publish(&question).await {
                        warn!(error = %err, "failed to publish poll");
                    }
                    return Outcome::Published;
                }
                Err(err) => {
                    warn!(attempt, error = %err, "question generation failed");
                }
            }
            if attempt < MAX_ATTEMPTS {
                info!("retrying");
            }
        }

        error!("no poll published after {MAX_ATTEMPTS} attempts");
        Outcome::Failed
    }
}
