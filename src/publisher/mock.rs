use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::Mutex;

use super::{PublishError, Publisher};
use crate::question::Question;

/// A recording publisher for tests. Remembers every question it was asked
/// to publish, and can be told to fail each attempt.
#[derive(Default)]
pub struct MockPublisher {
    published: Mutex<Vec<Question>>,
    fail: bool,
}

impl MockPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A publisher whose every attempt fails with a canned API error.
    pub fn failing() -> Self {
        Self {
            published: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Every question passed to `publish` so far, in order.
    pub fn published(&self) -> Vec<Question> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl Publisher for MockPublisher {
    async fn publish(&self, question: &Question) -> Result<(), PublishError> {
        self.published.lock().unwrap().push(question.clone());
        if self.fail {
            return Err(PublishError::Api {
                status: StatusCode::BAD_GATEWAY,
                body: "mock publish failure".to_string(),
            });
        }
        Ok(())
    }
}
