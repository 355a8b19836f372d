use async_trait::async_trait;
use tracing::debug;

use super::{PublishError, Publisher};
use crate::config::Config;
use crate::question::Question;

const API_BASE: &str = "https://api.telegram.org";

/// A publisher that posts questions as Telegram quiz polls via `sendPoll`.
pub struct TelegramPublisher {
    http: reqwest::Client,
    bot_token: String,
    chat_id: String,
}

impl TelegramPublisher {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            bot_token: config.bot_token.clone(),
            chat_id: config.chat_id.clone(),
        }
    }

    /// Build the form-encoded `sendPoll` payload. Telegram expects the
    /// options as a JSON-encoded array inside the form field.
    fn poll_form(
        chat_id: &str,
        question: &Question,
    ) -> Result<[(&'static str, String); 4], PublishError> {
        Ok([
            ("chat_id", chat_id.to_string()),
            ("question", question.question.clone()),
            ("options", serde_json::to_string(&question.options)?),
            ("correct_option_id", question.correct_option_id.to_string()),
        ])
    }
}

#[async_trait]
impl Publisher for TelegramPublisher {
    async fn publish(&self, question: &Question) -> Result<(), PublishError> {
        // The bot credential rides in the URL path, per the Bot API.
        let url = format!("{API_BASE}/bot{}/sendPoll", self.bot_token);
        let form = Self::poll_form(&self.chat_id, question)?;

        let response = self.http.post(&url).form(&form).send().await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(PublishError::Api { status, body });
        }

        debug!(response = %body, "poll submitted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question() -> Question {
        Question {
            question: "Quelle méthode JavaScript fusionne deux tableaux ?".to_string(),
            options: vec!["concat".to_string(), "merge".to_string(), "join".to_string()],
            correct_option_id: 0,
        }
    }

    #[test]
    fn form_carries_all_four_fields() {
        let form = TelegramPublisher::poll_form("-100123", &sample_question()).unwrap();
        let keys: Vec<&str> = form.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            ["chat_id", "question", "options", "correct_option_id"]
        );
    }

    #[test]
    fn form_options_are_json_encoded() {
        let form = TelegramPublisher::poll_form("-100123", &sample_question()).unwrap();
        let (_, options) = &form[2];
        assert_eq!(options, r#"["concat","merge","join"]"#);
    }

    #[test]
    fn form_correct_option_id_is_decimal_string() {
        let mut question = sample_question();
        question.correct_option_id = 2;
        let form = TelegramPublisher::poll_form("-100123", &question).unwrap();
        let (_, id) = &form[3];
        assert_eq!(id, "2");
    }

    #[test]
    fn form_preserves_chat_id_verbatim() {
        let form = TelegramPublisher::poll_form("@mychannel", &sample_question()).unwrap();
        let (_, chat_id) = &form[0];
        assert_eq!(chat_id, "@mychannel");
    }
}
