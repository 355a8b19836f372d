use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{GenerateError, Generator};
use crate::config::Config;
use crate::question::Question;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default Gemini model when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-1.0-pro";

/// The fixed generation prompt. The answers are in French on purpose; the
/// output shape (`question`/`options`/`correctOptionId`) is what
/// [`Question`] decodes.
const PROMPT: &str = r#"
Génère une question de sondage sur la programmation informatique avec des options de réponses.

Les langages seront PHP, JavaScript et TypeScript.

Ta réponse doit être uniquement comme suit :

{
  "question": question,
  "options": ["answer1", "answer2"],
  "correctOptionId": The index of the correct answer in the options array.
}

La question doit être sur les fondamentaux des langages ainsi que des sujets moins connus.

Dans la question ainsi que les options, évite le formatage de code.

Tu dois être comme un recruteur posant des questions.

Les réponses doivent être brèves et concises.

Il doit y plusieurs choix de réponses mais une seule réponse correcte.

Les réponses doivent avoir au maximum 5 choix.

Les choix ne doivent pas dépasser 100 caractères.

Les questions doivent être spécifiques et non générales.

Les réponses doivent être en français.

Le tableau des options peut contenir de 2 à 5 options.
"#;

/// A question generator that calls the Gemini `generateContent` API.
pub struct GeminiGenerator {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiGenerator {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.gemini_api_key.clone(),
            model: config.model.clone(),
        }
    }

    /// Strictly decode the model's raw text into a [`Question`].
    /// Missing fields or malformed JSON fail; nothing is coerced.
    fn parse_question(text: &str) -> Result<Question, GenerateError> {
        let json = extract_json(text);
        serde_json::from_str(json).map_err(|source| GenerateError::Decode {
            raw: text.to_string(),
            source,
        })
    }
}

#[async_trait]
impl Generator for GeminiGenerator {
    async fn generate(&self) -> Result<Question, GenerateError> {
        let url = format!("{API_BASE}/models/{}:generateContent", self.model);
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(PROMPT.to_string()),
                }],
            }],
        };

        debug!(model = %self.model, "calling generation service");
        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerateError::Api { status, body });
        }

        let api_response: GenerateContentResponse = response.json().await?;

        // Join the text parts of the first candidate
        let text: String = api_response
            .candidates
            .first()
            .ok_or(GenerateError::EmptyResponse)?
            .content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect::<Vec<_>>()
            .join("");

        if text.is_empty() {
            return Err(GenerateError::EmptyResponse);
        }

        debug!(raw = %text, "generation service responded");
        Self::parse_question(&text)
    }
}

/// Extract JSON from text that may be wrapped in markdown code fences.
fn extract_json(text: &str) -> &str {
    let trimmed = text.trim();

    if let Some(after) = trimmed.strip_prefix("```json")
        && let Some(json) = after.strip_suffix("```")
    {
        return json.trim();
    }
    if let Some(after) = trimmed.strip_prefix("```")
        && let Some(json) = after.strip_suffix("```")
    {
        return json.trim();
    }

    trimmed
}

// --- API types ---

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}
