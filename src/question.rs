use serde::{Deserialize, Serialize};

/// A multiple-choice trivia question, one marked answer.
///
/// This is the shape the generator is prompted to emit (`correctOptionId`
/// on the wire) and the shape the publisher turns into a Telegram poll.
/// The prompt contract promises 2–5 options of at most 100 characters and
/// an in-bounds correct index; none of that is enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub correct_option_id: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_wire_format() {
        let json = r#"{
            "question": "Quelle fonction PHP retourne le type d'une variable ?",
            "options": ["gettype", "typeof", "var_type"],
            "correctOptionId": 0
        }"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.options.len(), 3);
        assert_eq!(question.correct_option_id, 0);
    }

    #[test]
    fn serializes_back_to_camel_case() {
        let question = Question {
            question: "q".to_string(),
            options: vec!["a".to_string(), "b".to_string()],
            correct_option_id: 1,
        };
        let json = serde_json::to_string(&question).unwrap();
        assert!(json.contains("correctOptionId"));
    }
}
