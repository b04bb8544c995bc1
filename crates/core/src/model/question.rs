use serde::{Deserialize, Serialize};

//
// ─── QUESTION METADATA ─────────────────────────────────────────────────────────
//

/// Optional descriptive fields supplied by the question source.
///
/// Display-only: none of these affect scoring or answer order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionMeta {
    pub id: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
}

impl QuestionMeta {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.category.is_none() && self.difficulty.is_none()
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// One trivia item: a prompt, its canonical answer and zero or more distractors.
///
/// Questions are read-only once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    text: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
    #[serde(default, skip_serializing_if = "QuestionMeta::is_empty")]
    meta: QuestionMeta,
}

impl Question {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        correct_answer: impl Into<String>,
        incorrect_answers: Vec<String>,
    ) -> Self {
        Self {
            text: text.into(),
            correct_answer: correct_answer.into(),
            incorrect_answers,
            meta: QuestionMeta::default(),
        }
    }

    #[must_use]
    pub fn with_meta(mut self, meta: QuestionMeta) -> Self {
        self.meta = meta;
        self
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn incorrect_answers(&self) -> &[String] {
        &self.incorrect_answers
    }

    #[must_use]
    pub fn meta(&self) -> &QuestionMeta {
        &self.meta
    }

    /// Answer options in presentation order.
    ///
    /// The correct answer is always first, followed by the incorrect answers
    /// in their original order. Options are never shuffled.
    #[must_use]
    pub fn answer_options(&self) -> Vec<&str> {
        std::iter::once(self.correct_answer.as_str())
            .chain(self.incorrect_answers.iter().map(String::as_str))
            .collect()
    }

    /// Exact, case-sensitive comparison against the correct answer.
    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arithmetic() -> Question {
        Question::new("2+2?", "4", vec!["3".to_string(), "5".to_string()])
    }

    #[test]
    fn options_list_correct_answer_first() {
        assert_eq!(arithmetic().answer_options(), vec!["4", "3", "5"]);
    }

    #[test]
    fn options_without_distractors_hold_only_correct_answer() {
        let question = Question::new("Only one?", "Yes", Vec::new());
        assert_eq!(question.answer_options(), vec!["Yes"]);
    }

    #[test]
    fn correctness_is_exact_match() {
        let question = Question::new("Capital of France?", "Paris", vec!["Lyon".into()]);
        assert!(question.is_correct("Paris"));
        assert!(!question.is_correct("paris"));
        assert!(!question.is_correct("Paris "));
    }

    #[test]
    fn meta_is_omitted_from_json_when_empty() {
        let json = serde_json::to_string(&arithmetic()).unwrap();
        assert!(!json.contains("meta"), "unexpected meta in {json}");

        let with_meta = arithmetic().with_meta(QuestionMeta {
            category: Some("science".into()),
            ..QuestionMeta::default()
        });
        let json = serde_json::to_string(&with_meta).unwrap();
        let back: Question = serde_json::from_str(&json).unwrap();
        assert_eq!(back.meta().category.as_deref(), Some("science"));
    }
}
