use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use quiz_core::{Question, QuestionMeta};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::QuizConfig;
use crate::error::ProviderError;

/// Source of the question list for a quiz.
#[async_trait]
pub trait QuestionProvider: Send + Sync {
    /// Fetch the full question list in presentation order.
    async fn fetch_questions(&self) -> Result<Vec<Question>, ProviderError>;
}

//
// ─── HTTP PROVIDER ─────────────────────────────────────────────────────────────
//

/// Fetches questions from a trivia HTTP endpoint returning a JSON array.
#[derive(Clone, Debug)]
pub struct TriviaApiProvider {
    client: Client,
    url: String,
}

impl TriviaApiProvider {
    /// # Errors
    ///
    /// Returns `ProviderError::Http` if the HTTP client cannot be built.
    pub fn new(config: &QuizConfig) -> Result<Self, ProviderError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            url: config.api_url.clone(),
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl QuestionProvider for TriviaApiProvider {
    async fn fetch_questions(&self) -> Result<Vec<Question>, ProviderError> {
        debug!(url = %self.url, "requesting questions");
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "question request rejected");
            return Err(ProviderError::HttpStatus(response.status()));
        }

        let items: Vec<TriviaQuestionDto> = response.json().await.map_err(|err| {
            if err.is_decode() {
                ProviderError::Decode(err)
            } else {
                ProviderError::Http(err)
            }
        })?;
        Ok(items.into_iter().map(Question::from).collect())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TriviaQuestionDto {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    difficulty: Option<String>,
    correct_answer: String,
    #[serde(default)]
    incorrect_answers: Vec<String>,
    question: PromptDto,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PromptDto {
    Text { text: String },
    Plain(String),
}

impl From<TriviaQuestionDto> for Question {
    fn from(dto: TriviaQuestionDto) -> Self {
        let text = match dto.question {
            PromptDto::Text { text } | PromptDto::Plain(text) => text,
        };
        Question::new(text, dto.correct_answer, dto.incorrect_answers).with_meta(QuestionMeta {
            id: dto.id,
            category: dto.category,
            difficulty: dto.difficulty,
        })
    }
}

//
// ─── IN-MEMORY PROVIDER ────────────────────────────────────────────────────────
//

/// Provider serving a fixed list (or a fixed failure), counting requests.
#[derive(Debug)]
pub struct InMemoryQuestionProvider {
    response: Mutex<Result<Vec<Question>, String>>,
    requests: AtomicUsize,
}

impl InMemoryQuestionProvider {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            response: Mutex::new(Ok(questions)),
            requests: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: Mutex::new(Err(message.into())),
            requests: AtomicUsize::new(0),
        }
    }

    /// Replace what subsequent fetches return.
    pub fn set_questions(&self, questions: Vec<Question>) {
        *self.lock() = Ok(questions);
    }

    pub fn set_failure(&self, message: impl Into<String>) {
        *self.lock() = Err(message.into());
    }

    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Result<Vec<Question>, String>> {
        self.response
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl QuestionProvider for InMemoryQuestionProvider {
    async fn fetch_questions(&self) -> Result<Vec<Question>, ProviderError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.lock().clone().map_err(ProviderError::Unavailable)
    }
}
