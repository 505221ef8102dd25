//! Core generation pipeline

use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::prompt::{
    FlashcardPromptBuilder, NotesPromptBuilder, OutlinePromptBuilder, QuizPromptBuilder,
    FLASHCARD_SYSTEM, NOTES_SYSTEM, OUTLINE_SYSTEM, QUIZ_SYSTEM,
};
use crate::types::{
    FlashcardOutput, FlashcardRequest, GenerationMetadata, MindmapOutput, MindmapRequest,
    NotesOutput, NotesRequest, QuizOutput, QuizRequest,
};
use crate::{cornell, flashcard, outline, quiz, stats};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;
use studyforge_domain::traits::CompletionProvider;
use studyforge_domain::CompletionRequest;
use tokio::time::timeout;
use tracing::{debug, info};

/// The Generator drives one study-artifact flow end to end: validate the
/// context, build the prompt, call the provider under a timeout, and run
/// the matching extractor over the raw response.
///
/// Extractors are stateless; a zero-item artifact is a valid outcome and
/// is returned as-is, never as an error.
pub struct Generator<P>
where
    P: CompletionProvider,
{
    provider: Arc<P>,
    config: GeneratorConfig,
    next_request_id: AtomicU64,
}

impl<P> Generator<P>
where
    P: CompletionProvider + Send + Sync + 'static,
{
    /// Create a new Generator
    pub fn new(provider: P, config: GeneratorConfig) -> Self {
        Self {
            provider: Arc::new(provider),
            config,
            next_request_id: AtomicU64::new(0),
        }
    }

    /// The active configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate Cornell notes with reduction statistics
    pub async fn notes(&self, request: NotesRequest) -> Result<NotesOutput, GenerateError> {
        self.validate_context(&request.context)?;

        let prompt = NotesPromptBuilder::new(&request.context)
            .with_tone(request.tone)
            .with_length(request.length)
            .build();

        let (raw, metadata) = self.run(NOTES_SYSTEM, prompt).await?;

        let document = cornell::extract(&raw);
        info!(
            "Cornell extraction recovered {} cues, {} note lines",
            document.cues.len(),
            document.notes.len()
        );

        let stats = stats::compute(&request.context, &document.notes_text());

        Ok(NotesOutput {
            document,
            stats,
            metadata,
        })
    }

    /// Generate a multiple-choice quiz
    pub async fn quiz(&self, request: QuizRequest) -> Result<QuizOutput, GenerateError> {
        self.validate_context(&request.context)?;

        let prompt = QuizPromptBuilder::new(&request.context, request.questions)
            .with_difficulty(request.difficulty)
            .with_tonality(request.tonality)
            .build();

        let (raw, metadata) = self.run(QUIZ_SYSTEM, prompt).await?;

        let quiz = quiz::extract(&raw);
        info!("Quiz extraction recovered {} questions", quiz.len());

        Ok(QuizOutput { quiz, metadata })
    }

    /// Generate a flashcard deck
    pub async fn flashcards(
        &self,
        request: FlashcardRequest,
    ) -> Result<FlashcardOutput, GenerateError> {
        self.validate_context(&request.context)?;

        let prompt = FlashcardPromptBuilder::new(&request.context, request.cards)
            .with_difficulty(request.difficulty)
            .with_tonality(request.tonality)
            .build();

        let (raw, metadata) = self.run(FLASHCARD_SYSTEM, prompt).await?;

        let deck = flashcard::extract(&raw);
        info!("Flashcard extraction recovered {} cards", deck.len());

        Ok(FlashcardOutput { deck, metadata })
    }

    /// Generate a mindmap outline
    pub async fn mindmap(&self, request: MindmapRequest) -> Result<MindmapOutput, GenerateError> {
        self.validate_context(&request.context)?;

        let prompt = OutlinePromptBuilder::new(&request.context).build();

        let (raw, metadata) = self.run(OUTLINE_SYSTEM, prompt).await?;

        let outline = outline::extract(&raw);
        info!("Outline extraction recovered {} nodes", outline.len());

        Ok(MindmapOutput { outline, metadata })
    }

    /// Validate the context before any provider call is made
    fn validate_context(&self, context: &str) -> Result<(), GenerateError> {
        if context.trim().is_empty() {
            return Err(GenerateError::EmptyContext);
        }
        if context.len() > self.config.max_context_length {
            return Err(GenerateError::ContextTooLong(
                context.len(),
                self.config.max_context_length,
            ));
        }
        Ok(())
    }

    /// Call the provider under the configured timeout and stamp metadata
    async fn run(
        &self,
        system: &str,
        prompt: String,
    ) -> Result<(String, GenerationMetadata), GenerateError> {
        let request_id = self.next_request_id.fetch_add(1, Ordering::SeqCst) + 1;
        let start = Instant::now();

        debug!(request_id, "Prompt length: {} chars", prompt.len());

        let completion = CompletionRequest::new(system, prompt)
            .with_temperature(self.config.temperature)
            .with_max_tokens(self.config.max_tokens);

        let raw = timeout(self.config.request_timeout(), self.call_provider(completion))
            .await
            .map_err(|_| GenerateError::Timeout)??;

        let metadata = GenerationMetadata {
            request_id,
            model: self.provider.model().to_string(),
            response_chars: raw.chars().count(),
            elapsed_ms: start.elapsed().as_millis() as u64,
        };

        debug!(
            request_id,
            "Response length: {} chars in {} ms", metadata.response_chars, metadata.elapsed_ms
        );

        Ok((raw, metadata))
    }

    /// Call the provider on a blocking task since the trait is not async
    async fn call_provider(&self, completion: CompletionRequest) -> Result<String, GenerateError> {
        let provider = Arc::clone(&self.provider);

        tokio::task::spawn_blocking(move || {
            provider
                .complete(&completion)
                .map_err(|e| GenerateError::Provider(e.to_string()))
        })
        .await
        .map_err(|e| GenerateError::Provider(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studyforge_llm::MockProvider;

    fn create_generator(response: &str) -> Generator<MockProvider> {
        Generator::new(MockProvider::new(response), GeneratorConfig::default())
    }

    #[tokio::test]
    async fn test_empty_context_rejected_before_provider_call() {
        let provider = MockProvider::new("anything");
        let generator = Generator::new(provider.clone(), GeneratorConfig::default());

        let result = generator.notes(NotesRequest::new("   ")).await;
        assert!(matches!(result, Err(GenerateError::EmptyContext)));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_oversized_context_rejected_before_provider_call() {
        let provider = MockProvider::new("anything");
        let generator = Generator::new(provider.clone(), GeneratorConfig::default());

        let context = "a".repeat(20_000);
        let result = generator.quiz(QuizRequest::new(context, 5)).await;
        assert!(matches!(result, Err(GenerateError::ContextTooLong(20_000, 15_000))));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_request_ids_increase() {
        let generator = create_generator("- A\n  - B");

        let first = generator
            .mindmap(MindmapRequest::new("ctx"))
            .await
            .unwrap();
        let second = generator
            .mindmap(MindmapRequest::new("ctx"))
            .await
            .unwrap();

        assert_eq!(first.metadata.request_id, 1);
        assert_eq!(second.metadata.request_id, 2);
    }

    #[tokio::test]
    async fn test_garbage_response_yields_empty_artifact() {
        let generator = create_generator("complete nonsense with no structure");

        let output = generator.quiz(QuizRequest::new("ctx", 3)).await.unwrap();
        assert!(output.quiz.is_empty());
    }

    #[tokio::test]
    async fn test_provider_error_is_wrapped() {
        let mut provider = MockProvider::default();
        provider.add_error("doomed");
        let generator = Generator::new(provider, GeneratorConfig::default());

        let result = generator.notes(NotesRequest::new("doomed context")).await;
        assert!(matches!(result, Err(GenerateError::Provider(_))));
    }
}
