//! Flashcards command implementation.

use crate::cli::FlashcardArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use studyforge_domain::traits::CompletionProvider;
use studyforge_extract::{FlashcardRequest, Generator};

/// Execute the flashcards command.
pub async fn execute_flashcards<P>(
    args: FlashcardArgs,
    generator: &Generator<P>,
    formatter: &Formatter,
) -> Result<()>
where
    P: CompletionProvider + Send + Sync + 'static,
{
    if args.cards == 0 {
        return Err(CliError::InvalidInput(
            "Card count must be at least 1".to_string(),
        ));
    }

    let context = super::read_context(args.input.as_deref())?;

    let request = FlashcardRequest {
        context,
        cards: args.cards,
        difficulty: args.difficulty.into(),
        tonality: args.tonality.into(),
    };

    let output = generator.flashcards(request).await?;
    println!("{}", formatter.format_flashcards(&output)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{DifficultyArg, TonalityArg};
    use crate::config::OutputFormat;
    use studyforge_extract::GeneratorConfig;
    use studyforge_llm::MockProvider;

    #[tokio::test]
    async fn test_zero_cards_rejected() {
        let generator = Generator::new(MockProvider::new("ignored"), GeneratorConfig::default());
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let args = FlashcardArgs {
            input: None,
            cards: 0,
            difficulty: DifficultyArg::Normal,
            tonality: TonalityArg::Standard,
        };

        let result = execute_flashcards(args, &generator, &formatter).await;
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
