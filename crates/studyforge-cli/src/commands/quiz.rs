//! Quiz command implementation.

use crate::cli::QuizArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use studyforge_domain::traits::CompletionProvider;
use studyforge_extract::{Generator, QuizRequest};

/// Execute the quiz command.
pub async fn execute_quiz<P>(
    args: QuizArgs,
    generator: &Generator<P>,
    formatter: &Formatter,
) -> Result<()>
where
    P: CompletionProvider + Send + Sync + 'static,
{
    if args.questions == 0 {
        return Err(CliError::InvalidInput(
            "Question count must be at least 1".to_string(),
        ));
    }

    let context = super::read_context(args.input.as_deref())?;

    let request = QuizRequest {
        context,
        questions: args.questions,
        difficulty: args.difficulty.into(),
        tonality: args.tonality.into(),
    };

    let output = generator.quiz(request).await?;
    println!("{}", formatter.format_quiz(&output, args.show_answers)?);

    Ok(())
}
