//! Notes command implementation.

use crate::cli::NotesArgs;
use crate::error::Result;
use crate::output::Formatter;
use studyforge_domain::traits::CompletionProvider;
use studyforge_extract::{Generator, NotesRequest};

/// Execute the notes command.
pub async fn execute_notes<P>(
    args: NotesArgs,
    generator: &Generator<P>,
    formatter: &Formatter,
) -> Result<()>
where
    P: CompletionProvider + Send + Sync + 'static,
{
    let context = super::read_context(args.input.as_deref())?;

    let request = NotesRequest {
        context,
        tone: args.tone.into(),
        length: args.length.into(),
    };

    let output = generator.notes(request).await?;
    println!("{}", formatter.format_notes(&output)?);

    Ok(())
}
