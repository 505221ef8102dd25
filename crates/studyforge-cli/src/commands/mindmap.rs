//! Mindmap command implementation.

use crate::cli::MindmapArgs;
use crate::error::Result;
use crate::output::Formatter;
use studyforge_domain::traits::CompletionProvider;
use studyforge_extract::{Generator, MindmapRequest};

/// Execute the mindmap command.
pub async fn execute_mindmap<P>(
    args: MindmapArgs,
    generator: &Generator<P>,
    formatter: &Formatter,
) -> Result<()>
where
    P: CompletionProvider + Send + Sync + 'static,
{
    let context = super::read_context(args.input.as_deref())?;

    let output = generator.mindmap(MindmapRequest::new(context)).await?;
    println!("{}", formatter.format_mindmap(&output)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use studyforge_extract::GeneratorConfig;
    use studyforge_llm::MockProvider;

    #[tokio::test]
    async fn test_execute_mindmap_with_mock() {
        let generator = Generator::new(
            MockProvider::new("- Root\n  - Child"),
            GeneratorConfig::default(),
        );
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"Some context.").unwrap();

        let args = MindmapArgs {
            input: Some(file.path().to_path_buf()),
        };

        let result = execute_mindmap(args, &generator, &formatter).await;
        assert!(result.is_ok());
    }
}
