//! Studyforge CLI - turn source text into study aids from the command line.

use clap::Parser;
use studyforge_cli::commands;
use studyforge_cli::{Cli, Command, Config, Formatter};
use studyforge_extract::{Generator, GeneratorConfig};
use studyforge_llm::OpenAiProvider;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Log to stderr so piped artifact output stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> studyforge_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load or create config
    let mut config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Handle commands
    match cli.command {
        Command::Key(args) => {
            commands::execute_key(args, &mut config, &formatter)?;
        }
        Command::Grade(args) => {
            commands::execute_grade(args, &formatter)?;
        }
        cmd => {
            // Commands that call the provider
            let api_key = cli
                .api_key
                .or_else(|| config.api_key.clone())
                .ok_or(studyforge_cli::CliError::MissingApiKey)?;
            let model = cli.model.unwrap_or_else(|| config.model.clone());

            let provider =
                OpenAiProvider::with_endpoint(config.endpoint.clone(), api_key, model);
            let generator = Generator::new(provider, GeneratorConfig::default());

            match cmd {
                Command::Notes(args) => {
                    commands::execute_notes(args, &generator, &formatter).await?;
                }
                Command::Quiz(args) => {
                    commands::execute_quiz(args, &generator, &formatter).await?;
                }
                Command::Flashcards(args) => {
                    commands::execute_flashcards(args, &generator, &formatter).await?;
                }
                Command::Mindmap(args) => {
                    commands::execute_mindmap(args, &generator, &formatter).await?;
                }
                _ => unreachable!(),
            }
        }
    }

    Ok(())
}
