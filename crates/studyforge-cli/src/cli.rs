//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use studyforge_extract::{Difficulty, NoteLength, Tonality, Tone};

/// Studyforge - turn source text into study aids with an LLM.
#[derive(Debug, Parser)]
#[command(name = "studyforge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// API key (overrides the stored credential)
    #[arg(long, env = "STUDYFORGE_API_KEY", global = true)]
    pub api_key: Option<String>,

    /// Model identifier (overrides the configured model)
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable terminal format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (bare essentials)
    Quiet,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => Self::Table,
            CliFormat::Json => Self::Json,
            CliFormat::Quiet => Self::Quiet,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage the stored API credential
    Key(KeyArgs),

    /// Generate Cornell-style notes
    Notes(NotesArgs),

    /// Generate a multiple-choice quiz
    Quiz(QuizArgs),

    /// Generate flashcards
    Flashcards(FlashcardArgs),

    /// Generate a mindmap outline
    Mindmap(MindmapArgs),

    /// Grade chosen answers against a saved quiz
    Grade(GradeArgs),
}

/// Arguments for the key command.
#[derive(Debug, Parser)]
pub struct KeyArgs {
    #[command(subcommand)]
    pub action: KeyAction,
}

/// Credential actions.
#[derive(Debug, Subcommand)]
pub enum KeyAction {
    /// Store an API key in the config file
    Set {
        /// The credential to store
        key: String,
    },

    /// Show whether a key is stored (the key itself is partially masked)
    Show,

    /// Remove the stored key
    Clear,
}

/// Arguments for the notes command.
#[derive(Debug, Parser)]
pub struct NotesArgs {
    /// Read context from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Writing tone
    #[arg(short, long, value_enum, default_value = "standard")]
    pub tone: ToneArg,

    /// Target length
    #[arg(short, long, value_enum, default_value = "normal")]
    pub length: LengthArg,
}

/// Arguments for the quiz command.
#[derive(Debug, Parser)]
pub struct QuizArgs {
    /// Read context from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Number of questions to request
    #[arg(short = 'n', long, default_value = "5")]
    pub questions: u8,

    /// Question difficulty
    #[arg(short, long, value_enum, default_value = "normal")]
    pub difficulty: DifficultyArg,

    /// Question tonality
    #[arg(short, long, value_enum, default_value = "standard")]
    pub tonality: TonalityArg,

    /// Print the answer key alongside the questions
    #[arg(long)]
    pub show_answers: bool,
}

/// Arguments for the flashcards command.
#[derive(Debug, Parser)]
pub struct FlashcardArgs {
    /// Read context from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Number of cards to request
    #[arg(short = 'n', long, default_value = "10")]
    pub cards: u8,

    /// Card difficulty
    #[arg(short, long, value_enum, default_value = "normal")]
    pub difficulty: DifficultyArg,

    /// Card tonality
    #[arg(short, long, value_enum, default_value = "standard")]
    pub tonality: TonalityArg,
}

/// Arguments for the mindmap command.
#[derive(Debug, Parser)]
pub struct MindmapArgs {
    /// Read context from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

/// Arguments for the grade command.
#[derive(Debug, Parser)]
pub struct GradeArgs {
    /// Quiz JSON produced by 'studyforge quiz --format json'
    #[arg(short, long)]
    pub quiz: PathBuf,

    /// Comma-separated chosen letters, '-' for a skipped question
    #[arg(short, long)]
    pub answers: String,
}

/// Tone argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ToneArg {
    /// Neutral and professional
    Standard,
    /// Casual and friendly
    Friendly,
    /// Formal and academic
    Formal,
}

impl From<ToneArg> for Tone {
    fn from(arg: ToneArg) -> Self {
        match arg {
            ToneArg::Standard => Tone::Standard,
            ToneArg::Friendly => Tone::Friendly,
            ToneArg::Formal => Tone::Formal,
        }
    }
}

/// Note length argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LengthArg {
    /// Concise and brief
    Short,
    /// Detailed
    Normal,
    /// Extended and comprehensive
    Long,
}

impl From<LengthArg> for NoteLength {
    fn from(arg: LengthArg) -> Self {
        match arg {
            LengthArg::Short => NoteLength::Short,
            LengthArg::Normal => NoteLength::Normal,
            LengthArg::Long => NoteLength::Long,
        }
    }
}

/// Difficulty argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum DifficultyArg {
    /// Simple and straightforward
    Easy,
    /// Moderate difficulty
    Normal,
    /// Challenging and thought-provoking
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Normal => Difficulty::Normal,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

/// Tonality argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum TonalityArg {
    /// Casual and friendly
    Casual,
    /// Neutral and professional
    Standard,
    /// Formal and academic
    Academic,
}

impl From<TonalityArg> for Tonality {
    fn from(arg: TonalityArg) -> Self {
        match arg {
            TonalityArg::Casual => Tonality::Casual,
            TonalityArg::Standard => Tonality::Standard,
            TonalityArg::Academic => Tonality::Academic,
        }
    }
}
