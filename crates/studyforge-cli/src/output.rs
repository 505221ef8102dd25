//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use studyforge_domain::{GradeReport, NoteKind};
use studyforge_extract::{FlashcardOutput, MindmapOutput, NotesOutput, QuizOutput};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a notes result.
    pub fn format_notes(&self, output: &NotesOutput) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "document": output.document,
                    "stats": output.stats,
                    "metadata": output.metadata,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                let mut out = String::new();

                out.push_str(&self.heading("Cues"));
                for cue in &output.document.cues {
                    out.push_str(&format!("• {}\n", cue));
                }

                out.push_str(&self.heading("Notes"));
                for note in &output.document.notes {
                    match note.kind {
                        NoteKind::Topic => {
                            out.push_str(&format!("{}\n", self.colorize(&note.text, "bold")))
                        }
                        NoteKind::Detail => out.push_str(&format!("  - {}\n", note.text)),
                        NoteKind::Text => out.push_str(&format!("{}\n", note.text)),
                    }
                }

                out.push_str(&self.heading("Summary"));
                out.push_str(&output.document.summary);
                out.push('\n');

                out.push_str(&format!(
                    "\n{} words reduced · {} sentences · {} read time\n",
                    output.stats.reduced_words,
                    output.stats.sentence_count,
                    output.stats.read_time
                ));
                Ok(out)
            }
            OutputFormat::Quiet => Ok(output.document.summary.clone()),
        }
    }

    /// Format a quiz result. The answer key is shown only on request so a
    /// quiz can be handed out before it is graded.
    pub fn format_quiz(&self, output: &QuizOutput, show_answers: bool) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "quiz": output.quiz,
                    "metadata": output.metadata,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                if output.quiz.is_empty() {
                    return Ok(self.colorize("No questions could be recovered.", "yellow"));
                }

                let mut out = String::new();
                for question in &output.quiz.questions {
                    out.push_str(&format!("{}\n", self.colorize(&question.text, "bold")));
                    for option in &question.options {
                        out.push_str(&format!("  {}\n", option.text));
                    }
                    if show_answers {
                        out.push_str(&self.colorize(
                            &format!("  Answer: {}\n", question.correct),
                            "green",
                        ));
                    }
                    out.push('\n');
                }

                if show_answers {
                    let key: Vec<String> = output
                        .quiz
                        .answer_key()
                        .iter()
                        .enumerate()
                        .map(|(i, letter)| format!("{}. {}", i + 1, letter))
                        .collect();
                    out.push_str(&format!("Answer key: {}\n", key.join("  ")));
                }
                Ok(out)
            }
            OutputFormat::Quiet => {
                let key: Vec<String> =
                    output.quiz.answer_key().iter().map(char::to_string).collect();
                Ok(key.join("\n"))
            }
        }
    }

    /// Format a flashcard result.
    pub fn format_flashcards(&self, output: &FlashcardOutput) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "deck": output.deck,
                    "metadata": output.metadata,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                if output.deck.is_empty() {
                    return Ok(self.colorize("No cards could be recovered.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["#", "Front", "Back"]);
                for (i, card) in output.deck.cards.iter().enumerate() {
                    builder.push_record([(i + 1).to_string(), card.front.clone(), card.back.clone()]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
            OutputFormat::Quiet => {
                let lines: Vec<String> = output
                    .deck
                    .cards
                    .iter()
                    .map(|c| format!("{}\t{}", c.front, c.back))
                    .collect();
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format a mindmap result. JSON output is the renderer contract: the
    /// flat node list plus the derived edge list.
    pub fn format_mindmap(&self, output: &MindmapOutput) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "nodes": output.outline.nodes,
                    "edges": output.outline.edges(),
                    "metadata": output.metadata,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                if output.outline.is_empty() {
                    return Ok(self.colorize("No outline could be recovered.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["ID", "Label", "Level", "Parent"]);
                for node in &output.outline.nodes {
                    builder.push_record([
                        node.id.to_string(),
                        node.label.clone(),
                        node.level.to_string(),
                        node.parent.map(|p| p.to_string()).unwrap_or_default(),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
            OutputFormat::Quiet => {
                let lines: Vec<String> = output
                    .outline
                    .nodes
                    .iter()
                    .map(|n| format!("{}{}", "  ".repeat(n.level), n.label))
                    .collect();
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format a grading report.
    pub fn format_grade(&self, report: &GradeReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => {
                let mut out = String::new();
                for (i, result) in report.results.iter().enumerate() {
                    let line = match (result.is_correct, result.chosen) {
                        (true, _) => {
                            self.colorize(&format!("{}. ✓ {}", i + 1, result.correct), "green")
                        }
                        (false, Some(chosen)) => self.colorize(
                            &format!("{}. ✗ chose {}, correct {}", i + 1, chosen, result.correct),
                            "red",
                        ),
                        (false, None) => self.colorize(
                            &format!("{}. ✗ unanswered, correct {}", i + 1, result.correct),
                            "red",
                        ),
                    };
                    out.push_str(&line);
                    out.push('\n');
                }
                out.push_str(&format!(
                    "Score: {}/{}\n",
                    report.score,
                    report.results.len()
                ));
                Ok(out)
            }
            OutputFormat::Quiet => Ok(format!("{}/{}", report.score, report.results.len())),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "red" => text.red().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "bold" => text.bold().to_string(),
            _ => text.to_string(),
        }
    }

    /// A section heading.
    fn heading(&self, title: &str) -> String {
        format!("\n{}\n", self.colorize(&title.to_uppercase(), "cyan"))
    }
}
