//! Command implementations.

pub mod flashcards;
pub mod grade;
pub mod key;
pub mod mindmap;
pub mod notes;
pub mod quiz;

pub use self::flashcards::execute_flashcards;
pub use self::grade::execute_grade;
pub use self::key::execute_key;
pub use self::mindmap::execute_mindmap;
pub use self::notes::execute_notes;
pub use self::quiz::execute_quiz;

use crate::error::{CliError, Result};
use std::io::Read;
use std::path::Path;

/// Read the source context from a file, or from stdin when no file is given.
pub(crate) fn read_context(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => {
            let contents = std::fs::read_to_string(path).map_err(|e| {
                CliError::InvalidInput(format!("Could not read {}: {}", path.display(), e))
            })?;
            Ok(contents)
        }
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_context_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Some lecture text.").unwrap();

        let context = read_context(Some(file.path())).unwrap();
        assert_eq!(context, "Some lecture text.");
    }

    #[test]
    fn test_read_context_missing_file() {
        let result = read_context(Some(Path::new("/nonexistent/notes.txt")));
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
