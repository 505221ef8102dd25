//! Key command implementation.

use crate::cli::{KeyAction, KeyArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the key command.
pub fn execute_key(args: KeyArgs, config: &mut Config, formatter: &Formatter) -> Result<()> {
    match args.action {
        KeyAction::Set { key } => {
            config.api_key = Some(key);
            config.save()?;
            println!("{}", formatter.success("API key stored"));
        }
        KeyAction::Show => match &config.api_key {
            Some(key) => {
                println!("{}", formatter.info(&format!("Stored key: {}", mask(key))));
            }
            None => {
                println!("{}", formatter.info("No API key stored"));
            }
        },
        KeyAction::Clear => {
            config.api_key = None;
            config.save()?;
            println!("{}", formatter.success("API key removed"));
        }
    }

    Ok(())
}

/// Mask a credential for display, keeping just enough to identify it.
/// Counts characters, not bytes, so arbitrary keys are safe to show.
fn mask(key: &str) -> String {
    let count = key.chars().count();
    if count <= 8 {
        return "*".repeat(count);
    }

    let head: String = key.chars().take(4).collect();
    let tail: String = key.chars().skip(count - 4).collect();
    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_long_key() {
        assert_eq!(mask("sk-abcdefghijklmnop"), "sk-a...mnop");
    }

    #[test]
    fn test_mask_short_key() {
        assert_eq!(mask("short"), "*****");
    }

    #[test]
    fn test_mask_multibyte_key() {
        // 'é' spans bytes 3..5; masking goes by characters
        assert_eq!(mask("abcé-defgh"), "abcé...efgh");
        assert_eq!(mask("clé-abc"), "*******");
    }
}
