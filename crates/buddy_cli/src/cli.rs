//! Argument parsing for the `buddy` binary.

use buddy_extract::Language;
use clap::Parser;

/// Generate code from a natural-language prompt via a local Ollama model.
#[derive(Debug, Parser)]
#[command(name = "buddy", version, about)]
pub struct Cli {
    /// Natural-language description of the code to generate.
    pub prompt: String,

    /// Target language for code-block extraction ("javascript", "python";
    /// anything else selects the first fenced block).
    #[arg(short, long, default_value = "javascript")]
    pub language: Language,

    /// Override the generate endpoint URL (default: $OLLAMA_API_URL).
    #[arg(long)]
    pub url: Option<String>,

    /// Override the model identifier (default: $OLLAMA_MODEL).
    #[arg(long)]
    pub model: Option<String>,

    /// Print the model reply as-is, skipping code-block extraction.
    #[arg(long)]
    pub raw: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["buddy", "write fizzbuzz"]);
        assert_eq!(cli.prompt, "write fizzbuzz");
        assert_eq!(cli.language, Language::Javascript);
        assert!(!cli.raw);
    }

    #[test]
    fn test_language_flag_accepts_anything() {
        let cli = Cli::parse_from(["buddy", "-l", "ruby", "one-liner"]);
        assert_eq!(cli.language, Language::Other);
    }
}
