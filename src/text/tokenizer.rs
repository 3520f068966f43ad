// Tokenizer trait — swap-ready abstraction over the splitting policy.
//
// Two policies exist. The default splits on every character that is not an
// ASCII letter or digit, so "word." and "word" collapse to the same token.
// The whitespace policy only splits on whitespace and keeps punctuation
// attached; it produces materially different tables and is opt-in.

use std::fmt;
use std::str::FromStr;

use crate::error::DistanceError;

/// Trait for turning lines of text into normalized word tokens.
pub trait Tokenizer: Send + Sync {
    /// Split a single line into lower-cased tokens, in line order.
    fn tokenize(&self, line: &str) -> Vec<String>;

    /// Tokenize a whole document. Order is document order, duplicates kept.
    fn tokenize_lines(&self, lines: &[String]) -> Vec<String> {
        lines.iter().flat_map(|line| self.tokenize(line)).collect()
    }
}

/// Maximal runs of ASCII letters/digits, lower-cased. Never emits empty tokens.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlphanumericTokenizer;

impl Tokenizer for AlphanumericTokenizer {
    fn tokenize(&self, line: &str) -> Vec<String> {
        line.split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|run| !run.is_empty())
            .map(|run| run.to_ascii_lowercase())
            .collect()
    }
}

/// Whitespace-separated words, lower-cased, punctuation left in place.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, line: &str) -> Vec<String> {
        line.split_whitespace()
            .map(|word| word.to_ascii_lowercase())
            .collect()
    }
}

/// Which tokenizer policy to use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerKind {
    /// Split on any non-alphanumeric character (default)
    #[default]
    Alnum,
    /// Split on whitespace only
    Whitespace,
}

impl TokenizerKind {
    pub fn build(self) -> Box<dyn Tokenizer> {
        match self {
            TokenizerKind::Alnum => Box::new(AlphanumericTokenizer),
            TokenizerKind::Whitespace => Box::new(WhitespaceTokenizer),
        }
    }
}

impl FromStr for TokenizerKind {
    type Err = DistanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alnum" | "alphanumeric" => Ok(TokenizerKind::Alnum),
            "whitespace" => Ok(TokenizerKind::Whitespace),
            other => Err(DistanceError::InvalidConfig(format!(
                "unknown tokenizer '{other}' (expected 'alnum' or 'whitespace')"
            ))),
        }
    }
}

impl fmt::Display for TokenizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizerKind::Alnum => write!(f, "alnum"),
            TokenizerKind::Whitespace => write!(f, "whitespace"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &[&str]) -> Vec<String> {
        text.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_punctuation_is_a_separator() {
        let tokens = AlphanumericTokenizer.tokenize("Hello, world! It's 2024.");
        assert_eq!(tokens, vec!["hello", "world", "it", "s", "2024"]);
    }

    #[test]
    fn test_leading_and_repeated_separators_emit_nothing() {
        // A leading separator must not produce an empty first token
        let tokens = AlphanumericTokenizer.tokenize("  --the   cat--  ");
        assert_eq!(tokens, vec!["the", "cat"]);
    }

    #[test]
    fn test_line_without_words_contributes_nothing() {
        assert!(AlphanumericTokenizer.tokenize("... --- !!!").is_empty());
        assert!(AlphanumericTokenizer.tokenize("").is_empty());
    }

    #[test]
    fn test_non_ascii_letters_split_words() {
        // Only ASCII letters and digits count as word characters
        let tokens = AlphanumericTokenizer.tokenize("café naïve");
        assert_eq!(tokens, vec!["caf", "na", "ve"]);
    }

    #[test]
    fn test_tokens_match_lowercase_alnum() {
        let doc = lines(&[
            "The QUICK brown fox; jumps_over 13 lazy-dogs.",
            "\tTabs\tand\r\nCRLF",
            "MiXeD123CaSe",
        ]);
        let tokens = AlphanumericTokenizer.tokenize_lines(&doc);
        assert!(!tokens.is_empty());
        for token in &tokens {
            assert!(!token.is_empty());
            assert!(
                token
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
                "Unexpected token {token:?}"
            );
        }
    }

    #[test]
    fn test_document_order_and_duplicates_kept() {
        let doc = lines(&["b a", "", "a c"]);
        let tokens = AlphanumericTokenizer.tokenize_lines(&doc);
        assert_eq!(tokens, vec!["b", "a", "a", "c"]);
    }

    #[test]
    fn test_whitespace_policy_keeps_punctuation() {
        let tokens = WhitespaceTokenizer.tokenize("Word. word, WORD");
        assert_eq!(tokens, vec!["word.", "word,", "word"]);

        // The default policy collapses all three
        let tokens = AlphanumericTokenizer.tokenize("Word. word, WORD");
        assert_eq!(tokens, vec!["word", "word", "word"]);
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("alnum".parse::<TokenizerKind>().unwrap(), TokenizerKind::Alnum);
        assert_eq!(
            " Whitespace ".parse::<TokenizerKind>().unwrap(),
            TokenizerKind::Whitespace
        );
        assert!("regex".parse::<TokenizerKind>().is_err());
        assert_eq!(TokenizerKind::default(), TokenizerKind::Alnum);
    }

    #[test]
    fn test_kind_builds_matching_tokenizer() {
        let line = "end. end";
        assert_eq!(TokenizerKind::Alnum.build().tokenize(line), vec!["end", "end"]);
        assert_eq!(
            TokenizerKind::Whitespace.build().tokenize(line),
            vec!["end.", "end"]
        );
    }
}
