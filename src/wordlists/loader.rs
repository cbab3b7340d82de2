//! Word list loading utilities
//!
//! Accepts one word per line, comma separated quoted words (as scraped from
//! the game's source), or a JSON array of strings. Validation of the words
//! themselves happens in [`Vocabulary`](crate::core::Vocabulary).

use crate::error::WordleError;
use log::debug;
use std::fs;
use std::path::Path;

/// Split word list text into raw words
///
/// Blank entries and lines starting with `#` are skipped.
///
/// # Errors
/// Returns `WordleError::WordList` if the text looks like JSON but is not an
/// array of strings.
///
/// # Examples
/// ```
/// use wordle_strategy::wordlists::parse_word_list;
///
/// let plain = parse_word_list("crane\n# comment\n\nslate\n").unwrap();
/// assert_eq!(plain, vec!["crane", "slate"]);
///
/// let scraped = parse_word_list(r#""cigar","rebut", "sissy""#).unwrap();
/// assert_eq!(scraped, vec!["cigar", "rebut", "sissy"]);
///
/// let json = parse_word_list(r#"["aback", "abase"]"#).unwrap();
/// assert_eq!(json, vec!["aback", "abase"]);
/// ```
pub fn parse_word_list(text: &str) -> Result<Vec<String>, WordleError> {
    if text.trim_start().starts_with('[') {
        let words: Vec<String> = serde_json::from_str(text)?;
        return Ok(words
            .into_iter()
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty())
            .collect());
    }

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .flat_map(|line| line.split(','))
        .map(|entry| entry.trim().trim_matches(|c: char| c == '"' || c == '\'').trim())
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect())
}

/// Load a word list from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or a format error for
/// malformed JSON.
///
/// # Examples
/// ```no_run
/// use std::path::Path;
/// use wordle_strategy::wordlists::load_word_list;
///
/// let words = load_word_list(Path::new("data/solutions.txt")).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_word_list(path: &Path) -> Result<Vec<String>, WordleError> {
    let content = fs::read_to_string(path)?;
    let words = parse_word_list(&content)?;
    debug!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines() {
        let words = parse_word_list("crane\r\n  slate \n\nirate").unwrap();
        assert_eq!(words, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn comments_are_skipped() {
        let words = parse_word_list("# answers\ncrane\n   # indented comment\nslate").unwrap();
        assert_eq!(words, vec!["crane", "slate"]);
    }

    #[test]
    fn quoted_comma_separated() {
        let words = parse_word_list("\"cigar\",\"rebut\",\n'sissy',humph,").unwrap();
        assert_eq!(words, vec!["cigar", "rebut", "sissy", "humph"]);
    }

    #[test]
    fn json_array() {
        let words = parse_word_list("  [\"aback\", \" abase \", \"\"]").unwrap();
        assert_eq!(words, vec!["aback", "abase"]);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            parse_word_list("[\"aback\", 3]"),
            Err(WordleError::WordList(_))
        ));
    }

    #[test]
    fn empty_input() {
        assert!(parse_word_list("").unwrap().is_empty());
        assert!(parse_word_list("\n# nothing\n").unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("wordle_strategy_no_such_list.txt");
        assert!(matches!(load_word_list(&path), Err(WordleError::Io(_))));
    }

    #[test]
    fn loads_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "wordle_strategy_words_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "crane\nslate\n").unwrap();
        assert_eq!(load_word_list(&path).unwrap(), vec!["crane", "slate"]);
        fs::remove_file(&path).unwrap();
    }
}
