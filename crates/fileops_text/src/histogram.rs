use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use fileops_fs::{FileOps, TextEncoding};

/// Counts how often each word occurs in a UTF-8 text file.
///
/// Words are the tokens produced by [`tokens`] for every line, so hyphenated
/// words count as separate words and case is ignored.
pub fn histogram<T: AsRef<Path>>(path: T) -> Result<HashMap<String, usize>> {
    histogram_with_encoding(path, TextEncoding::default())
}

pub fn histogram_with_encoding<T: AsRef<Path>>(
    path: T,
    encoding: TextEncoding,
) -> Result<HashMap<String, usize>> {
    let mut counts = HashMap::new();
    for line in FileOps::read_lines(path.as_ref(), Some(encoding))? {
        for word in tokens(&line) {
            *counts.entry(word).or_insert(0) += 1;
        }
    }
    tracing::debug!(path = %path.as_ref().display(), distinct = counts.len(), "Built word histogram");
    Ok(counts)
}

/// Splits a line into lowercase words.
///
/// Hyphens separate words like whitespace does. Leading and trailing ASCII
/// punctuation and whitespace is stripped from each piece and pieces that
/// end up empty are dropped.
pub fn tokens(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split(|c: char| c == '-' || c.is_whitespace())
        .map(|piece| piece.trim_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace()))
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn counts(pairs: &[(&str, usize)]) -> HashMap<String, usize> {
        pairs.iter().map(|(word, n)| (word.to_string(), *n)).collect()
    }

    #[test]
    fn test_histogram_ignores_case_and_punctuation() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("cat.txt");
        std::fs::write(&path, "The cat sat. The CAT sat!\n")?;

        let actual = histogram(&path)?;

        assert_eq!(actual, counts(&[("the", 2), ("cat", 2), ("sat", 2)]));
        Ok(())
    }

    #[test]
    fn test_histogram_across_lines() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("poem.txt");
        std::fs::write(&path, "well-known words,\r\n\n  \"Words\" -- well...\n'known'")?;

        let actual = histogram(&path)?;

        assert_eq!(actual, counts(&[("well", 2), ("known", 2), ("words", 2)]));
        Ok(())
    }

    #[test]
    fn test_histogram_empty_file() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "")?;

        assert!(histogram(&path)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_histogram_with_encoding() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("latin1.txt");
        std::fs::write(&path, b"Caf\xe9 caf\xc9\n")?;

        let actual = histogram_with_encoding(&path, TextEncoding::windows_1252())?;

        assert_eq!(actual, counts(&[("café", 2)]));
        Ok(())
    }

    #[test]
    fn test_histogram_missing_file() {
        let dir = TempDir::new().unwrap();
        let error = histogram(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<fileops_fs::Error>(),
            Some(fileops_fs::Error::NotFound(_))
        ));
    }

    #[test]
    fn test_tokens() {
        let actual: Vec<_> = tokens("  (Hello), world-wide -- WEB's ... ").collect();
        let expected = vec!["hello", "world", "wide", "web's"];
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_tokens_keeps_inner_punctuation_and_unicode() {
        let actual: Vec<_> = tokens("«Ärger» e.g. x_y").collect();
        let expected = vec!["«ärger»", "e.g", "x_y"];
        assert_eq!(actual, expected);
    }
}
