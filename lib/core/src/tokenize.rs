/// Tokenize a phrase for vectorization and word-mover's distance
///
/// Lowercases and splits on whitespace. No punctuation stripping: the
/// embedding table is keyed on surface forms, and the downstream running
/// average depends on the exact token sequence.
#[inline]
pub fn tokenize(phrase: &str) -> Vec<String> {
    phrase
        .to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        assert_eq!(tokenize("Walk a dog"), vec!["walk", "a", "dog"]);
    }

    #[test]
    fn test_tokenize_collapses_whitespace() {
        assert_eq!(tokenize("  Clean\tkitchen \n"), vec!["clean", "kitchen"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }
}
