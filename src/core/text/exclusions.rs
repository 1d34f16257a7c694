use std::collections::BTreeSet;

/// Words that are never masked unless the user explicitly removes them.
pub const BASE_EXCLUSIONS: &[&str] = &[
    "I", "you", "he", "she", "it", "we", "they", "me", "us", "him", "her",
    "my", "your", "his", "our", "them", "their", "a", "g", "do", "don't",
    "don", "t", "in", "on", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above",
    "below", "to", "from", "up", "down", "out", "over", "under",
    "again", "further", "then", "once",
];

/// Split a comma-separated word list, dropping blank entries.
pub fn parse_word_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Case-sensitive set of words that are not eligible for masking.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExclusionSet {
    words: BTreeSet<String>,
}

impl ExclusionSet {
    /// Base exclusions plus `additions`, minus `removals`.
    pub fn build<A, R>(additions: A, removals: R) -> Self
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: AsRef<str>,
    {
        Self::with_base(BASE_EXCLUSIONS.iter().copied(), additions, removals)
    }

    /// Same as [`ExclusionSet::build`] with a caller-supplied base.
    ///
    /// Removals are applied last, so a removed word is gone even when it also
    /// appears in the base or in the additions.
    pub fn with_base<B, A, R>(base: B, additions: A, removals: R) -> Self
    where
        B: IntoIterator,
        B::Item: AsRef<str>,
        A: IntoIterator,
        A::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: AsRef<str>,
    {
        let mut words: BTreeSet<String> = base
            .into_iter()
            .map(|word| word.as_ref().to_string())
            .collect();
        words.extend(additions.into_iter().map(|word| word.as_ref().to_string()));

        for word in removals {
            words.remove(word.as_ref());
        }

        Self { words }
    }

    #[cfg(test)]
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::with_base(words, std::iter::empty::<&str>(), std::iter::empty::<&str>())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_word_list_drops_blanks() {
        assert_eq!(
            parse_word_list(" love, ,baby,,  night "),
            vec!["love".to_string(), "baby".to_string(), "night".to_string()]
        );
        assert!(parse_word_list("").is_empty());
        assert!(parse_word_list(" , ,").is_empty());
    }

    #[test]
    fn test_build_contains_base() {
        let set = ExclusionSet::build(Vec::<String>::new(), Vec::<String>::new());
        assert!(set.contains("I"));
        assert!(set.contains("don't"));
        assert!(!set.contains("i"), "membership is case-sensitive");
        assert!(!set.contains("love"));
    }

    #[test]
    fn test_base_duplicates_collapse() {
        let set = ExclusionSet::build(Vec::<String>::new(), Vec::<String>::new());
        let mut unique: Vec<&str> = BASE_EXCLUSIONS.to_vec();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(set.len(), unique.len());
    }

    #[test]
    fn test_removal_wins_over_base_and_additions() {
        let set = ExclusionSet::build(["love", "night"], ["I", "love"]);
        assert!(!set.contains("I"));
        assert!(!set.contains("love"));
        assert!(set.contains("night"));
    }

    #[test]
    fn test_iter_is_sorted() {
        let set = ExclusionSet::from_words(["zebra", "Apple", "mango", "apple"]);
        let words: Vec<&str> = set.iter().collect();
        assert_eq!(words, vec!["Apple", "apple", "mango", "zebra"]);
    }
}
