use std::collections::{HashMap, HashSet};

use clap::ValueEnum;
use lazy_static::lazy_static;
use rand::seq::{index, SliceRandom};
use rand::Rng;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::exclusions::ExclusionSet;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\b\w+\b").expect("valid word regex");
}

/// How masked words are drawn from the eligible tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MaskMode {
    /// Sample `count` token occurrences, then mask every distinct word among
    /// them. Repeated words make the blank count smaller than `count`.
    #[default]
    Occurrences,
    /// Sample `count` distinct words directly.
    Distinct,
}

impl MaskMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaskMode::Occurrences => "occurrences",
            MaskMode::Distinct => "distinct",
        }
    }
}

impl std::str::FromStr for MaskMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "occurrences" => Ok(MaskMode::Occurrences),
            "distinct" => Ok(MaskMode::Distinct),
            other => Err(format!("unknown mask mode '{}', expected occurrences or distinct", other)),
        }
    }
}

/// Masked lyrics plus the answer key.
///
/// `reveal_list[i]` is the word hidden behind `[i + 1]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaskedLyrics {
    pub masked_text: String,
    pub reveal_list: Vec<String>,
}

/// Every word token in `text`, left to right, duplicates included.
pub fn tokenize(text: &str) -> Vec<&str> {
    WORD.find_iter(text).map(|m| m.as_str()).collect()
}

pub fn mask_words<R>(
    text: &str,
    exclusions: &ExclusionSet,
    count: usize,
    mode: MaskMode,
    rng: &mut R,
) -> MaskedLyrics
where
    R: Rng + ?Sized,
{
    let tokens = tokenize(text);
    let pool: Vec<&str> = tokens
        .iter()
        .copied()
        .filter(|token| !exclusions.contains(token))
        .collect();

    let selected = match mode {
        MaskMode::Occurrences => sample_occurrences(&pool, count, rng),
        MaskMode::Distinct => sample_distinct(&pool, count, rng),
    };

    debug!(
        "Masking {} distinct word(s) from {} eligible token(s) ({} requested, mode {})",
        selected.len(),
        pool.len(),
        count,
        mode.as_str()
    );

    let mut assignment: HashMap<&str, usize> = HashMap::new();
    let mut reveal_list = Vec::new();
    for token in &tokens {
        if selected.contains(token) && !assignment.contains_key(token) {
            reveal_list.push(token.to_string());
            assignment.insert(*token, reveal_list.len());
        }
    }

    let masked_text = if assignment.is_empty() {
        text.to_string()
    } else {
        WORD.replace_all(text, |caps: &Captures| match assignment.get(&caps[0]) {
            Some(index) => format!("[{}]", index),
            None => caps[0].to_string(),
        })
        .into_owned()
    };

    MaskedLyrics {
        masked_text,
        reveal_list,
    }
}

fn sample_occurrences<'a, R>(pool: &[&'a str], count: usize, rng: &mut R) -> HashSet<&'a str>
where
    R: Rng + ?Sized,
{
    let amount = count.min(pool.len());
    index::sample(rng, pool.len(), amount)
        .into_iter()
        .map(|i| pool[i])
        .collect()
}

fn sample_distinct<'a, R>(pool: &[&'a str], count: usize, rng: &mut R) -> HashSet<&'a str>
where
    R: Rng + ?Sized,
{
    let mut seen = HashSet::new();
    let distinct: Vec<&str> = pool.iter().copied().filter(|word| seen.insert(*word)).collect();
    distinct
        .choose_multiple(rng, count.min(distinct.len()))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pronouns() -> ExclusionSet {
        ExclusionSet::from_words(["I", "you", "me"])
    }

    /// Indices appearing as `[n]` in the masked text, in order of appearance.
    fn bracket_indices(text: &str) -> Vec<usize> {
        let re = Regex::new(r"\[(\d+)\]").unwrap();
        re.captures_iter(text)
            .map(|caps| caps[1].parse().unwrap())
            .collect()
    }

    #[test]
    fn test_tokenize_keeps_duplicates_and_splits_apostrophes() {
        assert_eq!(
            tokenize("Don't stop, don't stop!"),
            vec!["Don", "t", "stop", "don", "t", "stop"]
        );
        assert!(tokenize(" ,.!? ").is_empty());
    }

    #[test]
    fn test_single_sample_masks_every_occurrence() {
        let mut rng = StdRng::seed_from_u64(7);
        let result = mask_words("I love you love me", &pronouns(), 1, MaskMode::Occurrences, &mut rng);
        assert_eq!(result.masked_text, "I [1] you [1] me");
        assert_eq!(result.reveal_list, vec!["love".to_string()]);
    }

    #[test]
    fn test_zero_count_leaves_text_unchanged() {
        let text = "Hello darkness, my old friend";
        let mut rng = StdRng::seed_from_u64(1);
        let result = mask_words(text, &ExclusionSet::default(), 0, MaskMode::Occurrences, &mut rng);
        assert_eq!(result.masked_text, text);
        assert!(result.reveal_list.is_empty());
    }

    #[test]
    fn test_everything_excluded() {
        let mut rng = StdRng::seed_from_u64(3);
        let result = mask_words("I you me", &pronouns(), 5, MaskMode::Distinct, &mut rng);
        assert_eq!(result.masked_text, "I you me");
        assert!(result.reveal_list.is_empty());
    }

    #[test]
    fn test_punctuation_and_whitespace_preserved() {
        let mut rng = StdRng::seed_from_u64(11);
        let text = "Stars, shine!\n  Bright -- stars?";
        let exclusions = ExclusionSet::from_words(["Bright", "shine"]);
        let result = mask_words(text, &exclusions, 10, MaskMode::Occurrences, &mut rng);
        // Only "Stars" and "stars" are eligible; matching is case-sensitive.
        let mut revealed = result.reveal_list.clone();
        revealed.sort();
        assert_eq!(revealed, vec!["Stars".to_string(), "stars".to_string()]);
        assert_eq!(result.masked_text, "[1], shine!\n  Bright -- [2]?");
    }

    #[test]
    fn test_indices_follow_text_order() {
        let text = "alpha beta gamma delta alpha";
        let mut rng = StdRng::seed_from_u64(99);
        let result = mask_words(text, &ExclusionSet::default(), 4, MaskMode::Distinct, &mut rng);

        let positions: Vec<usize> = result
            .reveal_list
            .iter()
            .map(|word| text.find(word.as_str()).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_all_words_masked_when_count_covers_unique_pool() {
        let text = "one two three four five";
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let result = mask_words(text, &ExclusionSet::default(), 20, MaskMode::Occurrences, &mut rng);
            assert_eq!(result.masked_text, "[1] [2] [3] [4] [5]");
            assert_eq!(result.reveal_list, vec!["one", "two", "three", "four", "five"]);
        }
    }

    #[test]
    fn test_occurrence_sampling_can_mask_fewer_words_than_requested() {
        let text = "la la la la la la la la la song";
        let fewer = (0..50).any(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            mask_words(text, &ExclusionSet::default(), 2, MaskMode::Occurrences, &mut rng)
                .reveal_list
                .len()
                < 2
        });
        assert!(fewer, "expected at least one seed to draw 'la' twice");
    }

    #[test]
    fn test_distinct_mode_masks_exactly_count_words() {
        let text = "la la la la la la la la la song";
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let result = mask_words(text, &ExclusionSet::default(), 2, MaskMode::Distinct, &mut rng);
            assert_eq!(result.reveal_list.len(), 2);
            assert_eq!(result.masked_text.matches("[").count(), 10);
        }
    }

    #[test]
    fn test_reveal_list_and_bracket_indices_agree() {
        let text = "Is this the real life? Is this just fantasy?\nCaught in a landslide, no escape from reality";
        let exclusions = ExclusionSet::build(Vec::<String>::new(), Vec::<String>::new());

        for mode in [MaskMode::Occurrences, MaskMode::Distinct] {
            for seed in 0..30 {
                let mut rng = StdRng::seed_from_u64(seed);
                let result = mask_words(text, &exclusions, 6, mode, &mut rng);

                for word in &result.reveal_list {
                    assert!(!exclusions.contains(word));
                    assert!(!tokenize(&result.masked_text).contains(&word.as_str()));
                }

                let mut indices = bracket_indices(&result.masked_text);
                indices.sort_unstable();
                indices.dedup();
                let expected: Vec<usize> = (1..=result.reveal_list.len()).collect();
                assert_eq!(indices, expected);
            }
        }
    }

    #[test]
    fn test_mask_mode_parsing() {
        assert_eq!("distinct".parse::<MaskMode>().unwrap(), MaskMode::Distinct);
        assert_eq!(" Occurrences ".parse::<MaskMode>().unwrap(), MaskMode::Occurrences);
        assert!("random".parse::<MaskMode>().is_err());
    }
}
