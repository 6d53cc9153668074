use {
    std::{collections::{HashMap, HashSet}, fs::read_to_string, path::Path},
    once_cell::sync::Lazy,
    regex::Regex,
    tracing::info,
    crate::error::PipelineError,
};

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

static CORPUS_WORDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]+").unwrap());

pub trait SpellCorrector {
    fn correct(&self, text: &str) -> Result<String, PipelineError>;
}

/// Frequency based corrector: the most frequent known word within two edits wins.
#[derive(Debug, Default)]
pub struct NorvigCorrector {
    frequencies: HashMap<String, u64>,
}

impl NorvigCorrector {
    pub fn from_corpus_file(path: &Path) -> Result<Self, PipelineError> {
        let corpus = read_to_string(path).map_err(|err| PipelineError::Model {
            path: path.to_owned(),
            reason: err.to_string(),
        })?;

        let corrector = Self::from_corpus(&corpus);
        info!("loaded spelling dictionary with {} words from {}", corrector.frequencies.len(), path.display());
        Ok(corrector)
    }

    pub fn from_corpus(corpus: &str) -> Self {
        let mut frequencies = HashMap::new();
        for word in CORPUS_WORDS.find_iter(&corpus.to_lowercase()) {
            *frequencies.entry(word.as_str().to_owned()).or_insert(0) += 1;
        }
        Self { frequencies }
    }

    pub fn dictionary_size(&self) -> usize {
        self.frequencies.len()
    }

    fn correct_word(&self, word: &str) -> String {
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return word.to_owned();
        }

        let lower = word.to_lowercase();
        if self.frequencies.is_empty() || self.frequencies.contains_key(&lower) {
            return word.to_owned();
        }

        let first_edits = edits(&lower);
        let best = self.most_frequent(first_edits.iter())
            .or_else(|| self.most_frequent(first_edits.iter().flat_map(|v| edits(v)).collect::<HashSet<_>>().iter()));

        match best {
            Some(v) => restore_case(word, v),
            None => word.to_owned(),
        }
    }

    fn most_frequent<'a>(&self, candidates: impl Iterator<Item = &'a String>) -> Option<String> {
        candidates
            .filter_map(|v| self.frequencies.get(v).map(|count| (count, v)))
            // ties resolve alphabetically
            .max_by(|(a_count, a), (b_count, b)| a_count.cmp(b_count).then_with(|| b.cmp(a)))
            .map(|(_, v)| v.clone())
    }
}

impl SpellCorrector for NorvigCorrector {
    fn correct(&self, text: &str) -> Result<String, PipelineError> {
        Ok(text.split(' ')
            .map(|word| self.correct_word(word))
            .collect::<Vec<_>>()
            .join(" "))
    }
}

fn edits(word: &str) -> HashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut result = HashSet::new();

    for i in 0..=chars.len() {
        let (left, right) = chars.split_at(i);
        let left: String = left.iter().collect();

        if !right.is_empty() {
            result.insert(format!("{}{}", left, right[1..].iter().collect::<String>()));
        }
        if right.len() > 1 {
            result.insert(format!("{}{}{}{}", left, right[1], right[0], right[2..].iter().collect::<String>()));
        }
        for c in ALPHABET.chars() {
            if !right.is_empty() {
                result.insert(format!("{}{}{}", left, c, right[1..].iter().collect::<String>()));
            }
            result.insert(format!("{}{}{}", left, c, right.iter().collect::<String>()));
        }
    }

    result
}

fn restore_case(original: &str, corrected: String) -> String {
    if original.len() > 1 && original.chars().all(|c| c.is_ascii_uppercase()) {
        corrected.to_uppercase()
    } else if original.chars().next().map(|c| c.is_ascii_uppercase()).unwrap_or(false) {
        let mut chars = corrected.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => corrected,
        }
    } else {
        corrected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corrector() -> NorvigCorrector {
        NorvigCorrector::from_corpus(
            "the product quality is great great great. battery life is good, good value. \
             terrible packaging, bad quality, bad support. spelling matters"
        )
    }

    #[test]
    fn counts_corpus_words() {
        assert_eq!(corrector().dictionary_size(), 15);
    }

    #[test]
    fn known_words_are_kept() {
        assert_eq!(corrector().correct("great product").unwrap(), "great product");
    }

    #[test]
    fn corrects_single_and_double_edits() {
        let corrector = corrector();

        assert_eq!(corrector.correct("graet produt").unwrap(), "great product");
        assert_eq!(corrector.correct("qualty").unwrap(), "quality");
        assert_eq!(corrector.correct("speling").unwrap(), "spelling");
        assert_eq!(corrector.correct("baterry").unwrap(), "battery");
    }

    #[test]
    fn keeps_case_shape() {
        let corrector = corrector();

        assert_eq!(corrector.correct("Graet").unwrap(), "Great");
        assert_eq!(corrector.correct("BAD").unwrap(), "BAD");
        assert_eq!(corrector.correct("QUALTY").unwrap(), "QUALITY");
    }

    #[test]
    fn unknown_and_non_ascii_words_pass_through() {
        let corrector = corrector();

        assert_eq!(corrector.correct("xyzzyq").unwrap(), "xyzzyq");
        assert_eq!(corrector.correct("बहुत snake_case").unwrap(), "बहुत snake_case");
    }

    #[test]
    fn empty_dictionary_changes_nothing() {
        assert_eq!(NorvigCorrector::default().correct("graet produt").unwrap(), "graet produt");
    }
}
