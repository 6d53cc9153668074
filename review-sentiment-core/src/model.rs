//! Pre-fitted text vectorizer and classifier, exported from the training
//! notebook as JSON and loaded once per process.

use {
    std::{collections::{BTreeMap, HashMap}, fs::read_to_string, path::Path, sync::Arc},
    once_cell::sync::Lazy,
    regex::Regex,
    serde::{Serialize, Deserialize, de::DeserializeOwned},
    tracing::info,
    crate::{
        config::ModelConfig,
        error::{ClassificationError, PipelineError},
    },
};

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").unwrap());

#[derive(Debug, Clone, PartialEq)]
pub struct SparseVector {
    pub dimension: usize,
    pub entries: Vec<(usize, f64)>,
}

pub trait Vectorizer: Send + Sync {
    fn transform(&self, text: &str) -> Result<SparseVector, ClassificationError>;
}

pub trait Classifier: Send + Sync {
    fn predict(&self, features: &SparseVector) -> Result<i64, ClassificationError>;
}

/// Bag of words over a fixed vocabulary, word n-grams joined by single spaces.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CountVectorizer {
    vocabulary: HashMap<String, usize>,
    #[serde(default = "default_lowercase")]
    lowercase: bool,
    #[serde(default = "default_ngram_range")]
    ngram_range: (usize, usize),
    #[serde(default)]
    binary: bool,
}

/// Linear decision function. Binary models carry a single coefficient row
/// that scores the second class; multiclass models carry one row per class.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LinearClassifier {
    classes: Vec<i64>,
    coef: Vec<Vec<f64>>,
    intercept: Vec<f64>,
}

pub struct ModelArtifacts {
    pub vectorizer: Arc<CountVectorizer>,
    pub classifier: Arc<LinearClassifier>,
}

fn default_lowercase() -> bool {
    true
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

impl CountVectorizer {
    pub fn new(vocabulary: HashMap<String, usize>) -> Self {
        Self {
            vocabulary,
            lowercase: default_lowercase(),
            ngram_range: default_ngram_range(),
            binary: false,
        }
    }

    pub fn dimension(&self) -> usize {
        self.vocabulary.values().max().map(|v| v + 1).unwrap_or(0)
    }

    fn ngrams(&self, tokens: &[&str]) -> Vec<String> {
        let (min_n, max_n) = self.ngram_range;
        let mut ngrams = Vec::new();
        for n in min_n.max(1)..=max_n {
            for window in tokens.windows(n) {
                ngrams.push(window.join(" "));
            }
        }
        ngrams
    }
}

impl Vectorizer for CountVectorizer {
    fn transform(&self, text: &str) -> Result<SparseVector, ClassificationError> {
        if self.vocabulary.is_empty() {
            return Err(ClassificationError::Vectorization("vocabulary is empty".to_owned()));
        }

        let text = if self.lowercase { text.to_lowercase() } else { text.to_owned() };
        let tokens: Vec<&str> = TOKEN.find_iter(&text).map(|v| v.as_str()).collect();

        let mut counts = BTreeMap::new();
        for ngram in self.ngrams(&tokens) {
            if let Some(index) = self.vocabulary.get(&ngram) {
                *counts.entry(*index).or_insert(0.0) += 1.0;
            }
        }

        Ok(SparseVector {
            dimension: self.dimension(),
            entries: counts.into_iter()
                .map(|(index, count)| (index, if self.binary { 1.0 } else { count }))
                .collect(),
        })
    }
}

impl LinearClassifier {
    pub fn new(classes: Vec<i64>, coef: Vec<Vec<f64>>, intercept: Vec<f64>) -> Result<Self, String> {
        let classifier = Self {
            classes,
            coef,
            intercept,
        };
        classifier.validate()?;
        Ok(classifier)
    }

    pub fn features(&self) -> usize {
        self.coef.first().map(|v| v.len()).unwrap_or(0)
    }

    fn validate(&self) -> Result<(), String> {
        if self.classes.len() < 2 {
            return Err(format!("expected at least two classes, got {}", self.classes.len()));
        }

        let expected_rows = if self.classes.len() == 2 { 1 } else { self.classes.len() };
        if self.coef.len() != expected_rows {
            return Err(format!("expected {} coefficient rows for {} classes, got {}", expected_rows, self.classes.len(), self.coef.len()));
        }
        if self.intercept.len() != expected_rows {
            return Err(format!("expected {} intercepts, got {}", expected_rows, self.intercept.len()));
        }
        if self.coef.iter().any(|row| row.len() != self.features()) {
            return Err("coefficient rows differ in length".to_owned());
        }

        Ok(())
    }

    fn score(&self, row: usize, features: &SparseVector) -> f64 {
        let weights = &self.coef[row];
        features.entries.iter()
            .map(|(index, value)| weights[*index] * value)
            .sum::<f64>() + self.intercept[row]
    }
}

impl Classifier for LinearClassifier {
    fn predict(&self, features: &SparseVector) -> Result<i64, ClassificationError> {
        let expected = self.features();
        if features.dimension != expected || features.entries.iter().any(|(index, _)| *index >= expected) {
            return Err(ClassificationError::DimensionMismatch {
                expected,
                actual: features.dimension,
            });
        }

        if self.coef.len() == 1 {
            let class = if self.score(0, features) > 0.0 { 1 } else { 0 };
            return Ok(self.classes[class]);
        }

        (0..self.coef.len())
            .map(|row| (row, self.score(row, features)))
            .filter(|(_, score)| !score.is_nan())
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(row, _)| self.classes[row])
            .ok_or_else(|| ClassificationError::Prediction("no finite class score".to_owned()))
    }
}

impl ModelArtifacts {
    pub fn load(config: &ModelConfig) -> Result<Self, PipelineError> {
        let vectorizer_path = config.vectorizer_path();
        let classifier_path = config.classifier_path();

        let vectorizer: CountVectorizer = read_artifact(&vectorizer_path)?;
        let classifier: LinearClassifier = read_artifact(&classifier_path)?;
        classifier.validate().map_err(|reason| PipelineError::Model {
            path: classifier_path.clone(),
            reason,
        })?;

        if vectorizer.dimension() != classifier.features() {
            return Err(PipelineError::Model {
                path: classifier_path,
                reason: format!(
                    "classifier expects {} features but the vectorizer produces {}",
                    classifier.features(),
                    vectorizer.dimension(),
                ),
            });
        }

        info!("loaded model artifacts: {} features, classes {:?}", classifier.features(), classifier.classes);

        Ok(Self {
            vectorizer: Arc::new(vectorizer),
            classifier: Arc::new(classifier),
        })
    }
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, PipelineError> {
    read_to_string(path)
        .map_err(|err| err.to_string())
        .and_then(|v| serde_json::from_str(&v).map_err(|err| err.to_string()))
        .map_err(|reason| PipelineError::Model {
            path: path.to_owned(),
            reason,
        })
}
