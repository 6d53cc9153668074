use {
    std::{collections::BTreeMap, fmt, sync::Arc},
    serde::{Serialize, Deserialize},
    tracing::{info, warn},
    crate::{
        error::ClassificationError,
        model::{Vectorizer, Classifier},
        models::{NormalizedRecord, LabeledRecord},
    },
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sentiment {
    Positive,
    Negative,
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SentimentSummary {
    counts: BTreeMap<Sentiment, usize>,
}

/// Applies the shared, read-only model artifacts to normalized text.
pub struct SentimentClassifier<V: ?Sized, C: ?Sized> {
    vectorizer: Arc<V>,
    classifier: Arc<C>,
}

impl Sentiment {
    pub fn from_class_id(id: i64) -> Self {
        match id {
            0 => Self::Negative,
            2 => Self::Positive,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl SentimentSummary {
    pub fn get(&self, sentiment: Sentiment) -> usize {
        self.counts.get(&sentiment).cloned().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn counts(&self) -> &BTreeMap<Sentiment, usize> {
        &self.counts
    }

    fn add(&mut self, sentiment: Sentiment) {
        *self.counts.entry(sentiment).or_insert(0) += 1;
    }
}

impl FromIterator<Sentiment> for SentimentSummary {
    fn from_iter<I: IntoIterator<Item = Sentiment>>(iter: I) -> Self {
        let mut summary = Self::default();
        for sentiment in iter {
            summary.add(sentiment);
        }
        summary
    }
}

impl<V: Vectorizer + ?Sized, C: Classifier + ?Sized> SentimentClassifier<V, C> {
    pub fn new(vectorizer: Arc<V>, classifier: Arc<C>) -> Self {
        Self {
            vectorizer,
            classifier,
        }
    }

    /// Never fails: errors and class ids outside the label table become `Unknown`.
    pub fn classify(&self, text: &str) -> Sentiment {
        match self.predict(text) {
            Ok(id) => {
                let sentiment = Sentiment::from_class_id(id);
                if sentiment == Sentiment::Unknown {
                    warn!("classifier returned unmapped class id: {}", id);
                }
                sentiment
            },
            Err(err) => {
                warn!("error during sentiment prediction: {}", err);
                Sentiment::Unknown
            }
        }
    }

    pub fn label_batch(&self, records: Vec<NormalizedRecord>) -> Vec<LabeledRecord> {
        records.into_iter()
            .map(|record| {
                let sentiment = self.classify(&record.text);
                record.labeled(sentiment)
            })
            .collect()
    }

    pub fn classify_batch(&self, records: &[NormalizedRecord]) -> SentimentSummary {
        let summary: SentimentSummary = records.iter()
            .map(|record| self.classify(&record.text))
            .collect();

        info!("classified {} records: {:?}", summary.total(), summary.counts());
        summary
    }

    fn predict(&self, text: &str) -> Result<i64, ClassificationError> {
        let features = self.vectorizer.transform(text)?;
        self.classifier.predict(&features)
    }
}
