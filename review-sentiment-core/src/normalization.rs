use {
    futures::stream::{self, StreamExt},
    rand::{rngs::StdRng, seq::SliceRandom, SeedableRng},
    tracing::{info, debug},
    crate::{
        cleaner::clean,
        error::PipelineError,
        language::LanguageNormalizer,
        models::{RawRecord, NormalizedRecord},
        postprocess::Postprocessor,
        progress::Progress,
        spelling::SpellCorrector,
        storage::RecordSink,
        translation::LanguageService,
        transliteration::Transliterator,
    },
};

pub const DEFAULT_SHUFFLE_SEED: u64 = 42;

/// Runs cleaning, language normalization and post-processing over one batch
/// and persists the result.
pub struct BatchOrchestrator<S, T, C> {
    normalizer: LanguageNormalizer<S, T>,
    postprocessor: Postprocessor<C>,
    shuffle_seed: u64,
    concurrency: usize,
}

impl<S: LanguageService, T: Transliterator, C: SpellCorrector> BatchOrchestrator<S, T, C> {
    pub fn new(normalizer: LanguageNormalizer<S, T>, postprocessor: Postprocessor<C>) -> Self {
        Self {
            normalizer,
            postprocessor,
            shuffle_seed: DEFAULT_SHUFFLE_SEED,
            concurrency: 1,
        }
    }

    pub fn with_shuffle_seed(mut self, shuffle_seed: u64) -> Self {
        self.shuffle_seed = shuffle_seed;
        self
    }

    /// Number of language normalization requests in flight. Zero is treated as one.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub async fn normalize_batch(
        &self,
        mut records: Vec<RawRecord>,
        sink: &mut impl RecordSink,
    ) -> Result<Vec<NormalizedRecord>, PipelineError> {
        let total = records.len();
        info!("normalizing batch of {} records (seed {}, concurrency {})", total, self.shuffle_seed, self.concurrency);

        records.shuffle(&mut StdRng::seed_from_u64(self.shuffle_seed));

        let cleaned: Vec<(RawRecord, String)> = records.into_iter()
            .filter_map(|record| {
                let cleaned = clean(&record.text);
                if cleaned.is_empty() {
                    debug!("dropping record empty after cleaning: {:?}", record.text);
                    None
                } else {
                    Some((record, cleaned))
                }
            })
            .collect();

        let mut progress = Progress::new("language normalization", cleaned.len());
        let normalized: Vec<(RawRecord, String)> = stream::iter(cleaned)
            .map(|(record, text)| async move {
                let text = self.normalizer.normalize(&text).await;
                (record, text)
            })
            .buffered(self.concurrency)
            .inspect(|_| {
                progress.update();
            })
            .collect()
            .await;
        progress.finish();

        let output = normalized.into_iter()
            .map(|(record, text)| self.postprocessor.postprocess(&text).map(|text| record.normalized(text)))
            .filter(|result| match result {
                Ok(record) if record.text.is_empty() => {
                    debug!("dropping record empty after post-processing");
                    false
                },
                _ => true,
            })
            .collect::<Result<Vec<_>, _>>()?;

        sink.write_records(&output)?;
        info!("normalized {} of {} records", output.len(), total);

        Ok(output)
    }
}
