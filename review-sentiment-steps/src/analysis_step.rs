use {
    std::{fs, path::Path},
    anyhow::{Context, Result},
    tracing::{info, warn},
    review_sentiment_core::{
        config::Config,
        language::LanguageNormalizer,
        model::ModelArtifacts,
        normalization::BatchOrchestrator,
        postprocess::Postprocessor,
        report::AnalysisReport,
        sentiment::SentimentClassifier,
        source::SourceRef,
        spelling::NorvigCorrector,
        storage::{load_raw_records, CsvSink},
        translation::GoogleTranslate,
        transliteration::IndicTransliterator,
    },
};

pub async fn analysis_step(config: &Config, source: &SourceRef, input: &Path) -> Result<AnalysisReport> {
    let platform = source.platform();
    info!("running analysis step for {} source {}", platform, source.id());

    let artifacts = ModelArtifacts::load(&config.model())?;
    let records = load_raw_records(input, platform)?;

    let translation = config.translation();
    let service = GoogleTranslate::new(&translation).context("failed to create translation client")?;
    let normalizer = LanguageNormalizer::new(service, IndicTransliterator);

    let orchestrator = BatchOrchestrator::new(normalizer, Postprocessor::new(spell_corrector(config)?))
        .with_shuffle_seed(config.pipeline.shuffle_seed)
        .with_concurrency(config.pipeline.concurrency());

    let output_dir = config.pipeline.output_dir();
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;
    let mut sink = CsvSink::in_dir(&output_dir, platform);

    let normalized = orchestrator.normalize_batch(records, &mut sink).await?;

    let classifier = SentimentClassifier::new(artifacts.vectorizer, artifacts.classifier);
    let summary = classifier.classify_batch(&normalized);

    Ok(AnalysisReport::builder()
        .platform(platform)
        .source_id(source.id().to_owned())
        .normalized_records(normalized.len())
        .summary(summary)
        .build())
}

fn spell_corrector(config: &Config) -> Result<NorvigCorrector> {
    match config.spelling.corpus_path() {
        Some(path) => {
            let corrector = NorvigCorrector::from_corpus_file(path)?;
            info!("loaded spelling dictionary of {} words", corrector.dictionary_size());
            Ok(corrector)
        },
        None => {
            warn!("no spelling corpus configured, words will be left as is");
            Ok(NorvigCorrector::default())
        }
    }
}
