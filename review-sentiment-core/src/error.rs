use {
    std::{io, path::PathBuf},
    thiserror::Error,
};

/// Failure of one record's language normalization. Never fatal to a batch.
#[derive(Debug, Error)]
pub enum NormalizationError {
    #[error("language detection failed: {0}")]
    Detection(String),
    #[error("transliteration from {script} failed: {reason}")]
    Transliteration { script: String, reason: String },
    #[error("translation from '{source_language}' failed: {reason}")]
    Translation { source_language: String, reason: String },
    #[error("translation service request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("translation service returned status {0}")]
    Status(u16),
}

/// Failure to label one record. Recovered as an unknown sentiment.
#[derive(Debug, Error)]
pub enum ClassificationError {
    #[error("feature vector has {actual} dimensions, classifier expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("vectorization failed: {0}")]
    Vectorization(String),
    #[error("prediction failed: {0}")]
    Prediction(String),
}

/// Failure that aborts a whole batch.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to read records from {path}: {reason}")]
    Input { path: PathBuf, reason: String },
    #[error("failed to write normalized records: {0}")]
    Sink(String),
    #[error("failed to load model artifact {path}: {reason}")]
    Model { path: PathBuf, reason: String },
    #[error("post-processing failed: {0}")]
    Postprocess(String),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Rejected before any scraping or processing starts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("unsupported url: {0}")]
    UnsupportedUrl(String),
    #[error("unable to extract product details from url: {0}")]
    MissingProductDetails(String),
    #[error("unable to extract video id from url: {0}")]
    MissingVideoId(String),
}
