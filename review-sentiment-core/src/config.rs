use {
    std::{fs::read_to_string, path::{Path, PathBuf}, time::Duration},
    serde::Deserialize,
};

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub pipeline: PipelineConfig,
    pub translation: Option<TranslationConfig>,
    pub model: Option<ModelConfig>,
    #[serde(default)]
    pub spelling: SpellingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Deserialize, Clone, Debug)]
pub struct PipelineConfig {
    #[serde(default = "default_shuffle_seed")]
    pub shuffle_seed: u64,
    concurrency: Option<usize>,
    output_dir: Option<PathBuf>,
    scrape_dir: Option<PathBuf>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TranslationConfig {
    endpoint: Option<String>,
    timeout_seconds: Option<u64>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ModelConfig {
    vectorizer_path: Option<PathBuf>,
    classifier_path: Option<PathBuf>,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct SpellingConfig {
    corpus_path: Option<PathBuf>,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub json: bool,
}

fn default_shuffle_seed() -> u64 {
    42
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            shuffle_seed: default_shuffle_seed(),
            concurrency: None,
            output_dir: None,
            scrape_dir: None,
        }
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_seconds: None,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            vectorizer_path: None,
            classifier_path: None,
        }
    }
}

impl Config {
    /// Reads `./config.toml`, then `/config/config.toml`. The caller decides
    /// how to fall back, so the failure can be logged once logging is up.
    pub fn load() -> Result<Self, String> {
        Self::load_first(&[Path::new("./config.toml"), Path::new("/config/config.toml")])
    }

    /// The first readable file wins; a parse error there is not retried on the next one.
    pub fn load_first(paths: &[&Path]) -> Result<Self, String> {
        let (path, contents) = paths.iter()
            .find_map(|path| read_to_string(path).ok().map(|v| (path, v)))
            .ok_or_else(|| format!("no config file found at {:?}", paths))?;

        Self::parse(&contents).map_err(|err| format!("failed to parse {}: {}", path.display(), err))
    }

    pub fn load_from(path: &Path) -> Result<Self, String> {
        read_to_string(path)
            .map_err(|err| format!("failed to read {}: {}", path.display(), err))
            .and_then(|v| Self::parse(&v))
    }

    pub fn parse(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|err| err.to_string())
    }

    pub fn translation(&self) -> TranslationConfig {
        self.translation.as_ref().cloned().unwrap_or_default()
    }

    pub fn model(&self) -> ModelConfig {
        self.model.as_ref().cloned().unwrap_or_default()
    }
}

impl PipelineConfig {
    /// Number of language normalization requests allowed in flight at once.
    pub fn concurrency(&self) -> usize {
        self.concurrency.unwrap_or(1).max(1)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.as_ref().cloned().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Root of the scraper's per-source folders.
    pub fn scrape_dir(&self) -> PathBuf {
        self.scrape_dir.as_ref().cloned().unwrap_or_else(|| PathBuf::from("./webscrapping"))
    }
}

impl TranslationConfig {
    pub fn endpoint(&self) -> String {
        self.endpoint.as_ref().cloned().unwrap_or("https://translate.googleapis.com/translate_a/single".to_owned())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.unwrap_or(10))
    }
}

impl ModelConfig {
    pub fn vectorizer_path(&self) -> PathBuf {
        self.vectorizer_path.as_ref().cloned().unwrap_or_else(|| PathBuf::from("./model/countvectorizer.json"))
    }

    pub fn classifier_path(&self) -> PathBuf {
        self.classifier_path.as_ref().cloned().unwrap_or_else(|| PathBuf::from("./model/sentiment_analysis.json"))
    }
}

impl SpellingConfig {
    pub fn corpus_path(&self) -> Option<&PathBuf> {
        self.corpus_path.as_ref()
    }
}
