use {
    chrono::{DateTime, Utc},
    serde::Serialize,
    typed_builder::TypedBuilder,
    crate::{
        sentiment::SentimentSummary,
        source::Platform,
    },
};

#[derive(TypedBuilder, Serialize, Debug)]
pub struct AnalysisReport {
    platform: Platform,
    source_id: String,
    #[builder(default = Utc::now())]
    generated_at: DateTime<Utc>,
    normalized_records: usize,
    summary: SentimentSummary,
}

impl AnalysisReport {
    pub fn summary(&self) -> &SentimentSummary {
        &self.summary
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
