use {
    serde_json::Value,
    reqwest::StatusCode,
    tracing::debug,
    crate::{
        config::TranslationConfig,
        error::NormalizationError,
    },
};

/// Language detection and translation, both backed by a remote service.
#[allow(async_fn_in_trait)]
pub trait LanguageService {
    async fn detect(&self, text: &str) -> Result<String, NormalizationError>;

    async fn translate(&self, text: &str, source_language: &str, target_language: &str) -> Result<String, NormalizationError>;
}

/// Client for the public Google Translate endpoint.
pub struct GoogleTranslate {
    client: reqwest::Client,
    endpoint: String,
}

impl GoogleTranslate {
    pub fn new(config: &TranslationConfig) -> Result<Self, NormalizationError> {
        Ok(Self {
            client: reqwest::Client::builder()
                .timeout(config.timeout())
                .build()?,
            endpoint: config.endpoint(),
        })
    }

    async fn request(&self, text: &str, source_language: &str, target_language: &str) -> Result<Value, NormalizationError> {
        let res = self.client.get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", source_language),
                ("tl", target_language),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        if res.status() != StatusCode::OK {
            return Err(NormalizationError::Status(res.status().as_u16()));
        }

        Ok(res.json().await?)
    }
}

impl LanguageService for GoogleTranslate {
    async fn detect(&self, text: &str) -> Result<String, NormalizationError> {
        let body = self.request(text, "auto", "en").await?;
        let language = detected_language(&body)
            .ok_or_else(|| NormalizationError::Detection("response carries no source language".to_owned()))?;

        debug!("detected language: {}", language);
        Ok(language)
    }

    async fn translate(&self, text: &str, source_language: &str, target_language: &str) -> Result<String, NormalizationError> {
        let body = self.request(text, source_language, target_language).await?;

        translated_text(&body).ok_or_else(|| NormalizationError::Translation {
            source_language: source_language.to_owned(),
            reason: "response carries no translated segments".to_owned(),
        })
    }
}

// [[["translated", "original", ...], ...], null, "source language", ...]
fn detected_language(body: &Value) -> Option<String> {
    body.get(2)?.as_str().map(|v| v.to_owned())
}

fn translated_text(body: &Value) -> Option<String> {
    let segments = body.get(0)?.as_array()?;

    let translated: String = segments.iter()
        .filter_map(|segment| segment.get(0)?.as_str())
        .collect();

    if translated.is_empty() {
        None
    } else {
        Some(translated)
    }
}
