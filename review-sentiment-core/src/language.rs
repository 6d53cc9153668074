use {
    tracing::{info, error},
    crate::{
        error::NormalizationError,
        translation::LanguageService,
        transliteration::{Transliterator, Script, Scheme},
    },
};

pub const ENGLISH: &str = "en";

/// Brings a record into English: detect, romanize Indic scripts, translate.
pub struct LanguageNormalizer<S, T> {
    service: S,
    transliterator: T,
}

impl<S: LanguageService, T: Transliterator> LanguageNormalizer<S, T> {
    pub fn new(service: S, transliterator: T) -> Self {
        Self {
            service,
            transliterator,
        }
    }

    /// Never fails: any detection, transliteration or translation error falls
    /// back to the untouched input.
    pub async fn normalize(&self, text: &str) -> String {
        match self.try_normalize(text).await {
            Ok(v) => v,
            Err(err) => {
                error!("error during transliteration/translation: {}", err);
                text.to_owned()
            }
        }
    }

    pub async fn try_normalize(&self, text: &str) -> Result<String, NormalizationError> {
        let detected = self.service.detect(text).await?;
        info!("detected language: {}", detected);

        if detected == ENGLISH {
            return Ok(text.to_owned());
        }

        let transliterated = match Script::for_language(&detected) {
            Some(script) => self.transliterator.transliterate(text, script, Scheme::Itrans)?,
            None => text.to_owned(),
        };

        self.service.translate(&transliterated, &detected, ENGLISH).await
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        std::sync::Mutex,
        crate::transliteration::IndicTransliterator,
    };

    struct FakeService {
        language: Result<&'static str, ()>,
        translation: Result<&'static str, ()>,
        translated_inputs: Mutex<Vec<(String, String)>>,
    }

    impl FakeService {
        fn new(language: Result<&'static str, ()>, translation: Result<&'static str, ()>) -> Self {
            Self {
                language,
                translation,
                translated_inputs: Mutex::new(Vec::new()),
            }
        }
    }

    impl LanguageService for &FakeService {
        async fn detect(&self, _text: &str) -> Result<String, NormalizationError> {
            self.language
                .map(|v| v.to_owned())
                .map_err(|_| NormalizationError::Detection("service unavailable".to_owned()))
        }

        async fn translate(&self, text: &str, source_language: &str, target_language: &str) -> Result<String, NormalizationError> {
            assert_eq!(target_language, ENGLISH);
            self.translated_inputs.lock().unwrap().push((text.to_owned(), source_language.to_owned()));
            self.translation
                .map(|v| v.to_owned())
                .map_err(|_| NormalizationError::Translation {
                    source_language: source_language.to_owned(),
                    reason: "timed out".to_owned(),
                })
        }
    }

    struct FailingTransliterator;

    impl Transliterator for FailingTransliterator {
        fn transliterate(&self, _text: &str, script: Script, _scheme: Scheme) -> Result<String, NormalizationError> {
            Err(NormalizationError::Transliteration {
                script: script.to_string(),
                reason: "unsupported".to_owned(),
            })
        }
    }

    #[tokio::test]
    async fn english_text_is_returned_unchanged() {
        let service = FakeService::new(Ok("en"), Ok("should not be used"));
        let normalizer = LanguageNormalizer::new(&service, IndicTransliterator);

        assert_eq!(normalizer.normalize("Great product").await, "Great product");
        assert!(service.translated_inputs.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn indic_text_is_romanized_before_translation() {
        let service = FakeService::new(Ok("hi"), Ok("hello"));
        let normalizer = LanguageNormalizer::new(&service, IndicTransliterator);

        assert_eq!(normalizer.normalize("नमस्ते").await, "hello");
        assert_eq!(
            *service.translated_inputs.lock().unwrap(),
            vec![("namaste".to_owned(), "hi".to_owned())],
        );
    }

    #[tokio::test]
    async fn other_languages_are_translated_as_is() {
        let service = FakeService::new(Ok("fr"), Ok("very good"));
        let normalizer = LanguageNormalizer::new(&service, IndicTransliterator);

        assert_eq!(normalizer.normalize("tres bien").await, "very good");
        assert_eq!(
            *service.translated_inputs.lock().unwrap(),
            vec![("tres bien".to_owned(), "fr".to_owned())],
        );
    }

    #[tokio::test]
    async fn detection_failure_falls_back_to_input() {
        let service = FakeService::new(Err(()), Ok("unused"));
        let normalizer = LanguageNormalizer::new(&service, IndicTransliterator);

        assert_eq!(normalizer.normalize("बहुत अच्छा").await, "बहुत अच्छा");
    }

    #[tokio::test]
    async fn translation_failure_falls_back_to_input() {
        let service = FakeService::new(Ok("ta"), Err(()));
        let normalizer = LanguageNormalizer::new(&service, IndicTransliterator);

        assert_eq!(normalizer.normalize("நன்றி").await, "நன்றி");
    }

    #[tokio::test]
    async fn transliteration_failure_falls_back_to_input() {
        let service = FakeService::new(Ok("hi"), Ok("unused"));
        let normalizer = LanguageNormalizer::new(&service, FailingTransliterator);

        assert!(normalizer.try_normalize("नमस्ते").await.is_err());
        assert_eq!(normalizer.normalize("नमस्ते").await, "नमस्ते");
        assert!(service.translated_inputs.lock().unwrap().is_empty());
    }
}
