use {
    crate::{
        error::PipelineError,
        spelling::SpellCorrector,
        stopwords::is_stopword,
    },
};

pub struct Postprocessor<C> {
    corrector: C,
}

impl<C: SpellCorrector> Postprocessor<C> {
    pub fn new(corrector: C) -> Self {
        Self {
            corrector,
        }
    }

    /// Drops stopwords, then corrects spelling. A correction failure is systemic
    /// and aborts the batch.
    pub fn postprocess(&self, text: &str) -> Result<String, PipelineError> {
        let filtered = remove_stopwords(text);
        self.corrector.correct(&filtered)
    }
}

pub fn remove_stopwords(text: &str) -> String {
    text.split_whitespace()
        .filter(|word| !is_stopword(word))
        .collect::<Vec<_>>()
        .join(" ")
}
