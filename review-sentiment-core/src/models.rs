use {
    serde::{Serialize, Deserialize},
    crate::sentiment::Sentiment,
};

/// The star rating bucket of a review, or the publish timestamp of a comment.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub enum Auxiliary {
    Category(String),
    Published(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub auxiliary: Auxiliary,
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub auxiliary: Auxiliary,
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LabeledRecord {
    pub auxiliary: Auxiliary,
    pub text: String,
    pub sentiment: Sentiment,
}

impl Auxiliary {
    pub fn value(&self) -> &str {
        match self {
            Self::Category(v) => v,
            Self::Published(v) => v,
        }
    }
}

impl RawRecord {
    pub fn review(category: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            auxiliary: Auxiliary::Category(category.into()),
            text: text.into(),
        }
    }

    pub fn comment(published: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            auxiliary: Auxiliary::Published(published.into()),
            text: text.into(),
        }
    }

    pub fn normalized(self, text: String) -> NormalizedRecord {
        NormalizedRecord {
            auxiliary: self.auxiliary,
            text,
        }
    }
}

impl NormalizedRecord {
    pub fn labeled(self, sentiment: Sentiment) -> LabeledRecord {
        LabeledRecord {
            auxiliary: self.auxiliary,
            text: self.text,
            sentiment,
        }
    }
}
