use {
    std::{fmt, path::{Path, PathBuf}},
    once_cell::sync::Lazy,
    regex::Regex,
    serde::{Serialize, Deserialize},
    tracing::{info, warn},
    crate::{
        error::InvalidInput,
        models::RawRecord,
    },
};

static YOUTUBE_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(https?://)?(www\.)?(youtube\.com|youtu\.be)(/.*)?$").unwrap());
static AMAZON_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(https?://)?(www\.)?amazon\.(com|in|co\.[a-z]{2})(/.*)?$").unwrap());

static AMAZON_PRODUCT_TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"amazon\.[a-zA-Z.]+/([^/]+)/dp/").unwrap());
static AMAZON_PRODUCT_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"/dp/([A-Z0-9]+)").unwrap());
static YOUTUBE_VIDEO_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})(?:&|/|$)").unwrap());

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Amazon,
    YouTube,
}

/// What a validated url points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRef {
    AmazonProduct { id: String, title: String },
    YouTubeVideo { id: String },
}

impl Platform {
    pub fn from_url(url: &str) -> Result<Self, InvalidInput> {
        info!("matching url: {}", url);
        let url = url.trim();

        if YOUTUBE_URL.is_match(url) {
            Ok(Self::YouTube)
        } else if AMAZON_URL.is_match(url) {
            Ok(Self::Amazon)
        } else {
            warn!("invalid url: {}", url);
            Err(InvalidInput::UnsupportedUrl(url.to_owned()))
        }
    }

    pub fn auxiliary_column(&self) -> &'static str {
        match self {
            Self::Amazon => "category",
            Self::YouTube => "published",
        }
    }

    pub fn text_column(&self) -> &'static str {
        match self {
            Self::Amazon => "review",
            Self::YouTube => "text",
        }
    }

    /// File name of the normalized intermediate output.
    pub fn output_file_name(&self) -> &'static str {
        match self {
            Self::Amazon => "reviews.csv",
            Self::YouTube => "comments.csv",
        }
    }

    pub fn record(&self, auxiliary: String, text: String) -> RawRecord {
        match self {
            Self::Amazon => RawRecord::review(auxiliary, text),
            Self::YouTube => RawRecord::comment(auxiliary, text),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl SourceRef {
    pub fn parse(url: &str) -> Result<Self, InvalidInput> {
        let url = url.trim();

        match Platform::from_url(url)? {
            Platform::Amazon => {
                let title = AMAZON_PRODUCT_TITLE.captures(url).map(|v| v[1].to_owned());
                let id = AMAZON_PRODUCT_ID.captures(url).map(|v| v[1].to_owned());

                match (id, title) {
                    (Some(id), Some(title)) => {
                        info!("extracted product id: {}, product title: {}", id, title);
                        Ok(Self::AmazonProduct { id, title })
                    },
                    _ => Err(InvalidInput::MissingProductDetails(url.to_owned())),
                }
            },
            Platform::YouTube => {
                let id = YOUTUBE_VIDEO_ID.captures(url)
                    .map(|v| v[1].to_owned())
                    .ok_or_else(|| InvalidInput::MissingVideoId(url.to_owned()))?;

                info!("extracted video id: {}", id);
                Ok(Self::YouTubeVideo { id })
            },
        }
    }

    pub fn platform(&self) -> Platform {
        match self {
            Self::AmazonProduct { .. } => Platform::Amazon,
            Self::YouTubeVideo { .. } => Platform::YouTube,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::AmazonProduct { id, .. } => id,
            Self::YouTubeVideo { id } => id,
        }
    }

    /// Where the scraper leaves records for this source: `<dir>/<id>/reviews_<id>.csv`
    /// or `<dir>/<id>/comment_<id>.csv`.
    pub fn scraped_csv_path(&self, scrape_dir: &Path) -> PathBuf {
        let file_name = match self {
            Self::AmazonProduct { id, .. } => format!("reviews_{}.csv", id),
            Self::YouTubeVideo { id } => format!("comment_{}.csv", id),
        };
        scrape_dir.join(self.id()).join(file_name)
    }
}
