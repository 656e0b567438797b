use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// A photo or video attached to a review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
    /// Preview image, only used for videos
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl MediaItem {
    /// URL shown in a grid cell: the thumbnail for videos, the media itself otherwise.
    pub fn preview_url(&self) -> &str {
        self.thumbnail.as_deref().unwrap_or(&self.url)
    }
}

/// Paired progress photos with a free-text timeframe label ("8 weeks", "3 months").
/// The timeframe is not validated against any date arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BeforeAfter {
    pub before: String,
    pub after: String,
    pub timeframe: String,
}
