use std::fmt;
use std::str::FromStr;

use review_models::Review;

/// Filter applied to the review listing before sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterKey {
    #[default]
    All,
    /// Exact star rating, 1..=5
    Stars(u8),
    Verified,
    /// Image attachments or a before/after pair
    WithPhotos,
    WithVideos,
}

impl FilterKey {
    pub fn matches(self, review: &Review) -> bool {
        match self {
            FilterKey::All => true,
            FilterKey::Stars(stars) => review.rating == stars,
            FilterKey::Verified => review.verified,
            FilterKey::WithPhotos => review.has_photos(),
            FilterKey::WithVideos => review.has_videos(),
        }
    }
}

impl FromStr for FilterKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(FilterKey::All),
            "verified" => Ok(FilterKey::Verified),
            "with-photos" | "photos" => Ok(FilterKey::WithPhotos),
            "with-videos" | "videos" => Ok(FilterKey::WithVideos),
            other => match other.parse::<u8>() {
                Ok(stars @ 1..=5) => Ok(FilterKey::Stars(stars)),
                _ => Err(format!(
                    "Invalid filter: {}. Use 'all', '1'-'5', 'verified', 'with-photos', or 'with-videos'",
                    s
                )),
            },
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterKey::All => write!(f, "all"),
            FilterKey::Stars(stars) => write!(f, "{stars}"),
            FilterKey::Verified => write!(f, "verified"),
            FilterKey::WithPhotos => write!(f, "with-photos"),
            FilterKey::WithVideos => write!(f, "with-videos"),
        }
    }
}
