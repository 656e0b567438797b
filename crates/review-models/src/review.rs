use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::media::{BeforeAfter, MediaItem, MediaKind};

/// Precomputed length bucket carried by the dataset. Not re-derived from
/// `content`, so it is display metadata only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReviewLength {
    Short,
    Medium,
    Long,
}

/// A single user-submitted product evaluation. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub product_id: String,
    /// Alternate product identifier; lookups accept either key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_handle: Option<String>,
    pub user_id: String,
    pub user_name: String,
    pub user_initials: String,
    /// Star rating, 1..=5
    pub rating: u8,
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
    pub verified: bool,
    pub skin_type: Vec<String>,
    pub age_range: String,
    pub skin_concerns: Vec<String>,
    pub helpful: u32,
    pub not_helpful: u32,
    pub media: Vec<MediaItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_after: Option<BeforeAfter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_location: Option<String>,
    pub review_length: ReviewLength,
}

impl Review {
    /// Photos for stats/filter purposes: any image attachment, or a
    /// before/after pair (which is always photographic).
    pub fn has_photos(&self) -> bool {
        self.media.iter().any(|m| m.kind == MediaKind::Image) || self.before_after.is_some()
    }

    pub fn has_videos(&self) -> bool {
        self.media.iter().any(|m| m.kind == MediaKind::Video)
    }

    /// Any attachment at all, counting before/after pairs.
    pub fn has_media(&self) -> bool {
        !self.media.is_empty() || self.before_after.is_some()
    }

    /// Net helpfulness vote balance. Can go negative; used as-is as a sort
    /// key, never clamped.
    pub fn helpfulness_score(&self) -> i64 {
        i64::from(self.helpful) - i64::from(self.not_helpful)
    }

    pub fn would_recommend(&self) -> bool {
        self.rating >= 4
    }
}
