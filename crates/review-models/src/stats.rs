use serde::{Deserialize, Serialize};

/// Share of reviews per star value, each rounded independently. The five
/// buckets are not guaranteed to sum to exactly 100.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RatingBreakdown {
    #[serde(rename = "5")]
    pub five: u32,
    #[serde(rename = "4")]
    pub four: u32,
    #[serde(rename = "3")]
    pub three: u32,
    #[serde(rename = "2")]
    pub two: u32,
    #[serde(rename = "1")]
    pub one: u32,
}

impl RatingBreakdown {
    pub fn get(&self, stars: u8) -> u32 {
        match stars {
            5 => self.five,
            4 => self.four,
            3 => self.three,
            2 => self.two,
            1 => self.one,
            _ => 0,
        }
    }
}

/// Aggregate statistics over one product's reviews. Always recomputed on
/// demand, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    pub total_reviews: u32,
    /// Mean rating rounded to one decimal; 0.0 when there are no reviews
    pub average_rating: f64,
    pub percentage: RatingBreakdown,
    pub verified_purchases: u32,
    pub with_photos: u32,
    pub with_videos: u32,
    /// Percentage of reviews rated 4 or above
    pub would_recommend: u32,
}

impl ReviewStats {
    /// Zero-filled stats for products with no reviews. Explicit branch so the
    /// average never divides by zero.
    pub fn empty() -> Self {
        Self {
            total_reviews: 0,
            average_rating: 0.0,
            percentage: RatingBreakdown::default(),
            verified_purchases: 0,
            with_photos: 0,
            with_videos: 0,
            would_recommend: 0,
        }
    }
}
