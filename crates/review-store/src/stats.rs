// Aggregation over one product's review set. Stats are derived on demand and
// never cached; at this data scale recomputation is cheaper than invalidation.

use review_models::{RatingBreakdown, Review, ReviewStats};

/// Compute aggregate statistics for a review set.
///
/// The empty set short-circuits to [`ReviewStats::empty`] so the average never
/// divides by zero. Each star-bucket percentage is rounded independently
/// (half away from zero), so the five buckets need not sum to exactly 100.
pub fn compute_stats(reviews: &[Review]) -> ReviewStats {
    if reviews.is_empty() {
        return ReviewStats::empty();
    }

    let total = reviews.len() as u32;
    let rating_sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    let average_rating = (f64::from(rating_sum) / f64::from(total) * 10.0).round() / 10.0;

    let mut counts = [0u32; 5];
    for review in reviews {
        let slot = usize::from(review.rating)
            .checked_sub(1)
            .and_then(|index| counts.get_mut(index));
        if let Some(slot) = slot {
            *slot += 1;
        }
    }

    let percentage = RatingBreakdown {
        five: percentage_of(counts[4], total),
        four: percentage_of(counts[3], total),
        three: percentage_of(counts[2], total),
        two: percentage_of(counts[1], total),
        one: percentage_of(counts[0], total),
    };

    let verified_purchases = reviews.iter().filter(|r| r.verified).count() as u32;
    let with_photos = reviews.iter().filter(|r| r.has_photos()).count() as u32;
    let with_videos = reviews.iter().filter(|r| r.has_videos()).count() as u32;
    let recommending = reviews.iter().filter(|r| r.would_recommend()).count() as u32;

    ReviewStats {
        total_reviews: total,
        average_rating,
        percentage,
        verified_purchases,
        with_photos,
        with_videos,
        would_recommend: percentage_of(recommending, total),
    }
}

fn percentage_of(count: u32, total: u32) -> u32 {
    (f64::from(count) / f64::from(total) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use review_models::ReviewLength;

    fn create_review(id: &str, rating: u8) -> Review {
        Review {
            id: id.to_string(),
            product_id: "test-product".to_string(),
            product_handle: None,
            user_id: "user".to_string(),
            user_name: "Test U.".to_string(),
            user_initials: "TU".to_string(),
            rating,
            title: String::new(),
            content: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
            verified: true,
            skin_type: vec![],
            age_range: "25-34".to_string(),
            skin_concerns: vec![],
            helpful: 0,
            not_helpful: 0,
            media: vec![],
            before_after: None,
            user_location: None,
            review_length: ReviewLength::Short,
        }
    }

    #[test]
    fn test_empty_set_yields_zeroed_stats() {
        assert_eq!(compute_stats(&[]), ReviewStats::empty());
    }

    #[test]
    fn test_average_rounds_to_one_decimal() {
        // (5 + 4 + 5) / 3 = 4.666... -> 4.7
        let reviews = vec![
            create_review("a", 5),
            create_review("b", 4),
            create_review("c", 5),
        ];
        let stats = compute_stats(&reviews);
        assert_eq!(stats.average_rating, 4.7);
        assert_eq!(stats.total_reviews, 3);
        assert_eq!(stats.percentage.five, 67);
        assert_eq!(stats.percentage.four, 33);
        assert_eq!(stats.would_recommend, 100);
    }

    #[test]
    fn test_percentages_sum_close_to_100() {
        // Independently rounded buckets: 1/3 each rounds to 33+33+33 = 99
        let reviews = vec![
            create_review("a", 5),
            create_review("b", 3),
            create_review("c", 1),
        ];
        let stats = compute_stats(&reviews);
        let sum = (1..=5).map(|s| stats.percentage.get(s)).sum::<u32>();
        assert!((98..=102).contains(&sum), "sum was {sum}");
        assert_eq!(stats.would_recommend, 33);
    }

    #[test]
    fn test_would_recommend_counts_four_and_above() {
        let reviews = vec![
            create_review("a", 4),
            create_review("b", 5),
            create_review("c", 3),
            create_review("d", 2),
        ];
        let stats = compute_stats(&reviews);
        assert_eq!(stats.would_recommend, 50);
        assert_eq!(stats.average_rating, 3.5);
    }
}
