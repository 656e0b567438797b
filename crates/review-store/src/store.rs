use std::path::Path;
use std::sync::OnceLock;

use review_models::{Review, ReviewStats};
use tracing::{debug, info};

use crate::error::StoreError;
use crate::stats::compute_stats;

/// Fixture dataset shipped with the crate, the storefront's sample reviews.
const BUILTIN_DATASET: &str = include_str!("../data/reviews.json");

static BUILTIN: OnceLock<ReviewStore> = OnceLock::new();

/// Read-only collection of reviews. Loaded once, queried for the process
/// lifetime; none of the query methods mutate it.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewStore {
    reviews: Vec<Review>,
}

impl ReviewStore {
    pub fn new(reviews: Vec<Review>) -> Result<Self, StoreError> {
        for review in &reviews {
            if !(1..=5).contains(&review.rating) {
                return Err(StoreError::InvalidRating {
                    id: review.id.clone(),
                    rating: review.rating,
                });
            }
        }
        Ok(Self { reviews })
    }

    /// The embedded sample dataset, parsed on first use.
    ///
    /// Panics if the dataset compiled into the binary is malformed, which a
    /// test over every builtin product guards against.
    pub fn builtin() -> &'static Self {
        BUILTIN.get_or_init(|| {
            Self::from_json_str(BUILTIN_DATASET).expect("embedded review dataset is valid")
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let reviews: Vec<Review> = serde_json::from_str(json)?;
        let store = Self::new(reviews)?;
        debug!("parsed review dataset ({} reviews)", store.len());
        Ok(store)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json_str(&content)?;
        info!("loaded {} reviews from {}", store.len(), path.display());
        Ok(store)
    }

    pub fn all(&self) -> &[Review] {
        &self.reviews
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Every review for a product, in collection (insertion) order.
    ///
    /// Matching is deliberately loose: a review matches on its `product_id`,
    /// on its `product_handle` against the caller's handle, or on its
    /// `product_handle` against the caller's id. The last clause tolerates
    /// callers passing a handle in the id slot. The clauses describe the same
    /// review record, so no de-duplication is needed.
    pub fn product_reviews(&self, product_id: &str, product_handle: Option<&str>) -> Vec<Review> {
        self.reviews
            .iter()
            .filter(|review| {
                let by_id = review.product_id == product_id;
                let by_handle = product_handle
                    .is_some_and(|handle| review.product_handle.as_deref() == Some(handle));
                let handle_in_id_slot = review.product_handle.as_deref() == Some(product_id);
                by_id || by_handle || handle_in_id_slot
            })
            .cloned()
            .collect()
    }

    /// Aggregate statistics for a product. Unknown products get zeroed stats
    /// rather than an error.
    pub fn review_stats(&self, product_id: &str, product_handle: Option<&str>) -> ReviewStats {
        compute_stats(&self.product_reviews(product_id, product_handle))
    }

    pub fn reviews_by_rating(
        &self,
        product_id: &str,
        rating: u8,
        product_handle: Option<&str>,
    ) -> Vec<Review> {
        let mut reviews = self.product_reviews(product_id, product_handle);
        reviews.retain(|review| review.rating == rating);
        reviews
    }

    pub fn verified_reviews(&self, product_id: &str, product_handle: Option<&str>) -> Vec<Review> {
        let mut reviews = self.product_reviews(product_id, product_handle);
        reviews.retain(|review| review.verified);
        reviews
    }

    /// Reviews carrying any attachment: non-empty media, or a before/after
    /// pair even when the media list itself is empty.
    pub fn reviews_with_media(
        &self,
        product_id: &str,
        product_handle: Option<&str>,
    ) -> Vec<Review> {
        let mut reviews = self.product_reviews(product_id, product_handle);
        reviews.retain(Review::has_media);
        reviews
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use review_models::{BeforeAfter, ReviewLength};
    use std::io::Write;

    fn create_review(id: &str, product_id: &str, handle: Option<&str>, rating: u8) -> Review {
        Review {
            id: id.to_string(),
            product_id: product_id.to_string(),
            product_handle: handle.map(str::to_string),
            user_id: format!("user_{id}"),
            user_name: "Test U.".to_string(),
            user_initials: "TU".to_string(),
            rating,
            title: "A title".to_string(),
            content: "Some content".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
            verified: false,
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

    fn sample_store() -> ReviewStore {
        ReviewStore::new(vec![
            create_review("r1", "serum", Some("serum-handle"), 5),
            create_review("r2", "serum", Some("serum-handle"), 3),
            create_review("r3", "cleanser", Some("cleanser-handle"), 4),
        ])
        .unwrap()
    }

    #[test]
    fn test_unknown_product_yields_empty_results() {
        let store = sample_store();
        assert!(store.product_reviews("no-such-product", None).is_empty());
        assert_eq!(
            store.review_stats("no-such-product", None),
            ReviewStats::empty()
        );
    }

    #[test]
    fn test_lookup_matches_all_three_clauses() {
        let store = sample_store();
        // by product_id
        assert_eq!(store.product_reviews("serum", None).len(), 2);
        // by handle in the handle slot
        assert_eq!(
            store.product_reviews("unrelated", Some("serum-handle")).len(),
            2
        );
        // handle passed in the id slot
        assert_eq!(store.product_reviews("serum-handle", None).len(), 2);
    }

    #[test]
    fn test_missing_handle_does_not_match_handleless_reviews() {
        let store = ReviewStore::new(vec![create_review("r1", "serum", None, 5)]).unwrap();
        // Neither side has a handle; only the id clause may match
        assert!(store.product_reviews("other", None).is_empty());
        assert_eq!(store.product_reviews("serum", None).len(), 1);
    }

    #[test]
    fn test_rating_filter_partitions_product_reviews() {
        let store = sample_store();
        let all = store.product_reviews("serum", None);
        let mut reunion: Vec<Review> = Vec::new();
        for rating in 1..=5 {
            let bucket = store.reviews_by_rating("serum", rating, None);
            assert!(bucket.iter().all(|r| r.rating == rating));
            reunion.extend(bucket);
        }
        assert_eq!(reunion.len(), all.len());
        for review in &all {
            assert!(reunion.contains(review));
        }
    }

    #[test]
    fn test_verified_filter() {
        let mut verified = create_review("r1", "serum", None, 5);
        verified.verified = true;
        let store =
            ReviewStore::new(vec![verified, create_review("r2", "serum", None, 4)]).unwrap();
        let result = store.verified_reviews("serum", None);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "r1");
    }

    #[test]
    fn test_with_media_counts_before_after_only_reviews() {
        let mut with_pair = create_review("r1", "serum", None, 5);
        with_pair.before_after = Some(BeforeAfter {
            before: "https://b".to_string(),
            after: "https://a".to_string(),
            timeframe: "8 weeks".to_string(),
        });
        let bare = create_review("r2", "serum", None, 4);
        let store = ReviewStore::new(vec![with_pair, bare]).unwrap();
        let result = store.reviews_with_media("serum", None);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "r1");
    }

    #[test]
    fn test_out_of_range_rating_is_rejected() {
        let err = ReviewStore::new(vec![create_review("r1", "serum", None, 6)]).unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidRating { rating: 6, .. }
        ));
    }

    #[test]
    fn test_builtin_dataset_loads_and_matches_fixture_scenario() {
        let store = ReviewStore::builtin();
        assert_eq!(store.len(), 10);

        let stats = store.review_stats("hyaluronic-acid", Some("hyaluronic-acid-serum"));
        assert_eq!(stats.total_reviews, 3);
        assert_eq!(stats.average_rating, 4.7);
        assert_eq!(stats.percentage.five, 67);
        assert_eq!(stats.percentage.four, 33);
        assert_eq!(stats.verified_purchases, 3);
        assert_eq!(stats.would_recommend, 100);
    }

    #[test]
    fn test_builtin_preserves_insertion_order() {
        let store = ReviewStore::builtin();
        let reviews = store.product_reviews("hyaluronic-acid", None);
        let ids: Vec<&str> = reviews.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["rev_001", "rev_002", "rev_003"]);
    }

    #[test]
    fn test_load_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BUILTIN_DATASET.as_bytes()).unwrap();
        let store = ReviewStore::from_json_file(file.path()).unwrap();
        assert_eq!(store.len(), 10);
    }

    #[test]
    fn test_corrupt_dataset_is_a_parse_error() {
        let err = ReviewStore::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = ReviewStore::from_json_file(Path::new("/no/such/reviews.json")).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
