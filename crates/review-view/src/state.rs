use review_models::Review;
use review_store::ReviewStore;
use tracing::debug;

use crate::collaborators::{ComposerRequest, MediaDescriptor, MediaViewer, ReviewComposer};
use crate::filter::FilterKey;
use crate::sort::SortKey;

/// Characters of content shown before the read-more affordance kicks in.
pub const TRUNCATE_AT: usize = 300;

/// Review content as it should be rendered for one review in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentView<'a> {
    pub text: &'a str,
    /// True when a read-more affordance should follow the text
    pub truncated: bool,
}

/// Ephemeral UI state for one product's review listing.
///
/// Owns the selected sort and filter, the expanded review, and which media
/// item (if any) is open full-screen. The listing itself is derived from the
/// store on every access; nothing here writes back to the store.
#[derive(Debug, Clone)]
pub struct ReviewList {
    product_id: String,
    product_handle: Option<String>,
    sort: SortKey,
    filter: FilterKey,
    expanded: Option<String>,
    open_media: Option<MediaDescriptor>,
    composing: bool,
}

impl ReviewList {
    pub fn new(product_id: impl Into<String>, product_handle: Option<String>) -> Self {
        Self {
            product_id: product_id.into(),
            product_handle,
            sort: SortKey::default(),
            filter: FilterKey::default(),
            expanded: None,
            open_media: None,
            composing: false,
        }
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn product_handle(&self) -> Option<&str> {
        self.product_handle.as_deref()
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    pub fn filter(&self) -> FilterKey {
        self.filter
    }

    pub fn set_filter(&mut self, filter: FilterKey) {
        self.filter = filter;
    }

    /// The derived view: the store's reviews for this product, filtered first,
    /// then stable-sorted by the current sort key.
    pub fn visible(&self, store: &ReviewStore) -> Vec<Review> {
        let mut reviews = store.product_reviews(&self.product_id, self.product_handle());
        let total = reviews.len();
        reviews.retain(|review| self.filter.matches(review));
        self.sort.apply(&mut reviews);
        debug!(
            "derived view for {}: {} of {} reviews (filter={}, sort={})",
            self.product_id,
            reviews.len(),
            total,
            self.filter,
            self.sort
        );
        reviews
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn is_expanded(&self, review_id: &str) -> bool {
        self.expanded.as_deref() == Some(review_id)
    }

    /// At most one review is expanded at a time.
    pub fn expand(&mut self, review_id: impl Into<String>) {
        self.expanded = Some(review_id.into());
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    /// Content for one review under the truncation policy: over
    /// [`TRUNCATE_AT`] characters renders cut with a read-more affordance,
    /// unless this review is the expanded one.
    pub fn content_view<'a>(&self, review: &'a Review) -> ContentView<'a> {
        if self.is_expanded(&review.id) {
            return ContentView {
                text: &review.content,
                truncated: false,
            };
        }
        match review.content.char_indices().nth(TRUNCATE_AT) {
            Some((cut, _)) => ContentView {
                text: &review.content[..cut],
                truncated: true,
            },
            None => ContentView {
                text: &review.content,
                truncated: false,
            },
        }
    }

    pub fn open_media_descriptor(&self) -> Option<&MediaDescriptor> {
        self.open_media.as_ref()
    }

    /// Hand a media descriptor to the viewer surface. Fire-and-forget: the
    /// viewer returns nothing the listing consumes.
    pub fn open_media(&mut self, viewer: &mut dyn MediaViewer, media: MediaDescriptor) {
        viewer.open(media.clone());
        self.open_media = Some(media);
    }

    pub fn close_media(&mut self, viewer: &mut dyn MediaViewer) {
        if self.open_media.take().is_some() {
            viewer.close();
        }
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }

    /// Open the write-review surface with this listing's product identity.
    pub fn open_composer(&mut self, composer: &mut dyn ReviewComposer, product_name: &str) {
        composer.open(ComposerRequest {
            product_id: self.product_id.clone(),
            product_name: product_name.to_string(),
        });
        self.composing = true;
    }

    pub fn close_composer(&mut self, composer: &mut dyn ReviewComposer) {
        if self.composing {
            composer.close();
            self.composing = false;
        }
    }
}
