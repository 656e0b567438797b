// External UI surfaces the review listing opens but never reads back from.
// Both are fire-and-forget: the listing hands over a descriptor or product
// identity and only ever signals close afterwards.

use review_models::{BeforeAfter, MediaItem, MediaKind};

/// What a full-screen media viewer needs to show one attachment.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaDescriptor {
    pub kind: MediaKind,
    pub url: String,
    pub caption: Option<String>,
}

impl MediaDescriptor {
    pub fn from_item(item: &MediaItem) -> Self {
        Self {
            kind: item.kind,
            url: item.url.clone(),
            caption: item.caption.clone(),
        }
    }

    /// The "before" half of a progress pair. Always an image.
    pub fn before(pair: &BeforeAfter) -> Self {
        Self {
            kind: MediaKind::Image,
            url: pair.before.clone(),
            caption: Some("Before".to_string()),
        }
    }

    pub fn after(pair: &BeforeAfter) -> Self {
        Self {
            kind: MediaKind::Image,
            url: pair.after.clone(),
            caption: Some("After".to_string()),
        }
    }
}

/// Full-screen media gallery surface.
pub trait MediaViewer {
    fn open(&mut self, media: MediaDescriptor);
    fn close(&mut self);
}

/// Product identity handed to the composition surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposerRequest {
    pub product_id: String,
    pub product_name: String,
}

/// "Write a review" surface. Whatever it submits is persisted elsewhere; no
/// result flows back into the listing.
pub trait ReviewComposer {
    fn open(&mut self, request: ComposerRequest);
    fn close(&mut self);
}
