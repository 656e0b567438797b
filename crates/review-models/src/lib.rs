pub mod media;
pub mod review;
pub mod stats;

pub use media::{BeforeAfter, MediaItem, MediaKind};
pub use review::{Review, ReviewLength};
pub use stats::{RatingBreakdown, ReviewStats};
