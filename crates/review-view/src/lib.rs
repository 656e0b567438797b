pub mod collaborators;
pub mod filter;
pub mod sort;
pub mod state;

pub use collaborators::{ComposerRequest, MediaDescriptor, MediaViewer, ReviewComposer};
pub use filter::FilterKey;
pub use sort::SortKey;
pub use state::{ContentView, ReviewList, TRUNCATE_AT};
