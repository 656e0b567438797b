pub mod error;
pub mod stats;
pub mod store;

pub use error::StoreError;
pub use stats::compute_stats;
pub use store::ReviewStore;
