pub mod compose;
pub mod list;
pub mod stats;
