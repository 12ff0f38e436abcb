pub mod error;
pub mod filter;
pub mod tracker;

pub use error::TrackerError;
pub use tracker::MediaTracker;
