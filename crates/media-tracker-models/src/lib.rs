pub mod criteria;
pub mod error;
pub mod media;
pub mod rating;
pub mod status;

pub use criteria::{FilterCriteria, FilterField, FilterMode};
pub use error::ValidationError;
pub use media::{MediaDetails, MediaItem, MediaKind, Movie, TvShow};
pub use rating::Rating;
pub use status::{MovieStatus, Status, TvShowStatus};
