use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// User rating on a 0-5 scale, where 0 means "not rated"
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "i32", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const UNRATED: Rating = Rating(0);
    pub const MAX: u8 = 5;

    pub fn new(value: i32) -> Result<Self, ValidationError> {
        if (0..=Self::MAX as i32).contains(&value) {
            Ok(Rating(value as u8))
        } else {
            Err(ValidationError::RatingOutOfRange { value })
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_rated(&self) -> bool {
        self.0 != 0
    }
}

impl TryFrom<i32> for Rating {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_rated() {
            write!(f, "{}", self.0)
        } else {
            f.write_str("Not Rated")
        }
    }
}
