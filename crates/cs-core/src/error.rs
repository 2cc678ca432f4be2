use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid plan tier: {value} {location}")]
    InvalidPlan {
        value: String,
        location: ErrorLocation,
    },

    #[error("Unknown route: {value} {location}")]
    InvalidRoute {
        value: String,
        location: ErrorLocation,
    },

    #[error("Unknown feature: {value} {location}")]
    UnknownFeature {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
