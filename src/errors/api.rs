use std::error::Error;
use std::fmt;

#[derive(Debug, Clone)]
pub enum ApiError {
    ApiCallError(String),
    BadStatus(u16),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::ApiCallError(error) => write!(f, "{}", *error),
            ApiError::BadStatus(status) => {
                write!(f, "Quote provider answered with status {status}")
            }
        }
    }
}

impl Error for ApiError {}
