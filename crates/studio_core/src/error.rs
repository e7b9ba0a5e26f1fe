use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageIndexError {
    #[error("page index {index} is out of range (expected 0..{count})")]
    OutOfRange { index: usize, count: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    #[error("invalid image url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("invalid {axis} dimension '{value}'")]
    InvalidDimension { axis: &'static str, value: String },
}
