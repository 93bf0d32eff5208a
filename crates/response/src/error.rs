use serde_json::error::Category;
use thiserror::Error;

/// Errors raised while constructing a response.
///
/// Only construction can fail: once a [`ResponseModel`](crate::ResponseModel) exists, every
/// query on it is total. Failures while writing the body belong to the writer.
#[derive(Error, Debug)]
pub enum ResponseError {
    #[error("invalid json object: {reason}")]
    InvalidObject { reason: String },

    #[error("json serializer not supported: {reason}")]
    NotSupported { reason: String },

    #[error("invalid header value: {reason}")]
    InvalidHeaderValue { reason: String },
}

impl ResponseError {
    pub fn invalid_object<S: ToString>(str: S) -> Self {
        Self::InvalidObject { reason: str.to_string() }
    }

    pub fn not_supported<S: ToString>(str: S) -> Self {
        Self::NotSupported { reason: str.to_string() }
    }

    pub fn invalid_header_value<S: ToString>(str: S) -> Self {
        Self::InvalidHeaderValue { reason: str.to_string() }
    }
}

impl From<serde_json::Error> for ResponseError {
    fn from(e: serde_json::Error) -> Self {
        match e.classify() {
            Category::Data => Self::invalid_object(e),
            Category::Io | Category::Syntax | Category::Eof => Self::not_supported(e),
        }
    }
}

impl From<http::header::InvalidHeaderValue> for ResponseError {
    fn from(e: http::header::InvalidHeaderValue) -> Self {
        Self::invalid_header_value(e)
    }
}
