//! Coarse classification of HTTP status codes.
//!
//! [`StatusCategory`] maps the handful of status codes the framework knows about onto named
//! categories, each with a fixed reason phrase. Every other code falls back to
//! [`StatusCategory::Unknown`], so the mapping is total.

use http::StatusCode;
use std::fmt;

/// The category of a response status.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    Ok,
    Created,
    Accepted,
    MovedPermanently,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    InternalServerError,
    /// Any status code outside the fixed table
    Unknown,
}

impl StatusCategory {
    /// Classifies a status code. Never fails.
    pub fn from_status(status: StatusCode) -> Self {
        match status.as_u16() {
            200 => Self::Ok,
            201 => Self::Created,
            202 => Self::Accepted,
            301 => Self::MovedPermanently,
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            500 => Self::InternalServerError,
            _ => Self::Unknown,
        }
    }

    /// Human readable reason phrase of this category.
    pub fn reason_phrase(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Created => "Created",
            Self::Accepted => "Accepted",
            Self::MovedPermanently => "Moved Permanently",
            Self::BadRequest => "Bad Request",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not Found",
            Self::InternalServerError => "Internal Server Error",
            Self::Unknown => "Unknown",
        }
    }

    /// The status code this category was mapped from, `None` for [`StatusCategory::Unknown`].
    pub fn status(self) -> Option<StatusCode> {
        match self {
            Self::Ok => Some(StatusCode::OK),
            Self::Created => Some(StatusCode::CREATED),
            Self::Accepted => Some(StatusCode::ACCEPTED),
            Self::MovedPermanently => Some(StatusCode::MOVED_PERMANENTLY),
            Self::BadRequest => Some(StatusCode::BAD_REQUEST),
            Self::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            Self::Forbidden => Some(StatusCode::FORBIDDEN),
            Self::NotFound => Some(StatusCode::NOT_FOUND),
            Self::InternalServerError => Some(StatusCode::INTERNAL_SERVER_ERROR),
            Self::Unknown => None,
        }
    }
}

impl From<StatusCode> for StatusCategory {
    fn from(status: StatusCode) -> Self {
        Self::from_status(status)
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason_phrase())
    }
}
