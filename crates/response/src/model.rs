use crate::content::Content;
use crate::finite::ensure_finite;
use crate::ident::ServerIdent;
use crate::status::StatusCategory;
use crate::ResponseError;
use bytes::Bytes;
use http::{header, HeaderMap, HeaderValue, StatusCode};
use mime::Mime;
use serde::Serialize;
use tracing::warn;

const HTML_PREFIX: &str = "<html><meta charset=\"UTF-8\"><body>";
const HTML_SUFFIX: &str = "</body></html>";

/// Selects the `Content-Type` treatment of a body.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum ContentKind {
    /// plain text, no `Content-Type` header
    Text,
    Html,
    Json,
    /// no `Content-Type` header
    #[default]
    None,
}

impl ContentKind {
    /// The media type announced for this kind, if any.
    pub fn mime(self) -> Option<Mime> {
        match self {
            ContentKind::Json => Some(mime::APPLICATION_JSON),
            ContentKind::Html => Some(mime::TEXT_HTML),
            ContentKind::Text | ContentKind::None => None,
        }
    }

    fn header_value(self) -> Option<HeaderValue> {
        self.mime().and_then(|mime| HeaderValue::from_str(mime.as_ref()).ok())
    }
}

/// Distinguishes plain responses from redirects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseKind {
    Plain,
    Redirect { location: String, value: HeaderValue },
}

/// An immutable HTTP response: status, body and content kind.
///
/// Category, reason phrase and headers are derived on demand and never stored. Two models are
/// equal when their status codes are equal; bodies and content kinds are ignored.
#[derive(Debug, Clone)]
pub struct ResponseModel {
    status: StatusCode,
    body: Bytes,
    content_kind: ContentKind,
    kind: ResponseKind,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: bool,
    message: &'a str,
}

impl ResponseModel {
    /// Creates a response from raw body bytes.
    pub fn new(status: StatusCode, body: impl Into<Bytes>, content_kind: ContentKind) -> Self {
        Self { status, body: body.into(), content_kind, kind: ResponseKind::Plain }
    }

    /// Creates a plain text response from the UTF-8 bytes of `text`.
    pub fn text(status: StatusCode, text: impl Into<String>) -> Self {
        Self::new(status, text.into(), ContentKind::Text)
    }

    /// Wraps `fragment` into a minimal html document.
    ///
    /// The fragment is embedded verbatim, nothing is escaped.
    pub fn html(status: StatusCode, fragment: &str) -> Self {
        let mut html = String::with_capacity(HTML_PREFIX.len() + fragment.len() + HTML_SUFFIX.len());
        html.push_str(HTML_PREFIX);
        html.push_str(fragment);
        html.push_str(HTML_SUFFIX);
        Self::new(status, html, ContentKind::Html)
    }

    /// Serializes `value` as pretty printed json.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseError::InvalidObject`] if `value` can not be represented as json, non-finite
    /// floats included, and [`ResponseError::NotSupported`] for serializer level failures.
    pub fn json<T: Serialize + ?Sized>(status: StatusCode, value: &T) -> Result<Self, ResponseError> {
        match ensure_finite(value).and_then(|()| serde_json::to_vec_pretty(value)) {
            Ok(body) => Ok(Self::new(status, body, ContentKind::Json)),
            Err(e) => {
                warn!(cause = %e, status = status.as_u16(), "failed to serialize json body");
                Err(e.into())
            }
        }
    }

    /// A `500` json response shaped as `{"error": true, "message": <message>}`.
    pub fn error(message: &str) -> Self {
        let body = ErrorBody { error: true, message };
        match Self::json(StatusCode::INTERNAL_SERVER_ERROR, &body) {
            Ok(response) => response,
            // a bool and a string always serialize
            Err(e) => unreachable!("error body must serialize: {e}"),
        }
    }

    pub(crate) fn redirect(location: String, value: HeaderValue) -> Self {
        Self {
            status: StatusCode::MOVED_PERMANENTLY,
            body: Bytes::new(),
            content_kind: ContentKind::None,
            kind: ResponseKind::Redirect { location, value },
        }
    }

    #[inline]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[inline]
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    #[inline]
    pub fn content_kind(&self) -> ContentKind {
        self.content_kind
    }

    #[inline]
    pub fn kind(&self) -> &ResponseKind {
        &self.kind
    }

    /// The redirect target, `None` unless this is a redirect.
    pub fn location(&self) -> Option<&str> {
        match &self.kind {
            ResponseKind::Plain => None,
            ResponseKind::Redirect { location, .. } => Some(location.as_str()),
        }
    }

    pub fn category(&self) -> StatusCategory {
        StatusCategory::from_status(self.status)
    }

    pub fn reason_phrase(&self) -> &'static str {
        self.category().reason_phrase()
    }

    /// Headers of this response, using the process-wide [`ServerIdent`].
    ///
    /// Every call returns a fresh map the caller is free to extend.
    pub fn headers(&self) -> HeaderMap {
        self.headers_with(ServerIdent::global())
    }

    /// Headers of this response, using an explicit [`ServerIdent`].
    pub fn headers_with(&self, ident: &ServerIdent) -> HeaderMap {
        compose_headers(ident, self.content_kind, &self.kind)
    }

    /// Body length and the deferred write step.
    pub fn content(&self) -> Content {
        Content::new(self.body.clone())
    }

    pub(crate) fn into_parts(self) -> (StatusCode, Bytes) {
        (self.status, self.body)
    }
}

impl PartialEq for ResponseModel {
    fn eq(&self, other: &Self) -> bool {
        self.status == other.status
    }
}

impl Eq for ResponseModel {}

fn compose_headers(ident: &ServerIdent, content_kind: ContentKind, kind: &ResponseKind) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(4);
    headers.insert(header::SERVER, ident.header_value().clone());

    if let Some(content_type) = content_kind.header_value() {
        headers.insert(header::CONTENT_TYPE, content_type);
    }

    match kind {
        ResponseKind::Plain => {}
        ResponseKind::Redirect { value, .. } => {
            headers.insert(header::LOCATION, value.clone());
        }
    }

    headers
}
