use crate::model::ResponseModel;
use crate::ResponseError;
use http::HeaderValue;
use std::ops::Deref;

/// A `301 Moved Permanently` response carrying a `Location` header.
///
/// The body is always empty and no `Content-Type` is announced. Everything else behaves as the
/// wrapped [`ResponseModel`], which this type dereferences to.
#[derive(Debug, Clone)]
pub struct RedirectResponse {
    inner: ResponseModel,
}

impl RedirectResponse {
    /// Creates a redirect to `location`.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseError::InvalidHeaderValue`] if `location` contains bytes that are not
    /// allowed in a header value, such as CR or LF.
    pub fn new(location: impl Into<String>) -> Result<Self, ResponseError> {
        let location = location.into();
        let value = HeaderValue::from_str(&location)?;
        Ok(Self { inner: ResponseModel::redirect(location, value) })
    }

    /// Creates a redirect from a static location.
    ///
    /// # Panics
    ///
    /// Panics if `location` is not a valid header value.
    pub fn from_static(location: &'static str) -> Self {
        Self { inner: ResponseModel::redirect(location.to_owned(), HeaderValue::from_static(location)) }
    }

    pub fn location(&self) -> &str {
        self.inner.location().unwrap_or_default()
    }

    pub fn into_inner(self) -> ResponseModel {
        self.inner
    }
}

impl Deref for RedirectResponse {
    type Target = ResponseModel;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl PartialEq for RedirectResponse {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for RedirectResponse {}

impl AsRef<ResponseModel> for RedirectResponse {
    fn as_ref(&self) -> &ResponseModel {
        &self.inner
    }
}

impl From<RedirectResponse> for ResponseModel {
    fn from(redirect: RedirectResponse) -> Self {
        redirect.inner
    }
}

impl TryFrom<ResponseModel> for RedirectResponse {
    type Error = ResponseModel;

    /// Recovers the redirect view of a model built as a redirect, handing back anything else.
    fn try_from(model: ResponseModel) -> Result<Self, Self::Error> {
        if model.location().is_some() { Ok(Self { inner: model }) } else { Err(model) }
    }
}
