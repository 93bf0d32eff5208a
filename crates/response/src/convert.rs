//! Conversion into [`http::Response`] for transports built on the `http` ecosystem.

use crate::{RedirectResponse, ResponseModel};
use bytes::Bytes;
use http::{header, HeaderValue, Response};
use http_body_util::Full;

impl ResponseModel {
    /// Converts into an [`http::Response`], adding `Content-Length` to the composed headers.
    pub fn into_http_response(self) -> Response<Full<Bytes>> {
        let mut headers = self.headers();
        let (status, body) = self.into_parts();
        headers.insert(header::CONTENT_LENGTH, HeaderValue::from(body.len()));

        let mut response = Response::new(Full::new(body));
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        response
    }
}

impl From<ResponseModel> for Response<Full<Bytes>> {
    fn from(model: ResponseModel) -> Self {
        model.into_http_response()
    }
}

impl From<RedirectResponse> for Response<Full<Bytes>> {
    fn from(redirect: RedirectResponse) -> Self {
        redirect.into_inner().into_http_response()
    }
}
