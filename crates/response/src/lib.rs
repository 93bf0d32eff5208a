//! The http response model of micro-http
//!
//! This crate models an HTTP response as an immutable value: a status code, the body bytes and a
//! content kind. Everything else, the status category, the reason phrase and the headers, is
//! derived on demand. A [`RedirectResponse`] specializes the model to `301 Moved Permanently`
//! with a `Location` header.
//!
//! Socket handling, routing and request parsing are not part of this crate. The only thing
//! it needs from a transport is a [`BodyWriter`]: something that accepts a sequence of bytes.
//!
//! # Example
//!
//! ```
//! use http::StatusCode;
//! use micro_response::{ResponseModel, RedirectResponse, StatusCategory};
//!
//! let response = ResponseModel::json(StatusCode::CREATED, &serde_json::json!({"id": 7})).unwrap();
//! assert_eq!(response.category(), StatusCategory::Created);
//! assert_eq!(response.headers()["content-type"], "application/json");
//!
//! // length first, so `Content-Length` can be sent before the body
//! let content = response.content();
//! let mut out = Vec::new();
//! let length = content.len();
//! if let Some(step) = content.write_step() {
//!     step.write_to(&mut out).unwrap();
//! }
//! assert_eq!(out.len() as u64, length);
//!
//! let redirect = RedirectResponse::new("/login").unwrap();
//! assert_eq!(redirect.reason_phrase(), "Moved Permanently");
//! assert_eq!(redirect.headers()["location"], "/login");
//! ```
//!
//! # Construction
//!
//! - [`ResponseModel::new`]: raw bytes with an explicit [`ContentKind`]
//! - [`ResponseModel::text`]: UTF-8 text
//! - [`ResponseModel::html`]: a fragment wrapped into a minimal html document
//! - [`ResponseModel::json`]: a pretty printed `serde` value, the only fallible path
//! - [`ResponseModel::error`]: a canned `500` json body
//!
//! # Headers
//!
//! Every response carries a `Server` header taken from the process-wide [`ServerIdent`].
//! Install a custom one at startup with [`ServerIdent::install`], or pass one explicitly to
//! [`ResponseModel::headers_with`].
//!
//! # Writing the body
//!
//! [`ResponseModel::content`] returns a [`Content`]: its length is known right away, and its
//! [`WriteStep`] pushes the whole body into a [`BodyWriter`], an async writer, or a framed
//! transport through [`BodyEncoder`].

mod codec;
mod content;
mod convert;
mod error;
mod finite;
mod ident;
mod model;
mod redirect;
mod status;

pub use codec::BodyEncoder;
pub use content::{BodyWriter, Content, IoWriter, WriteStep};
pub use error::ResponseError;
pub use ident::ServerIdent;
pub use model::{ContentKind, ResponseKind, ResponseModel};
pub use redirect::RedirectResponse;
pub use status::StatusCategory;
