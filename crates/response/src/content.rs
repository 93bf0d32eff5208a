//! Deferred body emission.
//!
//! A response exposes its body in two steps: [`Content::len`] is known immediately, so a
//! transport can announce `Content-Length` before anything is written, and the optional
//! [`WriteStep`] hands the whole body to a [`BodyWriter`] once the transport is ready to accept it.
//!
//! A write step is consumed by value, so it can be run at most once. No buffering, chunking or
//! retry policy is applied to the hand-off: the body is passed in a single call.

use bytes::{BufMut, Bytes, BytesMut};
use std::convert::Infallible;
use std::io;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::trace;

/// A sink accepting the body bytes of a response.
pub trait BodyWriter {
    type Error;

    /// Accepts the entire body in one call.
    fn write_body(&mut self, body: Bytes) -> Result<(), Self::Error>;
}

impl BodyWriter for BytesMut {
    type Error = Infallible;

    fn write_body(&mut self, body: Bytes) -> Result<(), Self::Error> {
        self.put_slice(&body);
        Ok(())
    }
}

impl BodyWriter for Vec<u8> {
    type Error = Infallible;

    fn write_body(&mut self, body: Bytes) -> Result<(), Self::Error> {
        self.extend_from_slice(&body);
        Ok(())
    }
}

impl<W: BodyWriter + ?Sized> BodyWriter for &mut W {
    type Error = W::Error;

    fn write_body(&mut self, body: Bytes) -> Result<(), Self::Error> {
        (**self).write_body(body)
    }
}

/// Adapts any [`io::Write`] into a [`BodyWriter`].
#[derive(Debug)]
pub struct IoWriter<W> {
    inner: W,
}

impl<W: io::Write> IoWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> BodyWriter for IoWriter<W> {
    type Error = io::Error;

    fn write_body(&mut self, body: Bytes) -> Result<(), Self::Error> {
        self.inner.write_all(&body)
    }
}

/// The body of a response: its length, and the step that writes it.
#[derive(Debug, Clone)]
pub struct Content {
    body: Bytes,
}

impl Content {
    pub(crate) fn new(body: Bytes) -> Self {
        Self { body }
    }

    /// Number of body bytes, available without writing anything.
    #[inline]
    pub fn len(&self) -> u64 {
        self.body.len() as u64
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// The write step, `None` when there is nothing to write.
    pub fn write_step(self) -> Option<WriteStep> {
        if self.body.is_empty() { None } else { Some(WriteStep { body: self.body }) }
    }

    /// Splits into the body length and the optional write step.
    pub fn into_parts(self) -> (u64, Option<WriteStep>) {
        let len = self.len();
        (len, self.write_step())
    }
}

/// Hands a response body to a writer, once.
#[derive(Debug)]
pub struct WriteStep {
    body: Bytes,
}

impl WriteStep {
    /// Pushes the entire body into `writer` with a single [`BodyWriter::write_body`] call.
    ///
    /// # Errors
    ///
    /// Returns whatever error the writer reports.
    pub fn write_to<W: BodyWriter + ?Sized>(self, writer: &mut W) -> Result<(), W::Error> {
        trace!(len = self.body.len(), "writing response body");
        writer.write_body(self.body)
    }

    /// Pushes the entire body into an async writer.
    ///
    /// # Errors
    ///
    /// Returns the I/O error raised by `writer`.
    pub async fn write_to_async<W: AsyncWrite + Unpin + ?Sized>(self, writer: &mut W) -> io::Result<()> {
        trace!(len = self.body.len(), "writing response body");
        writer.write_all(&self.body).await
    }

    pub(crate) fn as_bytes(&self) -> &Bytes {
        &self.body
    }
}
