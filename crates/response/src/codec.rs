use crate::content::{Content, WriteStep};
use bytes::BytesMut;
use std::io;
use std::io::ErrorKind;
use tokio_util::codec::Encoder;
use tracing::{error, warn};

/// Encodes write steps into a framed transport, bounded by the announced content length.
///
/// Create it from the [`Content`] whose length was sent as `Content-Length`, then feed it the
/// matching [`WriteStep`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyEncoder {
    remaining: u64,
}

impl BodyEncoder {
    pub fn new(length: u64) -> Self {
        Self { remaining: length }
    }

    pub fn for_content(content: &Content) -> Self {
        Self::new(content.len())
    }

    /// Returns true once every announced byte has been encoded
    #[inline]
    pub fn is_finish(&self) -> bool {
        self.remaining == 0
    }
}

impl Encoder<WriteStep> for BodyEncoder {
    type Error = io::Error;

    fn encode(&mut self, item: WriteStep, dst: &mut BytesMut) -> Result<(), Self::Error> {
        if self.remaining == 0 {
            warn!("encode write step but no need to encode anymore");
            return Ok(());
        }

        let bytes = item.as_bytes();
        let len = bytes.len() as u64;
        if len > self.remaining {
            error!(len, remaining = self.remaining, "write step exceeds the announced content length");
            return Err(io::Error::from(ErrorKind::InvalidInput));
        }

        dst.extend_from_slice(bytes);
        self.remaining -= len;
        Ok(())
    }
}
